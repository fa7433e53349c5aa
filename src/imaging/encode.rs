//! Encoder stage.
//!
//! Every [`FormatTag`] variant has its own arm below; there is no fallback
//! branch. Encoder settings are the `image` defaults for each format:
//!
//! | Format | Settings |
//! |---|---|
//! | PNG | lossless RGBA, default compression |
//! | JPEG | quality 75, RGB (alpha is dropped) |
//! | GIF | single frame, NeuQuant palette from RGBA |

use super::backend::ThumbnailError;
use super::format::FormatTag;
use super::pixels::PixelGrid;
use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder};

/// Serialize `grid` in `format`, returning the complete encoded bytes.
pub fn encode(grid: PixelGrid, format: FormatTag) -> Result<Vec<u8>, ThumbnailError> {
    if grid.is_empty() {
        return Err(ThumbnailError::EncodingError(format!(
            "cannot encode empty {}x{} image as {format}",
            grid.width(),
            grid.height()
        )));
    }

    let mut buf = Vec::new();
    let written = match format {
        FormatTag::Gif => encode_gif(&grid, &mut buf),
        FormatTag::Jpeg => encode_jpeg(grid, &mut buf),
        FormatTag::Png => encode_png(&grid, &mut buf),
    };
    written
        .map_err(|e| ThumbnailError::EncodingError(format!("failed to encode {format}: {e}")))?;

    Ok(buf)
}

fn encode_png(grid: &PixelGrid, buf: &mut Vec<u8>) -> image::ImageResult<()> {
    PngEncoder::new(buf).write_image(
        grid.as_raw(),
        grid.width(),
        grid.height(),
        ExtendedColorType::Rgba8,
    )
}

fn encode_jpeg(grid: PixelGrid, buf: &mut Vec<u8>) -> image::ImageResult<()> {
    let rgb = DynamicImage::ImageRgba8(grid.into_rgba()).into_rgb8();
    JpegEncoder::new(buf).write_image(
        rgb.as_raw(),
        rgb.width(),
        rgb.height(),
        ExtendedColorType::Rgb8,
    )
}

fn encode_gif(grid: &PixelGrid, buf: &mut Vec<u8>) -> image::ImageResult<()> {
    // The trailer is written when the encoder drops, so keep it scoped here.
    let mut encoder = GifEncoder::new(buf);
    encoder.encode(
        grid.as_raw(),
        grid.width(),
        grid.height(),
        ExtendedColorType::Rgba8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::decode::decode;
    use image::{Rgba, RgbaImage};

    fn gradient(w: u32, h: u32) -> PixelGrid {
        RgbaImage::from_fn(w, h, |x, y| Rgba([(x * 8) as u8, (y * 8) as u8, 128, 255])).into()
    }

    #[test]
    fn every_format_reencodes_to_its_own_tag() {
        for format in FormatTag::ALL {
            let bytes = encode(gradient(12, 7), format).unwrap();
            assert_eq!(FormatTag::detect(&bytes), Some(format), "{format}");

            let decoded = decode(&bytes).unwrap();
            assert_eq!(decoded.format, format);
            assert_eq!((decoded.grid.width(), decoded.grid.height()), (12, 7));
        }
    }

    #[test]
    fn png_is_lossless() {
        let grid = gradient(9, 9);
        let expected = grid.clone();
        let decoded = decode(&encode(grid, FormatTag::Png).unwrap()).unwrap();
        assert_eq!(decoded.grid, expected);
    }

    #[test]
    fn jpeg_ignores_alpha() {
        let grid: PixelGrid = RgbaImage::from_pixel(8, 8, Rgba([10, 200, 10, 0])).into();
        let decoded = decode(&encode(grid, FormatTag::Jpeg).unwrap()).unwrap();
        assert!(decoded.grid.as_rgba().pixels().all(|p| p.0[3] == 255));
    }

    #[test]
    fn empty_grid_is_an_encoding_error() {
        for format in FormatTag::ALL {
            let err = encode(PixelGrid::empty(10, 0), format).unwrap_err();
            assert!(matches!(err, ThumbnailError::EncodingError(_)), "{format}");
        }
    }

    #[test]
    fn oversized_gif_is_an_encoding_error() {
        // GIF frames are limited to u16 dimensions
        let grid = PixelGrid::empty(70_000, 1);
        let err = encode(grid, FormatTag::Gif).unwrap_err();
        assert!(matches!(err, ThumbnailError::EncodingError(_)));
    }
}
