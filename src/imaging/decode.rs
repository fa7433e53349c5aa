//! Decoder/classifier stage.
//!
//! Bytes are classified by signature first, then handed to the matching
//! `image` decoder. A signature outside the supported set is
//! [`UnsupportedFormat`](ThumbnailError::UnsupportedFormat); a supported
//! signature that fails to parse is [`CorruptData`](ThumbnailError::CorruptData).
//! A well-formed image too large for the decoder's allocation limits is
//! [`LimitExceeded`](ThumbnailError::LimitExceeded).

use super::backend::{DecodedImage, ThumbnailError};
use super::format::FormatTag;
use super::pixels::{Dimensions, PixelGrid};
use image::{ImageError, ImageReader};
use std::io::Cursor;

fn classify(bytes: &[u8]) -> Result<FormatTag, ThumbnailError> {
    FormatTag::detect(bytes).ok_or(ThumbnailError::UnsupportedFormat)
}

fn reader_for(bytes: &[u8], format: FormatTag) -> ImageReader<Cursor<&[u8]>> {
    ImageReader::with_format(Cursor::new(bytes), format.image_format())
}

fn decode_error(format: FormatTag, err: ImageError) -> ThumbnailError {
    match err {
        ImageError::Limits(limit) => {
            ThumbnailError::LimitExceeded(format!("{format} image: {limit}"))
        }
        other => ThumbnailError::CorruptData(format!("failed to decode {format}: {other}")),
    }
}

/// Decode a complete byte stream into an RGBA grid plus its format tag.
///
/// Animated GIFs yield their first frame.
pub fn decode(bytes: &[u8]) -> Result<DecodedImage, ThumbnailError> {
    let format = classify(bytes)?;
    let image = reader_for(bytes, format)
        .decode()
        .map_err(|e| decode_error(format, e))?;

    let grid = PixelGrid::from(image);
    if grid.is_empty() {
        return Err(ThumbnailError::CorruptData(format!(
            "{format} image has zero-sized dimensions"
        )));
    }
    log::debug!("decoded {format} image {}x{}", grid.width(), grid.height());
    Ok(DecodedImage { grid, format })
}

/// Read format and dimensions from the image header without decoding pixels.
pub fn identify(bytes: &[u8]) -> Result<(FormatTag, Dimensions), ThumbnailError> {
    let format = classify(bytes)?;
    let (width, height) = reader_for(bytes, format)
        .into_dimensions()
        .map_err(|e| decode_error(format, e))?;
    Ok((format, Dimensions::new(width, height)))
}
