//! End-to-end checks of the thumbnail transform through the public API.
//!
//! Source images are synthesized in-test with the `image` crate, so there are
//! no binary fixtures to keep in sync.

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use thumbnail_maker::imaging::{
    Dimensions, FormatTag, RustBackend, TargetSize, ThumbnailError, create_thumbnail, identify,
    make_thumbnail,
};

fn encode(image: DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, format).unwrap();
    buf.into_inner()
}

fn checkerboard(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, y| {
        if (x / 8 + y / 8) % 2 == 0 {
            Rgba([240, 240, 240, 255])
        } else {
            Rgba([20, 40, 160, 255])
        }
    })
}

fn source(w: u32, h: u32, format: ImageFormat) -> Vec<u8> {
    let image = DynamicImage::ImageRgba8(checkerboard(w, h));
    match format {
        // JPEG cannot carry alpha
        ImageFormat::Jpeg => encode(DynamicImage::ImageRgb8(image.to_rgb8()), format),
        _ => encode(image, format),
    }
}

fn size(t: i64) -> TargetSize {
    TargetSize::new(t).unwrap()
}

#[test]
fn png_800x400_at_100_is_100x50_png() {
    let input = source(800, 400, ImageFormat::Png);
    let thumb = create_thumbnail(&RustBackend::new(), &input, size(100)).unwrap();

    assert_eq!(thumb.format, FormatTag::Png);
    let decoded = image::load_from_memory(&thumb.bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (100, 50));
    assert_eq!(image::guess_format(&thumb.bytes).unwrap(), ImageFormat::Png);
}

#[test]
fn gif_300x300_at_50_is_50x50_gif() {
    let input = source(300, 300, ImageFormat::Gif);
    let thumb = create_thumbnail(&RustBackend::new(), &input, size(50)).unwrap();

    assert_eq!(thumb.format, FormatTag::Gif);
    let (format, dims) = identify(&thumb.bytes).unwrap();
    assert_eq!(format, FormatTag::Gif);
    assert_eq!(dims, Dimensions::new(50, 50));
}

#[test]
fn every_format_keeps_its_tag() {
    for (format, tag) in [
        (ImageFormat::Gif, FormatTag::Gif),
        (ImageFormat::Jpeg, FormatTag::Jpeg),
        (ImageFormat::Png, FormatTag::Png),
    ] {
        let thumb = create_thumbnail(&RustBackend::new(), &source(120, 90, format), size(40))
            .unwrap();
        assert_eq!(thumb.format, tag);
        assert_eq!(FormatTag::detect(&thumb.bytes), Some(tag), "{tag}");
        assert_eq!(thumb.dimensions, Dimensions::new(40, 30), "{tag}");
    }
}

#[test]
fn long_edge_matches_target_for_portrait_and_landscape() {
    let backend = RustBackend::new();
    for (w, h, t, expected) in [
        (640, 480, 64, (64, 48)),
        (480, 640, 64, (48, 64)),
        (1000, 599, 100, (100, 59)),
        (599, 1000, 100, (59, 100)),
        (37, 23, 10, (10, 6)),
    ] {
        let thumb = create_thumbnail(&backend, &source(w, h, ImageFormat::Png), size(t)).unwrap();
        let (_, dims) = identify(&thumb.bytes).unwrap();
        assert_eq!((dims.width, dims.height), expected, "{w}x{h} at {t}");
    }
}

#[test]
fn upscaling_small_images() {
    let input = source(20, 10, ImageFormat::Jpeg);
    let thumb = create_thumbnail(&RustBackend::new(), &input, size(60)).unwrap();
    let (format, dims) = identify(&thumb.bytes).unwrap();
    assert_eq!(format, FormatTag::Jpeg);
    assert_eq!(dims, Dimensions::new(60, 30));
}

#[test]
fn repeated_transform_is_dimension_stable() {
    let backend = RustBackend::new();
    let first = create_thumbnail(&backend, &source(256, 256, ImageFormat::Png), size(64)).unwrap();
    let second = create_thumbnail(&backend, &first.bytes, size(64)).unwrap();

    assert_eq!(second.format, FormatTag::Png);
    assert_eq!(second.original, Dimensions::new(64, 64));
    assert_eq!(second.dimensions, Dimensions::new(64, 64));
}

#[test]
fn grayscale_png_is_accepted() {
    let gray = DynamicImage::ImageLuma8(image::GrayImage::from_pixel(50, 25, image::Luma([90])));
    let thumb =
        create_thumbnail(&RustBackend::new(), &encode(gray, ImageFormat::Png), size(10)).unwrap();
    assert_eq!(thumb.dimensions, Dimensions::new(10, 5));
}

#[test]
fn transparent_png_edge_keeps_opaque_color() {
    let image = RgbaImage::from_fn(64, 8, |x, _| {
        if x < 32 {
            Rgba([255, 0, 0, 0])
        } else {
            Rgba([0, 0, 255, 255])
        }
    });
    let input = encode(DynamicImage::ImageRgba8(image), ImageFormat::Png);

    let thumb = create_thumbnail(&RustBackend::new(), &input, size(16)).unwrap();
    let decoded = image::load_from_memory(&thumb.bytes).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (16, 2));
    for px in decoded.pixels().filter(|p| p.0[3] > 0) {
        assert_eq!(&px.0[..3], &[0, 0, 255], "{:?}", px.0);
    }
}

#[test]
fn non_positive_target_size_is_rejected_up_front() {
    for bad in [0, -1, -800] {
        assert!(matches!(
            TargetSize::new(bad),
            Err(ThumbnailError::InvalidTargetSize(v)) if v == bad
        ));
    }
}

#[test]
fn unsupported_bytes_are_rejected() {
    let backend = RustBackend::new();
    // BMP file header: recognized signature, but not a supported format
    let mut bmp = b"BM".to_vec();
    bmp.extend_from_slice(&[0u8; 52]);

    for input in [&b"plain text, not pixels"[..], &bmp[..], &[0u8; 0][..]] {
        let mut output = Vec::new();
        let err = make_thumbnail(&backend, &mut &input[..], &mut output, size(10)).unwrap_err();
        assert!(matches!(err, ThumbnailError::UnsupportedFormat));
        assert!(output.is_empty());
    }
}

#[test]
fn malformed_jpeg_is_corrupt() {
    let mut jpeg = source(64, 64, ImageFormat::Jpeg);
    // Keep the SOI marker and signature, destroy everything after it.
    for b in jpeg.iter_mut().skip(3) {
        *b = 0;
    }

    let mut output = Vec::new();
    let err = make_thumbnail(&RustBackend::new(), &mut jpeg.as_slice(), &mut output, size(10))
        .unwrap_err();
    assert!(matches!(err, ThumbnailError::CorruptData(_)), "{err:?}");
    assert!(output.is_empty());
}

#[test]
fn collapsed_short_edge_is_an_encoding_error() {
    let mut output = Vec::new();
    let err = make_thumbnail(
        &RustBackend::new(),
        &mut source(1000, 1, ImageFormat::Png).as_slice(),
        &mut output,
        size(10),
    )
    .unwrap_err();

    assert!(matches!(err, ThumbnailError::EncodingError(_)));
    assert!(output.is_empty());
}

#[test]
fn make_thumbnail_streams_whole_result() {
    let input = source(200, 100, ImageFormat::Png);
    let mut output = Vec::new();

    let info = make_thumbnail(&RustBackend::new(), &mut input.as_slice(), &mut output, size(50))
        .unwrap();

    assert_eq!(info.bytes_read, input.len());
    assert_eq!(info.bytes_written, output.len());
    assert_eq!(info.original, Dimensions::new(200, 100));
    assert_eq!(info.dimensions, Dimensions::new(50, 25));
    assert_eq!(identify(&output).unwrap().1, Dimensions::new(50, 25));
}
