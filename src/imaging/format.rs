//! Raster format classification.
//!
//! The set of formats is closed: anything the `image` crate recognizes but
//! which is not GIF, JPEG or PNG is rejected as unsupported. Classification
//! looks only at the leading bytes, never at a filename.

use image::ImageFormat;
use std::fmt;

/// A raster encoding the thumbnailer can both read and write.
///
/// The tag recovered at decode time is the tag used at encode time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatTag {
    Gif,
    Jpeg,
    Png,
}

impl FormatTag {
    /// All supported formats, in a stable order.
    pub const ALL: [FormatTag; 3] = [FormatTag::Gif, FormatTag::Jpeg, FormatTag::Png];

    /// Classify a byte stream by its signature.
    ///
    /// Returns `None` when the bytes match no format, or match a format
    /// outside the supported set (BMP, WebP, ...).
    pub fn detect(bytes: &[u8]) -> Option<Self> {
        image::guess_format(bytes)
            .ok()
            .and_then(Self::from_image_format)
    }

    pub fn from_image_format(format: ImageFormat) -> Option<Self> {
        match format {
            ImageFormat::Gif => Some(FormatTag::Gif),
            ImageFormat::Jpeg => Some(FormatTag::Jpeg),
            ImageFormat::Png => Some(FormatTag::Png),
            _ => None,
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            FormatTag::Gif => ImageFormat::Gif,
            FormatTag::Jpeg => ImageFormat::Jpeg,
            FormatTag::Png => ImageFormat::Png,
        }
    }

    /// Lowercase short name, matching the source's decoder registry names.
    pub fn name(self) -> &'static str {
        match self {
            FormatTag::Gif => "gif",
            FormatTag::Jpeg => "jpeg",
            FormatTag::Png => "png",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            FormatTag::Gif => "image/gif",
            FormatTag::Jpeg => "image/jpeg",
            FormatTag::Png => "image/png",
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
