//! Pure Rust thumbnail backend.
//!
//! ## Crate mapping
//!
//! | Stage | Crate / function |
//! |---|---|
//! | Classify | `image::guess_format` (signature bytes) |
//! | Decode (GIF, JPEG, PNG) | `image::ImageReader::with_format` |
//! | Resample | `image::imageops::resize` with `CatmullRom` filter |
//! | Encode | `image::codecs::{gif, jpeg, png}` encoders |

use super::backend::{DecodedImage, ThumbnailBackend, ThumbnailError};
use super::format::FormatTag;
use super::params::TargetSize;
use super::pixels::PixelGrid;
use super::{decode, encode, resample};

/// Backend using the `image` crate ecosystem.
///
/// Holds no state, so one instance can serve any number of concurrent calls.
/// See the [module docs](self) for the crate-to-stage mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ThumbnailBackend for RustBackend {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, ThumbnailError> {
        decode::decode(bytes)
    }

    fn resample(&self, grid: PixelGrid, size: TargetSize) -> Result<PixelGrid, ThumbnailError> {
        Ok(resample::resample(grid, size))
    }

    fn encode(&self, grid: PixelGrid, format: FormatTag) -> Result<Vec<u8>, ThumbnailError> {
        encode::encode(grid, format)
    }
}
