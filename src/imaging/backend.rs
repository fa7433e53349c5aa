//! Thumbnail backend trait and shared types.
//!
//! The [`ThumbnailBackend`] trait defines the three stages every backend must
//! support: decode, resample, and encode. Each stage takes ownership of its
//! input and hands a fresh value to the next one.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate.

use super::format::FormatTag;
use super::params::TargetSize;
use super::pixels::PixelGrid;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThumbnailError {
    #[error("unsupported image format: expected GIF, JPEG or PNG")]
    UnsupportedFormat,
    #[error("corrupt image data: {0}")]
    CorruptData(String),
    #[error("image exceeds decoder limits: {0}")]
    LimitExceeded(String),
    #[error("invalid target size {0}: must be a positive integer")]
    InvalidTargetSize(i64),
    #[error("encoding failed: {0}")]
    EncodingError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Output of the decode stage: the pixels plus the format they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub grid: PixelGrid,
    pub format: FormatTag,
}

/// Trait for thumbnail backends.
///
/// Orchestration in [`operations`](super::operations) only talks to this
/// trait, so tests can swap in a recording mock.
pub trait ThumbnailBackend: Sync {
    /// Classify and decode a complete byte stream.
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, ThumbnailError>;

    /// Scale so the longer edge becomes `size`, preserving aspect ratio.
    fn resample(&self, grid: PixelGrid, size: TargetSize) -> Result<PixelGrid, ThumbnailError>;

    /// Serialize in exactly the given format.
    fn encode(&self, grid: PixelGrid, format: FormatTag) -> Result<Vec<u8>, ThumbnailError>;
}
