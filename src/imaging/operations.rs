//! High-level thumbnail operations.
//!
//! These functions thread the format tag from decode to encode and own the
//! stream boundaries: input is read to completion once, output is written
//! once, and nothing is written when any stage fails.

use super::backend::{ThumbnailBackend, ThumbnailError};
use super::format::FormatTag;
use super::params::TargetSize;
use super::pixels::Dimensions;
use std::io::{Read, Write};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, ThumbnailError>;

/// An encoded thumbnail and what it was made from.
#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    pub bytes: Vec<u8>,
    pub format: FormatTag,
    pub original: Dimensions,
    pub dimensions: Dimensions,
}

/// Summary of a streamed [`make_thumbnail`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailInfo {
    pub format: FormatTag,
    pub original: Dimensions,
    pub dimensions: Dimensions,
    pub bytes_read: usize,
    pub bytes_written: usize,
}

/// Decode, resample and re-encode an in-memory image.
pub fn create_thumbnail(
    backend: &impl ThumbnailBackend,
    source: &[u8],
    size: TargetSize,
) -> Result<Thumbnail> {
    let decoded = backend.decode(source)?;
    let format = decoded.format;
    let original = decoded.grid.dimensions();

    let resampled = backend.resample(decoded.grid, size)?;
    let dimensions = resampled.dimensions();

    let bytes = backend.encode(resampled, format)?;
    Ok(Thumbnail {
        bytes,
        format,
        original,
        dimensions,
    })
}

/// Stream variant of [`create_thumbnail`].
///
/// Reads `input` to the end, then writes the whole thumbnail to `output` in
/// a single `write_all`. The output is flushed before returning.
pub fn make_thumbnail(
    backend: &impl ThumbnailBackend,
    input: &mut impl Read,
    output: &mut impl Write,
    size: TargetSize,
) -> Result<ThumbnailInfo> {
    let mut source = Vec::new();
    input.read_to_end(&mut source)?;

    let thumb = create_thumbnail(backend, &source, size)?;
    output.write_all(&thumb.bytes)?;
    output.flush()?;

    Ok(ThumbnailInfo {
        format: thumb.format,
        original: thumb.original,
        dimensions: thumb.dimensions,
        bytes_read: source.len(),
        bytes_written: thumb.bytes.len(),
    })
}
