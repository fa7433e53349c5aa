//! Parameter types for the thumbnail transform.
//!
//! - [`TargetSize`] — the desired long-edge length in pixels. Validated on
//!   construction, so a value of this type is always usable.

use super::backend::ThumbnailError;
use std::fmt;
use std::num::NonZeroU32;

/// Desired length, in pixels, of the thumbnail's longer edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TargetSize(NonZeroU32);

impl TargetSize {
    /// Validate a caller-supplied size.
    ///
    /// Fails with [`ThumbnailError::InvalidTargetSize`] for zero, negative,
    /// or values that do not fit a `u32` pixel count.
    pub fn new(value: i64) -> Result<Self, ThumbnailError> {
        u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or(ThumbnailError::InvalidTargetSize(value))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}
