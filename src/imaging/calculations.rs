//! Pure calculation functions for thumbnail dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

use super::params::TargetSize;
use super::pixels::Dimensions;

/// Calculate long-edge thumbnail dimensions.
///
/// The longer of `width`/`height` becomes exactly `target`; the shorter one is
/// scaled proportionally with integer truncation. A square source takes the
/// portrait branch, so it always comes out `target × target`.
///
/// The shorter edge can truncate to zero for extreme aspect ratios
/// (1000×1 at target 10 → 10×0). Callers must treat that as an empty result.
///
/// # Examples
/// ```
/// # use thumbnail_maker::imaging::{Dimensions, TargetSize, calculate_target_dimensions};
/// let size = TargetSize::new(100).unwrap();
/// assert_eq!(
///     calculate_target_dimensions(Dimensions::new(800, 400), size),
///     Dimensions::new(100, 50)
/// );
/// assert_eq!(
///     calculate_target_dimensions(Dimensions::new(333, 1000), size),
///     Dimensions::new(33, 100)
/// );
/// ```
pub fn calculate_target_dimensions(original: Dimensions, target: TargetSize) -> Dimensions {
    let Dimensions { width, height } = original;
    let t = target.get();
    let long = original.long_edge();

    if width > height {
        Dimensions::new(t, scale_edge(height, t, long))
    } else {
        Dimensions::new(scale_edge(width, t, long), t)
    }
}

/// `floor(short * target / long)` computed in u64 so large images at large
/// targets cannot overflow.
fn scale_edge(short: u32, target: u32, long: u32) -> u32 {
    if long == 0 {
        return 0;
    }
    // short <= long, so the quotient never exceeds target
    (short as u64 * target as u64 / long as u64) as u32
}
