//! Resampler stage: long-edge scaling with a Catmull-Rom kernel.
//!
//! Images with any translucent pixel are filtered with premultiplied alpha, so
//! the color of fully transparent pixels never bleeds into visible ones.
//! Fully opaque images take the plain RGBA8 path.

use super::calculations::calculate_target_dimensions;
use super::params::TargetSize;
use super::pixels::PixelGrid;
use image::imageops::{self, FilterType};
use image::{Rgba, Rgba32FImage, RgbaImage};

/// Cubic convolution kernel used for both axes.
pub const RESAMPLE_FILTER: FilterType = FilterType::CatmullRom;

/// Scale `grid` so its longer edge is exactly `size`.
///
/// Consumes the input grid. When the computed short edge truncates to zero,
/// returns an empty grid rather than resampling; the encoder rejects it.
/// A grid already at the target dimensions is passed through untouched.
pub fn resample(grid: PixelGrid, size: TargetSize) -> PixelGrid {
    let target = calculate_target_dimensions(grid.dimensions(), size);
    log::debug!(
        "resampling {}x{} -> {}x{}",
        grid.width(),
        grid.height(),
        target.width,
        target.height
    );

    if target.is_empty() {
        return PixelGrid::empty(target.width, target.height);
    }
    if target == grid.dimensions() {
        return grid;
    }

    let source = grid.into_rgba();
    if source.pixels().all(|p| p.0[3] == u8::MAX) {
        return imageops::resize(&source, target.width, target.height, RESAMPLE_FILTER).into();
    }

    let scaled = imageops::resize(
        &premultiplied(&source),
        target.width,
        target.height,
        RESAMPLE_FILTER,
    );
    unpremultiplied(&scaled).into()
}

fn premultiplied(source: &RgbaImage) -> Rgba32FImage {
    Rgba32FImage::from_fn(source.width(), source.height(), |x, y| {
        let [r, g, b, a] = source.get_pixel(x, y).0.map(|c| f32::from(c) / 255.0);
        Rgba([r * a, g * a, b * a, a])
    })
}

fn unpremultiplied(scaled: &Rgba32FImage) -> RgbaImage {
    let quantize = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    RgbaImage::from_fn(scaled.width(), scaled.height(), |x, y| {
        let [r, g, b, a] = scaled.get_pixel(x, y).0;
        let alpha = quantize(a);
        if alpha == 0 {
            return Rgba([0, 0, 0, 0]);
        }
        Rgba([quantize(r / a), quantize(g / a), quantize(b / a), alpha])
    })
}
