//! Thumbnail transform — pure Rust, built on the `image` crate.
//!
//! | Stage | Module |
//! |---|---|
//! | **Classify + decode** | [`decode`] — signature sniffing, GIF/JPEG/PNG decoders |
//! | **Resample** | [`resample`] — long-edge geometry + Catmull-Rom |
//! | **Encode** | [`encode`] — same format the input was decoded from |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Validated inputs ([`TargetSize`])
//! - **Backend**: [`ThumbnailBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions chaining the backend stages

pub mod backend;
mod calculations;
pub mod decode;
pub mod encode;
mod format;
pub mod operations;
mod params;
mod pixels;
pub mod resample;
pub mod rust_backend;

pub use backend::{DecodedImage, ThumbnailBackend, ThumbnailError};
pub use calculations::calculate_target_dimensions;
pub use decode::identify;
pub use format::FormatTag;
pub use operations::{Thumbnail, ThumbnailInfo, create_thumbnail, make_thumbnail};
pub use params::TargetSize;
pub use pixels::{Dimensions, PixelGrid};
pub use rust_backend::RustBackend;
