//! In-memory pixel storage handed between the transform stages.

use image::{DynamicImage, RgbaImage};

/// Width and height of an image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Length of the longer edge.
    pub fn long_edge(self) -> u32 {
        self.width.max(self.height)
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Row-major RGBA8 pixel buffer.
///
/// The buffer always holds exactly `width * height * 4` bytes. Grids are
/// moved from stage to stage; no stage edits another stage's buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    pixels: RgbaImage,
}

impl PixelGrid {
    /// Number of samples per pixel.
    pub const CHANNELS: usize = 4;

    /// A grid with no pixels at the given (possibly zero) dimensions.
    pub(crate) fn empty(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width(), self.height())
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions().is_empty()
    }

    /// Raw RGBA samples, row-major.
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_rgba(self) -> RgbaImage {
        self.pixels
    }
}

impl From<RgbaImage> for PixelGrid {
    fn from(pixels: RgbaImage) -> Self {
        Self { pixels }
    }
}

impl From<DynamicImage> for PixelGrid {
    /// Normalizes any decoded color model to RGBA8.
    fn from(image: DynamicImage) -> Self {
        Self {
            pixels: image.into_rgba8(),
        }
    }
}
