//! Circle icon rasterization shared by the `icon-gen` tools.
//!
//! The geometry is computed once into a [`Canvas`]; the PNG and PPM encoders
//! both read from that same canvas so the two outputs never drift apart.

use image::{ImageBuffer, Rgba};
use thiserror::Error;

pub mod png;
pub mod ppm;

pub use png::{encode_png, write_png};
pub use ppm::{save_ppm, write_ppm};

/// Brand purple, `#7700FF`.
pub const FOREGROUND: Rgba<u8> = Rgba([119, 0, 255, 255]);
pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("stream write failed: {0}")]
    Stream(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RasterError>;

/// Square RGBA pixel grid.
#[derive(Debug, Clone)]
pub struct Canvas {
    img: ImageBuffer<Rgba<u8>, Vec<u8>>,
}

impl Canvas {
    pub fn new(size: u32, fill: Rgba<u8>) -> Self {
        Self { img: ImageBuffer::from_pixel(size, size, fill) }
    }

    pub fn size(&self) -> u32 {
        self.img.width()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.img.get_pixel(x, y)
    }

    pub fn put_pixel(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        self.img.put_pixel(x, y, color);
    }

    /// Row-major iterator over `(x, y, pixel)`.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, &Rgba<u8>)> {
        self.img.enumerate_pixels()
    }

    pub(crate) fn as_image(&self) -> &ImageBuffer<Rgba<u8>, Vec<u8>> {
        &self.img
    }
}

/// A filled circle centered on a square canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleIcon {
    pub size: u32,
    pub radius: u32,
    pub foreground: Rgba<u8>,
    pub background: Rgba<u8>,
}

impl Default for CircleIcon {
    /// 1024px canvas, circle inset by a 160px margin on every side.
    fn default() -> Self {
        Self {
            size: 1024,
            radius: 352,
            foreground: FOREGROUND,
            background: BACKGROUND,
        }
    }
}

impl CircleIcon {
    pub fn center(&self) -> (i64, i64) {
        let c = (self.size / 2) as i64;
        (c, c)
    }

    /// Closed-form inside test, exact in integer arithmetic.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        let (cx, cy) = self.center();
        let dx = x as i64 - cx;
        let dy = y as i64 - cy;
        let r = self.radius as i64;
        dx * dx + dy * dy <= r * r
    }

    pub fn rasterize(&self) -> Canvas {
        let mut canvas = Canvas::new(self.size, self.background);
        for y in 0..self.size {
            for x in 0..self.size {
                if self.contains(x, y) {
                    canvas.put_pixel(x, y, self.foreground);
                }
            }
        }
        log::debug!(
            "rasterized {}x{} canvas, radius {}",
            self.size,
            self.size,
            self.radius
        );
        canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_geometry_matches_margin() {
        let icon = CircleIcon::default();
        assert_eq!(icon.center(), (512, 512));
        // 160px margin: leftmost foreground column sits at x = 160
        assert!(icon.contains(160, 512));
        assert!(!icon.contains(159, 512));
        assert!(icon.contains(864, 512));
        assert!(!icon.contains(865, 512));
    }

    #[test]
    fn corners_are_background() {
        let canvas = CircleIcon::default().rasterize();
        let last = canvas.size() - 1;
        for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
            assert_eq!(canvas.pixel(x, y), BACKGROUND);
        }
        assert_eq!(canvas.pixel(512, 512), FOREGROUND);
    }
}
