//! Drawing-surface abstraction.
//!
//! The simulation never talks to a platform canvas directly. It issues clear,
//! filled-disc and stroked-segment primitives through [`DrawSurface`], which the
//! web frontend implements on top of a 2D canvas context and tests implement
//! with a recorder.

use glam::Vec2;

/// Width/height of the drawing area in pixels.
///
/// Zero or negative sizes show up during layout transitions and are tolerated
/// everywhere; they only produce degenerate draws.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self::new(width as f32, height as f32)
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(rgb: [u8; 3], a: f32) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a,
        }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS colour string accepted by canvas `fillStyle`/`strokeStyle`.
    pub fn css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            self.a.clamp(0.0, 1.0)
        )
    }
}

pub trait DrawSurface {
    /// Clear the whole area covered by `size`.
    fn clear(&mut self, size: SurfaceSize);
    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32);
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    fn clear(&mut self, size: SurfaceSize) {
        (**self).clear(size);
    }
    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgba) {
        (**self).fill_disc(center, radius, color);
    }
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        (**self).stroke_line(from, to, color, width);
    }
}
