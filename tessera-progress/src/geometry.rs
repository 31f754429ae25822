//! Pixel-space primitives used by the painter.
//!
//! All values are physical pixels as `f32` with the origin at the top-left
//! corner of the indicator's canvas. Points are [`glam::Vec2`].

use glam::Vec2;

/// Size of a paint canvas in physical pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PxSize {
    pub width: f32,
    pub height: f32,
}

impl PxSize {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether the canvas has a finite, positive area.
    pub fn has_area(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// An axis-aligned rectangle in physical pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PxRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PxRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle from its left, top, right and bottom edges.
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Rectangle covering the whole canvas.
    pub fn from_size(size: PxSize) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Reading direction of the surrounding text, which decides where progress
/// starts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextDirection {
    /// Progress grows from the left edge.
    #[default]
    Ltr,
    /// Progress grows from the right edge.
    Rtl,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let rect = PxRect::from_ltrb(10.0, 2.0, 40.0, 12.0);
        assert_eq!(rect.width, 30.0);
        assert_eq!(rect.height, 10.0);
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.bottom(), 12.0);
        assert!(!rect.is_empty());
        assert!(PxRect::from_ltrb(5.0, 0.0, 5.0, 4.0).is_empty());
    }

    #[test]
    fn size_area() {
        assert!(PxSize::new(300.0, 4.0).has_area());
        assert!(!PxSize::new(0.0, 4.0).has_area());
        assert!(!PxSize::new(10.0, -1.0).has_area());
        assert!(!PxSize::new(f32::NAN, 4.0).has_area());
    }
}
