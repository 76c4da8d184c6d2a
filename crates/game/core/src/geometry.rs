//! World-space primitives shared by every simulation module.
//!
//! All coordinates are in level pixels with `+y` pointing down, matching the
//! collision raster layout.
use core::ops::{Add, AddAssign, Mul, Sub};

/// 2D vector used for positions, deltas, velocities and sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// True when both components are within `epsilon` of zero.
    pub fn is_almost_zero(self, epsilon: f32) -> bool {
        self.x.abs() <= epsilon && self.y.abs() <= epsilon
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn lerp(self, target: Self, ratio: f32) -> Self {
        Self::new(
            lerp(self.x, target.x, ratio),
            lerp(self.y, target.y, ratio),
        )
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Zero-area or non-finite rectangles cannot frame a level.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || !(self.x.is_finite() && self.y.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Builds a `size` rectangle centered on `center`, then clamps it inside
    /// `bounds`. On an axis where `bounds` is smaller than `size`, the result
    /// covers the whole bounds axis instead.
    pub fn centered_clamped(center: Vec2, size: Vec2, bounds: &Rect) -> Self {
        let (x, width) = clamp_span(center.x - size.x * 0.5, size.x, bounds.x, bounds.width);
        let (y, height) = clamp_span(center.y - size.y * 0.5, size.y, bounds.y, bounds.height);
        Self::new(x, y, width, height)
    }

    /// Component-wise interpolation of origin and size.
    pub fn lerp(&self, target: &Rect, ratio: f32) -> Self {
        Self::new(
            lerp(self.x, target.x, ratio),
            lerp(self.y, target.y, ratio),
            lerp(self.width, target.width, ratio),
            lerp(self.height, target.height, ratio),
        )
    }
}

fn clamp_span(start: f32, len: f32, min: f32, available: f32) -> (f32, f32) {
    if len >= available {
        return (min, available);
    }
    (start.clamp(min, min + available - len), len)
}

#[inline]
pub fn lerp(from: f32, to: f32, ratio: f32) -> f32 {
    from + (to - from) * ratio
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVEL: Rect = Rect::new(0.0, 0.0, 400.0, 300.0);

    #[test]
    fn centered_rect_inside_bounds_is_untouched() {
        let rect = Rect::centered_clamped(Vec2::new(200.0, 150.0), Vec2::new(100.0, 50.0), &LEVEL);
        assert_eq!(rect, Rect::new(150.0, 125.0, 100.0, 50.0));
    }

    #[test]
    fn centered_rect_is_pushed_back_from_edges() {
        let top_left = Rect::centered_clamped(Vec2::new(5.0, 5.0), Vec2::new(100.0, 50.0), &LEVEL);
        assert_eq!(top_left, Rect::new(0.0, 0.0, 100.0, 50.0));

        let bottom_right =
            Rect::centered_clamped(Vec2::new(399.0, 299.0), Vec2::new(100.0, 50.0), &LEVEL);
        assert_eq!(bottom_right, Rect::new(300.0, 250.0, 100.0, 50.0));
        assert!(LEVEL.contains_rect(&bottom_right));
    }

    #[test]
    fn oversized_axis_covers_the_whole_level_axis() {
        let rect = Rect::centered_clamped(Vec2::new(10.0, 150.0), Vec2::new(800.0, 50.0), &LEVEL);
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.width, 400.0);
        assert_eq!(rect.height, 50.0);
    }

    #[test]
    fn degenerate_rects_are_detected() {
        assert!(Rect::new(0.0, 0.0, 0.0, 10.0).is_degenerate());
        assert!(Rect::new(0.0, 0.0, 10.0, f32::NAN).is_degenerate());
        assert!(!LEVEL.is_degenerate());
    }
}
