//! Rounded rectangle type.

use super::Rect;

/// An elliptical corner radius.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Radius {
    /// The horizontal semi-axis.
    pub x: f64,

    /// The vertical semi-axis.
    pub y: f64,
}

impl Radius {
    /// A sharp (zero) corner.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates an elliptical radius.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a circular radius.
    #[inline]
    #[must_use]
    pub const fn circular(radius: f64) -> Self {
        Self::new(radius, radius)
    }
}

/// A rectangle with rounded corners.
///
/// Native platform views only support rectangular clipping, so geometry
/// tracking approximates a rounded-rect clip by its outer [`Rect`]; the
/// precise rounded shape still reaches the drawing backend untouched.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct RRect {
    /// The bounding rectangle.
    pub rect: Rect,

    /// The top-left corner radius.
    pub top_left: Radius,

    /// The top-right corner radius.
    pub top_right: Radius,

    /// The bottom-right corner radius.
    pub bottom_right: Radius,

    /// The bottom-left corner radius.
    pub bottom_left: Radius,
}

impl RRect {
    /// Creates a rounded rect with the same radius on every corner.
    #[inline]
    #[must_use]
    pub const fn from_rect_radius(rect: Rect, radius: Radius) -> Self {
        Self {
            rect,
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Creates a rounded rect with sharp corners.
    #[inline]
    #[must_use]
    pub const fn from_rect(rect: Rect) -> Self {
        Self::from_rect_radius(rect, Radius::ZERO)
    }

    /// Returns the outer bounding rect.
    #[inline]
    #[must_use]
    pub fn outer_rect(&self) -> Rect {
        self.rect
    }

    /// Returns true if every corner is sharp.
    #[inline]
    #[must_use]
    pub fn is_rect(&self) -> bool {
        let sharp = |r: Radius| r.x == 0.0 && r.y == 0.0;
        sharp(self.top_left) && sharp(self.top_right) && sharp(self.bottom_right) && sharp(self.bottom_left)
    }
}
