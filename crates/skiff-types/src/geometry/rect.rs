//! Axis-aligned rectangle type.

use std::fmt;

use super::{Offset, Size};

/// An axis-aligned rectangle described by its edges.
///
/// A rect is *empty* when `right <= left` or `bottom <= top`. Intersection
/// and translation are closed operations: intersecting two disjoint rects
/// produces an empty rect, never an error.
///
/// # Examples
///
/// ```
/// use skiff_types::{Offset, Rect};
///
/// let a = Rect::from_xywh(0.0, 0.0, 100.0, 100.0);
/// let b = Rect::from_xywh(50.0, 50.0, 100.0, 100.0);
///
/// let overlap = a.intersect(b);
/// assert_eq!(overlap, Rect::from_ltrb(50.0, 50.0, 100.0, 100.0));
///
/// let moved = a.translate(Offset::new(10.0, 0.0));
/// assert_eq!(moved.left, 10.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rect {
    /// The left edge.
    pub left: f64,

    /// The top edge.
    pub top: f64,

    /// The right edge.
    pub right: f64,

    /// The bottom edge.
    pub bottom: f64,
}

impl Rect {
    /// A rect with all edges at zero. Empty by definition.
    pub const ZERO: Self = Self::from_ltrb(0.0, 0.0, 0.0, 0.0);

    /// The canonical empty rect used as the "hide" sentinel in view
    /// geometry reports.
    pub const EMPTY: Self = Self::ZERO;

    /// Creates a rect from its four edges.
    #[inline]
    #[must_use]
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates a rect from an origin and extents.
    #[inline]
    #[must_use]
    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_ltrb(x, y, x + width, y + height)
    }

    /// Creates a rect at the origin with the given size.
    #[inline]
    #[must_use]
    pub fn from_size(size: Size) -> Self {
        Self::from_ltrb(0.0, 0.0, size.width, size.height)
    }

    /// Creates a rect from a global offset and a size.
    #[inline]
    #[must_use]
    pub fn from_offset_size(offset: Offset, size: Size) -> Self {
        Self::from_ltrb(
            offset.dx,
            offset.dy,
            offset.dx + size.width,
            offset.dy + size.height,
        )
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns the horizontal extent. Negative for inverted rects.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns the vertical extent. Negative for inverted rects.
    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Returns the size of this rect.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Returns the top-left corner as an offset.
    #[inline]
    #[must_use]
    pub fn top_left(&self) -> Offset {
        Offset::new(self.left, self.top)
    }

    /// Returns true when this rect encloses no area.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    /// Returns true if `point` lies inside this rect.
    ///
    /// The left and top edges are inclusive, the right and bottom edges
    /// exclusive, so adjacent rects never both claim a shared edge point.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: Offset) -> bool {
        point.dx >= self.left && point.dx < self.right && point.dy >= self.top && point.dy < self.bottom
    }

    /// Returns true if `other` lies entirely within this rect.
    #[inline]
    #[must_use]
    pub fn contains_rect(&self, other: Rect) -> bool {
        !other.is_empty()
            && other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }

    /// Returns true if this rect and `other` share any area.
    #[inline]
    #[must_use]
    pub fn intersects(&self, other: Rect) -> bool {
        !self.intersect(other).is_empty()
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Returns the overlapping region of two rects.
    ///
    /// The result is empty (possibly with inverted edges) when the rects do
    /// not overlap.
    #[inline]
    #[must_use]
    pub fn intersect(&self, other: Rect) -> Rect {
        Rect::from_ltrb(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        )
    }

    /// Returns the smallest rect enclosing both rects.
    ///
    /// Empty inputs are ignored so that unioning into an accumulator seeded
    /// with [`Rect::EMPTY`] behaves as expected.
    #[inline]
    #[must_use]
    pub fn union(&self, other: Rect) -> Rect {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return *self;
        }
        Rect::from_ltrb(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }

    /// Returns this rect shifted by `offset`.
    #[inline]
    #[must_use]
    pub fn translate(&self, offset: Offset) -> Rect {
        Rect::from_ltrb(
            self.left + offset.dx,
            self.top + offset.dy,
            self.right + offset.dx,
            self.bottom + offset.dy,
        )
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect({:.1}, {:.1}, {:.1}, {:.1})",
            self.left, self.top, self.right, self.bottom
        )
    }
}
