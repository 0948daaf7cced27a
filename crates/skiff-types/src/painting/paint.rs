//! Paint configuration for drawing operations.

use super::Color;

/// Whether a shape is filled or stroked.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PaintStyle {
    /// Fill the shape's interior.
    #[default]
    Fill,

    /// Stroke the shape's outline with the given width.
    Stroke {
        /// Stroke width in logical pixels.
        width: f64,
    },
}

/// How a shape is drawn: color, style, anti-aliasing.
///
/// The core never interprets paints; they ride through display lists to the
/// drawing backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    /// The color to draw with.
    pub color: Color,

    /// Fill or stroke.
    pub style: PaintStyle,

    /// Whether edges are anti-aliased.
    pub anti_alias: bool,
}

impl Paint {
    /// Creates a filling paint.
    #[inline]
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self {
            color,
            style: PaintStyle::Fill,
            anti_alias: true,
        }
    }

    /// Creates a stroking paint.
    #[inline]
    #[must_use]
    pub const fn stroke(color: Color, width: f64) -> Self {
        Self {
            color,
            style: PaintStyle::Stroke { width },
            anti_alias: true,
        }
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::fill(Color::BLACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_constructors() {
        let fill = Paint::fill(Color::RED);
        assert_eq!(fill.style, PaintStyle::Fill);

        let stroke = Paint::stroke(Color::BLUE, 2.0);
        assert_eq!(stroke.style, PaintStyle::Stroke { width: 2.0 });
    }
}
