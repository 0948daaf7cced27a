//! A solid-colored leaf.

use skiff_types::{Color, Paint, Rect};

use crate::{PaintContext, RenderObject};

/// Paints its bounds with a solid color. Purely decorative for hit testing.
#[derive(Debug)]
pub struct RenderColoredBox {
    color: Color,
}

impl RenderColoredBox {
    /// Creates a colored box.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    /// Returns the fill color.
    #[inline]
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }
}

impl RenderObject for RenderColoredBox {
    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let rect = Rect::from_size(ctx.size());
        ctx.canvas().draw_rect(rect, &Paint::fill(self.color));
    }
}
