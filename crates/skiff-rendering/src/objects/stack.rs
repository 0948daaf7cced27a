//! A positioned multi-child container.

use crate::{PaintContext, RenderObject};

/// Paints its children at their layout offsets, first to last.
///
/// Later children paint on top; hit testing mirrors that by probing them
/// last to first.
#[derive(Debug, Default)]
pub struct RenderStack;

impl RenderStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RenderObject for RenderStack {
    fn paint(&self, ctx: &mut PaintContext<'_>) {
        ctx.paint_children();
    }
}
