//! A rectangular clip around a subtree.

use skiff_types::Rect;

use crate::{PaintContext, RenderObject};

/// Clips its children to its own bounds.
#[derive(Debug, Default)]
pub struct RenderClipRect;

impl RenderClipRect {
    /// Creates a clip.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RenderObject for RenderClipRect {
    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let clip = Rect::from_size(ctx.size());
        ctx.canvas().save();
        ctx.canvas().clip_rect(clip);
        ctx.paint_children();
        ctx.canvas().restore();
    }
}
