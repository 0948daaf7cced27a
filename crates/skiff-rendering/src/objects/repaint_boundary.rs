//! A repaint boundary container.

use crate::{PaintContext, RenderObject};

/// Isolates its subtree into a standalone layer.
///
/// The subtree records once and is referenced by layer id from the parent's
/// display list; changes inside the subtree re-record only this boundary,
/// and moving the boundary re-records only the parent.
#[derive(Debug, Default)]
pub struct RenderRepaintBoundary;

impl RenderRepaintBoundary {
    /// Creates a boundary.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RenderObject for RenderRepaintBoundary {
    fn is_repaint_boundary(&self) -> bool {
        true
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        ctx.paint_children();
    }
}
