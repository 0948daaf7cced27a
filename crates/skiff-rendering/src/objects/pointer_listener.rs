//! A pointer-handling region.

use crate::{HitTarget, PaintContext, RenderObject};

/// Exposes the pointer-handler capability over its bounds.
///
/// Draws nothing itself; its presence in a hit-test path is what matters.
/// A native touch landing on one of these above a platform view belongs to
/// the framework, not the view.
#[derive(Debug, Default)]
pub struct RenderPointerListener;

impl RenderPointerListener {
    /// Creates a pointer listener.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RenderObject for RenderPointerListener {
    fn paint(&self, ctx: &mut PaintContext<'_>) {
        ctx.paint_children();
    }

    fn hit_target(&self) -> HitTarget {
        HitTarget::Pointer
    }
}
