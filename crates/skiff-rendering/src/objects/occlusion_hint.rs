//! An occlusion hint for content stacked above platform views.

use skiff_types::{Path, Rect};

use crate::{PaintContext, RenderObject};

/// Declares that its bounds are covered by opaque framework content.
///
/// Wrap overlays that sit above embedded platform views in one of these;
/// the emitted mask tells geometry resolution to clip or hide any view
/// painted earlier in the frame. Views painted later are unaffected.
#[derive(Debug, Default)]
pub struct RenderOcclusionHint;

impl RenderOcclusionHint {
    /// Creates an occlusion hint.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RenderObject for RenderOcclusionHint {
    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let mask = Path::from_rect(Rect::from_size(ctx.size()));
        ctx.occlude_platform_views(&mask);
        ctx.paint_children();
    }
}
