//! The platform view placeholder.

use skiff_foundation::PlatformViewId;

use crate::{HitTarget, PaintContext, RenderObject};

/// A repaint-boundary leaf standing in for an embedder-owned native view.
///
/// Paints a single embed operation sized to its bounds; geometry
/// resolution turns that into a positioning report for the embedder. At
/// hit-test time it exposes the platform-view-owner capability so the
/// arbiter can route native touches to the right view.
#[derive(Debug)]
pub struct RenderPlatformView {
    view_id: PlatformViewId,
}

impl RenderPlatformView {
    /// Creates a placeholder for the given native view.
    #[must_use]
    pub fn new(view_id: PlatformViewId) -> Self {
        Self { view_id }
    }

    /// Returns the embedder's view id.
    #[inline]
    #[must_use]
    pub fn view_id(&self) -> PlatformViewId {
        self.view_id
    }
}

impl RenderObject for RenderPlatformView {
    fn is_repaint_boundary(&self) -> bool {
        true
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let size = ctx.size();
        ctx.embed_platform_view(self.view_id, size);
    }

    fn hit_target(&self) -> HitTarget {
        HitTarget::PlatformView(self.view_id)
    }
}
