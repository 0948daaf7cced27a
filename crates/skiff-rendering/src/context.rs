//! PaintContext - the handle paint procedures draw through.

use tracing::warn;

use skiff_foundation::{PlatformViewId, RenderId};
use skiff_painting::Canvas;
use skiff_types::{Offset, Path, Size};

use crate::tree::RenderTree;

/// The handle passed to [`RenderObject::paint`](crate::RenderObject::paint).
///
/// Carries the recording canvas for the boundary being recorded, plus
/// tree access so painters can position and recurse into their children.
/// Painting runs in local coordinates: the parent translates the canvas to
/// a child's origin before the child paints.
///
/// # Child painting
///
/// [`paint_child_with_layer`](Self::paint_child_with_layer) is the single
/// entry point for children:
///
/// - a repaint-boundary child records `translate(offset);
///   draw_child_layer(child_layer); translate(-offset)` into the parent's
///   list and does not run the child's paint
/// - a non-boundary child paints inline under a saved translation
///
/// The reverse-depth batch recording order guarantees that every referenced
/// child layer already holds valid content when the parent records.
pub struct PaintContext<'a> {
    tree: &'a RenderTree,
    canvas: &'a mut dyn Canvas,
    node: RenderId,
    recording_boundary: RenderId,
}

impl<'a> PaintContext<'a> {
    pub(crate) fn new(
        tree: &'a RenderTree,
        canvas: &'a mut dyn Canvas,
        boundary: RenderId,
    ) -> Self {
        Self {
            tree,
            canvas,
            node: boundary,
            recording_boundary: boundary,
        }
    }

    /// Returns the recording canvas for direct drawing.
    #[inline]
    pub fn canvas(&mut self) -> &mut dyn Canvas {
        self.canvas
    }

    /// Returns the id of the object currently painting.
    #[inline]
    #[must_use]
    pub fn node(&self) -> RenderId {
        self.node
    }

    /// Returns the boundary whose layer this recording belongs to.
    #[inline]
    #[must_use]
    pub fn recording_boundary(&self) -> RenderId {
        self.recording_boundary
    }

    /// Returns the size of the object currently painting.
    #[must_use]
    pub fn size(&self) -> Size {
        self.tree.node(self.node).map_or(Size::ZERO, |n| n.size())
    }

    /// Returns the children of the object currently painting, in paint
    /// order.
    #[must_use]
    pub fn children(&self) -> &'a [RenderId] {
        match self.tree.node(self.node) {
            Some(node) => node.children(),
            None => &[],
        }
    }

    /// Returns a child's layout offset (zero if parent data was never
    /// assigned).
    #[must_use]
    pub fn child_offset(&self, child: RenderId) -> Offset {
        self.tree
            .node(child)
            .and_then(|n| n.parent_data())
            .map_or(Offset::ZERO, |data| data.offset)
    }

    // ========================================================================
    // Child painting
    // ========================================================================

    /// Paints `child` at `offset` within the current object.
    ///
    /// Boundary children are referenced by layer id; non-boundary children
    /// paint inline. Absent children, and boundary children whose layer was
    /// never recorded, are skipped.
    pub fn paint_child_with_layer(&mut self, child: RenderId, offset: Offset) {
        let Some(node) = self.tree.node(child) else {
            warn!(%child, "skipping paint of absent child");
            return;
        };
        if node.behavior().is_repaint_boundary() {
            let Some(layer) = node.layer() else {
                warn!(%child, "boundary child has no layer; recording order defect");
                return;
            };
            self.canvas.translate(offset.dx, offset.dy);
            self.canvas.draw_child_layer(layer);
            self.canvas.translate(-offset.dx, -offset.dy);
        } else {
            self.canvas.save();
            self.canvas.translate(offset.dx, offset.dy);
            let previous = self.node;
            self.node = child;
            node.behavior().paint(self);
            self.node = previous;
            self.canvas.restore();
        }
    }

    /// Paints every child at its layout offset, in paint order.
    pub fn paint_children(&mut self) {
        for &child in self.children() {
            let offset = self.child_offset(child);
            self.paint_child_with_layer(child, offset);
        }
    }

    // ========================================================================
    // Embedding
    // ========================================================================

    /// Reserves space for an embedder-owned native view at the current
    /// origin.
    pub fn embed_platform_view(&mut self, view_id: PlatformViewId, size: Size) {
        self.canvas.embed_platform_view(view_id, size);
    }

    /// Declares that this object's content covers any platform view painted
    /// earlier in the frame.
    pub fn occlude_platform_views(&mut self, mask: &Path) {
        self.canvas.occlude_platform_views(mask);
    }
}

impl std::fmt::Debug for PaintContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaintContext")
            .field("node", &self.node)
            .field("recording_boundary", &self.recording_boundary)
            .finish_non_exhaustive()
    }
}
