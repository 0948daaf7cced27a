//! The render object capability.

use skiff_types::{Offset, Rect, Size};

use crate::{HitTarget, PaintContext};

/// Behavior of one node in the render tree.
///
/// Structural state (size, parent data, children, layer) lives on the
/// [`RenderNode`](crate::RenderNode) in the arena; this trait carries only
/// what differs between object kinds: how they paint, whether they are a
/// repaint boundary, and which interaction capability they expose.
///
/// # Painting
///
/// `paint` runs in the object's local coordinate space; the parent has
/// already translated the canvas to this object's origin. Children are
/// painted through
/// [`PaintContext::paint_child_with_layer`], which inlines non-boundary
/// children and records a layer reference for boundary children.
pub trait RenderObject: std::fmt::Debug + Send {
    /// Returns true if this object owns a layer and records as a standalone
    /// display list.
    fn is_repaint_boundary(&self) -> bool {
        false
    }

    /// Paints this object and its children.
    fn paint(&self, ctx: &mut PaintContext<'_>);

    /// Returns the interaction capability hit testing records for this
    /// object.
    fn hit_target(&self) -> HitTarget {
        HitTarget::Decoration
    }

    /// Returns true if `position` hits this object itself.
    ///
    /// The default claims the object's full bounds.
    fn hit_test_self(&self, position: Offset, size: Size) -> bool {
        Rect::from_size(size).contains(position)
    }
}
