//! Tagged canvas operations.

use skiff_foundation::{LayerId, PlatformViewId};
use skiff_types::{Color, ImageHandle, Offset, Paint, Path, RRect, Rect, Size, TextLayout};

/// One recorded canvas invocation.
///
/// A display list is an ordered sequence of these. Replay dispatches each
/// variant back onto the corresponding [`Canvas`](crate::Canvas) method, so
/// any canvas sees exactly the calls the painter originally made.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    // ========== State ==========
    /// Saves the current transform/clip state.
    Save,

    /// Restores to the last unmatched save of any variant.
    Restore,

    /// Saves state and redirects drawing into an offscreen layer composited
    /// with `paint` on restore.
    SaveLayer {
        /// Estimated bounds of the offscreen content.
        bounds: Rect,
        /// Composite paint applied on restore.
        paint: Paint,
    },

    /// Saves state and composites the offscreen layer at `alpha` on restore.
    SaveLayerAlpha {
        /// Estimated bounds of the offscreen content.
        bounds: Rect,
        /// Opacity in `0..=255`.
        alpha: u8,
    },

    /// Saves state and blurs the offscreen layer on restore.
    SaveLayerBlur {
        /// Estimated bounds of the offscreen content.
        bounds: Rect,
        /// Gaussian blur sigma in logical pixels.
        sigma: f64,
    },

    // ========== Transforms ==========
    /// Translates subsequent operations.
    Translate {
        /// Horizontal shift.
        dx: f64,
        /// Vertical shift.
        dy: f64,
    },

    /// Scales subsequent operations.
    Scale {
        /// Horizontal factor.
        sx: f64,
        /// Vertical factor.
        sy: f64,
    },

    /// Rotates subsequent operations around the current origin.
    Rotate {
        /// Rotation in radians, clockwise.
        radians: f64,
    },

    // ========== Clips ==========
    /// Intersects the clip with a rectangle.
    ClipRect(Rect),

    /// Intersects the clip with a rounded rectangle.
    ClipRRect(RRect),

    /// Intersects the clip with an arbitrary path.
    ClipPath(Path),

    // ========== Draw primitives ==========
    /// Draws a rectangle.
    DrawRect {
        /// The rectangle in local coordinates.
        rect: Rect,
        /// How to draw it.
        paint: Paint,
    },

    /// Draws a rounded rectangle.
    DrawRRect {
        /// The rounded rectangle in local coordinates.
        rrect: RRect,
        /// How to draw it.
        paint: Paint,
    },

    /// Draws a path.
    DrawPath {
        /// The path in local coordinates.
        path: Path,
        /// How to draw it.
        paint: Paint,
    },

    /// Draws a backend-owned image with its top-left corner at `offset`.
    DrawImage {
        /// Backend image handle.
        image: ImageHandle,
        /// Top-left corner in local coordinates.
        offset: Offset,
        /// How to composite it.
        paint: Paint,
    },

    /// Draws an already-shaped text block at `offset`.
    DrawText {
        /// The shaped text.
        layout: TextLayout,
        /// Top-left corner in local coordinates.
        offset: Offset,
    },

    /// Draws a material-style shadow under `path`.
    DrawShadow {
        /// The occluding shape casting the shadow.
        path: Path,
        /// Shadow color.
        color: Color,
        /// Height of the caster above the surface.
        elevation: f64,
    },

    // ========== Embedding ==========
    /// Reserves space for an embedder-owned native view.
    ///
    /// Nothing is drawn; geometry resolution reports where the native view
    /// belongs in the composited scene.
    EmbedPlatformView {
        /// The embedder's view id.
        view_id: PlatformViewId,
        /// Logical size of the view.
        size: Size,
    },

    /// Declares that framework content covers the given area, occluding any
    /// platform view embedded earlier in the op stream.
    ///
    /// Consumed only by geometry resolution; never drawn.
    OcclusionMask {
        /// The covering shape in local coordinates.
        path: Path,
    },

    /// Replays a child repaint boundary's display list in place.
    ///
    /// Carries the child's stable layer id, never its content; a disposed or
    /// content-less layer replays as a no-op.
    DrawChildLayer {
        /// The child boundary's layer.
        layer: LayerId,
    },
}

impl DrawOp {
    /// Returns true for operations that affect transform or clip state.
    #[must_use]
    pub fn is_state_op(&self) -> bool {
        matches!(
            self,
            DrawOp::Save
                | DrawOp::Restore
                | DrawOp::SaveLayer { .. }
                | DrawOp::SaveLayerAlpha { .. }
                | DrawOp::SaveLayerBlur { .. }
                | DrawOp::Translate { .. }
                | DrawOp::Scale { .. }
                | DrawOp::Rotate { .. }
                | DrawOp::ClipRect(_)
                | DrawOp::ClipRRect(_)
                | DrawOp::ClipPath(_)
        )
    }

    /// Returns true for save variants (plain or layer).
    #[must_use]
    pub fn is_save(&self) -> bool {
        matches!(
            self,
            DrawOp::Save
                | DrawOp::SaveLayer { .. }
                | DrawOp::SaveLayerAlpha { .. }
                | DrawOp::SaveLayerBlur { .. }
        )
    }
}
