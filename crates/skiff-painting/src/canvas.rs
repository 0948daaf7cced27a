//! The canvas capability.

use skiff_foundation::{LayerId, PlatformViewId};
use skiff_types::{Color, ImageHandle, Offset, Paint, Path, RRect, Rect, Size, TextLayout};

/// The drawing capability painters draw against.
///
/// Four canvases implement this in the framework: the recording canvas
/// (appends [`DrawOp`](crate::DrawOp)s), the compositing canvas (tracks
/// state and forwards to a backend), the geometry canvas (tracks state,
/// draws nothing), and whatever backend canvas the embedder supplies.
///
/// The three framework-internal operations (`embed_platform_view`,
/// `occlude_platform_views`, `draw_child_layer`) default to no-ops so a
/// drawing backend only has to implement the primitives it rasterizes.
pub trait Canvas {
    // ========================================================================
    // State
    // ========================================================================

    /// Saves the current transform/clip state.
    fn save(&mut self);

    /// Restores to the last unmatched save of any variant.
    ///
    /// A restore without a matching save is a recording defect; canvases are
    /// free to ignore the spurious call.
    fn restore(&mut self);

    /// Saves state and redirects drawing into an offscreen layer composited
    /// with `paint` on restore.
    ///
    /// `bounds` is a rasterization hint only; it does not clip and does not
    /// constrain platform-view geometry tracking.
    fn save_layer(&mut self, bounds: Rect, paint: &Paint);

    /// Saves state and composites the offscreen layer at `alpha` on restore.
    fn save_layer_alpha(&mut self, bounds: Rect, alpha: u8);

    /// Saves state and gaussian-blurs the offscreen layer on restore.
    fn save_layer_blur(&mut self, bounds: Rect, sigma: f64);

    // ========================================================================
    // Transforms
    // ========================================================================

    /// Translates subsequent operations.
    fn translate(&mut self, dx: f64, dy: f64);

    /// Scales subsequent operations.
    fn scale(&mut self, sx: f64, sy: f64);

    /// Rotates subsequent operations around the current origin.
    fn rotate(&mut self, radians: f64);

    // ========================================================================
    // Clips
    // ========================================================================

    /// Intersects the clip with a rectangle.
    fn clip_rect(&mut self, rect: Rect);

    /// Intersects the clip with a rounded rectangle.
    fn clip_rrect(&mut self, rrect: &RRect);

    /// Intersects the clip with an arbitrary path.
    fn clip_path(&mut self, path: &Path);

    // ========================================================================
    // Draw primitives
    // ========================================================================

    /// Draws a rectangle.
    fn draw_rect(&mut self, rect: Rect, paint: &Paint);

    /// Draws a rounded rectangle.
    fn draw_rrect(&mut self, rrect: &RRect, paint: &Paint);

    /// Draws a path.
    fn draw_path(&mut self, path: &Path, paint: &Paint);

    /// Draws an image with its top-left corner at `offset`.
    fn draw_image(&mut self, image: ImageHandle, offset: Offset, paint: &Paint);

    /// Draws an already-shaped text block at `offset`.
    fn draw_text(&mut self, layout: &TextLayout, offset: Offset);

    /// Draws a material-style shadow under `path`.
    fn draw_shadow(&mut self, path: &Path, color: Color, elevation: f64);

    // ========================================================================
    // Embedding
    // ========================================================================

    /// Reserves space for an embedder-owned native view.
    fn embed_platform_view(&mut self, view_id: PlatformViewId, size: Size) {
        let _ = (view_id, size);
    }

    /// Declares framework content covering platform views embedded earlier
    /// in the op stream.
    fn occlude_platform_views(&mut self, mask: &Path) {
        let _ = mask;
    }

    /// Replays a child repaint boundary's display list in place.
    fn draw_child_layer(&mut self, layer: LayerId) {
        let _ = layer;
    }
}
