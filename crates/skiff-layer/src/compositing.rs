//! Compositing canvas - replays display lists onto a backend canvas.

use tracing::{trace, warn};

use skiff_foundation::{LayerId, PlatformViewId};
use skiff_painting::Canvas;
use skiff_types::{Color, ImageHandle, Offset, Paint, Path, RRect, Rect, Size, TextLayout};

use crate::{CompositeError, LayerTree, PlatformViewSink, TransformClipTracker, ViewGeometry};

/// Adapter between recorded display lists and the drawing backend.
///
/// Three jobs:
///
/// 1. Track translation and clip state as the op stream replays.
/// 2. Forward every drawing operation to the inner backend canvas.
/// 3. Resolve `DrawChildLayer` references through the layer tree, replaying
///    child content under the live state so nested platform views end up in
///    global coordinates.
///
/// When a sink is attached, each embedded platform view is reported with its
/// tracked geometry and no occlusion analysis (the no-occlusion fast path).
/// Frames that carry occlusion masks run the separate geometry pass instead.
pub struct CompositingCanvas<'a> {
    inner: &'a mut dyn Canvas,
    layers: &'a LayerTree,
    sink: Option<&'a mut dyn PlatformViewSink>,
    tracker: TransformClipTracker,
}

impl<'a> CompositingCanvas<'a> {
    /// Creates a compositing canvas over a backend canvas.
    pub fn new(inner: &'a mut dyn Canvas, layers: &'a LayerTree) -> Self {
        Self {
            inner,
            layers,
            sink: None,
            tracker: TransformClipTracker::new(),
        }
    }

    /// Creates a compositing canvas that also reports platform view
    /// geometry to `sink` as embeds are encountered.
    pub fn with_sink(
        inner: &'a mut dyn Canvas,
        layers: &'a LayerTree,
        sink: &'a mut dyn PlatformViewSink,
    ) -> Self {
        Self {
            inner,
            layers,
            sink: Some(sink),
            tracker: TransformClipTracker::new(),
        }
    }

    /// Composites a recorded layer tree starting from `root`.
    ///
    /// # Errors
    ///
    /// Returns [`CompositeError`] when the root does not resolve or was
    /// never recorded; both are frame-fatal invariant violations. Absent
    /// *child* references inside the stream are skipped silently.
    pub fn composite(&mut self, root: LayerId) -> Result<(), CompositeError> {
        let layer = self
            .layers
            .get(root)
            .ok_or(CompositeError::RootLayerMissing(root))?;
        let content = layer
            .content()
            .cloned()
            .ok_or(CompositeError::RootContentMissing(root))?;
        content.replay(self);
        Ok(())
    }
}

impl std::fmt::Debug for CompositingCanvas<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositingCanvas")
            .field("tracker", &self.tracker)
            .field("has_sink", &self.sink.is_some())
            .finish_non_exhaustive()
    }
}

impl Canvas for CompositingCanvas<'_> {
    fn save(&mut self) {
        self.tracker.save();
        self.inner.save();
    }

    fn restore(&mut self) {
        self.tracker.restore();
        self.inner.restore();
    }

    fn save_layer(&mut self, bounds: Rect, paint: &Paint) {
        self.tracker.save();
        self.inner.save_layer(bounds, paint);
    }

    fn save_layer_alpha(&mut self, bounds: Rect, alpha: u8) {
        self.tracker.save();
        self.inner.save_layer_alpha(bounds, alpha);
    }

    fn save_layer_blur(&mut self, bounds: Rect, sigma: f64) {
        self.tracker.save();
        self.inner.save_layer_blur(bounds, sigma);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.tracker.translate(dx, dy);
        self.inner.translate(dx, dy);
    }

    // Scale and rotation are paint effects as far as view geometry is
    // concerned; platform views stay axis-aligned in logical coordinates.
    fn scale(&mut self, sx: f64, sy: f64) {
        self.inner.scale(sx, sy);
    }

    fn rotate(&mut self, radians: f64) {
        self.inner.rotate(radians);
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.tracker.clip_rect(rect);
        self.inner.clip_rect(rect);
    }

    fn clip_rrect(&mut self, rrect: &RRect) {
        self.tracker.clip_rrect(rrect);
        self.inner.clip_rrect(rrect);
    }

    fn clip_path(&mut self, path: &Path) {
        self.inner.clip_path(path);
    }

    fn draw_rect(&mut self, rect: Rect, paint: &Paint) {
        self.inner.draw_rect(rect, paint);
    }

    fn draw_rrect(&mut self, rrect: &RRect, paint: &Paint) {
        self.inner.draw_rrect(rrect, paint);
    }

    fn draw_path(&mut self, path: &Path, paint: &Paint) {
        self.inner.draw_path(path, paint);
    }

    fn draw_image(&mut self, image: ImageHandle, offset: Offset, paint: &Paint) {
        self.inner.draw_image(image, offset, paint);
    }

    fn draw_text(&mut self, layout: &TextLayout, offset: Offset) {
        self.inner.draw_text(layout, offset);
    }

    fn draw_shadow(&mut self, path: &Path, color: Color, elevation: f64) {
        self.inner.draw_shadow(path, color, elevation);
    }

    fn embed_platform_view(&mut self, view_id: PlatformViewId, size: Size) {
        let Some(sink) = self.sink.as_deref_mut() else {
            return;
        };
        let offset = self.tracker.transform();
        let clip_bounds = self.tracker.clip();
        let bounds = Rect::from_offset_size(offset, size);
        let visible_rect = match clip_bounds {
            Some(clip) => bounds.intersect(clip),
            None => bounds,
        };
        let geometry = ViewGeometry {
            view_id,
            offset,
            size,
            clip_bounds,
            visible_rect,
            occlusion_paths: Vec::new(),
        };
        if let Err(error) = sink.update_view_geometry(geometry) {
            warn!(%view_id, %error, "platform sink rejected view geometry");
        }
    }

    // Occlusion masks are a geometry-pass concern and never reach the
    // drawing backend.
    fn occlude_platform_views(&mut self, _mask: &Path) {}

    fn draw_child_layer(&mut self, layer: LayerId) {
        let Some(content) = self.layers.get(layer).and_then(|l| l.content().cloned()) else {
            trace!(%layer, "skipping absent child layer during compositing");
            return;
        };
        content.replay(self);
    }
}
