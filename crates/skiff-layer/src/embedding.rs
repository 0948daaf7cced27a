//! Platform view embedding - the draw-free geometry pass.

use tracing::{debug, trace, warn};

use skiff_foundation::{LayerId, PlatformViewId};
use skiff_painting::Canvas;
use skiff_types::{Color, ImageHandle, Offset, Paint, Path, RRect, Rect, Size, TextLayout};

use crate::occlusion::{cap_occlusion_paths, merge_overlapping_paths, subtract_rect};
use crate::{LayerTree, PlatformViewSink, TransformClipTracker, ViewGeometry};

/// One buffered `EmbedPlatformView` op with its resolved global state.
#[derive(Debug, Clone)]
struct PendingView {
    view_id: PlatformViewId,
    offset: Offset,
    size: Size,
    parent_clip: Option<Rect>,
    seq_index: u64,
}

/// One buffered `OcclusionMask` op, already in global coordinates.
#[derive(Debug, Clone)]
struct OcclusionRegion {
    path: Path,
    seq_index: u64,
}

/// Frame-local buffer of embedded views and occlusion regions.
///
/// The embedder's state outlives any single replay: a [`GeometryCanvas`]
/// borrows it to buffer ops while walking the op stream, and
/// [`flush_to_sink`](Self::flush_to_sink) turns the buffered state into
/// per-view [`ViewGeometry`] reports. [`reset_frame`](Self::reset_frame)
/// clears everything at the start of the next frame; nothing carries over.
///
/// # Sequence indices
///
/// Every embed and occlusion op gets a frame-local monotonic index in
/// encounter order. An occluder affects only views with a strictly smaller
/// index; content recorded *under* a view never hides it.
#[derive(Debug, Default)]
pub struct ViewEmbedder {
    views: Vec<PendingView>,
    occlusions: Vec<OcclusionRegion>,
    seq_counter: u64,
}

impl ViewEmbedder {
    /// Creates an empty embedder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many views were embedded this frame.
    #[inline]
    #[must_use]
    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    /// Returns how many occlusion regions were recorded this frame.
    #[inline]
    #[must_use]
    pub fn occlusion_count(&self) -> usize {
        self.occlusions.len()
    }

    fn push_view(&mut self, view_id: PlatformViewId, offset: Offset, size: Size, parent_clip: Option<Rect>) {
        trace!(%view_id, ?offset, "buffering platform view");
        self.views.push(PendingView {
            view_id,
            offset,
            size,
            parent_clip,
            seq_index: self.seq_counter,
        });
        self.seq_counter += 1;
    }

    fn push_occlusion(&mut self, path: Path) {
        self.occlusions.push(OcclusionRegion {
            path,
            seq_index: self.seq_counter,
        });
        self.seq_counter += 1;
    }

    /// Clears all frame-local state. Called at the start of every frame.
    pub fn reset_frame(&mut self) {
        self.views.clear();
        self.occlusions.clear();
        self.seq_counter = 0;
    }

    // ========================================================================
    // Flush
    // ========================================================================

    /// Reports every buffered view's geometry to `sink`, in embed order.
    ///
    /// Sink failures are logged and skipped; one misbehaving view never
    /// starves the rest. The buffers are left intact (replaying the same op
    /// stream after [`reset_frame`](Self::reset_frame) reproduces identical
    /// reports).
    pub fn flush_to_sink(&self, sink: &mut dyn PlatformViewSink) {
        debug!(
            views = self.views.len(),
            occlusions = self.occlusions.len(),
            "flushing platform view geometry"
        );

        for view in &self.views {
            let geometry = if self.occlusions.is_empty() {
                self.fast_path_geometry(view)
            } else {
                self.occluded_geometry(view)
            };
            if let Err(error) = sink.update_view_geometry(geometry) {
                warn!(view_id = %view.view_id, %error, "platform sink rejected view geometry");
            }
        }
    }

    /// No occlusions this frame: the report is the view's bounds against its
    /// parent clip.
    fn fast_path_geometry(&self, view: &PendingView) -> ViewGeometry {
        let bounds = Rect::from_offset_size(view.offset, view.size);
        let visible_rect = match view.parent_clip {
            Some(clip) => bounds.intersect(clip),
            None => bounds,
        };
        ViewGeometry {
            view_id: view.view_id,
            offset: view.offset,
            size: view.size,
            clip_bounds: view.parent_clip,
            visible_rect,
            occlusion_paths: Vec::new(),
        }
    }

    /// Full occlusion resolution for one view.
    fn occluded_geometry(&self, view: &PendingView) -> ViewGeometry {
        let bounds = Rect::from_offset_size(view.offset, view.size);
        let visible_rect = match view.parent_clip {
            Some(clip) => bounds.intersect(clip),
            None => bounds,
        };

        // Only content recorded above the view can occlude it.
        let above = || {
            self.occlusions
                .iter()
                .filter(|region| region.seq_index > view.seq_index)
        };

        let intersecting: Vec<Path> = above()
            .filter(|region| region.path.bounds().intersects(visible_rect))
            .map(|region| region.path.clone())
            .collect();
        let occlusion_paths = cap_occlusion_paths(merge_overlapping_paths(intersecting));

        // Android-compatible fallback: collapse to a single rect, or hide.
        let mut collapsed = visible_rect;
        let mut hidden = false;
        for region in above() {
            let (remaining, hide) = subtract_rect(collapsed, region.path.bounds());
            if hide || remaining.is_empty() {
                hidden = true;
                break;
            }
            collapsed = remaining;
        }

        let clip_bounds = if hidden {
            Some(Rect::EMPTY)
        } else {
            Some(collapsed)
        };

        ViewGeometry {
            view_id: view.view_id,
            offset: view.offset,
            size: view.size,
            clip_bounds,
            visible_rect,
            occlusion_paths,
        }
    }
}

// ============================================================================
// GEOMETRY CANVAS
// ============================================================================

/// A draw-free canvas that resolves platform view geometry.
///
/// Replays the same op stream the compositing canvas sees, with every draw
/// primitive ignored: only translation, save/restore, rectangular clips,
/// embeds, and occlusion masks have any effect. Child layer references
/// replay recursively under the live transform/clip state, exactly as the
/// compositing canvas inlines them.
pub struct GeometryCanvas<'a> {
    embedder: &'a mut ViewEmbedder,
    layers: &'a LayerTree,
    tracker: TransformClipTracker,
}

impl<'a> GeometryCanvas<'a> {
    /// Creates a geometry canvas buffering into `embedder` and resolving
    /// child layers through `layers`.
    pub fn new(embedder: &'a mut ViewEmbedder, layers: &'a LayerTree) -> Self {
        Self {
            embedder,
            layers,
            tracker: TransformClipTracker::new(),
        }
    }
}

impl std::fmt::Debug for GeometryCanvas<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeometryCanvas")
            .field("tracker", &self.tracker)
            .finish_non_exhaustive()
    }
}

impl Canvas for GeometryCanvas<'_> {
    fn save(&mut self) {
        self.tracker.save();
    }

    fn restore(&mut self) {
        self.tracker.restore();
    }

    fn save_layer(&mut self, _bounds: Rect, _paint: &Paint) {
        self.tracker.save();
    }

    fn save_layer_alpha(&mut self, _bounds: Rect, _alpha: u8) {
        self.tracker.save();
    }

    fn save_layer_blur(&mut self, _bounds: Rect, _sigma: f64) {
        self.tracker.save();
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.tracker.translate(dx, dy);
    }

    fn scale(&mut self, _sx: f64, _sy: f64) {}

    fn rotate(&mut self, _radians: f64) {}

    fn clip_rect(&mut self, rect: Rect) {
        self.tracker.clip_rect(rect);
    }

    fn clip_rrect(&mut self, rrect: &RRect) {
        self.tracker.clip_rrect(rrect);
    }

    fn clip_path(&mut self, _path: &Path) {}

    fn draw_rect(&mut self, _rect: Rect, _paint: &Paint) {}

    fn draw_rrect(&mut self, _rrect: &RRect, _paint: &Paint) {}

    fn draw_path(&mut self, _path: &Path, _paint: &Paint) {}

    fn draw_image(&mut self, _image: ImageHandle, _offset: Offset, _paint: &Paint) {}

    fn draw_text(&mut self, _layout: &TextLayout, _offset: Offset) {}

    fn draw_shadow(&mut self, _path: &Path, _color: Color, _elevation: f64) {}

    fn embed_platform_view(&mut self, view_id: PlatformViewId, size: Size) {
        self.embedder
            .push_view(view_id, self.tracker.transform(), size, self.tracker.clip());
    }

    fn occlude_platform_views(&mut self, mask: &Path) {
        self.embedder
            .push_occlusion(mask.translate(self.tracker.transform()));
    }

    fn draw_child_layer(&mut self, layer: LayerId) {
        let Some(content) = self.layers.get(layer).and_then(|l| l.content().cloned()) else {
            trace!(%layer, "skipping absent child layer in geometry pass");
            return;
        };
        content.replay(self);
    }
}
