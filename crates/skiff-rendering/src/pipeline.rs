//! RenderContext - the frame pipeline and its lock.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use tracing::{debug, error};

use skiff_foundation::{PlatformViewId, RenderId};
use skiff_layer::{CompositingCanvas, GeometryCanvas, PlatformViewSink, ViewEmbedder};
use skiff_painting::Canvas;
use skiff_types::Offset;

use crate::{FrameError, HitTarget, HitTestResult, RenderTree};

/// Raster-level options for a recording pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct RasterOptions {
    /// Invalidates every boundary before recording, forcing a full
    /// re-record. Used when rasterization parameters change globally, e.g.
    /// on a device scale switch.
    pub force_repaint: bool,
}

/// Everything the frame lock guards: the render tree (which owns the layer
/// arena), the current root, the device scale, and the frame-local view
/// embedder.
#[derive(Debug)]
pub struct FrameState {
    tree: RenderTree,
    root: Option<RenderId>,
    device_scale: f64,
    embedder: ViewEmbedder,
}

impl FrameState {
    fn new() -> Self {
        Self {
            tree: RenderTree::new(),
            root: None,
            device_scale: 1.0,
            embedder: ViewEmbedder::new(),
        }
    }

    /// Returns the render tree.
    #[inline]
    #[must_use]
    pub fn tree(&self) -> &RenderTree {
        &self.tree
    }

    /// Returns the render tree mutably (layout integration).
    #[inline]
    pub fn tree_mut(&mut self) -> &mut RenderTree {
        &mut self.tree
    }

    /// Returns the current root render object.
    #[inline]
    #[must_use]
    pub fn root(&self) -> Option<RenderId> {
        self.root
    }

    /// Attaches (or detaches) the root render object.
    #[inline]
    pub fn set_root(&mut self, root: Option<RenderId>) {
        self.root = root;
    }

    /// Returns the current device pixel scale.
    #[inline]
    #[must_use]
    pub fn device_scale(&self) -> f64 {
        self.device_scale
    }
}

/// The owner of all per-frame rendering state.
///
/// Holds the single frame lock shared between the framework thread and the
/// embedder's native input thread. The framework thread takes it around the
/// per-frame pipeline and pointer dispatch; the input thread takes it only
/// inside [`hit_test_platform_view`](Self::hit_test_platform_view). Clones
/// share the same state, so the embedder keeps one handle and the framework
/// another.
///
/// # Per-frame entrypoints
///
/// ```text
/// reset_frame()
/// record_dirty_layers(dirty, options, device_scale)
/// composite_layer_tree(backend_canvas)     // also resolves view geometry
/// flush_geometry_to_sink(sink)
/// ```
///
/// A panic inside any paint procedure is contained here: the frame turns
/// into an error, the panic is logged, and the next frame starts clean.
#[derive(Debug, Clone)]
pub struct RenderContext {
    frame: Arc<Mutex<FrameState>>,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderContext {
    /// Creates a context with an empty tree and no root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frame: Arc::new(Mutex::new(FrameState::new())),
        }
    }

    /// Acquires the frame lock.
    ///
    /// Layout integration mutates the tree through this guard. The per-frame
    /// entrypoints and the hit-test arbiter acquire the lock themselves; do
    /// not call them while holding a guard.
    pub fn frame(&self) -> MutexGuard<'_, FrameState> {
        self.frame.lock()
    }

    // ========================================================================
    // Per-frame entrypoints
    // ========================================================================

    /// Clears frame-local geometry state. Call at the start of every frame.
    pub fn reset_frame(&self) {
        self.frame.lock().embedder.reset_frame();
    }

    /// Records every dirty boundary in `dirty` (sorted parents before
    /// children), deepest first.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError`] on recording defects, and
    /// [`FrameError::PaintPanicked`] when a paint procedure panics; either
    /// way the remaining frame should be abandoned.
    pub fn record_dirty_layers(
        &self,
        dirty: &[RenderId],
        options: &RasterOptions,
        device_scale: f64,
    ) -> Result<(), FrameError> {
        let mut frame = self.frame.lock();
        frame.device_scale = device_scale;
        if options.force_repaint {
            frame.tree.mark_all_boundaries_dirty();
        }
        debug!(count = dirty.len(), device_scale, "recording dirty boundaries");
        Self::contain_panic(|| frame.tree.record_dirty_layers(dirty))
    }

    /// Composites the recorded layer tree onto `canvas` and, in the same
    /// pass, replays the op stream draw-free to resolve platform view
    /// geometry.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError`] when no root is attached, the root boundary
    /// has no layer or content, or a paint-level panic escapes a nested
    /// replay.
    pub fn composite_layer_tree(&self, canvas: &mut dyn Canvas) -> Result<(), FrameError> {
        let mut frame = self.frame.lock();
        let root = frame.root.ok_or(FrameError::NoRoot)?;

        let FrameState { tree, embedder, .. } = &mut *frame;
        let root_node = tree.node(root).ok_or(FrameError::NodeMissing(root))?;
        let root_layer = root_node.layer().ok_or(FrameError::RootLayerMissing(root))?;

        Self::contain_panic(|| {
            CompositingCanvas::new(canvas, tree.layers()).composite(root_layer)?;

            // Geometry resolution replays the identical op stream, so the
            // sink sees views in the order compositing encountered them.
            if let Some(content) = tree.layers().get(root_layer).and_then(|l| l.content().cloned())
            {
                let mut geometry = GeometryCanvas::new(embedder, tree.layers());
                content.replay(&mut geometry);
            }
            Ok(())
        })
    }

    /// Reports the frame's platform view geometry to `sink`, in embed
    /// order. Sink failures are logged per view and never fail the frame.
    pub fn flush_geometry_to_sink(&self, sink: &mut dyn PlatformViewSink) {
        self.frame.lock().embedder.flush_to_sink(sink);
    }

    // ========================================================================
    // Hit-test arbitration
    // ========================================================================

    /// Decides whether a native touch at device pixel `(x, y)` belongs to
    /// platform view `view_id`.
    ///
    /// Called synchronously by the embedder on its input thread before
    /// dispatching each touch; this predicate is the only touch-routing
    /// mechanism and is side-effect free. Walks the hit path front to back:
    /// the first platform-view owner decides by id match, the first
    /// framework pointer handler claims the touch for the framework, and
    /// decorative entries are skipped.
    #[must_use]
    pub fn hit_test_platform_view(&self, view_id: PlatformViewId, x: f64, y: f64) -> bool {
        let frame = self.frame.lock();
        let Some(root) = frame.root else {
            return false;
        };
        let scale = frame.device_scale;
        let position = Offset::new(x / scale, y / scale);

        let mut result = HitTestResult::new();
        if !frame.tree.hit_test(root, position, &mut result) || result.is_empty() {
            return false;
        }
        for entry in result.entries() {
            match entry.target {
                HitTarget::PlatformView(id) => return id == view_id,
                HitTarget::Pointer => return false,
                HitTarget::Decoration => {}
            }
        }
        false
    }

    // ========================================================================
    // Panic containment
    // ========================================================================

    fn contain_panic(
        work: impl FnOnce() -> Result<(), FrameError>,
    ) -> Result<(), FrameError> {
        match catch_unwind(AssertUnwindSafe(work)) {
            Ok(result) => result,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                error!(message = %message, "paint panicked; abandoning frame");
                Err(FrameError::PaintPanicked { message })
            }
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "opaque panic payload".to_string()
    }
}
