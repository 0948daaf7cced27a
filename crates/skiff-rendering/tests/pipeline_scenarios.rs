//! End-to-end frame pipeline scenarios: build a render tree, run the
//! record/composite/flush phases, and check what the backend canvas and the
//! platform sink observe.

use skiff_foundation::{PlatformViewId, RenderId};
use skiff_layer::{PlatformViewSink, SinkError, ViewGeometry};
use skiff_painting::Canvas;
use skiff_rendering::objects::{
    RenderClipRect, RenderColoredBox, RenderOcclusionHint, RenderPlatformView,
    RenderPointerListener, RenderRepaintBoundary, RenderStack,
};
use skiff_rendering::{BoxParentData, RasterOptions, RenderContext, RenderObject};
use skiff_types::{Color, ImageHandle, Offset, Paint, Path, RRect, Rect, Size, TextLayout};

// ============================================================================
// Test doubles
// ============================================================================

/// Backend canvas that counts draw calls.
#[derive(Debug, Default)]
struct CountingBackend {
    draws: usize,
}

impl Canvas for CountingBackend {
    fn save(&mut self) {}
    fn restore(&mut self) {}
    fn save_layer(&mut self, _: Rect, _: &Paint) {}
    fn save_layer_alpha(&mut self, _: Rect, _: u8) {}
    fn save_layer_blur(&mut self, _: Rect, _: f64) {}
    fn translate(&mut self, _: f64, _: f64) {}
    fn scale(&mut self, _: f64, _: f64) {}
    fn rotate(&mut self, _: f64) {}
    fn clip_rect(&mut self, _: Rect) {}
    fn clip_rrect(&mut self, _: &RRect) {}
    fn clip_path(&mut self, _: &Path) {}
    fn draw_rect(&mut self, _: Rect, _: &Paint) {
        self.draws += 1;
    }
    fn draw_rrect(&mut self, _: &RRect, _: &Paint) {
        self.draws += 1;
    }
    fn draw_path(&mut self, _: &Path, _: &Paint) {
        self.draws += 1;
    }
    fn draw_image(&mut self, _: ImageHandle, _: Offset, _: &Paint) {
        self.draws += 1;
    }
    fn draw_text(&mut self, _: &TextLayout, _: Offset) {
        self.draws += 1;
    }
    fn draw_shadow(&mut self, _: &Path, _: Color, _: f64) {
        self.draws += 1;
    }
}

/// Sink that records every geometry update.
#[derive(Debug, Default)]
struct RecordingSink {
    updates: Vec<ViewGeometry>,
}

impl PlatformViewSink for RecordingSink {
    fn update_view_geometry(&mut self, geometry: ViewGeometry) -> Result<(), SinkError> {
        self.updates.push(geometry);
        Ok(())
    }
}

/// Runs one full frame and returns the sink updates plus backend draw count.
fn run_frame(context: &RenderContext, device_scale: f64) -> (Vec<ViewGeometry>, usize) {
    context.reset_frame();
    let dirty = context.frame().tree().dirty_boundaries();
    context
        .record_dirty_layers(&dirty, &RasterOptions::default(), device_scale)
        .expect("recording failed");

    let mut backend = CountingBackend::default();
    context
        .composite_layer_tree(&mut backend)
        .expect("compositing failed");

    let mut sink = RecordingSink::default();
    context.flush_geometry_to_sink(&mut sink);
    (sink.updates, backend.draws)
}

fn sized(context: &RenderContext, object: impl RenderObject + 'static, size: Size) -> RenderId {
    let mut frame = context.frame();
    let id = frame.tree_mut().insert(object);
    frame.tree_mut().set_size(id, size);
    id
}

fn adopt_at(context: &RenderContext, parent: RenderId, child: RenderId, offset: Offset) {
    let mut frame = context.frame();
    frame.tree_mut().adopt(parent, child);
    frame
        .tree_mut()
        .set_parent_data(child, BoxParentData::new(offset));
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn scrolled_content_reports_clipped_view() {
    let context = RenderContext::new();
    let root = sized(&context, RenderRepaintBoundary::new(), Size::new(400.0, 300.0));
    let clip = sized(&context, RenderClipRect::new(), Size::new(400.0, 300.0));
    let view = sized(
        &context,
        RenderPlatformView::new(PlatformViewId::new(10)),
        Size::new(200.0, 100.0),
    );
    adopt_at(&context, root, clip, Offset::ZERO);
    // Scrolled up by 50 logical pixels.
    adopt_at(&context, clip, view, Offset::new(0.0, -50.0));
    context.frame().set_root(Some(root));

    let (updates, _) = run_frame(&context, 1.0);

    assert_eq!(updates.len(), 1);
    let update = &updates[0];
    assert_eq!(update.view_id, PlatformViewId::new(10));
    assert_eq!(update.offset, Offset::new(0.0, -50.0));
    assert_eq!(update.size, Size::new(200.0, 100.0));
    assert_eq!(update.clip_bounds, Some(Rect::from_xywh(0.0, 0.0, 400.0, 300.0)));
    assert_eq!(update.visible_rect, Rect::from_ltrb(0.0, 0.0, 200.0, 50.0));
    assert!(update.occlusion_paths.is_empty());
}

#[test]
fn nested_boundaries_accumulate_translation() {
    let context = RenderContext::new();
    let root = sized(&context, RenderRepaintBoundary::new(), Size::new(400.0, 300.0));
    let child = sized(&context, RenderRepaintBoundary::new(), Size::new(60.0, 40.0));
    let view = sized(
        &context,
        RenderPlatformView::new(PlatformViewId::new(42)),
        Size::new(50.0, 30.0),
    );
    adopt_at(&context, root, child, Offset::new(100.0, 50.0));
    adopt_at(&context, child, view, Offset::new(5.0, 5.0));
    context.frame().set_root(Some(root));

    let (updates, _) = run_frame(&context, 1.0);

    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].view_id, PlatformViewId::new(42));
    assert_eq!(updates[0].offset, Offset::new(105.0, 55.0));
}

#[test]
fn mid_frame_occluder_hides_earlier_view_only() {
    let context = RenderContext::new();
    let root = sized(&context, RenderRepaintBoundary::new(), Size::new(800.0, 600.0));
    let view_a = sized(
        &context,
        RenderPlatformView::new(PlatformViewId::new(1)),
        Size::new(100.0, 100.0),
    );
    let overlay = sized(&context, RenderOcclusionHint::new(), Size::new(800.0, 600.0));
    let view_b = sized(
        &context,
        RenderPlatformView::new(PlatformViewId::new(2)),
        Size::new(50.0, 50.0),
    );
    adopt_at(&context, root, view_a, Offset::ZERO);
    adopt_at(&context, root, overlay, Offset::ZERO);
    adopt_at(&context, root, view_b, Offset::new(200.0, 200.0));
    context.frame().set_root(Some(root));

    let (updates, _) = run_frame(&context, 1.0);
    assert_eq!(updates.len(), 2);

    // A was embedded before the full-screen overlay: hidden, one mask path.
    let a = &updates[0];
    assert_eq!(a.view_id, PlatformViewId::new(1));
    assert_eq!(a.clip_bounds, Some(Rect::EMPTY));
    assert_eq!(a.occlusion_paths.len(), 1);

    // B came after the overlay: untouched.
    let b = &updates[1];
    assert_eq!(b.view_id, PlatformViewId::new(2));
    assert_eq!(b.clip_bounds, Some(Rect::from_xywh(200.0, 200.0, 50.0, 50.0)));
    assert!(b.occlusion_paths.is_empty());
}

#[test]
fn hit_test_routes_touches_between_view_and_framework() {
    let context = RenderContext::new();
    let root = sized(&context, RenderRepaintBoundary::new(), Size::new(800.0, 600.0));
    let stack = sized(&context, RenderStack::new(), Size::new(800.0, 600.0));
    let view = sized(
        &context,
        RenderPlatformView::new(PlatformViewId::new(7)),
        Size::new(100.0, 100.0),
    );
    let decoration = sized(&context, RenderColoredBox::new(Color::RED), Size::new(100.0, 100.0));
    adopt_at(&context, root, stack, Offset::ZERO);
    adopt_at(&context, stack, view, Offset::ZERO);
    adopt_at(&context, stack, decoration, Offset::ZERO);
    context.frame().set_root(Some(root));

    // Record at device scale 2: native touches arrive in device pixels.
    let (_, _) = run_frame(&context, 2.0);

    assert!(context.hit_test_platform_view(PlatformViewId::new(7), 20.0, 20.0));
    assert!(!context.hit_test_platform_view(PlatformViewId::new(8), 20.0, 20.0));

    // A pointer handler stacked above the view claims the touch for the
    // framework.
    let listener = sized(&context, RenderPointerListener::new(), Size::new(100.0, 100.0));
    adopt_at(&context, stack, listener, Offset::ZERO);
    assert!(!context.hit_test_platform_view(PlatformViewId::new(7), 20.0, 20.0));
}

#[test]
fn moving_a_boundary_child_rerecords_only_the_parent() {
    let context = RenderContext::new();
    let root = sized(&context, RenderRepaintBoundary::new(), Size::new(400.0, 300.0));
    let child = sized(&context, RenderRepaintBoundary::new(), Size::new(50.0, 50.0));
    let content = sized(&context, RenderColoredBox::new(Color::BLUE), Size::new(50.0, 50.0));
    adopt_at(&context, root, child, Offset::new(10.0, 10.0));
    adopt_at(&context, child, content, Offset::ZERO);
    context.frame().set_root(Some(root));

    run_frame(&context, 1.0);

    let (child_layer, child_content_before) = {
        let frame = context.frame();
        let layer = frame.tree().node(child).unwrap().layer().unwrap();
        let ops = frame.tree().layers().get(layer).unwrap().content().unwrap().ops().as_ptr();
        (layer, ops)
    };

    // Move the child: only the parent boundary goes dirty.
    context
        .frame()
        .tree_mut()
        .set_parent_data(child, BoxParentData::new(Offset::new(60.0, 10.0)));
    {
        let frame = context.frame();
        assert_eq!(frame.tree().dirty_boundaries(), vec![root]);
    }

    run_frame(&context, 1.0);

    let frame = context.frame();
    let child_content_after = frame
        .tree()
        .layers()
        .get(child_layer)
        .unwrap()
        .content()
        .unwrap()
        .ops()
        .as_ptr();
    assert_eq!(
        child_content_before, child_content_after,
        "child layer content must survive a pure move"
    );
}

#[test]
fn disposing_a_boundary_leaves_stale_references_harmless() {
    let context = RenderContext::new();
    let root = sized(&context, RenderRepaintBoundary::new(), Size::new(400.0, 300.0));
    let child = sized(&context, RenderRepaintBoundary::new(), Size::new(50.0, 50.0));
    let content = sized(&context, RenderColoredBox::new(Color::GREEN), Size::new(50.0, 50.0));
    adopt_at(&context, root, child, Offset::new(10.0, 10.0));
    adopt_at(&context, child, content, Offset::ZERO);
    context.frame().set_root(Some(root));

    let (_, draws_before) = run_frame(&context, 1.0);
    assert_eq!(draws_before, 1);

    let child_layer = {
        let mut frame = context.frame();
        let layer = frame.tree().node(child).unwrap().layer().unwrap();
        frame.tree_mut().dispose(child);
        layer
    };

    {
        let frame = context.frame();
        assert!(frame.tree().node(child).is_none());
        assert!(frame.tree().layers().get(child_layer).is_none());
    }

    // The parent was dirtied by the disposal; a fresh frame must composite
    // without the child and without crashing. Re-recording the parent drops
    // the stale reference entirely, and even replaying the old list would
    // skip the dead id.
    let (_, draws_after) = run_frame(&context, 1.0);
    assert_eq!(draws_after, 0);
}

#[test]
fn fast_path_matches_compositing_canvas_reports() {
    // Same scene, no occlusions: the geometry pass and the compositing
    // canvas fast path must agree on offset, size, and clip.
    use skiff_layer::CompositingCanvas;

    let context = RenderContext::new();
    let root = sized(&context, RenderRepaintBoundary::new(), Size::new(400.0, 300.0));
    let clip = sized(&context, RenderClipRect::new(), Size::new(250.0, 250.0));
    let view = sized(
        &context,
        RenderPlatformView::new(PlatformViewId::new(5)),
        Size::new(300.0, 80.0),
    );
    adopt_at(&context, root, clip, Offset::new(20.0, 30.0));
    adopt_at(&context, clip, view, Offset::new(5.0, 5.0));
    context.frame().set_root(Some(root));

    let (geometry_updates, _) = run_frame(&context, 1.0);

    let compositing_updates = {
        let frame = context.frame();
        let root_layer = frame.tree().node(root).unwrap().layer().unwrap();
        let mut backend = CountingBackend::default();
        let mut sink = RecordingSink::default();
        CompositingCanvas::with_sink(&mut backend, frame.tree().layers(), &mut sink)
            .composite(root_layer)
            .unwrap();
        sink.updates
    };

    assert_eq!(geometry_updates, compositing_updates);
}
