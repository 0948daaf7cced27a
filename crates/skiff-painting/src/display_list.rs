//! Immutable, replayable display lists.

use std::sync::Arc;

use skiff_types::Rect;

use crate::{Canvas, DrawOp};

/// An ordered, immutable sequence of drawing operations.
///
/// Produced by [`PictureRecorder::end_recording`](crate::PictureRecorder),
/// stored in a repaint boundary's layer, and replayed verbatim against any
/// canvas any number of times. Cloning is cheap (the op sequence is shared).
#[derive(Clone)]
pub struct DisplayList {
    ops: Arc<[DrawOp]>,
    bounds: Rect,
}

impl DisplayList {
    pub(crate) fn new(ops: Vec<DrawOp>, bounds: Rect) -> Self {
        Self {
            ops: ops.into(),
            bounds,
        }
    }

    /// Returns the recorded operations.
    #[inline]
    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Returns the number of recorded operations.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns true if nothing was recorded.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Returns the bounds the recording canvas was sized to.
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Replays every operation, in order, against `canvas`.
    ///
    /// The ops are dispatched exactly as originally invoked; what happens is
    /// entirely up to the target canvas (forwarding, state tracking, or
    /// nothing at all).
    pub fn replay(&self, canvas: &mut dyn Canvas) {
        for op in self.ops.iter() {
            match op {
                DrawOp::Save => canvas.save(),
                DrawOp::Restore => canvas.restore(),
                DrawOp::SaveLayer { bounds, paint } => canvas.save_layer(*bounds, paint),
                DrawOp::SaveLayerAlpha { bounds, alpha } => {
                    canvas.save_layer_alpha(*bounds, *alpha);
                }
                DrawOp::SaveLayerBlur { bounds, sigma } => {
                    canvas.save_layer_blur(*bounds, *sigma);
                }
                DrawOp::Translate { dx, dy } => canvas.translate(*dx, *dy),
                DrawOp::Scale { sx, sy } => canvas.scale(*sx, *sy),
                DrawOp::Rotate { radians } => canvas.rotate(*radians),
                DrawOp::ClipRect(rect) => canvas.clip_rect(*rect),
                DrawOp::ClipRRect(rrect) => canvas.clip_rrect(rrect),
                DrawOp::ClipPath(path) => canvas.clip_path(path),
                DrawOp::DrawRect { rect, paint } => canvas.draw_rect(*rect, paint),
                DrawOp::DrawRRect { rrect, paint } => canvas.draw_rrect(rrect, paint),
                DrawOp::DrawPath { path, paint } => canvas.draw_path(path, paint),
                DrawOp::DrawImage {
                    image,
                    offset,
                    paint,
                } => canvas.draw_image(*image, *offset, paint),
                DrawOp::DrawText { layout, offset } => canvas.draw_text(layout, *offset),
                DrawOp::DrawShadow {
                    path,
                    color,
                    elevation,
                } => canvas.draw_shadow(path, *color, *elevation),
                DrawOp::EmbedPlatformView { view_id, size } => {
                    canvas.embed_platform_view(*view_id, *size);
                }
                DrawOp::OcclusionMask { path } => canvas.occlude_platform_views(path),
                DrawOp::DrawChildLayer { layer } => canvas.draw_child_layer(*layer),
            }
        }
    }
}

impl std::fmt::Debug for DisplayList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplayList")
            .field("bounds", &self.bounds)
            .field("op_count", &self.ops.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use skiff_foundation::PlatformViewId;
    use skiff_types::{Color, Paint, Size};

    use super::*;
    use crate::PictureRecorder;

    /// Canvas that records which method names were dispatched.
    #[derive(Default)]
    struct CallLog {
        calls: Vec<&'static str>,
    }

    impl Canvas for CallLog {
        fn save(&mut self) {
            self.calls.push("save");
        }
        fn restore(&mut self) {
            self.calls.push("restore");
        }
        fn save_layer(&mut self, _bounds: Rect, _paint: &Paint) {
            self.calls.push("save_layer");
        }
        fn save_layer_alpha(&mut self, _bounds: Rect, _alpha: u8) {
            self.calls.push("save_layer_alpha");
        }
        fn save_layer_blur(&mut self, _bounds: Rect, _sigma: f64) {
            self.calls.push("save_layer_blur");
        }
        fn translate(&mut self, _dx: f64, _dy: f64) {
            self.calls.push("translate");
        }
        fn scale(&mut self, _sx: f64, _sy: f64) {
            self.calls.push("scale");
        }
        fn rotate(&mut self, _radians: f64) {
            self.calls.push("rotate");
        }
        fn clip_rect(&mut self, _rect: Rect) {
            self.calls.push("clip_rect");
        }
        fn clip_rrect(&mut self, _rrect: &skiff_types::RRect) {
            self.calls.push("clip_rrect");
        }
        fn clip_path(&mut self, _path: &skiff_types::Path) {
            self.calls.push("clip_path");
        }
        fn draw_rect(&mut self, _rect: Rect, _paint: &Paint) {
            self.calls.push("draw_rect");
        }
        fn draw_rrect(&mut self, _rrect: &skiff_types::RRect, _paint: &Paint) {
            self.calls.push("draw_rrect");
        }
        fn draw_path(&mut self, _path: &skiff_types::Path, _paint: &Paint) {
            self.calls.push("draw_path");
        }
        fn draw_image(
            &mut self,
            _image: skiff_types::ImageHandle,
            _offset: skiff_types::Offset,
            _paint: &Paint,
        ) {
            self.calls.push("draw_image");
        }
        fn draw_text(&mut self, _layout: &skiff_types::TextLayout, _offset: skiff_types::Offset) {
            self.calls.push("draw_text");
        }
        fn draw_shadow(&mut self, _path: &skiff_types::Path, _color: Color, _elevation: f64) {
            self.calls.push("draw_shadow");
        }
        fn embed_platform_view(&mut self, _view_id: PlatformViewId, _size: Size) {
            self.calls.push("embed_platform_view");
        }
    }

    #[test]
    fn test_replay_dispatches_in_order() {
        let mut recorder = PictureRecorder::new(Size::new(100.0, 100.0));
        recorder.save();
        recorder.translate(10.0, 0.0);
        recorder.draw_rect(Rect::from_xywh(0.0, 0.0, 10.0, 10.0), &Paint::fill(Color::RED));
        recorder.embed_platform_view(PlatformViewId::new(1), Size::new(5.0, 5.0));
        recorder.restore();
        let list = recorder.end_recording().unwrap();

        let mut log = CallLog::default();
        list.replay(&mut log);
        assert_eq!(
            log.calls,
            vec![
                "save",
                "translate",
                "draw_rect",
                "embed_platform_view",
                "restore"
            ]
        );
    }

    #[test]
    fn test_replay_is_repeatable() {
        let mut recorder = PictureRecorder::new(Size::new(10.0, 10.0));
        recorder.draw_rect(Rect::from_xywh(0.0, 0.0, 1.0, 1.0), &Paint::default());
        let list = recorder.end_recording().unwrap();

        let mut first = CallLog::default();
        let mut second = CallLog::default();
        list.replay(&mut first);
        list.replay(&mut second);
        assert_eq!(first.calls, second.calls);
    }

    #[test]
    fn test_display_list_debug_shows_op_count() {
        let mut recorder = PictureRecorder::new(Size::new(10.0, 10.0));
        recorder.draw_rect(Rect::ZERO, &Paint::default());
        let list = recorder.end_recording().unwrap();
        assert!(format!("{list:?}").contains("op_count: 1"));
    }
}
