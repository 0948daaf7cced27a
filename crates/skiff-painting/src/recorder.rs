//! Recording canvas.

use tracing::debug;

use skiff_foundation::{LayerId, PlatformViewId};
use skiff_types::{Color, ImageHandle, Offset, Paint, Path, RRect, Rect, Size, TextLayout};

use crate::{Canvas, DisplayList, DrawOp, RecordError};

/// A canvas that records every invocation into a growing op sequence.
///
/// Created sized to the repaint boundary being recorded; consumed by
/// [`end_recording`](Self::end_recording), which makes double-ending
/// impossible by construction.
///
/// Save/restore symmetry is tracked across all save variants: a restore
/// matches the last unmatched save whether it was a plain save or any of
/// the save-layer forms. Pairing defects are reported at end time.
#[derive(Debug)]
pub struct PictureRecorder {
    ops: Vec<DrawOp>,
    bounds: Rect,
    open_saves: usize,
    saw_unmatched_restore: bool,
}

impl PictureRecorder {
    /// Begins a recording sized to `size`.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            ops: Vec::new(),
            bounds: Rect::from_size(size),
            open_saves: 0,
            saw_unmatched_restore: false,
        }
    }

    /// Returns the number of ops recorded so far.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns true if nothing has been recorded yet.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Finishes the recording and returns the immutable display list.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::UnbalancedSave`] if saves are still open and
    /// [`RecordError::UnmatchedRestore`] if a restore was issued without a
    /// save; both indicate a paint procedure defect.
    pub fn end_recording(self) -> Result<DisplayList, RecordError> {
        if self.saw_unmatched_restore {
            return Err(RecordError::UnmatchedRestore);
        }
        if self.open_saves > 0 {
            return Err(RecordError::UnbalancedSave {
                open_saves: self.open_saves,
            });
        }
        debug!(op_count = self.ops.len(), "recording finished");
        Ok(DisplayList::new(self.ops, self.bounds))
    }

    #[inline]
    fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    #[inline]
    fn push_save(&mut self, op: DrawOp) {
        self.open_saves += 1;
        self.ops.push(op);
    }
}

impl Canvas for PictureRecorder {
    fn save(&mut self) {
        self.push_save(DrawOp::Save);
    }

    fn restore(&mut self) {
        if self.open_saves == 0 {
            self.saw_unmatched_restore = true;
            return;
        }
        self.open_saves -= 1;
        self.push(DrawOp::Restore);
    }

    fn save_layer(&mut self, bounds: Rect, paint: &Paint) {
        self.push_save(DrawOp::SaveLayer {
            bounds,
            paint: *paint,
        });
    }

    fn save_layer_alpha(&mut self, bounds: Rect, alpha: u8) {
        self.push_save(DrawOp::SaveLayerAlpha { bounds, alpha });
    }

    fn save_layer_blur(&mut self, bounds: Rect, sigma: f64) {
        self.push_save(DrawOp::SaveLayerBlur { bounds, sigma });
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.push(DrawOp::Translate { dx, dy });
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.push(DrawOp::Scale { sx, sy });
    }

    fn rotate(&mut self, radians: f64) {
        self.push(DrawOp::Rotate { radians });
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.push(DrawOp::ClipRect(rect));
    }

    fn clip_rrect(&mut self, rrect: &RRect) {
        self.push(DrawOp::ClipRRect(*rrect));
    }

    fn clip_path(&mut self, path: &Path) {
        self.push(DrawOp::ClipPath(path.clone()));
    }

    fn draw_rect(&mut self, rect: Rect, paint: &Paint) {
        self.push(DrawOp::DrawRect {
            rect,
            paint: *paint,
        });
    }

    fn draw_rrect(&mut self, rrect: &RRect, paint: &Paint) {
        self.push(DrawOp::DrawRRect {
            rrect: *rrect,
            paint: *paint,
        });
    }

    fn draw_path(&mut self, path: &Path, paint: &Paint) {
        self.push(DrawOp::DrawPath {
            path: path.clone(),
            paint: *paint,
        });
    }

    fn draw_image(&mut self, image: ImageHandle, offset: Offset, paint: &Paint) {
        self.push(DrawOp::DrawImage {
            image,
            offset,
            paint: *paint,
        });
    }

    fn draw_text(&mut self, layout: &TextLayout, offset: Offset) {
        self.push(DrawOp::DrawText {
            layout: layout.clone(),
            offset,
        });
    }

    fn draw_shadow(&mut self, path: &Path, color: Color, elevation: f64) {
        self.push(DrawOp::DrawShadow {
            path: path.clone(),
            color,
            elevation,
        });
    }

    fn embed_platform_view(&mut self, view_id: PlatformViewId, size: Size) {
        self.push(DrawOp::EmbedPlatformView { view_id, size });
    }

    fn occlude_platform_views(&mut self, mask: &Path) {
        self.push(DrawOp::OcclusionMask { path: mask.clone() });
    }

    fn draw_child_layer(&mut self, layer: LayerId) {
        self.push(DrawOp::DrawChildLayer { layer });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_appends_ops_in_order() {
        let mut recorder = PictureRecorder::new(Size::new(50.0, 50.0));
        recorder.translate(1.0, 2.0);
        recorder.clip_rect(Rect::from_xywh(0.0, 0.0, 10.0, 10.0));
        let list = recorder.end_recording().unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.ops()[0], DrawOp::Translate { dx: 1.0, dy: 2.0 });
        assert_eq!(list.bounds(), Rect::from_xywh(0.0, 0.0, 50.0, 50.0));
    }

    #[test]
    fn test_restore_matches_any_save_variant() {
        let mut recorder = PictureRecorder::new(Size::ZERO);
        recorder.save();
        recorder.save_layer_alpha(Rect::ZERO, 128);
        recorder.save_layer_blur(Rect::ZERO, 4.0);
        recorder.restore();
        recorder.restore();
        recorder.restore();
        assert!(recorder.end_recording().is_ok());
    }

    #[test]
    fn test_unbalanced_save_is_an_error() {
        let mut recorder = PictureRecorder::new(Size::ZERO);
        recorder.save();
        recorder.save_layer(Rect::ZERO, &Paint::default());
        recorder.restore();
        assert_eq!(
            recorder.end_recording().unwrap_err(),
            RecordError::UnbalancedSave { open_saves: 1 }
        );
    }

    #[test]
    fn test_unmatched_restore_is_an_error() {
        let mut recorder = PictureRecorder::new(Size::ZERO);
        recorder.restore();
        assert_eq!(
            recorder.end_recording().unwrap_err(),
            RecordError::UnmatchedRestore
        );
    }

    #[test]
    fn test_spurious_restore_is_not_recorded() {
        let mut recorder = PictureRecorder::new(Size::ZERO);
        recorder.restore();
        assert!(recorder.is_empty());
    }
}
