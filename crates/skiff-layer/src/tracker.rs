//! Shared transform and clip tracking for replay canvases.

use smallvec::SmallVec;

use skiff_types::{Offset, RRect, Rect};

/// One saved state: the transform and clip-stack depth at save time.
#[derive(Debug, Clone, Copy)]
struct SaveEntry {
    transform: Offset,
    clip_depth: usize,
}

/// Tracks accumulated translation and reduced clip rects during replay.
///
/// Both the compositing canvas and the geometry canvas drive one of these
/// with identical semantics, which is what guarantees they resolve the same
/// global geometry for the same op stream.
///
/// # What is tracked
///
/// - `translate` accumulates into a single global [`Offset`].
/// - `clip_rect` pushes the clip translated to global coordinates and
///   intersected with the previous top, so the top of the stack is always
///   the full reduced clip.
/// - `clip_rrect` is tracked as its outer rect; native views only support
///   rectangular clipping and the precise rounded shape stays a paint-side
///   concern.
/// - `scale`, `rotate`, and `clip_path` are not tracked. Platform views are
///   axis-aligned in logical coordinates; scaling and rotation are either
///   pure paint effects or the device-pixel ratio applied upstream.
///
/// Save entries remember `(transform, clip_depth)` for every save variant,
/// so restore recovers both in one pop.
#[derive(Debug, Default)]
pub struct TransformClipTracker {
    transform: Offset,
    clips: SmallVec<[Rect; 8]>,
    saves: SmallVec<[SaveEntry; 8]>,
}

impl TransformClipTracker {
    /// Creates a tracker with identity transform and no clip.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the accumulated global translation.
    #[inline]
    #[must_use]
    pub fn transform(&self) -> Offset {
        self.transform
    }

    /// Returns the current reduced clip in global coordinates, if any clip
    /// is active.
    #[inline]
    #[must_use]
    pub fn clip(&self) -> Option<Rect> {
        self.clips.last().copied()
    }

    /// Saves the current state. Used for plain saves and every save-layer
    /// variant alike.
    pub fn save(&mut self) {
        self.saves.push(SaveEntry {
            transform: self.transform,
            clip_depth: self.clips.len(),
        });
    }

    /// Restores to the most recent save. A restore without a matching save
    /// is ignored.
    pub fn restore(&mut self) {
        if let Some(entry) = self.saves.pop() {
            self.transform = entry.transform;
            self.clips.truncate(entry.clip_depth);
        }
    }

    /// Accumulates a translation.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.transform += Offset::new(dx, dy);
    }

    /// Pushes a clip rect, reduced against the current clip in global
    /// coordinates.
    pub fn clip_rect(&mut self, rect: Rect) {
        let global = rect.translate(self.transform);
        let reduced = match self.clips.last() {
            Some(top) => top.intersect(global),
            None => global,
        };
        self.clips.push(reduced);
    }

    /// Pushes a rounded-rect clip, tracked as its outer rect.
    pub fn clip_rrect(&mut self, rrect: &RRect) {
        self.clip_rect(rrect.outer_rect());
    }

    /// Clears all state back to identity.
    pub fn reset(&mut self) {
        self.transform = Offset::ZERO;
        self.clips.clear();
        self.saves.clear();
    }
}
