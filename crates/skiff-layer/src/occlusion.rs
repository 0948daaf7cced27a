//! Occlusion math for platform view geometry.
//!
//! Two independent strategies are computed from the same occluder set, so
//! every embedder gets the one its platform can honor:
//!
//! - **Path masking**: the occluding shapes are merged where they overlap
//!   and capped in count, then delivered as cut-out masks for platforms
//!   with shaped layer masks.
//! - **Rect collapsing**: the occluders' bounds are iteratively subtracted
//!   from the view's visible rect, producing one axis-aligned clip (or a
//!   hide verdict) for platforms with only rectangular clipping.

use skiff_types::{Path, Rect};

/// Upper bound on delivered occlusion paths per view.
///
/// Shaped masks cost the platform compositor per shape; past this count the
/// whole set is replaced by one rect covering the union of their bounds.
pub const MAX_OCCLUSION_PATHS: usize = 8;

/// Subtracts `occluder` from `view`, staying rectangular.
///
/// Returns `(remaining, hidden)`:
///
/// - no overlap: `view` unchanged, not hidden
/// - occluder contains view: empty, hidden
/// - occluder covers one full-width or full-height strip touching an edge:
///   the surviving strip, not hidden
/// - anything else (center hole, corner bite): empty, hidden
///
/// The last case is deliberate. The collapsed clip is a single axis-aligned
/// rect; a non-rectangular residual cannot be represented, and showing too
/// much would leak native content through framework UI, so the view hides.
#[must_use]
pub fn subtract_rect(view: Rect, occluder: Rect) -> (Rect, bool) {
    let overlap = view.intersect(occluder);
    if overlap.is_empty() {
        return (view, false);
    }

    let covers_width = occluder.left <= view.left && occluder.right >= view.right;
    let covers_height = occluder.top <= view.top && occluder.bottom >= view.bottom;

    if covers_width && covers_height {
        return (Rect::EMPTY, true);
    }

    if covers_width {
        if occluder.top <= view.top {
            // Top strip covered; the bottom remains.
            return (
                Rect::from_ltrb(view.left, occluder.bottom, view.right, view.bottom),
                false,
            );
        }
        if occluder.bottom >= view.bottom {
            // Bottom strip covered; the top remains.
            return (
                Rect::from_ltrb(view.left, view.top, view.right, occluder.top),
                false,
            );
        }
        // Full-width band through the middle: two residual strips.
        return (Rect::EMPTY, true);
    }

    if covers_height {
        if occluder.left <= view.left {
            return (
                Rect::from_ltrb(occluder.right, view.top, view.right, view.bottom),
                false,
            );
        }
        if occluder.right >= view.right {
            return (
                Rect::from_ltrb(view.left, view.top, occluder.left, view.bottom),
                false,
            );
        }
        return (Rect::EMPTY, true);
    }

    // Partial overlap on both axes: the residual is L-shaped or worse.
    (Rect::EMPTY, true)
}

/// Merges occlusion paths whose bounding rects overlap.
///
/// Any overlapping pair is replaced by the canonical rect path over the
/// union of their bounds, repeated to a fixpoint. Overlapping shapes fed
/// separately into an even-odd mask would cancel where they intersect,
/// punching a hole that exposes the platform view; merging removes the
/// overlap before the mask is built. Paths that overlap nothing keep their
/// original precise shape.
#[must_use]
pub fn merge_overlapping_paths(paths: Vec<Path>) -> Vec<Path> {
    let mut merged = paths;
    loop {
        let Some((i, j, union)) = find_overlapping_pair(&merged) else {
            return merged;
        };
        // Remove the later index first so the earlier stays valid.
        merged.swap_remove(j);
        merged.swap_remove(i);
        merged.push(Path::from_rect(union));
    }
}

fn find_overlapping_pair(paths: &[Path]) -> Option<(usize, usize, Rect)> {
    for i in 0..paths.len() {
        let bounds_i = paths[i].bounds();
        for j in (i + 1)..paths.len() {
            let bounds_j = paths[j].bounds();
            if bounds_i.intersects(bounds_j) {
                return Some((i, j, bounds_i.union(bounds_j)));
            }
        }
    }
    None
}

/// Applies the [`MAX_OCCLUSION_PATHS`] cap.
///
/// If `paths` exceeds the cap, the whole set collapses into one rect path
/// over the union of every path's bounds.
#[must_use]
pub fn cap_occlusion_paths(paths: Vec<Path>) -> Vec<Path> {
    if paths.len() <= MAX_OCCLUSION_PATHS {
        return paths;
    }
    let union = paths
        .iter()
        .fold(Rect::EMPTY, |acc, path| acc.union(path.bounds()));
    vec![Path::from_rect(union)]
}
