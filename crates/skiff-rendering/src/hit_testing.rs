//! Hit testing - which render objects sit under a position.

use smallvec::SmallVec;

use skiff_foundation::PlatformViewId;
use skiff_types::Offset;

/// The interaction capability a render object exposes to hit testing.
///
/// Capabilities are explicit tagged variants rather than downcast probes;
/// the hit-test arbiter branches on the tag of each entry it walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The object owns an embedded platform view with this id; a matching
    /// native touch belongs to that view.
    PlatformView(PlatformViewId),

    /// The object handles pointer events in the framework; it obscures any
    /// platform view behind it.
    Pointer,

    /// Purely visual; hit testing records it but touch routing skips it.
    Decoration,
}

/// One object hit during traversal, with the position in its local
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTestEntry {
    /// The object's interaction capability.
    pub target: HitTarget,

    /// The hit position in the object's coordinate space.
    pub position: Offset,
}

impl HitTestEntry {
    /// Creates an entry.
    #[inline]
    #[must_use]
    pub const fn new(target: HitTarget, position: Offset) -> Self {
        Self { target, position }
    }
}

/// Accumulates hit entries during traversal, front-most first.
///
/// Children are visited before their parent records itself, and siblings in
/// reverse paint order, so iterating [`entries`](Self::entries) walks the
/// scene front to back.
#[derive(Debug, Default)]
pub struct HitTestResult {
    entries: SmallVec<[HitTestEntry; 8]>,
}

impl HitTestResult {
    /// Creates an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a hit entry.
    pub fn add(&mut self, entry: HitTestEntry) {
        self.entries.push(entry);
    }

    /// Returns the recorded entries, front-most first.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[HitTestEntry] {
        &self.entries
    }

    /// Returns true if nothing was hit.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns how many entries were recorded.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_preserves_insertion_order() {
        let mut result = HitTestResult::new();
        result.add(HitTestEntry::new(HitTarget::Decoration, Offset::ZERO));
        result.add(HitTestEntry::new(
            HitTarget::PlatformView(PlatformViewId::new(1)),
            Offset::new(1.0, 1.0),
        ));

        assert_eq!(result.len(), 2);
        assert_eq!(result.entries()[0].target, HitTarget::Decoration);
        assert_eq!(
            result.entries()[1].target,
            HitTarget::PlatformView(PlatformViewId::new(1))
        );
    }
}
