//! Layer - a retained display list for one repaint boundary.

use skiff_painting::DisplayList;
use skiff_types::Size;

/// A retained display list plus a dirty flag.
///
/// Exactly one layer exists per repaint boundary, created lazily on the
/// boundary's first `ensure_layer()` and released on disposal. The layer's
/// identity is its [`LayerId`](skiff_foundation::LayerId) in the
/// [`LayerTree`](crate::LayerTree); parents reference child layers by that
/// id in `DrawChildLayer` ops, so replacing a layer's content never breaks
/// a parent's recording.
///
/// # Invariants
///
/// - `dirty == true` means the next recording pass must re-record the
///   boundary; a freshly created layer starts dirty.
/// - [`set_content`](Self::set_content) clears the dirty flag and drops the
///   previous display list.
/// - A layer without content cannot be composited as a root.
#[derive(Debug)]
pub struct Layer {
    /// The recorded content, absent until the first recording.
    content: Option<DisplayList>,

    /// Whether the next recording pass must re-record this boundary.
    dirty: bool,

    /// The boundary's size at the time the layer was last touched.
    size: Size,
}

impl Layer {
    /// Creates an empty, dirty layer sized to its boundary.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            content: None,
            dirty: true,
            size,
        }
    }

    /// Returns the recorded content, if any.
    #[inline]
    #[must_use]
    pub fn content(&self) -> Option<&DisplayList> {
        self.content.as_ref()
    }

    /// Returns true if content has been recorded.
    #[inline]
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }

    /// Replaces the content and clears the dirty flag.
    ///
    /// The previous display list, if any, is dropped.
    pub fn set_content(&mut self, content: DisplayList) {
        self.content = Some(content);
        self.dirty = false;
    }

    /// Drops the content without touching the dirty flag.
    ///
    /// Used at disposal so that a stale `DrawChildLayer` reference replays
    /// as a no-op even if the slot is briefly observed before removal.
    pub fn clear_content(&mut self) {
        self.content = None;
    }

    /// Returns true if the boundary must be re-recorded.
    #[inline]
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Marks the layer for re-recording.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns the boundary size this layer was last sized to.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Records a new boundary size.
    #[inline]
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }
}

#[cfg(test)]
mod tests {
    use skiff_painting::PictureRecorder;

    use super::*;

    fn empty_list() -> DisplayList {
        PictureRecorder::new(Size::ZERO).end_recording().unwrap()
    }

    #[test]
    fn test_new_layer_is_dirty_and_empty() {
        let layer = Layer::new(Size::new(10.0, 10.0));
        assert!(layer.is_dirty());
        assert!(!layer.has_content());
        assert_eq!(layer.size(), Size::new(10.0, 10.0));
    }

    #[test]
    fn test_set_content_clears_dirty() {
        let mut layer = Layer::new(Size::ZERO);
        layer.set_content(empty_list());
        assert!(!layer.is_dirty());
        assert!(layer.has_content());
    }

    #[test]
    fn test_mark_dirty_preserves_content() {
        let mut layer = Layer::new(Size::ZERO);
        layer.set_content(empty_list());
        layer.mark_dirty();
        assert!(layer.is_dirty());
        assert!(layer.has_content());
    }

    #[test]
    fn test_clear_content_keeps_dirty_flag() {
        let mut layer = Layer::new(Size::ZERO);
        layer.set_content(empty_list());
        layer.clear_content();
        assert!(!layer.has_content());
        assert!(!layer.is_dirty());
    }
}
