//! LayerTree - slab-based storage for layers.

use slab::Slab;

use skiff_foundation::LayerId;

use crate::Layer;

/// Slab-backed storage for [`Layer`]s, keyed by [`LayerId`].
///
/// Ids are the slab index plus one so `Option<LayerId>` stays pointer-sized.
/// Removing a layer frees the slot; a stale id then resolves to `None`,
/// which is exactly the "absent child layer replays as a no-op" behavior
/// composition relies on.
///
/// # Example
///
/// ```
/// use skiff_layer::{Layer, LayerTree};
/// use skiff_types::Size;
///
/// let mut tree = LayerTree::new();
/// let id = tree.insert(Layer::new(Size::new(100.0, 50.0)));
///
/// assert!(tree.get(id).unwrap().is_dirty());
/// tree.remove(id);
/// assert!(tree.get(id).is_none());
/// ```
#[derive(Debug, Default)]
pub struct LayerTree {
    nodes: Slab<Layer>,
}

impl LayerTree {
    /// Creates an empty layer tree.
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Slab::new() }
    }

    /// Creates a layer tree with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
        }
    }

    /// Inserts a layer and returns its stable id.
    pub fn insert(&mut self, layer: Layer) -> LayerId {
        LayerId::from_index(self.nodes.insert(layer))
    }

    /// Returns true if `id` resolves to a live layer.
    #[inline]
    #[must_use]
    pub fn contains(&self, id: LayerId) -> bool {
        self.nodes.contains(id.index())
    }

    /// Resolves an id to its layer. Stale ids return `None`.
    #[inline]
    #[must_use]
    pub fn get(&self, id: LayerId) -> Option<&Layer> {
        self.nodes.get(id.index())
    }

    /// Resolves an id to its layer mutably. Stale ids return `None`.
    #[inline]
    pub fn get_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.nodes.get_mut(id.index())
    }

    /// Removes a layer, clearing its content first so any observer holding
    /// the slot sees it empty. Returns the removed layer if it was live.
    pub fn remove(&mut self, id: LayerId) -> Option<Layer> {
        if !self.nodes.contains(id.index()) {
            return None;
        }
        let mut layer = self.nodes.remove(id.index());
        layer.clear_content();
        Some(layer)
    }

    /// Returns the number of live layers.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no layers are stored.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use skiff_types::Size;

    use super::*;

    #[test]
    fn test_insert_and_resolve() {
        let mut tree = LayerTree::new();
        let id = tree.insert(Layer::new(Size::new(5.0, 5.0)));
        assert!(tree.contains(id));
        assert_eq!(tree.get(id).unwrap().size(), Size::new(5.0, 5.0));
    }

    #[test]
    fn test_remove_makes_id_stale() {
        let mut tree = LayerTree::new();
        let id = tree.insert(Layer::new(Size::ZERO));
        assert!(tree.remove(id).is_some());
        assert!(!tree.contains(id));
        assert!(tree.get(id).is_none());
        assert!(tree.remove(id).is_none());
    }

    #[test]
    fn test_ids_are_distinct_across_live_layers() {
        let mut tree = LayerTree::new();
        let a = tree.insert(Layer::new(Size::ZERO));
        let b = tree.insert(Layer::new(Size::ZERO));
        assert_ne!(a, b);
        assert_eq!(tree.len(), 2);
    }
}
