//! RenderTree - slab-based storage for render objects.

use slab::Slab;
use tracing::{debug, trace};

use skiff_foundation::{LayerId, RenderId};
use skiff_layer::{Layer, LayerTree};
use skiff_painting::PictureRecorder;
use skiff_types::{Offset, Size};

use crate::{BoxParentData, FrameError, HitTestEntry, HitTestResult, PaintContext, RenderObject};

// ============================================================================
// RENDER NODE
// ============================================================================

/// One node in the render tree: object behavior plus structural state.
///
/// Parent/child links are [`RenderId`]s into the arena, never references;
/// the layer link is a [`LayerId`] into the layer arena owned by the same
/// tree. Disposal nulls the slots, and stale ids resolve to absent.
#[derive(Debug)]
pub struct RenderNode {
    behavior: Box<dyn RenderObject>,
    size: Size,
    parent_data: Option<BoxParentData>,
    parent: Option<RenderId>,
    children: Vec<RenderId>,
    depth: usize,
    needs_paint: bool,
    needs_layout: bool,
    layer: Option<LayerId>,
}

impl RenderNode {
    fn new(behavior: Box<dyn RenderObject>) -> Self {
        Self {
            behavior,
            size: Size::ZERO,
            parent_data: None,
            parent: None,
            children: Vec::new(),
            depth: 0,
            needs_paint: true,
            needs_layout: true,
            layer: None,
        }
    }

    /// Returns the object behavior.
    #[inline]
    #[must_use]
    pub fn behavior(&self) -> &dyn RenderObject {
        self.behavior.as_ref()
    }

    /// Returns the laid-out size.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the parent-assigned positioning data, if assigned.
    #[inline]
    #[must_use]
    pub fn parent_data(&self) -> Option<BoxParentData> {
        self.parent_data
    }

    /// Returns the parent id.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<RenderId> {
        self.parent
    }

    /// Returns the children ids in paint order.
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[RenderId] {
        &self.children
    }

    /// Returns the depth from the root (0 for unparented nodes).
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns true if this node must repaint.
    #[inline]
    #[must_use]
    pub fn needs_paint(&self) -> bool {
        self.needs_paint
    }

    /// Returns true if layout has not sized this node yet.
    #[inline]
    #[must_use]
    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Returns the owned layer id, if this boundary has created one.
    #[inline]
    #[must_use]
    pub fn layer(&self) -> Option<LayerId> {
        self.layer
    }
}

// ============================================================================
// RENDER TREE
// ============================================================================

/// Slab-backed arena of render objects plus the layer arena they own.
///
/// All dirty-propagation rules are enforced inside the setters here, so any
/// layout change arriving through the public API invalidates exactly the
/// layers it must:
///
/// - a size change dirties the node's own boundary (or its enclosing one)
/// - a parent-data change dirties the *parent's* boundary; the child's
///   layer stays clean because only its position moved
/// - re-parenting dirties both the old and the new parent
/// - same-value writes are no-ops
#[derive(Debug, Default)]
pub struct RenderTree {
    nodes: Slab<RenderNode>,
    layers: LayerTree,
}

impl RenderTree {
    /// Creates an empty render tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a render object and returns its stable id.
    ///
    /// New nodes need layout and paint, are unparented, and have no layer.
    pub fn insert(&mut self, behavior: impl RenderObject + 'static) -> RenderId {
        RenderId::from_index(self.nodes.insert(RenderNode::new(Box::new(behavior))))
    }

    /// Returns true if `id` resolves to a live node.
    #[inline]
    #[must_use]
    pub fn contains(&self, id: RenderId) -> bool {
        self.nodes.contains(id.index())
    }

    /// Resolves an id to its node. Stale ids return `None`.
    #[inline]
    #[must_use]
    pub fn node(&self, id: RenderId) -> Option<&RenderNode> {
        self.nodes.get(id.index())
    }

    /// Returns the layer arena.
    #[inline]
    #[must_use]
    pub fn layers(&self) -> &LayerTree {
        &self.layers
    }

    /// Returns the number of live nodes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no nodes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Calls `visitor` with each child of `id`, in paint order.
    pub fn visit_children(&self, id: RenderId, mut visitor: impl FnMut(RenderId)) {
        if let Some(node) = self.node(id) {
            for &child in &node.children {
                visitor(child);
            }
        }
    }

    // ========================================================================
    // Structure mutation
    // ========================================================================

    /// Attaches `child` under `parent`, after any existing children.
    ///
    /// The parent's enclosing boundary is invalidated: it now paints (or
    /// references) a subtree it did not before.
    pub fn adopt(&mut self, parent: RenderId, child: RenderId) {
        if !self.contains(parent) || !self.contains(child) {
            return;
        }
        let parent_depth = self.nodes[parent.index()].depth;
        {
            let child_node = &mut self.nodes[child.index()];
            child_node.parent = Some(parent);
        }
        self.nodes[parent.index()].children.push(child);
        self.update_depths(child, parent_depth + 1);
        self.mark_needs_paint(parent);
    }

    /// Detaches `child` from `parent`.
    ///
    /// The parent's enclosing boundary is invalidated: it loses the child's
    /// content or layer reference. The child keeps its own layer and state.
    pub fn remove_child(&mut self, parent: RenderId, child: RenderId) {
        if !self.contains(parent) || !self.contains(child) {
            return;
        }
        self.nodes[parent.index()].children.retain(|&c| c != child);
        self.nodes[child.index()].parent = None;
        self.update_depths(child, 0);
        self.mark_needs_paint(parent);
    }

    /// Disposes a node: detaches it, orphans its children, and releases its
    /// layer (content cleared, slot freed).
    ///
    /// Must not run while a recording or compositing pass is in flight; any
    /// `DrawChildLayer` op still referencing the released layer replays as
    /// a no-op afterwards.
    pub fn dispose(&mut self, id: RenderId) {
        let Some(node) = self.nodes.try_remove(id.index()) else {
            return;
        };
        if let Some(parent) = node.parent {
            if self.contains(parent) {
                self.nodes[parent.index()].children.retain(|&c| c != id);
                self.mark_needs_paint(parent);
            }
        }
        for child in node.children {
            if let Some(child_node) = self.nodes.get_mut(child.index()) {
                child_node.parent = None;
            }
        }
        if let Some(layer) = node.layer {
            self.layers.remove(layer);
        }
        debug!(%id, "disposed render object");
    }

    fn update_depths(&mut self, id: RenderId, depth: usize) {
        let mut stack = vec![(id, depth)];
        while let Some((current, current_depth)) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(current.index()) {
                node.depth = current_depth;
                for &child in &node.children {
                    stack.push((child, current_depth + 1));
                }
            }
        }
    }

    // ========================================================================
    // Layout-facing setters (dirty propagation lives here)
    // ========================================================================

    /// Records the node's laid-out size.
    ///
    /// Setting the same size is a no-op. A changed size invalidates the
    /// node's own layer for boundaries, or the enclosing boundary otherwise.
    pub fn set_size(&mut self, id: RenderId, size: Size) {
        let Some(node) = self.nodes.get_mut(id.index()) else {
            return;
        };
        if node.size == size && !node.needs_layout {
            return;
        }
        let changed = node.size != size;
        node.size = size;
        node.needs_layout = false;
        if !changed {
            return;
        }
        if let Some(layer_id) = node.layer {
            if let Some(layer) = self.layers.get_mut(layer_id) {
                layer.set_size(size);
            }
        }
        self.mark_needs_paint(id);
    }

    /// Assigns the child's position within its parent.
    ///
    /// Re-assigning the same offset is a no-op. Any change, including the
    /// first assignment of a zero offset, invalidates the *parent's*
    /// enclosing boundary; the child's own layer stays clean because only
    /// its position moved.
    pub fn set_parent_data(&mut self, id: RenderId, data: BoxParentData) {
        let Some(node) = self.nodes.get_mut(id.index()) else {
            return;
        };
        if node.parent_data == Some(data) {
            return;
        }
        node.parent_data = Some(data);
        let parent = node.parent;
        if let Some(parent) = parent {
            self.mark_needs_paint(parent);
        }
    }

    /// Marks `id` as needing paint and dirties the enclosing repaint
    /// boundary's layer (the node's own layer if it is a boundary).
    pub fn mark_needs_paint(&mut self, id: RenderId) {
        let mut current = Some(id);
        while let Some(current_id) = current {
            let Some(node) = self.nodes.get_mut(current_id.index()) else {
                return;
            };
            node.needs_paint = true;
            if node.behavior.is_repaint_boundary() {
                let layer = node.layer;
                if let Some(layer_id) = layer {
                    if let Some(layer) = self.layers.get_mut(layer_id) {
                        layer.mark_dirty();
                    }
                }
                return;
            }
            current = node.parent;
        }
    }

    // ========================================================================
    // Layers
    // ========================================================================

    /// Returns the boundary's layer id, creating the layer on first call.
    ///
    /// Returns `None` for absent nodes and for non-boundary nodes, which
    /// never own layers. The returned id is stable for the boundary's
    /// lifetime.
    pub fn ensure_layer(&mut self, id: RenderId) -> Option<LayerId> {
        let (existing, size) = {
            let node = self.nodes.get(id.index())?;
            if !node.behavior.is_repaint_boundary() {
                return None;
            }
            (node.layer, node.size)
        };
        if let Some(layer) = existing {
            return Some(layer);
        }
        let layer = self.layers.insert(Layer::new(size));
        self.nodes[id.index()].layer = Some(layer);
        Some(layer)
    }

    /// Marks every boundary's layer dirty (full repaint, e.g. after a
    /// device scale change).
    pub fn mark_all_boundaries_dirty(&mut self) {
        let boundary_layers: Vec<LayerId> = self
            .nodes
            .iter_mut()
            .filter(|(_, node)| node.behavior.is_repaint_boundary())
            .filter_map(|(_, node)| {
                node.needs_paint = true;
                node.layer
            })
            .collect();
        for layer_id in boundary_layers {
            if let Some(layer) = self.layers.get_mut(layer_id) {
                layer.mark_dirty();
            }
        }
    }

    /// Collects the repaint boundaries whose layers are dirty, sorted
    /// parents before children (ascending depth).
    ///
    /// Boundaries that have never recorded (no layer yet) count as dirty.
    #[must_use]
    pub fn dirty_boundaries(&self) -> Vec<RenderId> {
        let mut dirty: Vec<RenderId> = self
            .nodes
            .iter()
            .filter(|(_, node)| node.behavior.is_repaint_boundary())
            .filter(|(_, node)| match node.layer {
                Some(layer_id) => self.layers.get(layer_id).is_none_or(Layer::is_dirty),
                None => node.needs_paint,
            })
            .map(|(index, _)| RenderId::from_index(index))
            .collect();
        dirty.sort_by_key(|&id| self.nodes[id.index()].depth);
        dirty
    }

    // ========================================================================
    // Recording
    // ========================================================================

    /// Records one boundary's display list if its layer is dirty.
    ///
    /// Clean layers are left untouched: `paint` is not invoked and the
    /// content slot is not replaced.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError`] for absent or non-boundary nodes and for
    /// save/restore defects surfaced when the recording ends.
    pub fn record_layer_content(&mut self, id: RenderId) -> Result<(), FrameError> {
        if !self.contains(id) {
            return Err(FrameError::NodeMissing(id));
        }
        let Some(layer_id) = self.ensure_layer(id) else {
            return Err(FrameError::NotABoundary(id));
        };
        let is_dirty = self.layers.get(layer_id).is_none_or(Layer::is_dirty);
        if !is_dirty {
            trace!(%id, "layer clean, skipping recording");
            return Ok(());
        }

        let size = self.nodes[id.index()].size;
        let mut recorder = PictureRecorder::new(size);
        {
            let tree: &RenderTree = self;
            if let Some(node) = tree.node(id) {
                let mut ctx = PaintContext::new(tree, &mut recorder, id);
                node.behavior().paint(&mut ctx);
            }
        }
        let content = recorder.end_recording()?;
        debug!(%id, %layer_id, op_count = content.len(), "recorded boundary content");

        if let Some(layer) = self.layers.get_mut(layer_id) {
            layer.set_size(size);
            layer.set_content(content);
        }
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.needs_paint = false;
        }
        Ok(())
    }

    /// Records a batch of dirty boundaries.
    ///
    /// `dirty` must be sorted parents before children (as produced by
    /// [`dirty_boundaries`](Self::dirty_boundaries) or by the layout pass);
    /// iterating it in reverse records the deepest boundaries first, so
    /// every `DrawChildLayer` op a parent records references a child whose
    /// content is already valid for this frame.
    ///
    /// # Errors
    ///
    /// Propagates the first recording failure; remaining boundaries stay
    /// dirty for the next frame.
    pub fn record_dirty_layers(&mut self, dirty: &[RenderId]) -> Result<(), FrameError> {
        for &id in dirty.iter().rev() {
            self.record_layer_content(id)?;
        }
        Ok(())
    }

    // ========================================================================
    // Hit testing
    // ========================================================================

    /// Hit-tests the subtree rooted at `id` with `position` in the node's
    /// local coordinates.
    ///
    /// Children are tested in reverse paint order, so the result reads
    /// front to back: the front-most hit descendant's entries come first
    /// and every ancestor records itself after its children. All hit
    /// siblings contribute entries; touch routing decides later which entry
    /// wins, since decorative content above a platform view must not mask
    /// it from the arbiter.
    pub fn hit_test(&self, id: RenderId, position: Offset, result: &mut HitTestResult) -> bool {
        let Some(node) = self.node(id) else {
            return false;
        };
        if !node.behavior.hit_test_self(position, node.size) {
            return false;
        }
        for &child in node.children.iter().rev() {
            let child_offset = self
                .node(child)
                .and_then(RenderNode::parent_data)
                .map_or(Offset::ZERO, |data| data.offset);
            self.hit_test(child, position - child_offset, result);
        }
        result.add(HitTestEntry::new(node.behavior.hit_target(), position));
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::objects::{RenderColoredBox, RenderPlatformView, RenderRepaintBoundary, RenderStack};
    use crate::HitTarget;
    use skiff_foundation::PlatformViewId;
    use skiff_types::Color;

    use super::*;

    fn boundary(tree: &mut RenderTree, size: Size) -> RenderId {
        let id = tree.insert(RenderRepaintBoundary::new());
        tree.set_size(id, size);
        id
    }

    #[test]
    fn test_ensure_layer_is_stable() {
        let mut tree = RenderTree::new();
        let id = boundary(&mut tree, Size::new(10.0, 10.0));
        let first = tree.ensure_layer(id).unwrap();
        let second = tree.ensure_layer(id).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_ensure_layer_rejects_non_boundaries() {
        let mut tree = RenderTree::new();
        let id = tree.insert(RenderColoredBox::new(Color::RED));
        assert!(tree.ensure_layer(id).is_none());
    }

    #[test]
    fn test_recording_clean_layer_is_skipped() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        #[derive(Debug)]
        struct CountingBoundary {
            paints: Arc<AtomicUsize>,
        }

        impl RenderObject for CountingBoundary {
            fn is_repaint_boundary(&self) -> bool {
                true
            }
            fn paint(&self, _ctx: &mut PaintContext<'_>) {
                self.paints.fetch_add(1, Ordering::SeqCst);
            }
        }

        let paints = Arc::new(AtomicUsize::new(0));
        let mut tree = RenderTree::new();
        let id = tree.insert(CountingBoundary {
            paints: Arc::clone(&paints),
        });
        tree.set_size(id, Size::new(10.0, 10.0));

        tree.record_layer_content(id).unwrap();
        assert_eq!(paints.load(Ordering::SeqCst), 1);

        // Clean layer: paint must not run again.
        tree.record_layer_content(id).unwrap();
        assert_eq!(paints.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_children_record_before_parents() {
        use std::sync::{Arc, Mutex};

        #[derive(Debug)]
        struct OrderLogger {
            log: Arc<Mutex<Vec<RenderId>>>,
        }

        impl RenderObject for OrderLogger {
            fn is_repaint_boundary(&self) -> bool {
                true
            }
            fn paint(&self, ctx: &mut PaintContext<'_>) {
                self.log.lock().unwrap().push(ctx.recording_boundary());
                ctx.paint_children();
            }
        }

        let log = Arc::new(Mutex::new(Vec::new()));
        let mut tree = RenderTree::new();
        let mut logger = || OrderLogger {
            log: Arc::clone(&log),
        };
        let root = tree.insert(logger());
        let middle = tree.insert(logger());
        let leaf = tree.insert(logger());
        tree.set_size(root, Size::new(100.0, 100.0));
        tree.set_size(middle, Size::new(50.0, 50.0));
        tree.set_size(leaf, Size::new(10.0, 10.0));
        tree.adopt(root, middle);
        tree.adopt(middle, leaf);

        tree.record_dirty_layers(&tree.dirty_boundaries()).unwrap();
        assert_eq!(*log.lock().unwrap(), vec![leaf, middle, root]);
    }

    #[test]
    fn test_size_change_dirties_boundary_same_size_does_not() {
        let mut tree = RenderTree::new();
        let id = boundary(&mut tree, Size::new(10.0, 10.0));
        tree.record_layer_content(id).unwrap();
        let layer_id = tree.node(id).unwrap().layer().unwrap();
        assert!(!tree.layers().get(layer_id).unwrap().is_dirty());

        tree.set_size(id, Size::new(10.0, 10.0));
        assert!(!tree.layers().get(layer_id).unwrap().is_dirty());

        tree.set_size(id, Size::new(20.0, 10.0));
        assert!(tree.layers().get(layer_id).unwrap().is_dirty());
        assert!(tree.node(id).unwrap().needs_paint());
    }

    #[test]
    fn test_parent_data_change_dirties_parent_not_child() {
        let mut tree = RenderTree::new();
        let parent = boundary(&mut tree, Size::new(100.0, 100.0));
        let child = boundary(&mut tree, Size::new(10.0, 10.0));
        tree.adopt(parent, child);
        tree.set_parent_data(child, BoxParentData::new(Offset::new(5.0, 5.0)));
        tree.record_dirty_layers(&tree.dirty_boundaries()).unwrap();

        let parent_layer = tree.node(parent).unwrap().layer().unwrap();
        let child_layer = tree.node(child).unwrap().layer().unwrap();
        assert!(!tree.layers().get(parent_layer).unwrap().is_dirty());

        tree.set_parent_data(child, BoxParentData::new(Offset::new(7.0, 5.0)));
        assert!(tree.layers().get(parent_layer).unwrap().is_dirty());
        assert!(!tree.layers().get(child_layer).unwrap().is_dirty());

        // Same offset again: no-op.
        tree.record_dirty_layers(&tree.dirty_boundaries()).unwrap();
        tree.set_parent_data(child, BoxParentData::new(Offset::new(7.0, 5.0)));
        assert!(!tree.layers().get(parent_layer).unwrap().is_dirty());
    }

    #[test]
    fn test_first_zero_parent_data_still_dirties_parent() {
        let mut tree = RenderTree::new();
        let parent = boundary(&mut tree, Size::new(100.0, 100.0));
        let child = boundary(&mut tree, Size::new(10.0, 10.0));
        tree.adopt(parent, child);
        tree.record_dirty_layers(&tree.dirty_boundaries()).unwrap();

        let parent_layer = tree.node(parent).unwrap().layer().unwrap();
        tree.set_parent_data(child, BoxParentData::default());
        assert!(tree.layers().get(parent_layer).unwrap().is_dirty());
    }

    #[test]
    fn test_reparenting_dirties_both_parents() {
        let mut tree = RenderTree::new();
        let a = boundary(&mut tree, Size::new(100.0, 100.0));
        let b = boundary(&mut tree, Size::new(100.0, 100.0));
        let child = boundary(&mut tree, Size::new(10.0, 10.0));
        tree.adopt(a, child);
        tree.record_dirty_layers(&tree.dirty_boundaries()).unwrap();

        let layer_a = tree.node(a).unwrap().layer().unwrap();
        let layer_b = tree.node(b).unwrap().layer().unwrap();

        tree.remove_child(a, child);
        tree.adopt(b, child);
        assert!(tree.layers().get(layer_a).unwrap().is_dirty());
        assert!(tree.layers().get(layer_b).unwrap().is_dirty());
    }

    #[test]
    fn test_dirty_boundaries_sorted_parents_first() {
        let mut tree = RenderTree::new();
        let root = boundary(&mut tree, Size::new(100.0, 100.0));
        let middle = boundary(&mut tree, Size::new(50.0, 50.0));
        let leaf = boundary(&mut tree, Size::new(10.0, 10.0));
        tree.adopt(root, middle);
        tree.adopt(middle, leaf);

        let dirty = tree.dirty_boundaries();
        assert_eq!(dirty, vec![root, middle, leaf]);
    }

    #[test]
    fn test_dispose_releases_layer_and_detaches() {
        let mut tree = RenderTree::new();
        let parent = boundary(&mut tree, Size::new(100.0, 100.0));
        let child = boundary(&mut tree, Size::new(10.0, 10.0));
        tree.adopt(parent, child);
        tree.record_dirty_layers(&tree.dirty_boundaries()).unwrap();

        let child_layer = tree.node(child).unwrap().layer().unwrap();
        tree.dispose(child);

        assert!(!tree.contains(child));
        assert!(tree.layers().get(child_layer).is_none());
        assert!(tree.node(parent).unwrap().children().is_empty());
    }

    #[test]
    fn test_hit_test_orders_front_to_back() {
        let mut tree = RenderTree::new();
        let root = tree.insert(RenderStack::new());
        tree.set_size(root, Size::new(100.0, 100.0));
        let back = tree.insert(RenderPlatformView::new(PlatformViewId::new(7)));
        tree.set_size(back, Size::new(100.0, 100.0));
        let front = tree.insert(RenderColoredBox::new(Color::RED));
        tree.set_size(front, Size::new(100.0, 100.0));
        tree.adopt(root, back);
        tree.adopt(root, front);

        let mut result = HitTestResult::new();
        assert!(tree.hit_test(root, Offset::new(10.0, 10.0), &mut result));

        // Front-most (painted last) first, then the view, then the root.
        assert_eq!(result.entries()[0].target, HitTarget::Decoration);
        assert_eq!(
            result.entries()[1].target,
            HitTarget::PlatformView(PlatformViewId::new(7))
        );
        assert_eq!(result.entries()[2].target, HitTarget::Decoration);
    }

    #[test]
    fn test_hit_test_outside_bounds_misses() {
        let mut tree = RenderTree::new();
        let root = tree.insert(RenderColoredBox::new(Color::RED));
        tree.set_size(root, Size::new(10.0, 10.0));

        let mut result = HitTestResult::new();
        assert!(!tree.hit_test(root, Offset::new(50.0, 50.0), &mut result));
        assert!(result.is_empty());
    }

    #[test]
    fn test_hit_test_respects_child_offsets() {
        let mut tree = RenderTree::new();
        let root = tree.insert(RenderStack::new());
        tree.set_size(root, Size::new(200.0, 200.0));
        let child = tree.insert(RenderPlatformView::new(PlatformViewId::new(1)));
        tree.set_size(child, Size::new(50.0, 50.0));
        tree.adopt(root, child);
        tree.set_parent_data(child, BoxParentData::new(Offset::new(100.0, 100.0)));

        let mut result = HitTestResult::new();
        tree.hit_test(root, Offset::new(120.0, 120.0), &mut result);
        assert_eq!(
            result.entries()[0].target,
            HitTarget::PlatformView(PlatformViewId::new(1))
        );
        assert_eq!(result.entries()[0].position, Offset::new(20.0, 20.0));

        let mut miss = HitTestResult::new();
        tree.hit_test(root, Offset::new(20.0, 20.0), &mut miss);
        assert_eq!(miss.len(), 1);
        assert_eq!(miss.entries()[0].target, HitTarget::Decoration);
    }
}
