//! The arena-backed tree and its structural operations

use std::ops;

use crate::error::TreeError;
use crate::node::{Node, NodeId};

/// Arena slot pairing a node with its structural links
#[derive(Debug, Clone)]
pub(crate) struct Slot<T> {
    /// The stored node
    pub(crate) node: Node<T>,
    /// Parent node ID, `None` for the root and for detached subtrees
    pub(crate) parent: Option<NodeId>,
    /// Child IDs in display order
    pub(crate) children: Vec<NodeId>,
    /// Cached distance from the nearest parentless ancestor
    pub(crate) depth: usize,
}

/// A generic N-ary tree designed to back an expand/collapse tree view
///
/// Nodes live in arena storage and are addressed by [`NodeId`]. Every
/// structural change goes through the tree, which keeps parent links, child
/// sequences and cached depths consistent as one unit; there is no way to
/// half-link a node or register it under two parents.
///
/// Detaching a subtree does not free it. Its ids stay valid, its internal
/// structure survives, and it can be attached again later. The node the tree
/// was created with is the canonical root and can never be given a parent.
///
/// # Example
///
/// ```
/// use tree_model::Tree;
///
/// let mut tree = Tree::new("root");
/// let docs = tree.add_child(tree.root(), "docs").unwrap();
/// let intro = tree.add_child(docs, "intro.md").unwrap();
///
/// assert_eq!(tree.depth(intro), 2);
/// assert_eq!(tree.children(tree.root()), &[docs]);
/// ```
#[derive(Debug, Clone)]
pub struct Tree<T> {
    /// Arena storage for nodes
    slots: Vec<Slot<T>>,
    /// The node the tree was created with
    root: NodeId,
}

impl<T> Tree<T> {
    /// Create a new tree whose root carries `content`
    ///
    /// The root starts collapsed, like every other node.
    pub fn new(content: T) -> Self {
        let root = Slot {
            node: Node::new(content),
            parent: None,
            children: Vec::new(),
            depth: 0,
        };
        Self {
            slots: vec![root],
            root: NodeId::new(0),
        }
    }

    /// Get the canonical root node ID (always exists)
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Count all nodes ever added to the tree, detached subtrees included
    pub fn node_count(&self) -> usize {
        self.slots.len()
    }

    /// Get a node by its ID
    ///
    /// Returns `None` if the ID was not issued by this tree.
    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots.get(id.get()).map(|slot| &slot.node)
    }

    pub(crate) fn slot(&self, id: NodeId) -> &Slot<T> {
        assert!(
            id.get() < self.slots.len(),
            "{id} was not issued by this tree"
        );
        &self.slots[id.get()]
    }

    pub(crate) fn slot_mut(&mut self, id: NodeId) -> &mut Slot<T> {
        assert!(
            id.get() < self.slots.len(),
            "{id} was not issued by this tree"
        );
        &mut self.slots[id.get()]
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Get the parent of a node
    ///
    /// Returns `None` for the root, for detached nodes and for invalid IDs.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slots.get(id.get())?.parent
    }

    /// Get the children of a node, in display order
    ///
    /// Returns an empty slice for leaves and invalid IDs.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.slots
            .get(id.get())
            .map(|slot| slot.children.as_slice())
            .unwrap_or(&[])
    }

    /// Get the child at `index` within a node's child sequence
    pub fn child_at(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.children(id).get(index).copied()
    }

    /// Get the position of `child` within `parent`'s child sequence
    ///
    /// Returns `None` when `child` is not a direct child of `parent`.
    pub fn child_index(&self, parent: NodeId, child: NodeId) -> Option<usize> {
        self.children(parent).iter().position(|&c| c == child)
    }

    /// Count direct children of a node
    pub fn child_count(&self, id: NodeId) -> usize {
        self.children(id).len()
    }

    /// Check if a node has at least one child
    pub fn has_children(&self, id: NodeId) -> bool {
        !self.children(id).is_empty()
    }

    /// Check if a node currently has no children
    ///
    /// This reflects the child sequence only. A node with children is not a
    /// leaf even when its forced-leaf flag is set (the flag blocks future
    /// additions, it does not clear anything).
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.children(id).is_empty()
    }

    /// Check if a node refuses new children
    pub fn is_forced_leaf(&self, id: NodeId) -> bool {
        self.get(id).map(|n| n.is_forced_leaf()).unwrap_or(false)
    }

    /// Get the cached depth of a node (root = 0)
    ///
    /// The root of a detached subtree also reports 0. Returns 0 for invalid
    /// IDs.
    pub fn depth(&self, id: NodeId) -> usize {
        self.slots.get(id.get()).map(|slot| slot.depth).unwrap_or(0)
    }

    /// Get all ancestors of a node, from parent to root
    ///
    /// Returns an empty vector for the root or invalid IDs.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut ancestors = Vec::new();
        let mut current = self.parent(id);
        while let Some(parent_id) = current {
            ancestors.push(parent_id);
            current = self.parent(parent_id);
        }
        ancestors
    }

    /// Check if a node is a strict ancestor of another
    pub fn is_ancestor_of(&self, ancestor: NodeId, descendant: NodeId) -> bool {
        let mut current = self.parent(descendant);
        while let Some(parent_id) = current {
            if parent_id == ancestor {
                return true;
            }
            current = self.parent(parent_id);
        }
        false
    }

    /// Check if `node` sits inside the subtree rooted at `id`
    ///
    /// A node contains itself. With `recursive` set, the whole subtree is
    /// considered; otherwise only direct children.
    pub fn contains(&self, id: NodeId, node: NodeId, recursive: bool) -> bool {
        if node == id {
            return true;
        }
        if recursive {
            self.is_ancestor_of(id, node)
        } else {
            self.children(id).contains(&node)
        }
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Create a new node carrying `content` and append it to `parent`'s
    /// children
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::ForcedLeaf`] when `parent` refuses children.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not issued by this tree.
    pub fn add_child(&mut self, parent: NodeId, content: T) -> Result<NodeId, TreeError> {
        if self.slot(parent).node.forced_leaf {
            return Err(TreeError::ForcedLeaf(parent));
        }
        let id = self.push_slot(content, Some(parent));
        self.slot_mut(parent).children.push(id);
        Ok(id)
    }

    /// Create a new node carrying `content` and insert it at `index` within
    /// `parent`'s children
    ///
    /// `index` equal to the current child count appends.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::OutOfRange`] when `index` is past the end of the
    /// child sequence, or [`TreeError::ForcedLeaf`] when `parent` refuses
    /// children.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not issued by this tree.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        index: usize,
        content: T,
    ) -> Result<NodeId, TreeError> {
        let parent_slot = self.slot(parent);
        if parent_slot.node.forced_leaf {
            return Err(TreeError::ForcedLeaf(parent));
        }
        let len = parent_slot.children.len();
        if index > len {
            return Err(TreeError::OutOfRange { index, len });
        }
        let id = self.push_slot(content, Some(parent));
        self.slot_mut(parent).children.insert(index, id);
        Ok(id)
    }

    /// Create a new parentless node carrying `content`
    ///
    /// The node starts as a detached single-node subtree at depth 0; use
    /// [`attach`](Self::attach) to link it somewhere.
    pub fn add_detached(&mut self, content: T) -> NodeId {
        self.push_slot(content, None)
    }

    /// Append an existing node (and its whole subtree) to `parent`'s children
    ///
    /// The node is unlinked from its current parent first, so this both
    /// adopts detached subtrees and moves nodes between parents. Attaching a
    /// node to the parent it already has moves it to the end of the child
    /// sequence. Cached depths of the moved subtree are recomputed.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::WouldCycle`] when `child` is `parent` itself or
    /// one of its ancestors, [`TreeError::ForcedLeaf`] when `parent` refuses
    /// children, or [`TreeError::CannotAttachRoot`] when `child` is the tree
    /// root. The tree is untouched on error.
    ///
    /// # Panics
    ///
    /// Panics if either ID was not issued by this tree.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        self.link_checked(parent, None, child)
    }

    /// Like [`attach`](Self::attach), but insert at `index` within `parent`'s
    /// children
    ///
    /// # Errors
    ///
    /// Everything [`attach`](Self::attach) reports, plus
    /// [`TreeError::OutOfRange`] when `index` is past the end of the child
    /// sequence as it stands after the unlink.
    ///
    /// # Panics
    ///
    /// Panics if either ID was not issued by this tree.
    pub fn attach_at(
        &mut self,
        parent: NodeId,
        index: usize,
        child: NodeId,
    ) -> Result<(), TreeError> {
        self.link_checked(parent, Some(index), child)
    }

    /// Unlink `child` from `parent`
    ///
    /// The subtree under `child` stays intact and becomes detached; `child`
    /// itself reports depth 0 afterwards. Returns `false` (and changes
    /// nothing) when `child` is not currently a child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `child` was not issued by this tree.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if self.slot(child).parent != Some(parent) {
            return false;
        }
        self.slot_mut(parent).children.retain(|&c| c != child);
        self.slot_mut(child).parent = None;
        self.update_depths(child);
        true
    }

    /// Unlink a node from whatever parent it currently has
    ///
    /// Returns `false` for the root and for already-detached nodes.
    ///
    /// # Panics
    ///
    /// Panics if `child` was not issued by this tree.
    pub fn remove_from_parent(&mut self, child: NodeId) -> bool {
        match self.slot(child).parent {
            Some(parent) => self.remove_child(parent, child),
            None => false,
        }
    }

    /// Mark a node as a forced leaf, detaching any children it already has
    ///
    /// The detached children are returned in their former display order, each
    /// now the root of its own detached subtree. Subsequent attempts to give
    /// the node children fail with [`TreeError::ForcedLeaf`]. The flag is
    /// permanent.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this tree.
    pub fn force_leaf(&mut self, id: NodeId) -> Vec<NodeId> {
        self.slot_mut(id).node.forced_leaf = true;
        let children = std::mem::take(&mut self.slot_mut(id).children);
        for &child in &children {
            self.slot_mut(child).parent = None;
            self.update_depths(child);
        }
        children
    }

    fn push_slot(&mut self, content: T, parent: Option<NodeId>) -> NodeId {
        let depth = match parent {
            Some(parent) => self.slot(parent).depth + 1,
            None => 0,
        };
        let id = NodeId::new(self.slots.len());
        self.slots.push(Slot {
            node: Node::new(content),
            parent,
            children: Vec::new(),
            depth,
        });
        id
    }

    /// The single place that rewires parent/child links. Validates
    /// everything up front, then unlinks, links and refreshes depths; a
    /// failed call leaves no trace.
    fn link_checked(
        &mut self,
        parent: NodeId,
        index: Option<usize>,
        child: NodeId,
    ) -> Result<(), TreeError> {
        let forced = self.slot(parent).node.forced_leaf;
        let old_parent = self.slot(child).parent;

        if child == self.root {
            return Err(TreeError::CannotAttachRoot(child));
        }
        if forced {
            return Err(TreeError::ForcedLeaf(parent));
        }
        if parent == child || self.is_ancestor_of(child, parent) {
            return Err(TreeError::WouldCycle {
                node: child,
                new_parent: parent,
            });
        }
        if let Some(index) = index {
            // bounds apply to the sibling list as it stands after the unlink
            let mut len = self.slot(parent).children.len();
            if old_parent == Some(parent) {
                len -= 1;
            }
            if index > len {
                return Err(TreeError::OutOfRange { index, len });
            }
        }

        if let Some(old) = old_parent {
            self.slot_mut(old).children.retain(|&c| c != child);
        }
        match index {
            Some(index) => self.slot_mut(parent).children.insert(index, child),
            None => self.slot_mut(parent).children.push(child),
        }
        self.slot_mut(child).parent = Some(parent);
        self.update_depths(child);
        Ok(())
    }

    /// Recompute the cached depth of `id` and everything below it
    ///
    /// Runs after every parent-link change; cost is proportional to the size
    /// of the moved subtree.
    fn update_depths(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let depth = match self.slot(current).parent {
                Some(parent) => self.slot(parent).depth + 1,
                None => 0,
            };
            let slot = self.slot_mut(current);
            slot.depth = depth;
            stack.extend(slot.children.iter().copied());
        }
    }
}

impl<T: Default> Default for Tree<T> {
    fn default() -> Self {
        Tree::new(T::default())
    }
}

impl<T> ops::Index<NodeId> for Tree<T> {
    type Output = Node<T>;

    /// # Panics
    ///
    /// Panics if `id` was not issued by this tree. Use
    /// [`get`](Tree::get) for a fallible lookup.
    fn index(&self, id: NodeId) -> &Self::Output {
        &self.slot(id).node
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    /// Builds the tree used across these tests:
    ///
    /// root
    ///   a
    ///     a1
    ///   b
    fn sample_tree() -> (Tree<&'static str>, NodeId, NodeId, NodeId) {
        let mut tree = Tree::new("root");
        let a = tree.add_child(tree.root(), "a").unwrap();
        let a1 = tree.add_child(a, "a1").unwrap();
        let b = tree.add_child(tree.root(), "b").unwrap();
        (tree, a, a1, b)
    }

    #[test]
    fn test_new_tree_has_root() {
        let tree = Tree::new("root");
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.parent(tree.root()), None);
        assert_eq!(tree.depth(tree.root()), 0);
        assert!(tree.is_leaf(tree.root()));
        assert_eq!(tree[tree.root()].content(), &"root");
    }

    #[test]
    fn test_add_child_links_both_sides() {
        let (tree, a, a1, b) = sample_tree();

        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.children(tree.root()), &[a, b]);
        assert_eq!(tree.children(a), &[a1]);
        assert_eq!(tree.parent(a), Some(tree.root()));
        assert_eq!(tree.parent(a1), Some(a));
        assert_eq!(tree.child_index(tree.root(), b), Some(1));
        assert_eq!(tree.depth(a), 1);
        assert_eq!(tree.depth(a1), 2);
    }

    #[test]
    fn test_insert_child_at_position() {
        let mut tree = Tree::new("root");
        let root = tree.root();
        let first = tree.add_child(root, "first").unwrap();
        let last = tree.add_child(root, "last").unwrap();
        let middle = tree.insert_child(root, 1, "middle").unwrap();
        // index == child count appends
        let end = tree.insert_child(root, 3, "end").unwrap();

        assert_eq!(tree.children(root), &[first, middle, last, end]);
        assert_eq!(
            tree.insert_child(root, 5, "beyond"),
            Err(TreeError::OutOfRange { index: 5, len: 4 })
        );
    }

    #[test]
    fn test_add_detached() {
        let (mut tree, ..) = sample_tree();
        let loose = tree.add_detached("loose");

        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.parent(loose), None);
        assert_eq!(tree.depth(loose), 0);
        assert!(!tree.children(tree.root()).contains(&loose));
    }

    #[test]
    fn test_attach_moves_subtree() {
        let (mut tree, a, a1, b) = sample_tree();

        tree.attach(b, a).unwrap();

        assert_eq!(tree.children(tree.root()), &[b]);
        assert_eq!(tree.children(b), &[a]);
        assert_eq!(tree.parent(a), Some(b));
        // the whole moved subtree picks up its new depths
        assert_eq!(tree.depth(a), 2);
        assert_eq!(tree.depth(a1), 3);
    }

    #[test]
    fn test_attach_to_current_parent_moves_to_end() {
        let (mut tree, a, _a1, b) = sample_tree();

        tree.attach(tree.root(), a).unwrap();

        assert_eq!(tree.children(tree.root()), &[b, a]);
        assert_eq!(tree.depth(a), 1);
    }

    #[test]
    fn test_attach_at_reorders_siblings() {
        let (mut tree, a, _a1, b) = sample_tree();

        tree.attach_at(tree.root(), 0, b).unwrap();
        assert_eq!(tree.children(tree.root()), &[b, a]);

        // bounds are checked against the list without the moving node
        assert_eq!(
            tree.attach_at(tree.root(), 2, b),
            Err(TreeError::OutOfRange { index: 2, len: 1 })
        );
        assert_eq!(tree.children(tree.root()), &[b, a]);
    }

    #[test]
    fn test_attach_adopts_detached_subtree() {
        let (mut tree, _a, _a1, b) = sample_tree();
        let loose = tree.add_detached("loose");
        let under = tree.add_child(loose, "under").unwrap();

        tree.attach(b, loose).unwrap();

        assert_eq!(tree.parent(loose), Some(b));
        assert_eq!(tree.depth(loose), 2);
        assert_eq!(tree.depth(under), 3);
    }

    #[test]
    fn test_attach_rejects_cycles() {
        let (mut tree, a, a1, _b) = sample_tree();
        let deeper = tree.add_child(a1, "deeper").unwrap();

        assert_eq!(
            tree.attach(deeper, a),
            Err(TreeError::WouldCycle {
                node: a,
                new_parent: deeper
            })
        );
        assert_eq!(
            tree.attach(a, a),
            Err(TreeError::WouldCycle {
                node: a,
                new_parent: a
            })
        );

        // a failed attach leaves everything in place
        assert_eq!(tree.parent(a), Some(tree.root()));
        assert_eq!(tree.children(a1), &[deeper]);
        assert_eq!(tree.depth(deeper), 3);
    }

    #[test]
    fn test_root_cannot_be_attached() {
        let (mut tree, a, ..) = sample_tree();
        let root = tree.root();

        assert_eq!(tree.attach(a, root), Err(TreeError::CannotAttachRoot(root)));
        assert_eq!(tree.parent(root), None);
    }

    #[test]
    fn test_remove_child_detaches_subtree() {
        let (mut tree, a, a1, b) = sample_tree();

        assert!(tree.remove_child(tree.root(), a));

        assert_eq!(tree.children(tree.root()), &[b]);
        assert_eq!(tree.parent(a), None);
        // the subtree under the removed node survives, rebased at depth 0
        assert_eq!(tree.children(a), &[a1]);
        assert_eq!(tree.depth(a), 0);
        assert_eq!(tree.depth(a1), 1);
        // arena storage is never reclaimed
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn test_remove_child_requires_the_link() {
        let (mut tree, a, a1, b) = sample_tree();

        // a1 is a grandchild of root, not a child
        assert!(!tree.remove_child(tree.root(), a1));
        assert!(!tree.remove_child(b, a1));
        assert_eq!(tree.children(a), &[a1]);
        assert_eq!(tree.parent(a1), Some(a));
    }

    #[test]
    fn test_remove_from_parent() {
        let (mut tree, a, ..) = sample_tree();

        assert!(tree.remove_from_parent(a));
        assert_eq!(tree.parent(a), None);

        // second removal finds nothing to unlink
        assert!(!tree.remove_from_parent(a));
        assert!(!tree.remove_from_parent(tree.root()));
    }

    #[test]
    fn test_detached_subtree_can_be_reattached() {
        let (mut tree, a, a1, b) = sample_tree();

        tree.remove_child(tree.root(), a);
        tree.attach(b, a).unwrap();

        assert_eq!(tree.children(b), &[a]);
        assert_eq!(tree.depth(a), 2);
        assert_eq!(tree.depth(a1), 3);
    }

    #[test]
    fn test_force_leaf_detaches_children() {
        let (mut tree, a, a1, _b) = sample_tree();

        let orphans = tree.force_leaf(a);

        assert_eq!(orphans, vec![a1]);
        assert!(tree.is_forced_leaf(a));
        assert!(tree.is_leaf(a));
        assert_eq!(tree.parent(a1), None);
        assert_eq!(tree.depth(a1), 0);
        // a stays linked under the root
        assert_eq!(tree.parent(a), Some(tree.root()));
    }

    #[test]
    fn test_forced_leaf_refuses_children() {
        let (mut tree, a, _a1, b) = sample_tree();
        tree.force_leaf(a);

        assert_eq!(tree.add_child(a, "new"), Err(TreeError::ForcedLeaf(a)));
        assert_eq!(tree.insert_child(a, 0, "new"), Err(TreeError::ForcedLeaf(a)));
        assert_eq!(tree.attach(a, b), Err(TreeError::ForcedLeaf(a)));
        assert!(tree.is_leaf(a));

        // idempotent on an already-forced leaf
        assert!(tree.force_leaf(a).is_empty());
    }

    #[test]
    fn test_contains() {
        let (tree, a, a1, b) = sample_tree();
        let root = tree.root();

        assert!(tree.contains(root, root, false));
        assert!(tree.contains(root, a, false));
        assert!(!tree.contains(root, a1, false));
        assert!(tree.contains(root, a1, true));
        assert!(tree.contains(a, a1, true));
        assert!(!tree.contains(b, a1, true));
    }

    #[test]
    fn test_ancestors() {
        let (tree, a, a1, _b) = sample_tree();

        assert_eq!(tree.ancestors(a1), vec![a, tree.root()]);
        assert!(tree.ancestors(tree.root()).is_empty());
        assert!(tree.is_ancestor_of(tree.root(), a1));
        assert!(!tree.is_ancestor_of(a1, tree.root()));
        assert!(!tree.is_ancestor_of(a, a));
    }

    #[test]
    fn test_lookups_are_graceful_for_unknown_ids() {
        let (tree, ..) = sample_tree();
        let unknown = NodeId::new(99);

        assert_eq!(tree.get(unknown), None);
        assert_eq!(tree.parent(unknown), None);
        assert!(tree.children(unknown).is_empty());
        assert_eq!(tree.child_at(unknown, 0), None);
        assert_eq!(tree.depth(unknown), 0);
        assert!(!tree.is_forced_leaf(unknown));
    }

    #[test]
    #[should_panic(expected = "was not issued by this tree")]
    fn test_mutating_through_unknown_id_panics() {
        let (mut tree, ..) = sample_tree();
        let _ = tree.add_child(NodeId::new(99), "nope");
    }

    #[test]
    #[should_panic(expected = "was not issued by this tree")]
    fn test_index_with_unknown_id_panics() {
        let (tree, ..) = sample_tree();
        let _ = &tree[NodeId::new(99)];
    }

    #[test]
    fn test_default_tree() {
        let tree: Tree<u32> = Tree::default();
        assert_eq!(tree[tree.root()].content(), &0);
    }

    proptest! {
        /// After any sequence of adds and moves, every parent/child link is
        /// symmetric and every cached depth matches the parent chain.
        #[test]
        fn depths_and_links_hold_after_random_moves(
            parents in proptest::collection::vec(0usize..50, 1..40),
            moves in proptest::collection::vec((0usize..50, 0usize..50), 0..40),
        ) {
            let mut tree = Tree::new(0usize);
            let mut ids = vec![tree.root()];
            for (offset, pick) in parents.iter().enumerate() {
                let parent = ids[pick % ids.len()];
                ids.push(tree.add_child(parent, offset + 1).unwrap());
            }
            for &(from, to) in &moves {
                let parent = ids[from % ids.len()];
                let child = ids[to % ids.len()];
                // cycle and root rejections are part of normal operation
                let _ = tree.attach(parent, child);
            }

            for &id in &ids {
                match tree.parent(id) {
                    Some(parent) => {
                        prop_assert_eq!(tree.depth(id), tree.depth(parent) + 1);
                        prop_assert!(tree.children(parent).contains(&id));
                        prop_assert!(!tree.is_ancestor_of(id, id));
                    }
                    None => prop_assert_eq!(tree.depth(id), 0),
                }
                for &child in tree.children(id) {
                    prop_assert_eq!(tree.parent(child), Some(id));
                }
            }
        }
    }
}
