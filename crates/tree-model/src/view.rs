//! Expand/collapse state and the flattened visible projection
//!
//! A tree view renders a tree as a flat list of rows: a node occupies one
//! row, and its children follow only while it is expanded. The operations
//! here answer the two questions a virtualized list asks: how many rows a
//! subtree occupies, and which node sits at a given row.

use crate::node::NodeId;
use crate::tree::Tree;

impl<T> Tree<T> {
    /// Whether a tree view currently shows this node's children
    ///
    /// Nodes start collapsed. Returns `false` for invalid IDs.
    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.get(id).map(|n| n.is_expanded()).unwrap_or(false)
    }

    /// Show or hide a node's children
    ///
    /// Display state only; the structure underneath is untouched, and the
    /// flag survives detaching and reattaching the node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this tree.
    pub fn set_expanded(&mut self, id: NodeId, expanded: bool) {
        self.slot_mut(id).node.expanded = expanded;
    }

    /// Apply [`set_expanded`](Self::set_expanded) to a node and every node
    /// below it
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this tree.
    pub fn set_expanded_recursive(&mut self, id: NodeId, expanded: bool) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let slot = self.slot_mut(current);
            slot.node.expanded = expanded;
            stack.extend(slot.children.iter().copied());
        }
    }

    /// Flip a node's expansion flag, returning the new state
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this tree.
    pub fn toggle_expanded(&mut self, id: NodeId) -> bool {
        let node = &mut self.slot_mut(id).node;
        node.expanded = !node.expanded;
        node.expanded
    }

    /// Count the rows the subtree rooted at `id` occupies in a tree view
    ///
    /// A node always counts its own row; children are counted only while it
    /// is expanded, so a collapsed node reports 1 no matter how much sits
    /// underneath. Returns 0 for invalid IDs.
    pub fn visible_count(&self, id: NodeId) -> usize {
        match self.get(id) {
            Some(node) => {
                let mut count = 1;
                if node.is_expanded() {
                    for &child in self.children(id) {
                        count += self.visible_count(child);
                    }
                }
                count
            }
            None => 0,
        }
    }

    /// Resolve the node at `position` among the visible rows of the subtree
    /// rooted at `id`
    ///
    /// Position 0 is `id` itself; rows then follow display order, the same
    /// order [`visible_nodes`](Self::visible_nodes) yields. Returns `None`
    /// when `position` is past the last visible row.
    pub fn visible_node_at(&self, id: NodeId, position: usize) -> Option<NodeId> {
        self.get(id)?;
        if position == 0 {
            return Some(id);
        }
        if !self.is_expanded(id) {
            return None;
        }
        // skip over whole child blocks until the position falls inside one
        let mut remaining = position - 1;
        for &child in self.children(id) {
            let block = self.visible_count(child);
            if remaining < block {
                return self.visible_node_at(child, remaining);
            }
            remaining -= block;
        }
        None
    }

    /// Find the visible row `target` occupies within the subtree rooted at
    /// `origin`
    ///
    /// Inverse of [`visible_node_at`](Self::visible_node_at). Returns `None`
    /// when `target` is not visible from `origin`: outside the subtree, or
    /// hidden behind a collapsed ancestor.
    pub fn visible_position_of(&self, origin: NodeId, target: NodeId) -> Option<usize> {
        self.get(origin)?;
        self.get(target)?;
        if target == origin {
            return Some(0);
        }
        let mut position = 0;
        let mut current = target;
        loop {
            let parent = self.parent(current)?;
            if !self.is_expanded(parent) {
                return None;
            }
            // one row for the parent plus the blocks of earlier siblings
            position += 1;
            for &sibling in self.children(parent) {
                if sibling == current {
                    break;
                }
                position += self.visible_count(sibling);
            }
            if parent == origin {
                return Some(position);
            }
            current = parent;
        }
    }

    /// Iterate over the visible rows of the subtree rooted at `id`, in
    /// display order
    ///
    /// The first item is `id` itself. Yields nothing for invalid IDs.
    pub fn visible_nodes(&self, id: NodeId) -> VisibleNodes<'_, T> {
        let stack = if self.get(id).is_some() {
            vec![id]
        } else {
            Vec::new()
        };
        VisibleNodes { tree: self, stack }
    }
}

/// Iterator over the visible rows of a subtree, in display order
///
/// Created by [`Tree::visible_nodes`].
pub struct VisibleNodes<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> Iterator for VisibleNodes<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        if self.tree.is_expanded(current) {
            // push in reverse so the first child is popped next
            for &child in self.tree.children(current).iter().rev() {
                self.stack.push(child);
            }
        }
        Some(current)
    }
}
