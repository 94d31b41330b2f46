//! Whole-tree traversal, independent of display state

use std::collections::{HashSet, VecDeque};

use crate::node::{Node, NodeId};
use crate::tree::Tree;

/// Traversal order for walking the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Visit parent before children (top-down)
    PreOrder,
    /// Visit children before parent (bottom-up)
    PostOrder,
    /// Visit level by level (breadth-first)
    BreadthFirst,
}

impl<T> Tree<T> {
    /// Walk the whole tree from the root in the given order
    ///
    /// Unlike [`visible_nodes`](Self::visible_nodes), walking ignores
    /// expansion state and descends into collapsed branches. Detached
    /// subtrees are not reached; walk them from their own roots.
    pub fn walk(&self, order: TraversalOrder) -> TreeWalker<'_, T> {
        self.walk_from(self.root(), order)
    }

    /// Walk the subtree rooted at `start` in the given order
    ///
    /// Yields nothing for invalid IDs.
    pub fn walk_from(&self, start: NodeId, order: TraversalOrder) -> TreeWalker<'_, T> {
        TreeWalker::new(self, start, order)
    }

    /// Count the nodes of the subtree rooted at `id`, itself included
    pub fn subtree_size(&self, id: NodeId) -> usize {
        self.walk_from(id, TraversalOrder::PreOrder).count()
    }

    /// Find the first node (in pre-order) whose payload matches a predicate
    pub fn find<F>(&self, predicate: F) -> Option<NodeId>
    where
        F: Fn(&Node<T>) -> bool,
    {
        self.walk(TraversalOrder::PreOrder)
            .find(|&id| self.get(id).map(&predicate).unwrap_or(false))
    }

    /// Find every node whose payload matches a predicate, in pre-order
    pub fn find_all<F>(&self, predicate: F) -> Vec<NodeId>
    where
        F: Fn(&Node<T>) -> bool,
    {
        self.walk(TraversalOrder::PreOrder)
            .filter(|&id| self.get(id).map(&predicate).unwrap_or(false))
            .collect()
    }
}

/// Iterator for traversing a subtree in different orders
///
/// Created by [`Tree::walk`] and [`Tree::walk_from`].
pub struct TreeWalker<'a, T> {
    tree: &'a Tree<T>,
    order: TraversalOrder,
    /// A stack for the depth-first orders, a queue for breadth-first
    pending: VecDeque<NodeId>,
    /// Post-order bookkeeping: nodes whose children are already scheduled
    visited: HashSet<NodeId>,
}

impl<'a, T> TreeWalker<'a, T> {
    fn new(tree: &'a Tree<T>, start: NodeId, order: TraversalOrder) -> Self {
        let mut pending = VecDeque::new();
        if tree.get(start).is_some() {
            pending.push_back(start);
        }
        Self {
            tree,
            order,
            pending,
            visited: HashSet::new(),
        }
    }

    fn next_preorder(&mut self) -> Option<NodeId> {
        let current = self.pending.pop_back()?;

        // push in reverse so the first child is popped next
        for &child in self.tree.children(current).iter().rev() {
            self.pending.push_back(child);
        }

        Some(current)
    }

    fn next_postorder(&mut self) -> Option<NodeId> {
        while let Some(&current) = self.pending.back() {
            if self.visited.contains(&current) {
                self.pending.pop_back();
                return Some(current);
            }

            self.visited.insert(current);
            for &child in self.tree.children(current).iter().rev() {
                self.pending.push_back(child);
            }
        }
        None
    }

    fn next_breadthfirst(&mut self) -> Option<NodeId> {
        let current = self.pending.pop_front()?;

        for &child in self.tree.children(current) {
            self.pending.push_back(child);
        }

        Some(current)
    }
}

impl<'a, T> Iterator for TreeWalker<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        match self.order {
            TraversalOrder::PreOrder => self.next_preorder(),
            TraversalOrder::PostOrder => self.next_postorder(),
            TraversalOrder::BreadthFirst => self.next_breadthfirst(),
        }
    }
}
