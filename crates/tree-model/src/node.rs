//! Core node types for the tree model

use std::fmt;
use std::hash::{Hash, Hasher};

use derive_more::{Display, From, Into};

/// Unique identifier for a node within a tree
///
/// Internally an index into arena-based storage. Ids are only meaningful for
/// the [`Tree`](crate::Tree) that issued them and stay valid for its whole
/// lifetime, even after the node is detached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into)]
#[display(fmt = "NodeId({})", _0)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Create a new NodeId from a usize
    pub const fn new(id: usize) -> Self {
        NodeId(id)
    }

    /// Get the inner usize value
    pub const fn get(self) -> usize {
        self.0
    }
}

/// A single node in the tree
///
/// Pairs the user payload with the per-node display state a tree view needs.
/// Structural links (parent, children, depth) live in the owning
/// [`Tree`](crate::Tree), not here.
#[derive(Debug, Clone)]
pub struct Node<T> {
    pub(crate) content: T,
    pub(crate) expanded: bool,
    pub(crate) forced_leaf: bool,
}

impl<T> Node<T> {
    /// New nodes start collapsed and without the forced-leaf flag.
    pub(crate) fn new(content: T) -> Self {
        Self {
            content,
            expanded: false,
            forced_leaf: false,
        }
    }

    /// The user payload carried by this node
    pub fn content(&self) -> &T {
        &self.content
    }

    /// Whether a tree view currently shows this node's children
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether this node refuses children regardless of its payload
    pub fn is_forced_leaf(&self) -> bool {
        self.forced_leaf
    }
}

/// Nodes compare by payload alone. Position in the tree and display state
/// (expansion, forced leaf) are ignored.
impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content
    }
}

impl<T: Eq> Eq for Node<T> {}

/// Hashing matches equality: payload only.
impl<T: Hash> Hash for Node<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.content.hash(state);
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content)
    }
}
