//! Errors reported by structural tree mutations.

use thiserror::Error;

use crate::node::NodeId;

/// The ways a structural mutation on a [`Tree`](crate::Tree) can be refused.
///
/// Read-only lookups never produce these; they answer out-of-range requests
/// with `None` (or an empty slice). `Result` is reserved for operations that
/// would otherwise change the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Attaching the node under the requested parent would make it its own
    /// ancestor.
    #[error("attaching {node} under {new_parent} would create a cycle")]
    WouldCycle { node: NodeId, new_parent: NodeId },

    /// A positional insert past the end of a child sequence.
    #[error("child position {index} is out of range ({len} children)")]
    OutOfRange { index: usize, len: usize },

    /// The requested parent is a forced leaf and takes no children.
    #[error("{0} is a forced leaf and cannot take children")]
    ForcedLeaf(NodeId),

    /// The tree root has no parent and cannot be given one.
    #[error("{0} is the tree root and cannot be attached under another node")]
    CannotAttachRoot(NodeId),
}
