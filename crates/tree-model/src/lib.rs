//! Tree Model Library
//!
//! An in-memory N-ary tree built to back expand/collapse tree views, where a
//! virtualized list renders the tree as a flat sequence of visible rows.
//!
//! # Core Concepts
//!
//! - **Tree**: Arena-backed generic tree; nodes are addressed by [`NodeId`]
//!   and every structural change goes through the tree itself
//! - **Visible projection**: The flattened, expansion-aware row sequence a
//!   tree view renders ([`Tree::visible_count`], [`Tree::visible_node_at`])
//! - **Walker**: Whole-tree traversal that ignores display state
//!   ([`Tree::walk`])
//!
//! # Example
//!
//! ```
//! use tree_model::Tree;
//!
//! let mut tree = Tree::new("root");
//! let a = tree.add_child(tree.root(), "a").unwrap();
//! tree.add_child(a, "a1").unwrap();
//! tree.add_child(tree.root(), "b").unwrap();
//!
//! // expand everything: four visible rows, in display order
//! tree.set_expanded_recursive(tree.root(), true);
//! assert_eq!(tree.visible_count(tree.root()), 4);
//!
//! // collapsing a hides its child but not a itself
//! tree.set_expanded(a, false);
//! assert_eq!(tree.visible_count(tree.root()), 3);
//! ```

mod error;
mod node;
mod tree;
mod view;
mod walk;

pub use error::TreeError;
pub use node::{Node, NodeId};
pub use tree::Tree;
pub use view::VisibleNodes;
pub use walk::{TraversalOrder, TreeWalker};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{Node, NodeId, TraversalOrder, Tree, TreeError, TreeWalker, VisibleNodes};
}
