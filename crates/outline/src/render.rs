//! Rendering the visible projection as text rows
//!
//! Produces the classic guide-line layout:
//!
//! ```text
//! project
//! ├── src
//! │   ├── lib.rs
//! │   └── tree.rs
//! └── README.md
//! ```
//!
//! A collapsed branch keeps its row and gains a `[+N]` marker with the
//! number of nodes it is hiding.

use smallvec::SmallVec;
use tree_model::{NodeId, Tree};

/// Last-sibling flags from the root down to the current node; they pick
/// between `├──`/`└──` and the `│`/blank continuation columns
type TailFlags = SmallVec<[bool; 8]>;

/// Render every visible row of the tree, in display order
pub fn render_rows(tree: &Tree<String>) -> Vec<String> {
    let mut rows = Vec::with_capacity(tree.visible_count(tree.root()));
    let mut tails = TailFlags::new();
    render_into(tree, tree.root(), &mut tails, &mut rows);
    rows
}

fn render_into(tree: &Tree<String>, id: NodeId, tails: &mut TailFlags, rows: &mut Vec<String>) {
    rows.push(format_row(tree, id, tails));
    if !tree.is_expanded(id) {
        return;
    }
    let children = tree.children(id);
    for (index, &child) in children.iter().enumerate() {
        tails.push(index + 1 == children.len());
        render_into(tree, child, tails, rows);
        tails.pop();
    }
}

fn format_row(tree: &Tree<String>, id: NodeId, tails: &TailFlags) -> String {
    let mut row = String::new();
    if let Some((&tail, ancestors)) = tails.split_last() {
        for &ancestor_tail in ancestors {
            row.push_str(if ancestor_tail { "    " } else { "│   " });
        }
        row.push_str(if tail { "└── " } else { "├── " });
    }
    row.push_str(tree[id].content());
    if tree.has_children(id) && !tree.is_expanded(id) {
        let hidden = tree.subtree_size(id) - 1;
        row.push_str(&format!(" [+{hidden}]"));
    }
    row
}

/// One-line footer for below the rows
pub fn summary(tree: &Tree<String>) -> String {
    format!(
        "{} of {} nodes visible",
        tree.visible_count(tree.root()),
        tree.node_count()
    )
}

/// Slash-joined labels from the root down to `id`
pub fn node_path(tree: &Tree<String>, id: NodeId) -> String {
    let mut labels: Vec<&str> = tree
        .ancestors(id)
        .iter()
        .map(|&ancestor| tree[ancestor].content().as_str())
        .collect();
    labels.reverse();
    labels.push(tree[id].content());
    labels.join("/")
}
