//! Example that builds a small tree and shows how expansion state drives the
//! visible rows a tree view would render
//!
//! Usage:
//!   cargo run --example visible_rows

use tree_model::prelude::*;

fn main() {
    // a hand-built project outline
    let mut tree = Tree::new("project");
    let src = tree.add_child(tree.root(), "src").unwrap();
    tree.add_child(src, "lib.rs").unwrap();
    tree.add_child(src, "tree.rs").unwrap();
    let docs = tree.add_child(tree.root(), "docs").unwrap();
    tree.add_child(docs, "intro.md").unwrap();
    tree.add_child(docs, "api.md").unwrap();
    tree.add_child(tree.root(), "README.md").unwrap();

    println!("Fully expanded:");
    println!("═══════════════════════════════");
    tree.set_expanded_recursive(tree.root(), true);
    print_rows(&tree);

    // collapse one branch and render again
    tree.set_expanded(docs, false);

    println!();
    println!("With {} collapsed:", tree[docs]);
    println!("═══════════════════════════════");
    print_rows(&tree);

    println!();
    println!("Summary:");
    println!("  Total nodes: {}", tree.node_count());
    println!(
        "  Visible rows: {}",
        tree.visible_count(tree.root())
    );
    println!(
        "  Row 2 resolves to: {}",
        match tree.visible_node_at(tree.root(), 2) {
            Some(id) => tree[id].to_string(),
            None => "nothing".to_string(),
        }
    );
}

/// Render each visible row the way a list view would: one line per row,
/// indented by depth, with a marker for collapsed branches
fn print_rows(tree: &Tree<&str>) {
    let root = tree.root();
    for id in tree.visible_nodes(root) {
        let indent = "  ".repeat(tree.depth(id));
        let marker = if tree.has_children(id) && !tree.is_expanded(id) {
            " [+]"
        } else {
            ""
        };
        let position = tree.visible_position_of(root, id).unwrap();
        println!("{:>3}  {}{}{}", position, indent, tree[id], marker);
    }
}
