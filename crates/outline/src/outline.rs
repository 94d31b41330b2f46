//! Console viewer for indented outline files
//!
//! Usage:
//!   outline FILE [DEPTH [ROW]]
//!
//! Renders FILE as a tree with every branch expanded, or expanded down to
//! DEPTH levels when given. With ROW as well, resolves that visible row back
//! to its node and prints the full path, the same lookup a virtualized list
//! makes when a row is clicked.

mod document;
mod render;

use std::env;
use std::process;

use anyhow::{bail, Context, Result};
use log::{debug, info};
use tree_model::{TraversalOrder, Tree};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!("Usage: outline FILE [DEPTH [ROW]]");
        process::exit(2);
    }
    let depth_limit = match args.get(2) {
        Some(raw) => Some(
            raw.parse::<usize>()
                .with_context(|| format!("DEPTH must be a number, got {raw}"))?,
        ),
        None => None,
    };
    let row = match args.get(3) {
        Some(raw) => Some(
            raw.parse::<usize>()
                .with_context(|| format!("ROW must be a number, got {raw}"))?,
        ),
        None => None,
    };

    info!("loading outline from {}", &args[1]);
    let mut tree = document::load_outline(&args[1])?;
    debug!("outline holds {} nodes", tree.node_count());

    match depth_limit {
        None => tree.set_expanded_recursive(tree.root(), true),
        Some(limit) => expand_to_depth(&mut tree, limit),
    }

    for row_text in render::render_rows(&tree) {
        println!("{row_text}");
    }
    println!();
    println!("{}", render::summary(&tree));

    if let Some(row) = row {
        let root = tree.root();
        match tree.visible_node_at(root, row) {
            Some(id) => println!("row {row}: {}", render::node_path(&tree, id)),
            None => bail!(
                "row {row} is out of range ({} rows visible)",
                tree.visible_count(root)
            ),
        }
    }

    Ok(())
}

/// Expand every node shallower than `limit` and collapse the rest, so
/// `outline FILE 1` shows the root plus its direct children
fn expand_to_depth(tree: &mut Tree<String>, limit: usize) {
    let ids: Vec<_> = tree.walk(TraversalOrder::PreOrder).collect();
    for id in ids {
        let expanded = tree.depth(id) < limit;
        tree.set_expanded(id, expanded);
    }
}
