//! Loading indented outline files into a tree
//!
//! An outline file is plain text, one entry per line, with nesting expressed
//! by indentation:
//!
//! ```text
//! project
//!     src
//!         lib.rs
//!     README.md
//! ```
//!
//! Tabs and spaces both work. With spaces, the first indented line fixes the
//! width of one level and every deeper line must use a multiple of it. The
//! first line is the root and must be flush left; a later flush-left line is
//! an error, an outline has exactly one root.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use log::debug;
use tree_model::{NodeId, Tree};

/// Read and parse an outline file
pub fn load_outline(path: impl AsRef<Path>) -> Result<Tree<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read outline file {}", path.display()))?;
    let tree = parse_outline(&text)
        .with_context(|| format!("Failed to parse outline file {}", path.display()))?;
    debug!(
        "parsed {} outline entries from {}",
        tree.node_count(),
        path.display()
    );
    Ok(tree)
}

/// Parse outline text into a tree
///
/// Every parsed node starts collapsed; expansion is the caller's business.
///
/// # Errors
///
/// Fails on an empty outline, a second flush-left entry, indentation that
/// jumps more than one level at a time, mixed tabs and spaces, or space
/// widths that do not match the inferred unit.
pub fn parse_outline(text: &str) -> Result<Tree<String>> {
    let mut tree: Option<Tree<String>> = None;
    // the last node seen at each level, parents for whatever comes next
    let mut open_path: Vec<NodeId> = Vec::new();
    let mut space_unit: Option<usize> = None;

    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        if raw.trim().is_empty() {
            continue;
        }
        let (level, label) =
            split_entry(raw, &mut space_unit).with_context(|| format!("line {line_number}"))?;

        match tree.as_mut() {
            None => {
                if level != 0 {
                    bail!("line {line_number}: the first entry must be flush left");
                }
                let rooted = Tree::new(label);
                open_path.push(rooted.root());
                tree = Some(rooted);
            }
            Some(tree) => {
                if level == 0 {
                    bail!(
                        "line {line_number}: second top-level entry (an outline has a single root)"
                    );
                }
                if level > open_path.len() {
                    bail!(
                        "line {line_number}: indented {level} levels, at most {} possible here",
                        open_path.len()
                    );
                }
                let parent = open_path[level - 1];
                let id = tree.add_child(parent, label)?;
                open_path.truncate(level);
                open_path.push(id);
            }
        }
    }

    tree.ok_or_else(|| anyhow!("the outline is empty"))
}

/// Split one line into its indent level and label
fn split_entry(line: &str, space_unit: &mut Option<usize>) -> Result<(usize, String)> {
    let label = line.trim_start_matches([' ', '\t']);
    let indent = &line[..line.len() - label.len()];

    let tabs = indent.matches('\t').count();
    let spaces = indent.len() - tabs;
    let level = match (tabs, spaces) {
        (0, 0) => 0,
        (tabs, 0) => tabs,
        (0, spaces) => {
            let unit = *space_unit.get_or_insert(spaces);
            if spaces % unit != 0 {
                bail!("indent of {spaces} spaces is not a multiple of {unit}");
            }
            spaces / unit
        }
        _ => bail!("indentation mixes tabs and spaces"),
    };

    Ok((level, label.trim_end().to_string()))
}
