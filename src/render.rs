//! Rendering of a path set: Graphviz DOT text, an arrow-joined listing, and
//! file artifacts.
//!
//! The `.dot` and `paths.txt` files are the contract; PDF/JPEG images are a
//! best-effort convenience that needs the Graphviz `dot` binary on PATH.

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::Context;
use log::{info, warn};

use crate::board::Board;
use crate::finder::PathSet;

/// Deduplicated directed graph over the notation strings of all cells that
/// appear on any path. Backed by ordered sets so iteration is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathGraph {
    nodes: BTreeSet<String>,
    edges: BTreeSet<(String, String)>,
}

impl PathGraph {
    /// Collect the nodes and consecutive-step edges of every path.
    pub fn from_paths(board: &Board, paths: &PathSet) -> Self {
        let mut nodes = BTreeSet::new();
        let mut edges = BTreeSet::new();
        for path in paths {
            for step in path.windows(2) {
                let src = board.to_notation(step[0]);
                let dst = board.to_notation(step[1]);
                nodes.insert(src.clone());
                nodes.insert(dst.clone());
                edges.insert((src, dst));
            }
            // A trivial single-cell path still contributes its node.
            if let [only] = path.as_slice() {
                nodes.insert(board.to_notation(*only));
            }
        }
        PathGraph { nodes, edges }
    }

    pub fn nodes(&self) -> &BTreeSet<String> {
        &self.nodes
    }

    pub fn edges(&self) -> &BTreeSet<(String, String)> {
        &self.edges
    }

    /// Emit the graph as Graphviz DOT, laid out left to right.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph knight_paths {\n    rankdir=LR;\n");
        for node in &self.nodes {
            let _ = writeln!(dot, "    \"{}\";", node);
        }
        for (src, dst) in &self.edges {
            let _ = writeln!(dot, "    \"{}\" -> \"{}\";", src, dst);
        }
        dot.push_str("}\n");
        dot
    }
}

/// Flat text listing: one line per path, `pos1 -> pos2 -> ... -> posN`.
pub fn path_listing(board: &Board, paths: &PathSet) -> String {
    let mut out = String::new();
    for path in paths {
        let steps: Vec<String> = path.iter().map(|&c| board.to_notation(c)).collect();
        out.push_str(&steps.join(" -> "));
        out.push('\n');
    }
    out
}

/// Write `knight_paths.dot` and `paths.txt` into `dir`, then try to render
/// PDF and JPEG images from the DOT file.
pub fn write_artifacts(dir: &Path, board: &Board, paths: &PathSet) -> anyhow::Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("creating output directory {}", dir.display()))?;

    let graph = PathGraph::from_paths(board, paths);
    let dot_path = dir.join("knight_paths.dot");
    fs::write(&dot_path, graph.to_dot())
        .with_context(|| format!("writing {}", dot_path.display()))?;

    let listing_path = dir.join("paths.txt");
    fs::write(&listing_path, path_listing(board, paths))
        .with_context(|| format!("writing {}", listing_path.display()))?;

    for format in ["pdf", "jpg"] {
        render_image(&dot_path, dir, format);
    }
    Ok(())
}

fn render_image(dot_path: &Path, dir: &Path, format: &str) {
    let out = dir.join(format!("knight_paths.{}", format));
    let status = Command::new("dot")
        .arg(format!("-T{}", format))
        .arg(dot_path)
        .arg("-o")
        .arg(&out)
        .status();
    match status {
        Ok(s) if s.success() => info!("Rendered {}", out.display()),
        Ok(s) => warn!("dot exited with {} while rendering {}", s, out.display()),
        Err(e) => warn!("Graphviz dot unavailable, skipping {} render: {}", format, e),
    }
}
