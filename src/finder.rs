//! All-shortest-paths search over the knight move graph.
//!
//! A layered BFS assigns each reachable cell its distance from the start and
//! records every predecessor that lies on some shortest path to it. The queue
//! carries bare cells, never partial paths, so each cell is enqueued at most
//! once. The full path set is then reconstructed by walking the predecessor
//! relation backward from the target and reversing each walk.

use std::collections::{HashMap, VecDeque};

use crate::board::{Board, Cell};

/// An ordered start-to-end sequence of cells, each consecutive pair
/// connected by one knight move.
pub type Path = Vec<Cell>;

/// The complete set of minimum-length paths between two fixed cells.
///
/// All member paths have equal length and occur exactly once. An empty set
/// means the end cell is unreachable from the start.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathSet {
    paths: Vec<Path>,
}

impl PathSet {
    /// Number of paths in the set.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Paths in a stable, deterministic order.
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Path> {
        self.paths.iter()
    }

    /// Number of moves in each path, `None` when the set is empty.
    pub fn distance(&self) -> Option<usize> {
        self.paths.first().map(|p| p.len() - 1)
    }
}

impl<'a> IntoIterator for &'a PathSet {
    type Item = &'a Path;
    type IntoIter = std::slice::Iter<'a, Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

/// Compute every shortest path from `start` to `end` on `board`.
///
/// Pure and deterministic: no I/O, no shared state, and the result order is
/// reproducible because predecessors are recorded in BFS discovery order.
/// Out-of-bounds endpoints yield an empty set.
pub fn find_all_shortest_paths(board: &Board, start: Cell, end: Cell) -> PathSet {
    if !board.contains(start) || !board.contains(end) {
        return PathSet::default();
    }

    let mut layer: HashMap<Cell, u32> = HashMap::new();
    let mut parents: HashMap<Cell, Vec<Cell>> = HashMap::new();
    let mut queue: VecDeque<Cell> = VecDeque::new();

    layer.insert(start, 0);
    queue.push_back(start);
    let mut end_layer = if start == end { Some(0) } else { None };

    while let Some(cell) = queue.pop_front() {
        let dist = layer[&cell];
        // Nothing at or past the target's layer can lie on a shortest path.
        if end_layer.is_some_and(|d| dist >= d) {
            continue;
        }
        for next in board.valid_moves(cell) {
            match layer.get(&next).copied() {
                None => {
                    // First discovery fixes the layer and enqueues.
                    layer.insert(next, dist + 1);
                    parents.entry(next).or_default().push(cell);
                    if next == end {
                        end_layer = Some(dist + 1);
                    }
                    queue.push_back(next);
                }
                Some(d) if d == dist + 1 => {
                    // A tie: another shortest predecessor, no re-enqueue.
                    parents.entry(next).or_default().push(cell);
                }
                // Already finalized at a shorter distance.
                Some(_) => {}
            }
        }
    }

    if !layer.contains_key(&end) {
        return PathSet::default();
    }

    let mut paths = Vec::new();
    let mut walk = Vec::new();
    expand(end, start, &parents, &mut walk, &mut paths);
    PathSet { paths }
}

/// Depth-first cartesian expansion over the multi-parent relation: every
/// end-to-start walk through `parents` becomes one reversed path.
fn expand(
    cur: Cell,
    start: Cell,
    parents: &HashMap<Cell, Vec<Cell>>,
    walk: &mut Vec<Cell>,
    out: &mut Vec<Path>,
) {
    walk.push(cur);
    if cur == start {
        let mut path = walk.clone();
        path.reverse();
        out.push(path);
    } else if let Some(preds) = parents.get(&cur) {
        for &pred in preds {
            expand(pred, start, parents, walk, out);
        }
    }
    walk.pop();
}
