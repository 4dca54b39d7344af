use crate::error::{Error, Result};
use crate::graph::VisibilityGraph;
use bit_vec::BitVec;
use log::{debug, trace};

/// Node sequence from root to target, inclusive, and its total weight.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPath {
    pub nodes: Vec<usize>,
    pub distance: f64,
}

/// Shortest path between two nodes of a visibility graph.
pub fn shortest_path(graph: &VisibilityGraph, root: usize, target: usize) -> Result<ShortestPath> {
    shortest_path_generic(root, target, graph.size(), |i, j| graph.weight(i, j))
}

/// Dijkstra's algorithm over a dense, undirected adjacency given by `wadj`,
/// where `None` means no edge. `wadj` must be symmetric.
///
/// Each round settles the closest unsettled node and relaxes its neighbours,
/// so the cost is O(V^2) lookups, the same as reading the matrix once. The
/// search stops as soon as `target` is settled. The path is recovered by
/// walking predecessors back from `target`; if that walk does not reach
/// `root`, the two are disconnected.
pub fn shortest_path_generic<W>(root: usize, target: usize, n: usize, wadj: W) -> Result<ShortestPath>
where
    W: Fn(usize, usize) -> Option<f64>,
{
    debug_assert!(root < n && target < n);

    let mut dist: Vec<f64> = vec![core::f64::INFINITY; n];
    let mut dad: Vec<Option<usize>> = vec![None; n];
    let mut settled = BitVec::from_elem(n, false);
    dist[root] = 0.0;

    loop {
        let mut min: Option<usize> = None;
        for t in 0..n {
            if settled[t] || !dist[t].is_finite() {
                continue;
            }
            if min.map_or(true, |m| dist[t] < dist[m]) {
                min = Some(t);
            }
        }

        let k = match min {
            Some(k) => k,
            None => break,
        };
        if k == target {
            break;
        }
        settled.set(k, true);

        for t in 0..n {
            if settled[t] {
                continue;
            }
            if let Some(w) = wadj(k, t) {
                let d = dist[k] + w;
                if d < dist[t] {
                    dist[t] = d;
                    dad[t] = Some(k);
                }
            }
        }
    }

    let mut nodes = vec![target];
    let mut v = target;
    while v != root {
        match dad[v] {
            Some(prev) => {
                nodes.push(prev);
                v = prev;
            }
            None => {
                debug!("no path from node {} to node {}", root, target);
                return Err(Error::NoPath);
            }
        }
    }
    nodes.reverse();

    trace!("shortest path {:?}, distance {}", nodes, dist[target]);
    Ok(ShortestPath {
        nodes,
        distance: dist[target],
    })
}
