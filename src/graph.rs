use crate::array2::Array2;

/// Weighted visibility matrix over `n_vertices` obstacle vertices plus the
/// start (index `n_vertices`) and the goal (index `n_vertices + 1`).
///
/// A cell is `None` when the two nodes cannot see each other, otherwise the
/// length of the sight line. The graph is undirected and only the lower
/// triangle (`row > col`) is stored; [`weight`](Self::weight) reads it from
/// either side. Cells are written only by [`rebuild_row`](Self::rebuild_row)
/// and [`retain_row`](Self::retain_row).
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityGraph {
    n_vertices: usize,
    cells: Array2<Option<f64>>,
}

fn lower(i: usize, j: usize) -> (usize, usize) {
    if i > j {
        (i, j)
    } else {
        (j, i)
    }
}

impl VisibilityGraph {
    /// All cells start out as "no edge".
    pub fn new(n_vertices: usize) -> Self {
        let size = n_vertices + 2;
        Self {
            n_vertices,
            cells: Array2::new(size, size),
        }
    }

    pub fn n_vertices(&self) -> usize {
        self.n_vertices
    }

    /// Number of nodes: obstacle vertices plus start and goal.
    pub fn size(&self) -> usize {
        self.n_vertices + 2
    }

    pub fn start_index(&self) -> usize {
        self.n_vertices
    }

    pub fn goal_index(&self) -> usize {
        self.n_vertices + 1
    }

    /// Symmetric lookup. The diagonal has no edges.
    pub fn weight(&self, i: usize, j: usize) -> Option<f64> {
        if i == j {
            return None;
        }
        self.cells[lower(i, j)]
    }

    pub fn is_visible(&self, i: usize, j: usize) -> bool {
        self.weight(i, j).is_some()
    }

    /// Recomputes the edges between `row` and each of `cols`.
    pub fn rebuild_row<I, F>(&mut self, row: usize, cols: I, mut weight: F)
    where
        I: IntoIterator<Item = usize>,
        F: FnMut(usize) -> Option<f64>,
    {
        for col in cols {
            debug_assert_ne!(row, col);
            self.cells[lower(row, col)] = weight(col);
        }
    }

    /// Drops the edges between `row` and each of `cols` for which `keep`
    /// returns false. Cells without an edge are left alone.
    pub fn retain_row<I, F>(&mut self, row: usize, cols: I, mut keep: F)
    where
        I: IntoIterator<Item = usize>,
        F: FnMut(usize, f64) -> bool,
    {
        for col in cols {
            let cell = &mut self.cells[lower(row, col)];
            if let Some(w) = *cell {
                if !keep(col, w) {
                    *cell = None;
                }
            }
        }
    }

    /// The full (mirrored) row of node `i`: the weight to every other node.
    pub fn row(&self, i: usize) -> impl Iterator<Item = (usize, Option<f64>)> + '_ {
        (0..self.size())
            .filter(move |&j| j != i)
            .map(move |j| (j, self.weight(i, j)))
    }

    /// Neighbours of node `i` with their edge weights.
    pub fn neighbours(&self, i: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.row(i).filter_map(|(j, w)| w.map(|w| (j, w)))
    }

    /// Every edge once, as `(row, col, weight)` with `row > col`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (1..self.size()).flat_map(move |i| {
            (0..i).filter_map(move |j| self.cells[(i, j)].map(|w| (i, j, w)))
        })
    }

    pub fn num_edges(&self) -> usize {
        self.edges().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph_has_terminals() {
        let g = VisibilityGraph::new(0);
        assert_eq!(g.size(), 2);
        assert_eq!(g.start_index(), 0);
        assert_eq!(g.goal_index(), 1);
        assert_eq!(g.weight(0, 1), None);
        assert_eq!(g.num_edges(), 0);
    }

    #[test]
    fn rows_are_mirrored() {
        let mut g = VisibilityGraph::new(3);
        // upper-triangle writes land in the lower triangle
        g.rebuild_row(1, vec![0, 2, 3], |col| Some(col as f64 + 0.5));
        assert_eq!(g.weight(1, 0), Some(0.5));
        assert_eq!(g.weight(0, 1), Some(0.5));
        assert_eq!(g.weight(2, 1), Some(2.5));
        assert_eq!(g.weight(1, 3), Some(3.5));
        assert_eq!(g.weight(1, 1), None);
        assert_eq!(g.num_edges(), 3);
        assert_eq!(
            g.edges().collect::<Vec<_>>(),
            vec![(1, 0, 0.5), (2, 1, 2.5), (3, 1, 3.5)]
        );
    }

    #[test]
    fn zero_weight_is_an_edge() {
        let mut g = VisibilityGraph::new(1);
        g.rebuild_row(2, 0..2, |_| Some(0.0));
        assert!(g.is_visible(0, 2));
        assert!(g.is_visible(2, 1));
        assert_eq!(g.neighbours(2).collect::<Vec<_>>(), vec![(0, 0.0), (1, 0.0)]);
    }

    #[test]
    fn retain_only_removes() {
        let mut g = VisibilityGraph::new(2);
        g.rebuild_row(3, 0..3, |col| if col == 1 { None } else { Some(1.0) });
        g.retain_row(3, 0..3, |col, _| col != 0);
        assert_eq!(g.weight(3, 0), None);
        assert_eq!(g.weight(3, 1), None);
        assert_eq!(g.weight(3, 2), Some(1.0));
    }
}
