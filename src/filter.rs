//! Vertex and edge selection strategies.
//!
//! The full planner keeps every obstacle vertex and every unobstructed sight
//! line. The reduced planner keeps only convex vertices, and between different
//! obstacles only bitangent edges: a shortest path bends only around convex
//! corners, and it arrives at and leaves each corner along a line that touches
//! the obstacle without entering it.

use crate::config::DEFAULT_EPSILON;
use crate::error::{Error, Result};
use crate::geom::Polygon;
use crate::vec2::Point;

/// Convexity under the clockwise convention: a vertex is convex when the
/// boundary turns right (or goes straight) there.
pub fn is_convex_at(polygon: &Polygon, i: usize) -> bool {
    let v = polygon.vertex(i);
    let before = polygon.vertex(polygon.before(i));
    let after = polygon.vertex(polygon.after(i));
    (v - before).cross(after - v) <= 0.0
}

/// Sign of `d x e` with magnitudes below `epsilon * |d| * |e|` taken as 0.
fn orientation(d: Point, e: Point, epsilon: f64) -> i8 {
    let c = d.cross(e);
    if c.abs() <= epsilon * d.length() * e.length() {
        0
    } else if c > 0.0 {
        1
    } else {
        -1
    }
}

/// Returns true if the line arriving at vertex `i` from `from` is tangent to
/// `polygon` there, i.e. both neighbouring vertices are on the same side of
/// the line (or on it, within `epsilon` relative to the lengths involved).
pub fn tangent_at(polygon: &Polygon, i: usize, from: Point, epsilon: f64) -> bool {
    let v = polygon.vertex(i);
    let d = v - from;
    let o1 = orientation(d, polygon.vertex(polygon.before(i)) - v, epsilon);
    let o2 = orientation(d, polygon.vertex(polygon.after(i)) - v, epsilon);
    o1 * o2 >= 0
}

/// Point-based form of [`tangent_at`] with the default tolerance. `vertex`
/// must be a vertex of `polygon`; anything else means the caller built its
/// vertex list wrong.
pub fn is_tangent(from: Point, vertex: Point, polygon: &Polygon) -> Result<bool> {
    let i = polygon.index_of(vertex).ok_or(Error::NotAVertex {
        x: vertex.x,
        y: vertex.y,
    })?;
    Ok(tangent_at(polygon, i, from, DEFAULT_EPSILON))
}

/// Which polygon vertices become graph nodes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum VertexFilter {
    All,
    Convex,
}

impl VertexFilter {
    pub fn keeps(self, polygon: &Polygon, i: usize) -> bool {
        match self {
            VertexFilter::All => true,
            VertexFilter::Convex => is_convex_at(polygon, i),
        }
    }
}

/// Which unobstructed sight lines become graph edges.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EdgeFilter {
    All,
    Bitangent,
}

impl EdgeFilter {
    /// Edge between vertex `i` of `p` and vertex `j` of `q`, on different
    /// obstacles. Edges within one obstacle are not filtered.
    pub fn keeps_obstacle_edge(
        self,
        p: &Polygon,
        i: usize,
        q: &Polygon,
        j: usize,
        epsilon: f64,
    ) -> bool {
        match self {
            EdgeFilter::All => true,
            EdgeFilter::Bitangent => {
                tangent_at(p, i, q.vertex(j), epsilon) && tangent_at(q, j, p.vertex(i), epsilon)
            }
        }
    }

    /// Edge between a start or goal point and vertex `i` of `polygon`. Only
    /// the obstacle side can be tested.
    pub fn keeps_terminal_edge(
        self,
        terminal: Point,
        polygon: &Polygon,
        i: usize,
        epsilon: f64,
    ) -> bool {
        match self {
            EdgeFilter::All => true,
            EdgeFilter::Bitangent => tangent_at(polygon, i, terminal, epsilon),
        }
    }
}

/// The combination of filters a planner is built with.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Strategy {
    pub vertices: VertexFilter,
    pub edges: EdgeFilter,
}

impl Strategy {
    /// The complete visibility graph.
    pub const FULL: Strategy = Strategy {
        vertices: VertexFilter::All,
        edges: EdgeFilter::All,
    };

    /// The reduced visibility graph: convex vertices, bitangent edges.
    pub const REDUCED: Strategy = Strategy {
        vertices: VertexFilter::Convex,
        edges: EdgeFilter::Bitangent,
    };
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::FULL
    }
}
