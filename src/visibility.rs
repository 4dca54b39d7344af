//! Sight-line predicates against a set of polygonal obstacles.

use crate::config::DEFAULT_EPSILON;
use crate::error::{Error, Result};
use crate::geom::{Polygon, Segment};
use crate::vec2::Point;
use core::f64::consts::PI;

/// Returns true if segments `a` and `b` cross at a point interior to both.
///
/// Segments that share an endpoint never intersect, so the two edges meeting
/// at a polygon corner do not block a sight line ending at that corner.
///
/// This follows the slope-intercept construction: a vertical segment gets a run
/// of `epsilon` instead of zero, segments with equal slope are treated as
/// parallel (collinear overlap is not detected), and the candidate crossing
/// abscissa must fall strictly inside both x-extents widened by `epsilon`.
///
/// The x-extent of a vertical segment is only `epsilon` wide, so it cannot tell
/// a crossing on the segment from one on its extension. For those the crossing
/// ordinate is also checked against the segment's y-extent. Two vertical
/// segments are parallel.
pub fn segments_intersect_eps(a: &Segment, b: &Segment, epsilon: f64) -> bool {
    if a.shares_endpoint(b) {
        return false;
    }

    let a_vertical = a.a.x == a.b.x;
    let b_vertical = b.a.x == b.b.x;
    if a_vertical && b_vertical {
        return false;
    }

    let m1 = slope(a, epsilon);
    let m2 = slope(b, epsilon);
    if same_slope(m1, m2) {
        return false;
    }

    let b1 = a.a.y - m1 * a.a.x;
    let b2 = b.a.y - m2 * b.a.x;
    let x = (b2 - b1) / (m1 - m2);

    if !(in_extent(x, a.a.x, a.b.x, epsilon) && in_extent(x, b.a.x, b.b.x, epsilon)) {
        return false;
    }

    if a_vertical {
        in_extent(m2 * x + b2, a.a.y, a.b.y, epsilon)
    } else if b_vertical {
        in_extent(m1 * x + b1, b.a.y, b.b.y, epsilon)
    } else {
        true
    }
}

/// `segments_intersect_eps` with the default tolerance.
pub fn segments_intersect(a: &Segment, b: &Segment) -> bool {
    segments_intersect_eps(a, b, DEFAULT_EPSILON)
}

fn slope(s: &Segment, epsilon: f64) -> f64 {
    let rise = s.a.y - s.b.y;
    let run = s.a.x - s.b.x;
    if run == 0.0 {
        rise / epsilon
    } else {
        rise / run
    }
}

fn same_slope(m1: f64, m2: f64) -> bool {
    (m1 - m2).abs() <= core::f64::EPSILON * m1.abs().max(m2.abs())
}

fn in_extent(x: f64, x1: f64, x2: f64, epsilon: f64) -> bool {
    let (low, high) = if x1 < x2 { (x1, x2) } else { (x2, x1) };
    low - epsilon < x && x < high + epsilon
}

/// Visibility queries over a borrowed obstacle set.
#[derive(Copy, Clone, Debug)]
pub struct Visibility<'a> {
    obstacles: &'a [Polygon],
    epsilon: f64,
}

impl<'a> Visibility<'a> {
    pub fn new(obstacles: &'a [Polygon], epsilon: f64) -> Self {
        Self { obstacles, epsilon }
    }

    pub fn obstacles(&self) -> &'a [Polygon] {
        self.obstacles
    }

    pub fn segments_intersect(&self, a: &Segment, b: &Segment) -> bool {
        segments_intersect_eps(a, b, self.epsilon)
    }

    /// True iff `candidate` crosses no boundary edge of any obstacle.
    /// O(total obstacle edges).
    pub fn is_segment_free(&self, candidate: &Segment) -> bool {
        self.obstacles
            .iter()
            .flat_map(|polygon| polygon.edges())
            .all(|edge| !self.segments_intersect(candidate, &edge))
    }
}

/* Adds full turns to `angle` until it is at least `anchor`. */
fn unwind_from(angle: f64, anchor: f64) -> f64 {
    let mut angle = angle;
    while angle < anchor {
        angle += 2.0 * PI;
    }
    angle
}

/// Returns true if the segment from vertex `i` of `polygon` to `v` leaves `i`
/// into the polygon's interior.
///
/// Angles are measured counter-clockwise starting from the edge to the
/// preceding vertex. For a clockwise polygon that sweep reaches the interior
/// wedge before the edge to the following vertex.
pub fn inner_diagonal_at(polygon: &Polygon, i: usize, v: Point) -> bool {
    let u = polygon.vertex(i);
    let anchor = Segment::new(u, polygon.vertex(polygon.before(i))).angle();
    let bound = unwind_from(
        Segment::new(u, polygon.vertex(polygon.after(i))).angle(),
        anchor,
    );
    let theta = unwind_from(Segment::new(u, v).angle(), anchor);
    anchor < theta && theta < bound
}

/// Point-based form of [`inner_diagonal_at`]. `u` must be a vertex of `polygon`.
pub fn is_inner_diagonal(u: Point, v: Point, polygon: &Polygon) -> Result<bool> {
    let i = polygon
        .index_of(u)
        .ok_or(Error::NotAVertex { x: u.x, y: u.y })?;
    Ok(inner_diagonal_at(polygon, i, v))
}
