//! Geometric value types: segments, obstacle polygons and planned paths.

use crate::error::{Error, Result};
use crate::vec2::Point;

/// An ordered pair of points. Endpoint order matters for `angle` and
/// `displacement`, not for the segment as a set of points.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// `b - a`
    pub fn displacement(&self) -> Point {
        self.b - self.a
    }

    pub fn length(&self) -> f64 {
        self.displacement().length()
    }

    /// Direction of travel from `a` to `b`, in (-pi, pi].
    pub fn angle(&self) -> f64 {
        self.displacement().angle()
    }

    pub fn has_endpoint(&self, p: Point) -> bool {
        self.a == p || self.b == p
    }

    pub fn shares_endpoint(&self, other: &Segment) -> bool {
        other.has_endpoint(self.a) || other.has_endpoint(self.b)
    }

    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }

    pub fn reversed(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }

    /// Point at parameter `t`, where 0 is `a` and 1 is `b`.
    pub fn lerp(&self, t: f64) -> Point {
        self.a + self.displacement() * t
    }
}

/// A closed obstacle boundary.
///
/// Polygons are stored in clockwise order, so the interior is to the right of
/// each directed edge `points[i] -> points[i + 1]`. Counter-clockwise input is
/// reversed on construction. The last point connects back to the first.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < 3 {
            return Err(Error::DegeneratePolygon { len: points.len() });
        }
        Ok(Self::clockwise(points))
    }

    /// Builds a polygon from at least three points known to be valid,
    /// reversing them if they wind counter-clockwise.
    pub(crate) fn clockwise(mut points: Vec<Point>) -> Self {
        debug_assert!(points.len() >= 3);
        if signed_area(&points) > 0.0 {
            points.reverse();
        }
        Self { points }
    }

    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self> {
        Self::new(coords.iter().map(|&c| Point::from(c)).collect())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn vertex(&self, i: usize) -> Point {
        self.points[i]
    }

    /// Index of the vertex preceding `i` in winding order.
    pub fn before(&self, i: usize) -> usize {
        (i + self.points.len() - 1) % self.points.len()
    }

    /// Index of the vertex following `i` in winding order.
    pub fn after(&self, i: usize) -> usize {
        (i + 1) % self.points.len()
    }

    pub fn edge(&self, i: usize) -> Segment {
        Segment::new(self.points[i], self.points[self.after(i)])
    }

    /// Boundary edges, `points[i] -> points[i + 1]`, wrapping at the end.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        (0..self.points.len()).map(move |i| self.edge(i))
    }

    /// Uses exact point equality.
    pub fn index_of(&self, p: Point) -> Option<usize> {
        self.points.iter().position(|&q| q == p)
    }

    pub fn has_vertex(&self, p: Point) -> bool {
        self.index_of(p).is_some()
    }

    /// Shoelace area; negative for a stored (clockwise) polygon.
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    /// Crossing-number test. Points on the boundary have no defined answer.
    pub fn contains(&self, p: Point) -> bool {
        let mut inside = false;
        for edge in self.edges() {
            let (a, b) = (edge.a, edge.b);
            if (a.y > p.y) != (b.y > p.y) {
                let x = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if p.x < x {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        sum += p.cross(q);
    }
    sum / 2.0
}

/// An ordered sequence of points from start to goal, inclusive.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub points: Vec<Point>,
}

impl Path {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points.windows(2).map(|w| Segment::new(w[0], w[1]))
    }

    pub fn length(&self) -> f64 {
        self.segments().map(|s| s.length()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_properties() {
        let s = Segment::new(Point::new(1.0, 1.0), Point::new(1.0, 3.0));
        assert_eq!(s.length(), 2.0);
        assert_eq!(s.displacement(), Point::new(0.0, 2.0));
        assert_eq!(s.angle(), core::f64::consts::FRAC_PI_2);
        assert_eq!(s.reversed().angle(), -core::f64::consts::FRAC_PI_2);
        assert!(s.has_endpoint(Point::new(1.0, 3.0)));
        assert!(!s.has_endpoint(Point::new(1.0, 2.0)));
        assert_eq!(s.lerp(0.5), Point::new(1.0, 2.0));
    }

    #[test]
    fn polygon_is_stored_clockwise() {
        let ccw = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap();
        assert!(ccw.signed_area() < 0.0);
        assert_eq!(ccw.signed_area(), -1.0);
        assert_eq!(ccw.vertex(0), Point::new(0.0, 1.0));

        let cw = Polygon::from_coords(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap();
        assert_eq!(cw.vertex(0), Point::new(0.0, 0.0));
        assert_eq!(cw.vertex(1), Point::new(0.0, 1.0));
    }

    #[test]
    fn polygon_needs_three_points() {
        assert_eq!(
            Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0)]),
            Err(Error::DegeneratePolygon { len: 2 })
        );
    }

    #[test]
    fn neighbours_wrap() {
        let p = Polygon::from_coords(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap();
        assert_eq!(p.before(0), 3);
        assert_eq!(p.after(3), 0);
        assert_eq!(p.edges().count(), 4);
        assert_eq!(p.edge(3), Segment::new(Point::new(1.0, 0.0), Point::new(0.0, 0.0)));
        assert_eq!(p.index_of(Point::new(1.0, 1.0)), Some(2));
        assert_eq!(p.index_of(Point::new(0.5, 0.5)), None);
    }

    #[test]
    fn contains_concave() {
        // An L shape.
        let p = Polygon::from_coords(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 2.0),
            (0.0, 2.0),
        ])
        .unwrap();
        assert!(p.contains(Point::new(0.5, 0.5)));
        assert!(p.contains(Point::new(0.5, 1.5)));
        assert!(!p.contains(Point::new(1.5, 1.5)));
        assert!(!p.contains(Point::new(-0.5, 0.5)));
    }

    #[test]
    fn path_length() {
        let path = Path::new(vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(3.0, 5.0),
        ]);
        assert_eq!(path.length(), 6.0);
        assert_eq!(path.segments().count(), 2);
    }
}
