use crate::geom::{Polygon, Segment};
use crate::vec2::Point;
use core::f64::consts::PI;
use rand::Rng;

pub fn init_test() {
    drop(env_logger::try_init());
}

/// Builds a scene of star-shaped obstacles, one (or none) per cell of a
/// `cols` x `rows` grid of unit cells. Obstacles never overlap: each stays
/// within 0.45 of its cell centre. Some vertices are pulled inward, so the
/// obstacles are usually concave.
pub fn random_scene<R: Rng>(rng: &mut R, cols: usize, rows: usize) -> Vec<Polygon> {
    let mut obstacles = Vec::new();
    for c in 0..cols {
        for r in 0..rows {
            if rng.gen_bool(0.2) {
                continue;
            }
            let centre = Point::new(
                c as f64 + 0.5 + rng.gen_range(-0.05..0.05),
                r as f64 + 0.5 + rng.gen_range(-0.05..0.05),
            );
            let radius = rng.gen_range(0.15..0.35);
            let sides = rng.gen_range(3..8);
            let rotation = rng.gen_range(0.0..2.0 * PI);
            let points = (0..sides)
                .map(|k| {
                    let theta = rotation + 2.0 * PI * k as f64 / sides as f64;
                    let r = if sides > 3 && rng.gen_bool(0.3) {
                        radius * rng.gen_range(0.5..0.9)
                    } else {
                        radius
                    };
                    centre + Point::from_angle(theta) * r
                })
                .collect();
            if let Ok(polygon) = Polygon::new(points) {
                obstacles.push(polygon);
            }
        }
    }
    obstacles
}

/// A point in the scene's bounding square (with a margin of one cell) that is
/// outside every obstacle.
pub fn random_free_point<R: Rng>(rng: &mut R, obstacles: &[Polygon]) -> Point {
    let (mut hi_x, mut hi_y) = (1.0f64, 1.0f64);
    for p in obstacles.iter().flat_map(|polygon| polygon.points().iter()) {
        hi_x = hi_x.max(p.x.ceil());
        hi_y = hi_y.max(p.y.ceil());
    }
    loop {
        let p = Point::new(rng.gen_range(-1.0..hi_x + 1.0), rng.gen_range(-1.0..hi_y + 1.0));
        if !obstacles.iter().any(|polygon| polygon.contains(p)) {
            return p;
        }
    }
}

/// Orientation-based proper crossing test, independent of the slope form
/// used by the planner.
pub fn crosses_any_edge(obstacles: &[Polygon], s: &Segment) -> bool {
    obstacles
        .iter()
        .flat_map(|polygon| polygon.edges())
        .any(|e| {
            let d1 = s.displacement();
            let d2 = e.displacement();
            let o1 = d1.cross(e.a - s.a);
            let o2 = d1.cross(e.b - s.a);
            let o3 = d2.cross(s.a - e.a);
            let o4 = d2.cross(s.b - e.a);
            o1 * o2 < 0.0 && o3 * o4 < 0.0
        })
}

/// Samples `n` points strictly between the endpoints of `s` and reports
/// whether any of them is inside an obstacle.
pub fn samples_interior(obstacles: &[Polygon], s: &Segment, n: usize) -> bool {
    (1..=n).any(|k| {
        let p = s.lerp(k as f64 / (n + 1) as f64);
        obstacles.iter().any(|polygon| polygon.contains(p))
    })
}
