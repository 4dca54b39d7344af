use crate::error::Result;
use crate::geom::Polygon;
use crate::vec2::Point;

/// Owns the obstacle set that planners borrow.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    polygons: Vec<Polygon>,
}

impl Scene {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    pub fn from_coords(obstacles: &[&[(f64, f64)]]) -> Result<Self> {
        let polygons = obstacles
            .iter()
            .map(|coords| Polygon::from_coords(coords))
            .collect::<Result<Vec<Polygon>>>()?;
        Ok(Self { polygons })
    }

    /// Two obstacles inside the unit window [-1, 1] x [-1, 1]; the first one
    /// has a concave corner.
    pub fn demo() -> Self {
        const FIRST: [(f64, f64); 4] = [(-0.8, 0.2), (-0.6, 0.6), (-0.5, 0.4), (-0.15, 0.27)];
        const SECOND: [(f64, f64); 6] = [
            (0.33, -0.125),
            (0.0, -0.2),
            (0.2, 0.2),
            (0.4, 0.045),
            (0.8, 0.2),
            (0.62, -0.27),
        ];
        let polygon = |coords: &[(f64, f64)]| {
            Polygon::clockwise(coords.iter().map(|&c| Point::from(c)).collect())
        };
        Self {
            polygons: vec![polygon(&FIRST[..]), polygon(&SECOND[..])],
        }
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn num_vertices(&self) -> usize {
        self.polygons.iter().map(|p| p.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn demo_scene() {
        let scene = Scene::demo();
        assert_eq!(scene.polygons().len(), 2);
        assert_eq!(scene.num_vertices(), 10);
        // same polygons as going through the checked constructor
        let first = Polygon::from_coords(&[(-0.8, 0.2), (-0.6, 0.6), (-0.5, 0.4), (-0.15, 0.27)]);
        assert_eq!(first.as_ref(), Ok(&scene.polygons()[0]));
        assert!(scene.polygons().iter().all(|p| p.signed_area() < 0.0));
    }

    #[test]
    fn from_coords_reports_bad_polygon() {
        let square: &[(f64, f64)] = &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        let sliver: &[(f64, f64)] = &[(0.0, 0.0), (1.0, 0.0)];
        assert_eq!(
            Scene::from_coords(&[square, sliver]),
            Err(Error::DegeneratePolygon { len: 2 })
        );
        assert_eq!(Scene::from_coords(&[square]).map(|s| s.num_vertices()), Ok(4));
    }
}
