#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

use core::ops::{Add, Mul, Sub};

impl<T> Vec2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

// Component-wise arithmetic, f64 only.
macro_rules! componentwise {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Point {
            type Output = Point;
            fn $method(self, rhs: Point) -> Point {
                Point::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

componentwise!(Add, add, +);
componentwise!(Sub, sub, -);

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, k: f64) -> Point {
        Point::new(self.x * k, self.y * k)
    }
}

/// A position in the plane. Equality is exact coordinate equality.
pub type Point = Vec2<f64>;

impl Vec2<f64> {
    pub fn from_angle(theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        Self { x: c, y: s }
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// z component of the 3-D cross product. Positive when `other` lies
    /// counter-clockwise of `self`.
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn length2(self) -> f64 {
        self.dot(self)
    }

    pub fn length(self) -> f64 {
        self.length2().sqrt()
    }

    /// Direction angle, in (-pi, pi].
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn dist2(self, other: Self) -> f64 {
        (other - self).length2()
    }

    pub fn dist(self, other: Self) -> f64 {
        self.dist2(other).sqrt()
    }
}

impl From<(f64, f64)> for Vec2<f64> {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
