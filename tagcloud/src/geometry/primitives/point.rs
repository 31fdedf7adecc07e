use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::geometry::geo_traits::CollidesWith;

/// Geometric primitive representing a point on the integer grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point(pub i32, pub i32);

impl Point {
    pub fn x(&self) -> i32 {
        self.0
    }

    pub fn y(&self) -> i32 {
        self.1
    }

    pub fn sq_distance(&self, other: &Point) -> i64 {
        let dx = (self.0 as i64) - (other.0 as i64);
        let dy = (self.1 as i64) - (other.1 as i64);
        dx * dx + dy * dy
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.sq_distance(other) as f64).sqrt()
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(i32, i32)> for Point {
    fn from(p: (i32, i32)) -> Self {
        Point(p.0, p.1)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl<T> CollidesWith<T> for Point
where
    T: CollidesWith<Point>,
{
    fn collides_with(&self, other: &T) -> bool {
        other.collides_with(self)
    }
}
