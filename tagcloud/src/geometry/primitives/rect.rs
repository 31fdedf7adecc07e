use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::geometry::geo_enums::GeoRelation;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Point, Size};

/// Largest absolute coordinate a layout may reach.
/// Keeps every edge, width, extent and center distance derived from a layout within `i32`.
pub const MAX_COORD: i32 = i32::MAX / 2;

///Axis-aligned rectangle on the integer grid, anchored at its top-left corner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(origin: Point, size: Size) -> Self {
        Rect {
            x: origin.x(),
            y: origin.y(),
            width: size.width,
            height: size.height,
        }
    }

    /// Rectangle of `size` whose center coincides with `center`.
    /// Odd dimensions are halved with truncating division, so the origin is `center - size / 2`.
    pub fn centered_on(center: Point, size: Size) -> Self {
        let origin = Point(center.x() - size.width / 2, center.y() - size.height / 2);
        Rect::new(origin, size)
    }

    pub fn origin(&self) -> Point {
        Point(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point(self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn area(&self) -> i64 {
        self.size().area()
    }

    /// Returns the four corners of `self`: top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point(self.left(), self.top()),
            Point(self.right(), self.top()),
            Point(self.right(), self.bottom()),
            Point(self.left(), self.bottom()),
        ]
    }

    /// Returns a copy of `self` shifted by `dx` and `dy`.
    pub fn translate(&self, dx: i32, dy: i32) -> Rect {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Returns the geometric relation between `self` and another [`Rect`].
    /// Optimized for `GeoRelation::Disjoint`
    #[inline(always)]
    pub fn relation_to(&self, other: &Rect) -> GeoRelation {
        if !self.collides_with(other) {
            return GeoRelation::Disjoint;
        }
        if self.left() <= other.left()
            && self.top() <= other.top()
            && self.right() >= other.right()
            && self.bottom() >= other.bottom()
        {
            return GeoRelation::Surrounding;
        }
        if self.left() >= other.left()
            && self.top() >= other.top()
            && self.right() <= other.right()
            && self.bottom() <= other.bottom()
        {
            return GeoRelation::Enclosed;
        }
        GeoRelation::Intersecting
    }

    /// Returns the smallest rectangle that contains both `a` and `b`.
    pub fn bounding_rect(a: Rect, b: Rect) -> Rect {
        let x_min = i32::min(a.left(), b.left());
        let y_min = i32::min(a.top(), b.top());
        let x_max = i32::max(a.right(), b.right());
        let y_max = i32::max(a.bottom(), b.bottom());
        Rect {
            x: x_min,
            y: y_min,
            width: x_max - x_min,
            height: y_max - y_min,
        }
    }

    /// Whether every edge of a rectangle at `origin` with `size` lies within `[-MAX_COORD, MAX_COORD]`.
    /// Computed in `i64`, so it holds for any pair of integers.
    pub fn fits_coord_range(origin: Point, size: Size) -> bool {
        let in_range = |v: i64| v.abs() <= MAX_COORD as i64;
        let (x, y) = (origin.x() as i64, origin.y() as i64);
        in_range(x)
            && in_range(y)
            && in_range(x + size.width as i64)
            && in_range(y + size.height as i64)
    }

    /// Largest distance along either axis from `point` to one of the edges of `self`.
    pub fn chebyshev_extent(&self, point: Point) -> i32 {
        [
            (self.left() - point.x()).abs(),
            (self.right() - point.x()).abs(),
            (self.top() - point.y()).abs(),
            (self.bottom() - point.y()).abs(),
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }
}

impl CollidesWith<Rect> for Rect {
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        i32::max(self.left(), other.left()) < i32::min(self.right(), other.right())
            && i32::max(self.top(), other.top()) < i32::min(self.bottom(), other.bottom())
    }
}

impl CollidesWith<Point> for Rect {
    #[inline(always)]
    fn collides_with(&self, point: &Point) -> bool {
        let Point(x, y) = *point;
        x > self.left() && x < self.right() && y > self.top() && y < self.bottom()
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[x: {}, y: {}, w: {}, h: {}]",
            self.x, self.y, self.width, self.height
        )
    }
}
