use ordered_float::OrderedFloat;

use crate::geometry::primitives::{Point, Rect};

/// Immutable copy of a layout: its center and the placed rectangles in placement order.
/// Used by everything that only reads a layout (statistics, export, rendering).
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutSnapshot {
    pub center: Point,
    pub rects: Vec<Rect>,
}

impl LayoutSnapshot {
    pub fn new(center: Point, rects: Vec<Rect>) -> Self {
        Self { center, rects }
    }

    pub fn n_rects(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Smallest rectangle containing all placed rectangles
    pub fn bbox(&self) -> Option<Rect> {
        self.rects.iter().copied().reduce(Rect::bounding_rect)
    }

    pub fn bbox_center(&self) -> Option<Point> {
        self.bbox().map(|bbox| bbox.center())
    }

    /// Ratio of the longest to the shortest side of the bounding box, 1.0 for a square
    pub fn aspect_ratio(&self) -> Option<f64> {
        self.bbox().map(|bbox| {
            let (w, h) = (bbox.width as f64, bbox.height as f64);
            f64::max(w, h) / f64::min(w, h)
        })
    }

    pub fn total_area(&self) -> i64 {
        self.rects.iter().map(|r| r.area()).sum()
    }

    /// Fraction of the bounding box covered by rectangles
    pub fn density(&self) -> f64 {
        match self.bbox() {
            Some(bbox) => self.total_area() as f64 / bbox.area() as f64,
            None => 0.0,
        }
    }

    /// Distance from the center to the farthest corner of any rectangle
    pub fn max_radius(&self) -> f64 {
        self.rects
            .iter()
            .flat_map(|r| r.corners())
            .map(|c| OrderedFloat(c.distance(&self.center)))
            .max()
            .map_or(0.0, |d| d.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::primitives::Size;
    use float_cmp::approx_eq;

    fn snapshot() -> LayoutSnapshot {
        LayoutSnapshot::new(
            Point(0, 0),
            vec![
                Rect::new(Point(-10, -5), Size::new(20, 10)),
                Rect::new(Point(10, -5), Size::new(10, 10)),
            ],
        )
    }

    #[test]
    fn empty_snapshot_has_no_bbox() {
        let s = LayoutSnapshot::new(Point(3, 3), vec![]);
        assert!(s.is_empty());
        assert_eq!(s.bbox(), None);
        assert_eq!(s.aspect_ratio(), None);
        assert_eq!(s.density(), 0.0);
        assert_eq!(s.max_radius(), 0.0);
    }

    #[test]
    fn statistics() {
        let s = snapshot();
        assert_eq!(s.bbox(), Some(Rect::new(Point(-10, -5), Size::new(30, 10))));
        assert_eq!(s.bbox_center(), Some(Point(5, 0)));
        assert!(approx_eq!(f64, s.aspect_ratio().unwrap(), 3.0));
        assert!(approx_eq!(f64, s.density(), 1.0));
        assert_eq!(s.total_area(), 300);
        assert!(approx_eq!(f64, s.max_radius(), 425.0_f64.sqrt()));
    }
}
