use anyhow::{Result, ensure};

use crate::geometry::primitives::{MAX_COORD, Point, Rect, Size};
use crate::io::ext_repr::{ExtLayout, ExtRect};
use crate::layout::LayoutSnapshot;
use crate::util::assertions;

pub fn export(snapshot: &LayoutSnapshot) -> ExtLayout {
    ExtLayout {
        center: snapshot.center.into(),
        rects: snapshot
            .rects
            .iter()
            .map(|r| ExtRect {
                x: r.x,
                y: r.y,
                width: r.width,
                height: r.height,
            })
            .collect(),
    }
}

/// Converts an external layout back into a [`LayoutSnapshot`].
/// Fails if any rectangle has a non-positive size or if rectangles overlap.
pub fn import(ext_layout: &ExtLayout) -> Result<LayoutSnapshot> {
    let rects = ext_layout
        .rects
        .iter()
        .enumerate()
        .map(|(i, ext_rect)| {
            let size = Size::new(ext_rect.width, ext_rect.height);
            let origin = Point(ext_rect.x, ext_rect.y);
            ensure!(size.is_positive(), "rect {i} has a non-positive size: {size}");
            ensure!(
                Rect::fits_coord_range(origin, size),
                "rect {i} at {origin} with size {size} exceeds coordinates of +-{MAX_COORD}"
            );
            Ok(Rect::new(origin, size))
        })
        .collect::<Result<Vec<_>>>()?;

    ensure!(
        assertions::layout_is_valid(&rects),
        "layout contains overlapping rects"
    );

    Ok(LayoutSnapshot::new(Point::from(ext_layout.center), rects))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_rejects_invalid_sizes() {
        let ext = ExtLayout {
            center: (0, 0),
            rects: vec![ExtRect {
                x: 0,
                y: 0,
                width: 0,
                height: 4,
            }],
        };
        assert!(import(&ext).is_err());
    }

    #[test]
    fn import_rejects_rects_beyond_coord_range() {
        let ext = ExtLayout {
            center: (0, 0),
            rects: vec![ExtRect {
                x: i32::MAX - 5,
                y: 0,
                width: 20,
                height: 10,
            }],
        };
        assert!(import(&ext).is_err());
    }

    #[test]
    fn import_rejects_overlap() {
        let rect = ExtRect {
            x: 0,
            y: 0,
            width: 4,
            height: 4,
        };
        let ext = ExtLayout {
            center: (0, 0),
            rects: vec![rect, ExtRect { x: 2, ..rect }],
        };
        assert!(import(&ext).is_err());
    }

    #[test]
    fn export_keeps_order() {
        let snapshot = LayoutSnapshot::new(
            Point(1, 2),
            vec![
                Rect::new(Point(0, 0), Size::new(3, 3)),
                Rect::new(Point(-3, 0), Size::new(3, 1)),
            ],
        );
        let ext = export(&snapshot);
        assert_eq!(ext.center, (1, 2));
        assert_eq!(ext.rects[1].x, -3);
        assert_eq!(import(&ext).unwrap(), snapshot);
    }
}
