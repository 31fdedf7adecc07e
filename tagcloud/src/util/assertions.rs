use itertools::Itertools;
use log::error;

use crate::geometry::geo_enums::GeoRelation;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Rect;
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

/// No two rectangles share any part of their interiors.
pub fn rects_do_not_overlap(rects: &[Rect]) -> bool {
    match rects
        .iter()
        .enumerate()
        .tuple_combinations()
        .find(|((_, a), (_, b))| a.collides_with(*b))
    {
        Some(((i, a), (j, b))) => {
            error!("rects {i} {a} and {j} {b} overlap");
            false
        }
        None => true,
    }
}

/// No rectangle is enclosed by (or surrounds) another one.
pub fn rects_do_not_contain_each_other(rects: &[Rect]) -> bool {
    match rects
        .iter()
        .enumerate()
        .tuple_combinations()
        .find(|((_, a), (_, b))| {
            matches!(
                a.relation_to(b),
                GeoRelation::Enclosed | GeoRelation::Surrounding
            )
        }) {
        Some(((i, a), (j, b))) => {
            error!("rect {i} {a} and {j} {b} contain one another");
            false
        }
        None => true,
    }
}

pub fn layout_is_valid(rects: &[Rect]) -> bool {
    rects.iter().all(|r| r.size().is_positive())
        && rects_do_not_overlap(rects)
        && rects_do_not_contain_each_other(rects)
}
