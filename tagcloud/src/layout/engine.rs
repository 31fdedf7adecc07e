use log::{debug, trace, warn};

use crate::geometry::geo_enums::GeoRelation;
use crate::geometry::primitives::{MAX_COORD, Point, Rect, Size};
use crate::layout::LayoutSnapshot;
use crate::spiral::Spiral;
use crate::util::assertions;
use crate::util::{LayoutConfig, LayoutError, Result};

/// Outcome of a single placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// The committed rectangle
    pub rect: Rect,
    /// Free position found on the spiral, before it was compacted towards the center
    pub candidate: Rect,
    /// Number of spiral points consumed by this placement
    pub spiral_samples: usize,
}

/// Places rectangles one by one around a fixed center, forming a compact cloud.
///
/// The first rectangle is centered on the center point.
/// Every next one is put at the first free position along a [`Spiral`] and then compacted:
/// moved in a straight (8-directional) line towards the center for as long as it gets strictly closer
/// and stays free. Committed rectangles never move again.
///
/// The spiral is shared by all placements of an engine and is never rewound.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    center: Point,
    config: LayoutConfig,
    spiral: Spiral,
    placed_rects: Vec<Rect>,
    /// Largest distance along either axis from the center to an edge of any placed rectangle
    extent: i32,
}

impl LayoutEngine {
    pub fn new(center: Point) -> Result<Self> {
        Self::with_config(center, LayoutConfig::default())
    }

    pub fn with_config(center: Point, config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        let spiral = Spiral::new(center, config.spiral_step, config.spiral_rounding)?;
        Ok(Self {
            center,
            config,
            spiral,
            placed_rects: vec![],
            extent: 0,
        })
    }

    /// Places a rectangle of `size` and returns where it ended up.
    pub fn place_next(&mut self, size: Size) -> Result<Rect> {
        self.place_next_detailed(size).map(|p| p.rect)
    }

    /// Same as [`LayoutEngine::place_next`], but also reports the pre-compaction position
    /// and the number of spiral samples that were needed.
    pub fn place_next_detailed(&mut self, size: Size) -> Result<Placement> {
        if !size.is_positive() {
            return Err(LayoutError::invalid_argument(
                "rectangle size must be positive",
            ));
        }
        self.check_reach(size)?;

        let placement = match self.placed_rects.is_empty() {
            true => {
                let rect = Rect::centered_on(self.center, size);
                Placement {
                    rect,
                    candidate: rect,
                    spiral_samples: 0,
                }
            }
            false => {
                let (candidate, spiral_samples) = self.search(size)?;
                let rect = self.compact(candidate);
                Placement {
                    rect,
                    candidate,
                    spiral_samples,
                }
            }
        };

        self.commit(placement.rect);

        debug!(
            "[CLOUD] placed rect #{} ({}) at {}, {} spiral samples, compacted by ({}, {})",
            self.placed_rects.len(),
            size,
            placement.rect.origin(),
            placement.spiral_samples,
            placement.rect.x - placement.candidate.x,
            placement.rect.y - placement.candidate.y,
        );

        Ok(placement)
    }

    /// Beyond this radius a candidate of `size` lies entirely outside the square spanned by `extent`,
    /// so it cannot collide with anything.
    fn radius_limit(&self, size: Size) -> f64 {
        2.0 * (self.extent as f64 + size.max_dimension() as f64) + 2.0
    }

    /// Ensures every position a placement of `size` can visit stays within [`MAX_COORD`].
    ///
    /// A search samples past the radius limit at most one spiral step, unless the spiral already is
    /// beyond it, in which case the first sample is free. Compaction only brings a rectangle closer
    /// to the center, so its edges stay within this reach.
    fn check_reach(&self, size: Size) -> Result<()> {
        let max_radius = f64::max(
            self.radius_limit(size) + self.config.spiral_step,
            self.spiral.radius(),
        );
        let reach = max_radius + 2.0 + 2.0 * size.max_dimension() as f64;
        let farthest_center_coord = u32::max(
            self.center.x().unsigned_abs(),
            self.center.y().unsigned_abs(),
        ) as f64;

        match farthest_center_coord + reach <= MAX_COORD as f64 {
            true => Ok(()),
            false => Err(LayoutError::invalid_argument(format!(
                "rectangle of {size} around {} does not fit within coordinates of +-{MAX_COORD}",
                self.center
            ))),
        }
    }

    /// Walks the spiral until a position is found where a rectangle of `size` is free.
    fn search(&mut self, size: Size) -> Result<(Rect, usize)> {
        let radius_limit = self.radius_limit(size);

        let mut n_samples = 0;
        loop {
            let radius = self.spiral.radius();
            let candidate = Rect::new(self.spiral.sample(), size);
            n_samples += 1;

            if self.is_free(&candidate) {
                return Ok((candidate, n_samples));
            }

            let cap_reached = self
                .config
                .max_spiral_samples
                .is_some_and(|max| n_samples >= max);

            if radius > radius_limit || cap_reached {
                warn!(
                    "[CLOUD] no free position for {} after {} samples (radius: {:.1}, limit: {:.1})",
                    size, n_samples, radius, radius_limit
                );
                return Err(LayoutError::SearchExhausted { n_samples, radius });
            }
        }
    }

    /// Moves `candidate` step by step towards the center.
    ///
    /// The direction is fixed up front (sign of the offset from the candidate's origin to the center, per axis)
    /// and every step must bring the rectangle's center strictly closer to the cloud center.
    fn compact(&self, candidate: Rect) -> Rect {
        let step_x = (self.center.x() - candidate.x).signum();
        let step_y = (self.center.y() - candidate.y).signum();
        let limit = self.config.compaction_limit;

        let mut current = candidate;
        loop {
            let next = current.translate(step_x, step_y);
            let within_limit =
                (next.x - candidate.x).abs() <= limit && (next.y - candidate.y).abs() <= limit;

            if !within_limit || !self.is_closer(&next, &current) || !self.is_free(&next) {
                break;
            }
            current = next;
        }

        trace!(
            "[CLOUD] compacted {} -> {} (direction: ({}, {}))",
            candidate, current, step_x, step_y
        );
        current
    }

    /// A rectangle is free if it neither overlaps, encloses nor is enclosed by any placed rectangle.
    fn is_free(&self, rect: &Rect) -> bool {
        self.placed_rects
            .iter()
            .all(|placed| rect.relation_to(placed) == GeoRelation::Disjoint)
    }

    fn is_closer(&self, a: &Rect, b: &Rect) -> bool {
        a.center().sq_distance(&self.center) < b.center().sq_distance(&self.center)
    }

    fn commit(&mut self, rect: Rect) {
        self.placed_rects.push(rect);
        self.extent = i32::max(self.extent, rect.chebyshev_extent(self.center));

        debug_assert!(assertions::layout_is_valid(&self.placed_rects));
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// All placed rectangles, in placement order
    pub fn placed_rects(&self) -> &[Rect] {
        &self.placed_rects
    }

    pub fn n_placed(&self) -> usize {
        self.placed_rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed_rects.is_empty()
    }

    /// Total number of spiral points consumed over the lifetime of the engine
    pub fn spiral_samples(&self) -> usize {
        self.spiral.n_samples()
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot::new(self.center, self.placed_rects.clone())
    }
}
