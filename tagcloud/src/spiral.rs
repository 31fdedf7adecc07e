use serde::{Deserialize, Serialize};

use crate::geometry::primitives::Point;
use crate::util::{LayoutError, Result};

/// Policy to snap the continuous spiral onto the integer grid.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SpiralRounding {
    /// Round half away from zero
    #[default]
    Nearest,
    /// Truncate towards zero
    Truncate,
}

impl SpiralRounding {
    #[inline(always)]
    fn apply(self, v: f64) -> i32 {
        match self {
            SpiralRounding::Nearest => v.round() as i32,
            SpiralRounding::Truncate => v.trunc() as i32,
        }
    }
}

/// Archimedean spiral around a fixed center, sampled at integer coordinates.
///
/// Every sample advances the angle by `step` and the radius is `step * angle`,
/// so consecutive arms are `2π * step` apart. The sequence is infinite and is never rewound.
#[derive(Debug, Clone)]
pub struct Spiral {
    center: Point,
    step: f64,
    rounding: SpiralRounding,
    angle: f64,
    n_samples: usize,
}

impl Spiral {
    pub fn new(center: Point, step: f64, rounding: SpiralRounding) -> Result<Self> {
        if !(step.is_finite() && step > 0.0) {
            return Err(LayoutError::invalid_argument(format!(
                "spiral step must be positive, got {step}"
            )));
        }
        Ok(Spiral {
            center,
            step,
            rounding,
            angle: 0.0,
            n_samples: 0,
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Angle at which the next point will be sampled
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Radius at which the next point will be sampled
    pub fn radius(&self) -> f64 {
        self.step * self.angle
    }

    /// Number of points emitted so far
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Emits the point at the current angle and advances the angle by one step.
    pub fn sample(&mut self) -> Point {
        let radius = self.radius();
        // far out, points saturate at the edges of the i32 range
        let x = self.center.x().saturating_add(self.rounding.apply(radius * self.angle.cos()));
        let y = self.center.y().saturating_add(self.rounding.apply(radius * self.angle.sin()));

        self.angle += self.step;
        self.n_samples += 1;

        Point(x, y)
    }
}

impl Iterator for Spiral {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        Some(self.sample())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
