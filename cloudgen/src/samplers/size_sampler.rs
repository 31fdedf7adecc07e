use std::ops::Range;

use anyhow::{Result, anyhow, ensure};
use rand::Rng;
use rand::distr::{Distribution, Uniform};

use tagcloud::geometry::primitives::Size;

/// Samples a [`Size`] with width and height drawn uniformly from their respective ranges.
#[derive(Debug, Clone)]
pub struct UniformSizeSampler {
    pub width: Uniform<i32>,
    pub height: Uniform<i32>,
}

impl UniformSizeSampler {
    pub fn new(width_range: Range<i32>, height_range: Range<i32>) -> Result<Self> {
        ensure!(
            width_range.start > 0 && height_range.start > 0,
            "sampled sizes must be positive, got widths {width_range:?} and heights {height_range:?}"
        );
        let width = Uniform::new(width_range.start, width_range.end)
            .map_err(|e| anyhow!("invalid width range {width_range:?}: {e}"))?;
        let height = Uniform::new(height_range.start, height_range.end)
            .map_err(|e| anyhow!("invalid height range {height_range:?}: {e}"))?;
        Ok(Self { width, height })
    }

    pub fn sample(&self, rng: &mut impl Rng) -> Size {
        Size::new(self.width.sample(rng), self.height.sample(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::prelude::SmallRng;

    #[test]
    fn samples_stay_in_range() {
        let sampler = UniformSizeSampler::new(20..80, 15..50).unwrap();
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..1000 {
            let size = sampler.sample(&mut rng);
            assert!((20..80).contains(&size.width));
            assert!((15..50).contains(&size.height));
        }
    }

    #[test]
    fn invalid_ranges_are_rejected() {
        assert!(UniformSizeSampler::new(0..10, 5..10).is_err());
        assert!(UniformSizeSampler::new(10..10, 5..10).is_err());
        assert!(UniformSizeSampler::new(5..10, 12..10).is_err());
    }
}
