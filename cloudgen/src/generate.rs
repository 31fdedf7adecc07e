use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::info;
use rand::SeedableRng;
use rand::prelude::SmallRng;
use rayon::prelude::*;
use thousands::Separable;

use tagcloud::geometry::primitives::Point;
use tagcloud::io;
use tagcloud::layout::{LayoutEngine, LayoutSnapshot};

use crate::config::{CloudGenConfig, CloudSpec};
use crate::io::output::{CloudOutput, CloudStats};
use crate::samplers::size_sampler::UniformSizeSampler;

/// A fully generated cloud
#[derive(Debug, Clone)]
pub struct GeneratedCloud {
    pub spec: CloudSpec,
    pub snapshot: LayoutSnapshot,
    pub spiral_samples: usize,
    pub run_time: Duration,
}

impl GeneratedCloud {
    pub fn to_output(&self, config: &CloudGenConfig) -> CloudOutput {
        CloudOutput {
            name: self.spec.name.clone(),
            config: config.layout_config,
            layout: io::export(&self.snapshot),
            stats: CloudStats {
                n_rects: self.snapshot.n_rects(),
                spiral_samples: self.spiral_samples,
                density: self.snapshot.density(),
                aspect_ratio: self.snapshot.aspect_ratio(),
                max_radius: self.snapshot.max_radius(),
                run_time_ms: self.run_time.as_secs_f64() * 1000.0,
            },
        }
    }
}

/// Places `spec.n_rects` randomly sized rectangles around the center of `spec`.
pub fn generate_cloud(
    spec: &CloudSpec,
    config: &CloudGenConfig,
    rng: &mut SmallRng,
) -> Result<GeneratedCloud> {
    let start = Instant::now();
    let sampler = UniformSizeSampler::new(config.width_range.clone(), config.height_range.clone())?;
    let mut engine = LayoutEngine::with_config(Point::from(spec.center), config.layout_config)?;

    for i in 0..spec.n_rects {
        let size = sampler.sample(rng);
        engine
            .place_next(size)
            .with_context(|| format!("cloud {}: failed to place rect #{i} ({size})", spec.name))?;
    }

    let run_time = start.elapsed();
    info!(
        "[GEN] cloud {} finished: {} rects, {} spiral samples in {}ms",
        spec.name,
        engine.n_placed(),
        engine.spiral_samples().separate_with_commas(),
        run_time.as_millis()
    );

    Ok(GeneratedCloud {
        spec: spec.clone(),
        snapshot: engine.snapshot(),
        spiral_samples: engine.spiral_samples(),
        run_time,
    })
}

/// Generates every cloud of `config` in parallel.
///
/// Each cloud gets its own PRNG. With a configured seed, the i-th cloud is seeded with `seed + i`,
/// making the result independent of scheduling.
pub fn generate_all(config: &CloudGenConfig) -> Result<Vec<GeneratedCloud>> {
    config.validate()?;

    config
        .clouds
        .par_iter()
        .enumerate()
        .map(|(i, spec)| {
            let mut rng = match config.prng_seed {
                Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(i as u64)),
                None => SmallRng::from_os_rng(),
            };
            generate_cloud(spec, config, &mut rng)
        })
        .collect()
}
