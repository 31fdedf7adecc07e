use std::ops::Range;

use anyhow::{Result, ensure};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use tagcloud::io::svg::SvgDrawOptions;
use tagcloud::util::LayoutConfig;

/// Configuration for generating tag clouds
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CloudGenConfig {
    /// Configuration of the Layout Engine
    #[serde(default)]
    pub layout_config: LayoutConfig,
    /// Seed for the PRNG. If undefined, the sizes are sampled in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Range (exclusive end) from which rectangle widths are sampled uniformly
    pub width_range: Range<i32>,
    /// Range (exclusive end) from which rectangle heights are sampled uniformly
    pub height_range: Range<i32>,
    /// Clouds to generate, each one with its own Layout Engine
    pub clouds: Vec<CloudSpec>,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CloudSpec {
    /// Used as file stem for the output files
    pub name: String,
    pub center: (i32, i32),
    pub n_rects: usize,
}

impl CloudSpec {
    pub fn new(name: &str, center: (i32, i32), n_rects: usize) -> Self {
        Self {
            name: name.to_string(),
            center,
            n_rects,
        }
    }
}

impl CloudGenConfig {
    pub fn validate(&self) -> Result<()> {
        self.layout_config.validate()?;
        for (label, range) in [("width", &self.width_range), ("height", &self.height_range)] {
            ensure!(
                range.start > 0 && range.start < range.end,
                "invalid {label} range: {range:?}, must be non-empty and positive"
            );
        }
        for cloud in &self.clouds {
            let name = &cloud.name;
            ensure!(!name.is_empty(), "every cloud needs a name");
            // names become file stems in the output folder
            ensure!(
                !name.contains(['/', '\\']) && name != "." && name != "..",
                "cloud name {name:?} cannot be used as a file name"
            );
        }
        ensure!(
            self.clouds.iter().map(|c| &c.name).all_unique(),
            "cloud names must be unique: {:?}",
            self.clouds.iter().map(|c| &c.name).duplicates().collect_vec()
        );
        Ok(())
    }
}

impl Default for CloudGenConfig {
    fn default() -> Self {
        Self {
            layout_config: LayoutConfig::default(),
            prng_seed: Some(0),
            width_range: 20..80,
            height_range: 15..50,
            clouds: vec![
                CloudSpec::new("example1", (400, 300), 15),
                CloudSpec::new("example2", (100, 100), 50),
                CloudSpec::new("example3", (500, 500), 100),
            ],
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
