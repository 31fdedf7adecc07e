use serde::{Deserialize, Serialize};

use tagcloud::io::ext_repr::ExtLayout;
use tagcloud::util::LayoutConfig;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CloudOutput {
    pub name: String,
    pub config: LayoutConfig,
    pub layout: ExtLayout,
    pub stats: CloudStats,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct CloudStats {
    pub n_rects: usize,
    pub spiral_samples: usize,
    pub density: f64,
    pub aspect_ratio: Option<f64>,
    pub max_radius: f64,
    pub run_time_ms: f64,
}
