use serde::{Deserialize, Serialize};

use crate::spiral::SpiralRounding;
use crate::util::{LayoutError, Result};

///Configuration of the Layout Engine
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    ///Angle increment of the spiral per sample, the radius grows with the same factor
    pub spiral_step: f64,
    ///How the continuous spiral coordinates are snapped to the integer grid
    #[serde(default)]
    pub spiral_rounding: SpiralRounding,
    ///Maximum displacement (on either axis) of a rectangle while it is compacted towards the center
    pub compaction_limit: i32,
    ///Optional cap on the number of spiral samples a single placement may consume
    #[serde(default)]
    pub max_spiral_samples: Option<usize>,
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.spiral_step.is_finite() && self.spiral_step > 0.0) {
            return Err(LayoutError::invalid_argument(format!(
                "spiral step must be positive, got {}",
                self.spiral_step
            )));
        }
        if self.compaction_limit < 0 {
            return Err(LayoutError::invalid_argument(format!(
                "compaction limit cannot be negative, got {}",
                self.compaction_limit
            )));
        }
        if self.max_spiral_samples == Some(0) {
            return Err(LayoutError::invalid_argument(
                "max spiral samples must allow at least one sample",
            ));
        }
        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spiral_step: 1.0,
            spiral_rounding: SpiralRounding::Nearest,
            compaction_limit: 100,
            max_spiral_samples: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn default_config_is_valid() {
        assert!(LayoutConfig::default().validate().is_ok());
    }

    #[test_case(0.0; "zero")]
    #[test_case(-1.0; "negative")]
    #[test_case(f64::NAN; "nan")]
    #[test_case(f64::INFINITY; "infinite")]
    fn non_positive_step_is_rejected(step: f64) {
        let config = LayoutConfig {
            spiral_step: step,
            ..LayoutConfig::default()
        };
        assert!(config.validate().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn negative_compaction_limit_is_rejected() {
        let config = LayoutConfig {
            compaction_limit: -1,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_sample_cap_is_rejected() {
        let config = LayoutConfig {
            max_spiral_samples: Some(0),
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn deserializes_with_optional_fields_missing() {
        let json = r#"{"spiral_step": 0.5, "compaction_limit": 50}"#;
        let config: LayoutConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.spiral_step, 0.5);
        assert_eq!(config.compaction_limit, 50);
        assert_eq!(config.spiral_rounding, SpiralRounding::Nearest);
        assert_eq!(config.max_spiral_samples, None);
    }
}
