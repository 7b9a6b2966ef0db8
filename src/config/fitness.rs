use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::PlannerError;
use serde::{Deserialize, Serialize};

/// Weights of the fitness shaping function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitnessConfig {
    pub win_bonus: f64,
    pub loss_penalty: f64,
    pub completion_weight: f64,
    /// Height treated as ground level by the shaping term.
    pub vertical_floor: f64,
    /// Assumed maximum relevant height of a level.
    pub vertical_scale: f64,
    /// Fraction of the accumulated score the height bonus can reach.
    pub shaping_ratio: f64,
}

impl Default for FitnessConfig {
    fn default() -> Self {
        Self {
            win_bonus: 10_000.0,
            loss_penalty: 1_000_000.0,
            completion_weight: 100.0,
            vertical_floor: 0.0,
            vertical_scale: 100.0,
            shaping_ratio: 0.001,
        }
    }
}

impl ConfigSection for FitnessConfig {
    fn section_name() -> &'static str {
        "fitness"
    }

    fn validate(&self) -> Result<(), PlannerError> {
        if self.vertical_scale == 0.0 || !self.vertical_scale.is_finite() {
            return Err(PlannerError::Configuration(
                "Vertical scale must be a non-zero finite number".to_string()
            ));
        }
        if self.loss_penalty < 0.0 || self.win_bonus < 0.0 {
            return Err(PlannerError::Configuration(
                "Win bonus and loss penalty are magnitudes and must not be negative".to_string()
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Fitness".to_string(),
            fields: vec![
                FieldManifest::new("win_bonus", "float", serde_json::json!(10_000.0), Some(0.0), None, "Added when a plan reaches the goal"),
                FieldManifest::new("loss_penalty", "float", serde_json::json!(1_000_000.0), Some(0.0), None, "Subtracted when a plan dies"),
                FieldManifest::new("completion_weight", "float", serde_json::json!(100.0), None, None, "Multiplier on level completion"),
                FieldManifest::new("vertical_floor", "float", serde_json::json!(0.0), None, None, "Ground height for the shaping term"),
                FieldManifest::new("vertical_scale", "float", serde_json::json!(100.0), None, None, "Maximum relevant level height"),
                FieldManifest::new("shaping_ratio", "float", serde_json::json!(0.001), Some(0.0), Some(1.0), "Cap of the height bonus relative to score"),
            ],
        }
    }
}
