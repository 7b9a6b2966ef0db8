use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::PlannerError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Completion at which the agent stops planning and just runs right.
    pub completion_threshold: f64,
    pub stuck_frames_threshold: usize,
    pub stuck_position_threshold: f32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            completion_threshold: 0.99,
            stuck_frames_threshold: 5,
            stuck_position_threshold: 5.0,
        }
    }
}

impl ConfigSection for AgentConfig {
    fn section_name() -> &'static str {
        "agent"
    }

    fn validate(&self) -> Result<(), PlannerError> {
        if self.completion_threshold <= 0.0 || self.completion_threshold > 1.0 {
            return Err(PlannerError::Configuration(
                "Completion threshold must be in (0, 1]".to_string()
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Agent".to_string(),
            fields: vec![
                FieldManifest::new(
                    "completion_threshold",
                    "float",
                    serde_json::json!(0.99),
                    Some(0.0),
                    Some(1.0),
                    "Completion at which planning is skipped",
                ),
                FieldManifest::new(
                    "stuck_frames_threshold",
                    "integer",
                    serde_json::json!(5),
                    Some(1.0),
                    None,
                    "Minimum simulated frames before a plan can count as stuck",
                ),
                FieldManifest::new(
                    "stuck_position_threshold",
                    "float",
                    serde_json::json!(5.0),
                    Some(0.0),
                    None,
                    "Horizontal spread below which a plan counts as stuck",
                ),
            ],
        }
    }
}
