use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::PlannerError;
use crate::types::Horizon;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub planning_horizon: usize,
    pub safety_frames: usize,
    pub num_action_sequences: usize,
    pub top_selection_size: usize,
    pub mutation_rate: f64,
    pub num_generations: usize,
    /// Score population members on the rayon pool. Results are identical either way.
    pub parallel_evaluation: bool,
    pub seed: Option<u64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            planning_horizon: 40,
            safety_frames: 20,
            num_action_sequences: 100,
            top_selection_size: 10,
            mutation_rate: 0.2,
            num_generations: 30,
            parallel_evaluation: true,
            seed: None,
        }
    }
}

impl PlannerConfig {
    pub fn horizon(&self) -> Horizon {
        Horizon::new(self.planning_horizon, self.safety_frames)
    }

    pub fn total_horizon(&self) -> usize {
        self.horizon().total()
    }
}

impl ConfigSection for PlannerConfig {
    fn section_name() -> &'static str {
        "planner"
    }

    fn validate(&self) -> Result<(), PlannerError> {
        if self.planning_horizon == 0 {
            return Err(PlannerError::Configuration(
                "Planning horizon must be at least 1".to_string()
            ));
        }
        if self.num_action_sequences == 0 {
            return Err(PlannerError::Configuration(
                "Population size must be at least 1".to_string()
            ));
        }
        if self.top_selection_size == 0 || self.top_selection_size > self.num_action_sequences {
            return Err(PlannerError::Configuration(format!(
                "Top selection size must be between 1 and {}",
                self.num_action_sequences
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(PlannerError::Configuration(
                "Mutation rate must be between 0 and 1".to_string()
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Planner".to_string(),
            fields: vec![
                FieldManifest::new(
                    "planning_horizon",
                    "integer",
                    serde_json::json!(40),
                    Some(1.0),
                    None,
                    "Ticks of each plan played back before re-planning",
                ),
                FieldManifest::new(
                    "safety_frames",
                    "integer",
                    serde_json::json!(20),
                    Some(0.0),
                    None,
                    "Extra lookahead ticks simulated but never played",
                ),
                FieldManifest::new(
                    "num_action_sequences",
                    "integer",
                    serde_json::json!(100),
                    Some(1.0),
                    None,
                    "Number of candidate plans in the population",
                ),
                FieldManifest::new(
                    "top_selection_size",
                    "integer",
                    serde_json::json!(10),
                    Some(1.0),
                    None,
                    "Elites carried unmodified into the next generation",
                ),
                FieldManifest::new(
                    "mutation_rate",
                    "float",
                    serde_json::json!(0.2),
                    Some(0.0),
                    Some(1.0),
                    "Per-tick probability of flipping one button",
                ),
                FieldManifest::new(
                    "num_generations",
                    "integer",
                    serde_json::json!(30),
                    Some(0.0),
                    None,
                    "Generations evolved per planning call",
                ),
                FieldManifest::new(
                    "parallel_evaluation",
                    "bool",
                    serde_json::json!(true),
                    None,
                    None,
                    "Score candidates on the rayon thread pool",
                ),
            ],
        }
    }
}
