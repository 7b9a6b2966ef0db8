pub mod traits;
pub mod planner;
pub mod fitness;
pub mod agent;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use planner::PlannerConfig;
pub use fitness::FitnessConfig;
pub use agent::AgentConfig;
pub use traits::{ConfigSection, ConfigManifest, FieldManifest};
