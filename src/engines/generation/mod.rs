pub mod sequence;
pub mod operators;
pub mod evolution_engine;
pub mod progress;

pub use evolution_engine::{PlanSearch, ProgressCallback, SearchOutcome};
pub use progress::{LogProgressCallback, SilentProgress};
pub use sequence::{idle_sequence, random_action, random_sequence};
