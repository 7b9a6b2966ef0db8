pub mod model;
pub mod evaluator;
pub mod corridor;

pub use model::ForwardModel;
pub use evaluator::{Evaluation, FitnessEvaluator, Trajectory};
pub use corridor::{CorridorLevel, CorridorModel};
