pub mod timer;
pub mod evolutionary;

pub use evolutionary::EvolutionaryAgent;
pub use timer::MarioTimer;

use crate::engines::simulation::ForwardModel;
use crate::types::ActionVector;

/// Controller the host loop drives once per game tick.
pub trait MarioAgent<M: ForwardModel> {
    /// Prepare for a new episode. Called before the first `get_actions`.
    fn initialize(&mut self, model: &M, timer: &MarioTimer);

    /// Optional offline work between `initialize` and the first `get_actions`.
    fn train(&mut self, _model: &M) {}

    /// Buttons to hold for the next tick. Exactly one vector per call.
    fn get_actions(&mut self, model: &M, timer: &MarioTimer) -> ActionVector;

    fn agent_name(&self) -> &str;
}
