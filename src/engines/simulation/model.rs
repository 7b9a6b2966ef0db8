use crate::types::{ActionVector, GameStatus};

/// Forward simulator the planner rolls candidate plans through.
///
/// `clone()` must produce a fully independent copy: advancing the clone may never be
/// observable through the original or any other clone. The planner treats every method as
/// infallible for any `ActionVector`.
pub trait ForwardModel: Clone + Send + Sync {
    /// Advance the world one tick under `actions`.
    fn advance(&mut self, actions: &ActionVector);

    /// Current (x, y) of the controlled character.
    fn mario_float_pos(&self) -> (f32, f32);

    /// Level progress, nominally in [0, 1].
    fn completion_percentage(&self) -> f64;

    fn game_status(&self) -> GameStatus;
}
