use serde::{Deserialize, Serialize};

/// Number of independent controller flags per tick.
pub const ACTION_COUNT: usize = 5;

pub const LEFT: usize = 0;
pub const RIGHT: usize = 1;
pub const DOWN: usize = 2;
pub const SPEED: usize = 3;
pub const JUMP: usize = 4;

/// One tick of simultaneous button presses, indexed by `LEFT`, `RIGHT`, `DOWN`, `SPEED`, `JUMP`.
///
/// Every combination is a legal input.
pub type ActionVector = [bool; ACTION_COUNT];

/// Ordered plan covering the planning horizon plus the safety frames.
pub type ActionSequence = Vec<ActionVector>;

/// Terminal status reported by the forward model after each step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Running,
    Win,
    Lose,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Running)
    }
}

/// Only the RIGHT flag held.
pub fn move_right() -> ActionVector {
    let mut action = [false; ACTION_COUNT];
    action[RIGHT] = true;
    action
}

/// Horizon lengths shared by the evaluator, the search and the executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Horizon {
    /// Prefix of the plan that is actually played back.
    pub planning: usize,
    /// Extra lookahead ticks simulated but never played.
    pub safety: usize,
}

impl Horizon {
    pub fn new(planning: usize, safety: usize) -> Self {
        Self { planning, safety }
    }

    pub fn total(&self) -> usize {
        self.planning + self.safety
    }
}

impl Default for Horizon {
    fn default() -> Self {
        Self::new(40, 20)
    }
}
