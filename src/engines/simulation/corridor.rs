//! Small deterministic side-scroller used by the demo binary and the tests.
//!
//! The character runs along flat ground toward `goal_x`. Falling into a pit or running out of
//! time loses; reaching the goal wins. Heights are measured upward from the ground, so jumping
//! raises `y`.

use super::model::ForwardModel;
use crate::types::{ActionVector, GameStatus, JUMP, LEFT, RIGHT, SPEED};
use std::sync::Arc;

const WALK_SPEED: f32 = 1.0;
const RUN_SPEED: f32 = 2.0;
const JUMP_VELOCITY: f32 = 4.0;
const GRAVITY: f32 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct CorridorLevel {
    pub goal_x: f32,
    /// Open intervals `(start, end)` with no floor.
    pub pits: Vec<(f32, f32)>,
    pub time_limit: usize,
}

impl CorridorLevel {
    pub fn new(goal_x: f32, pits: Vec<(f32, f32)>, time_limit: usize) -> Self {
        Self {
            goal_x,
            pits,
            time_limit,
        }
    }

    fn is_over_pit(&self, x: f32) -> bool {
        self.pits.iter().any(|&(start, end)| x > start && x < end)
    }
}

impl Default for CorridorLevel {
    fn default() -> Self {
        Self::new(400.0, vec![(80.0, 92.0), (190.0, 204.0), (300.0, 312.0)], 1000)
    }
}

/// Per-episode state. Clones share the immutable level and own everything else.
#[derive(Debug, Clone)]
pub struct CorridorModel {
    level: Arc<CorridorLevel>,
    x: f32,
    y: f32,
    vy: f32,
    ticks: usize,
    status: GameStatus,
}

impl CorridorModel {
    pub fn new(level: CorridorLevel) -> Self {
        Self {
            level: Arc::new(level),
            x: 0.0,
            y: 0.0,
            vy: 0.0,
            ticks: 0,
            status: GameStatus::Running,
        }
    }

    pub fn ticks(&self) -> usize {
        self.ticks
    }

    pub fn level(&self) -> &CorridorLevel {
        &self.level
    }
}

impl ForwardModel for CorridorModel {
    fn advance(&mut self, actions: &ActionVector) {
        if self.status.is_terminal() {
            return;
        }
        self.ticks += 1;

        let speed = if actions[SPEED] { RUN_SPEED } else { WALK_SPEED };
        let direction = match (actions[LEFT], actions[RIGHT]) {
            (false, true) => 1.0,
            (true, false) => -1.0,
            _ => 0.0,
        };
        self.x = (self.x + direction * speed).max(0.0);

        let grounded = self.y <= 0.0 && self.vy <= 0.0 && !self.level.is_over_pit(self.x);
        if grounded && actions[JUMP] {
            self.vy = JUMP_VELOCITY;
        }
        if !grounded || self.vy > 0.0 {
            self.y += self.vy;
            self.vy -= GRAVITY;
        }

        if self.y <= 0.0 {
            if self.level.is_over_pit(self.x) {
                self.status = GameStatus::Lose;
                return;
            }
            self.y = 0.0;
            self.vy = 0.0;
        }

        if self.x >= self.level.goal_x {
            self.status = GameStatus::Win;
        } else if self.ticks >= self.level.time_limit {
            self.status = GameStatus::Lose;
        }
    }

    fn mario_float_pos(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn completion_percentage(&self) -> f64 {
        f64::from(self.x / self.level.goal_x)
    }

    fn game_status(&self) -> GameStatus {
        self.status
    }
}
