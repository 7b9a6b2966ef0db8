#![allow(dead_code)]

use evoplanner::config::AppConfig;
use evoplanner::engines::simulation::ForwardModel;
use evoplanner::types::{ActionVector, GameStatus, JUMP, RIGHT};

/// Forward model whose outcome is fixed by step count, independent of input.
///
/// RIGHT moves one unit along x and JUMP lifts to `jump_height` for that tick; otherwise the
/// character sits at `base_height`.
#[derive(Debug, Clone)]
pub struct ScriptedModel {
    pub steps: usize,
    pub x: f32,
    pub y: f32,
    pub base_height: f32,
    pub jump_height: f32,
    pub level_length: f32,
    pub win_after: Option<usize>,
    pub lose_after: Option<usize>,
    pub completion_override: Option<f64>,
    pub status: GameStatus,
}

impl ScriptedModel {
    pub fn new() -> Self {
        Self {
            steps: 0,
            x: 0.0,
            y: 0.0,
            base_height: 0.0,
            jump_height: 10.0,
            level_length: 100.0,
            win_after: None,
            lose_after: None,
            completion_override: None,
            status: GameStatus::Running,
        }
    }

    pub fn winning_after(steps: usize) -> Self {
        Self {
            win_after: Some(steps),
            ..Self::new()
        }
    }

    pub fn losing_after(steps: usize) -> Self {
        Self {
            lose_after: Some(steps),
            ..Self::new()
        }
    }

    pub fn at_height(height: f32) -> Self {
        Self {
            base_height: height,
            y: height,
            ..Self::new()
        }
    }
}

impl ForwardModel for ScriptedModel {
    fn advance(&mut self, actions: &ActionVector) {
        self.steps += 1;
        if actions[RIGHT] {
            self.x += 1.0;
        }
        self.y = if actions[JUMP] { self.jump_height } else { self.base_height };

        if self.win_after == Some(self.steps) {
            self.status = GameStatus::Win;
        } else if self.lose_after == Some(self.steps) {
            self.status = GameStatus::Lose;
        }
    }

    fn mario_float_pos(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    fn completion_percentage(&self) -> f64 {
        self.completion_override
            .unwrap_or_else(|| f64::from(self.x / self.level_length))
    }

    fn game_status(&self) -> GameStatus {
        self.status
    }
}

/// Small, seeded configuration that keeps searches fast.
pub fn small_config(planning_horizon: usize, safety_frames: usize, seed: u64) -> AppConfig {
    let mut config = AppConfig::default();
    config.planner.planning_horizon = planning_horizon;
    config.planner.safety_frames = safety_frames;
    config.planner.num_action_sequences = 20;
    config.planner.top_selection_size = 4;
    config.planner.num_generations = 5;
    config.planner.seed = Some(seed);
    config
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-4
}
