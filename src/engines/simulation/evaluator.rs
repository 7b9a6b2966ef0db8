use super::model::ForwardModel;
use crate::config::FitnessConfig;
use crate::types::{ActionVector, GameStatus, Horizon};

/// Horizontal path and average height of one simulated rollout
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    pub x_positions: Vec<f32>,
    pub mean_y: f64,
}

impl Trajectory {
    /// True when at least `frames_threshold` ticks were simulated and the horizontal spread
    /// stayed below `position_threshold`.
    pub fn is_lingering(&self, frames_threshold: usize, position_threshold: f32) -> bool {
        if self.x_positions.len() < frames_threshold || self.x_positions.is_empty() {
            return false;
        }

        let (min_x, max_x) = self
            .x_positions
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), &x| (lo.min(x), hi.max(x)));

        (max_x - min_x) < position_threshold
    }
}

/// Outcome of rolling one action sequence through a model clone
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub fitness: f64,
    pub status: GameStatus,
    pub ticks_simulated: usize,
    /// The rollout had already lost when it reached the end of the played-back prefix.
    pub lost_within_horizon: bool,
    pub trajectory: Trajectory,
}

pub struct FitnessEvaluator {
    horizon: Horizon,
    weights: FitnessConfig,
}

impl FitnessEvaluator {
    pub fn new(horizon: Horizon, weights: FitnessConfig) -> Self {
        Self { horizon, weights }
    }

    pub fn horizon(&self) -> Horizon {
        self.horizon
    }

    /// Score `sequence` by playing it on `model`, which the caller must hand over as a clone.
    pub fn fitness<M: ForwardModel>(&self, sequence: &[ActionVector], model: M) -> f64 {
        self.evaluate(sequence, model).fitness
    }

    pub fn evaluate<M: ForwardModel>(&self, sequence: &[ActionVector], mut model: M) -> Evaluation {
        let mut score = 0.0;
        let mut x_positions = Vec::with_capacity(self.horizon.total());
        let mut total_y = 0.0;
        let mut lost_within_horizon = false;

        for (tick, actions) in sequence.iter().take(self.horizon.total()).enumerate() {
            model.advance(actions);

            let (x, y) = model.mario_float_pos();
            x_positions.push(x);
            total_y += f64::from(y);

            let status = model.game_status();

            // Dying inside the played-back prefix is charged on top of the generic loss below.
            if tick == self.horizon.planning && status == GameStatus::Lose {
                score -= self.weights.loss_penalty;
                lost_within_horizon = true;
            }

            match status {
                GameStatus::Win => {
                    score += self.weights.win_bonus;
                    break;
                }
                GameStatus::Lose => {
                    score -= self.weights.loss_penalty;
                    break;
                }
                GameStatus::Running => {}
            }
        }

        score += model.completion_percentage() * self.weights.completion_weight;

        let ticks_simulated = x_positions.len();
        let mean_y = if ticks_simulated > 0 {
            total_y / ticks_simulated as f64
        } else {
            0.0
        };

        let max_reward = score * self.weights.shaping_ratio;
        let height_factor = (mean_y - self.weights.vertical_floor) / self.weights.vertical_scale;
        score += height_factor * max_reward;

        Evaluation {
            fitness: score,
            status: model.game_status(),
            ticks_simulated,
            lost_within_horizon,
            trajectory: Trajectory { x_positions, mean_y },
        }
    }
}
