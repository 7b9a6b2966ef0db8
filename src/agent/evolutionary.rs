use super::{MarioAgent, MarioTimer};
use crate::config::{AgentConfig, AppConfig};
use crate::engines::generation::{LogProgressCallback, PlanSearch};
use crate::engines::simulation::ForwardModel;
use crate::types::{move_right, ActionSequence, ActionVector, GameStatus};

pub const AGENT_NAME: &str = "EvolutionaryMarioAgent";

/// Plays back evolved plans, re-planning every `planning_horizon` ticks.
pub struct EvolutionaryAgent {
    search: PlanSearch,
    agent_config: AgentConfig,
    seed: Option<u64>,
    best_action_sequence: Option<ActionSequence>,
    current_tick_in_plan: usize,
    plans_computed: usize,
}

impl EvolutionaryAgent {
    pub fn new(config: AppConfig) -> Self {
        let seed = config.planner.seed;
        Self {
            search: PlanSearch::new(config.planner, config.fitness),
            agent_config: config.agent,
            seed,
            best_action_sequence: None,
            current_tick_in_plan: 0,
            plans_computed: 0,
        }
    }

    pub fn committed_plan(&self) -> Option<&ActionSequence> {
        self.best_action_sequence.as_ref()
    }

    pub fn current_tick_in_plan(&self) -> usize {
        self.current_tick_in_plan
    }

    pub fn plans_computed(&self) -> usize {
        self.plans_computed
    }

    fn planning_horizon(&self) -> usize {
        self.search.config().planning_horizon
    }

    fn needs_plan(&self) -> bool {
        self.best_action_sequence.is_none() || self.current_tick_in_plan >= self.planning_horizon()
    }

    fn replan<M: ForwardModel>(&mut self, model: &M, timer: &MarioTimer) {
        let outcome = self.search.search(model, &mut LogProgressCallback);

        if outcome.evaluation.trajectory.is_lingering(
            self.agent_config.stuck_frames_threshold,
            self.agent_config.stuck_position_threshold,
        ) {
            log::warn!(
                "Chosen plan barely moves horizontally (fitness {:.2})",
                outcome.fitness
            );
        }
        if timer.is_expired() {
            log::warn!(
                "Planning took {:?}, over the {:?} tick budget",
                timer.elapsed(),
                timer.budget()
            );
        }

        self.plans_computed += 1;
        log::info!(
            "Plan {} committed: fitness {:.2}, simulated status {:?} after {} ticks",
            self.plans_computed,
            outcome.fitness,
            outcome.evaluation.status,
            outcome.evaluation.ticks_simulated
        );

        self.best_action_sequence = Some(outcome.plan);
        self.current_tick_in_plan = 0;
    }
}

impl<M: ForwardModel> MarioAgent<M> for EvolutionaryAgent {
    fn initialize(&mut self, _model: &M, _timer: &MarioTimer) {
        self.search.reseed(self.seed);
        self.best_action_sequence = None;
        self.current_tick_in_plan = 0;
    }

    fn get_actions(&mut self, model: &M, timer: &MarioTimer) -> ActionVector {
        if model.completion_percentage() >= self.agent_config.completion_threshold
            || model.game_status() == GameStatus::Win
        {
            return move_right();
        }

        if self.needs_plan() {
            self.replan(model, timer);
        }

        let action = self
            .best_action_sequence
            .as_ref()
            .and_then(|plan| plan.get(self.current_tick_in_plan))
            .copied()
            .unwrap_or_default();
        self.current_tick_in_plan += 1;

        action
    }

    fn agent_name(&self) -> &str {
        AGENT_NAME
    }
}
