mod common;

use common::{small_config, ScriptedModel};
use evoplanner::agent::evolutionary::AGENT_NAME;
use evoplanner::agent::{EvolutionaryAgent, MarioAgent, MarioTimer};
use evoplanner::engines::simulation::{CorridorLevel, CorridorModel, ForwardModel};
use evoplanner::types::{move_right, GameStatus};

#[test]
fn test_near_completion_runs_right_without_planning() {
    let mut agent = EvolutionaryAgent::new(small_config(3, 2, 1));
    let mut model = ScriptedModel::new();
    model.completion_override = Some(0.995);
    let timer = MarioTimer::unbounded();

    agent.initialize(&model, &timer);
    for _ in 0..5 {
        assert_eq!(agent.get_actions(&model, &timer), [false, true, false, false, false]);
    }
    assert_eq!(agent.plans_computed(), 0);
    assert!(agent.committed_plan().is_none());
}

#[test]
fn test_completion_threshold_is_inclusive() {
    let mut agent = EvolutionaryAgent::new(small_config(3, 2, 1));
    let mut model = ScriptedModel::new();
    model.completion_override = Some(0.99);
    let timer = MarioTimer::unbounded();

    agent.initialize(&model, &timer);
    assert_eq!(agent.get_actions(&model, &timer), move_right());
    assert_eq!(agent.plans_computed(), 0);
}

#[test]
fn test_won_game_overrides_committed_plan() {
    let mut agent = EvolutionaryAgent::new(small_config(3, 2, 2));
    let mut model = ScriptedModel::new();
    let timer = MarioTimer::unbounded();

    agent.initialize(&model, &timer);
    agent.get_actions(&model, &timer);
    assert!(agent.committed_plan().is_some());

    model.status = GameStatus::Win;
    assert_eq!(agent.get_actions(&model, &timer), move_right());
    assert_eq!(agent.current_tick_in_plan(), 1);
}

#[test]
fn test_plays_back_horizon_then_replans() {
    let mut agent = EvolutionaryAgent::new(small_config(3, 2, 3));
    let model = ScriptedModel::new();
    let timer = MarioTimer::unbounded();
    agent.initialize(&model, &timer);

    let first = agent.get_actions(&model, &timer);
    assert_eq!(agent.plans_computed(), 1);
    let plan = agent.committed_plan().cloned().unwrap();
    assert_eq!(plan.len(), 5);
    assert_eq!(first, plan[0]);

    assert_eq!(agent.get_actions(&model, &timer), plan[1]);
    assert_eq!(agent.get_actions(&model, &timer), plan[2]);
    assert_eq!(agent.plans_computed(), 1);
    assert_eq!(agent.current_tick_in_plan(), 3);

    let fourth = agent.get_actions(&model, &timer);
    assert_eq!(agent.plans_computed(), 2);
    assert_eq!(agent.current_tick_in_plan(), 1);
    assert_eq!(fourth, agent.committed_plan().unwrap()[0]);
}

#[test]
fn test_initialize_drops_committed_plan() {
    let mut agent = EvolutionaryAgent::new(small_config(3, 2, 4));
    let model = ScriptedModel::new();
    let timer = MarioTimer::unbounded();

    agent.initialize(&model, &timer);
    agent.get_actions(&model, &timer);
    agent.get_actions(&model, &timer);

    agent.initialize(&model, &timer);
    assert!(agent.committed_plan().is_none());
    assert_eq!(agent.current_tick_in_plan(), 0);
}

#[test]
fn test_same_seed_replays_same_episode() {
    let model = ScriptedModel::new();
    let timer = MarioTimer::unbounded();

    let run = || {
        let mut agent = EvolutionaryAgent::new(small_config(3, 2, 5));
        agent.initialize(&model, &timer);
        (0..9).map(|_| agent.get_actions(&model, &timer)).collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_agent_name() {
    let agent = EvolutionaryAgent::new(small_config(3, 2, 6));
    assert_eq!(MarioAgent::<ScriptedModel>::agent_name(&agent), AGENT_NAME);
    assert_eq!(AGENT_NAME, "EvolutionaryMarioAgent");
}

#[test]
fn test_exhausted_budget_still_returns_action() {
    let mut agent = EvolutionaryAgent::new(small_config(3, 2, 7));
    let model = ScriptedModel::new();
    let timer = MarioTimer::from_millis(0);

    agent.initialize(&model, &timer);
    agent.get_actions(&model, &timer);
    assert_eq!(agent.plans_computed(), 1);
}

#[test]
fn test_corridor_episode_makes_progress() {
    let mut config = small_config(10, 10, 8);
    config.planner.num_action_sequences = 30;
    config.planner.top_selection_size = 6;
    config.planner.num_generations = 8;

    let mut model = CorridorModel::new(CorridorLevel::new(200.0, vec![(60.0, 70.0)], 150));
    let mut agent = EvolutionaryAgent::new(config);
    let timer = MarioTimer::unbounded();

    agent.initialize(&model, &timer);
    while model.game_status() == GameStatus::Running {
        let actions = agent.get_actions(&model, &timer);
        model.advance(&actions);
    }

    assert!(model.ticks() <= 150);
    assert!(model.mario_float_pos().0 > 0.0);
    assert!(agent.plans_computed() >= 1);
}
