use anyhow::Context;
use evoplanner::agent::{EvolutionaryAgent, MarioAgent, MarioTimer};
use evoplanner::config::manager::ENV_PREFIX;
use evoplanner::config::ConfigManager;
use evoplanner::engines::simulation::{CorridorLevel, CorridorModel, ForwardModel};
use evoplanner::types::GameStatus;

/// Host tick budget, matching a 24 fps game loop.
const TICK_BUDGET_MS: u64 = 40;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let manager = ConfigManager::new();

    let config_path = args.iter().find(|a| !a.starts_with("--"));
    manager
        .load_layered(config_path, ENV_PREFIX)
        .context("failed to load planner configuration")?;
    let config = manager.get();

    if args.iter().any(|a| a == "--manifest") {
        println!("{}", serde_json::to_string_pretty(&config.manifests())?);
        return Ok(());
    }

    let mut model = CorridorModel::new(CorridorLevel::default());
    let mut agent = EvolutionaryAgent::new(config);

    agent.initialize(&model, &MarioTimer::from_millis(TICK_BUDGET_MS));
    log::info!("Running {}", MarioAgent::<CorridorModel>::agent_name(&agent));

    while model.game_status() == GameStatus::Running {
        let timer = MarioTimer::from_millis(TICK_BUDGET_MS);
        let actions = agent.get_actions(&model, &timer);
        model.advance(&actions);
    }

    let (x, _) = model.mario_float_pos();
    println!(
        "{:?} after {} ticks: x = {:.1}, completion = {:.1}%, plans computed = {}",
        model.game_status(),
        model.ticks(),
        x,
        model.completion_percentage() * 100.0,
        agent.plans_computed()
    );

    Ok(())
}
