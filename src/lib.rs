//! Real-time action-sequence planner: a genetic search over short button sequences,
//! scored by rolling each candidate through a cloned forward model.

pub mod agent;
pub mod config;
pub mod engines;
pub mod error;
pub mod types;

pub use agent::{EvolutionaryAgent, MarioAgent, MarioTimer};
pub use error::{PlannerError, Result};
