pub mod simulation;
pub mod generation;
