//! Action-sequence representation for the planner's genetic search.
//!
//! A plan is a flat `Vec` of per-tick button vectors, which keeps the genetic operators
//! trivial:
//! - **Crossover** picks each button of each tick from one parent or the other
//! - **Mutation** flips single buttons
//! - **No invalid states**: every combination of buttons is a legal input
//!
//! Only the first `planning_horizon` ticks are ever played back. The remaining
//! `safety_frames` exist so the evaluator can see what happens just after the plan ends.

use crate::types::{ActionSequence, ActionVector, ACTION_COUNT};
use rand::Rng;

/// Sequence of `length` ticks with no buttons pressed.
pub fn idle_sequence(length: usize) -> ActionSequence {
    vec![[false; ACTION_COUNT]; length]
}

/// One vector with every button an independent fair coin.
pub fn random_action<R: Rng>(rng: &mut R) -> ActionVector {
    let mut action = [false; ACTION_COUNT];
    for button in action.iter_mut() {
        *button = rng.gen_bool(0.5);
    }
    action
}

pub fn random_sequence<R: Rng>(length: usize, rng: &mut R) -> ActionSequence {
    (0..length).map(|_| random_action(rng)).collect()
}
