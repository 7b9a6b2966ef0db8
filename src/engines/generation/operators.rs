use crate::engines::generation::sequence::random_sequence;
use crate::types::{ActionSequence, ActionVector, ACTION_COUNT};
use rand::Rng;

/// `size` independent random sequences of `length` ticks.
pub fn random_population<R: Rng>(size: usize, length: usize, rng: &mut R) -> Vec<ActionSequence> {
    (0..size).map(|_| random_sequence(length, rng)).collect()
}

/// Indices of the `k` fittest slots, best first.
///
/// Each round scans in index order and keeps the first strict maximum among slots not yet
/// taken, so ties go to the lower index. NaN ranks as negative infinity. `k` is clamped to the
/// number of scores.
pub fn select_top(scores: &[f64], k: usize) -> Vec<usize> {
    let k = k.min(scores.len());
    let mut taken = vec![false; scores.len()];
    let mut selected = Vec::with_capacity(k);

    for _ in 0..k {
        let mut best: Option<(usize, f64)> = None;
        for (i, &score) in scores.iter().enumerate() {
            if taken[i] {
                continue;
            }
            let score = if score.is_nan() { f64::NEG_INFINITY } else { score };
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((i, score)),
            }
        }

        if let Some((index, _)) = best {
            taken[index] = true;
            selected.push(index);
        }
    }

    selected
}

/// Uniform crossover: every button of every tick comes from either parent with equal odds.
pub fn breed<R: Rng>(
    parent1: &[ActionVector],
    parent2: &[ActionVector],
    rng: &mut R,
) -> ActionSequence {
    parent1
        .iter()
        .zip(parent2)
        .map(|(a, b)| {
            let mut action = [false; ACTION_COUNT];
            for (j, button) in action.iter_mut().enumerate() {
                *button = if rng.gen_bool(0.5) { a[j] } else { b[j] };
            }
            action
        })
        .collect()
}

/// For each tick, with probability `mutation_rate`, flip one uniformly chosen button.
pub fn mutate<R: Rng>(sequence: &mut ActionSequence, mutation_rate: f64, rng: &mut R) {
    for action in sequence.iter_mut() {
        if rng.gen::<f64>() < mutation_rate {
            let button = rng.gen_range(0..ACTION_COUNT);
            action[button] = !action[button];
        }
    }
}

/// Elites first, verbatim, then mutated children of elite pairs drawn with replacement.
pub fn breed_next_generation<R: Rng>(
    elites: &[ActionSequence],
    population_size: usize,
    mutation_rate: f64,
    rng: &mut R,
) -> Vec<ActionSequence> {
    let mut next_generation: Vec<ActionSequence> = elites.to_vec();
    if elites.is_empty() {
        return next_generation;
    }

    while next_generation.len() < population_size {
        let parent1 = &elites[rng.gen_range(0..elites.len())];
        let parent2 = &elites[rng.gen_range(0..elites.len())];

        let mut child = breed(parent1, parent2, rng);
        mutate(&mut child, mutation_rate, rng);
        next_generation.push(child);
    }

    next_generation
}
