use crate::config::{FitnessConfig, PlannerConfig};
use crate::engines::generation::{
    operators::{breed_next_generation, random_population, select_top},
    sequence::idle_sequence,
};
use crate::engines::simulation::{Evaluation, FitnessEvaluator, ForwardModel};
use crate::types::ActionSequence;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64, elite_count: usize);
    fn on_search_complete(&mut self, _best_fitness: f64) {}
}

/// Best plan found by one search call, with its final evaluation
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub plan: ActionSequence,
    pub fitness: f64,
    pub evaluation: Evaluation,
}

/// Fixed-effort genetic search over action sequences.
///
/// Every call does `num_generations + 1` scoring passes of `num_action_sequences` rollouts of
/// `planning_horizon + safety_frames` ticks. It never polls a clock.
pub struct PlanSearch {
    config: PlannerConfig,
    evaluator: FitnessEvaluator,
    rng: StdRng,
}

impl PlanSearch {
    pub fn new(config: PlannerConfig, fitness: FitnessConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let evaluator = FitnessEvaluator::new(config.horizon(), fitness);

        Self {
            config,
            evaluator,
            rng,
        }
    }

    /// Restart the random stream; `None` draws fresh entropy.
    pub fn reseed(&mut self, seed: Option<u64>) {
        self.rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &FitnessEvaluator {
        &self.evaluator
    }

    /// Evolve a plan for the state `model` is in right now.
    ///
    /// Every rollout starts from its own clone of `model`; `model` itself is never advanced.
    pub fn search<M: ForwardModel, C: ProgressCallback>(
        &mut self,
        model: &M,
        callback: &mut C,
    ) -> SearchOutcome {
        let population_size = self.config.num_action_sequences;
        let mut population =
            random_population(population_size, self.config.total_horizon(), &mut self.rng);

        for generation in 0..self.config.num_generations {
            callback.on_generation_start(generation);

            let scores: Vec<f64> = self
                .evaluate_population(&population, model)
                .iter()
                .map(|e| e.fitness)
                .collect();

            let elite_indices = select_top(&scores, self.config.top_selection_size);
            let best_fitness = elite_indices
                .first()
                .map(|&i| scores[i])
                .unwrap_or(f64::NEG_INFINITY);

            // Indices are distinct, so each slot is taken at most once.
            let elites: Vec<ActionSequence> = elite_indices
                .iter()
                .map(|&i| std::mem::take(&mut population[i]))
                .collect();

            callback.on_generation_complete(generation, best_fitness, elites.len());

            population = breed_next_generation(
                &elites,
                population_size,
                self.config.mutation_rate,
                &mut self.rng,
            );
        }

        let mut evaluations = self.evaluate_population(&population, model);
        let scores: Vec<f64> = evaluations.iter().map(|e| e.fitness).collect();

        let outcome = match select_top(&scores, 1).first() {
            Some(&best) => SearchOutcome {
                plan: std::mem::take(&mut population[best]),
                fitness: scores[best],
                evaluation: evaluations.swap_remove(best),
            },
            None => {
                let plan = idle_sequence(self.config.total_horizon());
                let evaluation = self.evaluator.evaluate(&plan, model.clone());
                SearchOutcome {
                    fitness: evaluation.fitness,
                    plan,
                    evaluation,
                }
            }
        };

        callback.on_search_complete(outcome.fitness);
        outcome
    }

    /// One rollout per member, each on a fresh clone; results stay in population order.
    pub fn evaluate_population<M: ForwardModel>(
        &self,
        population: &[ActionSequence],
        model: &M,
    ) -> Vec<Evaluation> {
        let evaluator = &self.evaluator;
        if self.config.parallel_evaluation {
            population
                .par_iter()
                .map(|sequence| evaluator.evaluate(sequence, model.clone()))
                .collect()
        } else {
            population
                .iter()
                .map(|sequence| evaluator.evaluate(sequence, model.clone()))
                .collect()
        }
    }
}
