use super::evolution_engine::ProgressCallback;

/// Reports search progress through the `log` facade.
pub struct LogProgressCallback;

impl ProgressCallback for LogProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::trace!("Generation {} starting...", generation + 1);
    }

    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64, elite_count: usize) {
        log::debug!(
            "Generation {} complete. Best fitness: {:.4}, elites kept: {}",
            generation + 1,
            best_fitness,
            elite_count
        );
    }

    fn on_search_complete(&mut self, best_fitness: f64) {
        log::debug!("Search complete. Chosen plan fitness: {:.4}", best_fitness);
    }
}

/// Discards every event.
pub struct SilentProgress;

impl ProgressCallback for SilentProgress {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, _generation: usize, _best_fitness: f64, _elite_count: usize) {}
}
