//! Iteration-count stop condition.

use super::types::{Fitness, Population, StopCondition};

/// Stops the search after a configured number of generations.
///
/// The very first (pre-loop) evaluation counts as generation zero, so
/// `max_iterations = 0` terminates immediately after the initial
/// evaluation and the engine returns the best of the unevolved population.
#[derive(Debug, Clone)]
pub struct IterationLimit {
    max_iterations: usize,
    current: usize,
}

impl IterationLimit {
    pub fn new(max_iterations: usize) -> Self {
        Self {
            max_iterations,
            current: 0,
        }
    }
}

impl<G> StopCondition<G> for IterationLimit {
    fn should_stop(&mut self, _population: &Population<G>, _total: Fitness) -> bool {
        let reached = self.current >= self.max_iterations;
        self.current += 1;
        reached
    }
}
