//! Generic per-chromosome evaluation.

use super::types::{Evaluation, Fitness, Population};

/// Scores a single genotype.
pub trait FitnessFunction<G> {
    fn score(&self, genotype: &G) -> Fitness;
}

/// Applies a [`FitnessFunction`] to every chromosome in the population.
///
/// Stores each score on the chromosome and returns the wrapping sum of all
/// scores as the aggregate evaluation signal.
#[derive(Debug, Clone)]
pub struct PopulationEvaluation<F> {
    function: F,
}

impl<F> PopulationEvaluation<F> {
    pub fn new(function: F) -> Self {
        Self { function }
    }
}

impl<G, F: FitnessFunction<G>> Evaluation<G> for PopulationEvaluation<F> {
    fn evaluate(&self, population: &mut Population<G>) -> Fitness {
        let mut total: Fitness = 0;
        for chromosome in population.iter_mut() {
            chromosome.fitness = self.function.score(&chromosome.genotype);
            total = total.wrapping_add(chromosome.fitness);
        }
        total
    }
}
