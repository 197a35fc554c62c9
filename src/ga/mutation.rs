//! Per-chromosome mutation.

use super::types::{Chromosome, Mutation, Population};
use rand::Rng;

/// Perturbs a single chromosome in place.
pub trait MutationOperator<G> {
    fn apply<R: Rng>(&self, chromosome: &mut Chromosome<G>, rng: &mut R);
}

/// Runs one independent Bernoulli trial per chromosome and applies the
/// operator on success.
#[derive(Debug, Clone)]
pub struct IndependentMutation<M> {
    probability: f64,
    operator: M,
}

impl<M> IndependentMutation<M> {
    /// Creates the wrapper; `probability` is clamped to `[0, 1]`.
    pub fn new(probability: f64, operator: M) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
            operator,
        }
    }
}

impl<G, M: MutationOperator<G>> Mutation<G> for IndependentMutation<M> {
    fn mutate<R: Rng>(&self, population: &mut Population<G>, rng: &mut R) {
        for chromosome in population.iter_mut() {
            if rng.random_bool(self.probability) {
                self.operator.apply(chromosome, rng);
            }
        }
    }
}
