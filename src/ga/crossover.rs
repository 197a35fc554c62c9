//! Pairwise crossover over a shuffled population.

use super::types::{Chromosome, Crossover, Population};
use rand::seq::SliceRandom;
use rand::Rng;

/// Produces two offspring from two parents.
///
/// Implementations must yield genotypes that satisfy the same invariants as
/// their parents (for permutation encodings: a valid permutation).
pub trait CrossingFunction<G> {
    fn cross<R: Rng>(
        &self,
        parent1: &Chromosome<G>,
        parent2: &Chromosome<G>,
        rng: &mut R,
    ) -> (Chromosome<G>, Chromosome<G>);
}

/// Applies a [`CrossingFunction`] to randomly formed pairs.
///
/// The population is shuffled first so pairing is randomized across
/// generations, then candidate pairs `(i, i + 1)` for `i in 0..len / 2` each
/// get one Bernoulli trial at the configured probability; on success both
/// slots are replaced by the offspring.
///
/// The pairing stride is one, so slot `i + 1` also participates in the next
/// pair: pairings overlap rather than partitioning the population. This
/// keeps the trial count at `len / 2` per generation.
#[derive(Debug, Clone)]
pub struct PairedCrossover<X> {
    probability: f64,
    crossing: X,
}

impl<X> PairedCrossover<X> {
    /// Creates the wrapper; `probability` is clamped to `[0, 1]`.
    pub fn new(probability: f64, crossing: X) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
            crossing,
        }
    }
}

impl<G, X: CrossingFunction<G>> Crossover<G> for PairedCrossover<X> {
    fn crossover<R: Rng>(&self, population: &mut Population<G>, rng: &mut R) {
        population.shuffle(rng);

        for i in 0..population.len() / 2 {
            if rng.random_bool(self.probability) {
                let (first, second) =
                    self.crossing
                        .cross(&population[i], &population[i + 1], rng);
                population[i] = first;
                population[i + 1] = second;
            }
        }
    }
}
