//! Generic random initialization.

use super::types::{Chromosome, Initialization, Population};
use rand::Rng;

/// Creates one chromosome with fresh randomness.
///
/// The problem-specific generator behind [`RandomInitialization`]: it must
/// produce a valid (but not necessarily good) solution on every call.
pub trait ChromosomeFactory<G> {
    fn create<R: Rng>(&self, rng: &mut R) -> Chromosome<G>;
}

/// Builds a population of a configured size by invoking a
/// [`ChromosomeFactory`] repeatedly.
#[derive(Debug, Clone)]
pub struct RandomInitialization<F> {
    population_size: usize,
    factory: F,
}

impl<F> RandomInitialization<F> {
    pub fn new(population_size: usize, factory: F) -> Self {
        Self {
            population_size,
            factory,
        }
    }
}

impl<G, F: ChromosomeFactory<G>> Initialization<G> for RandomInitialization<F> {
    fn initialize<R: Rng>(&self, rng: &mut R) -> Population<G> {
        (0..self.population_size)
            .map(|_| self.factory.create(rng))
            .collect()
    }
}
