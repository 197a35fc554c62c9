//! The generational loop.

use super::types::{
    best_of, Chromosome, Crossover, Evaluation, Initialization, Logging, Mutation, Selection,
    StopCondition,
};
use rand::Rng;

/// Drives the generational loop over one instance of each strategy.
///
/// Control flow: initialize → evaluate → log → while the stop condition
/// holds off { select → cross → mutate → evaluate → log } → return the
/// chromosome with maximum fitness (first maximal element on ties).
///
/// The engine owns the population buffer for the duration of a run and
/// hands exclusive mutable access to exactly one strategy at a time:
/// crossover, mutation, and evaluation mutate in place, selection replaces
/// the buffer wholesale. Beyond that buffer the engine holds no state; the
/// loop counter lives in the stop condition.
pub struct GeneticAlgorithm;

impl GeneticAlgorithm {
    /// Runs the search and returns the best chromosome of the final
    /// generation.
    #[allow(clippy::too_many_arguments)]
    pub fn optimize<G, R, I, E, T, L, S, X, M>(
        initialization: &I,
        evaluation: &E,
        stop_condition: &mut T,
        logging: &mut L,
        selection: &S,
        crossover: &X,
        mutation: &M,
        rng: &mut R,
    ) -> Chromosome<G>
    where
        G: Clone,
        R: Rng,
        I: Initialization<G>,
        E: Evaluation<G>,
        T: StopCondition<G>,
        L: Logging<G>,
        S: Selection<G>,
        X: Crossover<G>,
        M: Mutation<G>,
    {
        let mut population = initialization.initialize(rng);
        let mut total = evaluation.evaluate(&mut population);
        logging.log(&population);

        while !stop_condition.should_stop(&population, total) {
            population = selection.select(&population, rng);
            crossover.crossover(&mut population, rng);
            mutation.mutate(&mut population, rng);
            total = evaluation.evaluate(&mut population);
            logging.log(&population);
        }

        best_of(&population).clone()
    }
}
