//! Core model and strategy contracts for the GA engine.

use rand::Rng;

/// Fitness domain: a non-negative maximization score.
///
/// Higher is better. Arithmetic on fitness values wraps on
/// underflow/overflow rather than signaling an error; evaluation formulas
/// that leave the representable range produce wrapped values as defined
/// behavior.
pub type Fitness = u32;

/// A candidate solution: an ordered genotype plus its cached fitness.
///
/// Chromosomes are ordered solely by `fitness`; two chromosomes with equal
/// fitness compare equal even when their genotypes differ. A fitness of 0
/// means "not yet evaluated".
#[derive(Debug, Clone)]
pub struct Chromosome<G> {
    /// The genotype — for permutation problems, position `i` holds the
    /// value assigned to slot `i`.
    pub genotype: G,
    /// Score from the most recent evaluation.
    pub fitness: Fitness,
}

impl<G> Chromosome<G> {
    /// Creates a chromosome from a genotype and an initial fitness.
    pub fn new(genotype: G, fitness: Fitness) -> Self {
        Self { genotype, fitness }
    }
}

impl<G> PartialEq for Chromosome<G> {
    fn eq(&self, other: &Self) -> bool {
        self.fitness == other.fitness
    }
}

impl<G> Eq for Chromosome<G> {}

impl<G> PartialOrd for Chromosome<G> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<G> Ord for Chromosome<G> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.fitness.cmp(&other.fitness)
    }
}

/// A fixed-size collection of chromosomes.
///
/// Size stays constant across generations: selection emits exactly as many
/// chromosomes as it consumed. Element order carries no identity; crossover
/// reshuffles it every generation.
pub type Population<G> = Vec<Chromosome<G>>;

/// Returns the chromosome with the greatest fitness.
///
/// Ties break toward the first maximal element encountered.
///
/// # Panics
/// Panics if `population` is empty.
pub fn best_of<G>(population: &[Chromosome<G>]) -> &Chromosome<G> {
    let (first, rest) = population
        .split_first()
        .expect("population must not be empty");
    let mut best = first;
    for candidate in rest {
        if candidate.fitness > best.fitness {
            best = candidate;
        }
    }
    best
}

/// Produces a fresh population.
///
/// Must be re-invocable with fresh randomness each call.
pub trait Initialization<G> {
    fn initialize<R: Rng>(&self, rng: &mut R) -> Population<G>;
}

/// Computes and stores each chromosome's fitness.
///
/// Returns the wrapping sum of all fitness values as an aggregate signal
/// for the stop condition. Stop conditions are free to ignore it.
pub trait Evaluation<G> {
    fn evaluate(&self, population: &mut Population<G>) -> Fitness;
}

/// Replaces the population wholesale with survivors.
///
/// The output must have the same size as the input.
pub trait Selection<G> {
    fn select<R: Rng>(&self, population: &Population<G>, rng: &mut R) -> Population<G>;
}

/// Recombines chromosomes in place.
pub trait Crossover<G> {
    fn crossover<R: Rng>(&self, population: &mut Population<G>, rng: &mut R);
}

/// Perturbs chromosomes in place.
pub trait Mutation<G> {
    fn mutate<R: Rng>(&self, population: &mut Population<G>, rng: &mut R);
}

/// Stateful termination predicate.
///
/// Called once after the initial evaluation (generation zero) and once per
/// generation with the population and the aggregate evaluation sum.
pub trait StopCondition<G> {
    fn should_stop(&mut self, population: &Population<G>, total: Fitness) -> bool;
}

/// Observes the population after every evaluation.
pub trait Logging<G> {
    fn log(&mut self, population: &Population<G>);
}
