//! Generic genetic-algorithm engine.
//!
//! The engine is assembled from seven strategy capabilities, each a trait
//! with a single obligation:
//!
//! - [`Initialization`]: produce a fresh population
//! - [`Evaluation`]: score every chromosome, return the population sum
//! - [`Selection`]: emit a same-sized population of survivors
//! - [`Crossover`]: recombine paired chromosomes in place
//! - [`Mutation`]: perturb chromosomes in place
//! - [`StopCondition`]: decide when to terminate
//! - [`Logging`]: observe the population after each evaluation
//!
//! [`GeneticAlgorithm::optimize`] drives the generational loop; it holds no
//! optimization state of its own and only compares fitness values. Generic
//! wrappers ([`RandomInitialization`], [`PopulationEvaluation`],
//! [`PairedCrossover`], [`IndependentMutation`]) lift per-chromosome
//! building blocks to whole-population strategies, so a problem definition
//! only supplies the domain-specific pieces.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod crossover;
mod engine;
mod evaluation;
mod init;
mod logging;
mod mutation;
mod selection;
mod stop;
mod types;

pub use crossover::{CrossingFunction, PairedCrossover};
pub use engine::GeneticAlgorithm;
pub use evaluation::{FitnessFunction, PopulationEvaluation};
pub use init::{ChromosomeFactory, RandomInitialization};
pub use logging::{ConsoleLogging, GenerationStats, HistoryLogging};
pub use mutation::{IndependentMutation, MutationOperator};
pub use selection::TournamentSelection;
pub use stop::IterationLimit;
pub use types::{
    best_of, Chromosome, Crossover, Evaluation, Fitness, Initialization, Logging, Mutation,
    Population, Selection, StopCondition,
};
