//! Genetic-algorithm engine for the Quadratic Assignment Problem (QAP).
//!
//! The QAP asks for an assignment of facilities to locations that minimizes
//! total flow-weighted distance — e.g. placing machines in a factory so
//! material movement is cheapest. This crate provides:
//!
//! - **Generic GA engine** ([`ga`]): an orchestrator composed from seven
//!   pluggable strategy capabilities — initialization, evaluation,
//!   selection, crossover, mutation, stop condition, logging. Strategies
//!   are traits resolved by static dispatch; the engine never inspects
//!   chromosome internals.
//! - **QAP encoding and operators** ([`qap`]): permutation chromosomes,
//!   baseline-subtraction fitness, order-crossover variants (OX and
//!   symmetric OX), swap mutation, cost-matrix loading, and a convenience
//!   solver wiring it all together.
//! - **Baseline comparators** ([`search`]): exhaustive permutation search
//!   and random-restart search sharing the evaluation-function signature.
//!
//! The engine is single-threaded and synchronous. Randomness flows through
//! an explicit [`rand::Rng`] handle threaded into every strategy call;
//! [`random::create_rng`] builds a seeded generator for reproducible runs.
//!
//! # Example
//!
//! ```
//! use qap_engine::qap::{self, CostMatrices, QapConfig};
//!
//! let input = "3\n\n0 1 2\n1 0 1\n2 1 0\n\n0 2 1\n2 0 2\n1 2 0\n";
//! let matrices = CostMatrices::parse(input).unwrap();
//! let config = QapConfig::default()
//!     .with_population_size(20)
//!     .with_max_iterations(10)
//!     .with_seed(42);
//! let solution = qap::solve(&matrices, &config).unwrap();
//! assert_eq!(solution.assignment.len(), 3);
//! ```

pub mod ga;
pub mod qap;
pub mod random;
pub mod search;
