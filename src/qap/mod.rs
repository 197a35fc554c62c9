//! QAP problem encoding: matrices, fitness, and permutation operators.
//!
//! A candidate solution is a permutation of `0..n`: position `i` holds the
//! location assigned to facility `i`. The cost of an assignment is the sum
//! of `flow × distance` over all facility pairs; the engine maximizes a
//! baseline-subtraction score instead (see [`evaluation`]'s module docs for
//! the wrapping-arithmetic contract).
//!
//! [`solve`] wires the QAP strategies into the generic engine from a single
//! [`QapConfig`].

mod config;
pub mod evaluation;
mod matrix;
mod operators;
mod solver;

pub use config::QapConfig;
pub use evaluation::{fitness_to_result, QapEvaluation, BASELINE};
pub use matrix::{CostMatrices, Matrix};
pub use operators::{OrderCrossing, RandomAssignment, SwapMutation, SymmetricOrderCrossing};
pub use solver::{solve, QapSolution};
