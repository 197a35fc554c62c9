//! QAP fitness: baseline subtraction over flow-weighted distances.
//!
//! The engine maximizes, so the real assignment cost is folded into a
//! maximization score: start from [`BASELINE`] and subtract
//! `2 · flow[perm[i]][perm[j]] · distance[i][j]` for every facility pair
//! `i < j` (the factor 2 stands in for the symmetric `(j, i)` term).
//! Lower real cost means higher score; [`fitness_to_result`] converts back
//! for human-facing output.
//!
//! All arithmetic wraps. An instance whose doubled cost exceeds the
//! baseline wraps the score around to a very large value instead of going
//! negative — defined behavior of this encoding, not a fault.

use super::matrix::CostMatrices;
use crate::ga::{Fitness, FitnessFunction};

/// Starting score every assignment's cost is subtracted from.
pub const BASELINE: Fitness = 10_000;

/// Converts a maximization score back to the real-world assignment cost.
///
/// Exact (no rounding) for all scores, wrapped ones included. Apply this
/// wherever a human-facing cost is reported.
pub fn fitness_to_result(fitness: Fitness) -> Fitness {
    BASELINE.wrapping_sub(fitness)
}

/// Scores permutations against a borrowed pair of cost matrices.
#[derive(Debug, Clone)]
pub struct QapEvaluation<'a> {
    matrices: &'a CostMatrices,
}

impl<'a> QapEvaluation<'a> {
    pub fn new(matrices: &'a CostMatrices) -> Self {
        Self { matrices }
    }
}

impl FitnessFunction<Vec<usize>> for QapEvaluation<'_> {
    fn score(&self, assignment: &Vec<usize>) -> Fitness {
        let mut fitness = BASELINE;
        for i in 0..assignment.len() {
            let flow_row = &self.matrices.flow[assignment[i]];
            let distance_row = &self.matrices.distance[i];
            for j in (i + 1)..assignment.len() {
                let pair_cost = flow_row[assignment[j]].wrapping_mul(distance_row[j]);
                fitness = fitness.wrapping_sub(pair_cost.wrapping_mul(2));
            }
        }
        fitness
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qap::Matrix;

    /// All off-diagonal entries = `value`, diagonal = 0.
    fn uniform_matrix(size: usize, value: u32) -> Matrix {
        let values = (0..size * size)
            .map(|k| if k / size == k % size { 0 } else { value })
            .collect();
        Matrix::from_values(size, values).unwrap()
    }

    fn uniform_instance(size: usize, value: u32) -> CostMatrices {
        CostMatrices {
            distance: uniform_matrix(size, value),
            flow: uniform_matrix(size, value),
        }
    }

    #[test]
    fn test_uniform_instance_is_order_insensitive() {
        // N=4, all off-diagonal flow = distance = 1: every pair contributes
        // 2, C(4,2) = 6 pairs, score = 10000 - 12 = 9988 for every
        // permutation.
        let matrices = uniform_instance(4, 1);
        let evaluation = QapEvaluation::new(&matrices);

        for assignment in [
            vec![0, 1, 2, 3],
            vec![3, 2, 1, 0],
            vec![2, 0, 3, 1],
            vec![1, 3, 0, 2],
        ] {
            assert_eq!(evaluation.score(&assignment), 9_988);
        }
    }

    #[test]
    fn test_score_uses_flow_of_assigned_locations() {
        // distance[0][1] = 3; flow between facilities 1 and 0 (the values
        // at positions 0 and 1) = 5. Score = 10000 - 2*5*3.
        let distance = Matrix::from_values(2, vec![0, 3, 3, 0]).unwrap();
        let flow = Matrix::from_values(2, vec![0, 5, 5, 0]).unwrap();
        let matrices = CostMatrices { distance, flow };

        let evaluation = QapEvaluation::new(&matrices);
        assert_eq!(evaluation.score(&vec![1, 0]), 10_000 - 30);
        assert_eq!(evaluation.score(&vec![0, 1]), 10_000 - 30);
    }

    #[test]
    fn test_cost_above_baseline_wraps() {
        // One pair costing 2 * 60 * 100 = 12000 > 10000: the unsigned
        // subtraction wraps to a huge score instead of going negative.
        let distance = Matrix::from_values(2, vec![0, 100, 100, 0]).unwrap();
        let flow = Matrix::from_values(2, vec![0, 60, 60, 0]).unwrap();
        let matrices = CostMatrices { distance, flow };

        let score = QapEvaluation::new(&matrices).score(&vec![0, 1]);
        assert_eq!(score, BASELINE.wrapping_sub(12_000));
        assert!(score > BASELINE);

        // The conversion stays exact through the wrap.
        assert_eq!(fitness_to_result(score), 12_000);
    }

    #[test]
    fn test_fitness_to_result_is_exact() {
        assert_eq!(fitness_to_result(BASELINE), 0);
        assert_eq!(fitness_to_result(9_988), 12);
        assert_eq!(fitness_to_result(0), BASELINE);
    }

    #[test]
    fn test_single_facility_scores_baseline() {
        // No pairs to subtract.
        let matrices = uniform_instance(1, 1);
        let evaluation = QapEvaluation::new(&matrices);
        assert_eq!(evaluation.score(&vec![0]), BASELINE);
    }
}
