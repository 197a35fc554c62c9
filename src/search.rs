//! Baseline comparators sharing the GA's evaluation-function signature.
//!
//! Both take an initialization function producing a candidate sequence and
//! an evaluation function scoring it (maximization), and return the best
//! sequence found. They contain no strategy architecture and exist as
//! reference points for the genetic algorithm's solution quality.

use crate::ga::Fitness;
use rand::seq::SliceRandom;
use rand::Rng;

/// Random-restart search: reshuffle the candidate each iteration and keep
/// the strictly best score seen.
///
/// Returns an empty sequence when no candidate scores above zero.
pub fn random_search<R, I, E>(
    initialization: I,
    evaluation: E,
    iteration_count: usize,
    rng: &mut R,
) -> Vec<usize>
where
    R: Rng,
    I: Fn() -> Vec<usize>,
    E: Fn(&[usize]) -> Fitness,
{
    let mut candidate = initialization();
    let mut best = Vec::new();
    let mut best_fitness: Fitness = 0;

    for _ in 0..iteration_count {
        candidate.shuffle(rng);
        let fitness = evaluation(&candidate);
        if fitness > best_fitness {
            best.clear();
            best.extend_from_slice(&candidate);
            best_fitness = fitness;
        }
    }

    best
}

/// Exhaustive search: visit every permutation of the candidate in
/// lexicographic order and keep the strictly best score.
///
/// Factorial time; only feasible for small sequences. Returns an empty
/// sequence when no candidate scores above zero.
pub fn exhaustive_search<I, E>(initialization: I, evaluation: E) -> Vec<usize>
where
    I: Fn() -> Vec<usize>,
    E: Fn(&[usize]) -> Fitness,
{
    let mut candidate = initialization();
    candidate.sort_unstable();

    let mut best = Vec::new();
    let mut best_fitness: Fitness = 0;

    loop {
        let fitness = evaluation(&candidate);
        if fitness > best_fitness {
            best.clear();
            best.extend_from_slice(&candidate);
            best_fitness = fitness;
        }
        if !next_permutation(&mut candidate) {
            break;
        }
    }

    best
}

/// Advances `sequence` to its lexicographic successor; returns `false`
/// when the sequence was already the last permutation.
fn next_permutation(sequence: &mut [usize]) -> bool {
    if sequence.len() < 2 {
        return false;
    }

    let mut pivot = sequence.len() - 1;
    while pivot > 0 && sequence[pivot - 1] >= sequence[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        return false;
    }

    let mut successor = sequence.len() - 1;
    while sequence[successor] <= sequence[pivot - 1] {
        successor -= 1;
    }
    sequence.swap(pivot - 1, successor);
    sequence[pivot..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qap::{CostMatrices, Matrix, QapEvaluation, BASELINE};
    use crate::random::create_rng;
    use crate::ga::FitnessFunction;

    /// 3-location instance with a unique optimum: facilities 0 and 1 have
    /// the heaviest flow, so the best layout puts them on the closest
    /// locations.
    fn skewed_instance() -> CostMatrices {
        let distance = Matrix::from_values(3, vec![0, 1, 9, 1, 0, 9, 9, 9, 0]).unwrap();
        let flow = Matrix::from_values(3, vec![0, 8, 1, 8, 0, 1, 1, 1, 0]).unwrap();
        CostMatrices { distance, flow }
    }

    fn identity(len: usize) -> impl Fn() -> Vec<usize> {
        move || (0..len).collect()
    }

    #[test]
    fn test_next_permutation_visits_all() {
        let mut sequence = vec![0, 1, 2];
        let mut count = 1;
        while next_permutation(&mut sequence) {
            count += 1;
        }
        assert_eq!(count, 6);
        assert_eq!(sequence, vec![2, 1, 0]);
    }

    #[test]
    fn test_next_permutation_short_sequences() {
        assert!(!next_permutation(&mut []));
        assert!(!next_permutation(&mut [0]));
    }

    #[test]
    fn test_exhaustive_finds_optimum() {
        let matrices = skewed_instance();
        let evaluation = QapEvaluation::new(&matrices);
        let best = exhaustive_search(identity(3), |s| evaluation.score(&s.to_vec()));

        // Optimal layouts keep facilities 0 and 1 on locations 0 and 1:
        // cost = 2*(8*1 + 1*9 + 1*9) = 52.
        let best_score = evaluation.score(&best);
        assert_eq!(best_score, BASELINE - 52);
    }

    #[test]
    fn test_random_search_matches_exhaustive_on_tiny_instance() {
        let matrices = skewed_instance();
        let evaluation = QapEvaluation::new(&matrices);
        let mut rng = create_rng(42);

        // 3! = 6 layouts; 200 shuffles visit all of them with certainty
        // for practical purposes.
        let best = random_search(identity(3), |s| evaluation.score(&s.to_vec()), 200, &mut rng);
        assert_eq!(evaluation.score(&best), BASELINE - 52);
    }

    #[test]
    fn test_random_search_zero_iterations_returns_empty() {
        let matrices = skewed_instance();
        let evaluation = QapEvaluation::new(&matrices);
        let mut rng = create_rng(42);
        let best = random_search(identity(3), |s| evaluation.score(&s.to_vec()), 0, &mut rng);
        assert!(best.is_empty());
    }
}
