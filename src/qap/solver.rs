//! Convenience wiring of the QAP strategies into the generic engine.

use super::config::QapConfig;
use super::evaluation::{fitness_to_result, QapEvaluation};
use super::matrix::CostMatrices;
use super::operators::{OrderCrossing, RandomAssignment, SwapMutation, SymmetricOrderCrossing};
use crate::ga::{
    Fitness, GenerationStats, GeneticAlgorithm, HistoryLogging, IndependentMutation,
    IterationLimit, PairedCrossover, PopulationEvaluation, RandomInitialization,
    TournamentSelection,
};
use crate::random::create_rng;

/// Result of one solver run.
#[derive(Debug, Clone)]
pub struct QapSolution {
    /// Best assignment found: position `i` holds the location of facility
    /// `i`.
    pub assignment: Vec<usize>,

    /// Raw maximization score of the best assignment.
    pub fitness: Fitness,

    /// Real-world cost of the best assignment
    /// ([`fitness_to_result`] applied to `fitness`).
    pub cost: Fitness,

    /// Max/mean/min cost per evaluation, the initial one included.
    pub history: Vec<GenerationStats>,
}

/// Runs the genetic algorithm on a QAP instance.
///
/// Builds the standard strategy stack — random permutation initialization,
/// baseline-subtraction evaluation, tournament selection, paired order
/// crossover, swap mutation, iteration-count stop, history logging — and
/// returns the best chromosome of the final generation.
pub fn solve(matrices: &CostMatrices, config: &QapConfig) -> Result<QapSolution, String> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    };

    let initialization =
        RandomInitialization::new(config.population_size, RandomAssignment::new(matrices.size()));
    let evaluation = PopulationEvaluation::new(QapEvaluation::new(matrices));
    let mut stop_condition = IterationLimit::new(config.max_iterations);
    let mut logging = HistoryLogging::new(fitness_to_result);
    let selection = TournamentSelection::new(config.tournament_size);
    let mutation = IndependentMutation::new(config.mutation_probability, SwapMutation);

    let best = if config.symmetric_crossing {
        let crossover =
            PairedCrossover::new(config.crossover_probability, SymmetricOrderCrossing);
        GeneticAlgorithm::optimize(
            &initialization,
            &evaluation,
            &mut stop_condition,
            &mut logging,
            &selection,
            &crossover,
            &mutation,
            &mut rng,
        )
    } else {
        let crossover = PairedCrossover::new(config.crossover_probability, OrderCrossing);
        GeneticAlgorithm::optimize(
            &initialization,
            &evaluation,
            &mut stop_condition,
            &mut logging,
            &selection,
            &crossover,
            &mutation,
            &mut rng,
        )
    };

    Ok(QapSolution {
        cost: fitness_to_result(best.fitness),
        fitness: best.fitness,
        assignment: best.genotype,
        history: logging.into_history(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qap::{Matrix, BASELINE};

    fn uniform_instance(size: usize, value: u32) -> CostMatrices {
        let values: Vec<u32> = (0..size * size)
            .map(|k| if k / size == k % size { 0 } else { value })
            .collect();
        CostMatrices {
            distance: Matrix::from_values(size, values.clone()).unwrap(),
            flow: Matrix::from_values(size, values).unwrap(),
        }
    }

    fn small_config() -> QapConfig {
        QapConfig::default()
            .with_population_size(20)
            .with_max_iterations(10)
            .with_tournament_size(4)
            .with_seed(42)
    }

    #[test]
    fn test_solution_is_permutation() {
        let matrices = uniform_instance(6, 1);
        let solution = solve(&matrices, &small_config()).unwrap();

        let mut seen = vec![false; 6];
        for &location in &solution.assignment {
            assert!(!seen[location]);
            seen[location] = true;
        }
    }

    #[test]
    fn test_uniform_instance_scores_constant() {
        // N=4 uniform instance: every permutation scores 10000 - 12, so the
        // logged max and min agree in every generation.
        let matrices = uniform_instance(4, 1);
        let solution = solve(&matrices, &small_config()).unwrap();

        assert_eq!(solution.fitness, 9_988);
        assert_eq!(solution.cost, 12);
        for stats in &solution.history {
            assert_eq!(stats.max, 12);
            assert_eq!(stats.mean, 12);
            assert_eq!(stats.min, 12);
        }
    }

    #[test]
    fn test_zero_iterations_returns_initial_best() {
        let matrices = uniform_instance(5, 2);
        let config = small_config().with_max_iterations(0);
        let solution = solve(&matrices, &config).unwrap();
        assert_eq!(solution.history.len(), 1);
    }

    #[test]
    fn test_history_length_tracks_iterations() {
        let matrices = uniform_instance(5, 2);
        let solution = solve(&matrices, &small_config()).unwrap();
        assert_eq!(solution.history.len(), 11);
    }

    #[test]
    fn test_fixed_seed_is_deterministic() {
        let matrices = uniform_instance(8, 3);
        let config = small_config().with_max_iterations(20);

        let first = solve(&matrices, &config).unwrap();
        let second = solve(&matrices, &config).unwrap();

        assert_eq!(first.assignment, second.assignment);
        assert_eq!(first.fitness, second.fitness);
        assert_eq!(first.history, second.history);
    }

    #[test]
    fn test_plain_ox_variant_runs() {
        let matrices = uniform_instance(6, 1);
        let config = small_config().with_symmetric_crossing(false);
        let solution = solve(&matrices, &config).unwrap();
        assert_eq!(solution.fitness, BASELINE - 2 * 15); // C(6,2) pairs
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let matrices = uniform_instance(4, 1);
        let config = QapConfig::default().with_population_size(0);
        assert!(solve(&matrices, &config).is_err());
    }
}
