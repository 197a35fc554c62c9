//! Tournament selection.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::{Population, Selection};
use rand::Rng;

/// Tournament selection with replacement.
///
/// For each output slot, `tournament_size` chromosomes are drawn uniformly
/// at random **with replacement** from the current population and the one
/// with the strictly greatest fitness wins; ties break toward the member
/// drawn first. Sampling with replacement is part of the contract — even
/// when `tournament_size` equals the population size, a tournament only
/// approximates picking the population maximum.
///
/// Pressure grows with size: 1 degenerates to a uniform random pick, small
/// sizes keep diversity, sizes near the population size converge fast.
#[derive(Debug, Clone, Copy)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a tournament of the given size (clamped to at least 1).
    pub fn new(tournament_size: usize) -> Self {
        Self {
            tournament_size: tournament_size.max(1),
        }
    }
}

impl<G: Clone> Selection<G> for TournamentSelection {
    fn select<R: Rng>(&self, population: &Population<G>, rng: &mut R) -> Population<G> {
        assert!(!population.is_empty(), "cannot select from empty population");
        let size = population.len();
        (0..size)
            .map(|_| {
                let mut winner = &population[rng.random_range(0..size)];
                for _ in 1..self.tournament_size {
                    let challenger = &population[rng.random_range(0..size)];
                    if challenger.fitness > winner.fitness {
                        winner = challenger;
                    }
                }
                winner.clone()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Chromosome;
    use crate::random::create_rng;

    fn make_population(fitnesses: &[u32]) -> Population<usize> {
        fitnesses
            .iter()
            .enumerate()
            .map(|(i, &f)| Chromosome::new(i, f))
            .collect()
    }

    #[test]
    fn test_preserves_population_size() {
        let population = make_population(&[1, 2, 3, 4, 5]);
        let mut rng = create_rng(42);
        let selected = TournamentSelection::new(3).select(&population, &mut rng);
        assert_eq!(selected.len(), 5);
    }

    #[test]
    fn test_size_one_is_uniform() {
        let population = make_population(&[10, 5, 1, 8]);
        let mut rng = create_rng(42);
        let selection = TournamentSelection::new(1);

        let mut counts = [0u32; 4];
        let rounds = 2500;
        for _ in 0..rounds {
            for chromosome in selection.select(&population, &mut rng) {
                counts[chromosome.genotype] += 1;
            }
        }
        // 10000 draws over 4 slots; each should land near 2500.
        for &c in &counts {
            assert!(c > 2000 && c < 3000, "expected uniform draws, got {counts:?}");
        }
    }

    #[test]
    fn test_large_tournament_favors_maximum() {
        let population = make_population(&[3, 9, 1, 5]);
        let mut rng = create_rng(42);
        let selection = TournamentSelection::new(4);

        let mut max_wins = 0u32;
        let rounds = 1000;
        for _ in 0..rounds {
            for chromosome in selection.select(&population, &mut rng) {
                if chromosome.genotype == 1 {
                    max_wins += 1;
                }
            }
        }
        // With replacement, the maximum wins a slot unless all four draws
        // miss it: 1 - (3/4)^4 ≈ 0.68 of 4000 slots.
        assert!(
            max_wins > 2400,
            "expected the maximum to dominate, got {max_wins}/4000"
        );
    }

    #[test]
    fn test_tie_breaks_to_first_drawn() {
        // All fitness equal: the winner must always be the first draw, so
        // the selection is exactly the stream of first draws.
        let population = make_population(&[7, 7, 7, 7]);
        let selection = TournamentSelection::new(3);

        let mut rng = create_rng(99);
        let selected = selection.select(&population, &mut rng);

        let mut replay = create_rng(99);
        for chromosome in &selected {
            let first = replay.random_range(0..4usize);
            replay.random_range(0..4usize);
            replay.random_range(0..4usize);
            assert_eq!(chromosome.genotype, first);
        }
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let population: Population<usize> = vec![];
        let mut rng = create_rng(42);
        TournamentSelection::new(2).select(&population, &mut rng);
    }
}
