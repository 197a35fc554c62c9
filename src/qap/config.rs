//! Run parameters for the QAP solver.

/// Parameters controlling one [`solve`](super::solve) run.
///
/// # Builder Pattern
///
/// ```
/// use qap_engine::qap::QapConfig;
///
/// let config = QapConfig::default()
///     .with_population_size(200)
///     .with_tournament_size(5)
///     .with_seed(42);
/// assert_eq!(config.population_size, 200);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QapConfig {
    /// Number of chromosomes in the population. Constant across
    /// generations.
    pub population_size: usize,

    /// Number of generations to run; 0 stops right after the initial
    /// evaluation.
    pub max_iterations: usize,

    /// Tournament size for selection (sampling with replacement).
    pub tournament_size: usize,

    /// Probability of crossing each candidate pair (0.0–1.0).
    pub crossover_probability: f64,

    /// Probability of mutating each chromosome (0.0–1.0).
    pub mutation_probability: f64,

    /// Use symmetric OX (one shared cut pair per offspring pair) instead
    /// of plain OX (independent cuts per offspring).
    pub symmetric_crossing: bool,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for QapConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_iterations: 50,
            tournament_size: 100,
            crossover_probability: 0.70,
            mutation_probability: 0.20,
            symmetric_crossing: true,
            seed: None,
        }
    }
}

impl QapConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, size: usize) -> Self {
        self.tournament_size = size;
        self
    }

    /// Sets the crossover probability, clamped to `[0, 1]`.
    pub fn with_crossover_probability(mut self, probability: f64) -> Self {
        self.crossover_probability = probability.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation probability, clamped to `[0, 1]`.
    pub fn with_mutation_probability(mut self, probability: f64) -> Self {
        self.mutation_probability = probability.clamp(0.0, 1.0);
        self
    }

    /// Selects plain or symmetric order crossover.
    pub fn with_symmetric_crossing(mut self, symmetric: bool) -> Self {
        self.symmetric_crossing = symmetric;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.tournament_size == 0 {
            return Err("tournament_size must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.crossover_probability) {
            return Err("crossover_probability must be within [0, 1]".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err("mutation_probability must be within [0, 1]".into());
        }
        Ok(())
    }
}
