//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.
//! Degenerate parameters are rejected by [`GaConfig::validate`] before any
//! evolution starts, never discovered mid-run.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SolverError};

/// Configuration for the genetic solver.
///
/// # Defaults
///
/// ```
/// use u_tour::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 200);
/// assert_eq!(config.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tour::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(60)
///     .with_tournament_size(5)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaConfig {
    /// Number of individuals kept across generations.
    ///
    /// Larger populations increase diversity but slow down each
    /// generation. Typical range: 50–500.
    pub population_size: usize,

    /// Probability of producing a child by crossover (0.0–1.0).
    ///
    /// When crossover is skipped, the first parent is copied verbatim.
    pub crossover_rate: f64,

    /// Probability of mutating each new individual (0.0–1.0).
    ///
    /// The mutation operator is a full-pass scramble, far stronger than a
    /// single swap, so rates well below 0.1 are usual.
    pub mutation_rate: f64,

    /// Number of population-replacement cycles to run.
    ///
    /// Zero is valid: the result is then the best of the random initial
    /// population.
    pub generations: usize,

    /// Individuals sampled (with replacement) per tournament.
    ///
    /// Raising this toward `population_size` sharply increases selection
    /// pressure toward the current best, trading diversity for
    /// convergence speed.
    pub tournament_size: usize,

    /// Random seed for reproducible runs.
    ///
    /// `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Whether to evaluate populations in parallel.
    ///
    /// Only effective with the `parallel` cargo feature. Evaluation draws
    /// no randomness, so results match sequential runs either way.
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            crossover_rate: 0.9,
            mutation_rate: 0.05,
            generations: 200,
            tournament_size: 3,
            seed: None,
            parallel: false,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the crossover probability.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel population evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`SolverError::InvalidConfig`] naming the offending parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(SolverError::invalid_config(
                "population_size must be at least 1",
            ));
        }
        if self.tournament_size == 0 {
            return Err(SolverError::invalid_config(
                "tournament_size must be at least 1",
            ));
        }
        if self.tournament_size > self.population_size {
            return Err(SolverError::invalid_config(format!(
                "tournament_size {} exceeds population_size {}",
                self.tournament_size, self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(SolverError::invalid_config(
                "crossover_rate must be within [0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(SolverError::invalid_config(
                "mutation_rate must be within [0, 1]",
            ));
        }
        Ok(())
    }
}
