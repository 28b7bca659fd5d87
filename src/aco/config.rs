//! ACO configuration.
//!
//! [`AcoConfig`] holds every parameter of a colony run.

use crate::error::AcoError;

/// Configuration for the Ant Colony Optimization run.
///
/// # Defaults
///
/// ```
/// use u_antcolony::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.colony_size, 10);
/// assert_eq!(config.steps, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_antcolony::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_colony_size(4)
///     .with_beta(2.0)
///     .with_rho(0.2)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of ants constructing a tour in every iteration.
    pub colony_size: usize,

    /// Pheromone exponent. 0 ignores the learned trail entirely.
    pub alpha: f64,

    /// Heuristic exponent. 0 ignores edge lengths entirely.
    pub beta: f64,

    /// Evaporation rate in [0, 1]. Every pheromone value is multiplied by
    /// `1 - rho` once per iteration.
    pub rho: f64,

    /// Constant `Q` in the deposit `Q / tour_length`.
    pub pheromone_deposit_weight: f64,

    /// Pheromone on every edge before the first iteration.
    pub initial_pheromone: f64,

    /// Number of iterations. There is no convergence-based early stop.
    pub steps: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            colony_size: 10,
            alpha: 1.0,
            beta: 3.0,
            rho: 0.1,
            pheromone_deposit_weight: 1.0,
            initial_pheromone: 1.0,
            steps: 100,
            seed: None,
        }
    }
}

impl AcoConfig {
    pub fn with_colony_size(mut self, n: usize) -> Self {
        self.colony_size = n;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    pub fn with_pheromone_deposit_weight(mut self, q: f64) -> Self {
        self.pheromone_deposit_weight = q;
        self
    }

    pub fn with_initial_pheromone(mut self, tau0: f64) -> Self {
        self.initial_pheromone = tau0;
        self
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Zero `steps` is valid here; such a run simply yields no tour.
    pub fn validate(&self) -> Result<(), AcoError> {
        if self.colony_size == 0 {
            return Err(AcoError::config("colony_size must be at least 1"));
        }
        if !(self.alpha.is_finite() && self.alpha >= 0.0) {
            return Err(AcoError::config(format!(
                "alpha must be a non-negative number, got {}",
                self.alpha
            )));
        }
        if !(self.beta.is_finite() && self.beta >= 0.0) {
            return Err(AcoError::config(format!(
                "beta must be a non-negative number, got {}",
                self.beta
            )));
        }
        if !(0.0..=1.0).contains(&self.rho) {
            return Err(AcoError::config(format!(
                "rho must be in [0, 1], got {}",
                self.rho
            )));
        }
        if !(self.pheromone_deposit_weight.is_finite() && self.pheromone_deposit_weight > 0.0) {
            return Err(AcoError::config(format!(
                "pheromone_deposit_weight must be positive, got {}",
                self.pheromone_deposit_weight
            )));
        }
        if !(self.initial_pheromone.is_finite() && self.initial_pheromone > 0.0) {
            return Err(AcoError::config(format!(
                "initial_pheromone must be positive, got {}",
                self.initial_pheromone
            )));
        }
        Ok(())
    }
}
