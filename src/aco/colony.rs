//! Colony optimization loop.
//!
//! [`Colony`] owns the edge model, the ants and the random source, and
//! repeats a fixed number of iterations of
//! evaporate → construct & evaluate → deposit & track best.

use super::ant::Ant;
use super::config::AcoConfig;
use super::edges::EdgeModel;
use crate::error::AcoError;
use crate::nodes::Point;
use crate::random::rng_from_option;
use rand::rngs::StdRng;
use std::fmt;
use tracing::{debug, info, trace};

/// Result of a completed colony run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// The shortest tour found, as node indices.
    pub best_tour: Vec<usize>,

    /// Closed length of `best_tour`.
    pub best_distance: f64,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Global best distance at the end of each iteration.
    pub distance_history: Vec<f64>,

    /// Roulette draws resolved by a fallback rule over the whole run.
    pub degenerate_selections: usize,
}

impl AcoResult {
    /// Best distance rounded to two decimals for reporting.
    pub fn rounded_distance(&self) -> f64 {
        (self.best_distance * 100.0).round() / 100.0
    }
}

impl fmt::Display for AcoResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.best_tour.iter().map(|i| (i + 1).to_string()).collect();
        writeln!(f, "Sequence : <- {} ->", labels.join(" - "))?;
        write!(
            f,
            "Total distance travelled to complete the tour : {}",
            self.rounded_distance()
        )
    }
}

/// Ant colony over a fixed set of nodes.
///
/// # Usage
///
/// ```
/// use u_antcolony::aco::{AcoConfig, Colony};
/// use u_antcolony::nodes::Point;
///
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// let config = AcoConfig::default().with_colony_size(4).with_steps(50).with_seed(42);
/// let result = Colony::new(&points, &config).unwrap().run().unwrap();
/// assert!((result.best_distance - 4.0).abs() < 1e-9);
/// ```
#[derive(Debug)]
pub struct Colony {
    edges: EdgeModel,
    ants: Vec<Ant>,
    rng: StdRng,
    rho: f64,
    pheromone_deposit_weight: f64,
    steps: usize,
    iterations: usize,
    global_best_tour: Option<Vec<usize>>,
    global_best_distance: f64,
    distance_history: Vec<f64>,
    degenerate_selections: usize,
}

impl Colony {
    /// Creates a colony for `points`.
    ///
    /// # Errors
    /// [`AcoError::InvalidConfiguration`] if `points` is empty, holds a
    /// non-finite coordinate, spans a distance whose tours would overflow
    /// to infinity, or the configuration does not validate.
    pub fn new(points: &[Point], config: &AcoConfig) -> Result<Self, AcoError> {
        config.validate()?;
        if points.is_empty() {
            return Err(AcoError::config("node list is empty"));
        }
        if let Some(i) = points
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(AcoError::config(format!(
                "node {i} has a non-finite coordinate {}",
                points[i]
            )));
        }

        let edges = EdgeModel::new(points, config.initial_pheromone);
        // every tour is at most n times the longest edge
        let bound = edges.longest_edge() * points.len() as f64;
        if !bound.is_finite() {
            return Err(AcoError::config(
                "node coordinates are too far apart: tour lengths overflow",
            ));
        }

        let ants = (0..config.colony_size)
            .map(|_| Ant::new(config.alpha, config.beta))
            .collect();

        Ok(Self {
            edges,
            ants,
            rng: rng_from_option(config.seed),
            rho: config.rho,
            pheromone_deposit_weight: config.pheromone_deposit_weight,
            steps: config.steps,
            iterations: 0,
            global_best_tour: None,
            global_best_distance: f64::INFINITY,
            distance_history: Vec::with_capacity(config.steps),
            degenerate_selections: 0,
        })
    }

    /// Runs one iteration.
    ///
    /// Each ant deposits pheromone right after it finishes, so later ants
    /// of the same iteration already see the trails of earlier ones.
    pub fn iterate(&mut self) {
        self.edges.evaporate_all(self.rho);

        for ant in &mut self.ants {
            ant.find_tour(&self.edges, &mut self.rng);
            let distance = ant.evaluate(&self.edges);
            self.degenerate_selections += ant.degenerate_selections();

            if distance > 0.0 {
                self.edges
                    .deposit_tour(ant.tour(), self.pheromone_deposit_weight / distance);
            } else {
                trace!("zero-length tour, nothing deposited");
            }

            if distance < self.global_best_distance {
                self.global_best_distance = distance;
                self.global_best_tour = Some(ant.tour().to_vec());
            }
        }

        self.iterations += 1;
        self.distance_history.push(self.global_best_distance);
        debug!(
            iteration = self.iterations,
            best_distance = self.global_best_distance,
            "iteration complete"
        );
    }

    /// Runs the configured number of iterations and returns the best tour.
    ///
    /// # Errors
    /// [`AcoError::NoResultAvailable`] if no tour was completed, which
    /// happens exactly when `steps` is 0.
    pub fn run(mut self) -> Result<AcoResult, AcoError> {
        info!(
            nodes = self.edges.node_count(),
            ants = self.ants.len(),
            steps = self.steps,
            "starting colony run"
        );

        for _ in 0..self.steps {
            self.iterate();
        }

        let best_tour = self.global_best_tour.ok_or(AcoError::NoResultAvailable)?;
        info!(
            best_distance = self.global_best_distance,
            iterations = self.iterations,
            "colony run finished"
        );

        Ok(AcoResult {
            best_tour,
            best_distance: self.global_best_distance,
            iterations: self.iterations,
            distance_history: self.distance_history,
            degenerate_selections: self.degenerate_selections,
        })
    }

    /// Shared edge model.
    pub fn edges(&self) -> &EdgeModel {
        &self.edges
    }

    /// Best tour so far, `None` before any ant completed a tour.
    pub fn best_tour(&self) -> Option<&[usize]> {
        self.global_best_tour.as_deref()
    }

    /// Best distance so far, `+inf` before any ant completed a tour.
    pub fn best_distance(&self) -> f64 {
        self.global_best_distance
    }

    /// Iterations executed so far.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}
