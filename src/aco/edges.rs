//! Pairwise distances and pheromone levels.

use crate::nodes::Point;

/// Symmetric edge model over `n` nodes.
///
/// Stores, for every unordered pair `(i, j)` with `i != j`, the fixed
/// Euclidean weight and a mutable, non-negative pheromone value. Both
/// matrices are kept dense and mirrored, so `weight(i, j) == weight(j, i)`
/// and `pheromone(i, j) == pheromone(j, i)` always hold.
///
/// The diagonal has weight 0 and carries no pheromone.
#[derive(Debug, Clone)]
pub struct EdgeModel {
    n: usize,
    weights: Vec<f64>,
    pheromones: Vec<f64>,
}

impl EdgeModel {
    /// Builds the model for `points`, with `initial_pheromone` on every edge.
    pub fn new(points: &[Point], initial_pheromone: f64) -> Self {
        let n = points.len();
        let mut weights = vec![0.0; n * n];
        let mut pheromones = vec![0.0; n * n];

        for i in 0..n {
            for j in (i + 1)..n {
                let w = points[i].distance(&points[j]);
                weights[i * n + j] = w;
                weights[j * n + i] = w;
                pheromones[i * n + j] = initial_pheromone;
                pheromones[j * n + i] = initial_pheromone;
            }
        }

        Self {
            n,
            weights,
            pheromones,
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Largest pairwise distance, 0 for fewer than two nodes.
    pub fn longest_edge(&self) -> f64 {
        self.weights.iter().copied().fold(0.0, f64::max)
    }

    #[inline]
    pub fn weight(&self, i: usize, j: usize) -> f64 {
        self.weights[i * self.n + j]
    }

    #[inline]
    pub fn pheromone(&self, i: usize, j: usize) -> f64 {
        self.pheromones[i * self.n + j]
    }

    /// Adds `amount` of pheromone to the edge `(i, j)`.
    ///
    /// A self edge has no pheromone entry; adding to it does nothing.
    pub fn add_pheromone(&mut self, i: usize, j: usize, amount: f64) {
        debug_assert!(amount >= 0.0, "negative pheromone deposit {amount}");
        if i == j {
            return;
        }
        self.pheromones[i * self.n + j] += amount;
        self.pheromones[j * self.n + i] += amount;
    }

    /// Multiplies every pheromone value by `1 - rho`.
    pub fn evaporate_all(&mut self, rho: f64) {
        let keep = 1.0 - rho;
        for tau in &mut self.pheromones {
            *tau *= keep;
        }
    }

    /// Adds `amount` to every edge of the closed `tour`.
    pub fn deposit_tour(&mut self, tour: &[usize], amount: f64) {
        let n = tour.len();
        for k in 0..n {
            self.add_pheromone(tour[k], tour[(k + 1) % n], amount);
        }
    }

    /// Length of the closed `tour`, including the edge back to its start.
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        let n = tour.len();
        (0..n)
            .map(|k| self.weight(tour[k], tour[(k + 1) % n]))
            .sum()
    }
}
