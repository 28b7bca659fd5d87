//! A single tour-building agent.

use super::edges::EdgeModel;
use super::selection::roulette;
use rand::Rng;

/// An ant that builds one closed tour per iteration.
///
/// The ant only reads the shared [`EdgeModel`]; it owns nothing but its
/// exponents and the scratch state of its latest tour.
///
/// # Transition rule
///
/// From the current node `c`, with unvisited set `U`, candidate `u` scores
///
/// ```text
/// s(u) = tau(c, u)^alpha * (H / d(c, u))^beta,    H = sum_{v in U} d(c, v)
/// ```
///
/// The heuristic is scaled by `H`, the summed distance to all unvisited
/// nodes, rather than the textbook `1 / d(c, u)`. This deviates from
/// standard Ant System and changes the balance between `alpha` and `beta`
/// as the tour fills up.
#[derive(Debug, Clone)]
pub struct Ant {
    alpha: f64,
    beta: f64,
    tour: Vec<usize>,
    distance: f64,
    degenerate_selections: usize,
}

impl Ant {
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self {
            alpha,
            beta,
            tour: Vec::new(),
            distance: 0.0,
            degenerate_selections: 0,
        }
    }

    /// Builds a fresh tour over every node of `edges`.
    ///
    /// The start node is uniform; every further node is chosen by
    /// roulette wheel over the unvisited nodes in ascending index order.
    /// Returns an empty tour when `edges` has no nodes.
    pub fn find_tour<R: Rng>(&mut self, edges: &EdgeModel, rng: &mut R) -> &[usize] {
        let n = edges.node_count();
        self.tour.clear();
        self.distance = 0.0;
        self.degenerate_selections = 0;
        if n == 0 {
            return &self.tour;
        }

        let mut visited = vec![false; n];
        let start = rng.random_range(0..n);
        self.tour.push(start);
        visited[start] = true;

        let mut candidates = Vec::with_capacity(n);
        let mut scores = Vec::with_capacity(n);
        while self.tour.len() < n {
            let current = self.tour[self.tour.len() - 1];

            candidates.clear();
            candidates.extend((0..n).filter(|&v| !visited[v]));

            let heuristic_total: f64 = candidates.iter().map(|&v| edges.weight(current, v)).sum();

            scores.clear();
            scores.extend(candidates.iter().map(|&u| {
                edges.pheromone(current, u).powf(self.alpha)
                    * (heuristic_total / edges.weight(current, u)).powf(self.beta)
            }));

            let choice = roulette(&scores, rng);
            if choice.degenerate {
                self.degenerate_selections += 1;
                tracing::trace!(current, remaining = candidates.len(), "degenerate selection");
            }

            let next = candidates[choice.index];
            visited[next] = true;
            self.tour.push(next);
        }

        &self.tour
    }

    /// Computes and caches the closed length of the current tour.
    pub fn evaluate(&mut self, edges: &EdgeModel) -> f64 {
        self.distance = edges.tour_length(&self.tour);
        self.distance
    }

    /// The latest tour, empty before the first [`find_tour`](Self::find_tour).
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    /// The length cached by the last [`evaluate`](Self::evaluate).
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Selections of the latest tour that used a fallback rule.
    pub fn degenerate_selections(&self) -> usize {
        self.degenerate_selections
    }
}
