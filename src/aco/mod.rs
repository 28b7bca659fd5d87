//! Ant Colony Optimization for the symmetric TSP.
//!
//! A population-based constructive metaheuristic. Every iteration, each ant
//! builds a complete tour by stochastic proportional selection biased by a
//! shared pheromone model; pheromone evaporates uniformly and is reinforced
//! along every tour in inverse proportion to its length.
//!
//! # Key Types
//!
//! - [`AcoConfig`]: Colony size, exponents, evaporation and deposit constants
//! - [`EdgeModel`]: Pairwise distances and pheromone levels
//! - [`Ant`]: Builds and measures one tour
//! - [`Colony`]: Runs the optimization loop
//! - [`AcoResult`]: Best tour, its length and per-iteration history
//!
//! # Deviation from Ant System
//!
//! The heuristic desirability of moving from `c` to `u` is
//! `H / d(c, u)` where `H` is the summed distance from `c` to all still
//! unvisited nodes, not the textbook `1 / d(c, u)`. See [`Ant`].
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

mod ant;
mod colony;
mod config;
mod edges;
mod selection;

pub use ant::Ant;
pub use colony::{AcoResult, Colony};
pub use config::AcoConfig;
pub use edges::EdgeModel;
pub use selection::{roulette, Choice};
