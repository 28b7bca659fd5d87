//! Ant Colony Optimization for the symmetric Traveling Salesman Problem.
//!
//! - **ACO**: Pheromone-biased tour construction with evaporation and
//!   length-proportional deposition over a fixed number of iterations.
//! - **Nodes**: Editable coordinate list with CSV loading.
//! - **Editor**: Line-oriented command language for editing a node list.
//! - **Render**: SVG plot of the best tour.
//!
//! # Example
//!
//! ```
//! use u_antcolony::aco::{AcoConfig, Colony};
//! use u_antcolony::nodes::NodeList;
//!
//! let nodes = NodeList::sample();
//! let config = AcoConfig::default().with_colony_size(4).with_steps(20).with_seed(7);
//! let result = Colony::new(nodes.points(), &config).unwrap().run().unwrap();
//! assert_eq!(result.best_tour.len(), nodes.len());
//! ```

pub mod aco;
pub mod editor;
pub mod error;
pub mod nodes;
pub mod random;
pub mod render;

pub use error::AcoError;
