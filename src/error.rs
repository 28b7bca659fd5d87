//! Error types for colony construction, node editing and reporting.

use thiserror::Error;

/// Unified error type.
///
/// Configuration problems are detected once, before any iteration runs.
/// Degenerate roulette sampling is not an error: it is resolved inline
/// during tour construction and only counted.
#[derive(Debug, Error)]
pub enum AcoError {
    /// A parameter or the node list cannot produce a meaningful run.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The run completed no tour (zero steps), so there is nothing to
    /// report or plot.
    #[error("no tour available: the colony has not completed any iteration")]
    NoResultAvailable,

    /// A node edit referenced an index outside the node list.
    #[error("node index {index} out of range for {len} nodes")]
    OutOfRangeEdit {
        /// Requested index.
        index: usize,
        /// Current number of nodes.
        len: usize,
    },

    /// A tour references a node the coordinate list does not have.
    #[error("tour references node {index} but only {len} nodes are known")]
    UnknownNode {
        /// Node index taken from the tour.
        index: usize,
        /// Number of known coordinates.
        len: usize,
    },

    /// An editor line could not be parsed.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// Node file could not be read or parsed.
    #[error("node file error: {0}")]
    Csv(#[from] csv::Error),

    /// SVG template rendering failed.
    #[error("render error: {0}")]
    Template(#[from] tera::Error),

    /// Reading input or writing the plot failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AcoError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        AcoError::InvalidConfiguration(message.into())
    }
}
