use thiserror::Error;

use crate::grid::Position;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Coordinate outside the grid. Callers are expected to validate their
    /// input, so hitting this is an integration error.
    #[error("cell {cell} is out of bounds for a {width}x{height} grid")]
    OutOfBounds {
        cell: Position,
        width: usize,
        height: usize,
    },

    /// Start/target missing, identical, or sitting on an obstacle. Raised
    /// before any search work is performed.
    #[error("invalid endpoints: {reason}")]
    InvalidEndpoints { reason: &'static str },
}
