//! Error types for maze_solver.

use grid_util::point::Point;
use thiserror::Error;

/// Precondition violations surfaced by [solve](crate::solve) and
/// [compare](fn@crate::compare). An unreachable destination is not an error:
/// it comes back as a regular result with an empty path.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    #[error("no source cell is placed")]
    MissingSource,

    #[error("no destination cell is placed")]
    MissingDestination,

    #[error("endpoint {0} lies outside the grid")]
    OutOfBounds(Point),

    #[error("endpoint {0} lies on a wall")]
    WallEndpoint(Point),
}

pub type Result<T> = std::result::Result<T, SolveError>;
