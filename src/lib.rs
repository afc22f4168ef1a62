//! # maze_solver
//!
//! A grid-maze pathfinding engine. Computes shortest paths between a source
//! and a destination cell on a walled grid using either
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
//! or [A* search](https://en.wikipedia.org/wiki/A*_search_algorithm), and
//! records the order in which cells are explored so a renderer can replay
//! the search step by step or race the two algorithms against each other.
//! Movement is 4-directional with unit edge costs.
//!
//! The crate owns the maze model, the search algorithms, the comparison
//! runner and the replay pacing. Rendering, input wiring and theming belong
//! to the embedding application, which builds a [MazeGrid] from user input,
//! calls [solve] or [compare](fn@compare), and feeds the returned trace
//! through a [Replay].

pub mod animate;
pub mod compare;
pub mod error;
pub mod maze_grid;
mod search;
pub mod solver;

#[cfg(test)]
mod fuzz_test;

pub use animate::{CancelToken, Replay, ReplayFrame};
pub use compare::{compare, Comparison, TimedRun};
pub use error::{Result, SolveError};
pub use maze_grid::{
    CellKind, MazeGrid, SelectionMode, DEFAULT_WALL_PROBABILITY, MAX_DIMENSION, MIN_DIMENSION,
};
pub use solver::astar::AstarSolver;
pub use solver::dijkstra::DijkstraSolver;
pub use solver::{Algorithm, ExplorationEvent, ExplorationTrace, SearchResult, Solver};

use grid_util::point::Point;

/// Solves the maze with the selected algorithm, returning the terminal
/// result and the exploration trace in visitation order. Solving twice on
/// an unchanged grid yields identical results and identical traces.
pub fn solve(
    grid: &MazeGrid,
    source: Point,
    destination: Point,
    algorithm: Algorithm,
) -> Result<(SearchResult, ExplorationTrace)> {
    match algorithm {
        Algorithm::Dijkstra => DijkstraSolver.solve(grid, source, destination),
        Algorithm::Astar => AstarSolver::new().solve(grid, source, destination),
    }
}
