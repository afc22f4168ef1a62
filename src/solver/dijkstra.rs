use grid_util::point::Point;

use crate::maze_grid::MazeGrid;
use crate::solver::Solver;

/// Uniform-cost search: the frontier key is the cumulative distance alone.
/// On a unit-cost grid this finalizes cells in hop-count order, but the
/// priority structure is kept as-is since it fixes the exploration trace.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl Solver for DijkstraSolver {
    fn heuristic(&self, _: &MazeGrid, _: &Point, _: &Point) -> i32 {
        0
    }

    fn name(&self) -> &'static str {
        "Dijkstra"
    }
}
