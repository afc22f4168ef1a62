use grid_util::point::Point;

use crate::maze_grid::MazeGrid;
use crate::solver::Solver;

/// A* search keyed by cumulative distance plus the Manhattan distance to the
/// goal, which is admissible and consistent on a 4-directional unit-cost
/// grid.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Scales the heuristic. 1.0 keeps the estimate admissible; larger
    /// values explore less at the price of possibly suboptimal paths.
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> Self {
        AstarSolver::new()
    }
}

impl Solver for AstarSolver {
    fn heuristic(&self, _: &MazeGrid, p: &Point, goal: &Point) -> i32 {
        let manhattan = (p.x - goal.x).abs() + (p.y - goal.y).abs();
        (manhattan as f32 * self.heuristic_factor) as i32
    }

    fn name(&self) -> &'static str {
        "A*"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Asserts that the case in which source and destination are equal is
    /// handled correctly.
    #[test]
    fn equal_start_goal() {
        let grid = MazeGrid::new(5, 5);
        let start = Point::new(2, 2);
        let (result, trace) = AstarSolver::new().solve(&grid, start, start).unwrap();
        assert_eq!(result.path, vec![start]);
        assert_eq!(result.distance(), Some(0));
        assert_eq!(result.explored, 1);
        assert_eq!(trace.len(), 1);
        assert_eq!(trace[0].position, start);
    }

    /// Asserts that the optimal 4-step solution is found.
    #[test]
    fn solve_simple_problem() {
        // S..
        // .#.
        // ..G
        let mut grid = MazeGrid::new(5, 5);
        grid.toggle_wall(Point::new(1, 1));
        let start = Point::new(0, 0);
        let end = Point::new(2, 2);
        let (result, _) = AstarSolver::new().solve(&grid, start, end).unwrap();
        assert_eq!(result.distance(), Some(4));
    }

    #[test]
    fn test_complex() {
        let mut grid = MazeGrid::new(10, 10);
        for p in [
            Point::new(1, 1),
            Point::new(5, 0),
            Point::new(0, 5),
            Point::new(8, 8),
        ] {
            grid.toggle_wall(p);
        }
        let start = Point::new(0, 0);
        let end = Point::new(7, 7);
        let (result, _) = AstarSolver::new().solve(&grid, start, end).unwrap();
        // Manhattan distance; the scattered walls force no detour.
        assert_eq!(result.distance(), Some(14));
        assert_eq!(result.path.len(), 15);
    }

    /// The heuristic pulls the search straight down a corridor-free row.
    #[test]
    fn heuristic_prunes_exploration() {
        let grid = MazeGrid::new(5, 5);
        let (result, _) = AstarSolver::new()
            .solve(&grid, Point::new(0, 0), Point::new(4, 0))
            .unwrap();
        assert_eq!(result.distance(), Some(4));
        assert_eq!(result.explored, 5);
    }
}
