//! Head-to-head comparison of the two algorithms on one grid snapshot.

use std::cmp::Ordering;
use std::time::{Duration, Instant};

use grid_util::point::Point;
use log::info;

use crate::error::Result;
use crate::maze_grid::MazeGrid;
use crate::solver::astar::AstarSolver;
use crate::solver::dijkstra::DijkstraSolver;
use crate::solver::{Algorithm, SearchResult, Solver};

/// One timed algorithm run within a comparison.
#[derive(Clone, Debug)]
pub struct TimedRun {
    pub result: SearchResult,
    pub duration: Duration,
}

/// Results of racing Dijkstra against A* on the same grid, source and
/// destination. Both runs see the identical snapshot: the runner holds a
/// single shared borrow of the grid for its whole duration, so no wall or
/// endpoint edit can slip in between them.
#[derive(Clone, Debug)]
pub struct Comparison {
    pub dijkstra: TimedRun,
    pub astar: TimedRun,
}

impl Comparison {
    /// The algorithm that finished first, [None] on an exact tie.
    pub fn faster(&self) -> Option<Algorithm> {
        match self.dijkstra.duration.cmp(&self.astar.duration) {
            Ordering::Less => Some(Algorithm::Dijkstra),
            Ordering::Greater => Some(Algorithm::Astar),
            Ordering::Equal => None,
        }
    }

    /// The algorithm that finalized fewer cells, [None] on a tie.
    pub fn fewer_explored(&self) -> Option<Algorithm> {
        match self
            .dijkstra
            .result
            .explored
            .cmp(&self.astar.result.explored)
        {
            Ordering::Less => Some(Algorithm::Dijkstra),
            Ordering::Greater => Some(Algorithm::Astar),
            Ordering::Equal => None,
        }
    }
}

fn timed_run<S: Solver>(
    solver: &S,
    grid: &MazeGrid,
    source: Point,
    destination: Point,
) -> Result<TimedRun> {
    let started = Instant::now();
    let (result, _trace) = solver.solve(grid, source, destination)?;
    let duration = started.elapsed();
    info!(
        "{}: explored {} cells in {:?}",
        solver.name(),
        result.explored,
        duration
    );
    Ok(TimedRun { result, duration })
}

/// Runs Dijkstra then A* back to back without any event emission and
/// reports both results with their wall-clock durations. Any pause between
/// the runs for UI pacing is the caller's business.
pub fn compare(grid: &MazeGrid, source: Point, destination: Point) -> Result<Comparison> {
    let dijkstra = timed_run(&DijkstraSolver, grid, source, destination)?;
    let astar = timed_run(&AstarSolver::new(), grid, source, destination)?;
    Ok(Comparison { dijkstra, astar })
}
