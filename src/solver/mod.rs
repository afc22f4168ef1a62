use grid_util::point::Point;
use log::info;

use crate::error::{Result, SolveError};
use crate::maze_grid::MazeGrid;
use crate::search::best_first_search;

pub mod astar;
pub mod dijkstra;

/// Marks a cell as finalized at a given rank of the visitation order.
/// `visited_order` is 1-based; the last event's order equals the explored
/// count of the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExplorationEvent {
    pub position: Point,
    pub visited_order: u32,
}

/// The ordered record of finalized cells a search hands to the animator.
pub type ExplorationTrace = Vec<ExplorationEvent>;

/// Terminal outcome of a search. An empty path means no path exists;
/// `explored` counts finalized cells either way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Source-to-destination path, both endpoints included. A
    /// source-equals-destination solve yields a single-element path.
    pub path: Vec<Point>,
    pub explored: usize,
}

impl SearchResult {
    /// Hop count of the found path, [None] when no path was found.
    pub fn distance(&self) -> Option<u32> {
        if self.path.is_empty() {
            None
        } else {
            Some(self.path.len() as u32 - 1)
        }
    }

    pub fn path_found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Algorithm selector for [solve](crate::solve) and the comparison runner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Dijkstra,
    Astar,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::Astar => "A*",
        }
    }
}

fn check_endpoint(grid: &MazeGrid, p: Point) -> Result<()> {
    if !grid.in_bounds(&p) {
        return Err(SolveError::OutOfBounds(p));
    }
    if grid.is_wall(&p) {
        return Err(SolveError::WallEndpoint(p));
    }
    Ok(())
}

pub trait Solver {
    /// Estimated remaining cost from `p` to `goal`. Zero keys the frontier
    /// by cumulative distance alone; an admissible estimate keeps the found
    /// path optimal while steering exploration towards the goal.
    fn heuristic(&self, grid: &MazeGrid, p: &Point, goal: &Point) -> i32;

    fn name(&self) -> &'static str;

    /// Runs the search from `source` to `destination`, returning the
    /// terminal result together with the exploration trace in visitation
    /// order. Endpoint preconditions fail fast; an unreachable destination
    /// is a regular outcome with an empty path and the full trace of the
    /// drained frontier.
    fn solve(
        &self,
        grid: &MazeGrid,
        source: Point,
        destination: Point,
    ) -> Result<(SearchResult, ExplorationTrace)> {
        check_endpoint(grid, source)?;
        check_endpoint(grid, destination)?;
        let run = best_first_search(
            &source,
            |node| grid.open_neighbors(node),
            |p| self.heuristic(grid, p, &destination),
            |p| *p == destination,
        );
        if let Some(cost) = run.cost {
            debug_assert_eq!(cost, run.path.len() as i32 - 1);
            info!(
                "{}: found a {}-step path after exploring {} cells",
                self.name(),
                cost,
                run.visited.len()
            );
        } else {
            info!(
                "{}: no path from {} to {} after exploring {} cells",
                self.name(),
                source,
                destination,
                run.visited.len()
            );
        }
        let trace: ExplorationTrace = run
            .visited
            .iter()
            .enumerate()
            .map(|(i, p)| ExplorationEvent {
                position: *p,
                visited_order: i as u32 + 1,
            })
            .collect();
        let result = SearchResult {
            path: run.path,
            explored: trace.len(),
        };
        Ok((result, trace))
    }
}
