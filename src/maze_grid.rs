use core::fmt;
use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use rand::Rng;

use crate::error::{Result, SolveError};

/// Smallest grid dimension the external collaborator hands over.
pub const MIN_DIMENSION: usize = 5;
/// Largest grid dimension the external collaborator hands over.
pub const MAX_DIMENSION: usize = 50;
/// Wall density used by maze generation when the caller has no opinion.
pub const DEFAULT_WALL_PROBABILITY: f64 = 0.3;

/// What a cell currently holds. Source and destination are registered on at
/// most one cell each; the two may coincide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Wall,
    Source,
    Destination,
}

/// Editing mode for [apply_input](MazeGrid::apply_input), one variant per
/// kind of cell edit a caller can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionMode {
    SetSource,
    SetDestination,
    ToggleWall,
}

/// [MazeGrid] holds the wall occupancy in a [BoolGrid] ([true] is blocked),
/// the placed endpoints, and connected components in a [UnionFind] structure
/// for cheap reachability queries. Positions are [Point]s with `x` the
/// column and `y` the row. The grid stays immutable for the duration of one
/// search: solving borrows it shared.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    walls: BoolGrid,
    source: Option<Point>,
    destination: Option<Point>,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl MazeGrid {
    /// An open grid without walls or endpoints.
    pub fn new(rows: usize, cols: usize) -> MazeGrid {
        debug_assert!((MIN_DIMENSION..=MAX_DIMENSION).contains(&rows));
        debug_assert!((MIN_DIMENSION..=MAX_DIMENSION).contains(&cols));
        let mut grid = MazeGrid {
            walls: BoolGrid::new(cols, rows, false),
            source: None,
            destination: None,
            components: UnionFind::new(cols * rows),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    /// Random maze: each cell independently becomes a wall with the given
    /// probability. Endpoints start unset.
    pub fn generate(rows: usize, cols: usize, wall_probability: f64) -> MazeGrid {
        MazeGrid::generate_with(rows, cols, wall_probability, &mut rand::thread_rng())
    }

    /// Seedable variant of [generate](MazeGrid::generate), used wherever a
    /// reproducible maze is needed.
    pub fn generate_with<R: Rng>(
        rows: usize,
        cols: usize,
        wall_probability: f64,
        rng: &mut R,
    ) -> MazeGrid {
        debug_assert!((MIN_DIMENSION..=MAX_DIMENSION).contains(&rows));
        debug_assert!((MIN_DIMENSION..=MAX_DIMENSION).contains(&cols));
        let mut grid = MazeGrid {
            walls: BoolGrid::new(cols, rows, false),
            source: None,
            destination: None,
            components: UnionFind::new(cols * rows),
            components_dirty: false,
        };
        for y in 0..rows {
            for x in 0..cols {
                if rng.gen_bool(wall_probability) {
                    grid.walls.set(x, y, true);
                }
            }
        }
        grid.generate_components();
        grid
    }

    pub fn rows(&self) -> usize {
        self.walls.height()
    }

    pub fn cols(&self) -> usize {
        self.walls.width()
    }

    pub fn in_bounds(&self, p: &Point) -> bool {
        p.x >= 0 && p.y >= 0 && self.walls.index_in_bounds(p.x as usize, p.y as usize)
    }

    pub fn is_wall(&self, p: &Point) -> bool {
        self.in_bounds(p) && self.walls.get(p.x as usize, p.y as usize)
    }

    pub fn source(&self) -> Option<Point> {
        self.source
    }

    pub fn destination(&self) -> Option<Point> {
        self.destination
    }

    /// Both endpoints, or the precondition error that gates a solve.
    pub fn endpoints(&self) -> Result<(Point, Point)> {
        let source = self.source.ok_or(SolveError::MissingSource)?;
        let destination = self.destination.ok_or(SolveError::MissingDestination)?;
        Ok((source, destination))
    }

    /// The solve-button predicate: true once both endpoints are placed.
    pub fn ready_to_solve(&self) -> bool {
        self.source.is_some() && self.destination.is_some()
    }

    pub fn kind_of(&self, p: &Point) -> CellKind {
        debug_assert!(self.in_bounds(p));
        if self.source == Some(*p) {
            CellKind::Source
        } else if self.destination == Some(*p) {
            CellKind::Destination
        } else if self.is_wall(p) {
            CellKind::Wall
        } else {
            CellKind::Empty
        }
    }

    /// In-bounds cardinal neighbours in the fixed order up, down, left,
    /// right. The order is load bearing: it decides which of two
    /// equal-priority cells a search finalizes first.
    pub fn neighbors(&self, p: &Point) -> Vec<Point> {
        [
            Point::new(p.x, p.y - 1),
            Point::new(p.x, p.y + 1),
            Point::new(p.x - 1, p.y),
            Point::new(p.x + 1, p.y),
        ]
        .into_iter()
        .filter(|n| self.in_bounds(n))
        .collect()
    }

    /// Traversable neighbours with their unit edge cost; the successor
    /// function of both solvers.
    pub fn open_neighbors(&self, p: &Point) -> Vec<(Point, i32)> {
        self.neighbors(p)
            .into_iter()
            .filter(|n| !self.is_wall(n))
            .map(|n| (n, 1))
            .collect()
    }

    /// Registers the source at `p`, clearing any wall there. A previous
    /// source simply reverts to whatever else the cell holds.
    pub fn place_source(&mut self, p: Point) {
        debug_assert!(self.in_bounds(&p));
        self.clear_wall(p);
        self.source = Some(p);
    }

    /// Registers the destination at `p`, clearing any wall there.
    pub fn place_destination(&mut self, p: Point) {
        debug_assert!(self.in_bounds(&p));
        self.clear_wall(p);
        self.destination = Some(p);
    }

    /// Flips the wall state of `p`. Refused on the source or destination
    /// cell, in which case the grid is unchanged and [false] comes back.
    pub fn toggle_wall(&mut self, p: Point) -> bool {
        debug_assert!(self.in_bounds(&p));
        if self.source == Some(p) || self.destination == Some(p) {
            return false;
        }
        let blocked = !self.is_wall(&p);
        self.set_wall_state(p, blocked);
        true
    }

    /// Single dispatch point for cell edits, keeping whatever drives the
    /// grid (clicks, scripted input) out of the model.
    pub fn apply_input(&mut self, mode: SelectionMode, p: Point) {
        match mode {
            SelectionMode::SetSource => self.place_source(p),
            SelectionMode::SetDestination => self.place_destination(p),
            SelectionMode::ToggleWall => {
                self.toggle_wall(p);
            }
        }
    }

    fn clear_wall(&mut self, p: Point) {
        if self.is_wall(&p) {
            self.set_wall_state(p, false);
        }
    }

    /// Updates a wall cell. Joins newly connected components and flags the
    /// components as dirty if they are (potentially) broken apart.
    fn set_wall_state(&mut self, p: Point, blocked: bool) {
        let (x, y) = (p.x as usize, p.y as usize);
        if self.walls.get(x, y) != blocked && blocked {
            self.components_dirty = true;
        } else {
            let p_ix = self.walls.get_ix(x, y);
            for n in self.neighbors(&p) {
                if !self.is_wall(&n) {
                    self.components
                        .union(p_ix, self.walls.get_ix(n.x as usize, n.y as usize));
                }
            }
        }
        self.walls.set(x, y, blocked);
    }

    /// Checks if `a` and `b` sit on the same open component. Stale after
    /// wall edits until [update](MazeGrid::update) runs.
    pub fn reachable(&self, a: &Point, b: &Point) -> bool {
        !self.unreachable(a, b)
    }

    /// Checks if `a` and `b` are not on the same component.
    pub fn unreachable(&self, a: &Point, b: &Point) -> bool {
        if self.in_bounds(a) && self.in_bounds(b) {
            let a_ix = self.walls.get_ix(a.x as usize, a.y as usize);
            let b_ix = self.walls.get_ix(b.x as usize, b.y as usize);
            !self.components.equiv(a_ix, b_ix)
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open grid
    /// neighbours to the same components.
    pub fn generate_components(&mut self) {
        info!("generating connected components");
        let w = self.cols();
        let h = self.rows();
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for y in 0..h {
            for x in 0..w {
                if !self.walls.get(x, y) {
                    let parent_ix = self.walls.get_ix(x, y);
                    let p = Point::new(x as i32, y as i32);
                    for n in [Point::new(p.x + 1, p.y), Point::new(p.x, p.y + 1)] {
                        if self.in_bounds(&n) && !self.is_wall(&n) {
                            self.components
                                .union(parent_ix, self.walls.get_ix(n.x as usize, n.y as usize));
                        }
                    }
                }
            }
        }
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.rows() {
            for x in 0..self.cols() {
                let p = Point::new(x as i32, y as i32);
                let c = match self.kind_of(&p) {
                    CellKind::Source => 'S',
                    CellKind::Destination => 'G',
                    CellKind::Wall => '#',
                    CellKind::Empty => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
