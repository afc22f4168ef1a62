//! Paced replay of a finished search for external rendering.
//!
//! Searching and animating are decoupled: the solvers return a complete
//! exploration trace, and [Replay] turns it into a lazy, throttled frame
//! sequence the renderer pulls at its own pace. Replays are finite and
//! non-restartable; abandoning one stops event delivery and nothing else.

use std::iter::FusedIterator;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use std::vec;

use grid_util::point::Point;

use crate::solver::{ExplorationEvent, ExplorationTrace, SearchResult};

/// A single frame of a replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplayFrame {
    /// A cell was finalized during the search.
    Explored(ExplorationEvent),
    /// An interior cell of the final path, in source-to-destination order.
    PathStep(Point),
}

/// Remote handle that stops an in-flight [Replay] for good.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Replays a solve as frames: every exploration event in visitation order,
/// then the found path with both endpoints dropped. Each frame after the
/// first is preceded by the configured delay.
pub struct Replay {
    frames: vec::IntoIter<ReplayFrame>,
    delay: Duration,
    cancel: CancelToken,
    delivered: bool,
}

impl Replay {
    pub fn new(result: &SearchResult, trace: ExplorationTrace, delay: Duration) -> Replay {
        let mut frames: Vec<ReplayFrame> =
            trace.into_iter().map(ReplayFrame::Explored).collect();
        // Adjacent or coincident endpoints leave no path interior to show.
        if result.path.len() > 2 {
            frames.extend(
                result.path[1..result.path.len() - 1]
                    .iter()
                    .copied()
                    .map(ReplayFrame::PathStep),
            );
        }
        Replay {
            frames: frames.into_iter(),
            delay,
            cancel: CancelToken::default(),
            delivered: false,
        }
    }

    /// Delay tier matching the grid size: bigger grids replay faster so the
    /// total animation time stays tolerable.
    pub fn delay_for(rows: usize, cols: usize) -> Duration {
        let max_dimension = rows.max(cols);
        let millis = if max_dimension >= 25 {
            15
        } else if max_dimension >= 20 {
            25
        } else if max_dimension >= 15 {
            35
        } else {
            50
        };
        Duration::from_millis(millis)
    }

    /// Handle for abandoning the replay from outside the consuming loop.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Frames not yet delivered, ignoring cancellation.
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl Iterator for Replay {
    type Item = ReplayFrame;

    fn next(&mut self) -> Option<ReplayFrame> {
        if self.cancel.is_cancelled() {
            self.frames = Vec::new().into_iter();
            return None;
        }
        if self.frames.as_slice().is_empty() {
            return None;
        }
        if self.delivered && !self.delay.is_zero() {
            thread::sleep(self.delay);
            // The token may have been flipped while we slept.
            if self.cancel.is_cancelled() {
                self.frames = Vec::new().into_iter();
                return None;
            }
        }
        let frame = self.frames.next()?;
        self.delivered = true;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.frames.len()))
    }
}

impl FusedIterator for Replay {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze_grid::MazeGrid;
    use crate::solver::dijkstra::DijkstraSolver;
    use crate::solver::Solver;

    fn solved_5x5() -> (SearchResult, ExplorationTrace) {
        let grid = MazeGrid::new(5, 5);
        DijkstraSolver
            .solve(&grid, Point::new(0, 0), Point::new(4, 4))
            .unwrap()
    }

    #[test]
    fn frames_are_trace_then_path_interior() {
        let (result, trace) = solved_5x5();
        let explored = result.explored;
        let frames: Vec<ReplayFrame> =
            Replay::new(&result, trace.clone(), Duration::ZERO).collect();
        assert_eq!(frames.len(), explored + result.path.len() - 2);
        for (frame, event) in frames.iter().zip(&trace) {
            assert_eq!(*frame, ReplayFrame::Explored(*event));
        }
        let path_frames: Vec<Point> = frames[explored..]
            .iter()
            .map(|f| match f {
                ReplayFrame::PathStep(p) => *p,
                other => panic!("expected a path frame, got {:?}", other),
            })
            .collect();
        assert_eq!(&result.path[1..result.path.len() - 1], &path_frames[..]);
    }

    #[test]
    fn short_paths_have_no_path_frames() {
        let grid = MazeGrid::new(5, 5);
        let (result, trace) = DijkstraSolver
            .solve(&grid, Point::new(1, 1), Point::new(1, 2))
            .unwrap();
        assert_eq!(result.path.len(), 2);
        let frames: Vec<ReplayFrame> = Replay::new(&result, trace, Duration::ZERO).collect();
        assert!(frames
            .iter()
            .all(|f| matches!(f, ReplayFrame::Explored(_))));
    }

    #[test]
    fn cancellation_stops_delivery_for_good() {
        let (result, trace) = solved_5x5();
        let mut replay = Replay::new(&result, trace, Duration::ZERO);
        let token = replay.cancel_token();
        assert!(replay.next().is_some());
        assert!(replay.next().is_some());
        token.cancel();
        assert_eq!(replay.next(), None);
        assert_eq!(replay.next(), None);
        assert_eq!(replay.remaining(), 0);
    }

    #[test]
    fn delay_tiers_match_grid_size() {
        assert_eq!(Replay::delay_for(10, 10), Duration::from_millis(50));
        assert_eq!(Replay::delay_for(15, 5), Duration::from_millis(35));
        assert_eq!(Replay::delay_for(5, 20), Duration::from_millis(25));
        assert_eq!(Replay::delay_for(50, 50), Duration::from_millis(15));
    }
}
