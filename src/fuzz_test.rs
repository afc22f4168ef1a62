//! Fuzzes the solvers by checking on many random grids that Dijkstra and A*
//! agree with the component structure on path existence and with each other
//! on path length, and that every returned path is walkable.

use super::*;
use grid_util::point::Point;
use rand::prelude::*;

fn random_grid_point(grid: &MazeGrid, rng: &mut StdRng) -> Point {
    Point::new(
        rng.gen_range(0..grid.cols()) as i32,
        rng.gen_range(0..grid.rows()) as i32,
    )
}

fn assert_valid_path(grid: &MazeGrid, path: &[Point], source: Point, destination: Point) {
    assert_eq!(path.first(), Some(&source));
    assert_eq!(path.last(), Some(&destination));
    for pair in path.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert_eq!((a.x - b.x).abs() + (a.y - b.y).abs(), 1);
    }
    let mut seen = std::collections::HashSet::new();
    for p in path {
        assert!(!grid.is_wall(p));
        assert!(seen.insert((p.x, p.y)), "duplicate position {} in path", p);
    }
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(0);
    for i in 0..N_GRIDS {
        let mut grid = MazeGrid::generate_with(N, N, 0.4, &mut rng);
        let source = random_grid_point(&grid, &mut rng);
        let destination = random_grid_point(&grid, &mut rng);
        grid.place_source(source);
        grid.place_destination(destination);
        grid.update();
        let (dijkstra, _) = solve(&grid, source, destination, Algorithm::Dijkstra).unwrap();
        let (astar, _) = solve(&grid, source, destination, Algorithm::Astar).unwrap();
        let connected = grid.reachable(&source, &destination);
        if dijkstra.path_found() != connected || astar.path_found() != connected {
            println!("grid {}:\n{}", i, grid);
            panic!(
                "path existence disagrees with components (dijkstra: {}, astar: {}, connected: {})",
                dijkstra.path_found(),
                astar.path_found(),
                connected
            );
        }
        if connected {
            assert_eq!(dijkstra.distance(), astar.distance());
            assert_valid_path(&grid, &dijkstra.path, source, destination);
            assert_valid_path(&grid, &astar.path, source, destination);
            assert!(astar.explored <= N * N);
        } else {
            assert_eq!(dijkstra.distance(), None);
            assert_eq!(astar.distance(), None);
        }
        assert!(dijkstra.explored >= 1);
        assert!(dijkstra.explored <= N * N);
    }
}

/// Solving the same grid twice is bit-for-bit reproducible, traces included.
#[test]
fn fuzz_idempotence() {
    const N_GRIDS: usize = 100;
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..N_GRIDS {
        let mut grid = MazeGrid::generate_with(12, 12, 0.3, &mut rng);
        let source = random_grid_point(&grid, &mut rng);
        let destination = random_grid_point(&grid, &mut rng);
        grid.place_source(source);
        grid.place_destination(destination);
        for algorithm in [Algorithm::Dijkstra, Algorithm::Astar] {
            let (first, first_trace) = solve(&grid, source, destination, algorithm).unwrap();
            let (second, second_trace) = solve(&grid, source, destination, algorithm).unwrap();
            assert_eq!(first, second);
            assert_eq!(first_trace, second_trace);
        }
    }
}
