use grid_util::point::Point;
use maze_solver::{solve, Algorithm, MazeGrid, Replay, ReplayFrame};

// Solves a small maze and replays the exploration frame by frame, the way a
// renderer would consume it.

fn main() {
    let mut grid = MazeGrid::new(8, 8);
    for y in 0..6 {
        grid.toggle_wall(Point::new(3, y));
    }
    grid.place_source(Point::new(0, 0));
    grid.place_destination(Point::new(7, 0));
    grid.update();
    println!("{}", grid);

    let (source, destination) = grid.endpoints().unwrap();
    let (result, trace) = solve(&grid, source, destination, Algorithm::Astar).unwrap();
    let delay = Replay::delay_for(grid.rows(), grid.cols());
    for frame in Replay::new(&result, trace, delay) {
        match frame {
            ReplayFrame::Explored(event) => {
                println!("explored {} (#{})", event.position, event.visited_order)
            }
            ReplayFrame::PathStep(p) => println!("path     {}", p),
        }
    }
}
