use grid_util::point::Point;
use maze_solver::{solve, Algorithm, MazeGrid};

// In this example a path is found on a 5x5 grid with shape
//  _____
// |S    |
// |###  |
// |     |
// |  ###|
// |    G|
//  ―――――
// where
// - # marks a wall
// - S marks the source
// - G marks the destination
//
// Cells have a 4-neighborhood.

fn main() {
    let mut grid = MazeGrid::new(5, 5);
    for x in 0..3 {
        grid.toggle_wall(Point::new(x, 1));
    }
    for x in 2..5 {
        grid.toggle_wall(Point::new(x, 3));
    }
    grid.place_source(Point::new(0, 0));
    grid.place_destination(Point::new(4, 4));
    grid.update();
    println!("{}", grid);
    let (source, destination) = grid.endpoints().unwrap();
    let (result, _trace) = solve(&grid, source, destination, Algorithm::Astar).unwrap();
    println!("Path ({} steps):", result.distance().unwrap());
    for p in result.path {
        println!("{:?}", p);
    }
}
