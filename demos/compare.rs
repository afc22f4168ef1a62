use grid_util::point::Point;
use maze_solver::{compare, Algorithm, MazeGrid, DEFAULT_WALL_PROBABILITY};
use rand::{rngs::StdRng, SeedableRng};

// Races Dijkstra against A* on a random 20x20 maze and prints the numbers
// the two runs produced.

fn main() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut grid = MazeGrid::generate_with(20, 20, DEFAULT_WALL_PROBABILITY, &mut rng);
    let source = Point::new(0, 0);
    let destination = Point::new(19, 19);
    grid.place_source(source);
    grid.place_destination(destination);
    println!("{}", grid);

    let comparison = compare(&grid, source, destination).unwrap();
    println!(
        "{:<10} {:>9} {:>9} {:>12}",
        "algorithm", "distance", "explored", "time"
    );
    for (algorithm, run) in [
        (Algorithm::Dijkstra, &comparison.dijkstra),
        (Algorithm::Astar, &comparison.astar),
    ] {
        println!(
            "{:<10} {:>9} {:>9} {:>12?}",
            algorithm.name(),
            run.result
                .distance()
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_owned()),
            run.result.explored,
            run.duration,
        );
    }
    if let Some(winner) = comparison.fewer_explored() {
        println!("{} explored fewer cells", winner.name());
    }
    if let Some(winner) = comparison.faster() {
        println!("{} finished first", winner.name());
    }
}
