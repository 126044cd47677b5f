use grid_router::{Coordinate, Grid, PathFinder};
use rand::thread_rng;

// Populates a 12x12 grid with 30 random obstacles, then routes between the
// opposite corners. Re-run to get a different map; obstacle placement never
// lands on an occupied cell and never repeats a coordinate.

fn main() {
    let mut rng = thread_rng();
    let mut grid = Grid::new(12, 12).expect("dimensions are positive");

    let obstacles = grid
        .random_obstacles(&mut rng, 30)
        .expect("144 cells leave room for 30 obstacles");
    grid.set_obstacles(&obstacles);

    let start = Coordinate::new(0, 0);
    let goal = Coordinate::new(11, 11);
    // The corners may have been hit by the random sample.
    grid.clear_obstacles(&[start, goal]);
    grid.update();

    println!("Map ('1' marks an obstacle):");
    println!("{}", grid);

    let path = PathFinder::new().find_path(&grid, start, goal);
    if path.is_empty() {
        println!("No route from {} to {}", start, goal);
    } else {
        println!("Route of {} cells:", path.len());
        for coord in path {
            println!("{}", coord);
        }
    }
}
