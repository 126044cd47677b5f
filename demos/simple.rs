use grid_router::{Coordinate, Grid, PathFinder};

// In this demo a route is found on a 5x5 grid with shape
//  ___________
// | S         |
// |   # # #   |
// |           |
// |   # # #   |
// |         G |
//  -----------
// where
// - # marks an obstacle
// - S marks the start
// - G marks the goal
//
// Cells have a 4-neighbourhood and unit step costs.

fn main() {
    let mut grid = Grid::new(5, 5).expect("dimensions are positive");
    grid.set_obstacles(&[
        Coordinate::new(1, 1),
        Coordinate::new(1, 2),
        Coordinate::new(1, 3),
        Coordinate::new(3, 1),
        Coordinate::new(3, 2),
        Coordinate::new(3, 3),
    ]);
    grid.update();
    println!("{}", grid);

    let start = Coordinate::new(0, 0);
    let goal = Coordinate::new(4, 4);
    let path = PathFinder::new().find_path(&grid, start, goal);
    println!("Route:");
    for coord in path {
        println!("{}", coord);
    }
}
