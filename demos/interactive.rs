use std::io::{self, BufRead, Write};

use grid_router::{Coordinate, Grid, PathFinder};
use rand::thread_rng;

// Interactive routing session on a 12x12 map: populate obstacles manually or
// at random, optionally remove some again, then pick a start and a goal and
// get the shortest route drawn onto the map. Coordinates are entered as
// `row,col`.

const ROWS: usize = 12;
const COLS: usize = 12;

const RED: &str = "\x1b[1;31m";
const GREEN: &str = "\x1b[1;32m";
const RESET: &str = "\x1b[0m";

type InputLines<'a> = io::Lines<io::StdinLock<'a>>;

fn prompt(lines: &mut InputLines<'_>, text: &str) -> io::Result<String> {
    print!("{}", text);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => line,
        None => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed")),
    }
}

fn parse_coordinate(input: &str) -> Option<Coordinate> {
    let (row, col) = input.trim().split_once(',')?;
    let row = row.trim().parse().ok()?;
    let col = col.trim().parse().ok()?;
    Some(Coordinate::new(row, col))
}

/// Reads `row,col` entries until the user types `done`.
fn read_coordinates(lines: &mut InputLines<'_>, text: &str) -> io::Result<Vec<Coordinate>> {
    let mut coords = Vec::new();
    loop {
        let line = prompt(lines, text)?;
        if line.trim().eq_ignore_ascii_case("done") {
            return Ok(coords);
        }
        match parse_coordinate(&line) {
            Some(coord) => coords.push(coord),
            None => println!("Expected 'row,col' or 'done'."),
        }
    }
}

/// Reads a coordinate until it names an open cell of `grid`.
fn read_endpoint(lines: &mut InputLines<'_>, grid: &Grid, text: &str) -> io::Result<Coordinate> {
    loop {
        let line = prompt(lines, text)?;
        match parse_coordinate(&line) {
            Some(coord) if grid.is_open(&coord) => return Ok(coord),
            Some(_) => println!("Coordinate is out of bounds or an obstacle. Try again."),
            None => println!("Expected 'row,col'. Try again."),
        }
    }
}

/// Draws the map with row and column indices: obstacles as a red `#`, route
/// cells as a green `*`, free cells as `.`.
fn render(grid: &Grid, route: &[Coordinate]) -> String {
    let mut out = String::from("    ");
    for col in 0..grid.cols() {
        out.push_str(&format!("{:2} ", col));
    }
    out.push('\n');
    for row in 0..grid.rows() as i32 {
        out.push_str(&format!("{:2}  ", row));
        for col in 0..grid.cols() as i32 {
            let coord = Coordinate::new(row, col);
            if !grid.is_open(&coord) {
                out.push_str(&format!("{RED}#{RESET}  "));
            } else if route.contains(&coord) {
                out.push_str(&format!("{GREEN}*{RESET}  "));
            } else {
                out.push_str(".  ");
            }
        }
        out.push('\n');
    }
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut grid = Grid::new(ROWS, COLS)?;

    println!("Initial map");
    print!("{}", render(&grid, &[]));

    let mode = prompt(&mut lines, "Obstacle entry mode (1: manual, 2: random): ")?;
    match mode.trim() {
        "1" => {
            let obstacles =
                read_coordinates(&mut lines, "Obstacle coordinate (row,col) or 'done': ")?;
            grid.set_obstacles(&obstacles);
        }
        "2" => loop {
            let line = prompt(&mut lines, "Number of random obstacles: ")?;
            let count: usize = match line.trim().parse() {
                Ok(count) => count,
                Err(_) => {
                    println!("Expected a number.");
                    continue;
                }
            };
            match grid.random_obstacles(&mut thread_rng(), count) {
                Ok(obstacles) => {
                    grid.set_obstacles(&obstacles);
                    break;
                }
                Err(err) => println!("{}", err),
            }
        },
        _ => println!("No obstacles added."),
    }

    println!("\nMap with obstacles:");
    print!("{}", render(&grid, &[]));

    loop {
        let answer = prompt(&mut lines, "Remove any obstacles? (y/n): ")?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            break;
        }
        let cleared =
            read_coordinates(&mut lines, "Coordinate to clear (row,col) or 'done': ")?;
        grid.clear_obstacles(&cleared);
        println!("\nUpdated map:");
        print!("{}", render(&grid, &[]));
    }

    let start = read_endpoint(&mut lines, &grid, "Start coordinate (row,col): ")?;
    let goal = read_endpoint(&mut lines, &grid, "Goal coordinate (row,col): ")?;

    grid.update();
    let route = PathFinder::new().find_path(&grid, start, goal);
    if route.is_empty() {
        println!("\nNo route from {} to {}.", start, goal);
    } else {
        println!("\nMap with the shortest route");
        print!("{}", render(&grid, &route));
    }

    Ok(())
}
