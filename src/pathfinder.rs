use log::info;

use crate::astar::astar;
use crate::coord::Coordinate;
use crate::grid::Grid;

/// Computes shortest routes over a [Grid] using
/// [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with unit step
/// costs over the 4-neighbourhood, guided by the Manhattan distance
/// heuristic. Manhattan distance never overestimates on such a grid and
/// satisfies the triangle inequality, so the first goal pop is optimal and
/// the search can stop there.
///
/// A [PathFinder] holds no state of its own; all search bookkeeping is
/// created per [find_path](Self::find_path) call and discarded when it
/// returns.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathFinder;

impl PathFinder {
    pub fn new() -> PathFinder {
        PathFinder
    }

    fn heuristic(&self, node: &Coordinate, goal: &Coordinate) -> i32 {
        node.manhattan_distance(goal)
    }

    fn successors(&self, grid: &Grid, node: &Coordinate) -> Vec<(Coordinate, i32)> {
        node.neumann_neighborhood()
            .into_iter()
            .filter(|neighbour| grid.is_open(neighbour))
            .map(|neighbour| (neighbour, 1))
            .collect()
    }

    /// Computes a shortest path from `start` to `goal`, both inclusive.
    ///
    /// Returns an empty vector when no path exists; absence of a path is a
    /// normal outcome, not an error. `start` and `goal` are expected to be
    /// open cells. Validate with [Grid::is_open] before calling, as the
    /// result is unspecified otherwise.
    pub fn find_path(&self, grid: &Grid, start: Coordinate, goal: Coordinate) -> Vec<Coordinate> {
        if grid.unreachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return Vec::new();
        }
        astar(
            &start,
            |node| self.successors(grid, node),
            |node| self.heuristic(node, &goal),
            |node| *node == goal,
        )
        .map(|(path, _cost)| path)
        .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid(rows: usize, cols: usize) -> Grid {
        Grid::new(rows, cols).unwrap()
    }

    /// Every consecutive pair differs by one cardinal step and every cell is
    /// open.
    fn assert_valid_path(grid: &Grid, path: &[Coordinate]) {
        for coord in path {
            assert!(grid.is_open(coord), "path crosses blocked cell {}", coord);
        }
        for pair in path.windows(2) {
            assert_eq!(pair[0].manhattan_distance(&pair[1]), 1);
        }
    }

    #[test]
    fn unobstructed_path_has_manhattan_length() {
        let grid = open_grid(8, 8);
        let finder = PathFinder::new();
        let start = Coordinate::new(1, 2);
        let goal = Coordinate::new(6, 7);
        let path = finder.find_path(&grid, start, goal);
        assert_eq!(path.len() as i32, start.manhattan_distance(&goal) + 1);
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        assert_valid_path(&grid, &path);
    }

    #[test]
    fn start_equals_goal() {
        let grid = open_grid(5, 5);
        let finder = PathFinder::new();
        let start = Coordinate::new(2, 3);
        assert_eq!(finder.find_path(&grid, start, start), vec![start]);
    }

    #[test]
    fn single_cell_grid() {
        let grid = open_grid(1, 1);
        let finder = PathFinder::new();
        let origin = Coordinate::new(0, 0);
        assert_eq!(finder.find_path(&grid, origin, origin), vec![origin]);
    }

    /// 5x5 grid with two partial walls:
    ///  ___________
    /// | S         |
    /// |   # # #   |
    /// |           |
    /// |   # # #   |
    /// |         G |
    ///  -----------
    /// The detour still admits a Manhattan-length route along the border.
    #[test]
    fn routes_around_partial_walls() {
        let mut grid = open_grid(5, 5);
        let obstacles = [
            Coordinate::new(1, 1),
            Coordinate::new(1, 2),
            Coordinate::new(1, 3),
            Coordinate::new(3, 1),
            Coordinate::new(3, 2),
            Coordinate::new(3, 3),
        ];
        grid.set_obstacles(&obstacles);
        grid.update();
        let finder = PathFinder::new();
        let path = finder.find_path(&grid, Coordinate::new(0, 0), Coordinate::new(4, 4));
        assert_eq!(path.len(), 9);
        assert_valid_path(&grid, &path);
        for obstacle in &obstacles {
            assert!(!path.contains(obstacle));
        }
    }

    /// A full wall across row 1 leaves no route from row 0 to row 2.
    #[test]
    fn full_wall_yields_empty_path() {
        let mut grid = open_grid(3, 3);
        grid.set_obstacles(&[
            Coordinate::new(1, 0),
            Coordinate::new(1, 1),
            Coordinate::new(1, 2),
        ]);
        grid.update();
        let finder = PathFinder::new();
        let path = finder.find_path(&grid, Coordinate::new(0, 0), Coordinate::new(2, 2));
        assert!(path.is_empty());
    }

    /// Without an `update` call the component precheck stands down and the
    /// search itself must discover the dead end.
    #[test]
    fn full_wall_yields_empty_path_with_stale_components() {
        let mut grid = open_grid(3, 3);
        grid.set_obstacles(&[
            Coordinate::new(1, 0),
            Coordinate::new(1, 1),
            Coordinate::new(1, 2),
        ]);
        let finder = PathFinder::new();
        let path = finder.find_path(&grid, Coordinate::new(0, 0), Coordinate::new(2, 2));
        assert!(path.is_empty());
    }

    /// Ties on estimated cost resolve towards the lexicographically smaller
    /// coordinate, making the returned path reproducible.
    #[test]
    fn tie_breaking_is_deterministic() {
        let grid = open_grid(2, 2);
        let finder = PathFinder::new();
        let path = finder.find_path(&grid, Coordinate::new(0, 0), Coordinate::new(1, 1));
        assert_eq!(
            path,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(1, 1),
            ]
        );
    }

    #[test]
    fn detour_exceeds_manhattan_distance() {
        //  _______
        // |     S |
        // |   # # |
        // |     G |
        //  -------
        // Row 1 is open only at column 0, forcing a 6-step detour where the
        // Manhattan distance is 2.
        let mut grid = open_grid(3, 3);
        grid.set_obstacles(&[Coordinate::new(1, 1), Coordinate::new(1, 2)]);
        grid.update();
        let finder = PathFinder::new();
        let start = Coordinate::new(0, 2);
        let goal = Coordinate::new(2, 2);
        let path = finder.find_path(&grid, start, goal);
        assert_eq!(path.len(), 7);
        assert_valid_path(&grid, &path);
    }
}
