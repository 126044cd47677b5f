use core::fmt;

use itertools::Itertools;
use log::info;
use petgraph::unionfind::UnionFind;
use rand::seq::index;
use rand::Rng;

use crate::coord::Coordinate;
use crate::error::GridError;

/// Binary occupancy state of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Free,
    Blocked,
}

/// [Grid] owns a rectangular map of [Cell] values and answers validity
/// queries over it. In addition to the raw occupancy it maintains
/// [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
/// of the free cells in a [UnionFind] structure, so that route requests
/// between provably disconnected cells can be rejected without flooding the
/// whole map.
///
/// Blocking a free cell can split a component, so mutations that block cells
/// only mark the partition dirty; [update](Self::update) regenerates it.
/// Freeing a cell can only ever merge components and is applied immediately.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl Grid {
    /// Constructs an all-free grid. Fails with [GridError::InvalidDimensions]
    /// if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Grid, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions(rows, cols));
        }
        let mut grid = Grid {
            cells: vec![Cell::Free; rows * cols],
            rows,
            cols,
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        grid.generate_components();
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn get_ix(&self, coord: &Coordinate) -> usize {
        coord.row as usize * self.cols + coord.col as usize
    }

    fn in_bounds(&self, coord: &Coordinate) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as usize) < self.rows
            && (coord.col as usize) < self.cols
    }

    /// The occupancy of `coord`, or [None] if it lies outside the map.
    pub fn get(&self, coord: &Coordinate) -> Option<Cell> {
        if self.in_bounds(coord) {
            Some(self.cells[self.get_ix(coord)])
        } else {
            None
        }
    }

    /// Checks that `coord` is inside the map and currently [Cell::Free].
    ///
    /// This single predicate gates both endpoint validation and search
    /// expansion, so "valid user input" and "traversable cell" cannot
    /// diverge.
    pub fn is_open(&self, coord: &Coordinate) -> bool {
        self.get(coord) == Some(Cell::Free)
    }

    /// Marks every in-bounds coordinate in `coords` as [Cell::Blocked].
    /// Out-of-bounds entries are silently ignored.
    pub fn set_obstacles(&mut self, coords: &[Coordinate]) {
        for coord in coords {
            if !self.in_bounds(coord) {
                continue;
            }
            let ix = self.get_ix(coord);
            if self.cells[ix] == Cell::Free {
                // Blocking can split a component; regenerate lazily.
                self.components_dirty = true;
            }
            self.cells[ix] = Cell::Blocked;
        }
    }

    /// Marks every in-bounds coordinate in `coords` as [Cell::Free].
    /// Out-of-bounds entries are silently ignored.
    pub fn clear_obstacles(&mut self, coords: &[Coordinate]) {
        for coord in coords {
            if !self.in_bounds(coord) {
                continue;
            }
            let ix = self.get_ix(coord);
            self.cells[ix] = Cell::Free;
            // Freeing only ever joins components, so the partition can be
            // maintained in place.
            for neighbour in coord.neumann_neighborhood() {
                if self.is_open(&neighbour) {
                    let neighbour_ix = self.get_ix(&neighbour);
                    self.components.union(ix, neighbour_ix);
                }
            }
        }
    }

    /// Draws `count` distinct free cells uniformly at random, without
    /// replacement and without mutating the grid. Fails with
    /// [GridError::InsufficientFreeCells] if fewer than `count` free cells
    /// remain.
    pub fn random_obstacles<R: Rng>(
        &self,
        rng: &mut R,
        count: usize,
    ) -> Result<Vec<Coordinate>, GridError> {
        let free: Vec<Coordinate> = self
            .coordinates()
            .filter(|coord| self.is_open(coord))
            .collect();
        if count > free.len() {
            return Err(GridError::InsufficientFreeCells(count, free.len()));
        }
        Ok(index::sample(rng, free.len(), count)
            .into_iter()
            .map(|i| free[i])
            .collect())
    }

    /// Checks that `start` and `goal` are known to lie in different
    /// components. Conservative: answers [false] while the partition is
    /// dirty, so callers that skip [update](Self::update) still get correct
    /// search results.
    pub fn unreachable(&self, start: &Coordinate, goal: &Coordinate) -> bool {
        if self.components_dirty {
            return false;
        }
        if !self.in_bounds(start) || !self.in_bounds(goal) {
            return true;
        }
        !self.components.equiv(self.get_ix(start), self.get_ix(goal))
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("components are dirty: regenerating");
            self.generate_components();
        }
    }

    /// Builds a fresh [UnionFind] and unions every adjacent pair of free
    /// cells. Linking down and right covers each adjacency exactly once.
    fn generate_components(&mut self) {
        self.components = UnionFind::new(self.rows * self.cols);
        self.components_dirty = false;
        for row in 0..self.rows as i32 {
            for col in 0..self.cols as i32 {
                let coord = Coordinate::new(row, col);
                if !self.is_open(&coord) {
                    continue;
                }
                let parent_ix = self.get_ix(&coord);
                for neighbour in [
                    Coordinate::new(row + 1, col),
                    Coordinate::new(row, col + 1),
                ] {
                    if self.is_open(&neighbour) {
                        let neighbour_ix = self.get_ix(&neighbour);
                        self.components.union(parent_ix, neighbour_ix);
                    }
                }
            }
        }
    }

    fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        (0..self.rows as i32)
            .cartesian_product(0..self.cols as i32)
            .map(|(row, col)| Coordinate::new(row, col))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows as i32 {
            let values = (0..self.cols as i32)
                .map(|col| !self.is_open(&Coordinate::new(row, col)) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}
