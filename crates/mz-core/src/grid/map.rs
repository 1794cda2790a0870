//! Grid storage
//!
//! A grid is an immutable value: every update returns a new grid. Rows are
//! reference counted, so an update copies the row table and only the row it
//! touches.

use std::fmt;
use std::ops::Index;
use std::sync::Arc;

use super::{Cell, CellUpdate, Point};

/// Rectangular grid of cells indexed `[row][col]`, i.e. `[y][x]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    rows: Vec<Arc<Vec<Cell>>>,
}

impl Grid {
    /// Create a grid filled with wall cells
    pub fn new(width: usize, height: usize) -> Self {
        let row = Arc::new(vec![Cell::wall(); width]);
        Self {
            width,
            height,
            rows: vec![row; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if a point lies anywhere on the grid, border included
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// Get the cell at a point, if it is on the grid
    pub fn get(&self, p: Point) -> Option<&Cell> {
        if self.contains(p) {
            Some(&self.rows[p.y as usize][p.x as usize])
        } else {
            None
        }
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(|row| row.as_slice())
    }

    /// Iterate over all cells in row-major order with their coordinates
    pub fn cells(&self) -> impl Iterator<Item = (Point, &Cell)> {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, cell)| (Point::new(x as i32, y as i32), cell))
        })
    }

    /// Return a new grid with the cell at `p` replaced by `f(cell)`
    ///
    /// Points off the grid leave it unchanged.
    pub fn with_cell(&self, p: Point, f: impl FnOnce(&Cell) -> Cell) -> Grid {
        let mut next = self.clone();
        if self.contains(p) {
            let row = Arc::make_mut(&mut next.rows[p.y as usize]);
            let cell = &mut row[p.x as usize];
            *cell = f(cell);
        }
        next
    }

    /// Return a new grid with a partial update merged into the cell at `p`
    pub fn update(&self, p: Point, update: CellUpdate) -> Grid {
        self.with_cell(p, |cell| cell.apply(update))
    }

    /// Consuming form of [`Grid::update`]
    ///
    /// Rows this grid does not share with another one are written in place,
    /// which keeps long carving folds from copying a row per step.
    pub fn into_updated(mut self, p: Point, update: CellUpdate) -> Grid {
        if self.contains(p) {
            let row = Arc::make_mut(&mut self.rows[p.y as usize]);
            let x = p.x as usize;
            row[x] = row[x].apply(update);
        }
        self
    }

    /// Return a new grid with `f` applied to every cell
    ///
    /// Rows where `f` changes nothing stay shared with `self`.
    pub fn map_cells(&self, f: impl Fn(&Cell) -> Cell) -> Grid {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mapped: Vec<Cell> = row.iter().map(&f).collect();
                if mapped == **row {
                    Arc::clone(row)
                } else {
                    Arc::new(mapped)
                }
            })
            .collect();
        Grid {
            width: self.width,
            height: self.height,
            rows,
        }
    }

    /// Check whether row `y` is the same allocation in both grids
    #[cfg(test)]
    pub(crate) fn shares_row(&self, other: &Grid, y: usize) -> bool {
        match (self.rows.get(y), other.rows.get(y)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Index<usize> for Grid {
    type Output = [Cell];

    fn index(&self, y: usize) -> &[Cell] {
        &self.rows[y]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(Cell::symbol).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
