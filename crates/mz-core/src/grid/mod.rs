//! Grid primitives
//!
//! Cell and grid construction, point-wise updates and the coordinate rules
//! shared by every carving and editing stage.

mod cell;
mod map;
mod point;

pub use cell::{Cell, CellType, CellUpdate};
pub use map::Grid;
pub use point::Point;

/// Create a grid of `height` rows by `width` columns, all walls
pub fn create_grid(width: usize, height: usize) -> Grid {
    Grid::new(width, height)
}

/// Merge a partial update into a cell
///
/// The result has `is_path` set if the cell was already a path or the update
/// makes it one. Use [`Cell::set_wall`] to really turn a path back into wall.
pub fn update_cell(cell: &Cell, update: CellUpdate) -> Cell {
    cell.apply(update)
}

/// Return a new grid with the cell at `point` updated
pub fn update_grid_cell(grid: &Grid, point: Point, update: CellUpdate) -> Grid {
    grid.update(point, update)
}

/// Check whether a point may be carved or edited
///
/// The lower bound keeps row 0 and column 0 as wall: `0 < x < width` and
/// `0 < y < height`.
pub fn is_valid_coordinate(p: Point, width: usize, height: usize) -> bool {
    p.x > 0 && (p.x as usize) < width && p.y > 0 && (p.y as usize) < height
}
