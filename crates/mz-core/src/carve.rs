//! Path carving
//!
//! Turns coordinates into walkable cells. Points outside the carvable
//! interior are dropped silently. Carving is monotone: a carved cell stays a
//! path and loses any enemy flag.

use crate::geometry::{get_path_coordinates, interpolate_coordinates, path_neighbors};
use crate::grid::{CellType, CellUpdate, Grid, Point, is_valid_coordinate};

/// Carve every valid point in `coordinates`
pub fn carve_path_at_coordinates(
    grid: &Grid,
    coordinates: &[Point],
    width: usize,
    height: usize,
) -> Grid {
    carve_points(grid.clone(), coordinates.iter().copied(), width, height)
}

/// Carve a square block of side `path_width` around `center`
pub fn carve_path_with_width(
    grid: &Grid,
    center: Point,
    width: usize,
    height: usize,
    path_width: u8,
) -> Grid {
    carve_block(grid.clone(), center, width, height, path_width)
}

/// Carve a corridor of `path_width` along the line from `from` to `to`
///
/// A diagonal step also carves the corner at `(next.x, prev.y)` so the
/// corridor stays 4-connected at every width.
pub fn carve_path_between(
    grid: &Grid,
    from: Point,
    to: Point,
    width: usize,
    height: usize,
    path_width: u8,
) -> Grid {
    let line = interpolate_coordinates(from, to);
    let corners = line.windows(2).filter_map(|step| match *step {
        [prev, next] if prev.x != next.x && prev.y != next.y => Some(Point::new(next.x, prev.y)),
        _ => None,
    });

    line.iter()
        .copied()
        .chain(corners)
        .fold(grid.clone(), |acc, p| {
            carve_block(acc, p, width, height, path_width)
        })
}

/// Owned-grid form of [`carve_path_with_width`] for folds
pub(crate) fn carve_block(
    grid: Grid,
    center: Point,
    width: usize,
    height: usize,
    path_width: u8,
) -> Grid {
    carve_points(grid, get_path_coordinates(center, path_width), width, height)
}

fn carve_points(
    grid: Grid,
    points: impl IntoIterator<Item = Point>,
    width: usize,
    height: usize,
) -> Grid {
    points
        .into_iter()
        .filter(|&p| is_valid_coordinate(p, width, height))
        .fold(grid, |acc, p| acc.into_updated(p, CellUpdate::carve()))
}

/// Count the 4-directional neighbors of `point` that are paths
pub fn count_path_neighbors(grid: &Grid, point: Point, width: usize, height: usize) -> usize {
    path_neighbors(point, width, height)
        .into_iter()
        .filter(|&p| {
            grid.get(p)
                .is_some_and(|cell| cell.cell_type == CellType::Path)
        })
        .count()
}
