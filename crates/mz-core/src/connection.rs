//! Connectivity
//!
//! Forces a corridor between start and end, reopens walls to add loops to
//! the maze, and checks reachability over path cells.

use std::collections::VecDeque;

use log::debug;

use crate::carve::{carve_block, carve_path_between, count_path_neighbors};
use crate::config::MazeConfig;
use crate::consts::DIRECTIONS;
use crate::grid::{CellType, Grid, Point};
use crate::rng::RandomSource;

/// Carve a direct corridor from `start` to `end`
///
/// Works whether or not either point sits on the maze lattice.
pub fn ensure_connectivity(
    grid: &Grid,
    start: Point,
    end: Point,
    width: usize,
    height: usize,
    path_width: u8,
) -> Grid {
    carve_path_between(grid, start, end, width, height, path_width)
}

/// Every wall cell on the grid, border included
fn extra_connection_candidates(grid: &Grid) -> Vec<Point> {
    grid.cells()
        .filter(|(_, cell)| cell.cell_type == CellType::Wall)
        .map(|(p, _)| p)
        .collect()
}

/// Reopen random walls next to two or more paths, using default tuning
pub fn apply_extra_connections<R: RandomSource>(
    grid: &Grid,
    width: usize,
    height: usize,
    path_width: u8,
    rng: &mut R,
) -> Grid {
    apply_extra_connections_with(grid, width, height, path_width, &MazeConfig::default(), rng)
}

/// Reopen random walls next to two or more paths
///
/// Draws `floor(width * height * density)` walls with replacement. A draw is
/// kept when it touches at least two paths on the incoming grid and passes
/// the probability roll. Kept walls are carved in draw order at the path
/// width.
pub fn apply_extra_connections_with<R: RandomSource>(
    grid: &Grid,
    width: usize,
    height: usize,
    path_width: u8,
    config: &MazeConfig,
    rng: &mut R,
) -> Grid {
    let connection_count = config.connection_count(width, height);
    if connection_count == 0 {
        return grid.clone();
    }

    let candidates = extra_connection_candidates(grid);
    let drawn: Vec<Point> = (0..connection_count)
        .filter_map(|_| rng.choose(&candidates).copied())
        .collect();

    let kept: Vec<Point> = drawn
        .into_iter()
        .filter(|&p| {
            count_path_neighbors(grid, p, width, height) >= 2
                && rng.unit() < config.extra_connection_probability
        })
        .collect();

    debug!(
        "extra connections: {} drawn from {} walls, {} kept",
        connection_count,
        candidates.len(),
        kept.len()
    );

    kept.into_iter().fold(grid.clone(), |acc, p| {
        carve_block(acc, p, width, height, path_width)
    })
}

/// Check whether `to` can be reached from `from` moving 4-directionally
/// over path cells
pub fn is_reachable(grid: &Grid, from: Point, to: Point) -> bool {
    let walkable = |p: Point| grid.get(p).is_some_and(|c| c.is_walkable());
    if !walkable(from) || !walkable(to) {
        return false;
    }

    let width = grid.width();
    let mut seen = vec![false; grid.len()];
    let mut queue = VecDeque::new();
    seen[from.key(width)] = true;
    queue.push_back(from);

    while let Some(p) = queue.pop_front() {
        if p == to {
            return true;
        }
        for &d in &DIRECTIONS {
            let next = p + d;
            if walkable(next) && !seen[next.key(width)] {
                seen[next.key(width)] = true;
                queue.push_back(next);
            }
        }
    }
    false
}
