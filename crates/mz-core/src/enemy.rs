//! Enemy placement
//!
//! Enemies go on path cells other than start and end, and only after the
//! grid geometry is final.

use log::debug;

use crate::grid::{CellType, CellUpdate, Grid, Point};
use crate::rng::RandomSource;

/// Path cells eligible for an enemy
///
/// Skips cells flagged as start or end as well as the `start` and `end`
/// coordinates themselves, in case the flags are stale.
pub fn get_enemy_placement_candidates(grid: &Grid, start: Point, end: Point) -> Vec<Point> {
    grid.cells()
        .filter(|&(p, cell)| {
            cell.cell_type == CellType::Path
                && !cell.is_start
                && !cell.is_end
                && p != start
                && p != end
        })
        .map(|(p, _)| p)
        .collect()
}

/// Place up to `enemy_count` enemies on distinct random candidates
pub fn place_enemies_randomly<R: RandomSource>(
    grid: &Grid,
    start: Point,
    end: Point,
    enemy_count: usize,
    rng: &mut R,
) -> Grid {
    let mut candidates = get_enemy_placement_candidates(grid, start, end);
    let actual = enemy_count.min(candidates.len());

    rng.shuffle(&mut candidates);
    debug!(
        "placing {actual} of {enemy_count} enemies on {} candidates",
        candidates.len()
    );

    candidates
        .into_iter()
        .take(actual)
        .fold(grid.clone(), |acc, p| {
            acc.into_updated(p, CellUpdate::enemy(true))
        })
}

/// Remove every enemy from the grid
pub fn clear_all_enemies(grid: &Grid) -> Grid {
    grid.map_cells(|cell| {
        if cell.has_enemy {
            cell.apply(CellUpdate::enemy(false))
        } else {
            *cell
        }
    })
}

/// Clear all enemies and place `enemy_count` new ones
pub fn regenerate_enemies<R: RandomSource>(
    grid: &Grid,
    start: Point,
    end: Point,
    enemy_count: usize,
    rng: &mut R,
) -> Grid {
    let cleared = clear_all_enemies(grid);
    if enemy_count > 0 {
        place_enemies_randomly(&cleared, start, end, enemy_count, rng)
    } else {
        cleared
    }
}

/// Number of cells holding an enemy
pub fn count_enemies(grid: &Grid) -> usize {
    grid.cells().filter(|(_, c)| c.has_enemy).count()
}
