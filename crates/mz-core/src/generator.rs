//! Map generation pipeline
//!
//! Runs the stages in a fixed order, each taking the previous grid and
//! returning a new one:
//! base grid, maze carve, forced start-end corridor, start/end marking,
//! extra connections, enemy placement.

use log::debug;

use crate::config::MazeConfig;
use crate::connection::{apply_extra_connections_with, ensure_connectivity};
use crate::enemy::place_enemies_randomly;
use crate::error::MapError;
use crate::grid::{CellType, CellUpdate, Grid, Point, create_grid};
use crate::maze::{apply_maze_to_grid, generate_maze_structure};
use crate::params::MapGeneratorParams;
use crate::rng::RandomSource;

/// Flag `start` and `end` as path cells, overwriting walls
pub fn mark_start_end_points(grid: &Grid, start: Point, end: Point) -> Grid {
    grid.update(
        start,
        CellUpdate {
            cell_type: Some(CellType::Path),
            is_start: Some(true),
            ..Default::default()
        },
    )
    .into_updated(
        end,
        CellUpdate {
            cell_type: Some(CellType::Path),
            is_end: Some(true),
            ..Default::default()
        },
    )
}

/// Generate a finished map with default tuning
pub fn generate_map<R: RandomSource>(
    params: &MapGeneratorParams,
    rng: &mut R,
) -> Result<Grid, MapError> {
    generate_map_with(params, &MazeConfig::default(), rng)
}

/// Generate a finished map
pub fn generate_map_with<R: RandomSource>(
    params: &MapGeneratorParams,
    config: &MazeConfig,
    rng: &mut R,
) -> Result<Grid, MapError> {
    params.validate()?;

    let MapGeneratorParams {
        width,
        height,
        start,
        end,
        path_width,
        enemy_count,
        should_place_enemies,
    } = *params;

    let base = create_grid(width, height);
    let structure = generate_maze_structure(width, height, path_width, rng);
    debug!("maze structure: {} points", structure.len());

    let grid = apply_maze_to_grid(&base, &structure, width, height, path_width);
    let grid = ensure_connectivity(&grid, start, end, width, height, path_width);
    let grid = mark_start_end_points(&grid, start, end);
    let grid = apply_extra_connections_with(&grid, width, height, path_width, config, rng);
    let grid = if should_place_enemies && enemy_count > 0 {
        place_enemies_randomly(&grid, start, end, enemy_count, rng)
    } else {
        grid
    };

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::is_reachable;
    use crate::enemy::count_enemies;
    use crate::rng::MapRng;

    fn scenario() -> MapGeneratorParams {
        MapGeneratorParams {
            width: 10,
            height: 10,
            start: Point::new(1, 1),
            end: Point::new(8, 8),
            path_width: 1,
            enemy_count: 0,
            should_place_enemies: false,
        }
    }

    #[test]
    fn test_mark_start_end_overwrites_wall() {
        let grid = mark_start_end_points(&create_grid(6, 6), Point::new(1, 1), Point::new(4, 4));
        assert!(grid[1][1].is_start);
        assert!(grid[4][4].is_end);
        assert_eq!(grid[1][1].cell_type, CellType::Path);
        assert!(grid[4][4].is_path);
    }

    #[test]
    fn test_scenario_ten_by_ten() {
        let mut rng = MapRng::new(42);
        let grid = generate_map(&scenario(), &mut rng).unwrap();

        assert_eq!(grid.height(), 10);
        assert!(grid.rows().all(|row| row.len() == 10));
        assert!(grid[1][1].is_start);
        assert!(grid[8][8].is_end);
        assert!(is_reachable(&grid, Point::new(1, 1), Point::new(8, 8)));
        assert_eq!(count_enemies(&grid), 0);
    }

    #[test]
    fn test_single_start_and_end() {
        let mut rng = MapRng::new(5);
        let grid = generate_map(&MapGeneratorParams::default(), &mut rng).unwrap();
        let starts: Vec<_> = grid.cells().filter(|(_, c)| c.is_start).collect();
        let ends: Vec<_> = grid.cells().filter(|(_, c)| c.is_end).collect();
        assert_eq!(starts.len(), 1);
        assert_eq!(ends.len(), 1);
        assert_eq!(starts[0].1.cell_type, CellType::Path);
        assert_eq!(ends[0].1.cell_type, CellType::Path);
    }

    #[test]
    fn test_enemies_placed_when_enabled() {
        let mut rng = MapRng::new(6);
        let params = MapGeneratorParams::default();
        let grid = generate_map(&params, &mut rng).unwrap();
        assert_eq!(count_enemies(&grid), params.enemy_count);

        let disabled = MapGeneratorParams {
            should_place_enemies: false,
            ..params
        };
        let grid = generate_map(&disabled, &mut rng).unwrap();
        assert_eq!(count_enemies(&grid), 0);
    }

    #[test]
    fn test_same_seed_same_map() {
        let params = MapGeneratorParams::default();
        let a = generate_map(&params, &mut MapRng::new(99)).unwrap();
        let b = generate_map(&params, &mut MapRng::new(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_params_rejected() {
        let params = MapGeneratorParams {
            path_width: 0,
            ..scenario()
        };
        let mut rng = MapRng::new(1);
        assert_eq!(
            generate_map(&params, &mut rng),
            Err(MapError::PathWidthOutOfRange(0))
        );
    }

    #[test]
    fn test_wide_paths_stay_connected() {
        for path_width in 1..=5 {
            let params = MapGeneratorParams {
                width: 40,
                height: 30,
                start: Point::new(3, 3),
                end: Point::new(35, 25),
                path_width,
                ..Default::default()
            };
            let mut rng = MapRng::new(u64::from(path_width));
            let grid = generate_map(&params, &mut rng).unwrap();
            assert!(is_reachable(&grid, params.start, params.end));
        }
    }
}
