//! mz-core: maze level generation for top-down tile games
//!
//! Builds a wall/path grid with a start, an end and optional enemies, and
//! provides cell-by-cell edits on the result. Everything here is pure: each
//! stage takes a grid and returns a new one, and randomness comes from a
//! caller-supplied [`RandomSource`]. The crate does no I/O.
//!
//! ```
//! use mz_core::{MapGeneratorParams, MapRng, analyze_grid, generate_map};
//!
//! let params = MapGeneratorParams::default();
//! let grid = generate_map(&params, &mut MapRng::new(42)).unwrap();
//! assert_eq!(grid.height(), params.height);
//! assert_eq!(analyze_grid(&grid).total_cells, params.width * params.height);
//! ```

pub mod carve;
pub mod connection;
pub mod editor;
pub mod enemy;
pub mod geometry;
pub mod grid;
pub mod maze;

mod config;
mod consts;
mod error;
mod generator;
mod params;
mod rng;
mod stats;

pub use config::MazeConfig;
pub use consts::*;
pub use editor::{EditMode, MapEditor, apply_edit};
pub use error::MapError;
pub use generator::{generate_map, generate_map_with, mark_start_end_points};
pub use grid::{
    Cell, CellType, CellUpdate, Grid, Point, create_grid, is_valid_coordinate, update_cell,
    update_grid_cell,
};
pub use params::MapGeneratorParams;
pub use rng::{MapRng, RandomSource};
pub use stats::{MapStats, analyze_grid};
