//! Generator constants
//!
//! Tuning values and limits shared by the generation stages.

use crate::grid::Point;

/// Share of the grid area drawn as extra-connection candidates
pub const EXTRA_CONNECTION_DENSITY: f64 = 0.03;

/// Chance that an eligible extra-connection candidate is opened
pub const EXTRA_CONNECTION_PROBABILITY: f64 = 0.4;

/// Path width limits
pub const MIN_PATH_WIDTH: u8 = 1;
pub const MAX_PATH_WIDTH: u8 = 5;

/// Smallest accepted grid side
pub const MIN_DIMENSION: usize = 5;

/// Smallest spacing between maze lattice nodes
pub const MIN_LATTICE_SPACING: i32 = 2;

/// Cardinal directions in scan order: up, right, down, left
pub const DIRECTIONS: [Point; 4] = [
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 0),
];

/// Text symbols used when printing a grid
pub const S_WALL: char = '#';
pub const S_PATH: char = '.';
pub const S_START: char = 'S';
pub const S_END: char = 'E';
pub const S_ENEMY: char = 'e';
