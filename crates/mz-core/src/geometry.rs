//! Geometry helpers
//!
//! Offset ranges for wide paths, square path blocks and line interpolation
//! between two grid points.

use std::ops::RangeInclusive;

use crate::consts::DIRECTIONS;
use crate::grid::{Point, is_valid_coordinate};

/// Offsets covered by a path of the given width around its center
///
/// The range always holds exactly `path_width` values. Even widths put the
/// extra cell on the positive side: width 2 is `0..=1`, width 4 is `-1..=2`.
pub fn calculate_path_offsets(path_width: u8) -> RangeInclusive<i32> {
    let radius = i32::from(path_width / 2);
    let start_offset = if path_width % 2 == 0 {
        -radius + 1
    } else {
        -radius
    };
    start_offset..=radius
}

/// All points of the square path block centered on `center`
pub fn get_path_coordinates(center: Point, path_width: u8) -> Vec<Point> {
    let offsets = calculate_path_offsets(path_width);
    offsets
        .clone()
        .flat_map(|dy| {
            offsets
                .clone()
                .map(move |dx| Point::new(center.x + dx, center.y + dy))
        })
        .collect()
}

/// Points on the line from `from` to `to`, both ends included
///
/// Takes `max(|dx|, |dy|)` steps and rounds each intermediate position, so
/// steep diagonals may skip cells; wide carving covers the gaps.
pub fn interpolate_coordinates(from: Point, to: Point) -> Vec<Point> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let steps = dx.abs().max(dy.abs());

    if steps == 0 {
        return vec![from];
    }

    (0..=steps)
        .map(|i| {
            Point::new(
                from.x + round_half_up(f64::from(dx * i) / f64::from(steps)),
                from.y + round_half_up(f64::from(dy * i) / f64::from(steps)),
            )
        })
        .collect()
}

/// Round with halves going toward positive infinity
fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

/// 4-directional neighbors of `center` that are valid carve coordinates
pub fn path_neighbors(center: Point, width: usize, height: usize) -> Vec<Point> {
    DIRECTIONS
        .iter()
        .map(|&d| center + d)
        .filter(|&p| is_valid_coordinate(p, width, height))
        .collect()
}
