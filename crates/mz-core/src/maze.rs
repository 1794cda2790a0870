//! Maze structure generation
//!
//! Randomized recursive backtracking over a lattice whose nodes are
//! `spacing` cells apart, so corridors of the configured width never merge.
//! The walk records every cell to carve; applying it yields a perfect maze
//! (one simple route between any two lattice nodes).

use hashbrown::HashSet;
use log::trace;

use crate::carve::carve_block;
use crate::consts::{DIRECTIONS, MIN_LATTICE_SPACING};
use crate::geometry::interpolate_coordinates;
use crate::grid::{Grid, Point};
use crate::rng::RandomSource;

/// Distance between neighboring lattice nodes for a path width
pub fn lattice_spacing(path_width: u8) -> i32 {
    MIN_LATTICE_SPACING.max(i32::from(path_width) + 1)
}

/// Pick a random odd-aligned starting node inside the grid
pub fn maze_start<R: RandomSource>(width: usize, height: usize, rng: &mut R) -> Point {
    let x = 1 + 2 * rng.rn2(width.saturating_sub(2) / 2);
    let y = 1 + 2 * rng.rn2(height.saturating_sub(2) / 2);
    Point::new(x as i32, y as i32)
}

/// Check if a lattice node lies strictly inside the border ring
fn maze_inbounds(p: Point, width: usize, height: usize) -> bool {
    p.x > 0
        && (p.x as usize) < width.saturating_sub(1)
        && p.y > 0
        && (p.y as usize) < height.saturating_sub(1)
}

/// Unvisited lattice nodes one `spacing` step away in each cardinal direction
fn unvisited_neighbors(
    current: Point,
    width: usize,
    height: usize,
    spacing: i32,
    visited: &HashSet<usize>,
) -> Vec<Point> {
    DIRECTIONS
        .iter()
        .map(|d| Point::new(current.x + d.x * spacing, current.y + d.y * spacing))
        .filter(|&p| maze_inbounds(p, width, height) && !visited.contains(&p.key(width)))
        .collect()
}

/// Walk the lattice and return the ordered list of points to carve
///
/// For every step from a node to a new neighbor the list gets the node,
/// the interpolated line between both, and the neighbor. Points repeat.
pub fn generate_maze_structure<R: RandomSource>(
    width: usize,
    height: usize,
    path_width: u8,
    rng: &mut R,
) -> Vec<Point> {
    let spacing = lattice_spacing(path_width);
    let start = maze_start(width, height, rng);

    let mut stack = vec![start];
    let mut visited = HashSet::new();
    visited.insert(start.key(width));
    let mut paths = Vec::new();

    while let Some(&current) = stack.last() {
        let neighbors = unvisited_neighbors(current, width, height, spacing, &visited);

        match rng.choose(&neighbors) {
            Some(&next) => {
                paths.push(current);
                paths.extend(interpolate_coordinates(current, next));
                paths.push(next);

                visited.insert(next.key(width));
                stack.push(next);
            }
            None => {
                stack.pop();
            }
        }
    }

    trace!(
        "maze walk from {start}: {} nodes, {} points (spacing {spacing})",
        visited.len(),
        paths.len()
    );
    paths
}

/// Carve every maze point, in order, at the given path width
pub fn apply_maze_to_grid(
    grid: &Grid,
    paths: &[Point],
    width: usize,
    height: usize,
    path_width: u8,
) -> Grid {
    paths.iter().fold(grid.clone(), |acc, &p| {
        carve_block(acc, p, width, height, path_width)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::is_reachable;
    use crate::grid::{CellType, create_grid};
    use crate::rng::MapRng;

    fn lattice_nodes(width: usize, height: usize, start: Point, spacing: i32) -> Vec<Point> {
        let mut nodes = Vec::new();
        let mut y = start.y.rem_euclid(spacing);
        while (y as usize) < height - 1 {
            let mut x = start.x.rem_euclid(spacing);
            while (x as usize) < width - 1 {
                let p = Point::new(x, y);
                if maze_inbounds(p, width, height) {
                    nodes.push(p);
                }
                x += spacing;
            }
            y += spacing;
        }
        nodes
    }

    #[test]
    fn test_lattice_spacing() {
        assert_eq!(lattice_spacing(1), 2);
        assert_eq!(lattice_spacing(2), 3);
        assert_eq!(lattice_spacing(5), 6);
    }

    #[test]
    fn test_maze_start_is_odd_and_inside() {
        let mut rng = MapRng::new(3);
        for _ in 0..200 {
            let p = maze_start(21, 15, &mut rng);
            assert_eq!(p.x % 2, 1);
            assert_eq!(p.y % 2, 1);
            assert!(p.x >= 1 && p.x < 20);
            assert!(p.y >= 1 && p.y < 14);
        }
    }

    #[test]
    fn test_structure_visits_every_lattice_node() {
        let mut rng = MapRng::new(42);
        let (w, h) = (21, 15);
        let paths = generate_maze_structure(w, h, 1, &mut rng);
        let start = paths[0];
        for node in lattice_nodes(w, h, start, 2) {
            assert!(paths.contains(&node), "node {node} never carved");
        }
    }

    #[test]
    fn test_structure_steps_are_contiguous() {
        let mut rng = MapRng::new(9);
        let paths = generate_maze_structure(25, 25, 2, &mut rng);
        // Each step is recorded as current, line current..=next, next
        for step in paths.chunks(2 + 4) {
            let (from, to) = (step[0], step[step.len() - 1]);
            let d = (to.x - from.x).abs() + (to.y - from.y).abs();
            assert_eq!(d, 3);
        }
    }

    #[test]
    fn test_applied_maze_connects_all_nodes() {
        let mut rng = MapRng::new(11);
        let (w, h) = (31, 21);
        let paths = generate_maze_structure(w, h, 1, &mut rng);
        let grid = apply_maze_to_grid(&create_grid(w, h), &paths, w, h, 1);

        let nodes = lattice_nodes(w, h, paths[0], 2);
        for node in &nodes {
            assert_eq!(grid[node.y as usize][node.x as usize].cell_type, CellType::Path);
            assert!(is_reachable(&grid, nodes[0], *node));
        }
    }

    #[test]
    fn test_perfect_maze_path_count() {
        // A spanning tree over N nodes with spacing 2 carves N nodes plus N-1 joints
        let mut rng = MapRng::new(5);
        let (w, h) = (21, 21);
        let paths = generate_maze_structure(w, h, 1, &mut rng);
        let grid = apply_maze_to_grid(&create_grid(w, h), &paths, w, h, 1);
        let nodes = lattice_nodes(w, h, paths[0], 2).len();
        let carved = grid.cells().filter(|(_, c)| c.is_path).count();
        assert_eq!(carved, 2 * nodes - 1);
    }

    #[test]
    fn test_same_seed_same_structure() {
        let a = generate_maze_structure(30, 20, 1, &mut MapRng::new(77));
        let b = generate_maze_structure(30, 20, 1, &mut MapRng::new(77));
        assert_eq!(a, b);
    }
}
