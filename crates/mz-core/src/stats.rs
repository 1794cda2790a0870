//! Grid statistics

use serde::{Deserialize, Serialize};

use crate::grid::{CellType, Grid};

/// Aggregate counts over a finished grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapStats {
    pub total_cells: usize,
    pub path_cells: usize,
    pub wall_cells: usize,
    pub enemy_cells: usize,
    /// Path share of the grid, one decimal and a percent sign, e.g. `"42.3%"`
    pub path_ratio: String,
}

impl MapStats {
    /// Numeric value of [`MapStats::path_ratio`]
    pub fn path_ratio_value(&self) -> f64 {
        self.path_ratio
            .trim_end_matches('%')
            .parse()
            .unwrap_or(0.0)
    }
}

/// Count cells by type and enemies
pub fn analyze_grid(grid: &Grid) -> MapStats {
    let (mut path_cells, mut wall_cells, mut enemy_cells) = (0, 0, 0);
    for (_, cell) in grid.cells() {
        match cell.cell_type {
            CellType::Path => path_cells += 1,
            CellType::Wall => wall_cells += 1,
        }
        if cell.has_enemy {
            enemy_cells += 1;
        }
    }

    let total_cells = grid.len();
    let tenths = ratio_tenths(path_cells, total_cells);

    MapStats {
        total_cells,
        path_cells,
        wall_cells,
        enemy_cells,
        path_ratio: format!("{}.{}%", tenths / 10, tenths % 10),
    }
}

/// Path share in tenths of a percent, halves rounded up
fn ratio_tenths(path_cells: usize, total_cells: usize) -> usize {
    if total_cells == 0 {
        return 0;
    }
    (2000 * path_cells + total_cells) / (2 * total_cells)
}
