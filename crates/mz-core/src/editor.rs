//! Manual edits on a generated grid
//!
//! Each edit takes a grid and a coordinate and returns a new grid. Edits
//! that do not apply (border cells, refused targets) return an unchanged
//! copy. [`MapEditor`] keeps the current map, the selected edit mode and
//! the click-and-drag stroke state.

use log::debug;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::config::MazeConfig;
use crate::enemy::regenerate_enemies;
use crate::error::MapError;
use crate::generator::generate_map_with;
use crate::grid::{Cell, CellType, CellUpdate, Grid, Point, is_valid_coordinate};
use crate::params::MapGeneratorParams;
use crate::rng::{MapRng, RandomSource};
use crate::stats::{MapStats, analyze_grid};

/// Edit tool selected by the user
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EditMode {
    /// View only
    #[default]
    None,
    /// Move the start marker onto a path cell
    Start,
    /// Move the end marker onto a path cell
    End,
    /// Draw path cells
    Path,
    /// Draw wall cells
    Wall,
    /// Toggle an enemy on a path cell
    Enemy,
}

impl EditMode {
    /// Short label for tool pickers
    pub const fn label(&self) -> &'static str {
        match self {
            EditMode::None => "View Only",
            EditMode::Start => "Move Start",
            EditMode::End => "Move End",
            EditMode::Path => "Draw Path",
            EditMode::Wall => "Draw Wall",
            EditMode::Enemy => "Place Enemy",
        }
    }

    /// Whether the mode is meant to be dragged across cells
    pub const fn is_drawing(&self) -> bool {
        matches!(self, EditMode::Path | EditMode::Wall)
    }
}

/// The cell at `coord` if it may be edited
fn editable(grid: &Grid, coord: Point) -> Option<&Cell> {
    if is_valid_coordinate(coord, grid.width(), grid.height()) {
        grid.get(coord)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Start,
    End,
}

fn move_marker(grid: &Grid, coord: Point, marker: Marker) -> Grid {
    let Some(cell) = editable(grid, coord) else {
        return grid.clone();
    };
    let occupied = match marker {
        Marker::Start => cell.is_end,
        Marker::End => cell.is_start,
    };
    if cell.cell_type != CellType::Path || occupied {
        return grid.clone();
    }

    let (cleared, update) = match marker {
        Marker::Start => (
            grid.map_cells(|c| Cell {
                is_start: false,
                ..*c
            }),
            CellUpdate {
                is_start: Some(true),
                has_enemy: Some(false),
                ..Default::default()
            },
        ),
        Marker::End => (
            grid.map_cells(|c| Cell { is_end: false, ..*c }),
            CellUpdate {
                is_end: Some(true),
                has_enemy: Some(false),
                ..Default::default()
            },
        ),
    };
    cleared.into_updated(coord, update)
}

/// Move the start marker to a path cell, clearing any enemy there
///
/// Walls and the current end cell are refused.
pub fn move_start(grid: &Grid, coord: Point) -> Grid {
    move_marker(grid, coord, Marker::Start)
}

/// Move the end marker to a path cell, clearing any enemy there
///
/// Walls and the current start cell are refused.
pub fn move_end(grid: &Grid, coord: Point) -> Grid {
    move_marker(grid, coord, Marker::End)
}

/// Turn a cell into a path, keeping any enemy on it
pub fn draw_path(grid: &Grid, coord: Point) -> Grid {
    if editable(grid, coord).is_none() {
        return grid.clone();
    }
    grid.update(
        coord,
        CellUpdate {
            cell_type: Some(CellType::Path),
            ..Default::default()
        },
    )
}

/// Turn a cell into a wall, dropping any enemy; start and end are refused
pub fn draw_wall(grid: &Grid, coord: Point) -> Grid {
    match editable(grid, coord) {
        Some(cell) if !cell.is_start && !cell.is_end => grid.with_cell(coord, Cell::set_wall),
        _ => grid.clone(),
    }
}

/// Flip the enemy flag on a path cell other than start and end
pub fn toggle_enemy(grid: &Grid, coord: Point) -> Grid {
    match editable(grid, coord) {
        Some(cell) if !cell.is_start && !cell.is_end && cell.cell_type == CellType::Path => {
            grid.update(coord, CellUpdate::enemy(!cell.has_enemy))
        }
        _ => grid.clone(),
    }
}

/// Flip a cell between path and wall, dropping any enemy; start and end are
/// refused
pub fn toggle_path_wall(grid: &Grid, coord: Point) -> Grid {
    match editable(grid, coord) {
        Some(cell) if cell.is_start || cell.is_end => grid.clone(),
        Some(cell) if cell.cell_type == CellType::Path => grid.with_cell(coord, Cell::set_wall),
        Some(_) => grid.update(coord, CellUpdate::carve()),
        None => grid.clone(),
    }
}

/// Apply the edit for `mode` at `coord`
pub fn apply_edit(grid: &Grid, mode: EditMode, coord: Point) -> Grid {
    match mode {
        EditMode::None => grid.clone(),
        EditMode::Start => move_start(grid, coord),
        EditMode::End => move_end(grid, coord),
        EditMode::Path => draw_path(grid, coord),
        EditMode::Wall => draw_wall(grid, coord),
        EditMode::Enemy => toggle_enemy(grid, coord),
    }
}

/// Holds the current map and editing state
///
/// Starts without a grid; [`MapEditor::generate`] creates one from the
/// current parameters. Edits apply in call order, so the last edit to a
/// cell wins.
#[derive(Debug, Clone)]
pub struct MapEditor<R: RandomSource = MapRng> {
    params: MapGeneratorParams,
    config: MazeConfig,
    grid: Option<Grid>,
    mode: EditMode,
    is_editing: bool,
    last_edited: Option<Point>,
    rng: R,
}

impl<R: RandomSource> MapEditor<R> {
    /// Create an editor with no map yet
    pub fn new(params: MapGeneratorParams, rng: R) -> Self {
        Self {
            params,
            config: MazeConfig::default(),
            grid: None,
            mode: EditMode::None,
            is_editing: false,
            last_edited: None,
            rng,
        }
    }

    /// Use non-default tuning for later generations
    pub fn with_config(mut self, config: MazeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn params(&self) -> &MapGeneratorParams {
        &self.params
    }

    /// Replace the parameters used by the next generation
    pub fn set_params(&mut self, params: MapGeneratorParams) {
        self.params = params;
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn is_generated(&self) -> bool {
        self.grid.is_some()
    }

    /// Statistics of the current grid, computed on each call
    pub fn stats(&self) -> Option<MapStats> {
        self.grid.as_ref().map(analyze_grid)
    }

    /// Generate a new map from the current parameters
    ///
    /// On error the previous map is dropped, leaving the editor without a
    /// grid.
    pub fn generate(&mut self) -> Result<&Grid, MapError> {
        self.end_stroke();
        self.grid = None;
        let grid = generate_map_with(&self.params, &self.config, &mut self.rng)?;
        Ok(&*self.grid.insert(grid))
    }

    /// Reshuffle enemies on the current map without touching its layout
    pub fn regenerate_enemies(&mut self) {
        if let Some(grid) = &self.grid {
            let count = if self.params.should_place_enemies {
                self.params.enemy_count
            } else {
                0
            };
            self.grid = Some(regenerate_enemies(
                grid,
                self.params.start,
                self.params.end,
                count,
                &mut self.rng,
            ));
        }
    }

    /// Drop the current map
    pub fn reset(&mut self) {
        self.end_stroke();
        self.grid = None;
    }

    /// Drop the current map and restore default parameters
    pub fn reset_all(&mut self) {
        self.reset();
        self.params = MapGeneratorParams::default();
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: EditMode) {
        self.mode = mode;
    }

    /// Select `mode`, or go back to [`EditMode::None`] if it is already active
    pub fn toggle_mode(&mut self, mode: EditMode) {
        self.mode = if self.mode == mode {
            EditMode::None
        } else {
            mode
        };
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    /// Start a stroke and edit the first cell
    pub fn begin_stroke(&mut self, coord: Point) {
        if self.mode == EditMode::None || self.grid.is_none() {
            return;
        }
        self.last_edited = None;
        self.is_editing = true;
        self.edit_cell(coord);
    }

    /// Edit the cell under the pointer while a stroke is active
    pub fn continue_stroke(&mut self, coord: Point) {
        if self.is_editing && self.mode != EditMode::None {
            self.edit_cell(coord);
        }
    }

    pub fn end_stroke(&mut self) {
        self.is_editing = false;
        self.last_edited = None;
    }

    /// Apply the current mode at `coord` once per consecutive visit
    ///
    /// Returns false when the cell was the last one edited in this stroke.
    pub fn edit_cell(&mut self, coord: Point) -> bool {
        if self.last_edited == Some(coord) {
            return false;
        }
        self.last_edited = Some(coord);
        self.apply(self.mode, coord);
        true
    }

    /// Apply an edit directly, outside of any stroke
    pub fn apply(&mut self, mode: EditMode, coord: Point) {
        let Some(grid) = &self.grid else {
            return;
        };
        let next = apply_edit(grid, mode, coord);
        let moved = next.get(coord).copied();

        match (mode, moved) {
            (EditMode::Start, Some(cell)) if cell.is_start => self.params.start = coord,
            (EditMode::End, Some(cell)) if cell.is_end => self.params.end = coord,
            _ => {}
        }
        debug!("edit {mode} at {coord}");
        self.grid = Some(next);
    }
}

impl MapEditor<MapRng> {
    /// Create an editor with default parameters and an entropy-seeded RNG
    pub fn from_entropy() -> Self {
        Self::new(MapGeneratorParams::default(), MapRng::from_entropy())
    }
}
