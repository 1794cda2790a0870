//! Map cell types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::consts::{S_END, S_ENEMY, S_PATH, S_START, S_WALL};

/// Cell/terrain type
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CellType {
    #[default]
    Wall,
    Path,
}

/// A single map cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    /// Terrain type
    pub cell_type: CellType,

    /// Set once the cell has been carved; only a wall setter clears it
    pub is_path: bool,

    pub is_start: bool,
    pub is_end: bool,
    pub has_enemy: bool,
}

/// Partial cell update, applied with [`Cell::apply`]
///
/// `is_path` is not part of the update: it is derived from `cell_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellUpdate {
    pub cell_type: Option<CellType>,
    pub is_start: Option<bool>,
    pub is_end: Option<bool>,
    pub has_enemy: Option<bool>,
}

impl CellUpdate {
    /// Update that carves a path and clears any enemy
    pub const fn carve() -> Self {
        Self {
            cell_type: Some(CellType::Path),
            is_start: None,
            is_end: None,
            has_enemy: Some(false),
        }
    }

    pub const fn enemy(has_enemy: bool) -> Self {
        Self {
            cell_type: None,
            is_start: None,
            is_end: None,
            has_enemy: Some(has_enemy),
        }
    }
}

impl Cell {
    /// Create a new cell of the given type
    pub const fn new(cell_type: CellType) -> Self {
        Self {
            cell_type,
            is_path: matches!(cell_type, CellType::Path),
            is_start: false,
            is_end: false,
            has_enemy: false,
        }
    }

    /// Create a wall cell
    pub const fn wall() -> Self {
        Self::new(CellType::Wall)
    }

    /// Check if walkable
    pub const fn is_walkable(&self) -> bool {
        matches!(self.cell_type, CellType::Path)
    }

    /// Merge a partial update into a copy of this cell
    ///
    /// `is_path` becomes true when the update sets `Path` and never goes
    /// back to false here.
    pub fn apply(&self, update: CellUpdate) -> Cell {
        Cell {
            cell_type: update.cell_type.unwrap_or(self.cell_type),
            is_path: self.is_path || update.cell_type == Some(CellType::Path),
            is_start: update.is_start.unwrap_or(self.is_start),
            is_end: update.is_end.unwrap_or(self.is_end),
            has_enemy: update.has_enemy.unwrap_or(self.has_enemy),
        }
    }

    /// Turn this cell back into a wall, clearing the path flag and any enemy
    pub fn set_wall(&self) -> Cell {
        Cell {
            cell_type: CellType::Wall,
            is_path: false,
            has_enemy: false,
            ..*self
        }
    }

    /// Get the display character for this cell
    pub const fn symbol(&self) -> char {
        if self.is_start {
            S_START
        } else if self.is_end {
            S_END
        } else if self.has_enemy {
            S_ENEMY
        } else {
            match self.cell_type {
                CellType::Wall => S_WALL,
                CellType::Path => S_PATH,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_flags() {
        let wall = Cell::wall();
        assert_eq!(wall.cell_type, CellType::Wall);
        assert!(!wall.is_path);
        assert!(!wall.is_start && !wall.is_end && !wall.has_enemy);

        let path = Cell::new(CellType::Path);
        assert!(path.is_path);
    }

    #[test]
    fn test_apply_derives_is_path() {
        let carved = Cell::wall().apply(CellUpdate::carve());
        assert_eq!(carved.cell_type, CellType::Path);
        assert!(carved.is_path);

        // A generic update to Wall keeps the sticky path flag
        let rewalled = carved.apply(CellUpdate {
            cell_type: Some(CellType::Wall),
            ..Default::default()
        });
        assert_eq!(rewalled.cell_type, CellType::Wall);
        assert!(rewalled.is_path);
    }

    #[test]
    fn test_apply_leaves_unset_fields() {
        let cell = Cell {
            is_start: true,
            ..Cell::new(CellType::Path)
        };
        let updated = cell.apply(CellUpdate::enemy(true));
        assert!(updated.is_start);
        assert!(updated.has_enemy);
        assert_eq!(updated.cell_type, CellType::Path);
    }

    #[test]
    fn test_set_wall_reverts_path() {
        let cell = Cell {
            has_enemy: true,
            ..Cell::new(CellType::Path)
        };
        let wall = cell.set_wall();
        assert_eq!(wall.cell_type, CellType::Wall);
        assert!(!wall.is_path);
        assert!(!wall.has_enemy);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Cell::wall().symbol(), '#');
        assert_eq!(Cell::new(CellType::Path).symbol(), '.');
        let start = Cell {
            is_start: true,
            ..Cell::new(CellType::Path)
        };
        assert_eq!(start.symbol(), 'S');
    }

    #[test]
    fn test_cell_type_display() {
        assert_eq!(CellType::Wall.to_string(), "wall");
        assert_eq!(CellType::Path.to_string(), "path");
    }
}
