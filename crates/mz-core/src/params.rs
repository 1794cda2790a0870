//! Generation parameters

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_PATH_WIDTH, MIN_DIMENSION, MIN_PATH_WIDTH};
use crate::error::MapError;
use crate::grid::{Point, is_valid_coordinate};

/// Inputs for one map generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapGeneratorParams {
    pub width: usize,
    pub height: usize,
    pub start: Point,
    pub end: Point,
    /// Corridor width in cells, `1..=5`
    pub path_width: u8,
    pub enemy_count: usize,
    pub should_place_enemies: bool,
}

impl Default for MapGeneratorParams {
    fn default() -> Self {
        Self {
            width: 30,
            height: 20,
            start: Point::new(2, 2),
            end: Point::new(27, 17),
            path_width: 1,
            enemy_count: 5,
            should_place_enemies: true,
        }
    }
}

impl MapGeneratorParams {
    /// Check the parameters before generating
    pub fn validate(&self) -> Result<(), MapError> {
        if self.width < MIN_DIMENSION || self.height < MIN_DIMENSION {
            return Err(MapError::TooSmall {
                width: self.width,
                height: self.height,
                min: MIN_DIMENSION,
            });
        }
        if !(MIN_PATH_WIDTH..=MAX_PATH_WIDTH).contains(&self.path_width) {
            return Err(MapError::PathWidthOutOfRange(self.path_width));
        }
        for (which, point) in [("start", self.start), ("end", self.end)] {
            if !is_valid_coordinate(point, self.width, self.height) {
                return Err(MapError::OutOfBounds { which, point });
            }
        }
        if self.start == self.end {
            return Err(MapError::StartEqualsEnd(self.start));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(MapGeneratorParams::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_small_grid() {
        let params = MapGeneratorParams {
            width: 4,
            start: Point::new(1, 1),
            end: Point::new(2, 2),
            ..Default::default()
        };
        assert!(matches!(params.validate(), Err(MapError::TooSmall { .. })));
    }

    #[test]
    fn test_rejects_path_width() {
        for path_width in [0, 6] {
            let params = MapGeneratorParams {
                path_width,
                ..Default::default()
            };
            assert_eq!(
                params.validate(),
                Err(MapError::PathWidthOutOfRange(path_width))
            );
        }
    }

    #[test]
    fn test_rejects_border_points() {
        let params = MapGeneratorParams {
            start: Point::new(0, 3),
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(MapError::OutOfBounds {
                which: "start",
                point: Point::new(0, 3)
            })
        );

        let params = MapGeneratorParams {
            end: Point::new(30, 3),
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(MapError::OutOfBounds { which: "end", .. })
        ));
    }

    #[test]
    fn test_rejects_same_start_end() {
        let params = MapGeneratorParams {
            end: Point::new(2, 2),
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(MapError::StartEqualsEnd(Point::new(2, 2)))
        );
    }

    #[test]
    fn test_deserialize_partial_params() {
        let params: MapGeneratorParams =
            serde_json::from_str(r#"{"width": 40, "pathWidth": 2, "start": {"x": 3, "y": 3}}"#)
                .unwrap();
        assert_eq!(params.width, 40);
        assert_eq!(params.path_width, 2);
        assert_eq!(params.start, Point::new(3, 3));
        assert_eq!(params.height, 20);
        assert!(params.should_place_enemies);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MapError::PathWidthOutOfRange(9).to_string(),
            "path width 9 is outside 1..=5"
        );
        assert_eq!(
            MapError::StartEqualsEnd(Point::new(2, 2)).to_string(),
            "start and end share the same cell (2, 2)"
        );
    }
}
