//! Generator tuning

use serde::{Deserialize, Serialize};

use crate::consts::{EXTRA_CONNECTION_DENSITY, EXTRA_CONNECTION_PROBABILITY};

/// Tuning for the stages that are not driven by [`crate::MapGeneratorParams`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Share of `width * height` drawn as extra-connection candidates
    pub extra_connection_density: f64,
    /// Chance that an eligible candidate is opened
    pub extra_connection_probability: f64,
}

impl MazeConfig {
    /// Number of extra-connection candidates drawn for a grid size
    pub fn connection_count(&self, width: usize, height: usize) -> usize {
        ((width * height) as f64 * self.extra_connection_density).floor() as usize
    }
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            extra_connection_density: EXTRA_CONNECTION_DENSITY,
            extra_connection_probability: EXTRA_CONNECTION_PROBABILITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_count() {
        let config = MazeConfig::default();
        assert_eq!(config.connection_count(30, 20), 18);
        assert_eq!(config.connection_count(5, 5), 0);
        assert_eq!(config.connection_count(6, 6), 1);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: MazeConfig =
            serde_json::from_str(r#"{"extra_connection_probability": 1.0}"#).unwrap();
        assert_eq!(config.extra_connection_density, EXTRA_CONNECTION_DENSITY);
        assert_eq!(config.extra_connection_probability, 1.0);
    }
}
