//! Command-line arguments

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use mz_core::{EditMode, MapGeneratorParams, Point};

/// Generate a maze level and print it as text
#[derive(Debug, Parser)]
#[command(name = "mazegen", version, about)]
pub struct Cli {
    /// JSON file with generation parameters; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    pub width: Option<usize>,

    /// Grid height in cells
    #[arg(long)]
    pub height: Option<usize>,

    /// Start cell as `x,y`
    #[arg(long, value_parser = parse_point)]
    pub start: Option<Point>,

    /// End cell as `x,y`
    #[arg(long, value_parser = parse_point)]
    pub end: Option<Point>,

    /// Corridor width, 1 to 5
    #[arg(short = 'w', long)]
    pub path_width: Option<u8>,

    /// Number of enemies to place
    #[arg(short, long)]
    pub enemies: Option<usize>,

    /// Do not place enemies
    #[arg(long)]
    pub no_enemies: bool,

    /// RNG seed; a random one is used and logged when absent
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Edit applied after generation as `mode:x,y` (start, end, path, wall, enemy);
    /// may be repeated
    #[arg(long = "edit", value_parser = parse_edit)]
    pub edits: Vec<(EditMode, Point)>,

    /// Reshuffle enemies after the edits
    #[arg(long)]
    pub reshuffle: bool,

    /// Print statistics as JSON instead of a summary line
    #[arg(long)]
    pub stats_json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Build generation parameters from the config file and flags
    pub fn params(&self) -> Result<MapGeneratorParams> {
        let mut params = match &self.config {
            Some(path) => load_params(path)?,
            None => MapGeneratorParams::default(),
        };

        if let Some(width) = self.width {
            params.width = width;
        }
        if let Some(height) = self.height {
            params.height = height;
        }
        if let Some(start) = self.start {
            params.start = start;
        }
        if let Some(end) = self.end {
            params.end = end;
        }
        if let Some(path_width) = self.path_width {
            params.path_width = path_width;
        }
        if let Some(enemies) = self.enemies {
            params.enemy_count = enemies;
        }
        if self.no_enemies {
            params.should_place_enemies = false;
        }
        Ok(params)
    }
}

fn load_params(path: &Path) -> Result<MapGeneratorParams> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

/// Parse `x,y`
pub fn parse_point(s: &str) -> Result<Point> {
    let Some((x, y)) = s.split_once(',') else {
        bail!("expected x,y but got {s:?}");
    };
    let x = x.trim().parse().with_context(|| format!("bad x in {s:?}"))?;
    let y = y.trim().parse().with_context(|| format!("bad y in {s:?}"))?;
    Ok(Point::new(x, y))
}

/// Parse `mode:x,y`
pub fn parse_edit(s: &str) -> Result<(EditMode, Point)> {
    let Some((mode, point)) = s.split_once(':') else {
        bail!("expected mode:x,y but got {s:?}");
    };
    let mode = EditMode::from_str(mode.trim()).with_context(|| format!("unknown edit mode {mode:?}"))?;
    Ok((mode, parse_point(point)?))
}
