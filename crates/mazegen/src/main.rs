//! mazegen: maze level generator
//!
//! Generates a level from command-line parameters, applies any scripted
//! edits and prints the grid and its statistics.

mod cli;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use mz_core::{MapEditor, MapRng};

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: &Cli) -> Result<()> {
    let params = cli.params()?;
    let rng = cli.seed.map_or_else(MapRng::from_entropy, MapRng::new);
    info!(
        "generating {}x{} map, path width {}, seed {}",
        params.width,
        params.height,
        params.path_width,
        rng.seed()
    );

    let mut editor = MapEditor::new(params, rng);
    editor.generate().context("map generation failed")?;

    for &(mode, point) in &cli.edits {
        editor.apply(mode, point);
    }
    if cli.reshuffle {
        editor.regenerate_enemies();
    }

    let grid = editor.grid().context("no map after generation")?;
    print!("{grid}");

    let stats = editor.stats().context("no map after generation")?;
    if cli.stats_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!(
            "cells: {}  paths: {}  walls: {}  enemies: {}  path ratio: {}",
            stats.total_cells,
            stats.path_cells,
            stats.wall_cells,
            stats.enemy_cells,
            stats.path_ratio
        );
    }
    Ok(())
}
