//! Gridgames - terminal client for the grid game engine.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use gridgames::Catalog;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play { game, games } => {
            // Log to a file so raw-mode terminal output stays clean.
            let log_file = std::fs::File::create("gridgames.log")?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false)
                .try_init();

            let catalog = load_catalog(games)?;
            info!(?game, "starting TUI");
            tui::run(catalog, game)
        }
        Command::List { games } => {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .init();

            let catalog = load_catalog(games)?;
            for entry in catalog.games() {
                println!(
                    "{:<14} {:<14} {}  [{}]",
                    entry.id(),
                    entry.name(),
                    entry.description(),
                    entry.config(),
                );
            }
            Ok(())
        }
    }
}

/// Loads the user-supplied catalog file, or falls back to the built-ins.
fn load_catalog(path: Option<PathBuf>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::from_path(&path),
        None => Ok(Catalog::builtin()),
    }
}
