//! The game catalog: which games exist and how each one parameterizes
//! the engine.
//!
//! A [`GameConfig`] is the sole per-game surface; there are no per-game
//! code paths or dispatch tables keyed by game identifier.

use crate::engine::GameEngine;
use crate::error::GridError;
use crate::placement::PlacementPolicy;
use crate::player::{MarkId, Player, PlayerKind};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::{info, instrument};

/// The shipped games.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GameKind {
    /// 3x3, three in a row, place anywhere.
    TicTacToe,
    /// 7x6, four in a row, marks fall to the bottom of a column.
    ConnectFour,
    /// 15x15, five in a row, place anywhere.
    Gomoku,
}

/// Everything the engine needs to know about one game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_more::Display,
)]
#[display("{width}x{height} connect-{connect_n} ({policy})")]
pub struct GameConfig {
    width: usize,
    height: usize,
    connect_n: usize,
    policy: PlacementPolicy,
}

impl GameConfig {
    /// Board width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Board height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Run length required to win.
    pub fn connect_n(&self) -> usize {
        self.connect_n
    }

    /// How marks are placed.
    pub fn policy(&self) -> PlacementPolicy {
        self.policy
    }
}

/// One catalog entry: a game's identity, presentation strings, engine
/// configuration, and the symbols its two players render with.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters, derive_new::new,
)]
pub struct GameEntry {
    /// Which game this entry configures.
    id: GameKind,
    /// Display name.
    name: String,
    /// One-line description for the picker.
    description: String,
    /// Engine parameters.
    config: GameConfig,
    /// Rendering symbols, one per player in turn order.
    symbols: Vec<char>,
}

impl GameEntry {
    /// Builds the fixed player roster for this entry, one player per
    /// symbol in turn order. Mark ids are 1-based; [`Catalog::from_path`]
    /// caps rosters at 255 symbols so the ids stay distinct.
    pub fn players(&self) -> Vec<Player> {
        self.symbols
            .iter()
            .enumerate()
            .map(|(i, &symbol)| {
                let seat = u8::try_from(i + 1).unwrap_or(u8::MAX);
                Player::new(
                    format!("p{seat}"),
                    format!("Player {seat}"),
                    MarkId(seat),
                    symbol,
                    PlayerKind::Human,
                )
            })
            .collect()
    }

    /// Builds a ready-to-play engine for this entry.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] when the entry carries an invalid
    /// configuration, which only happens for hand-edited catalog files.
    pub fn engine(&self) -> Result<GameEngine, GridError> {
        GameEngine::new(self.config, self.players())
    }
}

/// An ordered collection of playable games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    games: Vec<GameEntry>,
}

impl Catalog {
    /// The built-in catalog: one entry per [`GameKind`].
    pub fn builtin() -> Self {
        let games = GameKind::iter()
            .map(|kind| match kind {
                GameKind::TicTacToe => GameEntry::new(
                    kind,
                    "Tic-Tac-Toe".to_string(),
                    "Three in a row on a 3x3 board".to_string(),
                    GameConfig::new(3, 3, 3, PlacementPolicy::Direct),
                    vec!['X', 'O'],
                ),
                GameKind::ConnectFour => GameEntry::new(
                    kind,
                    "Connect Four".to_string(),
                    "Drop discs, connect four in a 7x6 frame".to_string(),
                    GameConfig::new(7, 6, 4, PlacementPolicy::GravityDrop),
                    vec!['R', 'Y'],
                ),
                GameKind::Gomoku => GameEntry::new(
                    kind,
                    "Gomoku".to_string(),
                    "Five in a row on a 15x15 board".to_string(),
                    GameConfig::new(15, 15, 5, PlacementPolicy::Direct),
                    vec!['X', 'O'],
                ),
            })
            .collect();
        Self { games }
    }

    /// Loads a catalog from a JSON file, replacing the built-in set.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read, is not valid JSON, or
    /// describes an empty catalog.
    #[instrument]
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file {}", path.display()))?;
        let catalog: Catalog = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse catalog file {}", path.display()))?;
        anyhow::ensure!(
            !catalog.games.is_empty(),
            "catalog file {} lists no games",
            path.display()
        );
        for entry in &catalog.games {
            anyhow::ensure!(
                (2..=usize::from(u8::MAX)).contains(&entry.symbols.len()),
                "catalog entry {} must list between 2 and 255 player symbols, got {}",
                entry.name,
                entry.symbols.len(),
            );
        }
        info!(games = catalog.games.len(), "loaded catalog");
        Ok(catalog)
    }

    /// All entries, in catalog order.
    pub fn games(&self) -> &[GameEntry] {
        &self.games
    }

    /// Looks up the entry for `kind`.
    pub fn get(&self, kind: GameKind) -> Option<&GameEntry> {
        self.games.iter().find(|entry| *entry.id() == kind)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
