//! Turn and result state machine over a configured grid game.

use crate::catalog::GameConfig;
use crate::connect::is_n_connected;
use crate::error::GridError;
use crate::grid::{Coord, Grid};
use crate::placement::Placement;
use crate::player::{Cell, MarkId, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Where the game stands. `Won` and `Tied` are terminal; the variants make
/// the win/tie mutual exclusion unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Moves are still being accepted.
    InProgress,
    /// The holder of this mark connected N in a row.
    Won(MarkId),
    /// The board filled with no winner.
    Tied,
}

impl Status {
    /// True once the game is decided.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

/// One immutable snapshot of a game.
///
/// Every accepted move produces a fresh `GameState`; snapshots handed out
/// earlier never change underneath the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    grid: Grid<Cell>,
    to_move: usize,
    status: Status,
}

impl GameState {
    fn initial(grid: Grid<Cell>) -> Self {
        Self {
            grid,
            to_move: 0,
            status: Status::InProgress,
        }
    }

    /// The board.
    pub fn grid(&self) -> &Grid<Cell> {
        &self.grid
    }

    /// Index into the player list of whoever moves next.
    pub fn to_move(&self) -> usize {
        self.to_move
    }

    /// Current status.
    pub fn status(&self) -> Status {
        self.status
    }
}

/// How the engine disposed of a submitted move.
///
/// Rejections and post-game submissions are silent no-ops by design: the
/// UI probes legality by submitting, and a double-click after the final
/// move must not blow up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDisposition {
    /// The move landed and the state advanced.
    Applied,
    /// The placement rules refused the move; state unchanged.
    Rejected,
    /// The game was already decided; the move was ignored.
    Ignored,
}

/// Owns the authoritative [`GameState`] for one game and applies the
/// configured rules to each submitted move.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: GameConfig,
    players: Vec<Player>,
    state: GameState,
    initial: GameState,
}

impl GameEngine {
    /// Builds an engine for `config` with a fixed player list.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimension`] for a zero-sized board and
    /// [`GridError::InvalidArgument`] for a zero connect length, fewer
    /// than two players, or duplicate marks.
    #[instrument(skip(players), fields(players = players.len()))]
    pub fn new(config: GameConfig, players: Vec<Player>) -> Result<Self, GridError> {
        if config.connect_n() == 0 {
            return Err(GridError::InvalidArgument {
                reason: "connect length must be positive",
            });
        }
        if players.len() < 2 {
            return Err(GridError::InvalidArgument {
                reason: "a game needs at least two players",
            });
        }
        for (i, player) in players.iter().enumerate() {
            if players[..i].iter().any(|other| other.mark() == player.mark()) {
                return Err(GridError::InvalidArgument {
                    reason: "players must hold distinct marks",
                });
            }
        }

        let grid = Grid::new(config.width(), config.height(), Cell::Empty)?;
        let initial = GameState::initial(grid);
        info!(%config, "engine ready");
        Ok(Self {
            config,
            players,
            state: initial.clone(),
            initial,
        })
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The fixed player list, in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The authoritative current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.state.to_move]
    }

    /// The winning player, once the game reaches [`Status::Won`].
    pub fn winner(&self) -> Option<&Player> {
        match self.state.status() {
            Status::Won(mark) => self.players.iter().find(|p| p.mark() == mark),
            _ => None,
        }
    }

    /// Submits a move for the current player.
    ///
    /// The current grid is cloned and the clone mutated, so a rejected
    /// move leaves the live state untouched. On success the win check runs
    /// for the mover's mark, then the tie check, then the turn advances
    /// round-robin.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] for a coordinate outside the
    /// board; collaborators are expected never to produce one, so this
    /// fails loudly instead of counting as a rule rejection.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, target: Coord) -> Result<MoveDisposition, GridError> {
        if self.state.status.is_terminal() {
            debug!(%target, "move ignored: game already decided");
            return Ok(MoveDisposition::Ignored);
        }

        let mover = self.state.to_move;
        let mark = self.players[mover].mark();
        let placed = self
            .config
            .policy()
            .apply(&self.state.grid, target, Cell::Mark(mark))?;

        let grid = match placed {
            Placement::Rejected => return Ok(MoveDisposition::Rejected),
            Placement::Applied { grid, .. } => grid,
        };

        let status = if is_n_connected(&grid, self.config.connect_n(), Cell::Mark(mark))? {
            info!(%mark, "game won");
            Status::Won(mark)
        } else if grid.is_full() {
            info!("game tied");
            Status::Tied
        } else {
            Status::InProgress
        };

        let to_move = if status.is_terminal() {
            mover
        } else {
            (mover + 1) % self.players.len()
        };

        self.state = GameState { grid, to_move, status };
        Ok(MoveDisposition::Applied)
    }

    /// Discards all progress and returns to the initial state for this
    /// configuration.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("game reset");
        self.state = self.initial.clone();
    }
}
