//! Grid board games under one connect-N rule abstraction.
//!
//! Tic-tac-toe, connect-4, and gomoku share a single engine: players
//! alternate placing marks on a 2D grid, a game is won by connecting N
//! marks in a row, column, or diagonal, and ties when the board fills.
//! Each game is nothing more than a [`GameConfig`]: board size, connect
//! length, and a placement policy (direct, or gravity for connect-4).
//!
//! # Example
//!
//! ```
//! use gridgames::{Catalog, Coord, GameKind, MoveDisposition, Status};
//!
//! # fn main() -> anyhow::Result<()> {
//! let catalog = Catalog::builtin();
//! let entry = catalog.get(GameKind::TicTacToe).expect("built-in game");
//! let mut engine = entry.engine()?;
//!
//! let disposition = engine.apply_move(Coord { x: 0, y: 0 })?;
//! assert_eq!(disposition, MoveDisposition::Applied);
//! assert_eq!(engine.state().status(), Status::InProgress);
//!
//! // Probing an occupied cell is a quiet rejection, not an error.
//! assert_eq!(engine.apply_move(Coord { x: 0, y: 0 })?, MoveDisposition::Rejected);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod catalog;
mod connect;
mod engine;
mod error;
mod grid;
mod placement;
mod player;

pub use catalog::{Catalog, GameConfig, GameEntry, GameKind};
pub use connect::is_n_connected;
pub use engine::{GameEngine, GameState, MoveDisposition, Status};
pub use error::GridError;
pub use grid::{Coord, Grid};
pub use placement::{Placement, PlacementPolicy};
pub use player::{Cell, MarkId, Player, PlayerKind};
