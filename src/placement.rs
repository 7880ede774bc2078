//! Per-game placement policies: how a requested coordinate becomes a
//! landed mark, or a rejection.

use crate::error::GridError;
use crate::grid::{Coord, Grid};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How a game turns a requested coordinate into a placed mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PlacementPolicy {
    /// The mark lands exactly where requested (tic-tac-toe, gomoku).
    Direct,
    /// The mark falls to the lowest empty cell of the requested column
    /// (connect-4). The requested row is ignored; the whole column is
    /// scanned, so callers never need to guess a landing row.
    GravityDrop,
}

/// Outcome of applying a placement policy.
///
/// Rejection is an ordinary value, not an error: probing an occupied cell
/// or a full column is routine interactive play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement<T> {
    /// The mark landed. Carries the updated grid and the landing cell.
    Applied {
        /// Grid with the mark placed (the input grid is untouched).
        grid: Grid<T>,
        /// Where the mark ended up; differs from the request under gravity.
        landed: Coord,
    },
    /// The placement rules refused the move; nothing changed.
    Rejected,
}

impl PlacementPolicy {
    /// Validates `target` and, if playable, returns a new grid with
    /// `value` placed. The input grid is cloned first so a rejected or
    /// speculative move can never corrupt live state.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] when `target` lies outside the
    /// grid; that is a caller contract violation, not a rule rejection.
    #[instrument(skip(self, grid, value))]
    pub fn apply<T: Copy + Eq>(
        self,
        grid: &Grid<T>,
        target: Coord,
        value: T,
    ) -> Result<Placement<T>, GridError> {
        let landed = match self.resolve(grid, target)? {
            Some(coord) => coord,
            None => {
                debug!(%target, "placement rejected");
                return Ok(Placement::Rejected);
            }
        };

        let mut next = grid.clone();
        next.set(landed, value)?;
        debug!(%target, %landed, "placement applied");
        Ok(Placement::Applied { grid: next, landed })
    }

    /// Resolves the landing cell for `target`, or `None` when unplayable.
    fn resolve<T: Copy + Eq>(
        self,
        grid: &Grid<T>,
        target: Coord,
    ) -> Result<Option<Coord>, GridError> {
        match self {
            PlacementPolicy::Direct => {
                Ok(grid.is_vacant(target)?.then_some(target))
            }
            PlacementPolicy::GravityDrop => {
                // Bounds-check the request as given, then drop from the floor up.
                grid.get(target)?;
                for y in (0..grid.height()).rev() {
                    let cell = Coord { x: target.x, y };
                    if grid.is_vacant(cell)? {
                        return Ok(Some(cell));
                    }
                }
                Ok(None)
            }
        }
    }
}
