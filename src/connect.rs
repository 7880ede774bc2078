//! Connect-N win detection over the occupied-coordinate ledger.

use crate::error::GridError;
use crate::grid::{Coord, Grid};
use std::collections::HashSet;
use tracing::{instrument, trace};

/// The eight probe directions in commit order: right, left, up, down,
/// down-right, up-right, down-left, up-left. Row 0 is the top, so "up"
/// is negative y.
const DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, -1),
    (0, 1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Reports whether any straight run of at least `n` cells holding `value`
/// exists on the grid, in any of the eight directions.
///
/// The scan walks the occupied ledger. Each matching start cell commits to
/// the first direction (in the order above) whose neighbor also matches,
/// then extends only along that direction. A run is still always found
/// from its leading endpoint, whose only matching neighbor points into the
/// run's interior. Cells covered by a walk are remembered in a seen-set so
/// later ledger entries skip redundant rescans.
///
/// # Errors
///
/// Returns [`GridError::InvalidArgument`] when `n` is zero or `value` is
/// the grid's empty sentinel; matching empty cells against each other is
/// never meaningful.
#[instrument(skip(grid, value))]
pub fn is_n_connected<T: Copy + Eq>(
    grid: &Grid<T>,
    n: usize,
    value: T,
) -> Result<bool, GridError> {
    if n == 0 {
        return Err(GridError::InvalidArgument {
            reason: "connect length must be positive",
        });
    }
    if value == grid.empty() {
        return Err(GridError::InvalidArgument {
            reason: "cannot check connectivity of the empty sentinel",
        });
    }

    let mut seen: HashSet<Coord> = HashSet::new();

    for &start in grid.occupied() {
        if grid.get(start)? != value {
            continue;
        }
        if !seen.insert(start) {
            continue;
        }

        // A lone matching mark is already a run of one.
        if n == 1 {
            return Ok(true);
        }

        let Some((dx, dy)) = first_matching_direction(grid, start, value) else {
            continue;
        };

        let mut run = 1;
        let mut cursor = start;
        while let Some(next) = offset(grid, cursor, dx, dy) {
            if grid.get(next)? != value {
                break;
            }
            seen.insert(next);
            run += 1;
            cursor = next;
        }

        trace!(%start, dx, dy, run, "walked run");
        if run >= n {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Finds the first direction whose immediate neighbor matches `value`.
fn first_matching_direction<T: Copy + Eq>(
    grid: &Grid<T>,
    start: Coord,
    value: T,
) -> Option<(isize, isize)> {
    DIRECTIONS.into_iter().find(|&(dx, dy)| {
        offset(grid, start, dx, dy)
            .is_some_and(|next| grid.get(next) == Ok(value))
    })
}

/// Steps one cell from `from`, returning `None` past the boundary.
fn offset<T: Copy + Eq>(grid: &Grid<T>, from: Coord, dx: isize, dy: isize) -> Option<Coord> {
    let x = from.x.checked_add_signed(dx)?;
    let y = from.y.checked_add_signed(dy)?;
    (x < grid.width() && y < grid.height()).then_some(Coord { x, y })
}
