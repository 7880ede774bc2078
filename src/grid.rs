//! Dense 2D grid with an occupied-coordinate ledger.
//!
//! The grid knows nothing about turns or win conditions. It stores cell
//! values, checks bounds, and keeps an append-only list of coordinates
//! that have been written, so win checks never rescan empty cells.

use crate::error::GridError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell coordinate: `x` is the column, `y` is the row, both 0-indexed.
///
/// Row 0 is the top of the board. This convention is applied uniformly
/// across the crate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({x}, {y})")]
pub struct Coord {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
}

/// Fixed-size 2D grid of cell values.
///
/// `set` is deliberately overwrite-blind: it records the value and appends
/// the coordinate to the occupied ledger unconditionally. The placement
/// rules above this layer enforce "no overwrite"; layering it that way
/// keeps `is_full` a simple placement count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    empty: T,
    cells: Vec<T>,
    occupied: Vec<Coord>,
}

impl<T: Copy + Eq> Grid<T> {
    /// Creates a grid with every cell set to the empty sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimension`] if either dimension is zero.
    pub fn new(width: usize, height: usize, empty: T) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            empty,
            cells: vec![empty; width * height],
            occupied: Vec::new(),
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The empty sentinel this grid was created with.
    pub fn empty(&self) -> T {
        self.empty
    }

    /// Coordinates that have been written, in placement order.
    pub fn occupied(&self) -> &[Coord] {
        &self.occupied
    }

    fn index(&self, coord: Coord) -> Result<usize, GridError> {
        if coord.x >= self.width || coord.y >= self.height {
            return Err(GridError::OutOfBounds {
                x: coord.x,
                y: coord.y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(coord.y * self.width + coord.x)
    }

    /// Returns the value at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] for coordinates outside the grid.
    pub fn get(&self, coord: Coord) -> Result<T, GridError> {
        Ok(self.cells[self.index(coord)?])
    }

    /// Checks whether the cell at `coord` still holds the empty sentinel.
    pub fn is_vacant(&self, coord: Coord) -> Result<bool, GridError> {
        Ok(self.get(coord)? == self.empty)
    }

    /// Writes `value` at `coord` and appends the coordinate to the
    /// occupied ledger. No emptiness check happens here; callers that must
    /// not overwrite pre-check with [`Grid::is_vacant`].
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] for coordinates outside the grid.
    #[instrument(skip(self, value))]
    pub fn set(&mut self, coord: Coord, value: T) -> Result<(), GridError> {
        let idx = self.index(coord)?;
        self.cells[idx] = value;
        self.occupied.push(coord);
        Ok(())
    }

    /// True once every cell has been placed into.
    ///
    /// Counts placements via the occupied ledger, which equals the count
    /// of non-empty cells as long as no overwrite ever happens.
    pub fn is_full(&self) -> bool {
        self.occupied.len() == self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 3, 0u8),
            Err(GridError::InvalidDimension { width: 0, height: 3 })
        );
        assert_eq!(
            Grid::new(3, 0, 0u8),
            Err(GridError::InvalidDimension { width: 3, height: 0 })
        );
    }

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(3, 2, 0u8).unwrap();
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(grid.get(Coord { x, y }), Ok(0));
            }
        }
        assert!(grid.occupied().is_empty());
        assert!(!grid.is_full());
    }

    #[test]
    fn set_records_value_and_ledger_entry() {
        let mut grid = Grid::new(3, 3, 0u8).unwrap();
        grid.set(Coord { x: 1, y: 2 }, 7).unwrap();
        assert_eq!(grid.get(Coord { x: 1, y: 2 }), Ok(7));
        assert_eq!(grid.occupied(), &[Coord { x: 1, y: 2 }]);
    }

    #[test]
    fn out_of_bounds_access_fails() {
        let mut grid = Grid::new(3, 3, 0u8).unwrap();
        let oob = Coord { x: 3, y: 0 };
        assert_eq!(
            grid.get(oob),
            Err(GridError::OutOfBounds { x: 3, y: 0, width: 3, height: 3 })
        );
        assert!(grid.set(oob, 1).is_err());
        assert!(grid.occupied().is_empty());
    }

    #[test]
    fn clone_is_independent() {
        let mut grid = Grid::new(2, 2, 0u8).unwrap();
        grid.set(Coord { x: 0, y: 0 }, 1).unwrap();

        let mut copy = grid.clone();
        copy.set(Coord { x: 1, y: 1 }, 2).unwrap();

        assert_eq!(grid.get(Coord { x: 1, y: 1 }), Ok(0));
        assert_eq!(grid.occupied().len(), 1);
        assert_eq!(copy.occupied().len(), 2);
    }

    #[test]
    fn is_full_tracks_placement_count() {
        let mut grid = Grid::new(2, 2, 0u8).unwrap();
        for y in 0..2 {
            for x in 0..2 {
                assert!(!grid.is_full());
                grid.set(Coord { x, y }, 1).unwrap();
            }
        }
        assert!(grid.is_full());
    }
}
