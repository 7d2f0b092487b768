//! Immutable board snapshots.
//!
//! A `Board` is one complete snapshot of the 3x3 grid at a point in time.
//! Boards never mutate in place; placing a mark returns a new board, so
//! snapshots can be shared freely across a history without aliasing hazards.

use super::cell::{Cell, Player};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cells on the board.
pub const BOARD_CELLS: usize = 9;

/// Number of cells per row and column.
pub const BOARD_SIDE: usize = 3;

/// A complete 9-cell snapshot of grid state.
///
/// Cells are indexed 0..9 in row-major order: index 0 is the top-left
/// corner, index 8 the bottom-right.
///
/// # Example
///
/// ```rust
/// use noughts::core::{Board, Cell, Player};
///
/// let empty = Board::default();
/// assert!(empty.cells().iter().all(Cell::is_empty));
///
/// let board = empty.with_cell(4, Player::X).unwrap();
/// assert_eq!(board.cell(4), Some(Cell::Occupied(Player::X)));
/// // The original snapshot is unchanged.
/// assert_eq!(empty.cell(4), Some(Cell::Empty));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create the all-empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cell at `index`, or `None` if `index` is outside 0..9.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Get all cells in row-major order.
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Place `player`'s mark at `index`, returning a new board.
    ///
    /// This is a pure function - the receiver is left unchanged. Returns
    /// `None` if `index` is outside 0..9 or the cell is already occupied.
    ///
    /// # Example
    ///
    /// ```rust
    /// use noughts::core::{Board, Player};
    ///
    /// let board = Board::new().with_cell(0, Player::X).unwrap();
    ///
    /// // Occupied cell: rejected.
    /// assert!(board.with_cell(0, Player::O).is_none());
    /// // Out of range: rejected.
    /// assert!(board.with_cell(9, Player::O).is_none());
    /// ```
    pub fn with_cell(&self, index: usize, player: Player) -> Option<Board> {
        match self.cell(index) {
            Some(Cell::Empty) => {
                let mut cells = self.cells;
                cells[index] = Cell::Occupied(player);
                Some(Board { cells })
            }
            _ => None,
        }
    }

    /// Check whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }
}

impl fmt::Display for Board {
    /// Render the board as three rows of marks, e.g. `X O . / . X . / . . O`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIDE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..BOARD_SIDE {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cells[row * BOARD_SIDE + col])?;
            }
        }
        Ok(())
    }
}
