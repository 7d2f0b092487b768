//! Cell and player value types for the 3x3 grid.
//!
//! Both types are small immutable values. A `Cell` never changes after a
//! board is created; placing a mark produces a whole new board instead.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two players.
///
/// # Example
///
/// ```rust
/// use noughts::core::Player;
///
/// assert_eq!(Player::X.opponent(), Player::O);
/// assert_eq!(Player::O.opponent(), Player::X);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the other player.
    pub fn opponent(&self) -> Player {
        match self {
            Self::X => Player::O,
            Self::O => Player::X,
        }
    }

    /// Get the player's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One position on the grid: empty, or marked by a player.
///
/// # Example
///
/// ```rust
/// use noughts::core::{Cell, Player};
///
/// let cell = Cell::Occupied(Player::X);
/// assert!(!cell.is_empty());
/// assert_eq!(cell.player(), Some(Player::X));
/// assert_eq!(Cell::Empty.player(), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    /// Check whether the cell is unmarked.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Get the occupying player, if any.
    pub fn player(&self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::Occupied(player) => Some(*player),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("."),
            Self::Occupied(player) => f.write_str(player.name()),
        }
    }
}
