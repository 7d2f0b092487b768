//! The stateful shell around the pure core: one session per game.
//!
//! A [`GameSession`] owns the move history and a pointer into it. All of
//! its operations are synchronous and deterministic; there is no I/O, no
//! concurrency, and no fatal-error class. Sessions are explicitly
//! constructed and explicitly owned, so independent games (tests, lobbies)
//! coexist without interference.

mod error;
mod history;

pub use error::SessionError;
pub use history::{History, HistoryEntry, PlayedMove};

use crate::core::{evaluate, Board, Outcome, Player, BOARD_CELLS};
use serde::{Deserialize, Serialize};

/// A turn-based game session with time-travel navigation.
///
/// The session records every board snapshot it produces. Jumping to a past
/// snapshot only moves the pointer; playing a move from a past snapshot
/// starts a new timeline and discards the recorded future.
///
/// The player to move is derived from the pointer's parity (even index: X,
/// odd index: O) - turn order is never stored independently, so it can
/// never drift out of sync with the history.
///
/// # Example
///
/// ```rust
/// use noughts::core::{Outcome, Player};
/// use noughts::session::GameSession;
///
/// let mut session = GameSession::new();
/// session.play(0)?; // X
/// session.play(4)?; // O
/// assert_eq!(session.next_player(), Player::X);
/// assert_eq!(session.move_count(), 2);
///
/// // Travel back to the start and branch: the two moves are discarded.
/// session.jump_to(0)?;
/// session.play(8)?; // X again, on a fresh timeline
/// assert_eq!(session.move_count(), 1);
/// assert_eq!(session.outcome(), Outcome::InProgress);
/// # Ok::<(), noughts::session::SessionError>(())
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct GameSession {
    history: History,
    current_index: usize,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Create a session holding only the all-empty board, with X to move.
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current_index: 0,
        }
    }

    /// Place the next player's mark at `cell_index`.
    ///
    /// The move is rejected - leaving history and pointer untouched - when
    /// `cell_index` is outside 0..9, when the current board's outcome is no
    /// longer [`Outcome::InProgress`], or when the cell is occupied.
    ///
    /// Playing from a past position truncates the history to the current
    /// snapshot before appending, discarding the old future.
    pub fn play(&mut self, cell_index: usize) -> Result<(), SessionError> {
        if cell_index >= BOARD_CELLS {
            return Err(SessionError::CellOutOfRange { index: cell_index });
        }
        if self.outcome().is_final() {
            return Err(SessionError::GameOver);
        }

        let player = self.next_player();
        let next = self
            .current()
            .with_cell(cell_index, player)
            .ok_or(SessionError::CellOccupied { index: cell_index })?;

        self.history = self
            .history
            .branch(self.current_index, PlayedMove::new(player, cell_index), next);
        self.current_index = self.history.len() - 1;
        Ok(())
    }

    /// Move the pointer to a recorded snapshot.
    ///
    /// Jumping never truncates: the recorded future stays available until a
    /// move is played from the earlier position. Out-of-range targets are
    /// rejected without touching state.
    pub fn jump_to(&mut self, index: usize) -> Result<(), SessionError> {
        if index >= self.history.len() {
            return Err(SessionError::MoveOutOfRange {
                index,
                len: self.history.len(),
            });
        }
        self.current_index = index;
        Ok(())
    }

    /// Get the board snapshot the pointer selects.
    pub fn current(&self) -> &Board {
        // current_index is kept within bounds by play() and jump_to()
        &self.history.entries()[self.current_index].board
    }

    /// Compute the outcome of the current board.
    pub fn outcome(&self) -> Outcome {
        evaluate(self.current())
    }

    /// Get the player whose turn it is, derived from pointer parity.
    ///
    /// Still computable once the game is over (even index: X, odd: O),
    /// though no further move will be accepted.
    pub fn next_player(&self) -> Player {
        if self.current_index % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Number of moves recorded, independent of the pointer.
    pub fn move_count(&self) -> usize {
        self.history.len() - 1
    }

    /// Get the pointer's position in the history.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Get the full history for rendering a move list.
    pub fn history(&self) -> &History {
        &self.history
    }
}
