//! Session error types.

use thiserror::Error;

/// Rejection signals for malformed session requests.
///
/// None of these are fatal: a rejected operation leaves the session exactly
/// as it was, so callers driven by stale UI events may simply discard the
/// error. Occupied cells and finished games are expected in normal use;
/// out-of-range indices indicate a caller bug but are still rejected
/// defensively rather than panicking.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The requested cell index is outside the 3x3 grid
    #[error("cell index {index} is outside the 3x3 grid (valid: 0..9)")]
    CellOutOfRange { index: usize },

    /// The requested cell already holds a mark
    #[error("cell {index} is already occupied")]
    CellOccupied { index: usize },

    /// The game has ended; no further moves are accepted
    #[error("the game is over; no further moves are accepted")]
    GameOver,

    /// The requested history index does not exist
    #[error("history index {index} is out of range (history length {len})")]
    MoveOutOfRange { index: usize, len: usize },
}
