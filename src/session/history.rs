//! Move history tracking.
//!
//! Provides immutable tracking of board snapshots over time, following
//! functional programming principles. A history always starts from the
//! all-empty board; every later snapshot carries the move that produced it.

use crate::core::{Board, Player};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single placed mark.
///
/// Moves are immutable values: which player marked which cell, and when.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PlayedMove {
    /// The player who placed the mark
    pub player: Player,
    /// The cell index that was marked (0..9, row-major)
    pub cell: usize,
    /// When the move was played
    pub timestamp: DateTime<Utc>,
}

impl PlayedMove {
    /// Create a move record stamped with the current time.
    pub fn new(player: Player, cell: usize) -> Self {
        Self {
            player,
            cell,
            timestamp: Utc::now(),
        }
    }
}

/// One history entry: a board snapshot plus the move that produced it.
///
/// The first entry of every history is the all-empty board and carries no
/// move; every later entry records the single mark that distinguishes it
/// from its predecessor.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The board state after the move
    pub board: Board,
    /// The move that produced this snapshot; `None` only for entry 0
    pub played: Option<PlayedMove>,
}

/// Ordered history of board snapshots, index 0 the all-empty board.
///
/// History is immutable - [`record`](History::record) and
/// [`branch`](History::branch) return a new history rather than mutating
/// in place. Snapshots differ from their predecessor in exactly one cell,
/// which was empty in the predecessor.
///
/// # Example
///
/// ```rust
/// use noughts::core::{Board, Player};
/// use noughts::session::{History, PlayedMove};
///
/// let history = History::new();
/// assert_eq!(history.len(), 1); // the empty board
///
/// let board = Board::new().with_cell(0, Player::X).unwrap();
/// let history = history.record(PlayedMove::new(Player::X, 0), board);
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.board(1), Some(&board));
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create a new history holding only the all-empty board.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry {
                board: Board::new(),
                played: None,
            }],
        }
    }

    /// Append a snapshot, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the entry added.
    pub fn record(&self, played: PlayedMove, board: Board) -> Self {
        let mut entries = self.entries.clone();
        entries.push(HistoryEntry {
            board,
            played: Some(played),
        });
        Self { entries }
    }

    /// Keep entries `0..=at`, then append a snapshot, returning a new history.
    ///
    /// This is the branching rule: playing from a past point in history
    /// starts a new timeline and discards the recorded future. Entries up to
    /// and including `at` are preserved unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use noughts::core::{Board, Player};
    /// use noughts::session::{History, PlayedMove};
    ///
    /// let first = Board::new().with_cell(0, Player::X).unwrap();
    /// let second = first.with_cell(4, Player::O).unwrap();
    ///
    /// let history = History::new()
    ///     .record(PlayedMove::new(Player::X, 0), first)
    ///     .record(PlayedMove::new(Player::O, 4), second);
    ///
    /// // Branch from the start: the old future is gone.
    /// let replacement = Board::new().with_cell(8, Player::X).unwrap();
    /// let branched = history.branch(0, PlayedMove::new(Player::X, 8), replacement);
    ///
    /// assert_eq!(branched.len(), 2);
    /// assert_eq!(branched.board(0), Some(&Board::new()));
    /// assert_eq!(branched.board(1), Some(&replacement));
    /// // The original history is unchanged.
    /// assert_eq!(history.len(), 3);
    /// ```
    pub fn branch(&self, at: usize, played: PlayedMove, board: Board) -> Self {
        let mut entries: Vec<HistoryEntry> = self.entries.iter().take(at + 1).cloned().collect();
        entries.push(HistoryEntry {
            board,
            played: Some(played),
        });
        Self { entries }
    }

    /// Get all entries in insertion order.
    ///
    /// Presentation layers that want a reversed move list apply their own
    /// reversal over this slice; the canonical sequence itself is always
    /// insertion-ordered.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Get the board at `index`, or `None` if out of range.
    pub fn board(&self, index: usize) -> Option<&Board> {
        self.entries.get(index).map(|entry| &entry.board)
    }

    /// Number of recorded snapshots, including the initial empty board.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a history holds at least the initial empty board.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the moves that were played, in order.
    pub fn moves(&self) -> impl Iterator<Item = &PlayedMove> {
        self.entries.iter().filter_map(|entry| entry.played.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_holds_the_empty_board() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert_eq!(history.board(0), Some(&Board::new()));
        assert!(history.entries()[0].played.is_none());
        assert_eq!(history.moves().count(), 0);
    }

    #[test]
    fn record_appends_a_snapshot() {
        let board = Board::new().with_cell(4, Player::X).unwrap();
        let history = History::new().record(PlayedMove::new(Player::X, 4), board);

        assert_eq!(history.len(), 2);
        assert_eq!(history.board(1), Some(&board));
        assert_eq!(history.moves().count(), 1);
    }

    #[test]
    fn record_is_immutable() {
        let history = History::new();
        let board = Board::new().with_cell(0, Player::X).unwrap();

        let new_history = history.record(PlayedMove::new(Player::X, 0), board);

        assert_eq!(history.len(), 1);
        assert_eq!(new_history.len(), 2);
    }

    #[test]
    fn branch_discards_the_recorded_future() {
        let first = Board::new().with_cell(0, Player::X).unwrap();
        let second = first.with_cell(1, Player::O).unwrap();
        let third = second.with_cell(2, Player::X).unwrap();

        let history = History::new()
            .record(PlayedMove::new(Player::X, 0), first)
            .record(PlayedMove::new(Player::O, 1), second)
            .record(PlayedMove::new(Player::X, 2), third);

        let replacement = first.with_cell(8, Player::O).unwrap();
        let branched = history.branch(1, PlayedMove::new(Player::O, 8), replacement);

        assert_eq!(branched.len(), 3);
        assert_eq!(branched.board(0), Some(&Board::new()));
        assert_eq!(branched.board(1), Some(&first));
        assert_eq!(branched.board(2), Some(&replacement));
    }

    #[test]
    fn branch_from_last_entry_behaves_like_record() {
        let first = Board::new().with_cell(0, Player::X).unwrap();
        let history = History::new().record(PlayedMove::new(Player::X, 0), first);

        let second = first.with_cell(4, Player::O).unwrap();
        let branched = history.branch(1, PlayedMove::new(Player::O, 4), second);

        assert_eq!(branched.len(), 3);
        assert_eq!(branched.board(2), Some(&second));
    }

    #[test]
    fn moves_iterates_in_play_order() {
        let first = Board::new().with_cell(6, Player::X).unwrap();
        let second = first.with_cell(3, Player::O).unwrap();

        let history = History::new()
            .record(PlayedMove::new(Player::X, 6), first)
            .record(PlayedMove::new(Player::O, 3), second);

        let cells: Vec<usize> = history.moves().map(|m| m.cell).collect();
        assert_eq!(cells, vec![6, 3]);
    }

    #[test]
    fn history_serializes_correctly() {
        let board = Board::new().with_cell(2, Player::X).unwrap();
        let history = History::new().record(PlayedMove::new(Player::X, 2), board);

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: History = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
