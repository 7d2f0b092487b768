//! Board evaluation: win, draw, or in-progress.
//!
//! `evaluate` is the crate's single judge of game results. It is a total
//! pure function over any well-formed board - no state, no side effects,
//! no errors.

use super::board::Board;
use super::cell::Player;
use serde::{Deserialize, Serialize};

/// The 8 winning lines as index triples: 3 rows, 3 columns, 2 diagonals.
///
/// Lines are checked in this fixed order. Under the one-move-per-turn rule
/// at most one line can be newly completed, so the order never changes the
/// result; it only pins down which line is reported, for determinism.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// The derived result of a board snapshot.
///
/// Outcomes are never stored; they are recomputed from the current board on
/// demand (at most 8 line checks over 9 cells, so caching would only buy an
/// invalidation invariant).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Outcome {
    /// The game continues; at least one cell is empty and no line is complete.
    InProgress,
    /// `player` completed `line` (a [`WINNING_LINES`] triple).
    Win { player: Player, line: [usize; 3] },
    /// Every cell is occupied and no line is complete.
    Draw,
}

impl Outcome {
    /// Check if this outcome ends the game.
    pub fn is_final(&self) -> bool {
        !matches!(self, Self::InProgress)
    }

    /// Get the winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Self::Win { player, .. } => Some(*player),
            _ => None,
        }
    }
}

/// Compute the outcome of a single board snapshot.
///
/// Checks every winning line before falling back to `Draw`: a full board
/// that contains a completed line is a win, never a draw.
///
/// # Example
///
/// ```rust
/// use noughts::core::{evaluate, Board, Outcome, Player};
///
/// assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
///
/// let top_row = Board::new()
///     .with_cell(0, Player::X)
///     .and_then(|b| b.with_cell(1, Player::X))
///     .and_then(|b| b.with_cell(2, Player::X))
///     .unwrap();
///
/// assert_eq!(
///     evaluate(&top_row),
///     Outcome::Win { player: Player::X, line: [0, 1, 2] }
/// );
/// ```
pub fn evaluate(board: &Board) -> Outcome {
    let cells = board.cells();
    for line in &WINNING_LINES {
        let [a, b, c] = *line;
        if let Some(player) = cells[a].player() {
            if cells[b] == cells[a] && cells[c] == cells[a] {
                return Outcome::Win { player, line: *line };
            }
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a board from a 9-character pattern of `X`, `O` and `.`.
    fn board(pattern: &str) -> Board {
        let mut board = Board::new();
        for (index, mark) in pattern.chars().enumerate() {
            board = match mark {
                'X' => board.with_cell(index, Player::X).unwrap(),
                'O' => board.with_cell(index, Player::O).unwrap(),
                _ => board,
            };
        }
        board
    }

    #[test]
    fn empty_board_is_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn partial_board_is_in_progress() {
        assert_eq!(evaluate(&board("XO.X.....")), Outcome::InProgress);
    }

    #[test]
    fn each_line_is_detected_for_both_players() {
        for line in &WINNING_LINES {
            for player in [Player::X, Player::O] {
                let mut filled = Board::new();
                for &index in line {
                    filled = filled.with_cell(index, player).unwrap();
                }
                assert_eq!(
                    evaluate(&filled),
                    Outcome::Win {
                        player,
                        line: *line
                    }
                );
            }
        }
    }

    #[test]
    fn full_board_without_line_is_draw() {
        // X O X
        // X O O
        // O X X
        assert_eq!(evaluate(&board("XOXXOOOXX")), Outcome::Draw);
    }

    #[test]
    fn full_board_with_line_is_a_win_not_a_draw() {
        // X X X
        // O O X
        // O X O
        let full = board("XXXOOXOXO");
        assert!(full.is_full());
        assert_eq!(
            evaluate(&full),
            Outcome::Win {
                player: Player::X,
                line: [0, 1, 2]
            }
        );
    }

    #[test]
    fn win_reports_the_completed_line() {
        let diagonal = board("X...X...X");
        assert_eq!(
            evaluate(&diagonal),
            Outcome::Win {
                player: Player::X,
                line: [0, 4, 8]
            }
        );
    }

    #[test]
    fn is_final_identifies_terminal_outcomes() {
        assert!(!Outcome::InProgress.is_final());
        assert!(Outcome::Draw.is_final());
        assert!(Outcome::Win {
            player: Player::O,
            line: [2, 5, 8]
        }
        .is_final());
    }

    #[test]
    fn winner_is_only_present_for_wins() {
        assert_eq!(Outcome::InProgress.winner(), None);
        assert_eq!(Outcome::Draw.winner(), None);
        assert_eq!(
            Outcome::Win {
                player: Player::O,
                line: [0, 3, 6]
            }
            .winner(),
            Some(Player::O)
        );
    }

    #[test]
    fn evaluate_is_deterministic() {
        let snapshot = board("XOX.O.X..");
        assert_eq!(evaluate(&snapshot), evaluate(&snapshot));
    }

    #[test]
    fn outcome_serializes_correctly() {
        let outcome = Outcome::Win {
            player: Player::X,
            line: [2, 4, 6],
        };
        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, deserialized);
    }
}
