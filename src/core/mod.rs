//! Core game types and board evaluation.
//!
//! This module contains the pure functional core of the engine:
//! - Cell and player value types
//! - Immutable board snapshots
//! - Board evaluation (win, draw, or in-progress)
//!
//! All logic in this module is pure (no side effects); the stateful shell
//! lives in [`crate::session`].

mod board;
mod cell;
mod outcome;

pub use board::{Board, BOARD_CELLS, BOARD_SIDE};
pub use cell::{Cell, Player};
pub use outcome::{evaluate, Outcome, WINNING_LINES};
