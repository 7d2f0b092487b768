//! Noughts: a deterministic tic-tac-toe engine with time travel
//!
//! Noughts follows a "pure core, imperative shell" split. Board evaluation
//! is a pure function with no side effects; the only state in the crate is
//! the move history owned by a [`GameSession`], which lets a caller jump to
//! any recorded position and resume play from it.
//!
//! # Core Concepts
//!
//! - **Board**: an immutable 9-cell snapshot of the 3x3 grid
//! - **Outcome**: the derived result of a snapshot - in progress, win with
//!   its line, or draw - recomputed on demand, never stored
//! - **History**: immutable tracking of every snapshot; playing a move from
//!   a past position starts a new timeline and discards the old future
//!
//! # Example
//!
//! ```rust
//! use noughts::{GameSession, Outcome, Player};
//!
//! let mut session = GameSession::new();
//! session.play(0)?; // X
//! session.play(4)?; // O
//! session.play(1)?; // X
//! session.play(3)?; // O
//! session.play(2)?; // X completes the top row
//!
//! assert_eq!(
//!     session.outcome(),
//!     Outcome::Win { player: Player::X, line: [0, 1, 2] }
//! );
//!
//! // Travel back and play a different move: the win is discarded.
//! session.jump_to(2)?;
//! session.play(3)?;
//! assert_eq!(session.outcome(), Outcome::InProgress);
//! # Ok::<(), noughts::SessionError>(())
//! ```

pub mod core;
pub mod session;

// Re-export commonly used types
pub use core::{evaluate, Board, Cell, Outcome, Player};
pub use session::{GameSession, History, PlayedMove, SessionError};
