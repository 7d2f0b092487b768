//! Console Game
//!
//! This example plays a scripted game to completion, printing the board and
//! status after every move the way a rendering layer would.
//!
//! Key concepts:
//! - One explicitly owned session per game
//! - Rejected moves are harmless no-ops, not errors to handle
//! - Outcome is recomputed from the current board on demand
//!
//! Run with: cargo run --example console_game

use noughts::{GameSession, Outcome};

fn print_status(session: &GameSession) {
    println!("{}\n", session.current());
    match session.outcome() {
        Outcome::InProgress => println!("Next player: {}", session.next_player()),
        Outcome::Win { player, line } => println!("Winner: {player} (line {line:?})"),
        Outcome::Draw => println!("Draw"),
    }
    println!();
}

fn main() {
    println!("=== Console Game Example ===\n");

    let mut session = GameSession::new();
    print_status(&session);

    // X takes the left column; O answers in the middle.
    for cell in [0, 4, 3, 5, 6] {
        if let Err(rejection) = session.play(cell) {
            println!("move on cell {cell} rejected: {rejection}");
            continue;
        }
        print_status(&session);
    }

    // The game is over, so further clicks do nothing.
    if let Err(rejection) = session.play(8) {
        println!("move on cell 8 rejected: {rejection}");
    }

    println!("\n=== Example Complete ===");
}
