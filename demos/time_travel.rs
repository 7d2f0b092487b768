//! Time Travel
//!
//! This example walks through history navigation: rendering a move list,
//! jumping to a past position, and branching a new timeline from it.
//!
//! Key concepts:
//! - Jumping moves the pointer; history stays intact
//! - Playing from a past position discards the recorded future
//! - Display ordering (ascending/descending) is presentation-only and never
//!   touches the session's canonical sequence
//!
//! Run with: cargo run --example time_travel

use noughts::GameSession;

fn print_move_list(session: &GameSession, ascending: bool) {
    let mut lines: Vec<String> = session
        .history()
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| match &entry.played {
            Some(played) => format!("  #{index}: {} on cell {}", played.player, played.cell),
            None => format!("  #{index}: game start"),
        })
        .collect();
    if !ascending {
        lines.reverse();
    }
    for line in lines {
        println!("{line}");
    }
}

fn main() {
    println!("=== Time Travel Example ===\n");

    let mut session = GameSession::new();
    for cell in [0, 4, 1, 3, 2] {
        session.play(cell).expect("scripted move is legal");
    }

    println!("After five moves ({:?}):", session.outcome());
    print_move_list(&session, true);

    println!("\nSame list, descending (presentation-side reversal):");
    print_move_list(&session, false);

    session.jump_to(2).expect("index 2 is recorded");
    println!(
        "\nJumped to #2; history still has {} entries, {} to move",
        session.history().len(),
        session.next_player()
    );

    session.play(3).expect("cell 3 is empty at move 2");
    println!("\nPlayed cell 3 from the past; the old future is gone:");
    print_move_list(&session, true);
    println!("Outcome is now {:?}", session.outcome());

    println!("\n=== Example Complete ===");
}
