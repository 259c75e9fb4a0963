//! CLI blackjack demo.
//!
//! A minimal presentation adapter: it drains the engine's view events,
//! renders them as terminal output, and forwards hit/stand input.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Game, GameState, Score, Seat, ViewEvent};

fn main() {
    println!("Blackjack (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(seed);

    loop {
        if let Err(err) = game.start_round() {
            println!("Deal error: {err}");
            return;
        }
        render(&mut game);

        while game.state() == GameState::PlayerTurn {
            if let Score::Numeric(total) = game.player_score() {
                println!("Your total: {total}");
            }

            let result = match prompt_line("[h]it or [s]tand: ").as_str() {
                "h" | "hit" => game.hit(),
                "s" | "stand" => game.stand(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
            render(&mut game);
        }

        match prompt_line("New round? (y/n): ").as_str() {
            "y" | "yes" => {}
            _ => return,
        }
    }
}

fn render(game: &mut Game) {
    for event in game.drain_events() {
        match event {
            ViewEvent::TableCleared => println!("\n--- new round ---"),
            ViewEvent::SeatCleared(seat) => println!("{}:", seat_name(seat)),
            ViewEvent::CardDealt {
                seat,
                rank,
                suit_glyph,
            } => {
                println!("  {} draws {}{}", seat_name(seat), rank.label(), suit_glyph);
            }
            ViewEvent::MessageShown(message) => println!("{message}"),
            ViewEvent::ActionsOffered | ViewEvent::NewRoundOffered => {}
        }
    }
}

fn seat_name(seat: Seat) -> &'static str {
    match seat {
        Seat::Player => "You",
        Seat::Dealer => "Dealer",
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}
