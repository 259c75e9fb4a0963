//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages one round at a time:
//! deck construction and shuffling, dealing, scoring (including the
//! double-Ace opening rule), player hit/stand, dealer play, and
//! resolution. Rendering is left to a presentation adapter, which drains
//! the engine's [`ViewEvent`] stream and reads engine state.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::Game;
//!
//! let mut game = Game::new(42);
//! game.start_round().expect("fresh deck cannot run out");
//! for event in game.drain_events() {
//!     // hand each event to the presentation layer
//!     let _ = event;
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::DealError;
pub use event::{Seat, ViewEvent};
pub use game::{Game, GameState, messages};
pub use hand::{DealerHand, Hand, Score, score_hand};
