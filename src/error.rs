//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while dealing cards.
///
/// Both variants are unreachable in a normal single-round game, where at
/// most 21 cards leave a fresh 52-card deck; they exist as a defensive
/// contract for scripted decks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The supplied deck cannot cover the opening deal.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}
