//! Declarative render and message requests for the presentation layer.
//!
//! The engine never touches a display surface. Each operation appends
//! events describing what a view should now show; an adapter drains them
//! with [`Game::drain_events`] and may read engine state for anything the
//! events do not carry.
//!
//! [`Game::drain_events`]: crate::game::Game::drain_events

use crate::card::{Card, Rank};

/// Table area a card is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// The player's card area.
    Player,
    /// The dealer's card area.
    Dealer,
}

/// A single render or message request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// All card areas and the message line should be cleared for a new
    /// round.
    TableCleared,
    /// One seat's card area should be cleared before being re-rendered
    /// (the dealer reveal re-renders the full hand).
    SeatCleared(Seat),
    /// A card should be rendered into the given seat.
    CardDealt {
        /// Where to render the card.
        seat: Seat,
        /// The card's rank.
        rank: Rank,
        /// The card's suit glyph (`♥ ♦ ♣ ♠`).
        suit_glyph: char,
    },
    /// A message should be shown to the player. See [`messages`] for the
    /// full set.
    ///
    /// [`messages`]: crate::game::messages
    MessageShown(&'static str),
    /// Hit and stand affordances should be offered.
    ActionsOffered,
    /// A new-round affordance should be offered.
    NewRoundOffered,
}

impl ViewEvent {
    /// Builds the render request for a newly shown card.
    #[must_use]
    pub const fn card(seat: Seat, card: Card) -> Self {
        Self::CardDealt {
            seat,
            rank: card.rank,
            suit_glyph: card.suit.glyph(),
        }
    }
}
