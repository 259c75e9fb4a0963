//! Player and dealer hand representations, and hand scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Floor for counting an ace as 11: the running total before the ace must
/// not exceed this.
const SOFT_ACE_CEILING: u8 = 10;

/// The score of a hand.
///
/// Scoring normally yields a numeric total, but an opening hand of exactly
/// two aces resolves the round by itself and is reported as one of the
/// sentinel variants instead. Callers must discriminate; the sentinels
/// compare as neither greater nor less than any numeric total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    /// Plain numeric total. Totals above 21 are returned as-is; busting is
    /// the caller's judgement.
    Numeric(u8),
    /// Opening two-ace hand against anything else.
    DoubleAceWin,
    /// Opening two-ace hand on both sides.
    DoubleAcePush,
}

impl Score {
    /// Returns the numeric total, or `None` for the double-ace sentinels.
    #[must_use]
    pub const fn numeric(self) -> Option<u8> {
        match self {
            Self::Numeric(total) => Some(total),
            Self::DoubleAceWin | Self::DoubleAcePush => None,
        }
    }
}

fn is_double_ace(cards: &[Card]) -> bool {
    cards.len() == 2 && cards[0].rank.is_ace() && cards[1].rank.is_ace()
}

/// Scores a hand.
///
/// An opening hand of exactly two aces short-circuits before any numeric
/// scoring: [`Score::DoubleAcePush`] if `opponent` is also exactly two
/// aces, [`Score::DoubleAceWin`] otherwise (including when no opponent
/// hand is given).
///
/// Numeric scoring accumulates a running total. Face cards count 10, pip
/// cards their face value. An ace counts 11 only while the hand has
/// exactly two cards and the running total before it is at most 10;
/// otherwise it counts 1. In particular, a hand of three or more cards
/// counts every ace as 1 — there is no soft/hard re-evaluation of aces
/// dealt earlier.
#[must_use]
pub fn score_hand(cards: &[Card], opponent: Option<&[Card]>) -> Score {
    if is_double_ace(cards) {
        return match opponent {
            Some(other) if is_double_ace(other) => Score::DoubleAcePush,
            _ => Score::DoubleAceWin,
        };
    }

    let mut total: u8 = 0;
    for card in cards {
        let value = if card.rank.is_ace() && cards.len() == 2 && total <= SOFT_ACE_CEILING {
            11
        } else {
            card.rank.hard_value()
        };
        total = total.saturating_add(value);
    }

    Score::Numeric(total)
}

/// The player's hand.
///
/// Grows only by appending dealt cards; a new round starts from a cleared
/// hand rather than removing cards.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// The dealer's hand.
///
/// The first card is the up card; the second stays hidden until the dealer
/// plays or the player busts.
#[derive(Debug, Clone)]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}
