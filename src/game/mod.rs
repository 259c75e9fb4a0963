//! Game engine and round flow.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;
use crate::event::{Seat, ViewEvent};
use crate::hand::{DealerHand, Hand, Score, score_hand};

mod actions;
mod dealer;
pub mod messages;
pub mod state;

pub use state::GameState;

/// Lowest total the player is allowed to stand on.
pub const STAND_MINIMUM: u8 = 16;

/// The dealer draws until reaching this total.
pub const DEALER_STANDS_AT: u8 = 17;

/// Cards needed to open a round: two to the player, two to the dealer.
const OPENING_DEAL: usize = 4;

/// A single-player blackjack round engine.
///
/// The engine owns the deck, both hands, both scores, the round phase,
/// the current message, and a queue of pending [`ViewEvent`]s. Each
/// public operation runs to completion synchronously; a presentation
/// adapter drains the events and reads state between operations.
pub struct Game {
    /// Cards remaining in the deck. The next card dealt is the last
    /// element. Public so scripted rounds can inspect what is left; see
    /// [`Game::start_round_with_deck`].
    pub deck: Vec<Card>,
    /// The player's hand.
    player_hand: Hand,
    /// The dealer's hand.
    dealer_hand: DealerHand,
    /// The player's score, recomputed whenever the hand changes.
    player_score: Score,
    /// The dealer's score, recomputed whenever the hand changes.
    dealer_score: Score,
    /// Current round phase.
    state: GameState,
    /// Current message, if any.
    message: Option<&'static str>,
    /// View events not yet drained by the presentation layer.
    events: Vec<ViewEvent>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new engine with the given seed.
    ///
    /// The same seed reproduces the same sequence of shuffles. A fresh
    /// engine reports a resolved (empty) round, so `hit` and `stand` are
    /// no-ops until [`Game::start_round`] deals the first hands.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Game, GameState};
    ///
    /// let game = Game::new(42);
    /// assert_eq!(game.state(), GameState::Resolved);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            deck: Vec::new(),
            player_hand: Hand::new(),
            dealer_hand: DealerHand::new(),
            player_score: Score::Numeric(0),
            dealer_score: Score::Numeric(0),
            state: GameState::Resolved,
            message: None,
            events: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Builds the ordered 52-card set, suit-major and rank-minor, then
    /// shuffles it in place.
    fn build_deck(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Removes and returns the top of the deck.
    ///
    /// Returns `None` once the deck is exhausted; the deck is never
    /// replenished mid-round.
    pub fn deal_card(&mut self) -> Option<Card> {
        self.deck.pop()
    }

    /// Starts a new round from a freshly shuffled deck.
    ///
    /// All state from the previous round is discarded. May be called from
    /// any phase.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out mid-deal, which cannot
    /// happen with the fresh 52-card deck this builds.
    pub fn start_round(&mut self) -> Result<(), DealError> {
        let deck = Self::build_deck(&mut self.rng);
        self.start_round_with_deck(deck)
    }

    /// Starts a new round dealing from a caller-supplied deck.
    ///
    /// Cards are dealt from the end of `deck`: two to the player, then
    /// two to the dealer. Intended for scripted rounds and tests; normal
    /// play goes through [`Game::start_round`].
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if `deck` cannot cover the
    /// opening deal.
    pub fn start_round_with_deck(&mut self, deck: Vec<Card>) -> Result<(), DealError> {
        if deck.len() < OPENING_DEAL {
            return Err(DealError::NotEnoughCards);
        }

        self.deck = deck;
        self.player_hand.clear();
        self.dealer_hand.clear();
        self.player_score = Score::Numeric(0);
        self.dealer_score = Score::Numeric(0);
        self.message = None;
        self.state = GameState::Dealing;
        self.events.push(ViewEvent::TableCleared);

        for _ in 0..2 {
            let card = self.deal_card().ok_or(DealError::NoCards)?;
            self.player_hand.add_card(card);
        }
        for _ in 0..2 {
            let card = self.deal_card().ok_or(DealError::NoCards)?;
            self.dealer_hand.add_card(card);
        }

        self.player_score = score_hand(self.player_hand.cards(), Some(self.dealer_hand.cards()));

        // A double-ace opening resolves before anything is rendered.
        match self.player_score {
            Score::DoubleAceWin => {
                self.finish(messages::BLACKJACK_WIN);
                return Ok(());
            }
            Score::DoubleAcePush => {
                self.finish(messages::DOUBLE_ACE_PUSH);
                return Ok(());
            }
            Score::Numeric(_) => {}
        }

        // No opponent hand here: a dealer double ace keeps its sentinel
        // score, stands pat, and the comparison falls through to a push.
        self.dealer_score = score_hand(self.dealer_hand.cards(), None);

        for card in self.player_hand.cards() {
            self.events.push(ViewEvent::card(Seat::Player, *card));
        }
        if let Some(up_card) = self.dealer_hand.up_card() {
            self.events.push(ViewEvent::card(Seat::Dealer, *up_card));
        }

        let player_natural = self.player_score.numeric() == Some(21);
        let dealer_natural = self.dealer_score.numeric() == Some(21);

        if player_natural && dealer_natural {
            self.finish(messages::NATURAL_PUSH);
        } else if player_natural {
            self.finish(messages::BLACKJACK_WIN);
        } else if dealer_natural {
            // The hole card stays hidden even though the round is over.
            self.finish(messages::DEALER_BLACKJACK);
        } else {
            self.state = GameState::PlayerTurn;
            self.events.push(ViewEvent::ActionsOffered);
        }

        Ok(())
    }

    /// Moves the round to its terminal state with the given message.
    fn finish(&mut self, message: &'static str) {
        self.state = GameState::Resolved;
        self.message = Some(message);
        self.events.push(ViewEvent::MessageShown(message));
        self.events.push(ViewEvent::NewRoundOffered);
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the player's current score.
    #[must_use]
    pub const fn player_score(&self) -> Score {
        self.player_score
    }

    /// Returns the dealer's current score.
    #[must_use]
    pub const fn dealer_score(&self) -> Score {
        self.dealer_score
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether the round is over.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state == GameState::Resolved
    }

    /// Returns the current message, if any.
    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        self.message
    }

    /// Takes all view events emitted since the last drain.
    ///
    /// Operations on a resolved round add no events, so an adapter can
    /// drain unconditionally after every call.
    pub fn drain_events(&mut self) -> Vec<ViewEvent> {
        core::mem::take(&mut self.events)
    }
}
