use crate::error::DealError;
use crate::event::{Seat, ViewEvent};
use crate::hand::score_hand;

use super::{DEALER_STANDS_AT, Game, messages};

impl Game {
    /// Reveals the dealer's hand, re-rendering it from scratch.
    pub(super) fn reveal_dealer_hand(&mut self) {
        self.dealer_hand.reveal_hole();
        self.events.push(ViewEvent::SeatCleared(Seat::Dealer));
        for card in self.dealer_hand.cards() {
            self.events.push(ViewEvent::card(Seat::Dealer, *card));
        }
    }

    /// Plays out the dealer's hand and resolves the round.
    ///
    /// The dealer draws while holding a numeric total below
    /// [`DEALER_STANDS_AT`] and stops immediately on busting. A sentinel
    /// score never satisfies the draw condition, so a dealer holding a
    /// double-ace opening stands pat.
    pub(super) fn dealer_play(&mut self) -> Result<(), DealError> {
        self.reveal_dealer_hand();

        while self
            .dealer_score
            .numeric()
            .is_some_and(|total| total < DEALER_STANDS_AT)
        {
            let card = self.deal_card().ok_or(DealError::NoCards)?;
            self.dealer_hand.add_card(card);
            self.dealer_score = score_hand(self.dealer_hand.cards(), None);
            self.events.push(ViewEvent::card(Seat::Dealer, card));

            if self.dealer_score.numeric().is_some_and(|total| total > 21) {
                self.finish(messages::DEALER_BUST);
                return Ok(());
            }
        }

        self.resolve();
        Ok(())
    }

    /// Compares the final scores. Sentinel scores compare as neither
    /// greater nor less than any total, so either side holding one falls
    /// through to a push.
    fn resolve(&mut self) {
        let message = match (self.dealer_score.numeric(), self.player_score.numeric()) {
            (Some(dealer), Some(player)) if dealer > player => messages::DEALER_WINS,
            (Some(dealer), Some(player)) if dealer < player => messages::PLAYER_WINS,
            _ => messages::PUSH,
        };
        self.finish(message);
    }
}
