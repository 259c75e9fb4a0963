use crate::error::DealError;
use crate::event::{Seat, ViewEvent};
use crate::hand::score_hand;

use super::{Game, GameState, STAND_MINIMUM, messages};

impl Game {
    /// Player action: hit (draw a card).
    ///
    /// A silent no-op outside the player's turn, including after the
    /// round has resolved. Drawing past 21 resolves the round and reveals
    /// the dealer's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is exhausted. Unreachable in a normal
    /// round; see [`DealError`].
    pub fn hit(&mut self) -> Result<(), DealError> {
        if self.state != GameState::PlayerTurn {
            return Ok(());
        }

        let card = self.deal_card().ok_or(DealError::NoCards)?;
        self.player_hand.add_card(card);
        // Three or more cards now, so every ace scores 1 from here on.
        self.player_score = score_hand(self.player_hand.cards(), None);
        self.events.push(ViewEvent::card(Seat::Player, card));

        if self.player_score.numeric().is_some_and(|total| total > 21) {
            self.finish(messages::PLAYER_BUST);
            self.reveal_dealer_hand();
        }

        Ok(())
    }

    /// Player action: stand.
    ///
    /// A silent no-op outside the player's turn. Standing on a total
    /// below [`STAND_MINIMUM`] is rejected with an advisory message and
    /// the turn continues. Otherwise the dealer plays out their hand and
    /// the round resolves before this call returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out while the dealer draws.
    /// Unreachable in a normal round; see [`DealError`].
    pub fn stand(&mut self) -> Result<(), DealError> {
        if self.state != GameState::PlayerTurn {
            return Ok(());
        }

        if self
            .player_score
            .numeric()
            .is_some_and(|total| total < STAND_MINIMUM)
        {
            self.message = Some(messages::STAND_BELOW_MINIMUM);
            self.events
                .push(ViewEvent::MessageShown(messages::STAND_BELOW_MINIMUM));
            return Ok(());
        }

        self.state = GameState::DealerTurn;
        self.dealer_play()
    }
}
