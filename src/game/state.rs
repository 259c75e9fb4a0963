//! Game state types.

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Dealing the opening hands.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended; only a new round can follow.
    Resolved,
}
