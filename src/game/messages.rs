//! User-facing message strings.
//!
//! Every message the engine can emit through
//! [`ViewEvent::MessageShown`](crate::event::ViewEvent::MessageShown).
//! Adapters that need to branch on an outcome can match on these
//! constants.

/// Player wins with an opening 21 or an opening pair of aces.
pub const BLACKJACK_WIN: &str = "Blackjack! You win!";

/// Both opening hands are a pair of aces.
pub const DOUBLE_ACE_PUSH: &str = "Push! Both players have double Aces.";

/// Both opening hands total 21.
pub const NATURAL_PUSH: &str = "Push! Both players have Blackjack.";

/// Only the dealer's opening hand totals 21.
pub const DEALER_BLACKJACK: &str = "Dealer Blackjack! You lose.";

/// The player drew past 21.
pub const PLAYER_BUST: &str = "You busted! You lose.";

/// Advisory shown when the player tries to stand below the minimum.
pub const STAND_BELOW_MINIMUM: &str = "You must hit until your score is 16 or higher.";

/// The dealer drew past 21.
pub const DEALER_BUST: &str = "Dealer busted! You win!";

/// The player's final total beats the dealer's.
pub const PLAYER_WINS: &str = "You win!";

/// The dealer's final total beats the player's.
pub const DEALER_WINS: &str = "You lose!";

/// Final totals are tied, or neither side has a comparable total.
pub const PUSH: &str = "Push!";
