//! Pure round rules, kept free of any button or animation handling.

use super::constants::MIN_MAX_BET;
use super::entities::{BetValue, Outcome};

/// Net press count used as the live bet: increments minus decrements.
/// `None` when decrements outnumber increments, in which case the
/// sample is invalid and should be discarded.
#[must_use]
pub fn net_count(increments: u32, decrements: u32) -> Option<BetValue> {
    increments.checked_sub(decrements)
}

/// A max bet can be locked in once it offers at least two choices.
#[must_use]
pub fn is_max_bet_valid(max_bet: BetValue) -> bool {
    max_bet >= MIN_MAX_BET
}

/// Host and player bets must be within `1..=max_bet`.
#[must_use]
pub fn is_bet_within(bet: BetValue, max_bet: BetValue) -> bool {
    bet > 0 && bet <= max_bet
}

/// Decide the round winner.
///
/// A matching guess always goes to the host. With the narrowest range
/// (a max bet of 2) a miss means the player dodged the host's guess, so
/// the player wins. With wider ranges a miss is nobody's win.
#[must_use]
pub fn resolve_winner(max_bet: BetValue, host_bet: BetValue, player_bet: BetValue) -> Outcome {
    if host_bet == player_bet {
        Outcome::Host
    } else if max_bet == MIN_MAX_BET {
        Outcome::Player
    } else {
        Outcome::None
    }
}
