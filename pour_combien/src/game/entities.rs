use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::constants::PHASE_COUNT;

/// Placeholder for bet values.
pub type BetValue = u32;

/// Stages of a round, in the order they're played. A phase's ordinal
/// is also the index of its animation slot.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Phase {
    Start,
    CollectMaxBet,
    CollectHostBet,
    CollectPlayerBet,
    Resolving,
    ShowWinner,
}

impl Phase {
    pub const ALL: [Phase; PHASE_COUNT] = [
        Phase::Start,
        Phase::CollectMaxBet,
        Phase::CollectHostBet,
        Phase::CollectPlayerBet,
        Phase::Resolving,
        Phase::ShowWinner,
    ];

    /// Ordinal of the phase, used to address its animation slot.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether the phase reads a bet from the buttons.
    #[must_use]
    pub const fn is_collecting(self) -> bool {
        matches!(
            self,
            Self::CollectMaxBet | Self::CollectHostBet | Self::CollectPlayerBet
        )
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Start => "start",
            Self::CollectMaxBet => "max bet",
            Self::CollectHostBet => "host bet",
            Self::CollectPlayerBet => "player bet",
            Self::Resolving => "resolving",
            Self::ShowWinner => "show winner",
        };
        write!(f, "{repr}")
    }
}

#[derive(Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum PhaseError {
    #[error("no phase at index {0}")]
    OutOfRange(usize),
}

impl TryFrom<usize> for Phase {
    type Error = PhaseError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value)
            .copied()
            .ok_or(PhaseError::OutOfRange(value))
    }
}

/// Who won the round, if anyone.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Outcome {
    #[default]
    None,
    Host,
    Player,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::None => "nobody",
            Self::Host => "host",
            Self::Player => "player",
        };
        write!(f, "{repr}")
    }
}

/// The three push-buttons on the device.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Button {
    Increment,
    Decrement,
    Validate,
}

impl Button {
    pub const ALL: [Button; 3] = [Button::Increment, Button::Decrement, Button::Validate];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Increment => "+",
            Self::Decrement => "-",
            Self::Validate => "ok",
        };
        write!(f, "{repr}")
    }
}

/// Things that happen during a round that are worth telling the shell
/// about. They queue up in the round data until drained.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum RoundEvent {
    PhaseChanged { from: Phase, to: Phase },
    BetAdjusted { phase: Phase, value: BetValue },
    InputDiscarded { phase: Phase },
    ValidateRejected { phase: Phase, value: BetValue },
    WinnerResolved(Outcome),
    RoundReset,
}

impl fmt::Display for RoundEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::PhaseChanged { from, to } => format!("{from} -> {to}"),
            Self::BetAdjusted { phase, value } => format!("{phase} set to {value}"),
            Self::InputDiscarded { phase } => {
                format!("{phase}: more decrements than increments, input discarded")
            }
            Self::ValidateRejected { phase, value } => {
                format!("{phase}: {value} is out of range, keep adjusting")
            }
            Self::WinnerResolved(outcome) => format!("{outcome} wins"),
            Self::RoundReset => "round reset".to_string(),
        };
        write!(f, "{repr}")
    }
}

/// Snapshot of the round as of the last tick.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RoundView {
    pub phase: Phase,
    pub max_bet: BetValue,
    pub host_bet: BetValue,
    pub player_bet: BetValue,
    pub winner: Outcome,
}

impl fmt::Display for RoundView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] max={} host={} player={} winner={}",
            self.phase, self.max_bet, self.host_bet, self.player_bet, self.winner
        )
    }
}
