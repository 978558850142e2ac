//! Round state definitions for the FSM.
//!
//! Each state represents one phase of the round. They carry no data of
//! their own; the bets and the winner live in the shared round data.

use crate::game::entities::Phase;

/// Ties a state type to the phase it represents.
pub trait PhaseMarker {
    const PHASE: Phase;
}

macro_rules! impl_phase_marker {
    ($($state:ident),+) => {
        $(
            impl PhaseMarker for $state {
                const PHASE: Phase = Phase::$state;
            }
        )+
    };
}

/// Boot animation, played once when the device comes up
#[derive(Debug, Default)]
pub struct Start {}

/// Players agree on the largest bet allowed this round
#[derive(Debug, Default)]
pub struct CollectMaxBet {}

/// The host (game master) enters a bet
#[derive(Debug, Default)]
pub struct CollectHostBet {}

/// The player enters a bet
#[derive(Debug, Default)]
pub struct CollectPlayerBet {}

/// Suspense animation before the reveal
#[derive(Debug, Default)]
pub struct Resolving {}

/// Winner is displayed
#[derive(Debug, Default)]
pub struct ShowWinner {}

impl_phase_marker!(
    Start,
    CollectMaxBet,
    CollectHostBet,
    CollectPlayerBet,
    Resolving,
    ShowWinner
);
