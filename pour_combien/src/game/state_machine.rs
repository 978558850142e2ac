//! Round state machine implementation.
//!
//! Each phase of a round is a `Round<T>` with `T` one of the state types
//! in [`super::states`]. Moving from one phase to the next is a `From`
//! conversion between those types, so a round can only follow the
//! transitions defined here. [`RoundState`] wraps every possible phase
//! and runs one tick at a time.

use enum_dispatch::enum_dispatch;
use log::{debug, info, warn};
use std::{collections::VecDeque, fmt, mem};

use super::constants::MAX_EVENTS;
use super::entities::{BetValue, Button, Outcome, Phase, RoundEvent, RoundView};
use super::functional::{is_bet_within, is_max_bet_valid, net_count, resolve_winner};
use super::states::{
    CollectHostBet, CollectMaxBet, CollectPlayerBet, PhaseMarker, Resolving, ShowWinner, Start,
};
use crate::peripherals::{AnimationSlots, ButtonSource, Peripherals};

/// Round data shared across all states. Only the state machine mutates it.
#[derive(Debug, Default)]
pub struct RoundData {
    pub(crate) max_bet: BetValue,
    pub(crate) host_bet: BetValue,
    pub(crate) player_bet: BetValue,
    pub(crate) winner: Outcome,
    /// Events not yet drained by the shell, oldest first.
    pub(crate) events: VecDeque<RoundEvent>,
}

impl RoundData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn max_bet(&self) -> BetValue {
        self.max_bet
    }

    #[must_use]
    pub fn host_bet(&self) -> BetValue {
        self.host_bet
    }

    #[must_use]
    pub fn player_bet(&self) -> BetValue {
        self.player_bet
    }

    #[must_use]
    pub fn winner(&self) -> Outcome {
        self.winner
    }

    pub(crate) fn push_event(&mut self, event: RoundEvent) {
        if self.events.len() >= MAX_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

/// Views and events, available whatever the phase.
#[enum_dispatch]
pub trait RoundStateManagement {
    fn phase(&self) -> Phase;

    fn data(&self) -> &RoundData;

    fn drain_events(&mut self) -> VecDeque<RoundEvent>;

    #[must_use]
    fn get_view(&self) -> RoundView;
}

/// A round in phase `T`.
#[derive(Debug)]
pub struct Round<T> {
    pub data: RoundData,
    pub state: T,
}

impl<T: PhaseMarker> RoundStateManagement for Round<T> {
    fn phase(&self) -> Phase {
        T::PHASE
    }

    fn data(&self) -> &RoundData {
        &self.data
    }

    fn drain_events(&mut self) -> VecDeque<RoundEvent> {
        mem::take(&mut self.data.events)
    }

    fn get_view(&self) -> RoundView {
        RoundView {
            phase: T::PHASE,
            max_bet: self.data.max_bet,
            host_bet: self.data.host_bet,
            player_bet: self.data.player_bet,
            winner: self.data.winner,
        }
    }
}

impl<T: PhaseMarker> Round<T> {
    /// Play the phase's animation. True once it's finished, in which case
    /// the animation has also been released for the next round.
    fn animation_done<B, S>(&self, io: &mut Peripherals<'_, B, S>) -> bool
    where
        B: ButtonSource,
        S: AnimationSlots,
    {
        io.animations.drive(T::PHASE);
        if !io.animations.query(T::PHASE).is_finished() {
            return false;
        }
        io.animations.release(T::PHASE);
        true
    }
}

/// Phases where a bet is entered with the buttons.
trait BetCollection: PhaseMarker {
    fn bet_mut(data: &mut RoundData) -> &mut BetValue;

    /// Whether the bet currently in `data` can be locked in.
    fn accepts(data: &RoundData) -> bool;
}

impl BetCollection for CollectMaxBet {
    fn bet_mut(data: &mut RoundData) -> &mut BetValue {
        &mut data.max_bet
    }

    fn accepts(data: &RoundData) -> bool {
        is_max_bet_valid(data.max_bet)
    }
}

impl BetCollection for CollectHostBet {
    fn bet_mut(data: &mut RoundData) -> &mut BetValue {
        &mut data.host_bet
    }

    fn accepts(data: &RoundData) -> bool {
        is_bet_within(data.host_bet, data.max_bet)
    }
}

impl BetCollection for CollectPlayerBet {
    fn bet_mut(data: &mut RoundData) -> &mut BetValue {
        &mut data.player_bet
    }

    fn accepts(data: &RoundData) -> bool {
        is_bet_within(data.player_bet, data.max_bet)
    }
}

impl<T: BetCollection> Round<T> {
    /// One tick of bet entry. The live bet follows the net press count on
    /// every tick. A validate press is always consumed, together with the
    /// increment and decrement counts; it only ends the phase if the bet
    /// is acceptable.
    fn collect_bet<B, S>(&mut self, io: &mut Peripherals<'_, B, S>) -> bool
    where
        B: ButtonSource,
        S: AnimationSlots,
    {
        let phase = T::PHASE;
        io.animations.drive(phase);

        let increments = io.buttons.press_count(Button::Increment);
        let decrements = io.buttons.press_count(Button::Decrement);
        match net_count(increments, decrements) {
            Some(value) => self.adjust_bet(value),
            None => {
                io.buttons.reset(Button::Increment);
                io.buttons.reset(Button::Decrement);
                debug!("{phase}: discarded {increments} increments and {decrements} decrements");
                self.data.push_event(RoundEvent::InputDiscarded { phase });
            }
        }

        if io.buttons.press_count(Button::Validate) == 0 {
            return false;
        }
        io.buttons.reset_all();

        if T::accepts(&self.data) {
            io.animations.release(phase);
            return true;
        }
        let value = *T::bet_mut(&mut self.data);
        warn!("{phase}: rejected validation of {value}");
        self.data
            .push_event(RoundEvent::ValidateRejected { phase, value });
        false
    }

    fn adjust_bet(&mut self, value: BetValue) {
        let bet = T::bet_mut(&mut self.data);
        if *bet == value {
            return;
        }
        *bet = value;
        debug!("{}: bet adjusted to {value}", T::PHASE);
        self.data.push_event(RoundEvent::BetAdjusted {
            phase: T::PHASE,
            value,
        });
    }
}

impl Round<Start> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: RoundData::new(),
            state: Start {},
        }
    }
}

impl Default for Round<Start> {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Round<Start>> for Round<CollectMaxBet> {
    fn from(value: Round<Start>) -> Self {
        Self {
            data: value.data,
            state: CollectMaxBet {},
        }
    }
}

impl From<Round<CollectMaxBet>> for Round<CollectHostBet> {
    fn from(value: Round<CollectMaxBet>) -> Self {
        info!("max bet locked at {}", value.data.max_bet);
        Self {
            data: value.data,
            state: CollectHostBet {},
        }
    }
}

impl From<Round<CollectHostBet>> for Round<CollectPlayerBet> {
    fn from(value: Round<CollectHostBet>) -> Self {
        info!("host bet locked");
        Self {
            data: value.data,
            state: CollectPlayerBet {},
        }
    }
}

impl From<Round<CollectPlayerBet>> for Round<Resolving> {
    fn from(value: Round<CollectPlayerBet>) -> Self {
        info!("player bet locked");
        Self {
            data: value.data,
            state: Resolving {},
        }
    }
}

/// The winner is decided as the suspense animation ends.
impl From<Round<Resolving>> for Round<ShowWinner> {
    fn from(mut value: Round<Resolving>) -> Self {
        let data = &mut value.data;
        data.winner = resolve_winner(data.max_bet, data.host_bet, data.player_bet);
        info!(
            "host bet {} vs player bet {} (max {}): {} wins",
            data.host_bet, data.player_bet, data.max_bet, data.winner
        );
        data.push_event(RoundEvent::WinnerResolved(data.winner));
        Self {
            data: value.data,
            state: ShowWinner {},
        }
    }
}

/// Clear the bets and the winner for the next round. The boot animation
/// is not replayed.
impl From<Round<ShowWinner>> for Round<CollectMaxBet> {
    fn from(mut value: Round<ShowWinner>) -> Self {
        let data = &mut value.data;
        data.max_bet = 0;
        data.host_bet = 0;
        data.player_bet = 0;
        data.winner = Outcome::None;
        data.push_event(RoundEvent::RoundReset);
        Self {
            data: value.data,
            state: CollectMaxBet {},
        }
    }
}

/// Convert to the next phase and record the phase change.
fn transition<F, T>(round: Round<F>) -> Round<T>
where
    F: PhaseMarker,
    T: PhaseMarker,
    Round<T>: From<Round<F>>,
{
    let mut next = Round::<T>::from(round);
    info!("phase {} -> {}", F::PHASE, T::PHASE);
    next.data.push_event(RoundEvent::PhaseChanged {
        from: F::PHASE,
        to: T::PHASE,
    });
    next
}

/// The round finite state machine. Wrapper around all possible phases,
/// managing the transition from one phase to the next.
#[derive(Debug)]
#[enum_dispatch(RoundStateManagement)]
pub enum RoundState {
    Start(Round<Start>),
    CollectMaxBet(Round<CollectMaxBet>),
    CollectHostBet(Round<CollectHostBet>),
    CollectPlayerBet(Round<CollectPlayerBet>),
    Resolving(Round<Resolving>),
    ShowWinner(Round<ShowWinner>),
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Start(_) => "starting up".to_string(),
            Self::CollectMaxBet(round) => format!("choosing max bet ({})", round.data.max_bet),
            Self::CollectHostBet(round) => format!(
                "host choosing a bet ({} of {})",
                round.data.host_bet, round.data.max_bet
            ),
            Self::CollectPlayerBet(round) => format!(
                "player choosing a bet ({} of {})",
                round.data.player_bet, round.data.max_bet
            ),
            Self::Resolving(_) => "resolving".to_string(),
            Self::ShowWinner(round) => format!("{} wins", round.data.winner),
        };
        write!(f, "{repr}")
    }
}

impl RoundState {
    #[must_use]
    pub fn new() -> Self {
        Self::Start(Round::<Start>::new())
    }

    /// Main state transitions. Runs the current phase for one tick and
    /// returns the phase to run on the next one.
    #[must_use]
    pub fn step<B, S>(self, io: &mut Peripherals<'_, B, S>) -> Self
    where
        B: ButtonSource,
        S: AnimationSlots,
    {
        match self {
            Self::Start(round) => {
                if round.animation_done(io) {
                    Self::CollectMaxBet(transition(round))
                } else {
                    Self::Start(round)
                }
            }
            Self::CollectMaxBet(mut round) => {
                if round.collect_bet(io) {
                    Self::CollectHostBet(transition(round))
                } else {
                    Self::CollectMaxBet(round)
                }
            }
            Self::CollectHostBet(mut round) => {
                if round.collect_bet(io) {
                    Self::CollectPlayerBet(transition(round))
                } else {
                    Self::CollectHostBet(round)
                }
            }
            Self::CollectPlayerBet(mut round) => {
                if round.collect_bet(io) {
                    Self::Resolving(transition(round))
                } else {
                    Self::CollectPlayerBet(round)
                }
            }
            Self::Resolving(round) => {
                if round.animation_done(io) {
                    Self::ShowWinner(transition(round))
                } else {
                    Self::Resolving(round)
                }
            }
            Self::ShowWinner(round) => {
                if round.animation_done(io) {
                    Self::CollectMaxBet(transition(round))
                } else {
                    Self::ShowWinner(round)
                }
            }
        }
    }
}
