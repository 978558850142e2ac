//! Tick-driven round controller.

use std::{collections::VecDeque, mem};

use crate::game::{
    RoundState, RoundStateManagement,
    entities::{BetValue, Outcome, Phase, RoundEvent, RoundView},
};
use crate::peripherals::{AnimationSlots, ButtonSource, Peripherals};

/// Runs a round one tick at a time against injected buttons and
/// animations.
///
/// The controller takes whatever `B` and `S` it's given. Pass `&mut`
/// borrows to keep ownership of the collaborators outside of it, or
/// use a shared handle such as [`crate::ButtonPanel`].
///
/// # Example
///
/// ```
/// use pour_combien::{AnimationBank, Button, ButtonPanel, FrameAnimation, Phase, RoundController};
///
/// let panel = ButtonPanel::new();
/// let mut animations = AnimationBank::<FrameAnimation>::new();
/// let mut controller = RoundController::new(panel.clone(), &mut animations);
///
/// controller.step();
/// assert_eq!(controller.phase(), Phase::CollectMaxBet);
///
/// panel.press_n(Button::Increment, 3);
/// panel.press(Button::Validate);
/// controller.step();
/// assert_eq!(controller.phase(), Phase::CollectHostBet);
/// assert_eq!(controller.current_max_bet(), 3);
/// ```
#[derive(Debug)]
pub struct RoundController<B, S> {
    state: RoundState,
    buttons: B,
    animations: S,
}

impl<B: ButtonSource, S: AnimationSlots> RoundController<B, S> {
    /// A controller about to play the boot animation.
    pub fn new(buttons: B, animations: S) -> Self {
        Self {
            state: RoundState::new(),
            buttons,
            animations,
        }
    }

    /// Advance the round by one tick: drive the current phase's
    /// animation, read the buttons, update the round and possibly move
    /// to the next phase.
    pub fn step(&mut self) {
        let state = mem::take(&mut self.state);
        let mut io = Peripherals::new(&mut self.buttons, &mut self.animations);
        self.state = state.step(&mut io);
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn current_max_bet(&self) -> BetValue {
        self.state.data().max_bet()
    }

    #[must_use]
    pub fn current_host_bet(&self) -> BetValue {
        self.state.data().host_bet()
    }

    #[must_use]
    pub fn current_player_bet(&self) -> BetValue {
        self.state.data().player_bet()
    }

    #[must_use]
    pub fn current_winner(&self) -> Outcome {
        self.state.data().winner()
    }

    #[must_use]
    pub fn view(&self) -> RoundView {
        self.state.get_view()
    }

    pub fn drain_events(&mut self) -> VecDeque<RoundEvent> {
        self.state.drain_events()
    }

    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn buttons(&self) -> &B {
        &self.buttons
    }

    pub fn buttons_mut(&mut self) -> &mut B {
        &mut self.buttons
    }

    pub fn animations(&self) -> &S {
        &self.animations
    }

    pub fn animations_mut(&mut self) -> &mut S {
        &mut self.animations
    }

    /// Give the collaborators back.
    pub fn into_parts(self) -> (B, S) {
        (self.buttons, self.animations)
    }
}
