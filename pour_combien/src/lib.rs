//! # Pour Combien
//!
//! Round logic for a two-player guessing game played on a small device
//! with three push-buttons (increment, decrement, validate) and one
//! animation per game phase.
//!
//! The round is a type-safe finite state machine (FSM) using
//! `enum_dispatch` for zero-cost trait dispatch over its phases:
//!
//! - **Start**: boot animation, played once
//! - **CollectMaxBet**: players agree on the largest allowed bet (at least 2)
//! - **CollectHostBet**: the host enters a bet in `1..=max`
//! - **CollectPlayerBet**: the player enters a bet in `1..=max`
//! - **Resolving**: suspense animation, after which the winner is decided
//! - **ShowWinner**: winner display, then the next round starts at
//!   CollectMaxBet
//!
//! ## Core Modules
//!
//! - [`game`]: Round state machine, entities and round rules
//! - [`peripherals`]: Button and animation interfaces plus software
//!   implementations
//! - [`controller`]: The tick-driven [`RoundController`]
//!
//! ## Example
//!
//! ```
//! use pour_combien::{AnimationBank, AnimationConfig, ButtonPanel, Phase, RoundController};
//!
//! let panel = ButtonPanel::new();
//! let bank = AnimationBank::from_frames(&AnimationConfig::uniform(2));
//! let mut controller = RoundController::new(panel.clone(), bank);
//!
//! controller.step();
//! controller.step();
//! assert_eq!(controller.phase(), Phase::CollectMaxBet);
//! ```

/// Tick-driven round controller.
pub mod controller;
pub use controller::RoundController;

/// Round state machine, entities and rules.
pub mod game;
pub use game::{
    Round, RoundData, RoundState, RoundStateManagement,
    constants::{self, MIN_MAX_BET, PHASE_COUNT},
    entities::{self, BetValue, Button, Outcome, Phase, PhaseError, RoundEvent, RoundView},
    functional,
};

/// Buttons and animations the controller drives.
pub mod peripherals;
pub use peripherals::{
    Animation, AnimationBank, AnimationConfig, AnimationSlots, AnimationState, BankError,
    ButtonPanel, ButtonSource, FrameAnimation, Peripherals,
};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;
