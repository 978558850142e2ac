//! Collaborators of the round controller: the push-buttons and the
//! per-phase animations.
//!
//! The controller only sees them through [`ButtonSource`] and
//! [`AnimationSlots`]. Software implementations ([`ButtonPanel`],
//! [`FrameAnimation`]) are provided for headless use, tests and the
//! simulator.

pub mod animation;
pub mod bank;
pub mod buttons;
pub mod config;
pub mod errors;

pub use animation::{Animation, AnimationState, FrameAnimation};
pub use bank::{AnimationBank, AnimationSlots};
pub use buttons::{ButtonPanel, ButtonSource};
pub use config::AnimationConfig;
pub use errors::{BankError, BankResult};

/// Borrowed collaborators for the duration of one tick.
#[derive(Debug)]
pub struct Peripherals<'p, B, S> {
    pub buttons: &'p mut B,
    pub animations: &'p mut S,
}

impl<'p, B: ButtonSource, S: AnimationSlots> Peripherals<'p, B, S> {
    pub fn new(buttons: &'p mut B, animations: &'p mut S) -> Self {
        Self {
            buttons,
            animations,
        }
    }
}
