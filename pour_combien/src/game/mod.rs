//! Round engine: the phase state machine and the game logic around it.
//!
//! This module provides:
//! - Type-safe finite state machine with one state per round phase
//! - Pure bet/winner rules
//! - Round events and serializable views

pub mod constants;
pub mod entities;
pub mod functional;
pub mod state_machine;
pub mod states;

pub use state_machine::{Round, RoundData, RoundState, RoundStateManagement};
