//! Phase-indexed animation slots.

use std::array;

use super::{
    animation::{Animation, AnimationState, FrameAnimation},
    config::AnimationConfig,
    errors::{BankError, BankResult},
};
use crate::game::{constants::PHASE_COUNT, entities::Phase};

/// What the round controller needs from its animations: drive, query
/// and release the animation of a phase.
///
/// A phase without an animation behaves as if its animation had already
/// finished. Animations are presentation only and never hold a round
/// back.
pub trait AnimationSlots {
    /// Start the phase's animation if it's stopped, advance it once and
    /// report where it's at.
    fn drive(&mut self, phase: Phase) -> AnimationState;

    /// State of the phase's animation, without advancing it.
    fn query(&self, phase: Phase) -> AnimationState;

    /// Stop the phase's animation and advance it once so the stop takes
    /// effect before the slot is used again.
    fn release(&mut self, phase: Phase);
}

impl<S: AnimationSlots + ?Sized> AnimationSlots for &mut S {
    fn drive(&mut self, phase: Phase) -> AnimationState {
        (**self).drive(phase)
    }

    fn query(&self, phase: Phase) -> AnimationState {
        (**self).query(phase)
    }

    fn release(&mut self, phase: Phase) {
        (**self).release(phase);
    }
}

/// One optional animation per phase.
///
/// The bank doesn't care whether it owns its animations: `A` can be an
/// owned animation, a `Box<dyn Animation>`, or a `&mut` borrow of an
/// animation that lives elsewhere.
#[derive(Debug)]
pub struct AnimationBank<A> {
    slots: [Option<A>; PHASE_COUNT],
}

impl<A> Default for AnimationBank<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> AnimationBank<A> {
    /// A bank with every slot empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: array::from_fn(|_| None),
        }
    }

    #[must_use]
    pub fn with_slot(mut self, phase: Phase, animation: A) -> Self {
        self.insert(phase, animation);
        self
    }

    /// Put an animation in the phase's slot, returning the one it replaces.
    pub fn insert(&mut self, phase: Phase, animation: A) -> Option<A> {
        self.slots[phase.index()].replace(animation)
    }

    pub fn remove(&mut self, phase: Phase) -> Option<A> {
        self.slots[phase.index()].take()
    }

    #[must_use]
    pub fn get(&self, phase: Phase) -> Option<&A> {
        self.slots[phase.index()].as_ref()
    }

    pub fn get_mut(&mut self, phase: Phase) -> Option<&mut A> {
        self.slots[phase.index()].as_mut()
    }

    /// Number of populated slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AnimationBank<FrameAnimation> {
    /// Software animations sized from the config.
    #[must_use]
    pub fn from_frames(config: &AnimationConfig) -> Self {
        Self {
            slots: array::from_fn(|i| {
                config
                    .frames_for(Phase::ALL[i])
                    .map(FrameAnimation::new)
            }),
        }
    }
}

/// Slots are taken in phase order. A shorter list leaves the remaining
/// phases without animations.
impl<A> TryFrom<Vec<Option<A>>> for AnimationBank<A> {
    type Error = BankError;

    fn try_from(value: Vec<Option<A>>) -> BankResult<Self> {
        if value.len() > PHASE_COUNT {
            return Err(BankError::TooManySlots {
                len: value.len(),
                max: PHASE_COUNT,
            });
        }
        let mut bank = Self::new();
        for (slot, animation) in bank.slots.iter_mut().zip(value) {
            *slot = animation;
        }
        Ok(bank)
    }
}

impl<A: Animation> AnimationSlots for AnimationBank<A> {
    fn drive(&mut self, phase: Phase) -> AnimationState {
        let Some(animation) = self.get_mut(phase) else {
            return AnimationState::Finished;
        };
        if animation.state() == AnimationState::Stopped {
            animation.start();
        }
        animation.advance();
        animation.state()
    }

    fn query(&self, phase: Phase) -> AnimationState {
        self.get(phase)
            .map_or(AnimationState::Finished, |animation| animation.state())
    }

    fn release(&mut self, phase: Phase) {
        if let Some(animation) = self.get_mut(phase) {
            animation.stop();
            animation.advance();
        }
    }
}
