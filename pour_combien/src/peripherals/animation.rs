//! Animation handles and a frame-counted software animation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of an animation handle.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum AnimationState {
    Stopped,
    Running,
    Finished,
}

impl AnimationState {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished)
    }
}

impl fmt::Display for AnimationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Stopped => "stopped",
            Self::Running => "running",
            Self::Finished => "finished",
        };
        write!(f, "{repr}")
    }
}

/// An animation the round controller can play.
///
/// `advance` is the only call that does work: it renders a frame and
/// applies a pending `stop`.
pub trait Animation {
    fn state(&self) -> AnimationState;

    fn start(&mut self);

    fn advance(&mut self);

    /// Request a stop. Takes effect on the next `advance`, after which
    /// the animation is back to `Stopped` and can be started again.
    fn stop(&mut self);
}

impl<T: Animation + ?Sized> Animation for &mut T {
    fn state(&self) -> AnimationState {
        (**self).state()
    }

    fn start(&mut self) {
        (**self).start();
    }

    fn advance(&mut self) {
        (**self).advance();
    }

    fn stop(&mut self) {
        (**self).stop();
    }
}

impl<T: Animation + ?Sized> Animation for Box<T> {
    fn state(&self) -> AnimationState {
        (**self).state()
    }

    fn start(&mut self) {
        (**self).start();
    }

    fn advance(&mut self) {
        (**self).advance();
    }

    fn stop(&mut self) {
        (**self).stop();
    }
}

/// Animation lasting a fixed number of frames, one frame per advance.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FrameAnimation {
    frames: u32,
    frame: u32,
    state: AnimationState,
    stop_requested: bool,
    /// Frames rendered over the animation's whole life.
    rendered: u64,
}

impl FrameAnimation {
    #[must_use]
    pub const fn new(frames: u32) -> Self {
        Self {
            frames,
            frame: 0,
            state: AnimationState::Stopped,
            stop_requested: false,
            rendered: 0,
        }
    }

    #[must_use]
    pub const fn frames(&self) -> u32 {
        self.frames
    }

    /// Current frame within the running animation.
    #[must_use]
    pub const fn frame(&self) -> u32 {
        self.frame
    }

    #[must_use]
    pub const fn rendered(&self) -> u64 {
        self.rendered
    }
}

impl Animation for FrameAnimation {
    fn state(&self) -> AnimationState {
        self.state
    }

    fn start(&mut self) {
        if self.state == AnimationState::Stopped {
            self.state = AnimationState::Running;
            self.frame = 0;
            self.stop_requested = false;
        }
    }

    fn advance(&mut self) {
        if self.stop_requested {
            self.stop_requested = false;
            self.state = AnimationState::Stopped;
            self.frame = 0;
            return;
        }
        if self.state != AnimationState::Running {
            return;
        }
        if self.frame < self.frames {
            self.frame += 1;
            self.rendered += 1;
        }
        if self.frame >= self.frames {
            self.state = AnimationState::Finished;
        }
    }

    fn stop(&mut self) {
        self.stop_requested = true;
    }
}
