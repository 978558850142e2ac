/// Number of round phases, and so the number of animation slots.
pub const PHASE_COUNT: usize = 6;

/// Smallest max bet a round can be played with.
pub const MIN_MAX_BET: u32 = 2;

/// Round events kept before the oldest ones are dropped.
pub const MAX_EVENTS: usize = 64;

/// Frames per animation when nothing else is configured.
pub const DEFAULT_ANIMATION_FRAMES: u32 = 30;

/// Upper bound on a configured animation length.
pub const MAX_ANIMATION_FRAMES: u32 = 10_000;
