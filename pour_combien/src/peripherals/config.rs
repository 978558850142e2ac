//! Animation configuration models.

use serde::{Deserialize, Serialize};

use crate::game::{
    constants::{DEFAULT_ANIMATION_FRAMES, MAX_ANIMATION_FRAMES},
    entities::Phase,
};

/// Frames per phase animation. `None` leaves the phase's slot empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub start: Option<u32>,
    pub collect_max_bet: Option<u32>,
    pub collect_host_bet: Option<u32>,
    pub collect_player_bet: Option<u32>,
    pub resolving: Option<u32>,
    pub show_winner: Option<u32>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::uniform(DEFAULT_ANIMATION_FRAMES)
    }
}

impl AnimationConfig {
    /// Same animation length for every phase
    #[must_use]
    pub const fn uniform(frames: u32) -> Self {
        Self {
            start: Some(frames),
            collect_max_bet: Some(frames),
            collect_host_bet: Some(frames),
            collect_player_bet: Some(frames),
            resolving: Some(frames),
            show_winner: Some(frames),
        }
    }

    /// No animations at all
    #[must_use]
    pub const fn headless() -> Self {
        Self {
            start: None,
            collect_max_bet: None,
            collect_host_bet: None,
            collect_player_bet: None,
            resolving: None,
            show_winner: None,
        }
    }

    #[must_use]
    pub const fn frames_for(&self, phase: Phase) -> Option<u32> {
        match phase {
            Phase::Start => self.start,
            Phase::CollectMaxBet => self.collect_max_bet,
            Phase::CollectHostBet => self.collect_host_bet,
            Phase::CollectPlayerBet => self.collect_player_bet,
            Phase::Resolving => self.resolving,
            Phase::ShowWinner => self.show_winner,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        for phase in Phase::ALL {
            if let Some(frames) = self
                .frames_for(phase)
                .filter(|frames| *frames > MAX_ANIMATION_FRAMES)
            {
                return Err(format!(
                    "{phase} animation has {frames} frames, at most {MAX_ANIMATION_FRAMES} allowed"
                ));
            }
        }
        Ok(())
    }
}
