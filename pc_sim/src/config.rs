//! Simulator configuration management.
//!
//! Consolidates environment variable reads and CLI overrides into a
//! validated configuration.

use pour_combien::{AnimationConfig, constants::DEFAULT_ANIMATION_FRAMES};
use std::{str::FromStr, time::Duration};

/// Values given on the command line. They win over the environment.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub frames: Option<u32>,
    pub tick_ms: Option<u64>,
    pub max_ticks: Option<u64>,
    pub headless: bool,
    pub json: bool,
}

/// Complete simulator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Animation lengths used to build the animation bank
    pub animations: AnimationConfig,
    /// Pause between ticks
    pub tick_interval: Duration,
    /// Stop after this many ticks, if set
    pub max_ticks: Option<u64>,
    /// Print a JSON round view after every tick
    pub json: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            animations: AnimationConfig::default(),
            tick_interval: Duration::ZERO,
            max_ticks: None,
            json: false,
        }
    }
}

impl SimConfig {
    /// Load configuration from environment variables, then apply the
    /// CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but can't be parsed, or if the
    /// resulting configuration is invalid
    pub fn from_env(overrides: CliOverrides) -> Result<Self, ConfigError> {
        let headless = overrides.headless || parse_env("PC_HEADLESS")?.unwrap_or(false);

        let animations = if headless {
            AnimationConfig::headless()
        } else {
            let frames = match overrides.frames {
                Some(frames) => frames,
                None => parse_env("PC_ANIMATION_FRAMES")?.unwrap_or(DEFAULT_ANIMATION_FRAMES),
            };
            AnimationConfig::uniform(frames)
        };

        let tick_ms = match overrides.tick_ms {
            Some(tick_ms) => tick_ms,
            None => parse_env("PC_TICK_MS")?.unwrap_or(0),
        };

        let max_ticks = match overrides.max_ticks {
            Some(max_ticks) => Some(max_ticks),
            None => parse_env("PC_MAX_TICKS")?,
        };

        let config = SimConfig {
            animations,
            tick_interval: Duration::from_millis(tick_ms),
            max_ticks,
            json: overrides.json,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.animations
            .validate()
            .map_err(|reason| ConfigError::Invalid {
                var: "PC_ANIMATION_FRAMES".to_string(),
                reason,
            })?;

        if self.max_ticks == Some(0) {
            return Err(ConfigError::Invalid {
                var: "PC_MAX_TICKS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Helper to parse an optional environment variable. Unset is `None`,
/// set but unparsable is an error.
fn parse_env<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(value) => value.trim().parse().map(Some).map_err(|_| ConfigError::Invalid {
            var: key.to_string(),
            reason: format!("Can't parse {value:?}"),
        }),
        Err(_) => Ok(None),
    }
}
