//! Tunable engine parameters.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::SizeTier;

/// Errors raised by [`EngineConfig::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineConfigError {
    /// The magic trigger must need at least one add press.
    #[error("magic trigger count must be at least 1, got {0}")]
    InvalidTriggerCount(u32),

    /// Tier thresholds must satisfy `0 < medium < small`.
    #[error("tier thresholds must satisfy 0 < medium < small, got medium={medium}, small={small}")]
    InvalidTierThresholds { medium: usize, small: usize },
}

/// Parameters that shape the engine's behaviour.
///
/// The defaults reproduce the keypad page: magic mode arms on the second
/// consecutive add, and the display shrinks at 7 and again at 10
/// characters.
///
/// # Example
///
/// ```
/// use calc_core::{EngineConfig, SizeTier};
///
/// let config = EngineConfig::default();
///
/// assert_eq!(config.magic_trigger_count, 2);
/// assert_eq!(config.tier_for_length(6), SizeTier::Large);
/// assert_eq!(config.tier_for_length(10), SizeTier::Small);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of consecutive add presses that arms magic mode.
    pub magic_trigger_count: u32,

    /// Formatted length at which the display drops to [`SizeTier::Medium`].
    pub medium_tier_min_len: usize,

    /// Formatted length at which the display drops to [`SizeTier::Small`].
    pub small_tier_min_len: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            magic_trigger_count: 2,
            medium_tier_min_len: 7,
            small_tier_min_len: 10,
        }
    }
}

impl EngineConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`EngineConfigError`] if:
    /// - `magic_trigger_count` is zero
    /// - `medium_tier_min_len` is zero or not below `small_tier_min_len`
    ///
    /// # Example
    ///
    /// ```
    /// use calc_core::{EngineConfig, EngineConfigError};
    ///
    /// let config = EngineConfig {
    ///     magic_trigger_count: 0,
    ///     ..EngineConfig::default()
    /// };
    ///
    /// assert_eq!(config.validate(), Err(EngineConfigError::InvalidTriggerCount(0)));
    /// ```
    pub fn validate(&self) -> Result<(), EngineConfigError> {
        if self.magic_trigger_count == 0 {
            return Err(EngineConfigError::InvalidTriggerCount(
                self.magic_trigger_count,
            ));
        }
        if self.medium_tier_min_len == 0 || self.medium_tier_min_len >= self.small_tier_min_len {
            return Err(EngineConfigError::InvalidTierThresholds {
                medium: self.medium_tier_min_len,
                small: self.small_tier_min_len,
            });
        }
        Ok(())
    }

    pub fn tier_for_length(
        &self,
        len: usize,
    ) -> SizeTier {
        if len >= self.small_tier_min_len {
            SizeTier::Small
        } else if len >= self.medium_tier_min_len {
            SizeTier::Medium
        } else {
            SizeTier::Large
        }
    }
}
