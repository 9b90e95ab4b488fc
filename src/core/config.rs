//! Game configuration.
//!
//! The only configurable values are the inclusive bounds on the initial
//! string length. Everything else about the game is fixed by its rules.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Default shortest starting string.
pub const DEFAULT_MIN_LENGTH: usize = 15;

/// Default longest starting string.
pub const DEFAULT_MAX_LENGTH: usize = 25;

/// Complete game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Shortest allowed starting string (inclusive).
    pub min_length: usize,

    /// Longest allowed starting string (inclusive).
    pub max_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl GameConfig {
    /// Set the inclusive length bounds.
    #[must_use]
    pub fn with_length_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    /// Check that the bounds describe a non-empty range of playable lengths.
    pub fn validate(&self) -> Result<()> {
        if self.min_length == 0 || self.min_length > self.max_length {
            return Err(GameError::InvalidBounds {
                min: self.min_length,
                max: self.max_length,
            });
        }
        Ok(())
    }

    /// Check a requested starting length against the bounds.
    pub fn check_length(&self, length: usize) -> Result<()> {
        if (self.min_length..=self.max_length).contains(&length) {
            Ok(())
        } else {
            Err(GameError::InvalidLength {
                length,
                min: self.min_length,
                max: self.max_length,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let config = GameConfig::default();
        assert_eq!(config.min_length, 15);
        assert_eq!(config.max_length, 25);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_check_length_inclusive() {
        let config = GameConfig::default();

        assert!(config.check_length(15).is_ok());
        assert!(config.check_length(25).is_ok());
        assert_eq!(
            config.check_length(14),
            Err(GameError::InvalidLength { length: 14, min: 15, max: 25 })
        );
        assert_eq!(
            config.check_length(26),
            Err(GameError::InvalidLength { length: 26, min: 15, max: 25 })
        );
    }

    #[test]
    fn test_custom_bounds() {
        let config = GameConfig::default().with_length_bounds(3, 5);
        assert!(config.validate().is_ok());
        assert!(config.check_length(3).is_ok());
        assert!(config.check_length(6).is_err());
    }

    #[test]
    fn test_invalid_bounds() {
        let reversed = GameConfig::default().with_length_bounds(10, 5);
        assert_eq!(reversed.validate(), Err(GameError::InvalidBounds { min: 10, max: 5 }));

        let zero = GameConfig::default().with_length_bounds(0, 5);
        assert!(zero.validate().is_err());
    }
}
