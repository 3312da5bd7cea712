use crate::{error::ConfigError, pattern::Pattern};
#[cfg(feature = "clap")]
use clap::Args;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The configuration of a simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(Args))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Width of the board.
    #[cfg_attr(feature = "clap", arg(short = 'W', long, default_value = "120"))]
    pub width: usize,

    /// Height of the board.
    #[cfg_attr(feature = "clap", arg(short = 'H', long, default_value = "60"))]
    pub height: usize,

    /// Maximum number of generations to show, including the initial one.
    ///
    /// The initial pattern is generation 0, so the simulation stops after
    /// generation `max_generations - 1`.
    #[cfg_attr(feature = "clap", arg(short = 'g', long, default_value = "120"))]
    pub max_generations: u64,
}

impl Default for Config {
    #[inline]
    fn default() -> Self {
        Self::new(120, 60)
    }
}

impl Config {
    /// Create a new configuration with a board of the given size.
    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            max_generations: 120,
        }
    }

    /// Set the maximum number of generations.
    ///
    /// See [`max_generations`](Config::max_generations) for more details.
    #[inline]
    pub const fn with_max_generations(mut self, max_generations: u64) -> Self {
        self.max_generations = max_generations;
        self
    }

    /// Check whether the configuration is valid.
    pub fn check(self) -> Result<Self, ConfigError> {
        if self.width == 0 || self.height == 0 || self.max_generations == 0 {
            return Err(ConfigError::InvalidSize);
        }
        if self.width.checked_mul(self.height).is_none() {
            return Err(ConfigError::InvalidSize);
        }

        Ok(self)
    }

    /// Check whether a pattern can be simulated with this configuration.
    ///
    /// The pattern must fit on the board, and its rule must be supported.
    pub fn check_pattern(&self, pattern: &Pattern) -> Result<(), ConfigError> {
        if pattern.width() > self.width || pattern.height() > self.height {
            return Err(ConfigError::OversizedPattern {
                pattern_width: pattern.width(),
                pattern_height: pattern.height(),
                board_width: self.width,
                board_height: self.height,
            });
        }

        pattern.rule().check()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rlelife_rules::UnsupportedRuleError;

    #[test]
    fn test_check() {
        assert!(Config::default().check().is_ok());
        assert_eq!(Config::new(0, 10).check(), Err(ConfigError::InvalidSize));
        assert_eq!(Config::new(10, 0).check(), Err(ConfigError::InvalidSize));
        assert_eq!(
            Config::new(10, 10).with_max_generations(0).check(),
            Err(ConfigError::InvalidSize)
        );
        assert_eq!(
            Config::new(usize::MAX, 2).check(),
            Err(ConfigError::InvalidSize)
        );
    }

    #[test]
    fn test_check_pattern() {
        let glider = Pattern::builtin("glider").unwrap();
        assert!(Config::new(3, 3).check_pattern(&glider).is_ok());
        assert_eq!(
            Config::new(2, 10).check_pattern(&glider),
            Err(ConfigError::OversizedPattern {
                pattern_width: 3,
                pattern_height: 3,
                board_width: 2,
                board_height: 10,
            })
        );

        let pattern = Pattern::decode("x = 1, y = 1, rule = foo/bar\no!").unwrap();
        assert_eq!(
            Config::new(10, 10).check_pattern(&pattern),
            Err(ConfigError::UnsupportedRule(UnsupportedRuleError {
                identifier: "foo/bar".to_string()
            }))
        );
    }
}
