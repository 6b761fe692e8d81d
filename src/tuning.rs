//! Data-driven game balance
//!
//! Every gameplay number that is not a field-relative layout ratio lives here,
//! so a JSON file can rebalance the game without a rebuild.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Upper bound for any timer in the tuning (one hour)
pub const MAX_TIMER_MS: u64 = 60 * 60 * 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Run ===
    /// Lives at the start of a fresh run
    pub starting_lives: u32,
    /// Points for destroying a brick
    pub brick_score: u32,

    // === Ball ===
    /// Per-component launch speed on level 1
    pub base_ball_speed: f32,
    /// Added to the launch speed for each level after the first
    pub ball_speed_per_level: f32,
    /// Multiplier applied on every paddle bounce
    pub paddle_bounce_multiplier: f32,
    /// Multiplier applied to every ball by SPEED_UP_BALL
    pub speed_up_multiplier: f32,
    /// Cap on each velocity component after a speed-up
    pub max_ball_speed: f32,
    /// Concurrent ball cap for MULTI_BALL
    pub max_balls: usize,

    // === Power-ups ===
    /// Chance that a destroyed brick drops a power-up
    pub power_up_spawn_chance: f32,
    /// Downward movement per tick
    pub power_up_fall_speed: f32,
    /// How far below the paddle top a power-up can still be caught
    pub power_up_catch_depth: f32,
    /// Lifetime of a paddle-size power-up
    pub power_up_duration_ms: u64,
    /// Shrink-out window after collection (visual only)
    pub absorption_ms: u64,
    /// Paddle flash after any collection (visual only)
    pub paddle_flash_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            brick_score: 100,

            base_ball_speed: 12.0,
            ball_speed_per_level: 0.5,
            paddle_bounce_multiplier: 1.02,
            speed_up_multiplier: 1.3,
            max_ball_speed: 15.0,
            max_balls: 5,

            power_up_spawn_chance: 0.4,
            power_up_fall_speed: 5.0,
            power_up_catch_depth: 20.0,
            power_up_duration_ms: 10_000,
            absorption_ms: 200,
            paddle_flash_ms: 350,
        }
    }
}

impl Tuning {
    /// Launch speed (per component) for a 1-based level
    pub fn launch_speed(&self, level: u32) -> f32 {
        self.base_ball_speed + level.saturating_sub(1) as f32 * self.ball_speed_per_level
    }

    /// Reject values that would break simulation invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
            ConfigError::InvalidTuning {
                field,
                reason: reason.into(),
            }
        }

        if self.starting_lives == 0 {
            return Err(invalid("starting_lives", "must be at least 1"));
        }
        if self.max_balls == 0 {
            return Err(invalid("max_balls", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.power_up_spawn_chance) {
            return Err(invalid(
                "power_up_spawn_chance",
                format!("{} is outside 0..=1", self.power_up_spawn_chance),
            ));
        }
        for (field, value) in [
            ("base_ball_speed", self.base_ball_speed),
            ("paddle_bounce_multiplier", self.paddle_bounce_multiplier),
            ("speed_up_multiplier", self.speed_up_multiplier),
            ("max_ball_speed", self.max_ball_speed),
            ("power_up_fall_speed", self.power_up_fall_speed),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, format!("{value} must be finite and positive")));
            }
        }
        for (field, value) in [
            ("ball_speed_per_level", self.ball_speed_per_level),
            ("power_up_catch_depth", self.power_up_catch_depth),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(field, format!("{value} must be finite and non-negative")));
            }
        }
        for (field, value) in [
            ("power_up_duration_ms", self.power_up_duration_ms),
            ("absorption_ms", self.absorption_ms),
            ("paddle_flash_ms", self.paddle_flash_ms),
        ] {
            if value > MAX_TIMER_MS {
                return Err(invalid(field, format!("{value} ms exceeds {MAX_TIMER_MS} ms")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_launch_speed_grows_per_level() {
        let tuning = Tuning::default();
        assert_eq!(tuning.launch_speed(1), 12.0);
        assert_eq!(tuning.launch_speed(3), 13.0);
        // Level 0 is treated like level 1
        assert_eq!(tuning.launch_speed(0), 12.0);
    }

    #[test]
    fn test_rejects_bad_spawn_chance() {
        let tuning = Tuning {
            power_up_spawn_chance: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::InvalidTuning {
                field: "power_up_spawn_chance",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_unbounded_timers() {
        let tuning = Tuning {
            power_up_duration_ms: u64::MAX,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::InvalidTuning {
                field: "power_up_duration_ms",
                ..
            })
        ));

        let tuning = Tuning {
            paddle_flash_ms: MAX_TIMER_MS + 1,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());

        let tuning = Tuning {
            absorption_ms: MAX_TIMER_MS,
            ..Default::default()
        };
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_catch_depth() {
        for depth in [-1.0, f32::NAN, f32::INFINITY] {
            let tuning = Tuning {
                power_up_catch_depth: depth,
                ..Default::default()
            };
            assert!(matches!(
                tuning.validate(),
                Err(ConfigError::InvalidTuning {
                    field: "power_up_catch_depth",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_rejects_zero_max_speed() {
        let tuning = Tuning {
            max_ball_speed: 0.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }
}
