use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Field, Params, Side};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub boundary_margin: f32,
    pub boundary_width: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_move_interval: f32,
    pub ball_size: f32,
    pub min_velocity: i32,
    pub max_velocity: i32,
    pub velocity_step: i32,
    pub serve_velocity: i32,
    pub win_score: u8,
    pub tick_hz: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: Params::CANVAS_WIDTH,
            canvas_height: Params::CANVAS_HEIGHT,
            boundary_margin: Params::BOUNDARY_MARGIN,
            boundary_width: Params::BOUNDARY_WIDTH,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_move_interval: Params::PADDLE_MOVE_INTERVAL,
            ball_size: Params::BALL_SIZE,
            min_velocity: Params::MIN_BALL_VELOCITY,
            max_velocity: Params::MAX_BALL_VELOCITY,
            velocity_step: Params::VELOCITY_STEP,
            serve_velocity: Params::SERVE_VELOCITY,
            win_score: Params::WIN_SCORE,
            tick_hz: Params::TICK_HZ,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Playable rectangle derived from the canvas and boundary sizes
    pub fn field(&self) -> Field {
        Field::new(
            self.canvas_width,
            self.canvas_height,
            self.boundary_margin,
            self.boundary_width,
        )
    }

    /// Fixed X position of a side's paddle, one ball-width in from its goal line
    pub fn paddle_x(&self, side: Side, field: &Field) -> f32 {
        match side {
            Side::Left => field.left + self.ball_size,
            Side::Right => field.right - self.ball_size - self.paddle_width,
        }
    }

    /// Paddles start vertically centered on the canvas
    pub fn paddle_start_y(&self) -> f32 {
        self.canvas_height / 2.0 - self.paddle_height / 2.0
    }

    /// Ball serve position: horizontally centered, just below the top wall
    pub fn serve_position(&self, field: &Field) -> Vec2 {
        Vec2::new(
            self.canvas_width / 2.0 - self.ball_size / 2.0,
            field.top + 1.0,
        )
    }

    pub fn clamp_speed(&self, speed: i32) -> i32 {
        speed.clamp(self.min_velocity, self.max_velocity)
    }

    /// Host-side pacing between two ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_hz.max(1)))
    }

    /// Reject combinations under which paddle clamping or speed bounds
    /// could not hold.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dimensions = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_move_interval", self.paddle_move_interval),
            ("ball_size", self.ball_size),
        ];
        for (name, value) in dimensions {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositiveDimension { name, value });
            }
        }
        let boundary_ok = |value: f32| value.is_finite() && value >= 0.0;
        if !(boundary_ok(self.boundary_margin) && boundary_ok(self.boundary_width)) {
            return Err(ConfigError::InvalidBoundary {
                margin: self.boundary_margin,
                width: self.boundary_width,
            });
        }

        let field = self.field();
        if field.height() < self.paddle_height || field.height() <= self.ball_size {
            return Err(ConfigError::FieldTooShort {
                field_height: field.height(),
                paddle_height: self.paddle_height,
            });
        }
        if field.width() <= 2.0 * (self.ball_size + self.paddle_width) {
            return Err(ConfigError::FieldTooNarrow {
                field_width: field.width(),
            });
        }

        if self.min_velocity <= 0 || self.min_velocity > self.max_velocity {
            return Err(ConfigError::InvalidVelocityBounds {
                min: self.min_velocity,
                max: self.max_velocity,
            });
        }
        if self.velocity_step <= 0 {
            return Err(ConfigError::InvalidVelocityStep(self.velocity_step));
        }
        if self.serve_velocity != self.clamp_speed(self.serve_velocity) {
            return Err(ConfigError::ServeVelocityOutOfBounds {
                serve: self.serve_velocity,
                min: self.min_velocity,
                max: self.max_velocity,
            });
        }
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        Ok(())
    }
}

/// Reasons a host-supplied [`Config`] cannot drive a match
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be a positive number, got {value}")]
    NonPositiveDimension { name: &'static str, value: f32 },
    #[error("boundary margin ({margin}) and width ({width}) must be finite and not negative")]
    InvalidBoundary { margin: f32, width: f32 },
    #[error("field height {field_height} cannot hold a paddle of height {paddle_height}")]
    FieldTooShort { field_height: f32, paddle_height: f32 },
    #[error("field width {field_width} leaves no room between the paddles")]
    FieldTooNarrow { field_width: f32 },
    #[error("velocity bounds must satisfy 0 < min <= max, got [{min}, {max}]")]
    InvalidVelocityBounds { min: i32, max: i32 },
    #[error("velocity step must be positive, got {0}")]
    InvalidVelocityStep(i32),
    #[error("serve velocity {serve} is outside [{min}, {max}]")]
    ServeVelocityOutOfBounds { serve: i32, min: i32, max: i32 },
    #[error("winning score must be at least 1")]
    ZeroWinScore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        let field = config.field();
        assert_eq!(config.paddle_x(Side::Left, &field), 40.0, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Right, &field), 545.0, "Right paddle X position");
    }

    #[test]
    fn test_config_start_and_serve_positions() {
        let config = Config::new();
        assert_eq!(config.paddle_start_y(), 195.0);
        assert_eq!(config.serve_position(&config.field()), Vec2::new(292.5, 26.0));
    }

    #[test]
    fn test_config_clamp_speed() {
        let config = Config::new();
        assert_eq!(config.clamp_speed(0), config.min_velocity);
        assert_eq!(config.clamp_speed(100), config.max_velocity);
        assert_eq!(config.clamp_speed(5), 5);
    }

    #[test]
    fn test_tick_interval_is_sixty_hz() {
        let interval = Config::new().tick_interval();
        assert!((interval.as_secs_f64() - 1.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_validate_rejects_inverted_velocity_bounds() {
        let config = Config {
            min_velocity: 9,
            max_velocity: 8,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidVelocityBounds { min: 9, max: 8 })
        );
    }

    #[test]
    fn test_validate_rejects_serve_outside_bounds() {
        let config = Config {
            serve_velocity: 1,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ServeVelocityOutOfBounds { serve: 1, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_paddle_taller_than_field() {
        let config = Config {
            paddle_height: 500.0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FieldTooShort { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_step_and_win_score() {
        let config = Config {
            velocity_step: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidVelocityStep(0)));

        let config = Config {
            win_score: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroWinScore));
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "win_score": 11, "max_velocity": 12 }"#).unwrap();
        assert_eq!(config.win_score, 11);
        assert_eq!(config.max_velocity, 12);
        assert_eq!(config.paddle_height, Params::PADDLE_HEIGHT);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_nan_boundary() {
        let config = Config {
            boundary_margin: f32::NAN,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBoundary { .. })
        ));

        let config = Config {
            boundary_width: f32::INFINITY,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBoundary { .. })
        ));

        let config = Config {
            boundary_width: -1.0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_dimension() {
        let config = Config {
            ball_size: 0.0,
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "ball_size must be a positive number, got 0");
    }
}
