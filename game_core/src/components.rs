use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::{bounds_of, Bounds, Config, Field, Side};

/// Paddle - one per side, only `pos.y` changes at runtime
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2, // Top-left corner
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        Self { pos, width, height }
    }

    /// Paddle at its starting position for the given side
    pub fn spawn(side: Side, config: &Config, field: &Field) -> Self {
        Self::new(
            Vec2::new(config.paddle_x(side, field), config.paddle_start_y()),
            config.paddle_width,
            config.paddle_height,
        )
    }

    pub fn bounds(&self) -> Bounds {
        bounds_of(self.pos, self.width, self.height)
    }
}

/// Ball motion: direction signs plus scalar speed in pixels per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vector {
    pub dir: IVec2, // Each component is -1 or 1
    pub speed: i32,
}

impl Vector {
    pub fn new(dir_x: i32, dir_y: i32, speed: i32) -> Self {
        Self {
            dir: IVec2::new(dir_x.signum(), dir_y.signum()),
            speed,
        }
    }

    /// Offset applied to the ball position in one tick
    pub fn displacement(&self) -> Vec2 {
        (self.dir * self.speed).as_vec2()
    }
}

/// Ball - square, repositioned by collision response rather than clamped
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2, // Top-left corner
    pub size: f32,
    pub vector: Vector,
}

impl Ball {
    pub fn new(pos: Vec2, size: f32, vector: Vector) -> Self {
        Self { pos, size, vector }
    }

    /// Fresh ball at the serve position heading toward `dir_x`, always up and
    /// at serve speed.
    pub fn serve(config: &Config, field: &Field, dir_x: i32) -> Self {
        Self::new(
            config.serve_position(field),
            config.ball_size,
            Vector::new(dir_x, -1, config.serve_velocity),
        )
    }

    pub fn bounds(&self) -> Bounds {
        bounds_of(self.pos, self.size, self.size)
    }
}

/// Per-tick paddle command for one side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputCommand {
    #[default]
    None,
    Up,
    Down,
}

impl InputCommand {
    /// Decode a paddle direction: -1 = up, 1 = down, anything else = none
    pub fn from_dir(dir: i8) -> Self {
        match dir {
            -1 => InputCommand::Up,
            1 => InputCommand::Down,
            _ => InputCommand::None,
        }
    }

}
