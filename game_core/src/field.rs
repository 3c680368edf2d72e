use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in canvas coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Bounds {
    /// Inclusive vertical span test; a point on either edge counts as inside.
    pub fn spans_y(&self, y: f32) -> bool {
        y >= self.top && y <= self.bottom
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Bounding box of a rectangular body whose top-left corner sits at `pos`
pub fn bounds_of(pos: Vec2, width: f32, height: f32) -> Bounds {
    Bounds {
        top: pos.y,
        bottom: pos.y + height,
        left: pos.x,
        right: pos.x + width,
    }
}

/// Playable rectangle inside the boundary walls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Field {
    pub fn new(canvas_width: f32, canvas_height: f32, margin: f32, thickness: f32) -> Self {
        let inset = margin + thickness;
        Self {
            top: inset,
            bottom: canvas_height - inset,
            left: inset,
            right: canvas_width - inset,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            top: self.top,
            bottom: self.bottom,
            left: self.left,
            right: self.right,
        }
    }
}
