use serde::{Deserialize, Serialize};

use crate::Side;

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_goal(&mut self, scorer: Side) {
        match scorer {
            Side::Left => self.left_scored = true,
            Side::Right => self.right_scored = true,
        }
    }

    /// Side that scored this tick, if any
    pub fn scorer(&self) -> Option<Side> {
        if self.left_scored {
            Some(Side::Left)
        } else if self.right_scored {
            Some(Side::Right)
        } else {
            None
        }
    }
}
