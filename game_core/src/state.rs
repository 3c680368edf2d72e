//! Match state snapshot
//!
//! The authoritative view of a match at a tick boundary. Only the engine
//! mutates it; renderers take a [`MatchState::snapshot`].

use serde::{Deserialize, Serialize};

use crate::{Ball, Config, Field, InputCommand, Paddle, Status};

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    /// Horizontal direction from this side's paddle toward the opponent
    pub fn facing(self) -> i32 {
        match self {
            Side::Left => 1,
            Side::Right => -1,
        }
    }
}

/// Paddle, score and last applied command of one side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideState {
    pub paddle: Paddle,
    pub score: u8,
    pub command: InputCommand,
}

impl SideState {
    pub fn new(side: Side, config: &Config, field: &Field) -> Self {
        Self {
            paddle: Paddle::spawn(side, config, field),
            score: 0,
            command: InputCommand::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub status: Status,
    pub left: SideState,
    pub right: SideState,
    pub ball: Ball,
}

impl MatchState {
    /// Fresh match: both scores zero, paddles centered, ball idle at serve
    pub fn new(config: &Config, field: &Field) -> Self {
        Self {
            status: Status::NewGame,
            left: SideState::new(Side::Left, config, field),
            right: SideState::new(Side::Right, config, field),
            ball: Ball::serve(config, field, Side::Left.facing()),
        }
    }

    pub fn side(&self, side: Side) -> &SideState {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut SideState {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn score(&self) -> (u8, u8) {
        (self.left.score, self.right.score)
    }

    pub fn winner(&self, win_score: u8) -> Option<Side> {
        if self.left.score >= win_score {
            Some(Side::Left)
        } else if self.right.score >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// The ball is only drawn while a rally is in progress
    pub fn ball_visible(&self) -> bool {
        self.status.is_playing()
    }

    /// Owned copy for readers that must not observe a tick in progress
    pub fn snapshot(&self) -> MatchState {
        self.clone()
    }
}
