//! Match status state machine
//!
//! `NewGame -> Playing -> Serving <-> Playing -> GameOver`, with
//! `GameOver -> NewGame` on a new-match request.

use serde::{Deserialize, Serialize};

/// Match status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Ball idle at the serve position, waiting for the first serve
    #[default]
    NewGame,
    /// Ball in motion, collisions and scoring active
    Playing,
    /// Goal just scored, ball reset and waiting for the next serve
    Serving,
    /// A side reached the winning score
    GameOver,
}

/// Edge-triggered requests coming from the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlEvent {
    StartOrServeRequested,
    NewMatchRequested,
}

/// Everything that can move the status machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trigger {
    Control(ControlEvent),
    GoalScored,
    WinningScoreReached,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from: Status,
    pub to: Status,
    pub trigger: Trigger,
}

impl Status {
    /// Next status for a trigger, or `None` if the transition is not allowed
    pub fn next(self, trigger: Trigger) -> Option<Status> {
        use ControlEvent::*;

        match (self, trigger) {
            (Status::NewGame, Trigger::Control(StartOrServeRequested)) => Some(Status::Playing),
            (Status::Serving, Trigger::Control(StartOrServeRequested)) => Some(Status::Playing),

            (Status::Playing, Trigger::GoalScored) => Some(Status::Serving),

            (Status::GameOver, Trigger::WinningScoreReached) => None,
            (_, Trigger::WinningScoreReached) => Some(Status::GameOver),

            (Status::GameOver, Trigger::Control(NewMatchRequested)) => Some(Status::NewGame),

            _ => None,
        }
    }

    /// Attempt a transition in place
    pub fn transition(&mut self, trigger: Trigger) -> TransitionResult {
        let from = *self;
        match from.next(trigger) {
            Some(to) => {
                *self = to;
                TransitionResult {
                    success: true,
                    from,
                    to,
                    trigger,
                }
            }
            None => TransitionResult {
                success: false,
                from,
                to: from,
                trigger,
            },
        }
    }

    pub fn is_playing(self) -> bool {
        self == Status::Playing
    }

    pub fn is_game_over(self) -> bool {
        self == Status::GameOver
    }
}
