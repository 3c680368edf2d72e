use crate::{Ball, Field, InputCommand, MatchState, Paddle};

/// Move a paddle one interval, pinning it to the wall instead of overshooting
pub fn update_paddle(paddle: &mut Paddle, command: InputCommand, field: &Field, interval: f32) {
    match command {
        InputCommand::None => {}
        InputCommand::Down => {
            paddle.pos.y = (paddle.pos.y + interval).min(field.bottom - paddle.height);
        }
        InputCommand::Up => {
            paddle.pos.y = (paddle.pos.y - interval).max(field.top);
        }
    }
}

/// Apply both sides' current commands to their paddles
pub fn move_paddles(state: &mut MatchState, field: &Field, interval: f32) {
    for side in [&mut state.left, &mut state.right] {
        update_paddle(&mut side.paddle, side.command, field, interval);
    }
}

/// Translate the ball by one tick of its vector
pub fn move_ball(ball: &mut Ball) {
    ball.pos += ball.vector.displacement();
}
