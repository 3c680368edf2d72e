use crate::{Ball, Config, Events, Field, InputCommand, MatchState, Paddle, Side};

/// Speed up or slow down the ball by one step, staying within the configured bounds
pub fn adjust_speed(ball: &mut Ball, speed_up: bool, config: &Config) {
    let step = if speed_up {
        config.velocity_step
    } else {
        -config.velocity_step
    };
    ball.vector.speed = config.clamp_speed(ball.vector.speed + step);
}

/// Whether the ball overlaps a side's paddle.
///
/// The paddle's facing edge must have reached the ball's facing edge, and
/// either the ball's top or bottom edge must lie within the paddle's vertical
/// span (edges inclusive).
pub fn paddle_overlaps(side: Side, paddle: &Paddle, ball: &Ball) -> bool {
    let ball_box = ball.bounds();
    let paddle_box = paddle.bounds();

    let crossed = match side {
        Side::Left => ball_box.left <= paddle_box.right,
        Side::Right => paddle_box.left <= ball_box.right,
    };

    crossed && (paddle_box.spans_y(ball_box.bottom) || paddle_box.spans_y(ball_box.top))
}

/// Bounce the ball off a paddle. A paddle moving with the ball's vertical
/// travel speeds it up, one moving against it slows it down.
pub fn check_paddle_collision(
    side: Side,
    paddle: &Paddle,
    command: InputCommand,
    ball: &mut Ball,
    config: &Config,
) -> bool {
    if !paddle_overlaps(side, paddle, ball) {
        return false;
    }

    let before = ball.vector.speed;
    match command {
        InputCommand::Down => adjust_speed(ball, ball.vector.dir.y > 0, config),
        InputCommand::Up => adjust_speed(ball, ball.vector.dir.y < 0, config),
        InputCommand::None => {}
    }
    ball.vector.dir.x = -ball.vector.dir.x;

    log::debug!(
        "Ball hit {:?} paddle: speed {} -> {}",
        side,
        before,
        ball.vector.speed
    );
    true
}

/// Reflect the ball vertically when it is past the top or bottom wall
pub fn check_wall_collision(ball: &mut Ball, field: &Field) -> bool {
    let ball_box = ball.bounds();
    if ball_box.top < field.top || ball_box.bottom > field.bottom {
        ball.vector.dir.y = -ball.vector.dir.y;
        return true;
    }
    false
}

/// Check ball collisions with both paddles and the walls.
///
/// Uses the ball's position from the end of the previous tick. Both paddles
/// are always checked; a ball overlapping both is reversed twice.
pub fn check_collisions(state: &mut MatchState, field: &Field, config: &Config, events: &mut Events) {
    let MatchState {
        left, right, ball, ..
    } = state;

    for (side, side_state) in [(Side::Left, &*left), (Side::Right, &*right)] {
        if check_paddle_collision(side, &side_state.paddle, side_state.command, ball, config) {
            events.ball_hit_paddle = true;
        }
    }

    if check_wall_collision(ball, field) {
        events.ball_hit_wall = true;
    }
}
