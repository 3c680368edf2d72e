use crate::{Ball, Config, Events, Field, MatchState, Side, Trigger};

/// Check if the ball left the field (scoring).
///
/// The side that scored gets a point, the status drops to `Serving` and the
/// ball is re-served toward the side that conceded at base speed.
pub fn check_scoring(
    state: &mut MatchState,
    field: &Field,
    config: &Config,
    events: &mut Events,
) -> Option<Side> {
    let ball_box = state.ball.bounds();
    if ball_box.left >= field.left && ball_box.right <= field.right {
        return None;
    }

    // Ball exited the right side: left player scores
    let scorer = if ball_box.right > field.right {
        Side::Left
    } else {
        Side::Right
    };

    let side = state.side_mut(scorer);
    side.score = side.score.saturating_add(1);
    state.ball = Ball::serve(config, field, scorer.facing());
    state.status.transition(Trigger::GoalScored);
    events.record_goal(scorer);

    log::info!(
        "Goal: {:?} scores ({}-{})",
        scorer,
        state.left.score,
        state.right.score
    );
    Some(scorer)
}

/// End the match once either side has reached the winning score
pub fn check_winner(state: &mut MatchState, config: &Config) -> Option<Side> {
    let winner = state.winner(config.win_score)?;
    if state.status.transition(Trigger::WinningScoreReached).success {
        log::info!(
            "Game over: {:?} wins ({}-{})",
            winner,
            state.left.score,
            state.right.score
        );
    }
    Some(winner)
}
