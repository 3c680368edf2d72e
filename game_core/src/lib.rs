pub mod components;
pub mod config;
pub mod field;
pub mod fsm;
pub mod params;
pub mod resources;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use field::*;
pub use fsm::*;
pub use params::*;
pub use resources::*;
pub use state::*;

use systems::*;

/// Inputs for a single tick: the latest command per side plus any pending
/// edge-triggered control event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: InputCommand,
    pub right: InputCommand,
    pub control: Option<ControlEvent>,
}

impl TickInput {
    pub fn new(left: InputCommand, right: InputCommand) -> Self {
        Self {
            left,
            right,
            control: None,
        }
    }

    /// No paddle movement, only a control event
    pub fn control(event: ControlEvent) -> Self {
        Self {
            control: Some(event),
            ..Self::default()
        }
    }

    pub fn with_control(mut self, event: ControlEvent) -> Self {
        self.control = Some(event);
        self
    }
}

/// What the host loop needs to know after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub events: Events,
    pub status: Status,
    /// False once the match is over; the host may stop ticking until a new
    /// match is requested.
    pub keep_ticking: bool,
}

/// Deterministic Pong simulation
#[derive(Debug, Clone)]
pub struct Engine {
    config: Config,
    field: Field,
}

impl Engine {
    /// Validate the configuration and derive the field once
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let field = config.field();
        Ok(Self { config, field })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Fresh match state with default positions and zero scores
    pub fn new_match(&self) -> MatchState {
        MatchState::new(&self.config, &self.field)
    }

    /// Apply a control event to the status machine. A new-match request
    /// from `GameOver` resets the whole state to defaults.
    pub fn apply_control(&self, state: &mut MatchState, event: ControlEvent) -> TransitionResult {
        let result = state.status.transition(Trigger::Control(event));
        if !result.success {
            log::warn!("Ignoring {:?} while {:?}", event, result.from);
            return result;
        }

        if event == ControlEvent::NewMatchRequested {
            *state = self.new_match();
            log::info!("New match started");
        } else {
            log::debug!("Status {:?} -> {:?}", result.from, result.to);
        }
        result
    }

    /// Advance the match by one tick.
    ///
    /// Order: paddles move, the control event is applied, then (while
    /// playing) collisions are resolved against last tick's ball position and
    /// the ball is translated, and finally the winning score is checked.
    /// Once the match is over this is a no-op unless a new match is requested.
    pub fn advance(&self, state: &mut MatchState, input: &TickInput) -> TickOutcome {
        let mut events = Events::new();

        if state.status.is_game_over() {
            if input.control == Some(ControlEvent::NewMatchRequested) {
                self.apply_control(state, ControlEvent::NewMatchRequested);
            }
            return self.outcome(state, events);
        }

        // 1. Paddles respond in every status
        state.left.command = input.left;
        state.right.command = input.right;
        move_paddles(state, &self.field, self.config.paddle_move_interval);

        // 2. A serve released this tick moves the ball this tick
        if let Some(event) = input.control {
            self.apply_control(state, event);
        }

        // 3. Collisions, scoring and ball motion
        if state.status.is_playing() {
            check_collisions(state, &self.field, &self.config, &mut events);
            check_scoring(state, &self.field, &self.config, &mut events);

            // A freshly re-served ball stays at the serve position
            if state.status.is_playing() {
                move_ball(&mut state.ball);
            }
        }

        // 4. Terminal check
        check_winner(state, &self.config);

        self.outcome(state, events)
    }

    /// Pure variant of [`Engine::advance`]: returns the next state and leaves
    /// `state` untouched.
    pub fn next_state(&self, state: &MatchState, input: &TickInput) -> (MatchState, TickOutcome) {
        let mut next = state.clone();
        let outcome = self.advance(&mut next, input);
        (next, outcome)
    }

    fn outcome(&self, state: &MatchState, events: Events) -> TickOutcome {
        TickOutcome {
            events,
            status: state.status,
            keep_ticking: !state.status.is_game_over(),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        let config = Config::default();
        let field = config.field();
        Self { config, field }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn playing(engine: &Engine) -> MatchState {
        let mut state = engine.new_match();
        engine.advance(&mut state, &TickInput::control(ControlEvent::StartOrServeRequested));
        state
    }

    #[test]
    fn test_engine_rejects_invalid_config() {
        let config = Config {
            velocity_step: -1,
            ..Config::default()
        };
        assert_eq!(
            Engine::new(config).unwrap_err(),
            ConfigError::InvalidVelocityStep(-1)
        );
        assert!(Engine::new(Config::default()).is_ok());
    }

    #[test]
    fn test_engine_rejects_nan_boundary_and_paddles_stay_clamped() {
        let config = Config {
            boundary_margin: f32::NAN,
            ..Config::default()
        };
        assert!(matches!(
            Engine::new(config),
            Err(ConfigError::InvalidBoundary { .. })
        ));

        let engine = Engine::default();
        let field = *engine.field();
        let mut state = engine.new_match();
        for _ in 0..200 {
            engine.advance(&mut state, &TickInput::new(InputCommand::Down, InputCommand::Up));
        }
        assert_eq!(state.left.paddle.bounds().bottom, field.bottom);
        assert_eq!(state.right.paddle.pos.y, field.top);
    }

    #[test]
    fn test_ball_idle_before_serve() {
        let engine = Engine::default();
        let mut state = engine.new_match();
        let ball = state.ball;

        let outcome = engine.advance(&mut state, &TickInput::new(InputCommand::Down, InputCommand::Up));

        assert_eq!(state.ball, ball, "Ball does not move before the serve");
        assert_eq!(outcome.status, Status::NewGame);
        assert!(outcome.keep_ticking);
        assert_eq!(state.left.paddle.pos.y, engine.config().paddle_start_y() + 6.0);
        assert_eq!(state.right.paddle.pos.y, engine.config().paddle_start_y() - 6.0);
    }

    #[test]
    fn test_serve_moves_ball_in_same_tick() {
        let engine = Engine::default();
        let state = playing(&engine);
        let serve = engine.config().serve_position(engine.field());

        assert_eq!(state.status, Status::Playing);
        assert_eq!(state.ball.pos, serve + Vec2::new(3.0, -3.0));
    }

    #[test]
    fn test_control_event_rejected_in_wrong_status() {
        let engine = Engine::default();
        let mut state = playing(&engine);

        let result = engine.apply_control(&mut state, ControlEvent::NewMatchRequested);

        assert!(!result.success);
        assert_eq!(state.status, Status::Playing);
    }

    #[test]
    fn test_next_state_leaves_input_untouched() {
        let engine = Engine::default();
        let state = engine.new_match();

        let (next, outcome) =
            engine.next_state(&state, &TickInput::control(ControlEvent::StartOrServeRequested));

        assert_eq!(state.status, Status::NewGame);
        assert_eq!(next.status, Status::Playing);
        assert_eq!(outcome.status, Status::Playing);
    }

    #[test]
    fn test_tick_input_builders() {
        let input = TickInput::new(InputCommand::Up, InputCommand::None)
            .with_control(ControlEvent::StartOrServeRequested);
        assert_eq!(input.left, InputCommand::Up);
        assert_eq!(input.control, Some(ControlEvent::StartOrServeRequested));
        assert_eq!(TickInput::default().control, None);
    }
}
