/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Canvas
    pub const CANVAS_WIDTH: f32 = 600.0;
    pub const CANVAS_HEIGHT: f32 = 450.0;
    pub const BOUNDARY_MARGIN: f32 = 10.0;
    pub const BOUNDARY_WIDTH: f32 = 15.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 60.0;
    pub const PADDLE_MOVE_INTERVAL: f32 = 6.0; // pixels per tick

    // Ball
    pub const BALL_SIZE: f32 = 15.0;
    pub const MIN_BALL_VELOCITY: i32 = 2;
    pub const MAX_BALL_VELOCITY: i32 = 8;
    pub const VELOCITY_STEP: i32 = 1;
    pub const SERVE_VELOCITY: i32 = 3;

    // Score
    pub const WIN_SCORE: u8 = 5; // First to 5 wins

    // Host pacing
    pub const TICK_HZ: u32 = 60;
}
