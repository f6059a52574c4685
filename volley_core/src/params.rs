/// Tuning parameters for the volleyball court
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court
    pub const WORLD_WIDTH: f32 = 1200.0;
    pub const WORLD_HEIGHT: f32 = 800.0;
    pub const NET_X: f32 = 600.0;

    // Ball
    pub const BALL_DAMPING: f32 = 0.995;
    pub const BALL_MIN_VELOCITY: f32 = 50.0;
    pub const BALL_GRAVITY_FACTOR: f32 = 0.8; // lower = more floaty
    pub const BALL_BOUNCE_ENERGY: f32 = 0.9; // energy preserved on bounce
    pub const BALL_BASE_GRAVITY: f32 = 300.0;
    pub const BALL_SPIN_DECAY: f32 = 0.98; // per tick, tuned for a 60 Hz host loop
    pub const BALL_REST_EPSILON: f32 = 10.0;
    pub const BALL_SERVE_X: f32 = 600.0;
    pub const BALL_SERVE_Y: f32 = 300.0;
    pub const BALL_SERVE_VX: f32 = 200.0;
    pub const BALL_SERVE_VY: f32 = 200.0;

    // Round-start serve area
    pub const SERVE_AREA_X_MIN: f32 = 100.0;
    pub const SERVE_AREA_X_MAX: f32 = 1100.0;
    pub const SERVE_AREA_Y_MIN: f32 = 100.0;
    pub const SERVE_AREA_Y_MAX: f32 = 600.0;

    // Player
    pub const WALK_SPEED: f32 = 160.0;
    pub const RUN_SPEED: f32 = 600.0;
    pub const JUMP_SPEED: f32 = -1200.0; // y grows downward
    pub const MAX_JUMPS: u8 = 2;
    pub const PLAYER_GRAVITY: f32 = 1500.0;
    pub const FALL_GRAVITY: f32 = 2000.0;
    pub const PLAYER_SPAWN_Y: f32 = 700.0;

    // Player -> ball contact
    pub const HIT_FORCE_SCALE: f32 = 1.2;
    pub const HIT_MIN_PUSH: f32 = 200.0;
    pub const HIT_FLAT_LIMIT: f32 = 100.0;
    pub const HIT_GROUND_POP: f32 = -300.0;

    // Round / match
    pub const ROUND_SECONDS: u32 = 30;
    pub const WIN_SCORE: u8 = 3;
    pub const FREEZE_SECS: f32 = 3.0;
    pub const RESUME_DELAY_SECS: f32 = 3.0;
    pub const PRE_ROUND_STEPS: u8 = 3;
    pub const PRE_ROUND_STEP_SECS: f32 = 1.0;
    pub const PRE_ROUND_LINGER_SECS: f32 = 0.5;
}
