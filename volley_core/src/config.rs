use glam::Vec2;
use thiserror::Error;

use crate::params::Params;

/// Rejected `Config` values. Raised once at match setup, never per frame.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ball damping must lie in (0, 1), got {0}")]
    Damping(f32),
    #[error("bounce energy must lie in (0, 1), got {0}")]
    BounceEnergy(f32),
    #[error("net x {net_x} is outside the court (width {width})")]
    NetPlacement { net_x: f32, width: f32 },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
}

/// Runtime match configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub world_width: f32,
    pub world_height: f32,
    pub net_x: f32,
    pub ball_damping: f32,
    pub ball_min_velocity: f32,
    pub ball_gravity_factor: f32,
    pub ball_bounce_energy: f32,
    pub walk_speed: f32,
    pub run_speed: f32,
    pub jump_speed: f32,
    pub round_seconds: u32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world_width: Params::WORLD_WIDTH,
            world_height: Params::WORLD_HEIGHT,
            net_x: Params::NET_X,
            ball_damping: Params::BALL_DAMPING,
            ball_min_velocity: Params::BALL_MIN_VELOCITY,
            ball_gravity_factor: Params::BALL_GRAVITY_FACTOR,
            ball_bounce_energy: Params::BALL_BOUNCE_ENERGY,
            walk_speed: Params::WALK_SPEED,
            run_speed: Params::RUN_SPEED,
            jump_speed: Params::JUMP_SPEED,
            round_seconds: Params::ROUND_SECONDS,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check invariants the simulation assumes. Call once when setting a
    /// match up with non-default values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.ball_damping > 0.0 && self.ball_damping < 1.0) {
            return Err(ConfigError::Damping(self.ball_damping));
        }
        if !(self.ball_bounce_energy > 0.0 && self.ball_bounce_energy < 1.0) {
            return Err(ConfigError::BounceEnergy(self.ball_bounce_energy));
        }
        if self.net_x <= 0.0 || self.net_x >= self.world_width {
            return Err(ConfigError::NetPlacement {
                net_x: self.net_x,
                width: self.world_width,
            });
        }
        for (name, value) in [
            ("walk_speed", self.walk_speed),
            ("run_speed", self.run_speed),
            ("ball_min_velocity", self.ball_min_velocity),
            ("round_seconds", self.round_seconds as f32),
            ("win_score", self.win_score as f32),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        Ok(())
    }

    /// Fixed serve position used at match start and on restart.
    pub fn ball_serve_pos(&self) -> Vec2 {
        Vec2::new(Params::BALL_SERVE_X, Params::BALL_SERVE_Y)
    }

    /// Get spawn position for a player based on their court side
    pub fn player_spawn(&self, player_id: u8) -> Vec2 {
        let x = if player_id == 0 {
            self.world_width * 0.25
        } else {
            self.world_width * 0.75
        };
        Vec2::new(x, Params::PLAYER_SPAWN_Y)
    }
}
