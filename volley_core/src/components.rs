use glam::Vec2;

use crate::config::Config;
use crate::params::Params;

/// Which half of the court the ball occupies, relative to the net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BallSide {
    Left,
    Right,
    #[default]
    Neutral,
}

/// How a player's intents are sourced. Switching schemes is an external
/// configuration action, not a simulation transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlScheme {
    Gamepad,
    Arrows,
    Wasd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Per-direction surface contact flags reported by the host body.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blocked {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Blocked {
    pub fn any(self) -> bool {
        self.left || self.right || self.up || self.down
    }
}

/// Mirror of a host-engine arcade physics body. The host writes
/// `pos`/`vel`/`blocked` after each integration step; the simulation
/// writes `vel`, `angular_vel` and `gravity_y` back. An entity without a
/// `Body` counts as detached from physics and is skipped by every
/// kinematic system.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub angular_vel: f32,
    pub gravity_y: f32,
    pub blocked: Blocked,
}

impl Body {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            angular_vel: 0.0,
            gravity_y: 0.0,
            blocked: Blocked::default(),
        }
    }

    /// Additive impulse, not a velocity replacement.
    pub fn apply_force(&mut self, fx: f32, fy: f32) {
        self.vel.x += fx;
        self.vel.y += fy;
    }
}

/// The volleyball. One per match; repositioned between rounds, never
/// respawned.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub damping: f32,
    pub min_velocity: f32,
    pub gravity_factor: f32,
    pub bounce_energy: f32,
    pub side: BallSide,
}

impl Ball {
    pub fn new(config: &Config) -> Self {
        Self {
            damping: config.ball_damping,
            min_velocity: config.ball_min_velocity,
            gravity_factor: config.ball_gravity_factor,
            bounce_energy: config.ball_bounce_energy,
            side: BallSide::Neutral,
        }
    }

    pub fn side(&self) -> BallSide {
        self.side
    }
}

/// A competitor. `id` 0 defends the left court, 1 the right.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub id: u8,
    pub facing: Facing,
    pub scheme: ControlScheme,
    pub jumps_left: u8,
    /// Latch for keyboard jump edge detection.
    pub jump_held: bool,
}

impl Player {
    pub fn new(id: u8, scheme: ControlScheme) -> Self {
        Self {
            id,
            // Both players start facing the net.
            facing: if id == 0 { Facing::Right } else { Facing::Left },
            scheme,
            jumps_left: Params::MAX_JUMPS,
            jump_held: false,
        }
    }

    pub fn set_scheme(&mut self, scheme: ControlScheme) {
        self.scheme = scheme;
    }
}

/// Time-windowed damage gate. Not wired into volleyball scoring; kept as
/// a reusable building block.
#[derive(Debug, Clone, Copy)]
pub struct Health {
    pub current: u32,
    pub invincible: bool,
    pub window_secs: f32,
    /// Time of the last accepted hit; NEG_INFINITY until first damage so
    /// the opening hit always lands.
    pub last_hit: f32,
}

impl Health {
    pub fn new(initial: u32, window_secs: f32) -> Self {
        Self {
            current: initial,
            invincible: false,
            window_secs,
            last_hit: f32::NEG_INFINITY,
        }
    }

    pub fn health(&self) -> u32 {
        self.current
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible
    }
}
