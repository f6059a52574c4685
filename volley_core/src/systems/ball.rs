use hecs::World;
use rand::Rng;

use crate::components::{Ball, BallSide, Body};
use crate::config::Config;
use crate::params::Params;
use crate::resources::GameRng;

/// Side classification is a pure function of x against the net line.
pub fn classify_side(x: f32, net_x: f32) -> BallSide {
    if x < net_x {
        BallSide::Left
    } else if x > net_x {
        BallSide::Right
    } else {
        BallSide::Neutral
    }
}

/// Refresh the stored side for every ball. Idempotent; safe to call
/// every tick.
pub fn update_ball_side(world: &mut World, config: &Config) {
    for (_entity, (ball, body)) in world.query_mut::<(&mut Ball, &Body)>() {
        ball.side = classify_side(body.pos.x, config.net_x);
    }
}

/// Post-process ball velocity after the host's integration step. A ball
/// entity without a `Body` is skipped.
pub fn ball_tick(world: &mut World, config: &Config, rng: &mut GameRng) {
    for (_entity, (ball, body)) in world.query_mut::<(&mut Ball, &mut Body)>() {
        ball.side = classify_side(body.pos.x, config.net_x);

        // Horizontal damping; gravity owns the vertical axis.
        let mut vx = body.vel.x * ball.damping;
        let vy = body.vel.y;

        // Contact this step: spin up with impact speed, and half the
        // time kick the bounce slightly off-true.
        if body.blocked.any() {
            let speed = (vx * vx + vy * vy).sqrt();
            body.angular_vel = speed / 2.0;
            if rng.0.gen_bool(0.5) {
                vx *= 1.0 + rng.0.gen_range(-0.05..0.05);
            }
        }

        // Spin bleeds off per tick, not per millisecond.
        body.angular_vel *= Params::BALL_SPIN_DECAY;

        // Rest-snap: a slow grounded ball bleeds speed, then stops dead
        // instead of jittering forever.
        if vx.abs() < ball.min_velocity && body.blocked.down {
            vx *= 0.9;
            if vx.abs() < Params::BALL_REST_EPSILON {
                vx = 0.0;
                body.angular_vel = 0.0;
            }
        }

        body.vel.x = vx;
        body.vel.y = vy;
    }
}
