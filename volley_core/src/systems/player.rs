use hecs::World;

use crate::components::{Body, ControlScheme, Facing, Player};
use crate::config::Config;
use crate::params::Params;
use crate::resources::{AnimKind, ControlSample, Events, HostQueue};

/// Map this tick's control samples onto player bodies: horizontal
/// movement, double jump, attack request, fall gravity. A player with no
/// sample this tick (input source absent) is left untouched.
pub fn update_players(
    world: &mut World,
    queue: &mut HostQueue,
    config: &Config,
    events: &mut Events,
) {
    for (_entity, (player, body)) in world.query_mut::<(&mut Player, &mut Body)>() {
        let Some(sample) = queue.take_sample(player.id) else {
            continue;
        };
        handle_movement(player, body, &sample, config, events);
        handle_jump(player, body, &sample, config);
        handle_attack(player, &sample, events);

        // Falling players are pulled down harder for a snappier arc.
        body.gravity_y = if body.vel.y > 0.0 {
            Params::FALL_GRAVITY
        } else {
            Params::PLAYER_GRAVITY
        };
    }
}

fn handle_movement(
    player: &mut Player,
    body: &mut Body,
    sample: &ControlSample,
    config: &Config,
    events: &mut Events,
) {
    let running = sample.secondary > 0.0;
    let speed = if running {
        config.run_speed
    } else {
        config.walk_speed
    };
    let anim = if running { AnimKind::Run } else { AnimKind::Walk };

    if sample.left > 0.0 {
        body.vel.x = -speed;
        player.facing = Facing::Left;
        events.anims.push((player.id, anim));
    } else if sample.right > 0.0 {
        body.vel.x = speed;
        player.facing = Facing::Right;
        events.anims.push((player.id, anim));
    } else {
        body.vel.x = 0.0;
        events.anims.push((player.id, AnimKind::Idle));
    }
}

fn handle_jump(player: &mut Player, body: &mut Body, sample: &ControlSample, config: &Config) {
    let grounded = body.blocked.down;
    if grounded {
        player.jumps_left = Params::MAX_JUMPS;
    }

    let pressed = sample.primary > 0.0;
    // Gamepad triggers by level; keyboard schemes need a fresh press per
    // jump.
    let triggered = match player.scheme {
        ControlScheme::Gamepad => pressed,
        ControlScheme::Arrows | ControlScheme::Wasd => pressed && !player.jump_held,
    };
    player.jump_held = pressed;

    if triggered && player.jumps_left > 0 {
        // The first jump is free while grounded; only air jumps spend
        // budget.
        if !grounded {
            player.jumps_left -= 1;
        }
        body.vel.y = config.jump_speed;
    }
}

fn handle_attack(player: &Player, sample: &ControlSample, events: &mut Events) {
    if sample.tertiary > 0.0 {
        events.anims.push((player.id, AnimKind::Attack));
    }
}
