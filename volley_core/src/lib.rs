pub mod components;
pub mod config;
pub mod match_ctl;
pub mod params;
pub mod resources;
pub mod scheduler;
pub mod systems;

pub use components::*;
pub use config::*;
pub use match_ctl::*;
pub use params::*;
pub use resources::*;
pub use scheduler::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Advance the volleyball simulation by one host frame.
///
/// Before calling, the host syncs engine body state (position,
/// velocity, blocked flags) into each entity's `Body` and fills `queue`
/// with control samples and ball-contact reports. Afterwards it reads
/// back the body writes and drains `events`.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    ctl: &mut MatchCtl,
    scheduler: &mut Scheduler,
    queue: &mut HostQueue,
    events: &mut Events,
    rng: &mut GameRng,
) {
    events.clear();

    // Scheduled events first so a phase change gates this frame's
    // systems. Entries issued for a phase the match has left are dead.
    for ev in scheduler.drain_due(time.now) {
        if ev.phase.is_some_and(|p| p != ctl.phase()) {
            continue;
        }
        ctl.handle_event(ev.kind, world, config, scheduler, events, rng, time);
    }

    if ctl.physics_live() {
        // Players first, then contacts, so the impulse sees this tick's
        // player velocity; the ball post-processes whatever resulted.
        update_players(world, queue, config, events);
        resolve_contacts(world, queue, events);
        ball_tick(world, config, rng);
    }

    queue.clear();
    time.now += time.dt;
}

/// Spawn the ball at its serve position with the opening serve velocity.
pub fn create_ball(world: &mut World, config: &Config) -> hecs::Entity {
    let mut body = Body::new(config.ball_serve_pos());
    body.vel = Vec2::new(Params::BALL_SERVE_VX, Params::BALL_SERVE_VY);
    body.gravity_y = Params::BALL_BASE_GRAVITY * config.ball_gravity_factor;
    world.spawn((Ball::new(config), body))
}

/// Spawn a player on their side of the court.
pub fn create_player(
    world: &mut World,
    player_id: u8,
    scheme: ControlScheme,
    config: &Config,
) -> hecs::Entity {
    let mut body = Body::new(config.player_spawn(player_id));
    body.gravity_y = Params::PLAYER_GRAVITY;
    world.spawn((Player::new(player_id, scheme), body))
}

/// Rebind a player's controls. External configuration, not part of the
/// simulation loop.
pub fn set_control_scheme(world: &mut World, player_id: u8, scheme: ControlScheme) {
    for (_entity, player) in world.query_mut::<&mut Player>() {
        if player.id == player_id {
            player.set_scheme(scheme);
            return;
        }
    }
    log::warn!("no player {player_id} to rebind controls for");
}
