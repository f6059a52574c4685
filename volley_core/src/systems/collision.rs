use hecs::World;

use crate::components::{Ball, Body, Player};
use crate::params::Params;
use crate::resources::{Events, HostQueue, SoundRequest};

/// Resolve host-reported ball/player contacts into impulses on the
/// ball. A contact is dropped when either participant lacks a physics
/// body.
pub fn resolve_contacts(world: &mut World, queue: &mut HostQueue, events: &mut Events) {
    if queue.contacts.is_empty() {
        return;
    }
    let contacts = std::mem::take(&mut queue.contacts);

    for player_id in contacts {
        let striker = world
            .query::<(&Player, &Body)>()
            .iter()
            .find(|(_e, (p, _b))| p.id == player_id)
            .map(|(_e, (p, b))| (p.facing, b.vel, b.blocked.down));
        let Some((facing, vel, grounded)) = striker else {
            log::warn!("contact reported for unknown or bodiless player {player_id}");
            continue;
        };

        let mut force_x = vel.x * Params::HIT_FORCE_SCALE;
        let mut force_y = vel.y * Params::HIT_FORCE_SCALE;

        // A near-stationary player still shoves the ball the way they
        // face.
        if force_x.abs() < Params::HIT_MIN_PUSH {
            force_x = facing.sign() * Params::HIT_MIN_PUSH;
        }

        // Grounded hits always pop the ball upward; flat ground rallies
        // die here.
        if grounded && force_y.abs() < Params::HIT_FLAT_LIMIT {
            force_y = Params::HIT_GROUND_POP;
        }

        let mut applied = false;
        for (_entity, (_ball, body)) in world.query_mut::<(&Ball, &mut Body)>() {
            body.apply_force(force_x, force_y);
            applied = true;
        }
        if applied {
            events.sounds.push(SoundRequest::BallHit);
        }
    }
}
