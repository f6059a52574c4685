use hecs::{Entity, World};

use crate::components::Health;
use crate::scheduler::{EventKind, Scheduler};

/// Apply damage through the invincibility gate. A hit is accepted only
/// when the window since the last accepted hit has fully elapsed; the
/// flag is cleared later by a scheduled event, not by polling.
pub fn take_damage(
    world: &mut World,
    entity: Entity,
    amount: u32,
    now: f32,
    scheduler: &mut Scheduler,
) {
    let Ok(mut health) = world.get::<&mut Health>(entity) else {
        return;
    };
    if now - health.last_hit <= health.window_secs {
        // Inside the window: dropped without touching the timestamp.
        return;
    }
    health.current = health.current.saturating_sub(amount);
    health.last_hit = now;
    health.invincible = true;
    let window = health.window_secs;
    drop(health);
    // Untagged: the window outlives any phase change.
    scheduler.schedule(now + window, EventKind::InvincibilityEnd(entity));
}

/// Scheduled-event handler clearing the invincible flag.
pub fn end_invincibility(world: &mut World, entity: Entity) {
    if let Ok(mut health) = world.get::<&mut Health>(entity) {
        health.invincible = false;
    }
}

/// Force health to zero, window or not.
pub fn kill(world: &mut World, entity: Entity) {
    if let Ok(mut health) = world.get::<&mut Health>(entity) {
        health.current = 0;
    }
}
