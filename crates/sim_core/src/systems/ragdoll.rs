//! Cosmetic death physics: a kinematic fall with a damped ground bounce and
//! a tilt lerp toward lying flat, then a timed despawn.

use glam::Vec3;
use metrics::counter;
use worldgen::height_at;

use crate::actor::{ActorStore, Behavior};

const GRAVITY: f32 = 18.0;
const BOUNCE_DAMP: f32 = 0.35;
const GROUND_FRICTION: f32 = 0.6;
/// Below this downward speed the body rests instead of bouncing again.
const REST_SPEED: f32 = 1.2;
const TILT_RATE: f32 = 2.8;

/// Integrate every dead-falling actor and drop those whose despawn deadline
/// has passed. Returns how many were removed.
pub fn update_ragdolls(store: &mut ActorStore, seed: u32, dt: f32, now: f64, despawn_s: f32) -> usize {
    for actor in store.iter_mut() {
        if actor.behavior != Behavior::DeadFalling {
            continue;
        }
        actor.vel.y -= GRAVITY * dt;
        actor.pos += actor.vel * dt;
        let ground = height_at(actor.pos.x, actor.pos.z, seed);
        if actor.pos.y < ground {
            actor.pos.y = ground;
            if actor.vel.y < -REST_SPEED {
                actor.vel.y = -actor.vel.y * BOUNCE_DAMP;
                actor.vel.x *= GROUND_FRICTION;
                actor.vel.z *= GROUND_FRICTION;
            } else {
                actor.vel = Vec3::ZERO;
            }
        }
        actor.tilt = (actor.tilt + TILT_RATE * dt).min(1.0);
    }
    let before = store.len();
    store.retain(|a| match (a.behavior, a.died_at) {
        (Behavior::DeadFalling, Some(t)) => now - t < f64::from(despawn_s),
        _ => true,
    });
    let removed = before - store.len();
    if removed > 0 {
        counter!("sim.despawned").increment(removed as u64);
    }
    removed
}
