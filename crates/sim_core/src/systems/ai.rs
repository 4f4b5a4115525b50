//! Actor AI: hostile pursuit and melee, civilian wander and flight, and
//! pairwise separation so attackers cannot stack on one spot.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use worldgen::height_at;

use crate::actor::{Actor, ActorStore, Behavior};
use crate::streaming::ChunkStream;

/// Civilians bolt inside this radius and calm down past the release radius.
const FLEE_RADIUS: f32 = 10.0;
const FLEE_RELEASE: f32 = 15.0;
/// Hysteresis on leaving melee range, so contact does not flicker.
const ATTACK_RELEASE: f32 = 1.15;
const WANDER_PERIOD_S: f64 = 1.8;
const WANDER_SPEED_FRAC: f32 = 0.45;

/// Advance every live actor one frame. Returns the total contact damage the
/// player takes this frame; simultaneous attackers stack additively.
pub fn update_actors(
    store: &mut ActorStore,
    player: Vec2,
    stream: &ChunkStream,
    rng: &mut ChaCha8Rng,
    seed: u32,
    dt: f32,
    now: f64,
    contact_dps: f32,
) -> f32 {
    let mut damage = 0.0;
    for actor in store.iter_mut() {
        if !actor.hostile() {
            civilian_step(actor, player, stream, rng, seed, dt, now);
            continue;
        }
        match actor.behavior {
            Behavior::DeadFalling | Behavior::Fleeing => {}
            Behavior::Attacking => {
                let to = player - actor.planar_pos();
                let dist = to.length();
                if dist > actor.attack_range() * ATTACK_RELEASE {
                    actor.behavior = Behavior::Approaching;
                } else {
                    damage += contact_dps * dt;
                    if dist > 1e-3 {
                        actor.yaw = to.y.atan2(to.x);
                    }
                }
            }
            Behavior::Approaching => {
                let to = player - actor.planar_pos();
                let dist = to.length();
                if dist <= actor.attack_range() {
                    actor.behavior = Behavior::Attacking;
                } else {
                    // Stop short of the range boundary instead of orbiting it.
                    let step = (actor.speed * dt).min(dist - actor.attack_range() * 0.9);
                    step_toward(actor, to / dist, step, stream, seed);
                }
            }
        }
    }
    damage
}

fn civilian_step(
    actor: &mut Actor,
    player: Vec2,
    stream: &ChunkStream,
    rng: &mut ChaCha8Rng,
    seed: u32,
    dt: f32,
    now: f64,
) {
    let to_player = player - actor.planar_pos();
    let dist = to_player.length();
    match actor.behavior {
        Behavior::DeadFalling => {}
        Behavior::Fleeing => {
            if dist > FLEE_RELEASE {
                actor.behavior = Behavior::Approaching;
            } else if dist > 1e-3 {
                step_toward(actor, -to_player / dist, actor.speed * dt, stream, seed);
            }
        }
        // Civilians never attack; out of danger they amble around.
        Behavior::Approaching | Behavior::Attacking => {
            if dist < FLEE_RADIUS {
                actor.behavior = Behavior::Fleeing;
                return;
            }
            if now >= actor.next_wander_at {
                let angle = rng.random_range(0.0..std::f32::consts::TAU);
                actor.wander_dir = Vec2::new(angle.cos(), angle.sin());
                actor.next_wander_at = now + WANDER_PERIOD_S * (0.6 + rng.random::<f64>() * 0.8);
            }
            let dir = actor.wander_dir;
            step_toward(actor, dir, actor.speed * WANDER_SPEED_FRAC * dt, stream, seed);
        }
    }
}

/// Move `step_len` along `dir` if the destination is clear; when it is not,
/// try a lateral side-step. The side comes from id parity so two blocked
/// actors pick opposite shoulders instead of mirror-oscillating.
fn step_toward(actor: &mut Actor, dir: Vec2, step_len: f32, stream: &ChunkStream, seed: u32) {
    if step_len <= 0.0 {
        return;
    }
    actor.yaw = dir.y.atan2(dir.x);
    let here = actor.planar_pos();
    let ahead = here + dir * step_len;
    let dest = if stream.is_blocked(ahead, actor.radius) {
        let side = if actor.id.0 % 2 == 0 { 1.0 } else { -1.0 };
        let lateral = here + Vec2::new(-dir.y, dir.x) * side * step_len;
        (!stream.is_blocked(lateral, actor.radius)).then_some(lateral)
    } else {
        Some(ahead)
    };
    if let Some(d) = dest {
        actor.pos.x = d.x;
        actor.pos.z = d.y;
        actor.pos.y = height_at(d.x, d.y, seed);
    }
}

/// Push overlapping live actors apart, half the overlap each. Corrections
/// are accumulated first so the pass is order-independent.
pub fn separate_actors(store: &mut ActorStore, seed: u32) {
    let actors = store.as_slice();
    let n = actors.len();
    let mut push = vec![Vec2::ZERO; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = (&actors[i], &actors[j]);
            if !a.alive() || !b.alive() {
                continue;
            }
            let delta = b.planar_pos() - a.planar_pos();
            let min_dist = a.radius + b.radius;
            let d2 = delta.length_squared();
            if d2 < min_dist * min_dist {
                let d = d2.sqrt().max(1e-4);
                let correction = (delta / d) * (min_dist - d) * 0.5;
                push[i] -= correction;
                push[j] += correction;
            }
        }
    }
    for (actor, p) in store.iter_mut().zip(push) {
        if p != Vec2::ZERO {
            actor.pos.x += p.x;
            actor.pos.z += p.y;
            actor.pos.y = height_at(actor.pos.x, actor.pos.z, seed);
        }
    }
}
