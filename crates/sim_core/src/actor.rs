//! Actors: spawned combatants and civilians, plus the store that owns them.

use data_runtime::{Archetype, ArchetypeStats};
use glam::{Vec2, Vec3};

/// Stable per-session actor handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub u32);

/// Behavior state machine.
///
/// Hostiles cycle `Approaching` -> `Attacking`; civilians wander in
/// `Approaching` and switch to `Fleeing` near the player, never `Attacking`.
/// `DeadFalling` is terminal; leaving it happens only by despawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    Approaching,
    Attacking,
    Fleeing,
    DeadFalling,
}

#[derive(Debug, Clone)]
pub struct Actor {
    pub id: ActorId,
    pub archetype: Archetype,
    /// Feet position; `pos.y` tracks the terrain while alive.
    pub pos: Vec3,
    pub yaw: f32,
    pub hp: i32,
    pub max_hp: i32,
    pub behavior: Behavior,
    /// Ragdoll velocity; zero while alive.
    pub vel: Vec3,
    /// Session time of the death transition.
    pub died_at: Option<f64>,
    /// 0 upright to 1 lying flat, advanced during the ragdoll fall.
    pub tilt: f32,
    pub speed: f32,
    pub radius: f32,
    pub scale: f32,
    pub score_value: u32,
    pub currency_reward: u32,
    /// Civilian wander direction, refreshed on a jittered cadence.
    pub wander_dir: Vec2,
    pub next_wander_at: f64,
}

impl Actor {
    #[must_use]
    pub fn alive(&self) -> bool {
        self.behavior != Behavior::DeadFalling
    }

    #[must_use]
    pub fn hostile(&self) -> bool {
        self.archetype.is_hostile()
    }

    /// Planar melee reach, growing with body size.
    #[must_use]
    pub fn attack_range(&self) -> f32 {
        2.0 * self.scale
    }

    /// Aim point for hitscan: a fixed fraction up a scaled body height.
    #[must_use]
    pub fn torso(&self, height_frac: f32) -> Vec3 {
        self.pos + Vec3::Y * (1.8 * self.scale * height_frac)
    }

    #[must_use]
    pub fn planar_pos(&self) -> Vec2 {
        Vec2::new(self.pos.x, self.pos.z)
    }
}

/// Reduce hp by `amount`, clamped at zero. Returns `true` exactly when this
/// call brought hp to zero; further calls on a dead actor are no-ops.
pub fn apply_damage(actor: &mut Actor, amount: i32) -> bool {
    if actor.behavior == Behavior::DeadFalling {
        return false;
    }
    let before = actor.hp;
    actor.hp = (actor.hp - amount.max(0)).max(0);
    before > 0 && actor.hp == 0
}

/// The one death transition: flips behavior, records the time, and seeds the
/// ragdoll launch velocity.
pub fn enter_ragdoll(actor: &mut Actor, now: f64, launch: Vec3) {
    actor.behavior = Behavior::DeadFalling;
    actor.vel = launch;
    actor.died_at = Some(now);
    actor.tilt = 0.0;
}

/// Owns every live and falling actor; ids are never reused within a session.
#[derive(Debug, Default)]
pub struct ActorStore {
    next_id: u32,
    actors: Vec<Actor>,
}

impl ActorStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, archetype: Archetype, pos: Vec3, yaw: f32, stats: ArchetypeStats) -> ActorId {
        let id = ActorId(self.next_id);
        self.next_id += 1;
        self.actors.push(Actor {
            id,
            archetype,
            pos,
            yaw,
            hp: stats.max_hp,
            max_hp: stats.max_hp,
            behavior: Behavior::Approaching,
            vel: Vec3::ZERO,
            died_at: None,
            tilt: 0.0,
            speed: stats.move_speed_mps,
            radius: stats.radius_m,
            scale: stats.scale,
            score_value: stats.score_value,
            currency_reward: stats.currency_reward,
            wander_dir: Vec2::X,
            next_wander_at: 0.0,
        });
        id
    }

    #[must_use]
    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id == id)
    }

    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|a| a.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Actor> {
        self.actors.iter_mut()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Actor] {
        &self.actors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Actors that count against the spawn cap.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.actors.iter().filter(|a| a.alive()).count()
    }

    pub fn retain<F: FnMut(&Actor) -> bool>(&mut self, keep: F) {
        self.actors.retain(keep);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_runtime::ArchetypeDb;

    fn rusher(store: &mut ActorStore) -> ActorId {
        let db = ArchetypeDb::default();
        store.spawn(
            Archetype::Rusher,
            Vec3::ZERO,
            0.0,
            db.stats(Archetype::Rusher),
        )
    }

    #[test]
    fn damage_clamps_at_zero_and_reports_the_death_edge() {
        let mut store = ActorStore::new();
        let id = rusher(&mut store);
        let actor = store.get_mut(id).unwrap();
        assert!(!apply_damage(actor, 35));
        assert_eq!(actor.hp, 5);
        assert!(apply_damage(actor, 35));
        assert_eq!(actor.hp, 0);
    }

    #[test]
    fn dead_actors_ignore_further_damage() {
        let mut store = ActorStore::new();
        let id = rusher(&mut store);
        let actor = store.get_mut(id).unwrap();
        assert!(apply_damage(actor, 999));
        enter_ragdoll(actor, 1.0, Vec3::Y);
        assert!(!apply_damage(actor, 50));
        assert_eq!(actor.hp, 0);
        assert_eq!(actor.behavior, Behavior::DeadFalling);
    }

    #[test]
    fn ids_increase_and_never_recycle() {
        let mut store = ActorStore::new();
        let a = rusher(&mut store);
        let b = rusher(&mut store);
        store.retain(|actor| actor.id != a);
        let c = rusher(&mut store);
        assert!(b > a);
        assert!(c > b);
    }
}
