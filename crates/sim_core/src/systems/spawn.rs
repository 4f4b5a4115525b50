//! Timed actor spawning on a ring around the player, with wave escalation.

use glam::{Vec2, Vec3};
use metrics::counter;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use worldgen::height_at;

use crate::actor::ActorStore;
use crate::events::{CommentaryEvent, CommentaryKind, SimEvents};
use data_runtime::configs::{SpawnConfig, SpawnWeights};
use data_runtime::{Archetype, ArchetypeDb};

pub struct Spawner {
    interval_s: f32,
    next_spawn_at: f64,
    wave: u32,
    next_wave_at: f64,
}

impl Spawner {
    #[must_use]
    pub fn new(cfg: &SpawnConfig) -> Self {
        Self {
            interval_s: cfg.interval_s,
            next_spawn_at: f64::from(cfg.interval_s),
            wave: 1,
            next_wave_at: f64::from(cfg.wave_interval_s),
        }
    }

    #[must_use]
    pub fn wave(&self) -> u32 {
        self.wave
    }

    /// Re-anchor both deadlines at `now`. The session clock runs while the
    /// player is still on the menu; arming at activation keeps that idle
    /// time from backlogging waves.
    pub fn arm(&mut self, now: f64, cfg: &SpawnConfig) {
        self.next_spawn_at = now + f64::from(self.interval_s);
        self.next_wave_at = now + f64::from(cfg.wave_interval_s);
    }

    /// Advance wave and spawn deadlines. At most one actor spawns per call;
    /// the cadence is jittered so arrivals do not feel metronomic.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        store: &mut ActorStore,
        player: Vec2,
        score: u32,
        db: &ArchetypeDb,
        cfg: &SpawnConfig,
        rng: &mut ChaCha8Rng,
        seed: u32,
        now: f64,
        events: &mut SimEvents,
    ) {
        if now >= self.next_wave_at {
            self.wave += 1;
            self.interval_s = (self.interval_s * cfg.wave_interval_scale).max(cfg.min_interval_s);
            self.next_wave_at += f64::from(cfg.wave_interval_s);
            events.push_commentary(CommentaryEvent {
                kind: CommentaryKind::WaveStart,
                score,
                wave: self.wave,
            });
            log::info!("wave {} begins, spawn interval {:.2}s", self.wave, self.interval_s);
        }
        if now < self.next_spawn_at || store.live_count() >= cfg.max_live {
            return;
        }
        self.next_spawn_at = now + f64::from(self.interval_s) * (0.8 + f64::from(rng.random::<f32>()) * 0.4);

        let kind = roll_archetype(&cfg.weights, rng);
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let radius = rng.random_range(cfg.min_radius_m..=cfg.max_radius_m);
        let at = player + Vec2::new(angle.cos(), angle.sin()) * radius;
        let facing = (player - at).to_angle();
        let pos = Vec3::new(at.x, height_at(at.x, at.y, seed), at.y);
        let id = store.spawn(kind, pos, facing, db.stats(kind));
        counter!("sim.spawns").increment(1);
        log::debug!(
            "spawned {} #{} at ({:.1}, {:.1}), ring {:.1}m",
            kind.name(),
            id.0,
            at.x,
            at.y,
            radius
        );
    }
}

fn roll_archetype(weights: &SpawnWeights, rng: &mut ChaCha8Rng) -> Archetype {
    let total = weights.total().max(1);
    let mut roll = rng.random_range(0..total);
    for (kind, weight) in [
        (Archetype::Rusher, weights.rusher),
        (Archetype::Marauder, weights.marauder),
        (Archetype::Bulwark, weights.bulwark),
        (Archetype::Settler, weights.settler),
    ] {
        if roll < weight {
            return kind;
        }
        roll -= weight;
    }
    Archetype::Rusher
}
