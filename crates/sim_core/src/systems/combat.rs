//! Hitscan combat: rate-limited fire, magazine and reload, nearest-hit
//! resolution against torso points, kill rewards, and cosmetic tracers.

use glam::Vec3;
use metrics::counter;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::actor::{self, ActorId, ActorStore};
use crate::events::{AudioCue, SimEvents};
use crate::player::PlayerState;
use data_runtime::configs::CombatConfig;

/// Visual-only shot trace; expires after the configured ttl and never feeds
/// back into hit resolution.
#[derive(Debug, Clone, Copy)]
pub struct Tracer {
    pub from: Vec3,
    pub to: Vec3,
    pub spawned_at: f64,
}

#[derive(Debug, Default)]
pub struct CombatState {
    next_shot_at: f64,
    reload_done_at: Option<f64>,
    tracers: Vec<Tracer>,
    hostile_kills: u32,
}

impl CombatState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn reloading(&self) -> bool {
        self.reload_done_at.is_some()
    }

    #[must_use]
    pub fn tracers(&self) -> &[Tracer] {
        &self.tracers
    }

    #[must_use]
    pub fn hostile_kills(&self) -> u32 {
        self.hostile_kills
    }

    /// Complete a due reload and expire old tracers.
    pub fn tick(&mut self, player: &mut PlayerState, cfg: &CombatConfig, now: f64) {
        if let Some(done_at) = self.reload_done_at {
            if now >= done_at {
                self.reload_done_at = None;
                player.ammo = cfg.magazine;
                log::debug!("reload complete, {} rounds", cfg.magazine);
            }
        }
        let ttl = f64::from(cfg.tracer_ttl_s);
        self.tracers.retain(|t| now - t.spawned_at < ttl);
    }

    /// Begin a reload unless one is already running or the magazine is full.
    pub fn request_reload(
        &mut self,
        player: &PlayerState,
        cfg: &CombatConfig,
        now: f64,
        events: &mut SimEvents,
    ) {
        if self.reload_done_at.is_some() || player.ammo == cfg.magazine {
            return;
        }
        self.reload_done_at = Some(now + f64::from(cfg.reload_s));
        events.push_cue(AudioCue::Reload);
    }

    /// Fire one hitscan shot down the camera ray, if the weapon is ready.
    ///
    /// Dry firing plays the empty cue and starts the reload; it consumes the
    /// same rate-limit slot as a live round so holding the trigger cannot
    /// spam either path.
    #[allow(clippy::too_many_arguments)]
    pub fn try_fire(
        &mut self,
        player: &mut PlayerState,
        store: &mut ActorStore,
        cam_pos: Vec3,
        cam_dir: Vec3,
        cfg: &CombatConfig,
        rng: &mut ChaCha8Rng,
        now: f64,
        events: &mut SimEvents,
    ) {
        if self.reload_done_at.is_some() || now < self.next_shot_at {
            return;
        }
        self.next_shot_at = now + f64::from(cfg.fire_interval_s);
        if player.ammo == 0 {
            events.push_cue(AudioCue::Empty);
            self.request_reload(player, cfg, now, events);
            return;
        }
        player.ammo -= 1;

        let dir = cam_dir.normalize_or(Vec3::X);
        let mut end = cam_pos + dir * cfg.far_clip_m;
        if let Some((id, t)) = resolve_hit(store, cam_pos, dir, cfg) {
            end = cam_pos + dir * t;
            if let Some(target) = store.get_mut(id) {
                let dmg = (cfg.base_damage * player.damage_multiplier).round() as i32;
                events.push_cue(AudioCue::Hit);
                if actor::apply_damage(target, dmg) {
                    let jitter = Vec3::new(
                        rng.random::<f32>() - 0.5,
                        0.0,
                        rng.random::<f32>() - 0.5,
                    ) * 1.6;
                    let launch = dir * 7.0 + Vec3::Y * 5.5 + jitter;
                    actor::enter_ragdoll(target, now, launch);
                    player.score += target.score_value;
                    player.currency += target.currency_reward;
                    if target.hostile() {
                        self.hostile_kills += 1;
                    }
                    counter!("sim.kills").increment(1);
                    log::debug!(
                        "downed {} #{} (+{} score, +{} currency)",
                        target.archetype.name(),
                        target.id.0,
                        target.score_value,
                        target.currency_reward
                    );
                }
            }
        }

        let muzzle = cam_pos + dir * 0.4 - Vec3::Y * 0.12;
        self.tracers.push(Tracer {
            from: muzzle,
            to: end,
            spawned_at: now,
        });
        events.push_cue(AudioCue::Shoot);
        events.recoil_deg += 0.8 + rng.random::<f32>() * 0.5;
        counter!("sim.shots").increment(1);
    }
}

/// Nearest live actor whose torso point lies within its scaled hit radius of
/// the ray. Distance ties keep the earlier actor in store order because the
/// comparison is strict.
fn resolve_hit(
    store: &ActorStore,
    origin: Vec3,
    dir: Vec3,
    cfg: &CombatConfig,
) -> Option<(ActorId, f32)> {
    let mut best: Option<(ActorId, f32)> = None;
    for actor in store.iter() {
        if !actor.alive() {
            continue;
        }
        let torso = actor.torso(cfg.torso_height_frac);
        let t = (torso - origin).dot(dir);
        if t <= 0.0 || t > cfg.far_clip_m {
            continue;
        }
        let closest = origin + dir * t;
        let radius = cfg.hit_radius_m * actor.scale;
        if torso.distance_squared(closest) >= radius * radius {
            continue;
        }
        if best.map_or(true, |(_, bt)| t < bt) {
            best = Some((actor.id, t));
        }
    }
    best
}
