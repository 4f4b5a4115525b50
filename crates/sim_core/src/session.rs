//! Session orchestration: the per-frame step and its fixed system order.
//!
//! Everything here is single-threaded. One `step` per rendered frame runs
//! player movement, streaming, spawning, AI, ragdolls, then combat; all
//! timers are deadlines compared against the session clock accumulated from
//! frame deltas, so a dropped frame slows the world instead of desyncing it.

use glam::{Vec2, Vec3};
use metrics::histogram;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use worldgen::height_at;

use crate::actor::ActorStore;
use crate::events::{CommentaryEvent, CommentaryKind, SimEvents};
use crate::player::PlayerState;
use crate::shop::{self, PurchaseItem};
use crate::snapshot::{FrameSnapshot, HudStatus};
use crate::streaming::ChunkStream;
use crate::systems::combat::{CombatState, Tracer};
use crate::systems::spawn::Spawner;
use crate::systems::{ai, ragdoll};
use data_runtime::{ArchetypeDb, RuntimeConfigs};

/// Input sampled by the platform layer for one frame. The camera yaw/pitch
/// live out there; the simulation only reads them.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub move_axes: Vec2,
    pub look_yaw: f32,
    pub look_pitch: f32,
    pub fire_held: bool,
    pub reload_pressed: bool,
}

const LOW_HEALTH_AT: f32 = 25.0;
const LOW_HEALTH_REARM_AT: f32 = 40.0;
const KILLSTREAK_EVERY: u32 = 5;
/// Frame hitches are clamped so one stall cannot teleport everything.
const MAX_FRAME_DT: f32 = 0.25;

pub struct Session {
    seed: u32,
    time_s: f64,
    cfgs: RuntimeConfigs,
    archetypes: ArchetypeDb,
    pub player: PlayerState,
    pub actors: ActorStore,
    pub stream: ChunkStream,
    spawner: Spawner,
    combat: CombatState,
    events: SimEvents,
    rng: ChaCha8Rng,
    low_health_armed: bool,
    announced_streaks: u32,
}

impl Session {
    /// Build an inactive session: the world around the spawn point exists
    /// immediately, but nothing moves until `start`.
    #[must_use]
    pub fn new(seed: u32, cfgs: RuntimeConfigs, archetypes: ArchetypeDb) -> Self {
        let mut stream = ChunkStream::new(seed, cfgs.streaming.render_distance);
        stream.update(Vec2::ZERO);
        let mut player = PlayerState::new(cfgs.combat.magazine);
        player.pos = Vec3::new(0.0, height_at(0.0, 0.0, seed), 0.0);
        let spawner = Spawner::new(&cfgs.spawning);
        Self {
            seed,
            time_s: 0.0,
            cfgs,
            archetypes,
            player,
            actors: ActorStore::new(),
            stream,
            spawner,
            combat: CombatState::new(),
            events: SimEvents::default(),
            rng: ChaCha8Rng::seed_from_u64(u64::from(seed)),
            low_health_armed: true,
            announced_streaks: 0,
        }
    }

    /// Activate the player and queue the intro commentary.
    pub fn start(&mut self) {
        if self.player.active {
            return;
        }
        self.player.active = true;
        self.spawner.arm(self.time_s, &self.cfgs.spawning);
        let intro = self.commentary(CommentaryKind::Intro);
        self.events.push_commentary(intro);
        log::info!("session started, seed {}", self.seed);
    }

    /// One simulation frame.
    pub fn step(&mut self, dt: f32, input: &FrameInput) {
        let started = std::time::Instant::now();
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        if dt <= 0.0 {
            return;
        }
        self.time_s += f64::from(dt);
        let now = self.time_s;

        if self.player.active {
            let stream = &self.stream;
            crate::player::update_movement(
                &mut self.player,
                input.move_axes,
                input.look_yaw,
                dt,
                |p, r| stream.is_blocked(p, r),
                &self.cfgs.player,
                self.seed,
            );
        }
        self.stream.update(self.player.planar_pos());

        if self.player.active {
            self.spawner.update(
                &mut self.actors,
                self.player.planar_pos(),
                self.player.score,
                &self.archetypes,
                &self.cfgs.spawning,
                &mut self.rng,
                self.seed,
                now,
                &mut self.events,
            );
            let damage = ai::update_actors(
                &mut self.actors,
                self.player.planar_pos(),
                &self.stream,
                &mut self.rng,
                self.seed,
                dt,
                now,
                self.cfgs.combat.contact_dps,
            );
            ai::separate_actors(&mut self.actors, self.seed);
            self.apply_player_damage(damage);
        }

        ragdoll::update_ragdolls(
            &mut self.actors,
            self.seed,
            dt,
            now,
            self.cfgs.spawning.despawn_s,
        );

        self.combat.tick(&mut self.player, &self.cfgs.combat, now);
        if self.player.active {
            if input.reload_pressed {
                self.combat
                    .request_reload(&self.player, &self.cfgs.combat, now, &mut self.events);
            }
            if input.fire_held {
                let cam_pos = self.player.pos + Vec3::Y * self.cfgs.player.eye_height_m;
                let cam_dir = view_dir(input.look_yaw, input.look_pitch);
                self.combat.try_fire(
                    &mut self.player,
                    &mut self.actors,
                    cam_pos,
                    cam_dir,
                    &self.cfgs.combat,
                    &mut self.rng,
                    now,
                    &mut self.events,
                );
            }
            let streaks = self.combat.hostile_kills() / KILLSTREAK_EVERY;
            if streaks > self.announced_streaks {
                self.announced_streaks = streaks;
                let ev = self.commentary(CommentaryKind::Killstreak {
                    streak: self.combat.hostile_kills(),
                });
                self.events.push_commentary(ev);
            }
        }

        if self.player.health >= LOW_HEALTH_REARM_AT {
            self.low_health_armed = true;
        }

        histogram!("sim.step_ms").record(started.elapsed().as_secs_f64() * 1000.0);
    }

    fn commentary(&self, kind: CommentaryKind) -> CommentaryEvent {
        CommentaryEvent {
            kind,
            score: self.player.score,
            wave: self.spawner.wave(),
        }
    }

    fn apply_player_damage(&mut self, damage: f32) {
        if damage <= 0.0 {
            return;
        }
        self.player.health = (self.player.health - damage).max(0.0);
        if self.low_health_armed && self.player.health > 0.0 && self.player.health < LOW_HEALTH_AT {
            self.low_health_armed = false;
            let ev = self.commentary(CommentaryKind::LowHealth);
            self.events.push_commentary(ev);
        }
        if self.player.health <= 0.0 && self.player.active {
            self.player.active = false;
            log::info!(
                "player down at {:.1}s, score {}, wave {}",
                self.time_s,
                self.player.score,
                self.spawner.wave()
            );
        }
    }

    /// Buy at the nearest shop counter; denied while the session is not
    /// active.
    pub fn try_purchase(&mut self, item: PurchaseItem) -> bool {
        if !self.player.active {
            self.events.push_cue(crate::events::AudioCue::Denied);
            return false;
        }
        shop::try_purchase(
            &mut self.player,
            item,
            &self.stream,
            &self.cfgs.shop,
            &mut self.events,
        )
    }

    /// Drain this frame's audio/commentary/recoil output.
    pub fn drain_events(&mut self) -> SimEvents {
        self.events.take()
    }

    #[must_use]
    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        FrameSnapshot {
            player_pos: self.player.pos,
            player_yaw: self.player.yaw,
            actors: self.actors.as_slice(),
            obstacles: self.stream.obstacles().collect(),
            tracers: self.combat.tracers(),
            hud: self.hud(),
        }
    }

    #[must_use]
    pub fn hud(&self) -> HudStatus {
        HudStatus {
            health: self.player.health,
            ammo: self.player.ammo,
            reloading: self.combat.reloading(),
            score: self.player.score,
            currency: self.player.currency,
            wave: self.spawner.wave(),
            damage_multiplier: self.player.damage_multiplier,
            active: self.player.active,
        }
    }

    #[must_use]
    pub fn time_s(&self) -> f64 {
        self.time_s
    }

    #[must_use]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    #[must_use]
    pub fn wave(&self) -> u32 {
        self.spawner.wave()
    }

    #[must_use]
    pub fn tracers(&self) -> &[Tracer] {
        self.combat.tracers()
    }

    #[must_use]
    pub fn hostile_kills(&self) -> u32 {
        self.combat.hostile_kills()
    }
}

/// Camera ray from yaw and pitch, matching the view rig's forward vector.
fn view_dir(yaw: f32, pitch: f32) -> Vec3 {
    let (sp, cp) = pitch.sin_cos();
    let (sy, cy) = yaw.sin_cos();
    Vec3::new(cp * cy, sp, cp * sy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(7, RuntimeConfigs::default(), ArchetypeDb::default())
    }

    #[test]
    fn nothing_moves_before_start() {
        let mut s = session();
        let input = FrameInput {
            move_axes: Vec2::new(0.0, 1.0),
            fire_held: true,
            ..FrameInput::default()
        };
        let before = s.player.pos;
        for _ in 0..60 {
            s.step(0.016, &input);
        }
        assert_eq!(s.player.pos, before);
        assert!(s.actors.is_empty());
        assert_eq!(s.player.ammo, s.hud().ammo);
        assert!(s.tracers().is_empty());
    }

    #[test]
    fn start_emits_the_intro_exactly_once() {
        let mut s = session();
        s.start();
        s.start();
        let events = s.drain_events();
        let intros = events
            .commentary
            .iter()
            .filter(|e| e.kind == CommentaryKind::Intro)
            .count();
        assert_eq!(intros, 1);
    }

    #[test]
    fn idle_time_before_start_owes_no_waves() {
        let mut s = session();
        // Over a minute on the menu before the run begins.
        for _ in 0..280 {
            s.step(0.25, &FrameInput::default());
        }
        assert!(s.time_s() > 60.0);
        s.start();
        let _ = s.drain_events();
        for _ in 0..10 {
            s.step(0.016, &FrameInput::default());
        }
        assert_eq!(s.wave(), 1);
        assert!(s.actors.is_empty());
        let events = s.drain_events();
        assert!(events
            .commentary
            .iter()
            .all(|e| e.kind != CommentaryKind::WaveStart));
    }

    #[test]
    fn the_clock_accumulates_frame_deltas() {
        let mut s = session();
        s.start();
        for _ in 0..100 {
            s.step(0.016, &FrameInput::default());
        }
        assert!((s.time_s() - 1.6).abs() < 1e-6);
    }

    #[test]
    fn view_dir_matches_yaw_plane_at_zero_pitch() {
        let d = view_dir(std::f32::consts::FRAC_PI_2, 0.0);
        assert!(d.x.abs() < 1e-6);
        assert!((d.z - 1.0).abs() < 1e-6);
        assert!(d.y.abs() < 1e-6);
    }
}
