//! Scripted session runs.
//!
//! The script plays a deliberately busy player: always moving, sweeping the
//! camera, firing in bursts, and reloading on a cadence. It exercises
//! streaming, spawning, combat, and the event feeds without a renderer.

use anyhow::{Context, Result};
use client_core::input::InputState;
use client_core::look::{LookConfig, LookRig};
use data_runtime::{ArchetypeDb, RuntimeConfigs};
use sim_core::{FrameInput, Session};

#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub seed: u32,
    pub frames: u32,
    pub dt: f32,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            seed: 7,
            frames: 3600,
            dt: 1.0 / 60.0,
        }
    }
}

/// What a scripted run saw, for logging and assertions.
#[derive(Debug, Default, Clone)]
pub struct RunReport {
    pub frames_run: u32,
    pub sim_time_s: f64,
    pub survived: bool,
    pub score: u32,
    pub currency: u32,
    pub wave: u32,
    pub hostile_kills: u32,
    pub peak_actors: usize,
    pub loaded_chunks: usize,
    pub audio_cues: usize,
    pub commentary_events: usize,
    pub recoil_total_deg: f32,
}

/// Run one scripted session to completion (or defeat) and summarize it.
pub fn run_scripted(opts: &RunOptions) -> Result<RunReport> {
    let cfgs = RuntimeConfigs::load_default().context("load runtime configs")?;
    let archetypes = ArchetypeDb::load_default().context("load archetype db")?;
    let mut session = Session::new(opts.seed, cfgs, archetypes);
    session.start();

    let look_cfg = LookConfig::default();
    let mut rig = LookRig::default();
    let mut keys = InputState::default();
    let mut report = RunReport::default();

    for frame in 0..opts.frames {
        script_frame(&mut keys, &mut rig, &look_cfg, frame);
        let input = FrameInput {
            move_axes: keys.move_axes(),
            look_yaw: rig.yaw,
            look_pitch: rig.pitch,
            fire_held: keys.fire_held,
            reload_pressed: keys.reload_pressed,
        };
        keys.reload_pressed = false;

        session.step(opts.dt, &input);
        report.frames_run = frame + 1;
        report.peak_actors = report.peak_actors.max(session.actors.len());

        let events = session.drain_events();
        report.audio_cues += events.audio.len();
        report.commentary_events += events.commentary.len();
        report.recoil_total_deg += events.recoil_deg;
        for ev in &events.commentary {
            log::info!("commentary [{}] score={} wave={}", ev.kind.key(), ev.score, ev.wave);
        }

        if !session.hud().active {
            log::info!("defeated after {} frames", report.frames_run);
            break;
        }
    }

    report.sim_time_s = session.time_s();
    report.survived = session.hud().active;
    report.score = session.player.score;
    report.currency = session.player.currency;
    report.wave = session.wave();
    report.hostile_kills = session.hostile_kills();
    report.loaded_chunks = session.stream.loaded_count();
    Ok(report)
}

/// Deterministic per-frame input: wander forward with a slow serpentine,
/// sweep the camera, fire in half-second bursts, reload every three seconds.
fn script_frame(keys: &mut InputState, rig: &mut LookRig, look_cfg: &LookConfig, frame: u32) {
    keys.forward = true;
    keys.strafe_right = frame % 240 < 60;
    keys.strafe_left = frame % 240 >= 120 && frame % 240 < 180;
    keys.fire_held = frame % 60 < 30;
    if frame % 180 == 0 && frame > 0 {
        keys.reload_pressed = true;
    }
    // A gentle horizontal sweep with a slight nod keeps shots spread around
    // the ring so some connect with approaching actors.
    let dy = if frame % 120 < 60 { 1.5 } else { -1.5 };
    rig.apply_mouse_delta(look_cfg, 6.0, dy);
}
