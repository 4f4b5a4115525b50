//! Dropping five hostiles calls the killstreak commentary exactly once, on
//! the fifth kill, carrying the running kill count and the score at that
//! moment. The first four kills stay silent.

use data_runtime::{Archetype, ArchetypeDb, RuntimeConfigs};
use glam::{Vec2, Vec3};
use sim_core::{ActorId, Behavior, CommentaryKind, FrameInput, Session};
use worldgen::height_at;

const SEED: u32 = 7;

fn spawn_rusher(session: &mut Session, lane: f32) -> ActorId {
    let db = ArchetypeDb::default();
    let stats = db.stats(Archetype::Rusher);
    let x = session.player.pos.x + 10.0;
    let z = session.player.pos.z + lane;
    let pos = Vec3::new(x, height_at(x, z, SEED), z);
    session.actors.spawn(Archetype::Rusher, pos, 0.0, stats)
}

fn aim_at(session: &Session, target: ActorId) -> (f32, f32) {
    let cfg = RuntimeConfigs::default();
    let actor = session.actors.get(target).expect("target gone");
    let torso = actor.torso(cfg.combat.torso_height_frac);
    let eye = session.player.pos + Vec3::Y * cfg.player.eye_height_m;
    let d = torso - eye;
    let planar = Vec2::new(d.x, d.z).length();
    (d.z.atan2(d.x), d.y.atan2(planar))
}

#[test]
fn five_hostile_kills_trigger_one_killstreak_call() {
    let rusher_score = ArchetypeDb::default().stats(Archetype::Rusher).score_value;
    let mut session = Session::new(SEED, RuntimeConfigs::default(), ArchetypeDb::default());
    session.start();

    let mut streaks = Vec::new();
    let mut lane = 0.0;
    let mut target = spawn_rusher(&mut session, lane);
    for _ in 0..2000 {
        let (yaw, pitch) = aim_at(&session, target);
        let input = FrameInput {
            look_yaw: yaw,
            look_pitch: pitch,
            fire_held: true,
            ..FrameInput::default()
        };
        session.step(0.016, &input);
        for ev in session.drain_events().commentary {
            if let CommentaryKind::Killstreak { streak } = ev.kind {
                streaks.push(streak);
                assert_eq!(ev.score, 5 * rusher_score);
                assert_eq!(ev.wave, 1);
            }
        }
        if session.hostile_kills() >= 5 {
            break;
        }
        let down = session
            .actors
            .get(target)
            .map_or(true, |a| a.behavior == Behavior::DeadFalling);
        if down {
            // Fresh target on its own lane so the ray stays unambiguous.
            lane += 3.0;
            target = spawn_rusher(&mut session, lane);
        }
    }

    assert_eq!(session.hostile_kills(), 5, "never reached five kills");
    assert_eq!(streaks, vec![5]);
}
