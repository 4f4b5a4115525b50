//! A rusher has 40 hp and the rifle does 35 base damage: the first hit
//! leaves it at 5 hp and alive, the second drops it, and the score and
//! currency rewards land exactly once no matter how long the trigger stays
//! held afterwards.

use data_runtime::{Archetype, ArchetypeDb, RuntimeConfigs};
use glam::{Vec2, Vec3};
use sim_core::{Behavior, FrameInput, Session};
use worldgen::height_at;

const SEED: u32 = 7;

fn aim_at(session: &Session, target_id: sim_core::ActorId) -> (f32, f32) {
    let cfg = RuntimeConfigs::default();
    let actor = session.actors.get(target_id).expect("target gone");
    let torso = actor.torso(cfg.combat.torso_height_frac);
    let eye = session.player.pos + Vec3::Y * cfg.player.eye_height_m;
    let d = torso - eye;
    let planar = Vec2::new(d.x, d.z).length();
    (d.z.atan2(d.x), d.y.atan2(planar))
}

#[test]
fn two_hits_kill_and_reward_exactly_once() {
    let cfgs = RuntimeConfigs::default();
    let db = ArchetypeDb::default();
    let stats = db.stats(Archetype::Rusher);
    assert_eq!(stats.max_hp, 40);

    let mut session = Session::new(SEED, cfgs, db);
    session.start();

    let spawn_at = session.player.pos + Vec3::new(10.0, 0.0, 0.0);
    let pos = Vec3::new(
        spawn_at.x,
        height_at(spawn_at.x, spawn_at.z, SEED),
        spawn_at.z,
    );
    let id = session.actors.spawn(Archetype::Rusher, pos, 0.0, stats);

    let mut hp_after_first_hit = None;
    let mut death_frame = None;
    for frame in 0..120 {
        let (yaw, pitch) = aim_at(&session, id);
        let input = FrameInput {
            look_yaw: yaw,
            look_pitch: pitch,
            fire_held: true,
            ..FrameInput::default()
        };
        session.step(0.016, &input);
        let actor = session.actors.get(id).expect("despawned too early");
        if hp_after_first_hit.is_none() && actor.hp < actor.max_hp {
            hp_after_first_hit = Some(actor.hp);
        }
        if death_frame.is_none() && actor.behavior == Behavior::DeadFalling {
            death_frame = Some(frame);
            break;
        }
    }

    assert_eq!(hp_after_first_hit, Some(5), "first hit should leave 5 hp");
    assert!(death_frame.is_some(), "second hit never landed");
    let actor = session.actors.get(id).expect("ragdoll should persist");
    assert_eq!(actor.hp, 0);
    assert!(actor.died_at.is_some());

    let score_at_death = session.player.score;
    let currency_at_death = session.player.currency;
    assert_eq!(score_at_death, stats.score_value);
    assert_eq!(currency_at_death, stats.currency_reward);

    // Keep shooting through the corpse; nothing accrues twice.
    for _ in 0..30 {
        let (yaw, pitch) = aim_at(&session, id);
        let input = FrameInput {
            look_yaw: yaw,
            look_pitch: pitch,
            fire_held: true,
            ..FrameInput::default()
        };
        session.step(0.016, &input);
        if session.actors.get(id).is_none() {
            break;
        }
    }
    assert_eq!(session.player.score, score_at_death);
    assert_eq!(session.player.currency, currency_at_death);
}
