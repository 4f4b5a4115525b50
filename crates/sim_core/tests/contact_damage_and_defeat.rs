//! Hostiles in melee range drain player health at the contact rate, stacking
//! per attacker. The low-health warning fires once on the way down, and at
//! zero health the session deactivates and stops responding to movement.

use data_runtime::{Archetype, ArchetypeDb, RuntimeConfigs};
use glam::{Vec2, Vec3};
use sim_core::{CommentaryKind, FrameInput, Session};
use worldgen::height_at;

const SEED: u32 = 7;

fn surrounded_session() -> Session {
    let cfgs = RuntimeConfigs::default();
    let db = ArchetypeDb::default();
    let stats = db.stats(Archetype::Bulwark);
    let mut session = Session::new(SEED, cfgs, db);
    session.start();
    let center = session.player.pos;
    for angle in [0.0f32, 2.1, 4.2] {
        let offset = Vec2::new(angle.cos(), angle.sin()) * 1.5;
        let pos = Vec3::new(
            center.x + offset.x,
            height_at(center.x + offset.x, center.z + offset.y, SEED),
            center.z + offset.y,
        );
        session.actors.spawn(Archetype::Bulwark, pos, 0.0, stats);
    }
    session
}

#[test]
fn three_attackers_drain_low_health_warning_then_defeat() {
    let mut session = surrounded_session();
    let contact_dps = RuntimeConfigs::default().combat.contact_dps;
    let input = FrameInput::default();

    let mut low_health_events = 0;
    let mut prev_health = session.player.health;
    let mut frames_to_defeat = None;
    for frame in 0..2000 {
        session.step(0.016, &input);
        let health = session.player.health;
        assert!(health <= prev_health, "health rose without a medkit");
        assert!(health >= 0.0);
        prev_health = health;
        for ev in session.drain_events().commentary {
            if ev.kind == CommentaryKind::LowHealth {
                low_health_events += 1;
            }
        }
        if !session.hud().active {
            frames_to_defeat = Some(frame);
            break;
        }
    }

    let frames = frames_to_defeat.expect("player never went down");
    assert_eq!(low_health_events, 1, "low-health warning must fire once");

    // Three stacked attackers: defeat should take roughly 100 / (3 * dps)
    // seconds. Generous bounds, since approach and separation cost frames.
    let expected_s = 100.0 / (3.0 * contact_dps);
    #[allow(clippy::cast_precision_loss)]
    let took_s = (frames + 1) as f32 * 0.016;
    assert!(
        took_s > expected_s * 0.5 && took_s < expected_s * 3.0,
        "defeat took {took_s}s, expected near {expected_s}s"
    );

    // Death freezes the player: movement input no longer changes position.
    let downed_at = session.player.pos;
    let run = FrameInput {
        move_axes: Vec2::new(0.0, 1.0),
        ..FrameInput::default()
    };
    for _ in 0..30 {
        session.step(0.016, &run);
    }
    assert_eq!(session.player.pos, downed_at);
    assert!(!session.hud().active);
}
