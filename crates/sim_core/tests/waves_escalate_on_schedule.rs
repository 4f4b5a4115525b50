//! The wave counter advances every wave interval, each advance announces
//! itself through commentary with the current score and wave number, and the
//! intro plays once at session start.

use data_runtime::{ArchetypeDb, RuntimeConfigs};
use sim_core::{CommentaryKind, FrameInput, Session};

#[test]
fn two_minutes_of_survival_sees_waves_2_3_4_5() {
    let cfgs = RuntimeConfigs::default();
    let wave_interval = cfgs.spawning.wave_interval_s;
    assert!((wave_interval - 30.0).abs() < f32::EPSILON);

    let mut session = Session::new(3, cfgs, ArchetypeDb::default());
    session.start();

    let mut intros = 0;
    let mut waves_seen = Vec::new();
    let input = FrameInput::default();
    let mut steps = 0;
    while session.time_s() < 125.0 {
        session.step(0.05, &input);
        steps += 1;
        assert!(steps < 4000, "runaway loop");
        // The test player is invincible so the session cannot end early.
        session.player.health = 100.0;
        for ev in session.drain_events().commentary {
            match ev.kind {
                CommentaryKind::Intro => intros += 1,
                CommentaryKind::WaveStart => {
                    waves_seen.push(ev.wave);
                    assert_eq!(ev.score, session.player.score);
                }
                _ => {}
            }
        }
    }

    assert_eq!(intros, 1);
    assert_eq!(waves_seen, vec![2, 3, 4, 5]);
    assert_eq!(session.wave(), 5);
    assert!(
        session.actors.len() > 4,
        "two minutes of spawning produced almost nothing"
    );
}
