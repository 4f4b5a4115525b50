//! The shipped `data/config` tree parses, and a bare checkout without it
//! still yields usable defaults.

use data_runtime::{Archetype, ArchetypeDb, RuntimeConfigs};

#[test]
fn runtime_configs_load() {
    let cfgs = RuntimeConfigs::load_default().expect("configs");
    assert!(cfgs.combat.magazine >= 1);
    assert!(cfgs.spawning.min_radius_m <= cfgs.spawning.max_radius_m);
    assert!(cfgs.spawning.weights.total() > 0);
    assert!(cfgs.streaming.render_distance >= 1);
    assert!(cfgs.shop.damage_upgrade_step > 0.0);
}

#[test]
fn archetype_db_covers_every_kind() {
    let db = ArchetypeDb::load_default().expect("archetypes");
    for kind in Archetype::ALL {
        let s = db.stats(kind);
        assert!(s.max_hp >= 1, "{} has no hp", kind.name());
        assert!(s.move_speed_mps > 0.0);
    }
}
