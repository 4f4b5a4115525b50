//! Hitscan combat tuning loaded from `data/config/combat.toml` with
//! defaults and clamping.

use crate::data_root;
use anyhow::{Context, Result};

#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
pub struct CombatConfig {
    /// Damage per shot before the player's damage multiplier.
    pub base_damage: f32,
    /// Minimum time between shots.
    pub fire_interval_s: f32,
    pub magazine: u32,
    pub reload_s: f32,
    /// Hit cylinder radius at scale 1.0; scaled by the target's size.
    pub hit_radius_m: f32,
    /// Torso test point as a fraction of actor height above the feet.
    pub torso_height_frac: f32,
    /// Miss tracers terminate at this range.
    pub far_clip_m: f32,
    pub tracer_ttl_s: f32,
    /// Per-attacker damage to the player per second while in contact range.
    pub contact_dps: f32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            base_damage: 35.0,
            fire_interval_s: 0.14,
            magazine: 12,
            reload_s: 1.2,
            hit_radius_m: 0.9,
            torso_height_frac: 0.55,
            far_clip_m: 120.0,
            tracer_ttl_s: 0.1,
            contact_dps: 14.0,
        }
    }
}

fn clamp(mut cfg: CombatConfig) -> CombatConfig {
    cfg.base_damage = cfg.base_damage.max(1.0);
    cfg.fire_interval_s = cfg.fire_interval_s.max(0.05);
    cfg.magazine = cfg.magazine.clamp(1, 200);
    cfg.reload_s = cfg.reload_s.max(0.1);
    cfg.hit_radius_m = cfg.hit_radius_m.clamp(0.1, 3.0);
    cfg.torso_height_frac = cfg.torso_height_frac.clamp(0.1, 1.0);
    cfg.far_clip_m = cfg.far_clip_m.clamp(10.0, 1000.0);
    cfg.tracer_ttl_s = cfg.tracer_ttl_s.clamp(0.01, 1.0);
    cfg.contact_dps = cfg.contact_dps.max(0.0);
    cfg
}

pub fn load_default() -> Result<CombatConfig> {
    let path = data_root().join("config/combat.toml");
    if !path.is_file() {
        return Ok(CombatConfig::default());
    }
    let txt =
        std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let parsed: CombatConfig = toml::from_str(&txt).context("parse combat TOML")?;
    Ok(clamp(parsed))
}
