//! Spawn scheduler and actor-lifecycle tuning loaded from
//! `data/config/spawning.toml`.

use crate::data_root;
use anyhow::{Context, Result};

#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
pub struct SpawnWeights {
    pub rusher: u32,
    pub marauder: u32,
    pub bulwark: u32,
    pub settler: u32,
}

impl SpawnWeights {
    #[must_use]
    pub fn total(&self) -> u32 {
        self.rusher + self.marauder + self.bulwark + self.settler
    }
}

impl Default for SpawnWeights {
    fn default() -> Self {
        Self {
            rusher: 45,
            marauder: 35,
            bulwark: 12,
            settler: 8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
pub struct SpawnConfig {
    /// Seconds between spawns at wave 1; scaled down each wave.
    pub interval_s: f32,
    pub min_interval_s: f32,
    pub wave_interval_s: f32,
    /// Spawn interval multiplier applied at each wave start.
    pub wave_interval_scale: f32,
    /// Spawn ring around the player.
    pub min_radius_m: f32,
    pub max_radius_m: f32,
    /// Live actor cap; spawning pauses at the cap.
    pub max_live: usize,
    /// Seconds a dead actor stays in the live list before despawn.
    pub despawn_s: f32,
    pub weights: SpawnWeights,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            interval_s: 4.0,
            min_interval_s: 1.5,
            wave_interval_s: 30.0,
            wave_interval_scale: 0.88,
            min_radius_m: 30.0,
            max_radius_m: 50.0,
            max_live: 24,
            despawn_s: 3.0,
            weights: SpawnWeights::default(),
        }
    }
}

fn clamp(mut cfg: SpawnConfig) -> SpawnConfig {
    cfg.interval_s = cfg.interval_s.max(0.25);
    cfg.min_interval_s = cfg.min_interval_s.clamp(0.25, cfg.interval_s);
    cfg.wave_interval_s = cfg.wave_interval_s.max(5.0);
    cfg.wave_interval_scale = cfg.wave_interval_scale.clamp(0.5, 1.0);
    cfg.min_radius_m = cfg.min_radius_m.max(5.0);
    if cfg.max_radius_m < cfg.min_radius_m {
        cfg.max_radius_m = cfg.min_radius_m;
    }
    cfg.max_live = cfg.max_live.clamp(1, 256);
    cfg.despawn_s = cfg.despawn_s.clamp(0.1, 60.0);
    if cfg.weights.total() == 0 {
        log::warn!("spawning: all archetype weights zero (using defaults)");
        cfg.weights = SpawnWeights::default();
    }
    cfg
}

pub fn load_default() -> Result<SpawnConfig> {
    let path = data_root().join("config/spawning.toml");
    if !path.is_file() {
        return Ok(SpawnConfig::default());
    }
    let txt =
        std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let parsed: SpawnConfig = toml::from_str(&txt).context("parse spawning TOML")?;
    Ok(clamp(parsed))
}
