//! Player movement tuning loaded from `data/config/player.toml`.

use crate::data_root;
use anyhow::{Context, Result};

#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
pub struct PlayerConfig {
    pub move_speed_mps: f32,
    pub radius_m: f32,
    /// Camera eye offset above the feet; the view layer adds this to the
    /// terrain-snapped position.
    pub eye_height_m: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed_mps: 6.0,
            radius_m: 0.5,
            eye_height_m: 1.7,
        }
    }
}

fn clamp(mut cfg: PlayerConfig) -> PlayerConfig {
    cfg.move_speed_mps = cfg.move_speed_mps.clamp(0.5, 30.0);
    cfg.radius_m = cfg.radius_m.clamp(0.1, 2.0);
    cfg.eye_height_m = cfg.eye_height_m.clamp(0.5, 3.0);
    cfg
}

pub fn load_default() -> Result<PlayerConfig> {
    let path = data_root().join("config/player.toml");
    if !path.is_file() {
        return Ok(PlayerConfig::default());
    }
    let txt =
        std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let parsed: PlayerConfig = toml::from_str(&txt).context("parse player TOML")?;
    Ok(clamp(parsed))
}
