//! Shop pricing loaded from `data/config/shop.toml`.

use crate::data_root;
use anyhow::{Context, Result};

#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
pub struct ShopConfig {
    /// Maximum distance from a shop counter at which purchases work.
    pub interact_range_m: f32,
    /// First damage upgrade price; each further upgrade adds the same again.
    pub damage_upgrade_base_cost: u32,
    /// Damage multiplier added per upgrade.
    pub damage_upgrade_step: f32,
    pub medkit_cost: u32,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            interact_range_m: 2.5,
            damage_upgrade_base_cost: 50,
            damage_upgrade_step: 0.25,
            medkit_cost: 30,
        }
    }
}

fn clamp(mut cfg: ShopConfig) -> ShopConfig {
    cfg.interact_range_m = cfg.interact_range_m.clamp(1.0, 20.0);
    cfg.damage_upgrade_base_cost = cfg.damage_upgrade_base_cost.max(1);
    cfg.damage_upgrade_step = cfg.damage_upgrade_step.clamp(0.05, 2.0);
    cfg.medkit_cost = cfg.medkit_cost.max(1);
    cfg
}

pub fn load_default() -> Result<ShopConfig> {
    let path = data_root().join("config/shop.toml");
    if !path.is_file() {
        return Ok(ShopConfig::default());
    }
    let txt =
        std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let parsed: ShopConfig = toml::from_str(&txt).context("parse shop TOML")?;
    Ok(clamp(parsed))
}
