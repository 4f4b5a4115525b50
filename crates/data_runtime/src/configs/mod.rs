//! Per-concern tuning configs, each loaded from `data/config/<name>.toml`
//! with compiled defaults and post-load clamping.

pub mod combat;
pub mod player;
pub mod shop;
pub mod spawning;
pub mod streaming;

pub use combat::CombatConfig;
pub use player::PlayerConfig;
pub use shop::ShopConfig;
pub use spawning::{SpawnConfig, SpawnWeights};
pub use streaming::StreamingConfig;

use anyhow::Result;

/// Everything the simulation session needs, loaded in one call.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfigs {
    pub combat: CombatConfig,
    pub player: PlayerConfig,
    pub shop: ShopConfig,
    pub spawning: SpawnConfig,
    pub streaming: StreamingConfig,
}

impl RuntimeConfigs {
    pub fn load_default() -> Result<Self> {
        Ok(Self {
            combat: combat::load_default()?,
            player: player::load_default()?,
            shop: shop::load_default()?,
            spawning: spawning::load_default()?,
            streaming: streaming::load_default()?,
        })
    }
}
