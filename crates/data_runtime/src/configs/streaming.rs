//! Chunk streaming tuning loaded from `data/config/streaming.toml`.

use crate::data_root;
use anyhow::{Context, Result};

#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
pub struct StreamingConfig {
    /// Chebyshev chunk radius kept loaded around the player; eviction uses
    /// this plus one.
    pub render_distance: i32,
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self { render_distance: 2 }
    }
}

fn clamp(mut cfg: StreamingConfig) -> StreamingConfig {
    cfg.render_distance = cfg.render_distance.clamp(1, 8);
    cfg
}

pub fn load_default() -> Result<StreamingConfig> {
    let path = data_root().join("config/streaming.toml");
    if !path.is_file() {
        return Ok(StreamingConfig::default());
    }
    let txt =
        std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let parsed: StreamingConfig = toml::from_str(&txt).context("parse streaming TOML")?;
    Ok(clamp(parsed))
}
