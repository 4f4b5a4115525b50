//! Actor archetype base stats. Compiled defaults keyed by the closed
//! `Archetype` enum, overridable per full record from
//! `data/config/archetypes.toml`.

use crate::data_root;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;

/// Closed set of actor archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    /// Weak and fast.
    Rusher,
    /// Balanced stats.
    Marauder,
    /// Heavy tank.
    Bulwark,
    /// Neutral civilian; flees, never attacks.
    Settler,
}

impl Archetype {
    pub const ALL: [Archetype; 4] = [
        Archetype::Rusher,
        Archetype::Marauder,
        Archetype::Bulwark,
        Archetype::Settler,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Rusher => "rusher",
            Self::Marauder => "marauder",
            Self::Bulwark => "bulwark",
            Self::Settler => "settler",
        }
    }

    #[must_use]
    pub fn is_hostile(self) -> bool {
        !matches!(self, Self::Settler)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ArchetypeStats {
    pub max_hp: i32,
    pub move_speed_mps: f32,
    pub radius_m: f32,
    pub score_value: u32,
    pub currency_reward: u32,
    /// Visual scale; also scales attack range and hit radius.
    pub scale: f32,
}

fn defaults(kind: Archetype) -> ArchetypeStats {
    match kind {
        Archetype::Rusher => ArchetypeStats {
            max_hp: 40,
            move_speed_mps: 5.2,
            radius_m: 0.45,
            score_value: 100,
            currency_reward: 15,
            scale: 0.9,
        },
        Archetype::Marauder => ArchetypeStats {
            max_hp: 70,
            move_speed_mps: 3.6,
            radius_m: 0.5,
            score_value: 150,
            currency_reward: 25,
            scale: 1.0,
        },
        Archetype::Bulwark => ArchetypeStats {
            max_hp: 160,
            move_speed_mps: 2.2,
            radius_m: 0.65,
            score_value: 300,
            currency_reward: 60,
            scale: 1.3,
        },
        Archetype::Settler => ArchetypeStats {
            max_hp: 50,
            move_speed_mps: 2.8,
            radius_m: 0.5,
            score_value: 0,
            currency_reward: 0,
            scale: 1.0,
        },
    }
}

fn clamp(mut s: ArchetypeStats) -> ArchetypeStats {
    s.max_hp = s.max_hp.max(1);
    s.move_speed_mps = s.move_speed_mps.clamp(0.1, 20.0);
    s.radius_m = s.radius_m.clamp(0.1, 3.0);
    s.scale = s.scale.clamp(0.5, 2.5);
    s
}

/// Resolved stats for every archetype.
#[derive(Debug, Clone)]
pub struct ArchetypeDb {
    by_kind: [ArchetypeStats; 4],
}

impl Default for ArchetypeDb {
    fn default() -> Self {
        Self {
            by_kind: Archetype::ALL.map(defaults),
        }
    }
}

impl ArchetypeDb {
    #[must_use]
    pub fn stats(&self, kind: Archetype) -> ArchetypeStats {
        self.by_kind[kind as usize]
    }

    /// Load defaults, overlaid with any full records from
    /// `data/config/archetypes.toml`.
    pub fn load_default() -> Result<Self> {
        let mut db = Self::default();
        let path = data_root().join("config/archetypes.toml");
        if !path.is_file() {
            return Ok(db);
        }
        let txt = std::fs::read_to_string(&path)
            .with_context(|| format!("read {}", path.display()))?;
        let parsed: HashMap<String, ArchetypeStats> =
            toml::from_str(&txt).context("parse archetypes TOML")?;
        for kind in Archetype::ALL {
            if let Some(over) = parsed.get(kind.name()) {
                db.by_kind[kind as usize] = clamp(*over);
            }
        }
        for key in parsed.keys() {
            if !Archetype::ALL.iter().any(|k| k.name() == key) {
                log::warn!("archetypes: unknown key '{key}' ignored");
            }
        }
        Ok(db)
    }
}
