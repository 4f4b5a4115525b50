//! data_runtime: tuning schemas and loaders.
//!
//! TOML files under the workspace `data/config/` directory override compiled
//! defaults; a missing file falls back silently so tests and tools run from
//! any crate directory.

pub mod archetypes;
pub mod configs;

pub use archetypes::{Archetype, ArchetypeDb, ArchetypeStats};
pub use configs::RuntimeConfigs;

pub(crate) fn data_root() -> std::path::PathBuf {
    // Prefer the top-level workspace `data/` so tests can run from any crate.
    let here = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() {
        ws
    } else {
        here.join("data")
    }
}
