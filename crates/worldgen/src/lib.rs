//! Deterministic world generation: height field, roads, and chunked structure
//! placement. Everything here is a pure function of (coordinates, seed) so a
//! chunk regenerated after eviction reproduces bit-identical content.

pub mod chunk;
pub mod collision;
pub mod height;
pub mod noise;
pub mod obstacle;
pub mod structures;

pub use chunk::{ChunkCoord, CHUNK_SIZE};
pub use height::{height_at, normal_at, road_influence_at};
pub use obstacle::{Footprint, Obstacle, ObstacleKind};
pub use structures::generate_chunk;

use glam::Vec2;

/// Rotate a planar XZ vector by `yaw` radians (counter-clockwise seen from +Y).
#[must_use]
pub fn rotate_xz(v: Vec2, yaw: f32) -> Vec2 {
    let (s, c) = yaw.sin_cos();
    Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}
