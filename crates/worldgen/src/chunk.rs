//! Chunk coordinates: the unit of streaming load/unload.

use glam::Vec2;

/// Edge length of one square chunk in world units.
pub const CHUNK_SIZE: f32 = 40.0;

/// Integer chunk coordinate. World position maps here by floor-division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cz: i32,
}

impl ChunkCoord {
    #[must_use]
    pub fn new(cx: i32, cz: i32) -> Self {
        Self { cx, cz }
    }

    /// Chunk containing the world position (x, z).
    #[must_use]
    pub fn from_world(x: f32, z: f32) -> Self {
        Self {
            cx: (x / CHUNK_SIZE).floor() as i32,
            cz: (z / CHUNK_SIZE).floor() as i32,
        }
    }

    /// World position of the chunk's minimum corner.
    #[must_use]
    pub fn min_corner(self) -> Vec2 {
        Vec2::new(self.cx as f32 * CHUNK_SIZE, self.cz as f32 * CHUNK_SIZE)
    }

    /// World position of the chunk center.
    #[must_use]
    pub fn center(self) -> Vec2 {
        self.min_corner() + Vec2::splat(CHUNK_SIZE * 0.5)
    }

    /// Chebyshev (grid ring) distance to another chunk.
    #[must_use]
    pub fn chebyshev(self, other: Self) -> i32 {
        (self.cx - other.cx).abs().max((self.cz - other.cz).abs())
    }
}
