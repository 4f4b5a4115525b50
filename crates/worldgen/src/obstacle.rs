//! Placed static world objects. Obstacles are immutable value objects owned
//! by the chunk that generated them.

use crate::chunk::ChunkCoord;
use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Tree,
    Rock,
    Ruin,
    Well,
    Wall,
    Roof,
    ShopCounter,
}

impl ObstacleKind {
    /// Stable label used in obstacle ids and external tooling.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Rock => "rock",
            Self::Ruin => "ruin",
            Self::Well => "well",
            Self::Wall => "wall",
            Self::Roof => "roof",
            Self::ShopCounter => "shop-counter",
        }
    }
}

/// Planar collision footprint on the ground. Walls and counters use oriented
/// rectangles (rotated by the obstacle's yaw); natural features use circles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Footprint {
    Circle { radius: f32 },
    Rect { half_w: f32, half_d: f32 },
}

/// One placed object. `chunk` is the owning chunk; the id embeds the same
/// coordinate (`"{cx}:{cz}:{kind}:{index}"`) as the stable external identity.
/// Sub-parts that sit above the ground plane (roofs) carry no footprint.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub id: String,
    pub chunk: ChunkCoord,
    pub kind: ObstacleKind,
    pub pos: Vec3,
    pub yaw: f32,
    pub scale: Vec3,
    pub footprint: Option<Footprint>,
}

/// Id format invariant: the owning chunk is always recoverable from the
/// first two `:`-separated fields.
#[must_use]
pub fn obstacle_id(chunk: ChunkCoord, kind: ObstacleKind, index: u32) -> String {
    format!("{}:{}:{}:{}", chunk.cx, chunk.cz, kind.label(), index)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn id_embeds_owning_chunk() {
        let id = obstacle_id(ChunkCoord::new(-3, 12), ObstacleKind::ShopCounter, 4);
        assert_eq!(id, "-3:12:shop-counter:4");
        let mut parts = id.split(':');
        let cx: i32 = parts.next().unwrap().parse().unwrap();
        let cz: i32 = parts.next().unwrap().parse().unwrap();
        assert_eq!(ChunkCoord::new(cx, cz), ChunkCoord::new(-3, 12));
    }
}
