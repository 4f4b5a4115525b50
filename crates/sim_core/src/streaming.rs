//! Chunk streaming around the player.
//!
//! Chunks within the render distance (Chebyshev) are generated on demand and
//! kept in per-chunk obstacle buckets; chunks farther than render distance
//! plus one are evicted wholesale. The one-chunk hysteresis stops load/evict
//! flapping at a boundary.

use std::collections::{HashMap, HashSet};

use glam::Vec2;
use metrics::counter;
use worldgen::{collision, generate_chunk, ChunkCoord, Obstacle, ObstacleKind};

/// Chunks loaded and evicted by one streaming update.
#[derive(Debug, Default, Clone, Copy)]
pub struct StreamDelta {
    pub loaded: usize,
    pub evicted: usize,
}

pub struct ChunkStream {
    seed: u32,
    render_distance: i32,
    loaded: HashSet<ChunkCoord>,
    buckets: HashMap<ChunkCoord, Vec<Obstacle>>,
}

impl ChunkStream {
    #[must_use]
    pub fn new(seed: u32, render_distance: i32) -> Self {
        Self {
            seed,
            render_distance: render_distance.max(1),
            loaded: HashSet::new(),
            buckets: HashMap::new(),
        }
    }

    /// Load newly visible chunks and evict far ones.
    ///
    /// Zero-obstacle chunks stay tracked in the loaded set (with an empty
    /// bucket) so they are not regenerated every frame.
    pub fn update(&mut self, player: Vec2) -> StreamDelta {
        let center = ChunkCoord::from_world(player.x, player.y);
        let mut delta = StreamDelta::default();
        let rd = self.render_distance;
        for dx in -rd..=rd {
            for dz in -rd..=rd {
                let coord = ChunkCoord::new(center.cx + dx, center.cz + dz);
                if self.loaded.insert(coord) {
                    self.buckets.insert(coord, Self::generate(coord, self.seed));
                    delta.loaded += 1;
                }
            }
        }
        let keep = rd + 1;
        let before = self.loaded.len();
        self.loaded.retain(|c| c.chebyshev(center) <= keep);
        self.buckets.retain(|c, _| c.chebyshev(center) <= keep);
        delta.evicted = before - self.loaded.len();
        if delta.loaded > 0 {
            counter!("stream.chunks_loaded").increment(delta.loaded as u64);
        }
        if delta.evicted > 0 {
            counter!("stream.chunks_evicted").increment(delta.evicted as u64);
        }
        delta
    }

    fn generate(coord: ChunkCoord, seed: u32) -> Vec<Obstacle> {
        generate_chunk(coord, seed)
            .into_iter()
            .filter(|ob| {
                if ob.chunk == coord {
                    true
                } else {
                    // Mis-bucketed obstacles would leak on eviction; drop them.
                    log::warn!("obstacle {} tagged for {:?}, dropped", ob.id, ob.chunk);
                    false
                }
            })
            .collect()
    }

    /// Disc-vs-obstacle query against the 3x3 chunk neighborhood of `p`.
    /// The neighborhood is sufficient because chunks are wider than the
    /// collision broad-phase cutoff.
    #[must_use]
    pub fn is_blocked(&self, p: Vec2, radius: f32) -> bool {
        let center = ChunkCoord::from_world(p.x, p.y);
        for dx in -1..=1 {
            for dz in -1..=1 {
                let key = ChunkCoord::new(center.cx + dx, center.cz + dz);
                if let Some(bucket) = self.buckets.get(&key) {
                    if collision::is_blocked(bucket, p, radius) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Every obstacle currently resident, in no particular order.
    pub fn obstacles(&self) -> impl Iterator<Item = &Obstacle> {
        self.buckets.values().flatten()
    }

    /// Nearest shop counter within `range` meters of `p`.
    #[must_use]
    pub fn shop_counter_near(&self, p: Vec2, range: f32) -> Option<&Obstacle> {
        let mut best: Option<(f32, &Obstacle)> = None;
        for ob in self.obstacles() {
            if ob.kind != ObstacleKind::ShopCounter {
                continue;
            }
            let d2 = Vec2::new(ob.pos.x, ob.pos.z).distance_squared(p);
            if d2 <= range * range && best.map_or(true, |(bd, _)| d2 < bd) {
                best = Some((d2, ob));
            }
        }
        best.map(|(_, ob)| ob)
    }

    pub fn loaded_chunks(&self) -> impl Iterator<Item = ChunkCoord> + '_ {
        self.loaded.iter().copied()
    }

    #[must_use]
    pub fn is_loaded(&self, coord: ChunkCoord) -> bool {
        self.loaded.contains(&coord)
    }

    #[must_use]
    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }

    /// Invariant check used by tests: every bucket belongs to a loaded chunk
    /// and every obstacle sits in the bucket of the chunk named in its id.
    #[must_use]
    pub fn buckets_consistent(&self) -> bool {
        self.loaded.iter().all(|c| self.buckets.contains_key(c))
            && self.buckets.keys().all(|c| self.loaded.contains(c))
            && self
                .buckets
                .iter()
                .all(|(c, bucket)| bucket.iter().all(|ob| ob.chunk == *c))
    }
}
