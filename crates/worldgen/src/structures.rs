//! Chunk structure generation: settlement roll, a shop with ringed buildings,
//! wells, and natural scatter. Buildings decompose into per-part obstacles
//! (wall runs with a door gap, a roof, a counter) so collision and eviction
//! work on uniform records. Same (chunk, seed) always yields the identical
//! list.

use crate::chunk::{ChunkCoord, CHUNK_SIZE};
use crate::height::{height_at, normal_at, road_influence_at};
use crate::noise::SeedStream;
use crate::obstacle::{obstacle_id, Footprint, Obstacle, ObstacleKind};
use crate::rotate_xz;
use glam::{Vec2, Vec3};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

const SETTLEMENT_CHANCE: f32 = 0.12;
const SETTLEMENT_CHANCE_NEAR_ROAD: f32 = 0.30;
/// Placements at road influence above this are skipped.
const ROAD_SKIP: f32 = 0.25;
const WALL_HALF_T: f32 = 0.15;
const DOOR_HALF_W: f32 = 0.6;

#[derive(Clone, Copy)]
struct BuildingDims {
    w: f32,
    d: f32,
    wall_h: f32,
}

const BUILDING_ARCHETYPES: [BuildingDims; 3] = [
    // cabin
    BuildingDims { w: 6.0, d: 5.0, wall_h: 2.6 },
    // hall
    BuildingDims { w: 9.0, d: 6.0, wall_h: 3.0 },
    // stall
    BuildingDims { w: 4.0, d: 3.0, wall_h: 2.2 },
];

struct ChunkEmit {
    chunk: ChunkCoord,
    out: Vec<Obstacle>,
}

impl ChunkEmit {
    fn push(
        &mut self,
        kind: ObstacleKind,
        pos: Vec3,
        yaw: f32,
        scale: Vec3,
        footprint: Option<Footprint>,
    ) {
        let id = obstacle_id(self.chunk, kind, self.out.len() as u32);
        self.out.push(Obstacle {
            id,
            chunk: self.chunk,
            kind,
            pos,
            yaw,
            scale,
            footprint,
        });
    }
}

/// Generate every obstacle owned by `chunk`. Pure in (chunk, seed).
#[must_use]
pub fn generate_chunk(chunk: ChunkCoord, seed: u32) -> Vec<Obstacle> {
    let mut stream = SeedStream::new(chunk_seed(chunk, seed));
    let mut emit = ChunkEmit {
        chunk,
        out: Vec::new(),
    };
    let center = chunk.center();
    let near_road = road_influence_at(center.x, center.y, seed) > 0.1;
    let chance = if near_road {
        SETTLEMENT_CHANCE_NEAR_ROAD
    } else {
        SETTLEMENT_CHANCE
    };
    let settlement = stream.chance(chance);
    if settlement {
        place_settlement(&mut emit, &mut stream, seed);
    }
    scatter_natural(&mut emit, &mut stream, seed, settlement);
    emit.out
}

/// Chunk-local seed: world seed spread by large odd multipliers per axis,
/// XOR-folded so adjacent chunks decorrelate.
fn chunk_seed(chunk: ChunkCoord, seed: u32) -> u64 {
    (u64::from(seed)
        .wrapping_add((chunk.cx as u64).wrapping_mul(374_761_393))
        .wrapping_add((chunk.cz as u64).wrapping_mul(668_265_263)))
        ^ 0x9E37_79B9_7F4A_7C15
}

/// Structure anchors stay inside the owning chunk. The margin covers the
/// widest part offset (hall walls, the shop counter), so every emitted
/// obstacle lands in the chunk whose bucket will answer collision queries
/// for it.
fn clamp_into_chunk(chunk: ChunkCoord, at: Vec2, margin: f32) -> Vec2 {
    let lo = chunk.min_corner() + Vec2::splat(margin);
    let hi = chunk.min_corner() + Vec2::splat(CHUNK_SIZE - margin);
    at.clamp(lo, hi)
}

fn place_settlement(emit: &mut ChunkEmit, stream: &mut SeedStream, seed: u32) {
    let center = emit.chunk.center()
        + Vec2::new(stream.range(-5.0, 5.0), stream.range(-5.0, 5.0));

    // Shop anchors the settlement; nudge it until it sits off-road.
    let shop_yaw = stream.signed_unit() * PI;
    let mut shop_at = center;
    for attempt in 1..=8 {
        if road_influence_at(shop_at.x, shop_at.y, seed) < ROAD_SKIP {
            break;
        }
        let a = stream.unit() * TAU;
        shop_at = center + rotate_xz(Vec2::new(attempt as f32 * 3.0, 0.0), a);
    }
    let shop_at = clamp_into_chunk(emit.chunk, shop_at, 6.0);
    push_shop(emit, stream, seed, shop_at, shop_yaw);

    // Ring of buildings at increasing angle and radius, facing the shop.
    let count = 2 + stream.pick(3);
    let mut angle = stream.unit() * TAU;
    let mut radius = 9.0;
    for _ in 0..count {
        angle += TAU / count as f32 + stream.signed_unit() * 0.4;
        radius += 3.5;
        let at = clamp_into_chunk(
            emit.chunk,
            shop_at + Vec2::new(angle.cos(), angle.sin()) * radius,
            6.0,
        );
        let dims = BUILDING_ARCHETYPES[stream.pick(BUILDING_ARCHETYPES.len() as u32) as usize];
        if road_influence_at(at.x, at.y, seed) > 0.2 {
            continue;
        }
        push_building(emit, seed, at, angle + FRAC_PI_2, dims);
    }

    if stream.chance(0.5) {
        let a = stream.unit() * TAU;
        let at = clamp_into_chunk(
            emit.chunk,
            shop_at + Vec2::new(a.cos(), a.sin()) * stream.range(4.0, 7.0),
            2.0,
        );
        if road_influence_at(at.x, at.y, seed) <= ROAD_SKIP {
            let y = height_at(at.x, at.y, seed);
            emit.push(
                ObstacleKind::Well,
                Vec3::new(at.x, y, at.y),
                0.0,
                Vec3::ONE,
                Some(Footprint::Circle { radius: 1.0 }),
            );
        }
    }
}

fn push_shop(emit: &mut ChunkEmit, stream: &mut SeedStream, seed: u32, at: Vec2, yaw: f32) {
    let dims = BuildingDims {
        w: 7.0,
        d: 5.5,
        wall_h: 2.8,
    };
    push_building(emit, seed, at, yaw, dims);
    // Counter just outside the door, slightly skewed.
    let counter_yaw = yaw + stream.signed_unit() * 0.1;
    let world = at + rotate_xz(Vec2::new(0.0, dims.d * 0.5 + 1.0), yaw);
    let y = height_at(world.x, world.y, seed);
    emit.push(
        ObstacleKind::ShopCounter,
        Vec3::new(world.x, y, world.y),
        counter_yaw,
        Vec3::new(1.8, 1.0, 0.6),
        Some(Footprint::Rect {
            half_w: 0.9,
            half_d: 0.3,
        }),
    );
}

/// Four wall runs (front run split around a door gap) plus a roof record.
/// Walls sample terrain at their own world position; the roof sits on top of
/// the wall height at the building center.
fn push_building(emit: &mut ChunkEmit, seed: u32, at: Vec2, yaw: f32, dims: BuildingDims) {
    let hw = dims.w * 0.5;
    let hd = dims.d * 0.5;
    let seg_half = (hw - DOOR_HALF_W) * 0.5;
    let door_off = DOOR_HALF_W + seg_half;
    let runs = [
        // rear
        (Vec2::new(0.0, -hd), hw, WALL_HALF_T),
        // sides
        (Vec2::new(-hw, 0.0), WALL_HALF_T, hd),
        (Vec2::new(hw, 0.0), WALL_HALF_T, hd),
        // front, split around the door
        (Vec2::new(-door_off, hd), seg_half, WALL_HALF_T),
        (Vec2::new(door_off, hd), seg_half, WALL_HALF_T),
    ];
    for (local, half_w, half_d) in runs {
        let world = at + rotate_xz(local, yaw);
        let y = height_at(world.x, world.y, seed);
        emit.push(
            ObstacleKind::Wall,
            Vec3::new(world.x, y, world.y),
            yaw,
            Vec3::new(half_w * 2.0, dims.wall_h, half_d * 2.0),
            Some(Footprint::Rect { half_w, half_d }),
        );
    }
    let ground = height_at(at.x, at.y, seed);
    emit.push(
        ObstacleKind::Roof,
        Vec3::new(at.x, ground + dims.wall_h, at.y),
        yaw,
        Vec3::new(dims.w + 0.6, 0.3, dims.d + 0.6),
        None,
    );
}

fn scatter_natural(emit: &mut ChunkEmit, stream: &mut SeedStream, seed: u32, settlement: bool) {
    let corner = emit.chunk.min_corner();
    let trees = if settlement {
        2 + stream.pick(3)
    } else {
        6 + stream.pick(8)
    };
    for _ in 0..trees {
        let at = corner + Vec2::new(stream.unit(), stream.unit()) * CHUNK_SIZE;
        if road_influence_at(at.x, at.y, seed) > ROAD_SKIP {
            continue;
        }
        if normal_at(at.x, at.y, seed).y < 0.8 {
            // too steep
            continue;
        }
        let yaw = stream.signed_unit() * PI;
        let s = stream.range(0.8, 1.3);
        let y = height_at(at.x, at.y, seed);
        emit.push(
            ObstacleKind::Tree,
            Vec3::new(at.x, y, at.y),
            yaw,
            Vec3::new(0.8 * s, 2.4 * s, 0.8 * s),
            Some(Footprint::Circle { radius: 0.45 * s }),
        );
    }

    let rocks = stream.pick(3);
    for _ in 0..rocks {
        let at = corner + Vec2::new(stream.unit(), stream.unit()) * CHUNK_SIZE;
        if road_influence_at(at.x, at.y, seed) > ROAD_SKIP {
            continue;
        }
        let yaw = stream.signed_unit() * PI;
        let s = stream.range(0.6, 1.4);
        let y = height_at(at.x, at.y, seed);
        emit.push(
            ObstacleKind::Rock,
            Vec3::new(at.x, y, at.y),
            yaw,
            Vec3::new(s, 0.7 * s, s),
            Some(Footprint::Circle { radius: 0.55 * s }),
        );
    }

    if !settlement && stream.chance(0.08) {
        let count = 1 + stream.pick(2);
        for _ in 0..count {
            let at = corner + Vec2::new(stream.unit(), stream.unit()) * CHUNK_SIZE;
            if road_influence_at(at.x, at.y, seed) > ROAD_SKIP {
                continue;
            }
            let yaw = stream.signed_unit() * PI;
            let half_w = stream.range(1.0, 1.8);
            let h = stream.range(0.8, 1.6);
            let y = height_at(at.x, at.y, seed);
            emit.push(
                ObstacleKind::Ruin,
                Vec3::new(at.x, y, at.y),
                yaw,
                Vec3::new(half_w * 2.0, h, 0.6),
                Some(Footprint::Rect { half_w, half_d: 0.3 }),
            );
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn chunk_seed_decorrelates_neighbors() {
        let a = chunk_seed(ChunkCoord::new(0, 0), 7);
        let b = chunk_seed(ChunkCoord::new(1, 0), 7);
        let c = chunk_seed(ChunkCoord::new(0, 1), 7);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn ids_are_unique_within_a_chunk() {
        let list = generate_chunk(ChunkCoord::new(3, -2), 99);
        let ids: HashSet<&str> = list.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids.len(), list.len());
    }

    #[test]
    fn every_obstacle_owned_by_its_chunk() {
        let chunk = ChunkCoord::new(-4, 11);
        for ob in generate_chunk(chunk, 5) {
            assert_eq!(ob.chunk, chunk);
            assert!(ob.id.starts_with("-4:11:"));
        }
    }

    #[test]
    fn structures_stay_inside_their_chunk() {
        for cx in -6..6 {
            for cz in -6..6 {
                let chunk = ChunkCoord::new(cx, cz);
                let lo = chunk.min_corner();
                for ob in generate_chunk(chunk, 7) {
                    assert!(
                        ob.pos.x >= lo.x && ob.pos.x <= lo.x + CHUNK_SIZE,
                        "{} outside on x",
                        ob.id
                    );
                    assert!(
                        ob.pos.z >= lo.y && ob.pos.z <= lo.y + CHUNK_SIZE,
                        "{} outside on z",
                        ob.id
                    );
                }
            }
        }
    }

    #[test]
    fn placements_sit_on_terrain() {
        let chunk = ChunkCoord::new(2, 2);
        for ob in generate_chunk(chunk, 31) {
            if ob.kind == ObstacleKind::Roof {
                continue;
            }
            let ground = height_at(ob.pos.x, ob.pos.z, 31);
            assert!((ob.pos.y - ground).abs() < 1e-5, "{} floats", ob.id);
        }
    }
}
