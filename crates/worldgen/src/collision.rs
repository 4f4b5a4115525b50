//! Planar collision of a moving point against obstacle footprints. Height is
//! handled by terrain snapping, never here.

use crate::obstacle::{Footprint, Obstacle};
use crate::rotate_xz;
use glam::Vec2;

/// Axis-aligned broad-phase cutoff. Obstacles farther than this on either
/// axis cannot block a query point; also bounds per-query cost.
pub const BROAD_CUTOFF: f32 = 18.0;

/// True if a disc of `actor_radius` at `p` overlaps the obstacle footprint.
#[must_use]
pub fn footprint_blocks(ob: &Obstacle, p: Vec2, actor_radius: f32) -> bool {
    let Some(footprint) = ob.footprint else {
        return false;
    };
    let d = p - Vec2::new(ob.pos.x, ob.pos.z);
    match footprint {
        Footprint::Circle { radius } => {
            let r = radius + actor_radius;
            d.length_squared() < r * r
        }
        Footprint::Rect { half_w, half_d } => {
            // Into the obstacle's local frame, then an inflated AABB test.
            let local = rotate_xz(d, -ob.yaw);
            local.x.abs() < half_w + actor_radius && local.y.abs() < half_d + actor_radius
        }
    }
}

/// True if any obstacle blocks a disc of `actor_radius` at `p`. Shared by
/// player and actor movement.
pub fn is_blocked<'a, I>(obstacles: I, p: Vec2, actor_radius: f32) -> bool
where
    I: IntoIterator<Item = &'a Obstacle>,
{
    for ob in obstacles {
        if (ob.pos.x - p.x).abs() > BROAD_CUTOFF || (ob.pos.z - p.y).abs() > BROAD_CUTOFF {
            continue;
        }
        if footprint_blocks(ob, p, actor_radius) {
            return true;
        }
    }
    false
}
