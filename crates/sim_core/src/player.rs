//! Player state and collision-checked, terrain-snapped movement.

use data_runtime::configs::PlayerConfig;
use glam::{Vec2, Vec3};
use worldgen::height_at;

pub const MAX_HEALTH: f32 = 100.0;

#[derive(Debug, Clone)]
pub struct PlayerState {
    /// Feet position; `pos.y` follows the terrain.
    pub pos: Vec3,
    /// Mirror of the view yaw after the last movement step.
    pub yaw: f32,
    pub health: f32,
    pub ammo: u32,
    pub score: u32,
    pub currency: u32,
    pub damage_multiplier: f32,
    pub damage_upgrades: u32,
    /// False before `Session::start` and after death; gates input-driven
    /// systems while streaming and ragdolls keep running.
    pub active: bool,
}

impl PlayerState {
    #[must_use]
    pub fn new(magazine: u32) -> Self {
        Self {
            pos: Vec3::ZERO,
            yaw: 0.0,
            health: MAX_HEALTH,
            ammo: magazine,
            score: 0,
            currency: 0,
            damage_multiplier: 1.0,
            damage_upgrades: 0,
            active: false,
        }
    }

    #[must_use]
    pub fn planar_pos(&self) -> Vec2 {
        Vec2::new(self.pos.x, self.pos.z)
    }
}

/// Camera-relative planar movement with whole-step rejection.
///
/// The step is taken only if the destination disc is clear; a blocked frame
/// leaves x/z untouched, so the player can never end a frame inside a
/// footprint. Height snaps to the terrain at whichever position survives.
pub fn update_movement(
    player: &mut PlayerState,
    axes: Vec2,
    view_yaw: f32,
    dt: f32,
    blocked: impl Fn(Vec2, f32) -> bool,
    cfg: &PlayerConfig,
    seed: u32,
) {
    let axes = axes.clamp_length_max(1.0);
    let fwd = Vec2::new(view_yaw.cos(), view_yaw.sin());
    let right = Vec2::new(fwd.y, -fwd.x);
    let step = (right * axes.x + fwd * axes.y) * cfg.move_speed_mps * dt;
    let here = player.planar_pos();
    let target = here + step;
    let dest = if step.length_squared() > 0.0 && !blocked(target, cfg.radius_m) {
        target
    } else {
        here
    };
    player.pos.x = dest.x;
    player.pos.z = dest.y;
    player.pos.y = height_at(dest.x, dest.y, seed);
    player.yaw = view_yaw;
}
