//! Read-only frame snapshot handed to the render/HUD layer after each step.

use glam::Vec3;
use worldgen::Obstacle;

use crate::actor::Actor;
use crate::systems::combat::Tracer;

/// HUD scalars, copied out by value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudStatus {
    pub health: f32,
    pub ammo: u32,
    pub reloading: bool,
    pub score: u32,
    pub currency: u32,
    pub wave: u32,
    pub damage_multiplier: f32,
    pub active: bool,
}

/// Borrowed view of the world after a step. Valid only until the next
/// `Session::step`; renderers copy what they need and let go.
pub struct FrameSnapshot<'a> {
    pub player_pos: Vec3,
    pub player_yaw: f32,
    pub actors: &'a [Actor],
    pub obstacles: Vec<&'a Obstacle>,
    pub tracers: &'a [Tracer],
    pub hud: HudStatus,
}
