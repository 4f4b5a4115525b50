//! Mouselook rig: accumulates raw (dx, dy) counts into yaw/pitch with a
//! clamped pitch, and derives the forward vector the simulation aims with.

use glam::Vec3;

#[derive(Debug, Clone, Copy)]
pub struct LookConfig {
    /// Degrees of rotation per raw mouse count.
    pub sensitivity_deg_per_count: f32,
    pub invert_y: bool,
    pub min_pitch_deg: f32,
    pub max_pitch_deg: f32,
}

impl Default for LookConfig {
    fn default() -> Self {
        Self {
            sensitivity_deg_per_count: 0.15,
            invert_y: false,
            min_pitch_deg: -80.0,
            max_pitch_deg: 80.0,
        }
    }
}

/// Camera orientation owned by the view layer; the session reads it as
/// immutable input each frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct LookRig {
    pub yaw: f32,
    pub pitch: f32,
}

impl LookRig {
    pub fn apply_mouse_delta(&mut self, cfg: &LookConfig, dx: f32, dy: f32) {
        let to_rad = cfg.sensitivity_deg_per_count.to_radians();
        self.yaw += dx * to_rad;
        let sign = if cfg.invert_y { 1.0 } else { -1.0 };
        self.pitch = (self.pitch + dy * sign * to_rad).clamp(
            cfg.min_pitch_deg.to_radians(),
            cfg.max_pitch_deg.to_radians(),
        );
    }

    /// Unit view direction for the current yaw/pitch.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.pitch.cos() * self.yaw.cos(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.sin(),
        )
        .normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitch_is_clamped() {
        let cfg = LookConfig::default();
        let mut rig = LookRig::default();
        for _ in 0..10_000 {
            rig.apply_mouse_delta(&cfg, 0.0, -50.0);
        }
        assert!(rig.pitch <= cfg.max_pitch_deg.to_radians() + 1e-4);
        for _ in 0..10_000 {
            rig.apply_mouse_delta(&cfg, 0.0, 50.0);
        }
        assert!(rig.pitch >= cfg.min_pitch_deg.to_radians() - 1e-4);
    }

    #[test]
    fn yaw_accumulates_unclamped() {
        let cfg = LookConfig::default();
        let mut rig = LookRig::default();
        for _ in 0..10_000 {
            rig.apply_mouse_delta(&cfg, 10.0, 0.0);
        }
        assert!(rig.yaw > std::f32::consts::TAU);
    }

    #[test]
    fn forward_is_unit_length() {
        let mut rig = LookRig::default();
        rig.yaw = 1.3;
        rig.pitch = -0.7;
        assert!((rig.forward().length() - 1.0).abs() < 1e-5);
    }
}
