//! Terrain height field and road influence. Height is a shaped 3-octave
//! fractal; road bands flatten it toward a locally smoothed base so roads
//! read flat against the surrounding terrain.

use crate::noise::{fbm, value_noise};
use glam::Vec3;

const HEIGHT_FREQ: f32 = 0.012;
const HEIGHT_OCTAVES: u32 = 3;
// Power > 1 flattens lowlands and sharpens ridges.
const HEIGHT_POWER: f32 = 2.2;
/// Maximum terrain height in world units.
pub const HEIGHT_AMP: f32 = 14.0;

const ROAD_FREQ: f32 = 0.0035;
const ROAD_SEED_SALT: u32 = 0x524F_4144;
// Half-width of the road band around the 0.5 iso-level of the road noise.
const ROAD_BAND: f32 = 0.045;
const ROAD_SMOOTH_RADIUS: f32 = 10.0;
const ROAD_FLATTEN: f32 = 0.9;

/// Raw shaped terrain height, before road flattening.
fn base_height(x: f32, z: f32, seed: u32) -> f32 {
    let n = fbm(x * HEIGHT_FREQ, z * HEIGHT_FREQ, seed, HEIGHT_OCTAVES);
    let n01 = (n + 1.0) * 0.5;
    n01.powf(HEIGHT_POWER) * HEIGHT_AMP
}

/// Road influence in [0,1]; 1 at the band center, 0 off-road.
#[must_use]
pub fn road_influence_at(x: f32, z: f32, seed: u32) -> f32 {
    let n = value_noise(x * ROAD_FREQ, z * ROAD_FREQ, seed ^ ROAD_SEED_SALT);
    let n01 = (n + 1.0) * 0.5;
    (1.0 - (n01 - 0.5).abs() / ROAD_BAND).clamp(0.0, 1.0)
}

/// Terrain height at world (x, z). Pure: identical inputs always return the
/// identical value, so streaming and per-frame actor snapping never observe
/// jitter.
#[must_use]
pub fn height_at(x: f32, z: f32, seed: u32) -> f32 {
    let h = base_height(x, z, seed);
    let w = road_influence_at(x, z, seed) * ROAD_FLATTEN;
    if w <= 0.0 {
        return h;
    }
    // 5-tap local average of the raw field; blending toward it removes most
    // of the short-wavelength variation inside the band.
    let r = ROAD_SMOOTH_RADIUS;
    let smoothed = (h
        + base_height(x + r, z, seed)
        + base_height(x - r, z, seed)
        + base_height(x, z + r, seed)
        + base_height(x, z - r, seed))
        / 5.0;
    h * (1.0 - w) + smoothed * w
}

/// Surface normal from central differences of the final height field.
#[must_use]
pub fn normal_at(x: f32, z: f32, seed: u32) -> Vec3 {
    let d = 0.75;
    let hx = height_at(x + d, z, seed) - height_at(x - d, z, seed);
    let hz = height_at(x, z + d, seed) - height_at(x, z - d, seed);
    Vec3::new(-hx, 2.0 * d, -hz).normalize()
}
