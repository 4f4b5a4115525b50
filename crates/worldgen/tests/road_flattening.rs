//! Sampling heights along a road band shows less variance than a parallel
//! line well off the road at the same seed.

use worldgen::{height_at, road_influence_at};

const SEED: u32 = 7;
const SAMPLES: usize = 12;
const STEP: f32 = 1.2;

fn variance(samples: &[f32]) -> f32 {
    let mean = samples.iter().sum::<f32>() / samples.len() as f32;
    samples.iter().map(|s| (s - mean) * (s - mean)).sum::<f32>() / samples.len() as f32
}

/// Coarse-scan for any in-band point, then hill-climb to the band center.
/// The band is roughly 26 u wide, so a 7 u grid cannot step over it.
fn find_road_center() -> (f32, f32) {
    let mut found = None;
    'scan: for ix in -60..60 {
        for iz in -60..60 {
            let x = ix as f32 * 7.0;
            let z = iz as f32 * 7.0;
            if road_influence_at(x, z, SEED) > 0.2 {
                found = Some((x, z));
                break 'scan;
            }
        }
    }
    let (mut x, mut z) = found.expect("no road band inside the scanned region");
    let mut step = 4.0;
    for _ in 0..80 {
        let here = road_influence_at(x, z, SEED);
        let mut moved = false;
        for (dx, dz) in [(step, 0.0), (-step, 0.0), (0.0, step), (0.0, -step)] {
            if road_influence_at(x + dx, z + dz, SEED) > here {
                x += dx;
                z += dz;
                moved = true;
                break;
            }
        }
        if !moved {
            step *= 0.5;
            if step < 0.05 {
                break;
            }
        }
    }
    let center = road_influence_at(x, z, SEED);
    assert!(center > 0.8, "hill climb stalled at influence {center}");
    (x, z)
}

fn min_influence_along(x: f32, z: f32, dir: (f32, f32)) -> f32 {
    (0..SAMPLES)
        .map(|i| {
            let t = i as f32 * STEP;
            road_influence_at(x + dir.0 * t, z + dir.1 * t, SEED)
        })
        .fold(f32::INFINITY, f32::min)
}

fn heights_along(x: f32, z: f32, dir: (f32, f32)) -> Vec<f32> {
    (0..SAMPLES)
        .map(|i| {
            let t = i as f32 * STEP;
            height_at(x + dir.0 * t, z + dir.1 * t, SEED)
        })
        .collect()
}

#[test]
fn road_band_flattens_height() {
    let (cx, cz) = find_road_center();

    // Trace the band: of 16 candidate directions, follow the one that keeps
    // influence highest.
    let mut dir = (1.0, 0.0);
    let mut best_min = -1.0;
    for k in 0..16 {
        let a = k as f32 * std::f32::consts::PI / 16.0;
        let d = (a.cos(), a.sin());
        let m = min_influence_along(cx, cz, d);
        if m > best_min {
            best_min = m;
            dir = d;
        }
    }
    assert!(best_min > 0.2, "could not trace the band (min influence {best_min})");
    let on_var = variance(&heights_along(cx, cz, dir));

    // Same-shaped line perpendicular to the band, far enough to be fully
    // off-road; among the fully-off candidates take the most varied one.
    let perp = (-dir.1, dir.0);
    let mut off_var: Option<f32> = None;
    for mult in [50.0f32, 70.0, 90.0, 110.0, -50.0, -70.0] {
        let ox = cx + perp.0 * mult;
        let oz = cz + perp.1 * mult;
        let infl = (0..SAMPLES)
            .map(|i| {
                let t = i as f32 * STEP;
                road_influence_at(ox + dir.0 * t, oz + dir.1 * t, SEED)
            })
            .fold(0.0f32, f32::max);
        if infl == 0.0 {
            let v = variance(&heights_along(ox, oz, dir));
            off_var = Some(off_var.map_or(v, |prev: f32| prev.max(v)));
        }
    }
    let off_var = off_var.expect("no fully off-road line found near the band");

    assert!(
        on_var < off_var,
        "road variance {on_var} not below off-road variance {off_var}"
    );
}
