//! Procedural coastline generator.
//!
//! Produces a smoothed polyline simulating a nearby shoreline across a
//! 120° sector of the scope, biased away from the target bearing so the
//! two rarely overlap. Generated once at session start and again only on
//! explicit request — never per frame.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use seascope_core::constants::*;
use seascope_core::types::{wrap_degrees, CoastlinePolyline, PolarPoint};

/// Generate a coastline for the given target bearing and range scale.
///
/// The sector is centered roughly 120° away from the target, its distance
/// riding a sinusoid over a base of 0.75 × range scale with uniform jitter
/// on top, then smoothed with a circular moving average over the range
/// component. Every vertex stays inside
/// `[0.5 × scale, scale − 1.0]` nm.
pub fn generate(
    target_bearing_deg: f64,
    range_scale_nm: f64,
    rng: &mut ChaCha8Rng,
) -> CoastlinePolyline {
    let offset_jitter = rng.gen_range(-COASTLINE_OFFSET_JITTER_DEG..COASTLINE_OFFSET_JITTER_DEG);
    let base_dir = wrap_degrees(target_bearing_deg + COASTLINE_OFFSET_DEG + offset_jitter);

    let base_distance = range_scale_nm * COASTLINE_BASE_FRACTION;
    let min_range = range_scale_nm * COASTLINE_MIN_FRACTION;
    let max_range = range_scale_nm - COASTLINE_EDGE_CLEARANCE_NM;

    let mut points = Vec::with_capacity(COASTLINE_SEGMENTS);
    for i in 0..COASTLINE_SEGMENTS {
        let fraction = i as f64 / (COASTLINE_SEGMENTS - 1) as f64;
        let bearing = (base_dir - COASTLINE_ARC_DEG / 2.0) + fraction * COASTLINE_ARC_DEG;

        let phase_deg = i as f64 * 8.0 + rng.gen_range(-10.0..10.0);
        let wave = phase_deg.to_radians().sin() * (range_scale_nm * COASTLINE_WAVE_FRACTION);
        let jitter_amp = range_scale_nm * COASTLINE_JITTER_FRACTION;
        let jitter = rng.gen_range(-jitter_amp..jitter_amp);

        let range = (base_distance + wave + jitter).clamp(min_range, max_range);
        points.push(PolarPoint::new(wrap_degrees(bearing), range));
    }

    CoastlinePolyline::new(smooth_ranges(&points))
}

/// Circular moving average over the range component only; bearings are
/// left untouched so the arc keeps its even angular spacing.
fn smooth_ranges(points: &[PolarPoint]) -> Vec<PolarPoint> {
    let n = points.len();
    let window = 2 * COASTLINE_SMOOTH_HALF_WINDOW + 1;
    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let sum: f64 = (0..window)
                .map(|k| {
                    let j = (i + n + k - COASTLINE_SMOOTH_HALF_WINDOW) % n;
                    points[j].range_nm
                })
                .sum();
            PolarPoint::new(point.bearing_deg, sum / window as f64)
        })
        .collect()
}
