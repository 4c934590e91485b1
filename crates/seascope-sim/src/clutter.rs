//! Sea clutter field generator.
//!
//! Stateless and re-run on every render pass so the field decorrelates
//! frame to frame the way real sea return does. Two layers: clustered
//! low-level returns and a sparse sparkle layer of strong instantaneous
//! spikes. Brightness falls off with range like the target signature.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use seascope_core::constants::*;
use seascope_core::params::RadarParameters;
use seascope_core::types::wrap_degrees;

/// One clutter return, ready for projection and ellipse rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClutterPoint {
    pub bearing_deg: f64,
    pub range_nm: f64,
    /// Ellipse semi-axes in screen pixels.
    pub semi_x_px: f64,
    pub semi_y_px: f64,
    /// Display brightness in [0.05, 0.8].
    pub brightness: f64,
    /// Strong instantaneous spike (rendered hotter than cluster returns).
    pub sparkle: bool,
}

/// Brightness of a clutter return with the given base intensity at the
/// given range. Near-field returns are stronger; output is capped well
/// below target brightness so clutter never outshines a real contact.
pub fn clutter_brightness(base: f64, range_nm: f64, range_scale_nm: f64) -> f64 {
    let range_factor =
        (1.0 - (range_nm / range_scale_nm) * CLUTTER_RANGE_FADE).max(CLUTTER_RANGE_FADE_FLOOR);
    (base * CLUTTER_MAX_BRIGHTNESS * range_factor).clamp(BRIGHTNESS_MIN, CLUTTER_MAX_BRIGHTNESS)
}

/// Number of clutter clusters for the given density/intensity setting.
pub fn cluster_count(density: u32, intensity: f64) -> usize {
    CLUTTER_MIN_CLUSTERS.max((density as f64 * intensity / CLUTTER_CLUSTER_DIVISOR) as usize)
}

/// Generate the clutter field for one frame.
///
/// Returns an empty field when intensity is at or near zero.
pub fn generate(params: &RadarParameters, rng: &mut ChaCha8Rng) -> Vec<ClutterPoint> {
    let intensity = params.clutter_intensity;
    if intensity <= CLUTTER_CUTOFF {
        return Vec::new();
    }

    let scale = params.range_scale_nm;
    let mut points = Vec::new();

    // Clustered layer: patches of correlated low-level returns.
    let clusters = cluster_count(params.clutter_density, intensity);
    let cluster_spread = (scale * 0.25).max(0.5);
    for _ in 0..clusters {
        let cluster_bearing: f64 = rng.gen_range(0.0..360.0);
        let cluster_range: f64 = rng.gen_range(1.0..scale * 0.9);
        let count = rng.gen_range(CLUTTER_SUBPOINTS_MIN..=CLUTTER_SUBPOINTS_MAX);
        for _ in 0..count {
            let bearing = wrap_degrees(
                cluster_bearing
                    + rng.gen_range(-CLUTTER_BEARING_JITTER_DEG..CLUTTER_BEARING_JITTER_DEG),
            );
            let jitter = rng.gen_range(-cluster_spread * 0.1..cluster_spread * 0.1);
            let range = (cluster_range + jitter).max(0.2);
            let size = rng.gen_range(0.8..4.0) * (1.0 + intensity * 2.0);
            let base = rng.gen_range(0.05..0.6) * intensity;
            points.push(ClutterPoint {
                bearing_deg: bearing,
                range_nm: range,
                semi_x_px: size.max(1.0),
                semi_y_px: (size * rng.gen_range(0.6..1.4)).max(1.0),
                brightness: clutter_brightness(base, range, scale),
                sparkle: false,
            });
        }
    }

    // Sparkle layer: isolated strong spikes.
    let sparkles = (SPARKLES_PER_INTENSITY * intensity) as usize;
    for _ in 0..sparkles {
        let bearing: f64 = rng.gen_range(0.0..360.0);
        let range: f64 = rng.gen_range(0.2..scale * 0.9);
        let size = rng.gen_range(1.0..3.5);
        let base = rng.gen_range(0.4..0.9) * intensity;
        points.push(ClutterPoint {
            bearing_deg: bearing,
            range_nm: range,
            semi_x_px: size,
            semi_y_px: size,
            brightness: clutter_brightness(base, range, scale),
            sparkle: true,
        });
    }

    points
}
