//! Target signature model.
//!
//! Pure functions mapping physical target parameters to what the scope
//! shows: the angular extent of the blip and its display brightness.
//! A broadside target (aspect near 90°) presents its full length and the
//! strongest return; a bow-on target presents mostly its beam.

use seascope_core::constants::*;
use seascope_core::enums::HullMaterial;

/// Angular width of the target mark in degrees.
///
/// Projected-silhouette model: `projected = L·|sin a| + W·|cos a|`,
/// converted to an angle at the target's range and compressed to emulate
/// radar azimuth resolution. Clamped so degenerate size/range combinations
/// cannot produce degenerate blips.
pub fn angular_width_deg(length_m: f64, width_m: f64, aspect_deg: f64, range_nm: f64) -> f64 {
    let length = length_m.max(MIN_DIMENSION_M);
    let width = width_m.max(MIN_DIMENSION_M);
    let aspect = aspect_deg.to_radians();
    let projected_m = length * aspect.sin().abs() + width * aspect.cos().abs();
    let distance_m = (range_nm * METERS_PER_NM).max(1.0);
    let angular_deg = (projected_m / distance_m).to_degrees() * ANGULAR_COMPRESSION;
    angular_deg.clamp(ANGULAR_WIDTH_MIN_DEG, ANGULAR_WIDTH_MAX_DEG)
}

/// Display brightness of the target mark, in [0.05, 1.0].
///
/// `log10(EPR + 1)` keeps large cross-sections from saturating the scale,
/// the aspect term peaks at broadside, and returns fade with range out to
/// the edge of the scope.
pub fn target_brightness(epr_m2: f64, aspect_deg: f64, range_nm: f64, range_scale_nm: f64) -> f64 {
    let epr = epr_m2.max(MIN_EPR_M2);
    let epr_factor = (epr + 1.0).log10();
    let aspect_factor = aspect_deg.to_radians().sin().abs().clamp(0.0, 1.0);
    let range_factor =
        (1.0 - (range_nm / range_scale_nm) * TARGET_RANGE_FADE).max(TARGET_RANGE_FADE_FLOOR);
    let brightness = BRIGHTNESS_BASE + epr_factor * aspect_factor * range_factor * BRIGHTNESS_GAIN;
    brightness.clamp(BRIGHTNESS_MIN, BRIGHTNESS_MAX)
}

/// Estimate EPR from hull dimensions and construction material.
///
/// `(L·W·max(0.1, freeboard))^(2/3)` approximates the reflecting surface,
/// scaled by the material reflectivity and an aspect term that never drops
/// below 30% of the broadside return.
pub fn epr_from_dimensions(
    length_m: f64,
    width_m: f64,
    freeboard_m: f64,
    material: HullMaterial,
    aspect_deg: f64,
) -> f64 {
    let base = (length_m * width_m * freeboard_m.max(0.1)).powf(2.0 / 3.0);
    let aspect_factor = aspect_deg.to_radians().sin().abs();
    let epr = base * material.reflectivity() * (0.3 + 0.7 * aspect_factor) * EPR_FORM_FACTOR;
    epr.max(EPR_FLOOR_M2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angular_width_clamped_for_extreme_inputs() {
        let tiny = angular_width_deg(0.0, 0.0, 45.0, 100.0);
        assert!(
            (tiny - ANGULAR_WIDTH_MIN_DEG).abs() < 1e-9,
            "Vanishing target should hit the lower clamp: {tiny}"
        );

        let huge = angular_width_deg(1.0e9, 1.0e9, 90.0, 0.001);
        assert!(
            (huge - ANGULAR_WIDTH_MAX_DEG).abs() < 1e-9,
            "Enormous close target should hit the upper clamp: {huge}"
        );

        for aspect in [0.0, 30.0, 60.0, 90.0] {
            for range in [0.001, 1.0, 12.0, 1.0e6] {
                let w = angular_width_deg(30.0, 7.0, aspect, range);
                assert!(
                    (ANGULAR_WIDTH_MIN_DEG..=ANGULAR_WIDTH_MAX_DEG).contains(&w),
                    "Angular width out of clamp at aspect={aspect} range={range}: {w}"
                );
            }
        }
    }

    #[test]
    fn test_angular_width_broadside_exceeds_bow_on() {
        // A long, narrow hull shows more of itself broadside.
        let broadside = angular_width_deg(100.0, 10.0, 90.0, 10.0);
        let bow_on = angular_width_deg(100.0, 10.0, 0.0, 10.0);
        assert!(
            broadside > bow_on,
            "Broadside should present wider: {broadside} vs {bow_on}"
        );
    }

    #[test]
    fn test_brightness_monotonic_in_epr() {
        let mut last = 0.0;
        for epr in [0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 100.0] {
            let b = target_brightness(epr, 70.0, 8.0, 24.0);
            assert!(
                b >= last,
                "Brightness must not decrease with EPR: {b} after {last}"
            );
            last = b;
        }
    }

    #[test]
    fn test_brightness_bounded() {
        for epr in [0.0, 0.01, 1.0, 1.0e6] {
            for aspect in [0.0, 45.0, 90.0] {
                for range in [0.1, 8.0, 23.9] {
                    let b = target_brightness(epr, aspect, range, 24.0);
                    assert!(
                        (BRIGHTNESS_MIN..=BRIGHTNESS_MAX).contains(&b),
                        "Brightness out of range at epr={epr} aspect={aspect} range={range}: {b}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_brightness_fades_with_range() {
        let near = target_brightness(5.0, 90.0, 2.0, 24.0);
        let far = target_brightness(5.0, 90.0, 22.0, 24.0);
        assert!(near > far, "Near target should be brighter: {near} vs {far}");
    }

    #[test]
    fn test_epr_estimate_scales_with_material() {
        let steel = epr_from_dimensions(30.0, 7.0, 3.0, HullMaterial::Steel, 70.0);
        let wood = epr_from_dimensions(30.0, 7.0, 3.0, HullMaterial::Wood, 70.0);
        assert!(
            steel > wood * 10.0,
            "Steel hull should return far more than wood: {steel} vs {wood}"
        );
    }

    #[test]
    fn test_epr_estimate_never_zero() {
        let epr = epr_from_dimensions(0.0, 0.0, 0.0, HullMaterial::Rubber, 0.0);
        assert!(
            epr >= EPR_FLOOR_M2,
            "Estimate must stay above the floor: {epr}"
        );
    }
}
