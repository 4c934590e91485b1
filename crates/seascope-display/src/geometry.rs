//! Scope-surface geometry.
//!
//! Maps polar scope coordinates onto a square display surface. Bearing 0°
//! points up (display north) and increases clockwise; screen y grows
//! downward. This is the single conversion point — no other module
//! computes cartesian coordinates on its own.

use glam::DVec2;

use seascope_core::constants::{MIN_SURFACE_PX, SCOPE_MARGIN_PX};
use seascope_core::types::{wrap_degrees, PolarPoint};

/// Projection state for the current surface size and range scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScopeGeometry {
    surface_px: f64,
    center: DVec2,
    pixels_per_mile: f64,
    range_scale_nm: f64,
}

impl ScopeGeometry {
    /// Build the projection for a display surface. The scope is the
    /// largest square fitting the surface, floored at the minimum usable
    /// size; a fixed margin stays reserved for ring and bearing labels.
    pub fn new(width_px: f64, height_px: f64, range_scale_nm: f64) -> Self {
        let surface_px = width_px.min(height_px).max(MIN_SURFACE_PX);
        let half = surface_px / 2.0;
        let pixels_per_mile = ((half - SCOPE_MARGIN_PX) / range_scale_nm).max(1.0);
        Self {
            surface_px,
            center: DVec2::splat(half),
            pixels_per_mile,
            range_scale_nm,
        }
    }

    pub fn surface_px(&self) -> f64 {
        self.surface_px
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn pixels_per_mile(&self) -> f64 {
        self.pixels_per_mile
    }

    pub fn range_scale_nm(&self) -> f64 {
        self.range_scale_nm
    }

    /// Project a polar scope position to screen pixels.
    pub fn project(&self, bearing_deg: f64, range_nm: f64) -> DVec2 {
        let theta = (90.0 - bearing_deg).to_radians();
        let radius = range_nm * self.pixels_per_mile;
        DVec2::new(
            self.center.x + radius * theta.cos(),
            self.center.y - radius * theta.sin(),
        )
    }

    /// Invert `project`: recover the polar position of a screen point.
    pub fn unproject(&self, point: DVec2) -> PolarPoint {
        let dx = point.x - self.center.x;
        let dy = self.center.y - point.y;
        let range_nm = dx.hypot(dy) / self.pixels_per_mile;
        let bearing_deg = if range_nm > 0.0 {
            wrap_degrees(dx.atan2(dy).to_degrees())
        } else {
            0.0
        };
        PolarPoint::new(bearing_deg, range_nm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_directions() {
        let geom = ScopeGeometry::new(800.0, 800.0, 24.0);
        let c = geom.center();
        let ppm = geom.pixels_per_mile();

        let north = geom.project(0.0, 10.0);
        assert!((north.x - c.x).abs() < 1e-9);
        assert!((north.y - (c.y - 10.0 * ppm)).abs() < 1e-9);

        let east = geom.project(90.0, 10.0);
        assert!((east.x - (c.x + 10.0 * ppm)).abs() < 1e-9);
        assert!((east.y - c.y).abs() < 1e-9);

        let south = geom.project(180.0, 10.0);
        assert!((south.y - (c.y + 10.0 * ppm)).abs() < 1e-9);

        let west = geom.project(270.0, 10.0);
        assert!((west.x - (c.x - 10.0 * ppm)).abs() < 1e-9);
    }

    #[test]
    fn test_project_unproject_round_trip() {
        let geom = ScopeGeometry::new(640.0, 480.0, 24.0);
        for bearing in [0.0, 1.5, 45.0, 90.0, 179.9, 225.0, 359.0] {
            for range in [0.1, 1.0, 8.0, 23.9] {
                let screen = geom.project(bearing, range);
                let polar = geom.unproject(screen);
                assert!(
                    (polar.bearing_deg - bearing).abs() < 1e-9,
                    "bearing {bearing} came back as {}",
                    polar.bearing_deg
                );
                assert!(
                    (polar.range_nm - range).abs() < 1e-9,
                    "range {range} came back as {}",
                    polar.range_nm
                );
            }
        }
    }

    #[test]
    fn test_center_round_trips_as_origin() {
        let geom = ScopeGeometry::new(800.0, 800.0, 24.0);
        let polar = geom.unproject(geom.center());
        assert_eq!(polar.range_nm, 0.0);
        assert_eq!(polar.bearing_deg, 0.0);
    }

    #[test]
    fn test_scale_recomputed_from_surface() {
        let big = ScopeGeometry::new(1000.0, 1000.0, 24.0);
        let small = ScopeGeometry::new(300.0, 300.0, 24.0);
        assert!(big.pixels_per_mile() > small.pixels_per_mile());
        // (500 − 40) / 24
        assert!((big.pixels_per_mile() - 460.0 / 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_tiny_surface_floors() {
        let geom = ScopeGeometry::new(50.0, 50.0, 24.0);
        assert_eq!(geom.surface_px(), MIN_SURFACE_PX);
        assert!(geom.pixels_per_mile() >= 1.0);

        // Extreme range scale on a small surface hits the 1 px/mile floor.
        let geom = ScopeGeometry::new(250.0, 250.0, 500.0);
        assert_eq!(geom.pixels_per_mile(), 1.0);
    }

    #[test]
    fn test_rectangular_surface_uses_short_side() {
        let geom = ScopeGeometry::new(1200.0, 600.0, 24.0);
        assert_eq!(geom.surface_px(), 600.0);
    }
}
