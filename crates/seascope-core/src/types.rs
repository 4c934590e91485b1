//! Fundamental scope-space types.

use serde::{Deserialize, Serialize};

/// A point in scope polar coordinates: compass bearing (degrees,
/// 0 = North, clockwise) and range (nautical miles).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarPoint {
    pub bearing_deg: f64,
    pub range_nm: f64,
}

impl PolarPoint {
    pub fn new(bearing_deg: f64, range_nm: f64) -> Self {
        Self {
            bearing_deg,
            range_nm,
        }
    }
}

/// A recorded target position sample.
///
/// The EPR at capture time travels with the fix so trail points can be
/// sized by the return strength the target had back then.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetFix {
    pub bearing_deg: f64,
    pub range_nm: f64,
    pub epr_m2: f64,
}

impl TargetFix {
    pub fn new(bearing_deg: f64, range_nm: f64, epr_m2: f64) -> Self {
        Self {
            bearing_deg,
            range_nm,
            epr_m2,
        }
    }

    pub fn position(&self) -> PolarPoint {
        PolarPoint::new(self.bearing_deg, self.range_nm)
    }
}

/// A generated shoreline: ordered polar vertices spanning a sector of the
/// scope, ready for projection and polyline rendering. Replaced wholesale
/// on regeneration, never mutated incrementally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoastlinePolyline {
    pub points: Vec<PolarPoint>,
}

impl CoastlinePolyline {
    pub fn new(points: Vec<PolarPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Normalize a compass angle into [0, 360).
pub fn wrap_degrees(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}
