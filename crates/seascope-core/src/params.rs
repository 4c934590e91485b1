//! Scope parameter state.
//!
//! All knobs the control surface can turn live here. The struct is plain
//! data; mutation goes through the validated setters so every consumer of
//! a `&RadarParameters` sees values already clamped to their legal ranges.
//! The UI layer restricts input domains, so out-of-range values are
//! clamped rather than rejected.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::wrap_degrees;

/// Complete parameter state for one scope session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarParameters {
    /// Nautical miles represented by the outer ring.
    pub range_scale_nm: f64,
    /// Compass bearing to the target (degrees, [0, 360)).
    pub bearing_deg: f64,
    /// Range to the target (nm, (0, range_scale]).
    pub range_nm: f64,
    /// Aspect angle (degrees, [0, 90]; 0 = bow/stern-on, 90 = broadside).
    pub aspect_deg: f64,
    /// Effective radar cross-section (square meters, > 0).
    pub epr_m2: f64,
    /// Target hull length (meters, > 0).
    pub length_m: f64,
    /// Target hull beam (meters, > 0).
    pub width_m: f64,
    /// Sea clutter intensity ([0, 1]).
    pub clutter_intensity: f64,
    /// Clutter seed count the cluster formula scales from.
    pub clutter_density: u32,
    /// Target course for movement simulation (degrees, compass).
    pub course_deg: f64,
    /// Target speed for movement simulation (knots, >= 0).
    pub speed_kn: f64,
    /// History trail capacity (fixes).
    pub trail_max_len: usize,
    /// Display toggles.
    pub show_trails: bool,
    pub show_coastline: bool,
    pub show_data_block: bool,
    /// Target designation number shown in the data block ([1, 99]).
    pub target_number: u32,
}

impl Default for RadarParameters {
    fn default() -> Self {
        Self {
            range_scale_nm: DEFAULT_RANGE_SCALE_NM,
            bearing_deg: DEFAULT_TARGET_BEARING_DEG,
            range_nm: DEFAULT_TARGET_RANGE_NM,
            aspect_deg: DEFAULT_ASPECT_DEG,
            epr_m2: DEFAULT_EPR_M2,
            length_m: DEFAULT_TARGET_LENGTH_M,
            width_m: DEFAULT_TARGET_WIDTH_M,
            clutter_intensity: DEFAULT_CLUTTER_INTENSITY,
            clutter_density: DEFAULT_CLUTTER_DENSITY,
            course_deg: DEFAULT_COURSE_DEG,
            speed_kn: DEFAULT_SPEED_KN,
            trail_max_len: DEFAULT_TRAIL_MAX_LEN,
            show_trails: true,
            show_coastline: true,
            show_data_block: false,
            target_number: 1,
        }
    }
}

impl RadarParameters {
    pub fn set_bearing(&mut self, deg: f64) {
        self.bearing_deg = wrap_degrees(deg);
    }

    pub fn set_range(&mut self, nm: f64) {
        self.range_nm = nm.clamp(MIN_TARGET_RANGE_NM, self.range_scale_nm);
    }

    pub fn set_aspect(&mut self, deg: f64) {
        self.aspect_deg = deg.clamp(0.0, 90.0);
    }

    pub fn set_epr(&mut self, m2: f64) {
        self.epr_m2 = m2.max(MIN_EPR_M2);
    }

    pub fn set_length(&mut self, m: f64) {
        self.length_m = m.max(MIN_DIMENSION_M);
    }

    pub fn set_width(&mut self, m: f64) {
        self.width_m = m.max(MIN_DIMENSION_M);
    }

    pub fn set_clutter_intensity(&mut self, value: f64) {
        self.clutter_intensity = value.clamp(0.0, 1.0);
    }

    pub fn set_course(&mut self, deg: f64) {
        self.course_deg = wrap_degrees(deg);
    }

    pub fn set_speed(&mut self, kn: f64) {
        self.speed_kn = kn.max(0.0);
    }

    pub fn set_target_number(&mut self, number: u32) {
        self.target_number = number.clamp(1, 99);
    }
}
