//! Scope model constants and tuning parameters.

// --- Units ---

/// Meters per nautical mile.
pub const METERS_PER_NM: f64 = 1852.0;

/// Seconds per hour (knots → nm per second).
pub const SECS_PER_HOUR: f64 = 3600.0;

// --- Scope surface ---

/// Nautical miles represented by the outer ring at the default setting.
pub const DEFAULT_RANGE_SCALE_NM: f64 = 24.0;

/// Pixels reserved at the scope edge for ring and bearing labels.
pub const SCOPE_MARGIN_PX: f64 = 40.0;

/// Smallest usable square scope surface.
pub const MIN_SURFACE_PX: f64 = 220.0;

/// Number of range rings drawn inside the outer ring.
pub const RANGE_RING_COUNT: u32 = 4;

/// Bearing tick spacing in degrees.
pub const BEARING_TICK_STEP_DEG: u32 = 30;

// --- Target signature ---

/// Compression applied to the projected-silhouette angle to emulate
/// radar azimuth resolution limits.
pub const ANGULAR_COMPRESSION: f64 = 0.3;

/// Angular width clamp (degrees).
pub const ANGULAR_WIDTH_MIN_DEG: f64 = 0.18;
pub const ANGULAR_WIDTH_MAX_DEG: f64 = 3.5;

/// Floor for target hull dimensions (meters).
pub const MIN_DIMENSION_M: f64 = 0.1;

/// Floor for effective radar cross-section (square meters).
pub const MIN_EPR_M2: f64 = 0.01;

/// Brightness model: constant pedestal added before the EPR term.
pub const BRIGHTNESS_BASE: f64 = 0.12;

/// Brightness model: gain on the EPR × aspect × range product.
pub const BRIGHTNESS_GAIN: f64 = 1.5;

/// Brightness output clamp.
pub const BRIGHTNESS_MIN: f64 = 0.05;
pub const BRIGHTNESS_MAX: f64 = 1.0;

/// Fraction of brightness lost from scope center to the outer ring.
pub const TARGET_RANGE_FADE: f64 = 0.6;

/// Floor of the target range-fade factor.
pub const TARGET_RANGE_FADE_FLOOR: f64 = 0.12;

/// EPR above which the blip gets a second, outer halo ring.
pub const LARGE_TARGET_EPR_M2: f64 = 2.0;

// --- EPR estimation from hull dimensions ---

/// Shape correction applied after the material and aspect terms.
pub const EPR_FORM_FACTOR: f64 = 0.7;

/// Floor for an estimated EPR (square meters).
pub const EPR_FLOOR_M2: f64 = 0.001;

// --- Sea clutter ---

/// Intensity below which the clutter field is skipped entirely.
pub const CLUTTER_CUTOFF: f64 = 0.01;

/// Cluster count = max(CLUTTER_MIN_CLUSTERS, density × intensity / divisor).
pub const CLUTTER_MIN_CLUSTERS: usize = 4;
pub const CLUTTER_CLUSTER_DIVISOR: f64 = 40.0;

/// Sub-points emitted per cluster.
pub const CLUTTER_SUBPOINTS_MIN: u32 = 8;
pub const CLUTTER_SUBPOINTS_MAX: u32 = 30;

/// Bearing scatter around a cluster center (degrees).
pub const CLUTTER_BEARING_JITTER_DEG: f64 = 8.0;

/// Hard ceiling on clutter brightness.
pub const CLUTTER_MAX_BRIGHTNESS: f64 = 0.8;

/// Fraction of clutter brightness lost from center to the outer ring.
pub const CLUTTER_RANGE_FADE: f64 = 0.45;

/// Floor of the clutter range-fade factor.
pub const CLUTTER_RANGE_FADE_FLOOR: f64 = 0.2;

/// Sparkle points emitted per unit of clutter intensity.
pub const SPARKLES_PER_INTENSITY: f64 = 20.0;

// --- Coastline ---

/// Number of vertices in a generated coastline.
pub const COASTLINE_SEGMENTS: usize = 40;

/// Angular extent of the coastline arc (degrees).
pub const COASTLINE_ARC_DEG: f64 = 120.0;

/// Coastline bearing offset from the target bearing (degrees).
pub const COASTLINE_OFFSET_DEG: f64 = 120.0;

/// Random jitter applied to the bearing offset (± degrees).
pub const COASTLINE_OFFSET_JITTER_DEG: f64 = 20.0;

/// Base coastline distance as a fraction of the range scale.
pub const COASTLINE_BASE_FRACTION: f64 = 0.75;

/// Sinusoidal perturbation amplitude as a fraction of the range scale.
pub const COASTLINE_WAVE_FRACTION: f64 = 0.15;

/// Uniform jitter amplitude as a fraction of the range scale.
pub const COASTLINE_JITTER_FRACTION: f64 = 0.05;

/// Closest the coastline may come, as a fraction of the range scale.
pub const COASTLINE_MIN_FRACTION: f64 = 0.5;

/// Clearance kept between the coastline and the outer ring (nm).
pub const COASTLINE_EDGE_CLEARANCE_NM: f64 = 1.0;

/// Smoothing window half-width (samples each side, circular).
pub const COASTLINE_SMOOTH_HALF_WINDOW: usize = 2;

// --- Kinematics ---

/// Default movement tick period in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 500;

/// Distance inside the outer ring at which the target counts as having
/// left the scope (nm).
pub const SCOPE_EXIT_MARGIN_NM: f64 = 0.5;

// --- History trail ---

/// Default trail capacity (fixes).
pub const DEFAULT_TRAIL_MAX_LEN: usize = 30;

/// Minimum bearing change for a new trail fix (degrees).
pub const TRAIL_BEARING_DEADBAND_DEG: f64 = 1.0;

/// Minimum range change for a new trail fix (nm).
pub const TRAIL_RANGE_DEADBAND_NM: f64 = 0.1;

/// Closest the target can be set to the scope center (nm).
pub const MIN_TARGET_RANGE_NM: f64 = 0.1;

// --- Target parameter defaults ---

pub const DEFAULT_TARGET_BEARING_DEG: f64 = 40.0;
pub const DEFAULT_TARGET_RANGE_NM: f64 = 8.0;
pub const DEFAULT_ASPECT_DEG: f64 = 70.0;
pub const DEFAULT_EPR_M2: f64 = 1.0;
pub const DEFAULT_TARGET_LENGTH_M: f64 = 30.0;
pub const DEFAULT_TARGET_WIDTH_M: f64 = 7.0;
pub const DEFAULT_CLUTTER_INTENSITY: f64 = 0.45;
pub const DEFAULT_CLUTTER_DENSITY: u32 = 140;
pub const DEFAULT_COURSE_DEG: f64 = 45.0;
pub const DEFAULT_SPEED_KN: f64 = 10.0;
