//! Commands sent from the control surface to the scope session.
//!
//! Commands are validated on application: scalar setters clamp or wrap to
//! their legal ranges rather than failing.

use serde::{Deserialize, Serialize};

/// All possible control actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ScopeCommand {
    // --- Target parameters ---
    /// Set the compass bearing to the target (degrees).
    SetBearing { deg: f64 },
    /// Set the range to the target (nm).
    SetRange { nm: f64 },
    /// Set the target aspect angle (degrees, 0 = bow-on, 90 = broadside).
    SetAspect { deg: f64 },
    /// Set the effective radar cross-section (square meters).
    SetEpr { m2: f64 },
    /// Set the target hull length (meters).
    SetLength { m: f64 },
    /// Set the target hull beam (meters).
    SetWidth { m: f64 },

    // --- Environment ---
    /// Set sea clutter intensity (0..=1).
    SetClutterIntensity { value: f64 },
    /// Draw a random clutter intensity.
    RandomizeClutter,
    /// Replace the coastline with a freshly generated one.
    RegenerateCoastline,

    // --- Movement ---
    /// Set the course used by movement simulation (degrees, compass).
    SetCourse { deg: f64 },
    /// Set the speed used by movement simulation (knots).
    SetSpeed { kn: f64 },
    /// Begin advancing the target along the current course/speed.
    StartMovement,
    /// Halt movement; any in-flight tick becomes a no-op.
    StopMovement,

    // --- Trail ---
    /// Resize the history trail. Clears existing fixes.
    SetTrailMaxLen { len: usize },
    SetShowTrails { on: bool },

    // --- Overlays ---
    SetShowCoastline { on: bool },
    SetShowDataBlock { on: bool },

    // --- Session ---
    /// Draw a fresh random target (position, signature, dimensions).
    RandomizeTarget,
    /// The display surface changed size.
    SurfaceResized { width_px: f64, height_px: f64 },
}
