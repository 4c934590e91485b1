//! Rendered frame — the complete display list produced by one render pass.
//!
//! Primitives are plain data in screen pixels, ordered back to front.
//! The UI layer replays them onto whatever drawing surface it owns; nothing
//! here references a widget toolkit.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Neutral gray of the given level.
    pub const fn gray(level: u8) -> Self {
        Self {
            r: level,
            g: level,
            b: level,
        }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
}

/// Horizontal anchor for text placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    #[default]
    Center,
    /// Anchored at the left edge, vertically centered.
    West,
}

/// One draw call in the frame's display list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum DrawPrimitive {
    Circle {
        center: DVec2,
        radius_px: f64,
        stroke: Option<Color>,
        fill: Option<Color>,
        stroke_width: f64,
        /// Dash pattern (on, off) in pixels; solid when absent.
        dash: Option<[f64; 2]>,
    },
    Ellipse {
        center: DVec2,
        semi_x_px: f64,
        semi_y_px: f64,
        fill: Color,
    },
    Line {
        from: DVec2,
        to: DVec2,
        color: Color,
        width: f64,
    },
    Polyline {
        points: Vec<DVec2>,
        color: Color,
        width: f64,
        /// Hint to render with spline smoothing.
        smooth: bool,
    },
    Rect {
        min: DVec2,
        max: DVec2,
        stroke: Option<Color>,
        fill: Option<Color>,
        stroke_width: f64,
    },
    Text {
        pos: DVec2,
        text: String,
        color: Color,
        anchor: TextAnchor,
    },
}

/// Target state summary carried with every frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetReadout {
    pub number: u32,
    pub bearing_deg: f64,
    pub range_nm: f64,
    pub epr_m2: f64,
    pub aspect_deg: f64,
    pub course_deg: f64,
    pub speed_kn: f64,
    /// Display brightness the signature model produced for this frame.
    pub brightness: f64,
    /// Angular width the signature model produced for this frame (degrees).
    pub angular_width_deg: f64,
}

impl TargetReadout {
    /// Multi-line operator summary of the current target.
    pub fn summary(&self) -> String {
        format!(
            "Range:   {:.2} NM\nBearing: {:.1}\u{00b0}\nEPR:     {:.2} m\u{00b2}\nAspect:  {:.1}\u{00b0}",
            self.range_nm, self.bearing_deg, self.epr_m2, self.aspect_deg
        )
    }
}

/// One rendered frame: ordered primitives plus the target readout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub primitives: Vec<DrawPrimitive>,
    pub readout: TargetReadout,
    /// Side length of the square scope surface the frame was laid out for.
    pub surface_px: f64,
}
