//! Scene renderer.
//!
//! Composes one frame from the current parameters and session state, in a
//! fixed back-to-front order: grid, range rings, bearing ticks, clutter,
//! coastline, trail, target blip, cursor and data block. The clutter
//! field is regenerated on every pass; everything else is read from the
//! state handed in.

use glam::DVec2;
use rand_chacha::ChaCha8Rng;

use seascope_core::constants::*;
use seascope_core::frame::{Color, DrawPrimitive, Frame, TargetReadout, TextAnchor};
use seascope_core::params::RadarParameters;
use seascope_core::types::CoastlinePolyline;
use seascope_sim::clutter;
use seascope_sim::signature;
use seascope_sim::trail::HistoryTrail;

use crate::geometry::ScopeGeometry;

/// Dash pattern for range rings (on, off).
const RING_DASH: [f64; 2] = [3.0, 5.0];

/// Half-size of the red target cursor square in pixels.
const CURSOR_HALF_PX: f64 = 12.0;

/// Data block dimensions and layout.
const DATA_BLOCK_WIDTH_PX: f64 = 110.0;
const DATA_BLOCK_HEIGHT_PX: f64 = 70.0;
const DATA_BLOCK_LINE_STEP_PX: f64 = 14.0;

/// Render one frame.
///
/// The RNG drives the clutter field only; coastline and trail are
/// persistent state regenerated elsewhere.
pub fn render(
    params: &RadarParameters,
    geom: &ScopeGeometry,
    coastline: &CoastlinePolyline,
    trail: &HistoryTrail,
    rng: &mut ChaCha8Rng,
) -> Frame {
    let mut out = Vec::new();

    draw_grid_background(&mut out, geom);
    draw_range_rings(&mut out, geom);
    draw_bearing_marks(&mut out, geom);
    draw_sea_clutter(&mut out, params, geom, rng);
    if params.show_coastline {
        draw_coastline(&mut out, geom, coastline);
    }
    if params.show_trails {
        draw_trail(&mut out, geom, trail);
    }

    let brightness = signature::target_brightness(
        params.epr_m2,
        params.aspect_deg,
        params.range_nm,
        params.range_scale_nm,
    );
    let angular_width_deg = signature::angular_width_deg(
        params.length_m,
        params.width_m,
        params.aspect_deg,
        params.range_nm,
    );
    draw_target_blip(&mut out, params, geom, brightness);

    if params.show_data_block {
        draw_target_cursor(&mut out, params, geom);
        draw_data_block(&mut out, params, geom);
    }

    Frame {
        primitives: out,
        readout: TargetReadout {
            number: params.target_number,
            bearing_deg: params.bearing_deg,
            range_nm: params.range_nm,
            epr_m2: params.epr_m2,
            aspect_deg: params.aspect_deg,
            course_deg: params.course_deg,
            speed_kn: params.speed_kn,
            brightness,
            angular_width_deg,
        },
        surface_px: geom.surface_px(),
    }
}

/// Faint concentric circles filling the surface behind the rings.
fn draw_grid_background(out: &mut Vec<DrawPrimitive>, geom: &ScopeGeometry) {
    let w = geom.surface_px();
    let step = (w / 12.0).floor().max(20.0);
    let rings = (w / step) as u32;
    for index in 1..=rings {
        let radius = index as f64 * step / 2.0;
        let shade = (12 + index * 3).min(80) as u8;
        out.push(DrawPrimitive::Circle {
            center: geom.center(),
            radius_px: radius,
            stroke: Some(Color::gray(shade)),
            fill: None,
            stroke_width: 1.0,
            dash: None,
        });
    }
}

/// Dashed range rings with distance labels up the north radial.
fn draw_range_rings(out: &mut Vec<DrawPrimitive>, geom: &ScopeGeometry) {
    for i in 1..=RANGE_RING_COUNT {
        let range_nm = geom.range_scale_nm() / RANGE_RING_COUNT as f64 * i as f64;
        out.push(DrawPrimitive::Circle {
            center: geom.center(),
            radius_px: range_nm * geom.pixels_per_mile(),
            stroke: Some(Color::gray(0x22)),
            fill: None,
            stroke_width: 1.0,
            dash: Some(RING_DASH),
        });
        let label_at = geom.project(0.0, range_nm) + DVec2::new(8.0, -8.0);
        out.push(DrawPrimitive::Text {
            pos: label_at,
            text: format!("{}", range_nm as i64),
            color: Color::gray(0x66),
            anchor: TextAnchor::Center,
        });
    }
}

/// Bearing tick marks every 30° with degree labels outside the scope.
fn draw_bearing_marks(out: &mut Vec<DrawPrimitive>, geom: &ScopeGeometry) {
    let scale = geom.range_scale_nm();
    for bearing in (0..360).step_by(BEARING_TICK_STEP_DEG as usize) {
        let bearing = bearing as f64;
        out.push(DrawPrimitive::Line {
            from: geom.project(bearing, scale * 0.92),
            to: geom.project(bearing, scale),
            color: Color::gray(0x22),
            width: 1.0,
        });
        out.push(DrawPrimitive::Text {
            pos: geom.project(bearing, scale * 1.03),
            text: format!("{bearing:.0}\u{00b0}"),
            color: Color::gray(0x44),
            anchor: TextAnchor::Center,
        });
    }
}

/// Regenerate and draw the sea clutter field.
fn draw_sea_clutter(
    out: &mut Vec<DrawPrimitive>,
    params: &RadarParameters,
    geom: &ScopeGeometry,
    rng: &mut ChaCha8Rng,
) {
    for point in clutter::generate(params, rng) {
        let level = if point.sparkle {
            200 + (55.0 * point.brightness) as u8
        } else {
            (255.0 * point.brightness) as u8
        };
        out.push(DrawPrimitive::Ellipse {
            center: geom.project(point.bearing_deg, point.range_nm),
            semi_x_px: point.semi_x_px,
            semi_y_px: point.semi_y_px,
            fill: Color::rgb(level, level, 0),
        });
    }
}

/// Coastline: a bright ochre stroke with progressively wider, dimmer
/// passes over it for a glow-like shore edge.
fn draw_coastline(out: &mut Vec<DrawPrimitive>, geom: &ScopeGeometry, coastline: &CoastlinePolyline) {
    if coastline.is_empty() {
        return;
    }
    let screen: Vec<DVec2> = coastline
        .points
        .iter()
        .map(|p| geom.project(p.bearing_deg, p.range_nm))
        .collect();

    out.push(DrawPrimitive::Polyline {
        points: screen.clone(),
        color: Color::rgb(0xCC, 0x99, 0x00),
        width: 2.0,
        smooth: true,
    });
    for i in 1..4u32 {
        let shade = (200 - i * 30).max(40) as u8;
        out.push(DrawPrimitive::Polyline {
            points: screen.clone(),
            color: Color::rgb(shade, (shade as f64 * 0.85) as u8, 0x30),
            width: 2.0 + i as f64,
            smooth: true,
        });
    }
}

/// History trail, oldest to newest so the freshest fix draws on top.
/// Connector segments fade with age; points shrink and cool toward the
/// tail, each sized by the EPR the target had at capture time.
fn draw_trail(out: &mut Vec<DrawPrimitive>, geom: &ScopeGeometry, trail: &HistoryTrail) {
    let fixes: Vec<_> = trail.iter().collect();
    if fixes.len() < 2 {
        return;
    }

    // Segments: index 0 is the newest fix, so walk from the tail.
    let segment_span = (fixes.len() - 2).max(1) as f64;
    for i in (0..fixes.len() - 1).rev() {
        let t = i as f64 / segment_span;
        let fade = 0.3 + 0.7 * (1.0 - t);
        out.push(DrawPrimitive::Line {
            from: geom.project(fixes[i].bearing_deg, fixes[i].range_nm),
            to: geom.project(fixes[i + 1].bearing_deg, fixes[i + 1].range_nm),
            color: Color::rgb(0, 0xFF, (255.0 * fade) as u8),
            width: 2.0,
        });
    }

    let point_span = (fixes.len() - 1).max(1) as f64;
    for i in (0..fixes.len()).rev() {
        let t = i as f64 / point_span;
        let fade = 0.4 + 0.6 * (1.0 - t);
        let size = ((3.0 + fixes[i].epr_m2 * 0.5) * fade).max(2.0);
        let color = Color::rgb(
            (100.0 + 155.0 * (1.0 - fade)) as u8,
            (200.0 + 55.0 * fade) as u8,
            (50.0 * (1.0 - fade)) as u8,
        );
        out.push(DrawPrimitive::Circle {
            center: geom.project(fixes[i].bearing_deg, fixes[i].range_nm),
            radius_px: size,
            stroke: None,
            fill: Some(color),
            stroke_width: 0.0,
            dash: None,
        });
    }
}

/// The target mark: a filled core scaled by brightness, one halo ring,
/// and a second outer halo for large cross-sections.
fn draw_target_blip(
    out: &mut Vec<DrawPrimitive>,
    params: &RadarParameters,
    geom: &ScopeGeometry,
    brightness: f64,
) {
    let center = geom.project(params.bearing_deg, params.range_nm);
    let level = (255.0 * brightness.clamp(0.15, 1.0)) as u8;
    let main = Color::rgb(level, level, 0);

    let core_radius = (3.0 + brightness * 4.0).max(3.0);
    out.push(DrawPrimitive::Circle {
        center,
        radius_px: core_radius,
        stroke: Some(main),
        fill: Some(main),
        stroke_width: 1.0,
        dash: None,
    });

    let halo_radius = core_radius + 2.0;
    out.push(DrawPrimitive::Circle {
        center,
        radius_px: halo_radius,
        stroke: Some(Color::rgb(
            level.saturating_add(50),
            level.saturating_add(30),
            0,
        )),
        fill: None,
        stroke_width: 1.0,
        dash: None,
    });

    if params.epr_m2 > LARGE_TARGET_EPR_M2 {
        out.push(DrawPrimitive::Circle {
            center,
            radius_px: halo_radius + 3.0,
            stroke: Some(Color::rgb(
                level.saturating_add(20),
                level.saturating_add(10),
                0,
            )),
            fill: None,
            stroke_width: 1.0,
            dash: None,
        });
    }
}

/// Red square cursor with diagonals around the hooked target.
fn draw_target_cursor(out: &mut Vec<DrawPrimitive>, params: &RadarParameters, geom: &ScopeGeometry) {
    let c = geom.project(params.bearing_deg, params.range_nm);
    let half = DVec2::splat(CURSOR_HALF_PX);
    out.push(DrawPrimitive::Rect {
        min: c - half,
        max: c + half,
        stroke: Some(Color::RED),
        fill: None,
        stroke_width: 2.0,
    });
    out.push(DrawPrimitive::Line {
        from: c - half,
        to: c + half,
        color: Color::RED,
        width: 1.0,
    });
    out.push(DrawPrimitive::Line {
        from: c + DVec2::new(-CURSOR_HALF_PX, CURSOR_HALF_PX),
        to: c + DVec2::new(CURSOR_HALF_PX, -CURSOR_HALF_PX),
        color: Color::RED,
        width: 1.0,
    });
}

/// Target data block beside the blip: designation, bearing, range,
/// course, speed. Placed to the right unless that would overflow the
/// surface, then flipped to the left.
fn draw_data_block(out: &mut Vec<DrawPrimitive>, params: &RadarParameters, geom: &ScopeGeometry) {
    let c = geom.project(params.bearing_deg, params.range_nm);
    let mut block_x = c.x + 15.0;
    if block_x + DATA_BLOCK_WIDTH_PX > geom.surface_px() {
        block_x = c.x - DATA_BLOCK_WIDTH_PX - 5.0;
    }
    let block_y = c.y - 35.0;

    out.push(DrawPrimitive::Rect {
        min: DVec2::new(block_x, block_y),
        max: DVec2::new(block_x + DATA_BLOCK_WIDTH_PX, block_y + DATA_BLOCK_HEIGHT_PX),
        stroke: Some(Color::WHITE),
        fill: Some(Color::BLACK),
        stroke_width: 1.0,
    });

    let lines = [
        format!("N{:02}", params.target_number),
        format!("BRG {:.0}\u{00b0}", params.bearing_deg),
        format!("RNG {:.1} NM", params.range_nm),
        format!("CRS {:.0}\u{00b0}", params.course_deg),
        format!("SPD {:.1} kn", params.speed_kn),
    ];
    for (i, text) in lines.into_iter().enumerate() {
        out.push(DrawPrimitive::Text {
            pos: DVec2::new(block_x + 8.0, block_y + 12.0 + i as f64 * DATA_BLOCK_LINE_STEP_PX),
            text,
            color: Color::rgb(0, 255, 0),
            anchor: TextAnchor::West,
        });
    }
}
