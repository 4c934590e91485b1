//! Movement integrator.
//!
//! A two-state machine (`Stopped`/`Moving`) advancing the target's polar
//! position over fixed time steps. The caller owns the timer: it calls
//! `tick` once per period and re-arms only while the outcome says the
//! integrator is still moving. A tick that arrives after a stop is a
//! no-op, so stale callbacks are harmless.

use seascope_core::constants::*;
use seascope_core::enums::MotionState;
use seascope_core::types::{wrap_degrees, PolarPoint};

/// Result of one movement tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// Tick arrived while Stopped; nothing happened.
    Idle,
    /// Position advanced; the caller should re-arm the timer.
    Moved(PolarPoint),
    /// The target crossed the outer ring; movement is now Stopped and the
    /// final position was not committed.
    LeftScope(PolarPoint),
    /// The step produced a non-finite position; movement is now Stopped.
    Fault(String),
}

/// Target movement simulator.
#[derive(Debug, Clone)]
pub struct MotionSim {
    state: MotionState,
    /// Course captured when movement started (degrees, compass).
    active_course_deg: f64,
    /// Speed captured when movement started (knots).
    active_speed_kn: f64,
    /// Tick period in milliseconds.
    tick_ms: u64,
}

impl Default for MotionSim {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_MS)
    }
}

impl MotionSim {
    pub fn new(tick_ms: u64) -> Self {
        Self {
            state: MotionState::Stopped,
            active_course_deg: 0.0,
            active_speed_kn: 0.0,
            tick_ms,
        }
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    pub fn is_moving(&self) -> bool {
        self.state == MotionState::Moving
    }

    pub fn tick_ms(&self) -> u64 {
        self.tick_ms
    }

    /// Course the integrator is currently steering (degrees).
    pub fn active_course_deg(&self) -> f64 {
        self.active_course_deg
    }

    /// Speed the integrator is currently making good (knots).
    pub fn active_speed_kn(&self) -> f64 {
        self.active_speed_kn
    }

    /// Begin moving, capturing the course and speed as the active heading.
    /// Returns false if already moving (the heading is not recaptured).
    pub fn start(&mut self, course_deg: f64, speed_kn: f64) -> bool {
        if self.is_moving() {
            return false;
        }
        self.active_course_deg = wrap_degrees(course_deg);
        self.active_speed_kn = speed_kn.max(0.0);
        self.state = MotionState::Moving;
        true
    }

    /// Halt movement. Idempotent; returns false if already stopped.
    pub fn stop(&mut self) -> bool {
        if !self.is_moving() {
            return false;
        }
        self.state = MotionState::Stopped;
        true
    }

    /// Advance one tick from the given position.
    ///
    /// Converts the polar position to a compass-frame cartesian offset
    /// (`x = r·sin b`, `y = r·cos b`), steps along the active course, and
    /// converts back. Any anomaly degrades to a safe Stopped state rather
    /// than leaving a broken timer armed.
    pub fn tick(&mut self, position: PolarPoint, range_scale_nm: f64) -> TickOutcome {
        if !self.is_moving() {
            return TickOutcome::Idle;
        }

        let time_step_hours = self.tick_ms as f64 / 1000.0 / SECS_PER_HOUR;
        let distance_nm = self.active_speed_kn * time_step_hours;

        let bearing = position.bearing_deg.to_radians();
        let course = self.active_course_deg.to_radians();

        let x = position.range_nm * bearing.sin() + distance_nm * course.sin();
        let y = position.range_nm * bearing.cos() + distance_nm * course.cos();

        let new_range = x.hypot(y);
        let new_bearing = wrap_degrees(x.atan2(y).to_degrees());

        if !new_range.is_finite() || !new_bearing.is_finite() {
            self.state = MotionState::Stopped;
            return TickOutcome::Fault(format!(
                "movement step produced a non-finite position from ({:.2}\u{00b0}, {:.2} nm)",
                position.bearing_deg, position.range_nm
            ));
        }

        let next = PolarPoint::new(new_bearing, new_range);
        if new_range >= range_scale_nm - SCOPE_EXIT_MARGIN_NM {
            self.state = MotionState::Stopped;
            return TickOutcome::LeftScope(next);
        }

        TickOutcome::Moved(next)
    }
}
