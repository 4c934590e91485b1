//! Scope session — owns all mutable state and processes commands.
//!
//! The session holds the parameter state, the persistent coastline and
//! trail, the movement integrator, and one seeded RNG that every
//! stochastic generator draws from. Same seed + same command sequence =
//! same frames. Completely headless, enabling deterministic testing.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use seascope_core::commands::ScopeCommand;
use seascope_core::constants::DEFAULT_TICK_MS;
use seascope_core::events::StatusEvent;
use seascope_core::frame::Frame;
use seascope_core::params::RadarParameters;
use seascope_core::types::{CoastlinePolyline, PolarPoint, TargetFix};
use seascope_display::geometry::ScopeGeometry;
use seascope_display::scene;
use seascope_sim::coastline;
use seascope_sim::kinematics::{MotionSim, TickOutcome};
use seascope_sim::trail::HistoryTrail;

/// Configuration for starting a new session.
pub struct SessionConfig {
    /// RNG seed for determinism. Same seed = same session.
    pub seed: u64,
    /// Initial display surface size in pixels.
    pub surface_px: (f64, f64),
    /// Movement tick period in milliseconds.
    pub tick_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            surface_px: (800.0, 800.0),
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

/// The scope session. Owns parameters, derived state, and the RNG.
pub struct ScopeSession {
    params: RadarParameters,
    geometry: ScopeGeometry,
    motion: MotionSim,
    trail: HistoryTrail,
    coastline: CoastlinePolyline,
    rng: ChaCha8Rng,
    events: Vec<StatusEvent>,
}

impl ScopeSession {
    pub fn new(config: SessionConfig) -> Self {
        let params = RadarParameters::default();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let geometry = ScopeGeometry::new(
            config.surface_px.0,
            config.surface_px.1,
            params.range_scale_nm,
        );
        let coastline = coastline::generate(params.bearing_deg, params.range_scale_nm, &mut rng);
        let trail = HistoryTrail::new(params.trail_max_len);
        Self {
            motion: MotionSim::new(config.tick_ms),
            params,
            geometry,
            trail,
            coastline,
            rng,
            events: Vec::new(),
        }
    }

    pub fn params(&self) -> &RadarParameters {
        &self.params
    }

    pub fn trail(&self) -> &HistoryTrail {
        &self.trail
    }

    pub fn coastline(&self) -> &CoastlinePolyline {
        &self.coastline
    }

    pub fn geometry(&self) -> &ScopeGeometry {
        &self.geometry
    }

    pub fn is_moving(&self) -> bool {
        self.motion.is_moving()
    }

    pub fn tick_ms(&self) -> u64 {
        self.motion.tick_ms()
    }

    /// Drain status events accumulated since the last call.
    pub fn take_events(&mut self) -> Vec<StatusEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply a single control command.
    pub fn handle_command(&mut self, command: ScopeCommand) {
        match command {
            ScopeCommand::SetBearing { deg } => {
                self.params.set_bearing(deg);
                self.record_fix();
            }
            ScopeCommand::SetRange { nm } => {
                self.params.set_range(nm);
                self.record_fix();
            }
            ScopeCommand::SetAspect { deg } => self.params.set_aspect(deg),
            ScopeCommand::SetEpr { m2 } => {
                self.params.set_epr(m2);
                // The trail's deadband drops this unless the position
                // also moved.
                self.record_fix();
            }
            ScopeCommand::SetLength { m } => self.params.set_length(m),
            ScopeCommand::SetWidth { m } => self.params.set_width(m),
            ScopeCommand::SetClutterIntensity { value } => {
                self.params.set_clutter_intensity(value)
            }
            ScopeCommand::RandomizeClutter => {
                let value = self.rng.gen_range(0.05..0.95);
                self.params.set_clutter_intensity(value);
            }
            ScopeCommand::RegenerateCoastline => {
                self.coastline = coastline::generate(
                    self.params.bearing_deg,
                    self.params.range_scale_nm,
                    &mut self.rng,
                );
            }
            ScopeCommand::SetCourse { deg } => self.params.set_course(deg),
            ScopeCommand::SetSpeed { kn } => self.params.set_speed(kn),
            ScopeCommand::StartMovement => self.start_movement(),
            ScopeCommand::StopMovement => self.stop_movement(),
            ScopeCommand::SetTrailMaxLen { len } => {
                self.params.trail_max_len = len;
                self.trail.set_max_len(len);
            }
            ScopeCommand::SetShowTrails { on } => self.params.show_trails = on,
            ScopeCommand::SetShowCoastline { on } => self.params.show_coastline = on,
            ScopeCommand::SetShowDataBlock { on } => self.params.show_data_block = on,
            ScopeCommand::RandomizeTarget => self.randomize_target(),
            ScopeCommand::SurfaceResized {
                width_px,
                height_px,
            } => {
                self.geometry =
                    ScopeGeometry::new(width_px, height_px, self.params.range_scale_nm);
            }
        }
    }

    /// Render one frame from the current state.
    pub fn render(&mut self) -> Frame {
        scene::render(
            &self.params,
            &self.geometry,
            &self.coastline,
            &self.trail,
            &mut self.rng,
        )
    }

    /// Advance the movement integrator one tick. Returns whether the
    /// caller should re-arm the timer (still moving). Terminal outcomes
    /// surface as status events.
    pub fn tick_movement(&mut self) -> bool {
        let position = PolarPoint::new(self.params.bearing_deg, self.params.range_nm);
        match self.motion.tick(position, self.params.range_scale_nm) {
            TickOutcome::Idle => false,
            TickOutcome::Moved(next) => {
                self.params.bearing_deg = next.bearing_deg;
                self.params.range_nm = next.range_nm;
                self.record_fix();
                true
            }
            TickOutcome::LeftScope(next) => {
                self.events.push(StatusEvent::TargetLeftScope {
                    bearing_deg: next.bearing_deg,
                    range_nm: next.range_nm,
                });
                false
            }
            TickOutcome::Fault(message) => {
                self.events.push(StatusEvent::KinematicsFault { message });
                false
            }
        }
    }

    fn start_movement(&mut self) {
        if self.motion.start(self.params.course_deg, self.params.speed_kn) {
            self.events.push(StatusEvent::MovementStarted {
                course_deg: self.params.course_deg,
                speed_kn: self.params.speed_kn,
            });
        }
    }

    fn stop_movement(&mut self) {
        if self.motion.stop() {
            self.events.push(StatusEvent::MovementStopped);
        }
    }

    /// Draw a fresh random target within the legal parameter ranges.
    fn randomize_target(&mut self) {
        let scale = self.params.range_scale_nm;
        let bearing = self.rng.gen_range(0.0..360.0);
        let range = self.rng.gen_range(2.0..(scale - 2.0).max(3.0));
        let epr = self.rng.gen_range(0.1..10.0);
        let length = self.rng.gen_range(5.0..200.0);
        let width = self.rng.gen_range(2.0..50.0);
        let aspect = self.rng.gen_range(0.0..90.0);
        let number = self.rng.gen_range(1..=99);

        self.params.set_bearing(bearing);
        self.params.set_range(range);
        self.params.set_epr(epr);
        self.params.set_length(length);
        self.params.set_width(width);
        self.params.set_aspect(aspect);
        self.params.set_target_number(number);
        self.record_fix();
    }

    /// Record the current position into the trail, subject to its
    /// deadband.
    fn record_fix(&mut self) {
        self.trail.push(TargetFix::new(
            self.params.bearing_deg,
            self.params.range_nm,
            self.params.epr_m2,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_seed(seed: u64) -> ScopeSession {
        ScopeSession::new(SessionConfig {
            seed,
            ..Default::default()
        })
    }

    // ---- Determinism ----

    #[test]
    fn test_same_seed_same_frames() {
        let commands = || {
            vec![
                ScopeCommand::RandomizeTarget,
                ScopeCommand::RandomizeClutter,
                ScopeCommand::RegenerateCoastline,
                ScopeCommand::SetShowDataBlock { on: true },
            ]
        };
        let mut a = session_with_seed(12345);
        let mut b = session_with_seed(12345);
        for (cmd_a, cmd_b) in commands().into_iter().zip(commands()) {
            a.handle_command(cmd_a);
            b.handle_command(cmd_b);
        }
        for _ in 0..5 {
            let frame_a = serde_json::to_string(&a.render()).unwrap();
            let frame_b = serde_json::to_string(&b.render()).unwrap();
            assert_eq!(frame_a, frame_b, "Frames diverged with the same seed");
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = session_with_seed(111);
        let mut b = session_with_seed(222);
        a.handle_command(ScopeCommand::RandomizeTarget);
        b.handle_command(ScopeCommand::RandomizeTarget);
        assert_ne!(
            a.params().bearing_deg,
            b.params().bearing_deg,
            "Different seeds should draw different targets"
        );
    }

    // ---- Randomize ranges ----

    #[test]
    fn test_randomize_target_stays_in_ranges() {
        let mut session = session_with_seed(7);
        for _ in 0..200 {
            session.handle_command(ScopeCommand::RandomizeTarget);
            let p = session.params();
            assert!((0.0..360.0).contains(&p.bearing_deg), "bearing {}", p.bearing_deg);
            assert!(p.range_nm >= 2.0 && p.range_nm <= p.range_scale_nm - 2.0);
            assert!((0.1..=10.0).contains(&p.epr_m2), "epr {}", p.epr_m2);
            assert!((5.0..=200.0).contains(&p.length_m));
            assert!((2.0..=50.0).contains(&p.width_m));
            assert!((0.0..=90.0).contains(&p.aspect_deg));
            assert!((1..=99).contains(&p.target_number));
        }
    }

    #[test]
    fn test_randomize_clutter_stays_in_range() {
        let mut session = session_with_seed(8);
        for _ in 0..100 {
            session.handle_command(ScopeCommand::RandomizeClutter);
            let value = session.params().clutter_intensity;
            assert!((0.05..=0.95).contains(&value), "intensity {value}");
        }
    }

    // ---- Trail feeding ----

    #[test]
    fn test_position_edits_feed_trail_through_deadband() {
        let mut session = session_with_seed(1);
        session.handle_command(ScopeCommand::SetBearing { deg: 50.0 });
        assert_eq!(session.trail().len(), 1);

        // EPR-only change: recorded call, but the deadband drops it.
        session.handle_command(ScopeCommand::SetEpr { m2: 9.0 });
        assert_eq!(session.trail().len(), 1);

        session.handle_command(ScopeCommand::SetBearing { deg: 55.0 });
        assert_eq!(session.trail().len(), 2);
        assert_eq!(session.trail().latest().unwrap().epr_m2, 9.0);
    }

    #[test]
    fn test_trail_resize_clears() {
        let mut session = session_with_seed(2);
        for deg in [10.0, 30.0, 50.0, 70.0] {
            session.handle_command(ScopeCommand::SetBearing { deg });
        }
        assert_eq!(session.trail().len(), 4);
        session.handle_command(ScopeCommand::SetTrailMaxLen { len: 2 });
        assert_eq!(session.trail().len(), 0);
        assert_eq!(session.params().trail_max_len, 2);
    }

    // ---- Movement ----

    #[test]
    fn test_movement_lifecycle_events() {
        let mut session = session_with_seed(3);
        session.handle_command(ScopeCommand::StartMovement);
        assert!(session.is_moving());
        let events = session.take_events();
        assert!(matches!(events[0], StatusEvent::MovementStarted { .. }));

        // Starting again while moving emits nothing.
        session.handle_command(ScopeCommand::StartMovement);
        assert!(session.take_events().is_empty());

        session.handle_command(ScopeCommand::StopMovement);
        assert!(!session.is_moving());
        assert_eq!(session.take_events(), vec![StatusEvent::MovementStopped]);

        // Stop is idempotent.
        session.handle_command(ScopeCommand::StopMovement);
        assert!(session.take_events().is_empty());
    }

    #[test]
    fn test_movement_advances_position_and_trail() {
        let mut session = ScopeSession::new(SessionConfig {
            seed: 4,
            tick_ms: 1000,
            ..Default::default()
        });
        session.handle_command(ScopeCommand::SetBearing { deg: 0.0 });
        session.handle_command(ScopeCommand::SetRange { nm: 5.0 });
        session.handle_command(ScopeCommand::SetCourse { deg: 0.0 });
        session.handle_command(ScopeCommand::SetSpeed { kn: 3600.0 });
        let fixes_before = session.trail().len();

        session.handle_command(ScopeCommand::StartMovement);
        assert!(session.tick_movement(), "First tick should keep moving");
        assert!((session.params().range_nm - 6.0).abs() < 1e-9);
        assert!(session.params().bearing_deg.abs() < 1e-9);
        assert_eq!(session.trail().len(), fixes_before + 1);
    }

    #[test]
    fn test_scope_exit_emits_event_and_stops() {
        let mut session = session_with_seed(5);
        session.handle_command(ScopeCommand::SetBearing { deg: 0.0 });
        session.handle_command(ScopeCommand::SetRange {
            nm: session.params().range_scale_nm - 0.4,
        });
        session.handle_command(ScopeCommand::SetCourse { deg: 0.0 });
        session.handle_command(ScopeCommand::SetSpeed { kn: 3600.0 });
        session.handle_command(ScopeCommand::StartMovement);
        session.take_events();

        let exit_range = session.params().range_nm;
        assert!(!session.tick_movement(), "Exit tick must not re-arm");
        assert!(!session.is_moving());
        let events = session.take_events();
        assert!(
            matches!(events.as_slice(), [StatusEvent::TargetLeftScope { .. }]),
            "Expected scope-exit event, got {events:?}"
        );
        // Exit does not commit the out-of-scope position.
        assert_eq!(session.params().range_nm, exit_range);

        // A stale tick after the exit is a no-op with no events.
        assert!(!session.tick_movement());
        assert!(session.take_events().is_empty());
    }

    // ---- Surface ----

    #[test]
    fn test_resize_rescales_frames() {
        let mut session = session_with_seed(6);
        let before = session.render().surface_px;
        session.handle_command(ScopeCommand::SurfaceResized {
            width_px: 400.0,
            height_px: 400.0,
        });
        let after = session.render().surface_px;
        assert_eq!(before, 800.0);
        assert_eq!(after, 400.0);
    }

    #[test]
    fn test_regenerate_replaces_coastline() {
        let mut session = session_with_seed(9);
        let before = session.coastline().clone();
        session.handle_command(ScopeCommand::RegenerateCoastline);
        let after = session.coastline();
        assert_eq!(after.len(), before.len());
        assert_ne!(&before, after, "Regeneration should draw a new shoreline");
    }
}
