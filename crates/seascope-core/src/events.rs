//! Status events emitted by the scope session for UI feedback.

use serde::{Deserialize, Serialize};

/// Transient status conditions surfaced to the operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StatusEvent {
    /// Movement simulation started with the captured course/speed.
    MovementStarted { course_deg: f64, speed_kn: f64 },
    /// Movement simulation halted by command.
    MovementStopped,
    /// The target crossed the outer ring and movement halted.
    TargetLeftScope { bearing_deg: f64, range_nm: f64 },
    /// The movement tick produced a non-finite position; movement was
    /// forced to a safe stop.
    KinematicsFault { message: String },
}
