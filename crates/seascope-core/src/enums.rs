//! Enumeration types used throughout the simulator.

use serde::{Deserialize, Serialize};

/// Movement integrator state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionState {
    /// No movement scheduled; ticks are no-ops.
    #[default]
    Stopped,
    /// Target advances along the captured course each tick.
    Moving,
}

/// Hull construction material, used when estimating EPR from physical
/// dimensions. Coefficients are relative to bare metal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HullMaterial {
    #[default]
    Metal,
    Steel,
    Aluminum,
    Iron,
    Plastic,
    Fiberglass,
    Wood,
    Rubber,
    Composite,
}

impl HullMaterial {
    /// Radar reflectivity coefficient relative to bare metal.
    pub fn reflectivity(&self) -> f64 {
        match self {
            HullMaterial::Metal => 1.0,
            HullMaterial::Steel => 0.95,
            HullMaterial::Aluminum => 0.9,
            HullMaterial::Iron => 0.92,
            HullMaterial::Plastic => 0.1,
            HullMaterial::Fiberglass => 0.08,
            HullMaterial::Wood => 0.05,
            HullMaterial::Rubber => 0.03,
            HullMaterial::Composite => 0.07,
        }
    }
}
