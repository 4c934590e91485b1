//! Simulation models for the SEASCOPE radar scope.
//!
//! Everything that decides what appears on the scope: the target signature
//! model, the stochastic sea-clutter field, the procedural coastline, the
//! movement integrator, and the position-history trail. All randomness is
//! drawn from an injected `ChaCha8Rng` so a seed fully determines output.

pub mod clutter;
pub mod coastline;
pub mod kinematics;
pub mod signature;
pub mod trail;
