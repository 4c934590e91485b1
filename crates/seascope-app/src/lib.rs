//! SEASCOPE headless application.
//!
//! Wires the simulation and display crates into a scope session with a
//! command surface, plus the movement loop thread a UI (or the demo
//! binary) drives it through.

pub mod session;
pub mod sim_loop;

pub use seascope_core as core;
