//! Scope geometry and scene rendering for SEASCOPE.
//!
//! `geometry` owns the single polar→screen conversion every draw path
//! goes through; `scene` composes one frame's display list from the
//! current parameters and session state.

pub mod geometry;
pub mod scene;
