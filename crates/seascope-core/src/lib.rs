//! Core types and definitions for the SEASCOPE radar scope simulator.
//!
//! This crate defines the vocabulary shared across all other crates:
//! scope parameters, commands, status events, frame primitives, and
//! constants. It has no dependency on any windowing or widget toolkit.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;
pub mod frame;
pub mod params;
pub mod types;
