//! Blokk engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by higher layers:
//! planar/spatial coordinate types, extrusion of outlines into triangle
//! meshes, and logger initialization.

pub mod coords;
pub mod geometry;
pub mod logging;
