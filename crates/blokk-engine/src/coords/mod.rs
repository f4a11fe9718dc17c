//! Coordinate types shared by outlines and meshes.
//!
//! Outline space:
//! - Unit square for the shipped catalog (`0..1` on both axes)
//! - Origin top-left, +X right, +Y down (SVG convention)
//!
//! Mesh space reuses outline X/Y unchanged and extrudes along +Z.

mod bounds;
mod vec2;
mod vec3;

pub use bounds::Bounds3;
pub use vec2::Vec2;
pub use vec3::Vec3;
