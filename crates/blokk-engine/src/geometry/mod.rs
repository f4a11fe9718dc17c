//! Planar outlines and their extrusion into triangle meshes.
//!
//! Responsibilities:
//! - clean and classify closed contours (`contour`)
//! - hold indexed, GPU-uploadable meshes (`mesh`)
//! - build straight, non-beveled extrusions (`extrude`)

mod contour;
mod error;
mod extrude;
mod mesh;

pub use contour::{group_contours, Contour, PlanarShape};
pub use error::GeometryError;
pub use extrude::{extrude, ExtrudeOptions};
pub use mesh::{Geometry, Vertex};
