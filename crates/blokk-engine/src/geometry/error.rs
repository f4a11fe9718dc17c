use std::fmt;

/// Failure while turning an outline into a mesh.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The outline produced no contour with a non-zero area.
    EmptyOutline,
    /// Extrusion depth must be finite and strictly positive.
    InvalidDepth(f32),
    /// Beveled edges are not generated; callers must keep `bevel_enabled` off.
    BevelUnsupported,
    /// The cap tessellator rejected the contours.
    Tessellation(String),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::EmptyOutline => write!(f, "outline has no derived shape"),
            GeometryError::InvalidDepth(d) => write!(f, "invalid extrusion depth {d}"),
            GeometryError::BevelUnsupported => write!(f, "beveled extrusion is not supported"),
            GeometryError::Tessellation(msg) => write!(f, "cap tessellation failed: {msg}"),
        }
    }
}

impl std::error::Error for GeometryError {}
