use std::fmt;

use blokk_engine::geometry::GeometryError;

use crate::kind::ShapeKind;

/// Failure while registering, extruding or rendering a shape.
///
/// Every variant names the shape kind; `index` is the registry position the
/// shape occupies (or would have occupied), `None` for shapes outside the
/// registry such as the default shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// The canonical attribute sample cannot be serialized.
    Registration { kind: ShapeKind, index: Option<usize>, reason: String },
    /// The generated markup did not parse into at least one path.
    Parse { kind: ShapeKind, index: Option<usize>, reason: String },
    /// The outline yields no derived shape, or extrusion failed.
    Geometry { kind: ShapeKind, index: Option<usize>, source: GeometryError },
    /// Thumbnail rasterization failed.
    Render { kind: ShapeKind, reason: String },
}

impl ShapeError {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeError::Registration { kind, .. }
            | ShapeError::Parse { kind, .. }
            | ShapeError::Geometry { kind, .. }
            | ShapeError::Render { kind, .. } => *kind,
        }
    }
}

struct Label(ShapeKind, Option<usize>);

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.1 {
            Some(i) => write!(f, "shape #{i} ({})", self.0),
            None => write!(f, "shape ({})", self.0),
        }
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::Registration { kind, index, reason } => {
                write!(f, "{}: invalid attributes: {reason}", Label(*kind, *index))
            }
            ShapeError::Parse { kind, index, reason } => {
                write!(f, "{}: no outline produced: {reason}", Label(*kind, *index))
            }
            ShapeError::Geometry { kind, index, source } => {
                write!(f, "{}: geometry failed: {source}", Label(*kind, *index))
            }
            ShapeError::Render { kind, reason } => {
                write!(f, "{}: thumbnail failed: {reason}", Label(*kind, None))
            }
        }
    }
}

impl std::error::Error for ShapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShapeError::Geometry { source, .. } => Some(source),
            _ => None,
        }
    }
}
