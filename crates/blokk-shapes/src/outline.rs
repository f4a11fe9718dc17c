//! Outline extraction: markup → `usvg` tree → sampled contours.

use std::fmt;

use blokk_engine::coords::Vec2;
use blokk_engine::geometry::{group_contours, Contour, PlanarShape};
use lyon::geom::{CubicBezierSegment, QuadraticBezierSegment};
use lyon::math::point;
use resvg::usvg;
use resvg::usvg::tiny_skia_path::{self, PathSegment};

/// Line segments per curve when sampling quadratic and cubic segments.
pub const CURVE_SEGMENTS: u32 = 12;

/// Why markup could not be turned into an outline.
#[derive(Debug, Clone, PartialEq)]
pub enum OutlineError {
    /// `usvg` rejected the document.
    Svg(String),
    /// The document parsed but contains no drawable path.
    NoPath,
    /// The first path contains no closed region with area.
    NoShape,
}

impl fmt::Display for OutlineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutlineError::Svg(msg) => write!(f, "svg parse error: {msg}"),
            OutlineError::NoPath => f.write_str("markup contains no path"),
            OutlineError::NoShape => f.write_str("first path encloses no area"),
        }
    }
}

impl std::error::Error for OutlineError {}

/// Sampled contours of one parsed path.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlinePath {
    contours: Vec<Contour>,
}

impl OutlinePath {
    #[inline]
    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    /// Filled regions of this path, outer rings with their holes.
    pub fn to_shapes(&self) -> Vec<PlanarShape> {
        group_contours(&self.contours)
    }
}

/// Planar outline of a shape at unit scale.
///
/// Holds every path found in the parsed markup; geometry is derived from the
/// first shape of the first path.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    paths: Vec<OutlinePath>,
    primary: PlanarShape,
}

impl Outline {
    /// Parses a complete SVG document.
    pub fn from_svg(svg: &str) -> Result<Self, OutlineError> {
        let tree = usvg::Tree::from_str(svg, &usvg::Options::default())
            .map_err(|e| OutlineError::Svg(e.to_string()))?;

        let mut raw = Vec::new();
        collect_paths(tree.root(), &mut raw);
        if raw.is_empty() {
            return Err(OutlineError::NoPath);
        }

        let paths: Vec<OutlinePath> = raw
            .iter()
            .map(|p| OutlinePath { contours: sample_contours(p, CURVE_SEGMENTS) })
            .collect();

        let primary = paths[0]
            .to_shapes()
            .into_iter()
            .next()
            .ok_or(OutlineError::NoShape)?;

        Ok(Self { paths, primary })
    }

    #[inline]
    pub fn paths(&self) -> &[OutlinePath] {
        &self.paths
    }

    #[inline]
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// First derived shape of the first path; the one that gets extruded.
    #[inline]
    pub fn primary_shape(&self) -> &PlanarShape {
        &self.primary
    }
}

/// Depth-first, document-order collection with absolute transforms applied.
fn collect_paths(group: &usvg::Group, out: &mut Vec<tiny_skia_path::Path>) {
    for node in group.children() {
        match node {
            usvg::Node::Path(path) => {
                if let Some(data) = path.data().clone().transform(path.abs_transform()) {
                    out.push(data);
                }
            }
            usvg::Node::Group(g) => collect_paths(g, out),
            _ => {}
        }
    }
}

fn sample_contours(path: &tiny_skia_path::Path, segments: u32) -> Vec<Contour> {
    let mut contours = Vec::new();
    let mut ring: Vec<Vec2> = Vec::new();
    let mut last = Vec2::zero();

    let to_vec = |p: tiny_skia_path::Point| Vec2::new(p.x, p.y);
    let steps = (1..=segments).map(move |i| i as f32 / segments as f32);

    for segment in path.segments() {
        match segment {
            PathSegment::MoveTo(p) => {
                if !ring.is_empty() {
                    contours.push(Contour::new(ring.drain(..)));
                }
                last = to_vec(p);
                ring.push(last);
            }
            PathSegment::LineTo(p) => {
                last = to_vec(p);
                ring.push(last);
            }
            PathSegment::QuadTo(c, p) => {
                let curve = QuadraticBezierSegment {
                    from: point(last.x, last.y),
                    ctrl: point(c.x, c.y),
                    to: point(p.x, p.y),
                };
                ring.extend(steps.clone().map(|t| {
                    let s = curve.sample(t);
                    Vec2::new(s.x, s.y)
                }));
                last = to_vec(p);
            }
            PathSegment::CubicTo(c1, c2, p) => {
                let curve = CubicBezierSegment {
                    from: point(last.x, last.y),
                    ctrl1: point(c1.x, c1.y),
                    ctrl2: point(c2.x, c2.y),
                    to: point(p.x, p.y),
                };
                ring.extend(steps.clone().map(|t| {
                    let s = curve.sample(t);
                    Vec2::new(s.x, s.y)
                }));
                last = to_vec(p);
            }
            PathSegment::Close => {
                if !ring.is_empty() {
                    contours.push(Contour::new(ring.drain(..)));
                }
            }
        }
    }
    if !ring.is_empty() {
        contours.push(Contour::new(ring));
    }
    contours
}
