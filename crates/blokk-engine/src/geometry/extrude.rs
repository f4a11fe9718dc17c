//! Straight extrusion of a planar shape along +Z.
//!
//! Layout of the produced mesh:
//! - front cap at `z = 0`, normal -Z
//! - back cap at `z = depth`, normal +Z
//! - one quad per contour edge for the side walls, normal pointing away
//!   from the filled region

use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{BuffersBuilder, FillOptions, FillRule, FillTessellator, FillVertex, VertexBuffers};

use crate::coords::{Vec2, Vec3};

use super::{GeometryError, Geometry, PlanarShape, Vertex};

/// Extrusion parameters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ExtrudeOptions {
    /// Distance between the two caps.
    pub depth: f32,
    /// Must stay `false`; edges are always sharp.
    pub bevel_enabled: bool,
}

impl Default for ExtrudeOptions {
    fn default() -> Self {
        Self { depth: 1.0, bevel_enabled: false }
    }
}

impl ExtrudeOptions {
    pub fn with_depth(depth: f32) -> Self {
        Self { depth, ..Self::default() }
    }
}

/// Extrudes `shape` into a closed, flat-shaded triangle mesh.
///
/// Every call allocates a fresh [`Geometry`].
pub fn extrude(shape: &PlanarShape, options: &ExtrudeOptions) -> Result<Geometry, GeometryError> {
    if options.bevel_enabled {
        return Err(GeometryError::BevelUnsupported);
    }
    if !(options.depth.is_finite() && options.depth > 0.0) {
        return Err(GeometryError::InvalidDepth(options.depth));
    }
    if shape.outer.is_degenerate() {
        return Err(GeometryError::EmptyOutline);
    }

    let (cap_points, cap_triangles) = tessellate_cap(shape)?;
    let edge_count: usize = shape.contours().map(|c| c.len()).sum();

    let mut mesh = Geometry::with_capacity(
        cap_points.len() * 2 + edge_count * 4,
        cap_triangles.len() * 6 + edge_count * 6,
    );

    push_cap(&mut mesh, &cap_points, &cap_triangles, 0.0, false);
    push_cap(&mut mesh, &cap_points, &cap_triangles, options.depth, true);

    for contour in shape.contours() {
        push_walls(&mut mesh, contour.points(), options.depth);
    }

    log::trace!(
        "extruded shape: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

// ── caps ──────────────────────────────────────────────────────────────────

fn tessellate_cap(shape: &PlanarShape) -> Result<(Vec<Vec2>, Vec<[u32; 3]>), GeometryError> {
    let mut builder = Path::builder();
    for contour in shape.contours() {
        let Some((first, rest)) = contour.points().split_first() else {
            continue;
        };
        builder.begin(point(first.x, first.y));
        for p in rest {
            builder.line_to(point(p.x, p.y));
        }
        builder.end(true);
    }
    let path = builder.build();

    let mut buffers: VertexBuffers<Vec2, u32> = VertexBuffers::new();
    let options = FillOptions::default().with_fill_rule(FillRule::EvenOdd);
    FillTessellator::new()
        .tessellate_path(
            &path,
            &options,
            &mut BuffersBuilder::new(&mut buffers, |v: FillVertex| {
                let p = v.position();
                Vec2::new(p.x, p.y)
            }),
        )
        .map_err(|e| GeometryError::Tessellation(format!("{e:?}")))?;

    if buffers.indices.is_empty() {
        return Err(GeometryError::EmptyOutline);
    }

    let triangles = buffers
        .indices
        .chunks_exact(3)
        .map(|t| [t[0], t[1], t[2]])
        .collect();
    Ok((buffers.vertices, triangles))
}

/// Emits one cap. `facing_up` caps wind counter-clockwise seen from +Z.
fn push_cap(mesh: &mut Geometry, points: &[Vec2], triangles: &[[u32; 3]], z: f32, facing_up: bool) {
    let normal = if facing_up { Vec3::Z } else { -Vec3::Z };
    let base = mesh.vertex_count() as u32;
    for p in points {
        mesh.push_vertex(Vertex::new(Vec3::new(p.x, p.y, z), normal));
    }
    for &[a, b, c] in triangles {
        let (pa, pb, pc) = (points[a as usize], points[b as usize], points[c as usize]);
        let ccw = (pb - pa).cross(pc - pa) > 0.0;
        if ccw == facing_up {
            mesh.push_triangle(base + a, base + b, base + c);
        } else {
            mesh.push_triangle(base + a, base + c, base + b);
        }
    }
}

// ── side walls ────────────────────────────────────────────────────────────

fn push_walls(mesh: &mut Geometry, ring: &[Vec2], depth: f32) {
    let n = ring.len();
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        let edge = b - a;
        let len = edge.length();
        if len <= f32::EPSILON {
            continue;
        }
        let normal = Vec3::new(edge.y / len, -edge.x / len, 0.0);

        let a0 = mesh.push_vertex(Vertex::new(Vec3::new(a.x, a.y, 0.0), normal));
        let b0 = mesh.push_vertex(Vertex::new(Vec3::new(b.x, b.y, 0.0), normal));
        let b1 = mesh.push_vertex(Vertex::new(Vec3::new(b.x, b.y, depth), normal));
        let a1 = mesh.push_vertex(Vertex::new(Vec3::new(a.x, a.y, depth), normal));
        mesh.push_triangle(a0, b0, b1);
        mesh.push_triangle(a0, b1, a1);
    }
}
