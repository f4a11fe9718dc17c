use bytemuck::{Pod, Zeroable};

use crate::coords::{Bounds3, Vec3};

// ── vertex ────────────────────────────────────────────────────────────────

/// Mesh vertex laid out for direct upload into a GPU vertex buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    #[inline]
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self { position: position.to_array(), normal: normal.to_array() }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::from(self.position)
    }

    #[inline]
    pub fn normal(&self) -> Vec3 {
        Vec3::from(self.normal)
    }
}

// ── geometry ──────────────────────────────────────────────────────────────

/// Indexed triangle mesh.
///
/// Faces are flat shaded: vertices are not shared between caps and side
/// walls, so every vertex normal equals its face normal. Triangles wind
/// counter-clockwise when seen from the side their normal points to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    bounds: Bounds3,
}

impl Geometry {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
            bounds: Bounds3::EMPTY,
        }
    }

    /// Appends a vertex and returns its index.
    #[inline]
    pub fn push_vertex(&mut self, v: Vertex) -> u32 {
        let index = self.vertices.len() as u32;
        self.bounds.include(v.position());
        self.vertices.push(v);
        index
    }

    #[inline]
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        debug_assert!(
            (a.max(b).max(c) as usize) < self.vertices.len(),
            "push_triangle index out of range"
        );
        self.indices.extend_from_slice(&[a, b, c]);
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    pub fn bounds(&self) -> Bounds3 {
        self.bounds
    }

    /// Raw vertex buffer contents.
    #[inline]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index buffer contents (`u32` indices).
    #[inline]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Iterates triangle corner positions.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| {
            [
                self.vertices[t[0] as usize].position(),
                self.vertices[t[1] as usize].position(),
                self.vertices[t[2] as usize].position(),
            ]
        })
    }

    /// Enclosed volume via the divergence theorem.
    ///
    /// Only meaningful for closed meshes; positive when triangles wind
    /// outward.
    pub fn signed_volume(&self) -> f32 {
        self.triangles()
            .map(|[a, b, c]| a.dot(b.cross(c)))
            .sum::<f32>()
            / 6.0
    }

    /// Total triangle area.
    pub fn surface_area(&self) -> f32 {
        self.triangles()
            .map(|[a, b, c]| (b - a).cross(c - a).length() * 0.5)
            .sum()
    }
}
