//! # Mesh Data Structure
//!
//! Core mesh representation with vertices, triangles, and optional normals.

use config::constants::DEGENERATE_NORMAL_EPSILON;
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::bounds::BoundingBox;
use crate::error::{MeshError, MeshResult};

/// A named triangle mesh with vertices and indices.
///
/// All geometry calculations use f64. The bounding box is derived from the
/// vertex buffer on demand, so it can never go stale.
///
/// # Example
///
/// ```rust
/// use pivot_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::named("Tri");
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Mesh {
    /// Display name, also used to derive asset names
    name: String,
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Optional vertex normals, one per vertex
    normals: Option<Vec<DVec3>>,
}

impl Mesh {
    /// Creates an empty, unnamed mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty mesh with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Creates a mesh from existing buffers.
    ///
    /// Indices are not checked here; call [`Mesh::validate`] before using
    /// the result where out-of-range indices matter.
    pub fn from_buffers(
        name: impl Into<String>,
        vertices: Vec<DVec3>,
        triangles: Vec<[u32; 3]>,
    ) -> Self {
        Self {
            name: name.into(),
            vertices,
            triangles,
            normals: None,
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(name: impl Into<String>, vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            name: name.into(),
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            normals: None,
        }
    }

    /// Returns the mesh name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the mesh.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    ///
    /// Any stored normals are dropped since they no longer match the
    /// vertex buffer.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.normals = None;
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the vertex normals, if computed.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// An empty mesh reports [`BoundingBox::ZERO`].
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(self.vertices.iter().copied()).unwrap_or(BoundingBox::ZERO)
    }

    /// Recomputes per-vertex normals from the triangle list.
    ///
    /// Area-weighted: each face adds its unnormalized cross product to its
    /// three vertices, and the sums are normalized. Vertices that belong to
    /// no non-degenerate face get a zero normal.
    pub fn recalculate_normals(&mut self) -> MeshResult<()> {
        self.validate_indices()?;

        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];

            let normal = (v1 - v0).cross(v2 - v0);

            normals[tri[0] as usize] += normal;
            normals[tri[1] as usize] += normal;
            normals[tri[2] as usize] += normal;
        }

        for normal in &mut normals {
            *normal = if normal.length_squared() > DEGENERATE_NORMAL_EPSILON {
                normal.normalize()
            } else {
                DVec3::ZERO
            };
        }

        self.normals = Some(normals);
        Ok(())
    }

    /// Translates every vertex by `offset`.
    ///
    /// Normals are direction vectors and are unaffected by translation.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Returns a copy of this mesh translated by `offset`.
    pub fn translated(&self, offset: DVec3) -> Self {
        let mut mesh = self.clone();
        mesh.translate(offset);
        mesh
    }

    /// Checks that every triangle index refers to an existing vertex.
    pub fn validate_indices(&self) -> MeshResult<()> {
        let vertex_count = self.vertices.len();

        for (triangle, tri) in self.triangles.iter().enumerate() {
            if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::IndexOutOfRange {
                    triangle,
                    index,
                    vertex_count,
                });
            }
        }

        Ok(())
    }

    /// Validates the mesh for pivot adjustment.
    ///
    /// Checks:
    /// - The mesh has at least one vertex
    /// - All triangle indices are valid
    pub fn validate(&self) -> MeshResult<()> {
        if self.vertices.is_empty() {
            return Err(MeshError::Empty);
        }
        self.validate_indices()
    }
}
