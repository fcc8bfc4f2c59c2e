//! # Pivot Application
//!
//! Moves a mesh's origin to a chosen local point and reports what the owning
//! node must change to stay visually in place.
//!
//! ## Algorithm
//!
//! 1. `offset = -pivot`
//! 2. Every vertex moves by `offset`
//! 3. Bounds are recomputed from the moved vertices
//! 4. Vertex normals are recomputed from the unchanged triangle list
//! 5. `world_compensation` is `pivot` mapped through the node's rotation and
//!    scale (as a direction, translation excluded)
//! 6. Every shape center moves by `offset`

use config::constants::adjusted_mesh_name;
use glam::DVec3;
use pivot_mesh::{BoundingBox, Mesh};

use crate::error::{PivotError, PivotResult};
use crate::shape::ShapeDescriptor;
use crate::transform::NodeTransform;

/// Borrowed view of the node that owns the mesh.
#[derive(Debug, Clone, Copy)]
pub struct NodePlacement<'a> {
    /// Current local-to-world placement
    pub transform: &'a NodeTransform,
    /// Local-space shapes that must track the vertices
    pub shapes: &'a [ShapeDescriptor],
}

impl<'a> NodePlacement<'a> {
    /// Creates a placement view.
    pub fn new(transform: &'a NodeTransform, shapes: &'a [ShapeDescriptor]) -> Self {
        Self { transform, shapes }
    }
}

/// Everything a caller needs to commit a pivot change.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotAdjustment {
    /// New mesh, renamed with the adjusted suffix
    pub mesh: Mesh,
    /// Bounds of the new mesh
    pub bounds: BoundingBox,
    /// Local-space translation applied to vertices and shape centers
    pub offset: DVec3,
    /// Amount to add to the node's world position
    pub world_compensation: DVec3,
    /// Shapes with updated centers, in input order
    pub shapes: Vec<ShapeDescriptor>,
}

impl PivotAdjustment {
    /// Node transform after adding the compensation to its position.
    pub fn compensated_transform(&self, transform: &NodeTransform) -> NodeTransform {
        NodeTransform {
            position: transform.position + self.world_compensation,
            ..*transform
        }
    }
}

/// Makes `pivot` (in the mesh's current local space) the new origin.
///
/// The input mesh is left untouched. Fails with
/// [`PivotError::InvalidMesh`] when the mesh has no vertices or a triangle
/// points past the vertex buffer, and with [`PivotError::NonFinitePivot`]
/// when `pivot` has a NaN or infinite component.
///
/// # Example
///
/// ```rust
/// use pivot_core::{apply_pivot, NodePlacement, NodeTransform};
/// use pivot_mesh::Mesh;
/// use glam::DVec3;
///
/// let mesh = Mesh::from_buffers("dot", vec![DVec3::new(2.0, 3.0, 4.0)], Vec::new());
/// let transform = NodeTransform::IDENTITY;
/// let adjustment = apply_pivot(
///     &mesh,
///     DVec3::new(2.0, 3.0, 4.0),
///     &NodePlacement::new(&transform, &[]),
/// )
/// .unwrap();
/// assert_eq!(adjustment.mesh.vertices(), &[DVec3::ZERO]);
/// ```
pub fn apply_pivot(
    mesh: &Mesh,
    pivot: DVec3,
    placement: &NodePlacement<'_>,
) -> PivotResult<PivotAdjustment> {
    mesh.validate()?;
    if !pivot.is_finite() {
        log::warn!("rejected non-finite pivot {pivot:?} for '{}'", mesh.name());
        return Err(PivotError::NonFinitePivot { pivot });
    }

    let offset = -pivot;

    let mut adjusted = mesh.translated(offset);
    adjusted.recalculate_normals()?;
    adjusted.set_name(adjusted_mesh_name(mesh.name()));
    let bounds = adjusted.bounding_box();

    let world_compensation = placement.transform.transform_vector(pivot);

    let shapes = placement
        .shapes
        .iter()
        .map(|shape| shape.translated(offset))
        .collect();

    log::debug!(
        "pivot of '{}' moved to {:?}: {} vertices, {} shapes, compensation {:?}",
        mesh.name(),
        pivot,
        adjusted.vertex_count(),
        placement.shapes.len(),
        world_compensation
    );

    Ok(PivotAdjustment {
        mesh: adjusted,
        bounds,
        offset,
        world_compensation,
        shapes,
    })
}

/// World-space location of a local pivot candidate, for previews.
#[inline]
pub fn preview_world_position(transform: &NodeTransform, pivot: DVec3) -> DVec3 {
    transform.transform_point(pivot)
}
