//! # Scene Nodes
//!
//! Accessor traits the adjuster drives, plus [`SceneNode`], a plain
//! in-memory node implementing them.

use glam::DVec3;
use pivot_core::{NodeTransform, ShapeDescriptor};
use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};
use crate::storage::MeshHandle;

// =============================================================================
// ACCESSOR TRAITS
// =============================================================================

/// Access to a node's world placement and active mesh.
pub trait NodeTransformAccess {
    /// Current local-to-world transform.
    fn transform(&self) -> NodeTransform;

    /// Moves the node in world space.
    fn set_position(&mut self, position: DVec3);

    /// Active mesh, if any.
    fn mesh(&self) -> Option<MeshHandle>;

    /// Replaces the active mesh.
    fn set_mesh(&mut self, mesh: MeshHandle);
}

/// Access to a node's auxiliary local-space shapes.
///
/// Indices run over centered primitive shapes only. Mesh-backed shapes have
/// no center and are rebound wholesale.
pub trait ShapeAccess {
    /// Number of centered shapes.
    fn shape_count(&self) -> usize;

    /// Shape at `index`. Must be `Some` for every index below
    /// [`shape_count`](Self::shape_count).
    fn shape(&self, index: usize) -> Option<ShapeDescriptor>;

    /// Replaces the center of the shape at `index`.
    fn set_shape_center(&mut self, index: usize, center: DVec3);

    /// Points every mesh-backed shape at `mesh`; returns how many changed.
    fn rebind_mesh_shapes(&mut self, mesh: MeshHandle) -> usize;

    /// All centered shapes, in index order.
    ///
    /// Fails with [`SceneError::MissingShape`] at the first index below
    /// `shape_count` that has no shape, so results never shift indices.
    fn shapes(&self) -> SceneResult<Vec<ShapeDescriptor>> {
        (0..self.shape_count())
            .map(|index| self.shape(index).ok_or(SceneError::MissingShape { index }))
            .collect()
    }
}

// =============================================================================
// SCENE NODE
// =============================================================================

/// Collider attached to a [`SceneNode`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collider {
    /// Box, sphere or capsule with a local center.
    Primitive(ShapeDescriptor),
    /// Collider built from a stored mesh.
    Mesh { mesh: Option<MeshHandle> },
}

impl Collider {
    fn as_primitive(&self) -> Option<&ShapeDescriptor> {
        match self {
            Collider::Primitive(shape) => Some(shape),
            Collider::Mesh { .. } => None,
        }
    }

    fn as_primitive_mut(&mut self) -> Option<&mut ShapeDescriptor> {
        match self {
            Collider::Primitive(shape) => Some(shape),
            Collider::Mesh { .. } => None,
        }
    }
}

/// In-memory scene node.
///
/// # Example
///
/// ```rust
/// use pivot_scene::{Collider, SceneNode, ShapeAccess};
/// use pivot_core::ShapeDescriptor;
/// use glam::DVec3;
///
/// let node = SceneNode::new("Barrel")
///     .with_position(DVec3::new(0.0, 1.0, 0.0))
///     .with_collider(Collider::Primitive(ShapeDescriptor::Sphere {
///         center: DVec3::ZERO,
///         radius: 0.5,
///     }))
///     .with_collider(Collider::Mesh { mesh: None });
/// assert_eq!(node.shape_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    /// Display name
    pub name: String,
    /// World placement
    pub transform: NodeTransform,
    /// Active mesh
    pub mesh: Option<MeshHandle>,
    /// Attached colliders
    pub colliders: Vec<Collider>,
}

impl SceneNode {
    /// Creates an empty node at the origin.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: NodeTransform::IDENTITY,
            mesh: None,
            colliders: Vec::new(),
        }
    }

    /// Sets the active mesh.
    pub fn with_mesh(mut self, mesh: MeshHandle) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// Sets the full transform.
    pub fn with_transform(mut self, transform: NodeTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Sets the world position.
    pub fn with_position(mut self, position: DVec3) -> Self {
        self.transform.position = position;
        self
    }

    /// Attaches a collider.
    pub fn with_collider(mut self, collider: Collider) -> Self {
        self.colliders.push(collider);
        self
    }
}

impl NodeTransformAccess for SceneNode {
    fn transform(&self) -> NodeTransform {
        self.transform
    }

    fn set_position(&mut self, position: DVec3) {
        self.transform.position = position;
    }

    fn mesh(&self) -> Option<MeshHandle> {
        self.mesh
    }

    fn set_mesh(&mut self, mesh: MeshHandle) {
        self.mesh = Some(mesh);
    }
}

impl ShapeAccess for SceneNode {
    fn shape_count(&self) -> usize {
        self.colliders
            .iter()
            .filter(|c| c.as_primitive().is_some())
            .count()
    }

    fn shape(&self, index: usize) -> Option<ShapeDescriptor> {
        self.colliders
            .iter()
            .filter_map(Collider::as_primitive)
            .nth(index)
            .copied()
    }

    fn set_shape_center(&mut self, index: usize, center: DVec3) {
        if let Some(shape) = self
            .colliders
            .iter_mut()
            .filter_map(Collider::as_primitive_mut)
            .nth(index)
        {
            *shape = shape.with_center(center);
        }
    }

    fn rebind_mesh_shapes(&mut self, new_mesh: MeshHandle) -> usize {
        let mut rebound = 0;
        for collider in &mut self.colliders {
            if let Collider::Mesh { mesh } = collider {
                *mesh = Some(new_mesh);
                rebound += 1;
            }
        }
        rebound
    }
}
