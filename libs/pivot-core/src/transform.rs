//! # Node Transform
//!
//! World placement of the node that owns a mesh.
//!
//! The pivot compensation needs the linear part (rotation and scale) of the
//! local-to-world transform; previews need the full affine map.

use glam::{DAffine3, DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Position, orientation and scale of a node in world space.
///
/// Composed as scale, then rotation, then translation.
///
/// # Example
///
/// ```rust
/// use pivot_core::NodeTransform;
/// use glam::DVec3;
///
/// let transform = NodeTransform::from_position(DVec3::new(10.0, 0.0, 0.0))
///     .with_scale(DVec3::splat(2.0));
/// assert_eq!(transform.transform_vector(DVec3::X), DVec3::new(2.0, 0.0, 0.0));
/// assert_eq!(transform.transform_point(DVec3::X), DVec3::new(12.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeTransform {
    /// World-space position
    pub position: DVec3,
    /// World-space orientation
    pub rotation: DQuat,
    /// Per-axis scale
    pub scale: DVec3,
}

impl Default for NodeTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl NodeTransform {
    /// Transform at the origin with no rotation and unit scale.
    pub const IDENTITY: Self = Self {
        position: DVec3::ZERO,
        rotation: DQuat::IDENTITY,
        scale: DVec3::ONE,
    };

    /// Creates a transform from its parts.
    pub fn new(position: DVec3, rotation: DQuat, scale: DVec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Creates an unrotated, unscaled transform at `position`.
    pub fn from_position(position: DVec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Returns a copy with a different rotation.
    pub fn with_rotation(mut self, rotation: DQuat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Returns a copy with a different scale.
    pub fn with_scale(mut self, scale: DVec3) -> Self {
        self.scale = scale;
        self
    }

    /// Local-to-world affine matrix.
    #[inline]
    pub fn to_affine(&self) -> DAffine3 {
        DAffine3::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Maps a local direction to world space: rotation and scale, no
    /// translation.
    #[inline]
    pub fn transform_vector(&self, vector: DVec3) -> DVec3 {
        self.to_affine().transform_vector3(vector)
    }

    /// Maps a local point to world space.
    #[inline]
    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        self.to_affine().transform_point3(point)
    }
}
