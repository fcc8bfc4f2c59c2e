//! # Shape Descriptors
//!
//! Auxiliary local-space shapes attached to a node (physics or selection
//! volumes). Their centers live in mesh-local space and must follow any
//! offset applied to the vertices.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Axis a capsule's height runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapsuleAxis {
    X,
    #[default]
    Y,
    Z,
}

/// A centered primitive volume in local space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeDescriptor {
    /// Axis-aligned box.
    Box { center: DVec3, size: DVec3 },
    /// Sphere.
    Sphere { center: DVec3, radius: f64 },
    /// Capsule whose height runs along `axis`.
    Capsule {
        center: DVec3,
        radius: f64,
        height: f64,
        axis: CapsuleAxis,
    },
}

impl ShapeDescriptor {
    /// Local-space center.
    pub fn center(&self) -> DVec3 {
        match *self {
            ShapeDescriptor::Box { center, .. }
            | ShapeDescriptor::Sphere { center, .. }
            | ShapeDescriptor::Capsule { center, .. } => center,
        }
    }

    /// Returns a copy with `center` replaced; extents are kept.
    pub fn with_center(mut self, new_center: DVec3) -> Self {
        match &mut self {
            ShapeDescriptor::Box { center, .. }
            | ShapeDescriptor::Sphere { center, .. }
            | ShapeDescriptor::Capsule { center, .. } => *center = new_center,
        }
        self
    }

    /// Returns a copy moved by `offset`.
    #[inline]
    pub fn translated(self, offset: DVec3) -> Self {
        let center = self.center();
        self.with_center(center + offset)
    }

    /// Short name of the shape kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ShapeDescriptor::Box { .. } => "box",
            ShapeDescriptor::Sphere { .. } => "sphere",
            ShapeDescriptor::Capsule { .. } => "capsule",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translated_moves_only_center() {
        let shape = ShapeDescriptor::Capsule {
            center: DVec3::new(0.0, 1.0, 0.0),
            radius: 0.5,
            height: 2.0,
            axis: CapsuleAxis::Y,
        };
        let moved = shape.translated(DVec3::new(0.0, -1.0, 2.0));
        assert_eq!(
            moved,
            ShapeDescriptor::Capsule {
                center: DVec3::new(0.0, 0.0, 2.0),
                radius: 0.5,
                height: 2.0,
                axis: CapsuleAxis::Y,
            }
        );
    }

    #[test]
    fn test_center_for_every_kind() {
        let c = DVec3::new(1.0, 2.0, 3.0);
        let shapes = [
            ShapeDescriptor::Box {
                center: c,
                size: DVec3::ONE,
            },
            ShapeDescriptor::Sphere {
                center: c,
                radius: 1.0,
            },
            ShapeDescriptor::Capsule {
                center: c,
                radius: 1.0,
                height: 3.0,
                axis: CapsuleAxis::Z,
            },
        ];
        for shape in shapes {
            assert_eq!(shape.center(), c, "{}", shape.kind());
            assert_eq!(shape.with_center(DVec3::ZERO).center(), DVec3::ZERO);
        }
    }
}
