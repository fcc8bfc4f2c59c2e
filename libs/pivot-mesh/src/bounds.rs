//! # Bounding Box
//!
//! Axis-aligned bounding box over mesh vertices.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box described by its min and max corners.
///
/// # Example
///
/// ```rust
/// use pivot_mesh::BoundingBox;
/// use glam::DVec3;
///
/// let bounds = BoundingBox::from_points([
///     DVec3::new(-1.0, 0.0, 2.0),
///     DVec3::new(3.0, 4.0, -2.0),
/// ])
/// .unwrap();
/// assert_eq!(bounds.min, DVec3::new(-1.0, 0.0, -2.0));
/// assert_eq!(bounds.max, DVec3::new(3.0, 4.0, 2.0));
/// assert_eq!(bounds.center(), DVec3::new(1.0, 2.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum corner
    pub min: DVec3,
    /// Maximum corner
    pub max: DVec3,
}

impl BoundingBox {
    /// Box collapsed onto the origin. Reported for meshes without vertices.
    pub const ZERO: Self = Self {
        min: DVec3::ZERO,
        max: DVec3::ZERO,
    };

    /// Creates a box from two opposite corners, in any order.
    pub fn new(a: DVec3, b: DVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Creates a box containing a single point.
    #[inline]
    pub fn from_point(point: DVec3) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Builds the tightest box around a set of points.
    ///
    /// Returns `None` when the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = DVec3>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self::from_point(first);
        for point in points {
            bounds.expand_to(point);
        }
        Some(bounds)
    }

    /// Grows the box so it contains `point`.
    #[inline]
    pub fn expand_to(&mut self, point: DVec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Midpoint of the box.
    #[inline]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Full edge lengths along each axis.
    #[inline]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Returns this box moved by `offset`.
    #[inline]
    pub fn translated(&self, offset: DVec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Returns true if `point` lies inside or on the boundary, allowing
    /// `tolerance` of slack on every axis.
    pub fn contains(&self, point: DVec3, tolerance: f64) -> bool {
        let slack = DVec3::splat(tolerance);
        point.cmpge(self.min - slack).all() && point.cmple(self.max + slack).all()
    }

    /// Compares both corners within `tolerance`.
    pub fn abs_diff_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.min.abs_diff_eq(other.min, tolerance) && self.max.abs_diff_eq(other.max, tolerance)
    }
}
