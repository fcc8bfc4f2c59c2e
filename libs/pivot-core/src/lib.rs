//! # Pivot Core
//!
//! Pure computation behind a pivot adjustment. Nothing here touches storage
//! or mutates a scene; callers apply the results.
//!
//! ## Architecture
//!
//! ```text
//! PivotTarget ──resolve(bounds)──▶ local pivot point
//!                                        │
//!                      apply_pivot(mesh, pivot, placement)
//!                                        │
//!                                        ▼
//!            PivotAdjustment { mesh, offset, world_compensation, shapes }
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use pivot_core::{apply_pivot, NodePlacement, NodeTransform, PivotPreset, PivotTarget};
//! use pivot_mesh::primitives::create_cube;
//! use glam::DVec3;
//!
//! let mesh = create_cube(DVec3::ONE, true).unwrap();
//! let pivot = PivotTarget::Preset(PivotPreset::BottomCenter).resolve(&mesh.bounding_box());
//! assert_eq!(pivot, DVec3::new(0.0, -0.5, 0.0));
//!
//! let transform = NodeTransform::IDENTITY;
//! let adjustment = apply_pivot(&mesh, pivot, &NodePlacement::new(&transform, &[])).unwrap();
//! assert_eq!(adjustment.bounds.min, DVec3::new(-0.5, 0.0, -0.5));
//! assert_eq!(adjustment.world_compensation, pivot);
//! ```

pub mod apply;
pub mod error;
pub mod preset;
pub mod shape;
pub mod transform;

pub use apply::{apply_pivot, preview_world_position, NodePlacement, PivotAdjustment};
pub use error::{PivotError, PivotResult};
pub use preset::{preset_position, PivotPreset, PivotTarget};
pub use shape::{CapsuleAxis, ShapeDescriptor};
pub use transform::NodeTransform;
