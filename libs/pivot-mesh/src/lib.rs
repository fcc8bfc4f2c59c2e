//! # Pivot Mesh
//!
//! Mesh representation used by the pivot adjustment pipeline.
//!
//! ## Architecture
//!
//! ```text
//! pivot-mesh (Mesh, BoundingBox) → pivot-core (presets, apply) → pivot-scene (host glue)
//! ```
//!
//! All positions are `glam::DVec3` (f64). Derived data (bounding box,
//! vertex normals) is always recomputed from the vertex buffer, never
//! patched in place.
//!
//! ## Usage
//!
//! ```rust
//! use pivot_mesh::primitives::create_cube;
//! use glam::DVec3;
//!
//! let mesh = create_cube(DVec3::ONE, true).unwrap();
//! let bounds = mesh.bounding_box();
//! assert_eq!(bounds.center(), DVec3::ZERO);
//! ```

pub mod bounds;
pub mod error;
pub mod mesh;
pub mod primitives;

pub use bounds::BoundingBox;
pub use error::{MeshError, MeshResult};
pub use mesh::Mesh;
