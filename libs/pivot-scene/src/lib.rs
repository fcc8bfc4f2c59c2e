//! # Pivot Scene
//!
//! Host-side glue around `pivot-core`: the traits a scene graph and an asset
//! store implement, in-memory implementations of both, and the end-to-end
//! [`adjust_node_pivot`] flow.
//!
//! ## Flow
//!
//! ```text
//! node.mesh() ─▶ storage.mesh() ─▶ target.resolve(bounds) ─▶ apply_pivot()
//!                                                                │
//!   storage.ensure_folder() ◀─ plan_asset_path() ◀───────────────┘
//!            │
//!   storage.create() ─▶ history.record() ─▶ node mutations
//! ```
//!
//! Every fallible step runs before the node is touched.
//!
//! ## Usage
//!
//! ```rust
//! use pivot_scene::{adjust_node_pivot, MeshRegistry, NoHistory, SceneNode};
//! use pivot_core::{PivotPreset, PivotTarget};
//! use pivot_mesh::primitives::create_cube;
//! use glam::DVec3;
//!
//! let mut storage = MeshRegistry::new();
//! let cube = storage.insert_transient(create_cube(DVec3::ONE, true).unwrap());
//! let mut node = SceneNode::new("Crate").with_mesh(cube);
//!
//! let outcome = adjust_node_pivot(
//!     &mut node,
//!     &mut storage,
//!     &mut NoHistory,
//!     PivotTarget::Preset(PivotPreset::BottomCenter),
//! )
//! .unwrap();
//! assert_eq!(outcome.asset_path, "Assets/AdjustedMeshes/Cube_pivot_adjusted.asset");
//! assert_eq!(node.transform.position, DVec3::new(0.0, -0.5, 0.0));
//! ```

pub mod adjuster;
pub mod asset_path;
pub mod error;
pub mod history;
pub mod node;
pub mod storage;

pub use adjuster::{adjust_node_pivot, node_preset_position, node_preview_position, AdjustOutcome};
pub use asset_path::{plan_asset_path, unique_asset_path, AssetPlan};
pub use error::{SceneError, SceneResult};
pub use history::{NoHistory, SnapshotHistory, UndoRecorder};
pub use node::{Collider, NodeTransformAccess, SceneNode, ShapeAccess};
pub use storage::{MeshHandle, MeshRegistry, MeshStorage};
