//! # Config Crate
//!
//! Centralized configuration constants for the pivot adjustment pipeline.
//! Tolerances, asset naming rules and history labels are defined here so the
//! mesh, core and scene crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{adjusted_mesh_name, EPSILON};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // Adjusted meshes carry a fixed suffix
//! assert_eq!(adjusted_mesh_name("Crate"), "Crate_pivot_adjusted");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Host Agnostic**: Asset layout values describe paths, not a filesystem
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
