//! # Configuration Constants
//!
//! Centralized constants for the pivot adjustment pipeline.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Naming**: Suffixes applied to adjusted meshes and assets
//! - **Asset Layout**: Where adjusted meshes are stored by default
//! - **History**: Labels recorded with undoable actions

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance, e.g. when checking that a point lies inside a
/// bounding box.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Squared face-normal length below which a triangle counts as degenerate.
///
/// Degenerate faces contribute nothing to recomputed vertex normals.
pub const DEGENERATE_NORMAL_EPSILON: f64 = 1e-24;

// =============================================================================
// NAMING CONSTANTS
// =============================================================================

/// Suffix appended to the name of every pivot-adjusted mesh.
///
/// # Example
///
/// ```rust
/// use config::constants::ADJUSTED_MESH_SUFFIX;
///
/// let name = format!("Barrel{}", ADJUSTED_MESH_SUFFIX);
/// assert_eq!(name, "Barrel_pivot_adjusted");
/// ```
pub const ADJUSTED_MESH_SUFFIX: &str = "_pivot_adjusted";

/// File extension used for stored mesh assets (without the dot).
pub const MESH_ASSET_EXTENSION: &str = "asset";

// =============================================================================
// ASSET LAYOUT CONSTANTS
// =============================================================================

/// Root folder of user-owned assets.
pub const ASSET_ROOT: &str = "Assets";

/// Folder created under [`ASSET_ROOT`] for meshes that have no writable
/// source location.
pub const ADJUSTED_MESH_FOLDER: &str = "AdjustedMeshes";

/// Path prefix of host-managed, non-writable assets.
///
/// Meshes whose asset path starts with this prefix (built-in primitives,
/// imported caches) are never written next to their source.
pub const TRANSIENT_ASSET_PREFIX: &str = "Library/";

// =============================================================================
// HISTORY CONSTANTS
// =============================================================================

/// Label recorded with every undoable pivot adjustment.
pub const UNDO_LABEL: &str = "Adjust Pivot";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Returns the name given to the pivot-adjusted copy of a mesh.
///
/// # Example
///
/// ```rust
/// use config::constants::adjusted_mesh_name;
///
/// assert_eq!(adjusted_mesh_name("Chair"), "Chair_pivot_adjusted");
/// ```
pub fn adjusted_mesh_name(source_name: &str) -> String {
    format!("{source_name}{ADJUSTED_MESH_SUFFIX}")
}

/// Returns the fallback folder path, `Assets/AdjustedMeshes`.
///
/// # Example
///
/// ```rust
/// use config::constants::adjusted_mesh_dir;
///
/// assert_eq!(adjusted_mesh_dir(), "Assets/AdjustedMeshes");
/// ```
pub fn adjusted_mesh_dir() -> String {
    format!("{ASSET_ROOT}/{ADJUSTED_MESH_FOLDER}")
}
