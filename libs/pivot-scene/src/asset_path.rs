//! # Asset Paths
//!
//! Decides where an adjusted mesh is stored.
//!
//! - Source mesh stored at a writable path: the new asset sits next to it as
//!   `<dir>/<stem>_pivot_adjusted.asset`.
//! - Source mesh without a path, or under the transient `Library/` prefix:
//!   the new asset goes to `Assets/AdjustedMeshes/<mesh name>.asset`, and that
//!   folder must be ensured first.

use config::constants::{
    adjusted_mesh_dir, ADJUSTED_MESH_SUFFIX, MESH_ASSET_EXTENSION, TRANSIENT_ASSET_PREFIX,
};

/// Where to store an adjusted mesh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPlan {
    /// Target asset path
    pub path: String,
    /// Folder that must exist before storing, when it may be missing
    pub folder: Option<String>,
}

/// Plans the asset path for an adjusted mesh.
///
/// `adjusted_name` is the new mesh's name, already carrying the adjusted
/// suffix; it is only used for the fallback folder.
///
/// # Example
///
/// ```rust
/// use pivot_scene::plan_asset_path;
///
/// let plan = plan_asset_path(Some("Assets/Models/crate.fbx"), "Crate_pivot_adjusted");
/// assert_eq!(plan.path, "Assets/Models/crate_pivot_adjusted.asset");
/// assert_eq!(plan.folder, None);
///
/// let plan = plan_asset_path(None, "Cube_pivot_adjusted");
/// assert_eq!(plan.path, "Assets/AdjustedMeshes/Cube_pivot_adjusted.asset");
/// assert_eq!(plan.folder.as_deref(), Some("Assets/AdjustedMeshes"));
/// ```
pub fn plan_asset_path(source_path: Option<&str>, adjusted_name: &str) -> AssetPlan {
    match source_path {
        Some(path) if !path.is_empty() && !path.starts_with(TRANSIENT_ASSET_PREFIX) => {
            let (dir, file) = match path.rsplit_once('/') {
                Some((dir, file)) => (Some(dir), file),
                None => (None, path),
            };
            let stem = file_stem(file);
            let file = format!("{stem}{ADJUSTED_MESH_SUFFIX}.{MESH_ASSET_EXTENSION}");
            AssetPlan {
                path: match dir {
                    Some(dir) => format!("{dir}/{file}"),
                    None => file,
                },
                folder: None,
            }
        }
        _ => {
            let folder = adjusted_mesh_dir();
            AssetPlan {
                path: format!("{folder}/{adjusted_name}.{MESH_ASSET_EXTENSION}"),
                folder: Some(folder),
            }
        }
    }
}

/// Returns `path`, or the first free `"<stem> N.<ext>"` variant.
///
/// # Example
///
/// ```rust
/// use pivot_scene::unique_asset_path;
///
/// let taken = ["Assets/a.asset", "Assets/a 1.asset"];
/// let path = unique_asset_path("Assets/a.asset", |p| taken.contains(&p));
/// assert_eq!(path, "Assets/a 2.asset");
/// ```
pub fn unique_asset_path(path: &str, exists: impl Fn(&str) -> bool) -> String {
    if !exists(path) {
        return path.to_string();
    }

    let (base, extension) = match path.rsplit_once('.') {
        Some((base, ext)) if !base.ends_with('/') && !ext.contains('/') => (base, Some(ext)),
        _ => (path, None),
    };

    (1u32..)
        .map(|n| match extension {
            Some(ext) => format!("{base} {n}.{ext}"),
            None => format!("{base} {n}"),
        })
        .find(|candidate| !exists(candidate))
        .unwrap_or_else(|| path.to_string())
}

/// File name without its last extension. Dotfiles keep their name.
fn file_stem(file: &str) -> &str {
    match file.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file,
    }
}
