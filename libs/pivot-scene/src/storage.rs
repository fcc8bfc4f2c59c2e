//! # Mesh Storage
//!
//! Addressable mesh storage. The medium behind a [`MeshStorage`] is up to
//! the host; [`MeshRegistry`] keeps everything in memory.

use std::collections::{HashMap, HashSet};
use std::fmt;

use config::constants::ASSET_ROOT;
use pivot_mesh::Mesh;
use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};

/// Stable identifier of a stored mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MeshHandle(pub u64);

impl fmt::Display for MeshHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Storage the host provides for mesh assets.
///
/// Paths are `/`-separated asset paths, independent of the OS.
pub trait MeshStorage {
    /// Looks up a stored mesh.
    fn mesh(&self, handle: MeshHandle) -> Option<&Mesh>;

    /// Asset path of a stored mesh, if it has one.
    fn asset_path(&self, handle: MeshHandle) -> Option<&str>;

    /// Returns true if an asset already occupies `path`.
    fn contains_path(&self, path: &str) -> bool;

    /// Makes sure the folder at `path` exists.
    fn ensure_folder(&mut self, path: &str) -> SceneResult<()>;

    /// Stores `mesh` as a new asset at `path` and returns its handle.
    fn create(&mut self, mesh: Mesh, path: &str) -> SceneResult<MeshHandle>;
}

#[derive(Debug, Clone)]
struct StoredMesh {
    mesh: Mesh,
    path: Option<String>,
}

/// In-memory [`MeshStorage`].
///
/// Handles are issued in increasing order and never reused. Only the
/// `Assets` root folder exists initially.
///
/// # Example
///
/// ```rust
/// use pivot_scene::{MeshRegistry, MeshStorage};
/// use pivot_mesh::Mesh;
///
/// let mut registry = MeshRegistry::new();
/// registry.ensure_folder("Assets/Meshes").unwrap();
/// let handle = registry.create(Mesh::named("Rock"), "Assets/Meshes/Rock.asset").unwrap();
/// assert_eq!(registry.mesh(handle).unwrap().name(), "Rock");
/// assert_eq!(registry.asset_path(handle), Some("Assets/Meshes/Rock.asset"));
/// ```
#[derive(Debug)]
pub struct MeshRegistry {
    meshes: HashMap<MeshHandle, StoredMesh>,
    folders: HashSet<String>,
    next_handle: u64,
}

impl Default for MeshRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshRegistry {
    /// Creates a registry containing only the asset root folder.
    pub fn new() -> Self {
        Self {
            meshes: HashMap::new(),
            folders: HashSet::from([ASSET_ROOT.to_string()]),
            next_handle: 1,
        }
    }

    /// Number of stored meshes.
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Returns true if the folder at `path` exists.
    pub fn has_folder(&self, path: &str) -> bool {
        self.folders.contains(path)
    }

    /// Stores a mesh that has no asset path (generated or host-owned).
    pub fn insert_transient(&mut self, mesh: Mesh) -> MeshHandle {
        self.insert(mesh, None)
    }

    /// Registers an existing asset, creating its folders as needed.
    ///
    /// Unlike [`MeshStorage::create`], this models assets that already
    /// exist on the host side, such as imported models. Like `create`, it
    /// only accepts paths inside a folder.
    pub fn import(&mut self, mesh: Mesh, path: &str) -> SceneResult<MeshHandle> {
        if self.contains_path(path) {
            return Err(SceneError::storage(path, "an asset already exists at this path"));
        }
        let mut folder = parent_folder(path);
        if folder.is_none() {
            return Err(SceneError::storage(path, FOLDERLESS_ASSET));
        }
        while let Some(dir) = folder {
            self.folders.insert(dir.to_string());
            folder = parent_folder(dir);
        }
        Ok(self.insert(mesh, Some(path.to_string())))
    }

    fn insert(&mut self, mesh: Mesh, path: Option<String>) -> MeshHandle {
        let handle = MeshHandle(self.next_handle);
        self.next_handle += 1;
        self.meshes.insert(handle, StoredMesh { mesh, path });
        handle
    }
}

impl MeshStorage for MeshRegistry {
    fn mesh(&self, handle: MeshHandle) -> Option<&Mesh> {
        self.meshes.get(&handle).map(|stored| &stored.mesh)
    }

    fn asset_path(&self, handle: MeshHandle) -> Option<&str> {
        self.meshes.get(&handle)?.path.as_deref()
    }

    fn contains_path(&self, path: &str) -> bool {
        self.meshes
            .values()
            .any(|stored| stored.path.as_deref() == Some(path))
    }

    fn ensure_folder(&mut self, path: &str) -> SceneResult<()> {
        if self.folders.contains(path) {
            return Ok(());
        }
        match parent_folder(path) {
            Some(parent) if self.folders.contains(parent) => {
                log::info!("created folder '{path}'");
                self.folders.insert(path.to_string());
                Ok(())
            }
            Some(parent) => Err(SceneError::folder_creation(
                path,
                format!("parent folder '{parent}' does not exist"),
            )),
            None => Err(SceneError::folder_creation(
                path,
                "folders must live under the asset root",
            )),
        }
    }

    fn create(&mut self, mesh: Mesh, path: &str) -> SceneResult<MeshHandle> {
        if self.contains_path(path) {
            return Err(SceneError::storage(path, "an asset already exists at this path"));
        }
        match parent_folder(path) {
            Some(folder) if self.folders.contains(folder) => {}
            Some(folder) => {
                return Err(SceneError::storage(
                    path,
                    format!("folder '{folder}' does not exist"),
                ))
            }
            None => return Err(SceneError::storage(path, FOLDERLESS_ASSET)),
        }
        Ok(self.insert(mesh, Some(path.to_string())))
    }
}

const FOLDERLESS_ASSET: &str = "assets must live in a folder";

/// Everything before the last `/`, if there is one.
fn parent_folder(path: &str) -> Option<&str> {
    path.rsplit_once('/')
        .map(|(dir, _)| dir)
        .filter(|dir| !dir.is_empty())
}
