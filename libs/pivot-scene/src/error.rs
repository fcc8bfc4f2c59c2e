//! # Scene Errors
//!
//! Failures of the host glue. Geometry errors from the core pass through
//! unchanged; storage failures are reported, never swallowed.

use pivot_core::PivotError;
use thiserror::Error;

use crate::storage::MeshHandle;

/// Errors raised while adjusting a node's pivot.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    /// The pivot computation rejected the mesh.
    #[error(transparent)]
    Pivot(#[from] PivotError),

    /// The node has no active mesh.
    #[error("Node has no mesh assigned")]
    MissingMesh,

    /// The node references a mesh the storage does not know.
    #[error("Mesh {handle} is not in storage")]
    UnknownMesh { handle: MeshHandle },

    /// The node reported fewer shapes than its shape count.
    #[error("Node has no shape at index {index}")]
    MissingShape { index: usize },

    /// A folder for new assets could not be created.
    #[error("Failed to create folder '{path}': {message}")]
    FolderCreation { path: String, message: String },

    /// The new mesh could not be stored.
    #[error("Failed to create mesh asset at '{path}': {message}")]
    Storage { path: String, message: String },
}

impl SceneError {
    /// Creates a folder creation error.
    pub fn folder_creation(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FolderCreation {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a storage error.
    pub fn storage(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Storage {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pivot_mesh::MeshError;

    #[test]
    fn test_error_display() {
        let err = SceneError::storage("Assets/x.asset", "disk full");
        assert_eq!(
            err.to_string(),
            "Failed to create mesh asset at 'Assets/x.asset': disk full"
        );

        let err = SceneError::from(PivotError::from(MeshError::Empty));
        assert!(err.to_string().contains("no vertices"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SceneError>();
    }
}
