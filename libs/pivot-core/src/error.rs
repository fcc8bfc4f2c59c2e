//! # Error Types
//!
//! Errors raised by pivot computation. The core either returns a complete
//! adjustment or one of these; it never produces partial output.

use glam::DVec3;
use pivot_mesh::MeshError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while computing a pivot adjustment.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PivotError {
    /// The mesh has no vertices or references vertices it does not have.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(#[from] MeshError),

    /// An external preset ordinal is outside the known range.
    #[error("Invalid pivot preset index {index} (expected 0..={max})")]
    InvalidPreset {
        /// Ordinal that was supplied
        index: u8,
        /// Largest valid ordinal
        max: u8,
    },

    /// The target pivot has a NaN or infinite component.
    #[error("Pivot {pivot:?} is not a finite point")]
    NonFinitePivot {
        /// Pivot that was supplied
        pivot: DVec3,
    },

    /// A preset label did not match any preset.
    #[error("Unknown pivot preset '{0}'")]
    UnknownPresetLabel(String),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for pivot operations.
pub type PivotResult<T> = Result<T, PivotError>;
