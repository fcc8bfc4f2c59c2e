//! # Pivot Presets
//!
//! Named anchor points over a mesh's bounding box.
//!
//! ## Axis Convention
//!
//! - **Top / Bottom**: max / min Y
//! - **Left / Right**: min / max X
//! - **Front / Back**: min / max Z
//!
//! Any axis a preset does not name uses the box center.

use std::fmt;
use std::str::FromStr;

use glam::DVec3;
use pivot_mesh::BoundingBox;
use serde::{Deserialize, Serialize};

use crate::error::{PivotError, PivotResult};

// =============================================================================
// PRESETS
// =============================================================================

/// One of the eleven named pivot anchors.
///
/// The declaration order is also the external ordinal used by
/// [`PivotPreset::from_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotPreset {
    /// Box center.
    #[default]
    Center,
    /// Center of the top face.
    TopCenter,
    /// Top face, front edge (min Z).
    TopFront,
    /// Top face, back edge (max Z).
    TopBack,
    /// Top face, left edge (min X).
    TopLeft,
    /// Top face, right edge (max X).
    TopRight,
    /// Center of the bottom face.
    BottomCenter,
    /// Bottom face, front edge (min Z).
    BottomFront,
    /// Bottom face, back edge (max Z).
    BottomBack,
    /// Bottom face, left edge (min X).
    BottomLeft,
    /// Bottom face, right edge (max X).
    BottomRight,
}

impl PivotPreset {
    /// Every preset, in declaration order.
    pub const ALL: [PivotPreset; 11] = [
        PivotPreset::Center,
        PivotPreset::TopCenter,
        PivotPreset::TopFront,
        PivotPreset::TopBack,
        PivotPreset::TopLeft,
        PivotPreset::TopRight,
        PivotPreset::BottomCenter,
        PivotPreset::BottomFront,
        PivotPreset::BottomBack,
        PivotPreset::BottomLeft,
        PivotPreset::BottomRight,
    ];

    /// Maps an external ordinal to a preset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pivot_core::{PivotError, PivotPreset};
    ///
    /// assert_eq!(PivotPreset::from_index(6), Ok(PivotPreset::BottomCenter));
    /// assert!(matches!(PivotPreset::from_index(11), Err(PivotError::InvalidPreset { .. })));
    /// ```
    pub fn from_index(index: u8) -> PivotResult<Self> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(PivotError::InvalidPreset {
                index,
                max: (Self::ALL.len() - 1) as u8,
            })
    }

    /// Maps an external ordinal to a preset, falling back to
    /// [`PivotPreset::Center`] when it is out of range.
    pub fn from_index_or_center(index: u8) -> Self {
        Self::from_index(index).unwrap_or_else(|err| {
            log::warn!("{err}; using center");
            PivotPreset::Center
        })
    }

    /// External ordinal of this preset.
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            PivotPreset::Center => "Center",
            PivotPreset::TopCenter => "Top Center",
            PivotPreset::TopFront => "Top Front",
            PivotPreset::TopBack => "Top Back",
            PivotPreset::TopLeft => "Top Left",
            PivotPreset::TopRight => "Top Right",
            PivotPreset::BottomCenter => "Bottom Center",
            PivotPreset::BottomFront => "Bottom Front",
            PivotPreset::BottomBack => "Bottom Back",
            PivotPreset::BottomLeft => "Bottom Left",
            PivotPreset::BottomRight => "Bottom Right",
        }
    }

    /// Label plus the bounding box coordinates the preset picks.
    pub fn description(self) -> &'static str {
        match self {
            PivotPreset::Center => "Center (center X, center Y, center Z)",
            PivotPreset::TopCenter => "Top Center (center X, max Y, center Z)",
            PivotPreset::TopFront => "Top Front (center X, max Y, min Z)",
            PivotPreset::TopBack => "Top Back (center X, max Y, max Z)",
            PivotPreset::TopLeft => "Top Left (min X, max Y, center Z)",
            PivotPreset::TopRight => "Top Right (max X, max Y, center Z)",
            PivotPreset::BottomCenter => "Bottom Center (center X, min Y, center Z)",
            PivotPreset::BottomFront => "Bottom Front (center X, min Y, min Z)",
            PivotPreset::BottomBack => "Bottom Back (center X, min Y, max Z)",
            PivotPreset::BottomLeft => "Bottom Left (min X, min Y, center Z)",
            PivotPreset::BottomRight => "Bottom Right (max X, min Y, center Z)",
        }
    }
}

impl fmt::Display for PivotPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PivotPreset {
    type Err = PivotError;

    /// Accepts labels and identifiers in any case or separator style:
    /// `"Top Front"`, `"top_front"`, `"TopFront"`, `"top-front"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_label(s);
        Self::ALL
            .into_iter()
            .find(|preset| normalize_label(preset.label()) == wanted)
            .ok_or_else(|| PivotError::UnknownPresetLabel(s.to_string()))
    }
}

fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

// =============================================================================
// CALCULATOR
// =============================================================================

/// Returns the local-space position of `preset` on `bounds`.
///
/// Depends only on the box, so vertex order never matters. A collapsed box
/// (empty or single-point mesh) yields that single point for every preset.
///
/// # Example
///
/// ```rust
/// use pivot_core::{preset_position, PivotPreset};
/// use pivot_mesh::BoundingBox;
/// use glam::DVec3;
///
/// let bounds = BoundingBox::new(DVec3::ZERO, DVec3::new(2.0, 4.0, 6.0));
/// assert_eq!(preset_position(&bounds, PivotPreset::TopFront), DVec3::new(1.0, 4.0, 0.0));
/// ```
pub fn preset_position(bounds: &BoundingBox, preset: PivotPreset) -> DVec3 {
    let BoundingBox { min, max } = *bounds;
    let center = bounds.center();

    match preset {
        PivotPreset::Center => center,
        PivotPreset::TopCenter => DVec3::new(center.x, max.y, center.z),
        PivotPreset::TopFront => DVec3::new(center.x, max.y, min.z),
        PivotPreset::TopBack => DVec3::new(center.x, max.y, max.z),
        PivotPreset::TopLeft => DVec3::new(min.x, max.y, center.z),
        PivotPreset::TopRight => DVec3::new(max.x, max.y, center.z),
        PivotPreset::BottomCenter => DVec3::new(center.x, min.y, center.z),
        PivotPreset::BottomFront => DVec3::new(center.x, min.y, min.z),
        PivotPreset::BottomBack => DVec3::new(center.x, min.y, max.z),
        PivotPreset::BottomLeft => DVec3::new(min.x, min.y, center.z),
        PivotPreset::BottomRight => DVec3::new(max.x, min.y, center.z),
    }
}

// =============================================================================
// TARGETS
// =============================================================================

/// The point a caller wants as the new origin: a preset or an explicit
/// local-space position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotTarget {
    /// Computed from the mesh bounds.
    Preset(PivotPreset),
    /// Caller-supplied point in mesh-local space.
    Custom(DVec3),
}

impl PivotTarget {
    /// Resolves the target to a local-space point on `bounds`.
    pub fn resolve(&self, bounds: &BoundingBox) -> DVec3 {
        match *self {
            PivotTarget::Preset(preset) => preset_position(bounds, preset),
            PivotTarget::Custom(point) => point,
        }
    }
}

impl Default for PivotTarget {
    fn default() -> Self {
        PivotTarget::Preset(PivotPreset::default())
    }
}

impl From<PivotPreset> for PivotTarget {
    fn from(preset: PivotPreset) -> Self {
        PivotTarget::Preset(preset)
    }
}

impl From<DVec3> for PivotTarget {
    fn from(point: DVec3) -> Self {
        PivotTarget::Custom(point)
    }
}
