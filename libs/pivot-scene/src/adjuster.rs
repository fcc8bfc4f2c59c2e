//! # Pivot Adjuster
//!
//! End-to-end pivot change on a node: compute, store, then commit.

use config::constants::UNDO_LABEL;
use glam::DVec3;
use pivot_core::{
    apply_pivot, preset_position, preview_world_position, NodePlacement, PivotPreset, PivotTarget,
};
use pivot_mesh::Mesh;

use crate::asset_path::{plan_asset_path, unique_asset_path};
use crate::error::{SceneError, SceneResult};
use crate::history::UndoRecorder;
use crate::node::{NodeTransformAccess, ShapeAccess};
use crate::storage::{MeshHandle, MeshStorage};

/// What an adjustment changed.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustOutcome {
    /// Handle of the newly stored mesh, now active on the node
    pub mesh: MeshHandle,
    /// Where the new mesh was stored
    pub asset_path: String,
    /// Pivot that became the new origin, in the old local space
    pub pivot: DVec3,
    /// Amount added to the node's world position
    pub world_compensation: DVec3,
    /// Number of centered shapes moved
    pub shapes_updated: usize,
    /// Number of mesh-backed shapes pointed at the new mesh
    pub mesh_shapes_rebound: usize,
}

/// Moves `node`'s pivot to `target` while keeping it visually in place.
///
/// The new mesh is stored before anything on the node changes; on error the
/// node is left exactly as it was. `history` receives a snapshot right
/// before the first mutation.
pub fn adjust_node_pivot<N, S, H>(
    node: &mut N,
    storage: &mut S,
    history: &mut H,
    target: PivotTarget,
) -> SceneResult<AdjustOutcome>
where
    N: NodeTransformAccess + ShapeAccess,
    S: MeshStorage + ?Sized,
    H: UndoRecorder<N> + ?Sized,
{
    let handle = node.mesh().ok_or(SceneError::MissingMesh)?;
    let source = active_mesh(storage, handle)?;

    let pivot = target.resolve(&source.bounding_box());
    let transform = node.transform();
    let shapes = node.shapes()?;
    let adjustment = apply_pivot(source, pivot, &NodePlacement::new(&transform, &shapes))?;

    let plan = plan_asset_path(storage.asset_path(handle), adjustment.mesh.name());
    if let Some(folder) = &plan.folder {
        storage
            .ensure_folder(folder)
            .inspect_err(|err| log::warn!("{err}"))?;
    }
    let asset_path = unique_asset_path(&plan.path, |path| storage.contains_path(path));
    let new_handle = storage
        .create(adjustment.mesh, &asset_path)
        .inspect_err(|err| log::warn!("{err}"))?;

    history.record(UNDO_LABEL, node);

    node.set_mesh(new_handle);
    node.set_position(transform.position + adjustment.world_compensation);
    for (index, shape) in adjustment.shapes.iter().enumerate() {
        node.set_shape_center(index, shape.center());
    }
    let mesh_shapes_rebound = node.rebind_mesh_shapes(new_handle);

    log::info!(
        "adjusted pivot of mesh {handle} to {pivot:?}; stored as {new_handle} at '{asset_path}'"
    );

    Ok(AdjustOutcome {
        mesh: new_handle,
        asset_path,
        pivot,
        world_compensation: adjustment.world_compensation,
        shapes_updated: adjustment.shapes.len(),
        mesh_shapes_rebound,
    })
}

/// Local-space position of `preset` on the node's active mesh.
pub fn node_preset_position<N, S>(node: &N, storage: &S, preset: PivotPreset) -> SceneResult<DVec3>
where
    N: NodeTransformAccess + ?Sized,
    S: MeshStorage + ?Sized,
{
    let handle = node.mesh().ok_or(SceneError::MissingMesh)?;
    let mesh = active_mesh(storage, handle)?;
    Ok(preset_position(&mesh.bounding_box(), preset))
}

/// World-space position `target` currently occupies, for previews.
pub fn node_preview_position<N, S>(node: &N, storage: &S, target: PivotTarget) -> SceneResult<DVec3>
where
    N: NodeTransformAccess + ?Sized,
    S: MeshStorage + ?Sized,
{
    let handle = node.mesh().ok_or(SceneError::MissingMesh)?;
    let mesh = active_mesh(storage, handle)?;
    let pivot = target.resolve(&mesh.bounding_box());
    Ok(preview_world_position(&node.transform(), pivot))
}

fn active_mesh<S: MeshStorage + ?Sized>(storage: &S, handle: MeshHandle) -> SceneResult<&Mesh> {
    storage
        .mesh(handle)
        .ok_or(SceneError::UnknownMesh { handle })
}
