use approx::assert_relative_eq;
use glam::{DQuat, DVec3};
use pivot_core::{NodeTransform, PivotError, PivotPreset, PivotTarget, ShapeDescriptor};
use pivot_mesh::primitives::create_cube;
use pivot_mesh::{Mesh, MeshError};
use pivot_scene::*;

const TOLERANCE: f64 = 1e-9;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn unit_cube() -> Mesh {
    create_cube(DVec3::ONE, true).unwrap()
}

fn posed_node(mesh: MeshHandle) -> SceneNode {
    SceneNode::new("Crate")
        .with_mesh(mesh)
        .with_transform(NodeTransform::new(
            DVec3::new(4.0, 1.0, -2.0),
            DQuat::from_rotation_y(0.6) * DQuat::from_rotation_x(-0.2),
            DVec3::new(2.0, 3.0, 0.5),
        ))
        .with_collider(Collider::Primitive(ShapeDescriptor::Box {
            center: DVec3::ZERO,
            size: DVec3::ONE,
        }))
        .with_collider(Collider::Mesh { mesh: Some(mesh) })
}

fn world_vertices(node: &SceneNode, storage: &MeshRegistry) -> Vec<DVec3> {
    let mesh = storage.mesh(node.mesh.unwrap()).unwrap();
    mesh.vertices()
        .iter()
        .map(|v| node.transform.transform_point(*v))
        .collect()
}

/// Storage that accepts folders but refuses every new asset.
struct ReadOnlyStorage(MeshRegistry);

impl MeshStorage for ReadOnlyStorage {
    fn mesh(&self, handle: MeshHandle) -> Option<&Mesh> {
        self.0.mesh(handle)
    }

    fn asset_path(&self, handle: MeshHandle) -> Option<&str> {
        self.0.asset_path(handle)
    }

    fn contains_path(&self, path: &str) -> bool {
        self.0.contains_path(path)
    }

    fn ensure_folder(&mut self, path: &str) -> SceneResult<()> {
        self.0.ensure_folder(path)
    }

    fn create(&mut self, _mesh: Mesh, path: &str) -> SceneResult<MeshHandle> {
        Err(SceneError::storage(path, "read-only"))
    }
}

#[test]
fn bottom_center_keeps_world_placement() {
    init_logging();
    let mut storage = MeshRegistry::new();
    let cube = storage.insert_transient(unit_cube());
    let mut node = posed_node(cube);
    let before = world_vertices(&node, &storage);

    let outcome = adjust_node_pivot(
        &mut node,
        &mut storage,
        &mut NoHistory,
        PivotTarget::Preset(PivotPreset::BottomCenter),
    )
    .unwrap();

    assert_eq!(outcome.pivot, DVec3::new(0.0, -0.5, 0.0));
    assert_ne!(outcome.mesh, cube);
    assert_eq!(node.mesh, Some(outcome.mesh));

    let after = world_vertices(&node, &storage);
    assert_eq!(before.len(), after.len());
    for (a, b) in before.iter().zip(&after) {
        assert!(a.abs_diff_eq(*b, TOLERANCE), "{a:?} != {b:?}");
    }

    let bounds = storage.mesh(outcome.mesh).unwrap().bounding_box();
    assert_eq!(bounds.min, DVec3::new(-0.5, 0.0, -0.5));
    assert_eq!(bounds.max, DVec3::new(0.5, 1.0, 0.5));
}

#[test]
fn colliders_follow_the_mesh() {
    init_logging();
    let mut storage = MeshRegistry::new();
    let cube = storage.insert_transient(unit_cube());
    let mut node = posed_node(cube);

    let outcome = adjust_node_pivot(
        &mut node,
        &mut storage,
        &mut NoHistory,
        PivotTarget::Preset(PivotPreset::TopRight),
    )
    .unwrap();

    assert_eq!(outcome.shapes_updated, 1);
    assert_eq!(outcome.mesh_shapes_rebound, 1);
    assert_eq!(node.shape(0).unwrap().center(), -outcome.pivot);
    assert_eq!(node.colliders[1], Collider::Mesh { mesh: Some(outcome.mesh) });
}

#[test]
fn transient_meshes_go_to_fallback_folder() {
    init_logging();
    let mut storage = MeshRegistry::new();
    let cube = storage.insert_transient(unit_cube());
    let mut first = SceneNode::new("A").with_mesh(cube);
    let mut second = SceneNode::new("B").with_mesh(cube);

    assert!(!storage.has_folder("Assets/AdjustedMeshes"));
    let a = adjust_node_pivot(&mut first, &mut storage, &mut NoHistory, PivotTarget::default())
        .unwrap();
    let b = adjust_node_pivot(&mut second, &mut storage, &mut NoHistory, PivotTarget::default())
        .unwrap();

    assert!(storage.has_folder("Assets/AdjustedMeshes"));
    assert_eq!(a.asset_path, "Assets/AdjustedMeshes/Cube_pivot_adjusted.asset");
    assert_eq!(b.asset_path, "Assets/AdjustedMeshes/Cube_pivot_adjusted 1.asset");
    assert_eq!(storage.len(), 3);
}

#[test]
fn imported_meshes_are_stored_next_to_source() {
    init_logging();
    let mut storage = MeshRegistry::new();
    let mut barrel = unit_cube();
    barrel.set_name("Barrel");
    let handle = storage.import(barrel, "Assets/Props/barrel.fbx").unwrap();
    let mut node = SceneNode::new("Barrel").with_mesh(handle);

    let outcome = adjust_node_pivot(
        &mut node,
        &mut storage,
        &mut NoHistory,
        PivotTarget::Preset(PivotPreset::BottomLeft),
    )
    .unwrap();

    assert_eq!(outcome.asset_path, "Assets/Props/barrel_pivot_adjusted.asset");
    assert_eq!(
        storage.mesh(outcome.mesh).map(Mesh::name),
        Some("Barrel_pivot_adjusted")
    );
    assert!(!storage.has_folder("Assets/AdjustedMeshes"));

    // Source stays untouched
    let source = storage.mesh(handle).unwrap();
    assert_eq!(source.name(), "Barrel");
    assert_eq!(source.bounding_box().center(), DVec3::ZERO);
}

#[test]
fn custom_single_vertex_becomes_origin() {
    init_logging();
    let mut storage = MeshRegistry::new();
    let point = DVec3::new(2.0, 3.0, 4.0);
    let handle = storage.insert_transient(Mesh::from_buffers("Dot", vec![point], Vec::new()));
    let mut node = SceneNode::new("Dot").with_mesh(handle);

    let outcome =
        adjust_node_pivot(&mut node, &mut storage, &mut NoHistory, PivotTarget::Custom(point))
            .unwrap();

    assert_eq!(storage.mesh(outcome.mesh).unwrap().vertices(), &[DVec3::ZERO]);
    assert_eq!(node.transform.position, point);
}

#[test]
fn compensation_scales_with_node() {
    init_logging();
    let mut storage = MeshRegistry::new();
    let cube = storage.insert_transient(unit_cube());
    let mut node = SceneNode::new("Tall")
        .with_mesh(cube)
        .with_transform(NodeTransform::IDENTITY.with_scale(DVec3::new(1.0, 4.0, 1.0)));

    let outcome = adjust_node_pivot(
        &mut node,
        &mut storage,
        &mut NoHistory,
        PivotTarget::Preset(PivotPreset::BottomCenter),
    )
    .unwrap();

    assert_relative_eq!(outcome.world_compensation.y, -2.0);
    assert_relative_eq!(node.transform.position.y, -2.0);
}

#[test]
fn undo_restores_node() {
    init_logging();
    let mut storage = MeshRegistry::new();
    let cube = storage.insert_transient(unit_cube());
    let mut node = posed_node(cube);
    let original = node.clone();
    let mut history = SnapshotHistory::<SceneNode>::new();

    adjust_node_pivot(
        &mut node,
        &mut storage,
        &mut history,
        PivotTarget::Preset(PivotPreset::TopFront),
    )
    .unwrap();
    assert_ne!(node, original);
    assert_eq!(history.last_label(), Some("Adjust Pivot"));

    assert_eq!(history.undo(&mut node).as_deref(), Some("Adjust Pivot"));
    assert_eq!(node, original);
}

#[test]
fn node_without_mesh_is_rejected() {
    init_logging();
    let mut storage = MeshRegistry::new();
    let mut node = SceneNode::new("Empty");
    let mut history = SnapshotHistory::<SceneNode>::new();

    let err = adjust_node_pivot(&mut node, &mut storage, &mut history, PivotTarget::default())
        .unwrap_err();
    assert_eq!(err, SceneError::MissingMesh);
    assert!(history.is_empty());

    let err = node_preset_position(&node, &storage, PivotPreset::Center).unwrap_err();
    assert_eq!(err, SceneError::MissingMesh);
}

#[test]
fn unknown_mesh_is_rejected() {
    init_logging();
    let mut storage = MeshRegistry::new();
    let mut node = SceneNode::new("Ghost").with_mesh(MeshHandle(99));

    let err = adjust_node_pivot(&mut node, &mut storage, &mut NoHistory, PivotTarget::default())
        .unwrap_err();
    assert_eq!(err, SceneError::UnknownMesh { handle: MeshHandle(99) });
}

#[test]
fn empty_mesh_leaves_everything_untouched() {
    init_logging();
    let mut storage = MeshRegistry::new();
    let empty = storage.insert_transient(Mesh::named("Nothing"));
    let mut node = posed_node(empty);
    let original = node.clone();
    let mut history = SnapshotHistory::<SceneNode>::new();

    let err = adjust_node_pivot(&mut node, &mut storage, &mut history, PivotTarget::default())
        .unwrap_err();

    assert_eq!(err, SceneError::Pivot(PivotError::InvalidMesh(MeshError::Empty)));
    assert_eq!(node, original);
    assert_eq!(storage.len(), 1);
    assert!(!storage.has_folder("Assets/AdjustedMeshes"));
    assert!(history.is_empty());
}

#[test]
fn storage_failure_leaves_node_untouched() {
    init_logging();
    let mut registry = MeshRegistry::new();
    let cube = registry.insert_transient(unit_cube());
    let mut storage = ReadOnlyStorage(registry);
    let mut node = posed_node(cube);
    let original = node.clone();
    let mut history = SnapshotHistory::<SceneNode>::new();

    let err = adjust_node_pivot(
        &mut node,
        &mut storage,
        &mut history,
        PivotTarget::Preset(PivotPreset::BottomBack),
    )
    .unwrap_err();

    assert!(matches!(err, SceneError::Storage { .. }));
    assert_eq!(node, original);
    assert!(history.is_empty());
}

#[test]
fn works_through_trait_objects() {
    init_logging();
    let mut registry = MeshRegistry::new();
    let cube = registry.insert_transient(unit_cube());
    let mut node = SceneNode::new("Dyn").with_mesh(cube);

    let storage: &mut dyn MeshStorage = &mut registry;
    let history: &mut dyn UndoRecorder<SceneNode> = &mut NoHistory;
    let outcome =
        adjust_node_pivot(&mut node, storage, history, PivotTarget::default()).unwrap();
    assert_eq!(outcome.world_compensation, DVec3::ZERO);
}

#[test]
fn preview_and_preset_queries() {
    init_logging();
    let mut storage = MeshRegistry::new();
    let cube = storage.insert_transient(unit_cube());
    let node = SceneNode::new("Q")
        .with_mesh(cube)
        .with_position(DVec3::new(10.0, 0.0, 0.0));

    let local = node_preset_position(&node, &storage, PivotPreset::TopBack).unwrap();
    assert_eq!(local, DVec3::new(0.0, 0.5, 0.5));

    let world = node_preview_position(&node, &storage, PivotPreset::TopBack.into()).unwrap();
    assert_eq!(world, DVec3::new(10.0, 0.5, 0.5));
}

#[test]
fn imports_need_a_folder_to_be_adjustable() {
    init_logging();
    let mut storage = MeshRegistry::new();
    let err = storage.import(unit_cube(), "crate.fbx").unwrap_err();
    assert_eq!(err, SceneError::storage("crate.fbx", "assets must live in a folder"));

    // Directly under the asset root works end to end
    let handle = storage.import(unit_cube(), "Assets/crate.fbx").unwrap();
    let mut node = SceneNode::new("Crate").with_mesh(handle);
    let outcome = adjust_node_pivot(
        &mut node,
        &mut storage,
        &mut NoHistory,
        PivotTarget::Preset(PivotPreset::BottomCenter),
    )
    .unwrap();
    assert_eq!(outcome.asset_path, "Assets/crate_pivot_adjusted.asset");
    assert_eq!(node.mesh, Some(outcome.mesh));
}

/// Node whose shape list has a hole below its reported count.
#[derive(Clone, PartialEq, Debug)]
struct SparseNode {
    inner: SceneNode,
}

impl NodeTransformAccess for SparseNode {
    fn transform(&self) -> NodeTransform {
        self.inner.transform()
    }

    fn set_position(&mut self, position: DVec3) {
        self.inner.set_position(position);
    }

    fn mesh(&self) -> Option<MeshHandle> {
        self.inner.mesh()
    }

    fn set_mesh(&mut self, mesh: MeshHandle) {
        self.inner.set_mesh(mesh);
    }
}

impl ShapeAccess for SparseNode {
    fn shape_count(&self) -> usize {
        self.inner.shape_count() + 1
    }

    fn shape(&self, index: usize) -> Option<ShapeDescriptor> {
        match index {
            0 => None,
            _ => self.inner.shape(index - 1),
        }
    }

    fn set_shape_center(&mut self, index: usize, center: DVec3) {
        if index > 0 {
            self.inner.set_shape_center(index - 1, center);
        }
    }

    fn rebind_mesh_shapes(&mut self, mesh: MeshHandle) -> usize {
        self.inner.rebind_mesh_shapes(mesh)
    }
}

#[test]
fn missing_shape_leaves_node_untouched() {
    init_logging();
    let mut storage = MeshRegistry::new();
    let cube = storage.insert_transient(unit_cube());
    let mut node = SparseNode {
        inner: posed_node(cube),
    };
    let original = node.clone();
    let mut history = SnapshotHistory::<SparseNode>::new();

    let err = adjust_node_pivot(
        &mut node,
        &mut storage,
        &mut history,
        PivotTarget::Preset(PivotPreset::TopRight),
    )
    .unwrap_err();

    assert_eq!(err, SceneError::MissingShape { index: 0 });
    assert_eq!(node, original);
    assert_eq!(storage.len(), 1);
    assert!(history.is_empty());
}

#[test]
fn non_finite_custom_pivot_is_rejected() {
    init_logging();
    let mut storage = MeshRegistry::new();
    let cube = storage.insert_transient(unit_cube());
    let mut node = posed_node(cube);
    let original = node.clone();

    let err = adjust_node_pivot(
        &mut node,
        &mut storage,
        &mut NoHistory,
        PivotTarget::Custom(DVec3::new(f64::NAN, 0.0, 0.0)),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        SceneError::Pivot(PivotError::NonFinitePivot { .. })
    ));
    assert_eq!(node, original);
    assert_eq!(storage.len(), 1);
}
