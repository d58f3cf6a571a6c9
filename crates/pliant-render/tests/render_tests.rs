//! Integration tests for pliant-render.

use pliant_math::{Mat4, Vec3};
use pliant_mesh::generators::{cube, quad_grid};
use pliant_render::json_exporter::AnimationData;
use pliant_render::{CameraMatrices, HeadlessRenderer, JsonFrameExporter, RenderFrame, RenderTarget};

// ─── RenderFrame Tests ────────────────────────────────────────

#[test]
fn frame_is_expanded_triangle_list() {
    let mesh = quad_grid(2, 2, 1.0, 1.0);
    let frame = RenderFrame::from_mesh(0, &mesh, Vec3::ONE, Mat4::IDENTITY);

    assert_eq!(frame.positions.len(), 3 * mesh.face_count());
    assert_eq!(frame.normals.len(), 3 * mesh.face_count());
    assert_eq!(frame.face_count(), mesh.face_count());

    for (i, tri) in mesh.triangles().iter().enumerate() {
        for (k, p) in tri.positions().into_iter().enumerate() {
            assert_eq!(frame.positions[3 * i + k], mesh.vertices()[p]);
        }
    }
}

#[test]
fn flat_grid_normals_face_z() {
    let mesh = quad_grid(3, 2, 2.0, 1.0);
    let frame = RenderFrame::from_mesh(0, &mesh, Vec3::ONE, Mat4::IDENTITY);
    for n in &frame.normals {
        assert!((*n - Vec3::Z).length() < 1e-6, "normal {n:?}");
    }
}

#[test]
fn cube_corner_normals_are_smooth() {
    let mesh = cube(0.5);
    let frame = RenderFrame::from_mesh(0, &mesh, Vec3::ONE, Mat4::IDENTITY);
    for (p, n) in frame.positions.iter().zip(&frame.normals) {
        assert!((n.length() - 1.0).abs() < 1e-5);
        // Every corner normal leans outward toward its own corner.
        assert!(n.dot(*p) > 0.0);
    }
}

#[test]
fn reset_reproduces_initial_normals_exactly() {
    let mut mesh = cube(0.5);
    let initial = RenderFrame::from_mesh(0, &mesh, Vec3::ONE, Mat4::IDENTITY);

    mesh.vertices_mut()[6] = Vec3::new(2.0, 1.5, 0.7);
    mesh.translate(Vec3::new(0.1, 0.2, 0.3));
    let deformed = RenderFrame::from_mesh(1, &mesh, Vec3::ONE, Mat4::IDENTITY);
    assert_ne!(deformed.normals, initial.normals);

    mesh.reset_positions();
    let after = RenderFrame::from_mesh(2, &mesh, Vec3::ONE, Mat4::IDENTITY);
    assert_eq!(after.positions, initial.positions);
    assert_eq!(after.normals, initial.normals);
}

#[test]
fn empty_mesh_gives_empty_frame() {
    let mesh = pliant_mesh::DeformableMesh::empty();
    let frame = RenderFrame::from_mesh(0, &mesh, Vec3::ONE, Mat4::IDENTITY);
    assert!(frame.positions.is_empty());
    assert!(frame.normals.is_empty());
}

#[test]
fn camera_view_projection_order() {
    let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0));
    let projection = Mat4::from_scale(Vec3::splat(2.0));
    let camera = CameraMatrices::new(view, projection);
    let p = camera.view_projection().transform_point3(Vec3::ZERO);
    assert_eq!(p, Vec3::new(0.0, 0.0, -10.0));
    assert_eq!(CameraMatrices::default().view_projection(), Mat4::IDENTITY);
}

// ─── Headless Renderer Tests ──────────────────────────────────

#[test]
fn headless_init() {
    let mesh = quad_grid(2, 2, 1.0, 1.0);
    let mut renderer = HeadlessRenderer::new();
    renderer.init(&mesh).unwrap();
    assert_eq!(renderer.name(), "headless");
    assert_eq!(renderer.frame_count(), 0);
}

#[test]
fn headless_submit_frames() {
    let mesh = quad_grid(2, 2, 1.0, 1.0);
    let mut renderer = HeadlessRenderer::new();
    renderer.init(&mesh).unwrap();

    let frame = RenderFrame::from_mesh(0, &mesh, Vec3::ONE, Mat4::IDENTITY);
    let camera = CameraMatrices::default();
    renderer.submit(&frame, &camera).unwrap();
    renderer.submit(&frame, &camera).unwrap();
    assert_eq!(renderer.frame_count(), 2);
    renderer.finalize().unwrap();
}

// ─── JSON Exporter Tests ──────────────────────────────────────

#[test]
fn json_export_writes_frames() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frames.json");
    let mut mesh = cube(0.5);

    let mut exporter = JsonFrameExporter::new(&path);
    exporter.init(&mesh).unwrap();
    assert_eq!(exporter.name(), "json_exporter");

    let model = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
    let camera = CameraMatrices::default();
    for step in 0..3 {
        let frame = RenderFrame::from_mesh(step, &mesh, Vec3::new(1.0, 0.0, 0.0), model);
        exporter.submit(&frame, &camera).unwrap();
        mesh.translate(Vec3::new(0.0, -0.5, 0.0));
    }
    exporter.finalize().unwrap();
    assert_eq!(exporter.frame_count(), 3);

    let data: AnimationData =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(data.face_count, 12);
    assert_eq!(data.frames.len(), 3);
    assert_eq!(data.frames[2].timestep, 2);
    assert_eq!(data.frames[0].positions.len(), 12 * 3 * 3);
    assert_eq!(data.frames[0].normals.len(), 12 * 3 * 3);
    assert_eq!(data.frames[0].colour, [1.0, 0.0, 0.0]);
    assert_eq!(&data.frames[0].model[12..15], &[1.0, 2.0, 3.0]);

    // y of the first corner drops by 0.5 per frame.
    let y0 = data.frames[0].positions[1];
    let y2 = data.frames[2].positions[1];
    assert!((y0 - y2 - 1.0).abs() < 1e-6);
}

#[test]
fn json_export_rejects_mismatched_frame() {
    let dir = tempfile::tempdir().unwrap();
    let mut exporter = JsonFrameExporter::new(dir.path().join("frames.json"));
    exporter.init(&cube(0.5)).unwrap();

    let other = quad_grid(1, 1, 1.0, 1.0);
    let frame = RenderFrame::from_mesh(0, &other, Vec3::ONE, Mat4::IDENTITY);
    assert!(exporter.submit(&frame, &CameraMatrices::default()).is_err());
    assert_eq!(exporter.frame_count(), 0);
}

#[test]
fn json_export_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut exporter = JsonFrameExporter::new(dir.path().join("no/such/dir/frames.json"));
    exporter.init(&cube(0.5)).unwrap();
    assert!(exporter.finalize().is_err());
}

#[test]
fn targets_are_object_safe() {
    let dir = tempfile::tempdir().unwrap();
    let targets: Vec<Box<dyn RenderTarget>> = vec![
        Box::new(HeadlessRenderer::default()),
        Box::new(JsonFrameExporter::new(dir.path().join("f.json"))),
    ];
    let names: Vec<&str> = targets.iter().map(|t| t.name()).collect();
    assert_eq!(names, ["headless", "json_exporter"]);
}
