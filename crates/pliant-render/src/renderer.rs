//! RenderTarget trait and HeadlessRenderer stub.
//!
//! A render target is called once per frame with the current mesh state
//! expanded to a triangle list. The headless target discards all frames,
//! serving as a no-op for tests and CI.

use pliant_math::{Mat4, Vec3};
use pliant_mesh::DeformableMesh;
use pliant_types::PliantResult;
use serde::{Deserialize, Serialize};

/// A single render frame in triangle-list order.
///
/// `positions` and `normals` are parallel and hold `3 * face_count`
/// entries: corner `k` of triangle `i` lives at index `3 * i + k`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    /// Timestep this frame corresponds to.
    pub timestep: u32,
    pub positions: Vec<Vec3>,
    /// Smooth per-vertex normals.
    pub normals: Vec<Vec3>,
    pub colour: Vec3,
    pub model: Mat4,
}

impl RenderFrame {
    /// Expands the mesh's current positions and smooth normals into a
    /// triangle list.
    pub fn from_mesh(timestep: u32, mesh: &DeformableMesh, colour: Vec3, model: Mat4) -> Self {
        let vertex_normals = mesh.vertex_normals();
        let positions = mesh.vertices();

        let corners = mesh.face_count() * 3;
        let mut frame_positions = Vec::with_capacity(corners);
        let mut frame_normals = Vec::with_capacity(corners);
        for tri in mesh.triangles() {
            for p in tri.positions() {
                frame_positions.push(positions[p]);
                frame_normals.push(vertex_normals[p]);
            }
        }

        Self {
            timestep,
            positions: frame_positions,
            normals: frame_normals,
            colour,
            model,
        }
    }

    /// Number of triangles in the frame.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.positions.len() / 3
    }
}

/// Opaque camera transforms supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraMatrices {
    pub view: Mat4,
    pub projection: Mat4,
}

impl CameraMatrices {
    pub fn new(view: Mat4, projection: Mat4) -> Self {
        Self { view, projection }
    }

    /// `projection * view`.
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }
}

impl Default for CameraMatrices {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY)
    }
}

/// Trait for presenting mesh state.
///
/// # Implementations
/// - [`HeadlessRenderer`] — Discards frames (tests, CI)
/// - [`JsonFrameExporter`](crate::JsonFrameExporter) — Captures frames to a JSON file
pub trait RenderTarget: Send {
    /// Initialize the target for a mesh.
    fn init(&mut self, mesh: &DeformableMesh) -> PliantResult<()>;

    /// Submit a frame for rendering.
    fn submit(&mut self, frame: &RenderFrame, camera: &CameraMatrices) -> PliantResult<()>;

    /// Finalize rendering (flush buffers, close files, etc.).
    fn finalize(&mut self) -> PliantResult<()>;

    /// Returns the target name.
    fn name(&self) -> &str;

    /// Returns the number of frames submitted.
    fn frame_count(&self) -> u32;
}

/// Headless render target — discards all frames.
pub struct HeadlessRenderer {
    frames: u32,
}

impl HeadlessRenderer {
    /// Creates a new headless renderer.
    pub fn new() -> Self {
        Self { frames: 0 }
    }
}

impl Default for HeadlessRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderTarget for HeadlessRenderer {
    fn init(&mut self, _mesh: &DeformableMesh) -> PliantResult<()> {
        Ok(())
    }

    fn submit(&mut self, _frame: &RenderFrame, _camera: &CameraMatrices) -> PliantResult<()> {
        self.frames += 1;
        Ok(())
    }

    fn finalize(&mut self) -> PliantResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
