//! JSON frame exporter — writes per-frame triangle lists for inspection.
//!
//! Implements [`RenderTarget`]. Captures the expanded positions and
//! normals of every submitted frame, then serializes the whole sequence
//! to a JSON file on `finalize()`.

use std::path::{Path, PathBuf};

use pliant_mesh::DeformableMesh;
use pliant_types::{PliantError, PliantResult};
use serde::{Deserialize, Serialize};

use crate::renderer::{CameraMatrices, RenderFrame, RenderTarget};

/// A single captured frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameData {
    pub timestep: u32,
    /// Interleaved `[x0, y0, z0, x1, y1, z1, ...]`, triangle-list order.
    pub positions: Vec<f32>,
    /// Interleaved like `positions`.
    pub normals: Vec<f32>,
    pub colour: [f32; 3],
    /// Column-major.
    pub model: [f32; 16],
    /// Column-major `projection * view`.
    pub view_projection: [f32; 16],
}

/// Complete capture as written to disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnimationData {
    pub face_count: usize,
    pub frames: Vec<FrameData>,
}

/// Exports frames to a JSON file.
///
/// ```text
/// let mut exporter = JsonFrameExporter::new("frames.json");
/// exporter.init(&mesh)?;
/// // ... run simulation, calling submit() each step ...
/// exporter.finalize()?; // Writes the JSON file
/// ```
pub struct JsonFrameExporter {
    output_path: PathBuf,
    face_count: usize,
    frames: Vec<FrameData>,
    submitted: u32,
}

impl JsonFrameExporter {
    /// Creates a new exporter that will write to the given path.
    pub fn new<P: AsRef<Path>>(output_path: P) -> Self {
        Self {
            output_path: output_path.as_ref().to_path_buf(),
            face_count: 0,
            frames: Vec::new(),
            submitted: 0,
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

fn flatten(values: &[pliant_math::Vec3]) -> Vec<f32> {
    values.iter().flat_map(|v| v.to_array()).collect()
}

impl RenderTarget for JsonFrameExporter {
    fn init(&mut self, mesh: &DeformableMesh) -> PliantResult<()> {
        self.face_count = mesh.face_count();
        self.frames.clear();
        self.submitted = 0;
        Ok(())
    }

    fn submit(&mut self, frame: &RenderFrame, camera: &CameraMatrices) -> PliantResult<()> {
        if frame.face_count() != self.face_count {
            return Err(PliantError::InvalidMesh(format!(
                "Frame has {} faces, exporter was initialized for {}",
                frame.face_count(),
                self.face_count
            )));
        }

        self.frames.push(FrameData {
            timestep: frame.timestep,
            positions: flatten(&frame.positions),
            normals: flatten(&frame.normals),
            colour: frame.colour.to_array(),
            model: frame.model.to_cols_array(),
            view_projection: camera.view_projection().to_cols_array(),
        });
        self.submitted += 1;
        Ok(())
    }

    fn finalize(&mut self) -> PliantResult<()> {
        let data = AnimationData {
            face_count: self.face_count,
            frames: std::mem::take(&mut self.frames),
        };
        let json = serde_json::to_string(&data)
            .map_err(|e| PliantError::Serialization(format!("JSON serialization failed: {e}")))?;
        std::fs::write(&self.output_path, json)?;
        tracing::info!(
            path = %self.output_path.display(),
            frames = data.frames.len(),
            "wrote frame capture"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> u32 {
        self.submitted
    }
}
