//! CLI command implementations.

use std::error::Error;
use std::path::Path;

use pliant_io::{load_obj_with_report, validate_mesh};
use pliant_math::{Ray, Vec3};
use pliant_render::{CameraMatrices, JsonFrameExporter, RenderFrame, RenderTarget};
use pliant_solver::{BallisticStub, BodyConfig, SoftBody, SolverStrategy};
use pliant_types::constants::DEFAULT_DT;
use pliant_types::VertexId;

type CommandResult = Result<(), Box<dyn Error>>;

/// Print mesh statistics.
pub fn inspect(path: &Path, json: bool) -> CommandResult {
    let (mesh, report) = load_obj_with_report(path)?;
    let topology = mesh.topology();
    let bounds = mesh.bounding_box();

    if json {
        let summary = serde_json::json!({
            "path": path.display().to_string(),
            "vertices": mesh.vertex_count(),
            "faces": mesh.face_count(),
            "uvs": mesh.uvs().len(),
            "normals": mesh.normals().len(),
            "edges": topology.edge_count(),
            "boundary_edges": topology.boundary_edge_count(),
            "non_manifold_edges": topology.non_manifold_edges().count(),
            "closed": topology.is_closed(),
            "bounds": bounds,
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Mesh: {}", path.display());
    println!("────────────────────────────────");
    println!("  Vertices:           {}", mesh.vertex_count());
    println!("  Faces:              {}", mesh.face_count());
    println!("  UVs:                {}", mesh.uvs().len());
    println!("  Normals:            {}", mesh.normals().len());
    println!("  Edges:              {}", topology.edge_count());
    println!("  Boundary edges:     {}", topology.boundary_edge_count());
    println!("  Non-manifold edges: {}", topology.non_manifold_edges().count());
    println!("  Closed:             {}", topology.is_closed());
    if bounds.is_empty() {
        println!("  Bounds:             (empty)");
    } else {
        println!("  Bounds min:         {:?}", bounds.min);
        println!("  Bounds max:         {:?}", bounds.max);
    }
    println!();
    println!("Parser");
    println!("  Lines:              {}", report.lines);
    println!("  Skipped lines:      {}", report.skipped_lines);
    println!("  Malformed records:  {}", report.malformed_records);
    println!("  Degenerate faces:   {}", report.degenerate_faces);
    println!("  Truncated faces:    {}", report.truncated_faces);
    println!("  Out-of-range faces: {}", report.out_of_range_faces);
    Ok(())
}

/// Cast one ray and print the nearest hit.
pub fn pick(path: &Path, origin: Vec3, direction: Vec3, exclude: Option<u32>) -> CommandResult {
    let (mesh, _) = load_obj_with_report(path)?;
    if let Some(v) = exclude {
        if v as usize >= mesh.vertex_count() {
            return Err(format!(
                "Excluded vertex {v} out of range (mesh has {} vertices)",
                mesh.vertex_count()
            )
            .into());
        }
    }

    let ray = Ray::new(origin, direction);
    match mesh.intersect(&ray, exclude.map(VertexId)) {
        Some(hit) => {
            println!("Hit triangle {}", hit.triangle.index());
            println!("  t:      {}", hit.t);
            println!("  point:  {:?}", ray.at(hit.t));
            println!("  normal: {:?}", hit.normal);
        }
        None => println!("No hit."),
    }
    Ok(())
}

/// Run the ballistic stub and write frames as JSON.
pub fn export(path: &Path, output: &Path, steps: u32, config_path: Option<&Path>) -> CommandResult {
    let config = match config_path {
        Some(p) => BodyConfig::from_toml_file(p)?,
        None => BodyConfig::dynamic(),
    };

    let (mesh, _) = load_obj_with_report(path)?;
    validate_mesh(&mesh)?;
    let mut body = SoftBody::new(mesh, &config)?;

    let mut solver = BallisticStub::new();
    solver.init(&body.mesh, &config)?;
    let mut exporter = JsonFrameExporter::new(output);
    exporter.init(&body.mesh)?;
    let camera = CameraMatrices::default();

    for step in 0..=steps {
        let frame = RenderFrame::from_mesh(step, &body.mesh, body.colour, body.model_matrix());
        exporter.submit(&frame, &camera)?;
        if step < steps {
            solver.step(&mut body.mesh, &mut body.state, DEFAULT_DT)?;
        }
    }
    body.update_bounding_box();
    exporter.finalize()?;

    println!(
        "Wrote {} frames ({} solver steps, {}) to {}",
        exporter.frame_count(),
        steps,
        solver.name(),
        output.display()
    );
    Ok(())
}

/// Validate a body config or a mesh.
pub fn validate(path: &Path) -> CommandResult {
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => {
            BodyConfig::from_toml_file(path)?;
            println!("Config is valid: {}", path.display());
        }
        Some("obj") => {
            let (mesh, report) = load_obj_with_report(path)?;
            validate_mesh(&mesh)?;
            println!(
                "Mesh is valid ({} verts, {} tris).",
                mesh.vertex_count(),
                mesh.face_count()
            );
            if report.has_warnings() {
                println!(
                    "Parser absorbed {} malformed records, {} degenerate, {} truncated and {} out-of-range faces.",
                    report.malformed_records,
                    report.degenerate_faces,
                    report.truncated_faces,
                    report.out_of_range_faces
                );
            }
        }
        _ => return Err("Unsupported file format. Use .toml (config) or .obj (mesh).".into()),
    }
    Ok(())
}
