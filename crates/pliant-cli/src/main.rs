//! Pliant CLI — inspect, pick, export and validate deformable meshes.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pliant_math::Vec3;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;

#[derive(Parser)]
#[command(name = "pliant")]
#[command(version, about = "Pliant — deformable triangle mesh toolkit")]
struct Cli {
    /// Logging verbosity level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print counts, topology statistics and bounds of an OBJ mesh.
    Inspect {
        /// Path to the OBJ file.
        path: PathBuf,

        /// Print machine-readable JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Cast a ray at a mesh and report the nearest hit.
    Pick {
        /// Path to the OBJ file.
        path: PathBuf,

        /// Ray origin as `x,y,z`.
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        origin: Vec3,

        /// Ray direction as `x,y,z`.
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        direction: Vec3,

        /// Skip triangles that contain this vertex index.
        #[arg(long)]
        exclude: Option<u32>,
    },

    /// Run the ballistic stub solver and write render frames as JSON.
    Export {
        /// Path to the OBJ file.
        path: PathBuf,

        /// Output JSON path.
        #[arg(short, long, default_value = "frames.json")]
        output: PathBuf,

        /// Number of solver steps.
        #[arg(short, long, default_value = "60")]
        steps: u32,

        /// Body configuration (TOML). Defaults to a gravity-affected body.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Validate a body config (.toml) or mesh (.obj).
    Validate {
        /// Path to config or mesh file.
        path: PathBuf,
    },
}

fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let &[x, y, z] = parts.as_slice() else {
        return Err(format!("expected x,y,z, got '{s}'"));
    };
    let component = |c: &str| c.parse::<f32>().map_err(|e| format!("'{c}': {e}"));
    Ok(Vec3::new(component(x)?, component(y)?, component(z)?))
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {e}");
    }

    let result = match cli.command {
        Commands::Inspect { path, json } => commands::inspect(&path, json),
        Commands::Pick {
            path,
            origin,
            direction,
            exclude,
        } => commands::pick(&path, origin, direction, exclude),
        Commands::Export {
            path,
            output,
            steps,
            config,
        } => commands::export(&path, &output, steps, config.as_deref()),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
