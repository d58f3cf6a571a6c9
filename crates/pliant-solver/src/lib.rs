//! # pliant-solver
//!
//! Simulation state and the seam an external position-based dynamics
//! solver plugs into.
//!
//! ## Key Types
//!
//! - [`SimulationState`] — per-vertex velocities, inverse masses, estimate positions, constraints
//! - [`Constraint`] — fixed-point and distance constraints
//! - [`BodyConfig`] — per-body configuration (TOML)
//! - [`SoftBody`] — a mesh paired with its simulation state
//! - [`SolverStrategy`] — pluggable solver trait
//! - [`BallisticStub`] — explicit stub solver (no constraint projection)

pub mod ballistic;
pub mod body;
pub mod config;
pub mod constraint;
pub mod state;
pub mod strategy;

pub use ballistic::BallisticStub;
pub use body::SoftBody;
pub use config::BodyConfig;
pub use constraint::{distance_constraints_from_edges, Constraint};
pub use state::SimulationState;
pub use strategy::{SolverStrategy, StepResult};
