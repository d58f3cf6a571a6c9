//! # pliant-io
//!
//! Geometry input for the Pliant core: a line-oriented OBJ parser that
//! builds a [`DeformableMesh`](pliant_mesh::DeformableMesh), and a
//! validator that callers run before handing a mesh to rendering or
//! simulation.

pub mod obj;
pub mod validator;

pub use obj::{load_obj, load_obj_with_report, parse_obj, parse_obj_with_report, read_obj, ParseReport};
pub use validator::validate_mesh;
