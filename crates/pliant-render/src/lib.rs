//! # pliant-render
//!
//! Pluggable render-target abstraction for Pliant.
//!
//! The core holds no device handles. It hands a [`RenderTarget`] flat,
//! already-expanded triangle lists (no index buffer) plus opaque camera
//! transforms. Provides a [`HeadlessRenderer`] stub and a
//! [`JsonFrameExporter`] for offline inspection.

pub mod json_exporter;
pub mod renderer;
pub use json_exporter::JsonFrameExporter;
pub use renderer::{CameraMatrices, HeadlessRenderer, RenderFrame, RenderTarget};
