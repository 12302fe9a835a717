//! wgpu render backend for the quadview demo.
//!
//! Uploads one hard-coded mesh, compiles a vertex/fragment shader pair with
//! captured validation errors, and draws the mesh each frame under a single
//! `projection * view * model` uniform.
//!
//! # Invariants
//! - The renderer never moves the camera; it only reads the frame transform.
//! - Shader compile and link failures are returned as [`RenderError`], never panics.

mod context;
mod error;
mod gpu;
mod mesh;
mod shaders;

pub use context::GpuContext;
pub use error::{RenderError, RenderResult};
pub use gpu::WgpuRenderer;
pub use mesh::{Mesh, Vertex};
pub use shaders::{
    FRAGMENT_ENTRY, FRAGMENT_FILE, FRAGMENT_SHADER, ShaderSet, ShaderStage, VERTEX_ENTRY,
    VERTEX_FILE, VERTEX_SHADER,
};

pub fn crate_info() -> &'static str {
    "quadview-render-wgpu v0.1.0"
}
