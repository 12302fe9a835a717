//! Rendering error types.

use crate::shaders::ShaderStage;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while setting up or driving the GPU.
#[derive(Error, Debug)]
pub enum RenderError {
    /// No adapter can present to the window surface.
    #[error("failed to find a compatible graphics adapter")]
    AdapterNotFound,

    #[error("failed to create graphics device: {0}")]
    DeviceCreation(#[from] wgpu::RequestDeviceError),

    #[error("failed to create surface: {0}")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),

    /// The surface reports no usable texture format.
    #[error("surface is not supported by the selected adapter")]
    SurfaceUnsupported,

    #[error("failed to read {stage} shader from {}: {source}", .path.display())]
    ShaderLoad {
        stage: ShaderStage,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{stage} shader compilation failed: {message}")]
    ShaderCompilation { stage: ShaderStage, message: String },

    /// Pipeline creation rejected the compiled stages, e.g. mismatched
    /// interfaces or a missing transform uniform.
    #[error("shader program link failed: {0}")]
    PipelineLink(String),
}

/// A specialized Result type for rendering operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;
