//! Shared types and configuration for the quadview demo.
//!
//! # Invariants
//! - Configuration is plain data; nothing here touches the GPU or the window.
//! - Camera vectors are accepted as given. Degenerate values are the caller's concern.

pub mod config;
pub mod types;

pub use config::{
    CameraConfig, ConfigError, DemoConfig, FrameConfig, ProjectionConfig, WindowConfig,
};
pub use types::{LookMode, MeshKind, MoveMode, UnknownMesh};

pub fn crate_info() -> &'static str {
    "quadview-common v0.1.0"
}
