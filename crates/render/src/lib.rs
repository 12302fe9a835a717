//! Rendering core: camera, frame transforms and frame pacing.
//!
//! Nothing in this crate touches the GPU. The wgpu backend consumes
//! [`FrameTransform`] values produced here.
//!
//! # Invariants
//! - The camera is owned by the application and passed by reference; no globals.
//! - The view direction is unit length after every look operation.
//! - The view matrix is queried once per frame and is a pure function of camera state.

mod camera;
mod pacing;
mod renderer;
mod transform;

pub use camera::{Camera, DEFAULT_SENSITIVITY};
pub use pacing::{FramePace, FramePacer};
pub use renderer::{DebugTextRenderer, FrameState, Renderer};
pub use transform::{FrameTransform, ModelSpin, Projection};

pub fn crate_info() -> &'static str {
    "quadview-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
