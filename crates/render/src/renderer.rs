use crate::camera::Camera;
use crate::transform::FrameTransform;
use glam::Mat4;
use std::fmt::Write;

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameState<'a> {
    /// Zero-based frame counter.
    pub frame: u64,
    /// Current model spin angle in radians.
    pub spin: f32,
    pub camera: &'a Camera,
    pub transform: &'a FrameTransform,
}

/// Renderer-agnostic interface.
///
/// A renderer reads the camera and frame transform; it never moves the camera.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&self, frame: &FrameState<'_>) -> Self::Output;
}

/// Produces a human-readable dump of the frame state.
///
/// Used by the headless CLI and in tests where no GPU is available.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn write_matrix(out: &mut String, label: &str, m: &Mat4) {
    let _ = writeln!(out, "{label}:");
    for i in 0..4 {
        let r = m.row(i);
        let _ = writeln!(out, "  [{:8.4} {:8.4} {:8.4} {:8.4}]", r.x, r.y, r.z, r.w);
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, frame: &FrameState<'_>) -> String {
        let cam = frame.camera;
        let p = cam.position;
        let d = cam.view_direction();
        let u = cam.up_vector();

        let mut out = String::new();
        let _ = writeln!(
            out,
            "=== Frame {} (spin={:.3} rad) ===",
            frame.frame, frame.spin
        );
        let _ = writeln!(out, "Eye: ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z);
        let _ = writeln!(out, "Direction: ({:.3}, {:.3}, {:.3})", d.x, d.y, d.z);
        let _ = writeln!(out, "Up: ({:.2}, {:.2}, {:.2})", u.x, u.y, u.z);
        let _ = writeln!(
            out,
            "Modes: move={:?} look={:?} sensitivity={}",
            cam.move_mode, cam.look_mode, cam.sensitivity
        );
        write_matrix(&mut out, "View", &frame.transform.view);
        write_matrix(&mut out, "MVP", &frame.transform.model_view_projection());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Projection;

    #[test]
    fn debug_renderer_default_camera() {
        let camera = Camera::default();
        let transform = FrameTransform::compose(&camera, &Projection::default(), Mat4::IDENTITY);
        let output = DebugTextRenderer::new().render(&FrameState {
            frame: 0,
            spin: 0.0,
            camera: &camera,
            transform: &transform,
        });

        assert!(output.contains("Frame 0"));
        assert!(output.contains("Eye: (0.00, 0.00, 5.00)"));
        assert!(output.contains("Direction: (0.000, 0.000, -1.000)"));
        assert!(output.contains("move=WorldAxes look=YawOnly"));
        assert!(output.contains("View:"));
        assert!(output.contains("MVP:"));
    }

    #[test]
    fn debug_renderer_reflects_camera_motion() {
        let mut camera = Camera::default();
        camera.move_left(1.0);
        let transform = FrameTransform::compose(&camera, &Projection::default(), Mat4::IDENTITY);
        let output = DebugTextRenderer::new().render(&FrameState {
            frame: 3,
            spin: 0.03,
            camera: &camera,
            transform: &transform,
        });

        assert!(output.contains("Frame 3 (spin=0.030 rad)"));
        assert!(output.contains("Eye: (-1.00, 0.00, 5.00)"));
        // View translation row carries the negated eye x.
        assert!(output.contains("1.0000"));
    }
}
