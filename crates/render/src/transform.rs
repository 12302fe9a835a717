use crate::camera::Camera;
use glam::Mat4;
use quadview_common::{FrameConfig, ProjectionConfig};

/// Perspective projection with wgpu's 0..1 depth range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y: 45.0_f32.to_radians(),
            aspect: 640.0 / 480.0,
            near: 0.1,
            far: 10.0,
        }
    }
}

impl Projection {
    pub fn from_config(config: &ProjectionConfig, width: u32, height: u32) -> Self {
        let mut projection = Self {
            fov_y: config.fov_degrees.to_radians(),
            near: config.near,
            far: config.far,
            ..Self::default()
        };
        projection.set_viewport(width, height);
        projection
    }

    /// Track the surface size. A zero height is treated as one pixel.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }
}

/// Model transform that spins the mesh about +Y by a fixed step each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelSpin {
    pub angle: f32,
    pub step: f32,
}

impl Default for ModelSpin {
    fn default() -> Self {
        Self {
            angle: 0.0,
            step: 0.01,
        }
    }
}

impl ModelSpin {
    pub fn from_config(config: &FrameConfig) -> Self {
        Self {
            angle: 0.0,
            step: config.spin_step,
        }
    }

    /// Advance one frame and return the new model matrix.
    pub fn advance(&mut self) -> Mat4 {
        self.angle += self.step;
        self.matrix()
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.angle)
    }
}

/// The three matrices that make up one frame's vertex transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransform {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
}

impl FrameTransform {
    /// Query the camera once and pair its view with the given projection and model.
    pub fn compose(camera: &Camera, projection: &Projection, model: Mat4) -> Self {
        Self {
            model,
            view: camera.view_matrix(),
            projection: projection.matrix(),
        }
    }

    /// `projection * view * model`, the value the vertex shader receives.
    pub fn model_view_projection(&self) -> Mat4 {
        self.projection * self.view * self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn default_projection_is_45_degrees_at_640x480() {
        let p = Projection::from_config(&ProjectionConfig::default(), 640, 480);
        assert_eq!(p, Projection::default());
        assert_eq!(
            p.matrix(),
            Mat4::perspective_rh(45.0_f32.to_radians(), 640.0 / 480.0, 0.1, 10.0)
        );
    }

    #[test]
    fn zero_height_viewport_does_not_divide_by_zero() {
        let mut p = Projection::default();
        p.set_viewport(800, 0);
        assert_eq!(p.aspect, 800.0);
        assert!(p.matrix().is_finite());
    }

    #[test]
    fn spin_advances_by_step() {
        let mut spin = ModelSpin::default();
        spin.advance();
        spin.advance();
        assert!((spin.angle - 0.02).abs() < 1e-7);
        assert_eq!(spin.matrix(), Mat4::from_rotation_y(spin.angle));
    }

    #[test]
    fn mvp_multiplies_projection_view_model_in_order() {
        let camera = Camera::default();
        let projection = Projection::default();
        let model = Mat4::from_rotation_y(0.3);
        let frame = FrameTransform::compose(&camera, &projection, model);

        assert_eq!(frame.view, camera.view_matrix());
        assert_eq!(
            frame.model_view_projection(),
            projection.matrix() * camera.view_matrix() * model
        );
    }

    #[test]
    fn quad_center_lands_inside_clip_volume() {
        let frame =
            FrameTransform::compose(&Camera::default(), &Projection::default(), Mat4::IDENTITY);
        let clip = frame.model_view_projection() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
        assert!((0.0..=1.0).contains(&ndc.z), "depth {} outside 0..1", ndc.z);
    }

    #[test]
    fn moving_past_far_plane_clips_the_mesh() {
        let mut camera = Camera::default();
        camera.move_backward(10.0); // eye at z = 15, beyond far = 10
        let frame = FrameTransform::compose(&camera, &Projection::default(), Mat4::IDENTITY);
        let clip = frame.model_view_projection() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(clip.z / clip.w > 1.0);
    }
}
