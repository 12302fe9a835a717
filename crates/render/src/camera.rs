use glam::{Mat4, Quat, Vec3};
use quadview_common::{CameraConfig, LookMode, MoveMode};

/// Degrees of yaw per pixel of horizontal pointer motion.
pub const DEFAULT_SENSITIVITY: f32 = 0.1;

/// Maximum elevation above or below the horizon in `LookMode::YawPitch`.
const PITCH_LIMIT_DEGREES: f32 = 89.0;

/// First-person camera: an eye position, a look direction and a fixed up vector.
///
/// The view direction is kept unit length by every look operation. The
/// constructor takes vectors as given, so a zero or up-parallel direction
/// yields a degenerate view matrix rather than an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// World-space eye position.
    pub position: Vec3,
    view_direction: Vec3,
    up_vector: Vec3,
    /// Degrees of rotation per pixel of pointer motion.
    pub sensitivity: f32,
    pub move_mode: MoveMode,
    pub look_mode: LookMode,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, Vec3::Y)
    }
}

impl Camera {
    pub fn new(eye: Vec3, view_direction: Vec3, up_vector: Vec3) -> Self {
        Self {
            position: eye,
            view_direction,
            up_vector,
            sensitivity: DEFAULT_SENSITIVITY,
            move_mode: MoveMode::WorldAxes,
            look_mode: LookMode::YawOnly,
        }
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            sensitivity: config.sensitivity,
            move_mode: config.move_mode,
            look_mode: config.look_mode,
            ..Self::new(config.eye, config.view_direction, config.up)
        }
    }

    pub fn view_direction(&self) -> Vec3 {
        self.view_direction
    }

    pub fn up_vector(&self) -> Vec3 {
        self.up_vector
    }

    /// The point the camera looks at, one unit along the view direction.
    pub fn target(&self) -> Vec3 {
        self.position + self.view_direction
    }

    /// Right-handed look-at transform from world space into camera space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target(), self.up_vector)
    }

    /// Axis that forward/backward movement follows.
    pub fn forward(&self) -> Vec3 {
        match self.move_mode {
            MoveMode::WorldAxes => Vec3::NEG_Z,
            MoveMode::ViewRelative => self.view_direction.normalize_or_zero(),
        }
    }

    /// Axis that left/right movement follows.
    pub fn right(&self) -> Vec3 {
        match self.move_mode {
            MoveMode::WorldAxes => Vec3::X,
            MoveMode::ViewRelative => self
                .view_direction
                .cross(self.up_vector)
                .normalize_or_zero(),
        }
    }

    pub fn move_forward(&mut self, speed: f32) {
        self.position += self.forward() * speed;
    }

    pub fn move_backward(&mut self, speed: f32) {
        self.position -= self.forward() * speed;
    }

    pub fn move_left(&mut self, speed: f32) {
        self.position -= self.right() * speed;
    }

    pub fn move_right(&mut self, speed: f32) {
        self.position += self.right() * speed;
    }

    /// Turn the view by a relative pointer motion in pixels.
    ///
    /// Horizontal motion yaws about the up vector by `-delta_x * sensitivity`
    /// degrees, so moving the pointer right turns the view right. Vertical
    /// motion is ignored unless `look_mode` is `YawPitch`.
    pub fn mouse_look(&mut self, delta_x: i32, delta_y: i32) {
        let yaw = (-(delta_x as f32) * self.sensitivity).to_radians();
        let axis = self.up_vector.normalize();
        self.view_direction = (Quat::from_axis_angle(axis, yaw) * self.view_direction).normalize();

        if self.look_mode == LookMode::YawPitch && delta_y != 0 {
            self.pitch(delta_y);
        }
    }

    /// Elevation of the view direction above the plane orthogonal to up, in radians.
    pub fn elevation(&self) -> f32 {
        let up = self.up_vector.normalize();
        self.view_direction.dot(up).clamp(-1.0, 1.0).asin()
    }

    fn pitch(&mut self, delta_y: i32) {
        let right = self.view_direction.cross(self.up_vector);
        // Looking exactly along up: there is no right axis to pitch about.
        if right.length_squared() <= f32::EPSILON {
            return;
        }
        let limit = PITCH_LIMIT_DEGREES.to_radians();
        let current = self.elevation();
        let requested = current + (-(delta_y as f32) * self.sensitivity).to_radians();
        let angle = requested.clamp(-limit, limit) - current;

        let rotation = Quat::from_axis_angle(right.normalize(), angle);
        self.view_direction = (rotation * self.view_direction).normalize();
    }
}
