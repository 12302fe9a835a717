use quadview_common::DemoConfig;
use quadview_input::{Action, InputState, dispatch};
use quadview_render::{Camera, FramePacer, FrameTransform, ModelSpin, Projection};

/// Everything the frame loop owns apart from the window and GPU handles.
pub struct AppState {
    pub config: DemoConfig,
    pub camera: Camera,
    pub projection: Projection,
    pub spin: ModelSpin,
    pub input: InputState,
    pub pacer: FramePacer,
    pub frame: u64,
}

impl AppState {
    pub fn new(config: DemoConfig) -> Self {
        Self {
            camera: Camera::from_config(&config.camera),
            projection: Projection::from_config(
                &config.projection,
                config.window.width,
                config.window.height,
            ),
            spin: ModelSpin::from_config(&config.frame),
            input: InputState::new(),
            pacer: FramePacer::new(config.frame.target_fps),
            frame: 0,
            config,
        }
    }

    /// Apply this frame's pointer motion and held keys to the camera.
    /// Returns the actions the camera did not consume.
    pub fn apply_input(&mut self) -> Vec<Action> {
        let actions = self.input.frame_actions();
        dispatch(actions, &mut self.camera, self.config.camera.move_speed)
    }

    /// Advance the model spin and build this frame's transform.
    pub fn next_frame(&mut self) -> FrameTransform {
        let model = self.spin.advance();
        self.frame += 1;
        FrameTransform::compose(&self.camera, &self.projection, model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Mat4, Vec3};
    use quadview_input::Key;

    #[test]
    fn held_forward_key_moves_a_tenth_per_frame() {
        let mut state = AppState::new(DemoConfig::default());
        state.input.key_event(Key::W, true);
        for _ in 0..10 {
            assert!(state.apply_input().is_empty());
        }
        assert!((state.camera.position.z - 4.0).abs() < 1e-5);
    }

    #[test]
    fn pointer_motion_only_turns_while_captured() {
        let mut state = AppState::new(DemoConfig::default());
        state.input.record_motion(50.0, 0.0);
        state.apply_input();
        assert_eq!(state.camera.view_direction(), Vec3::NEG_Z);

        state.input.set_captured(true);
        state.input.record_motion(50.0, 0.0);
        state.apply_input();
        assert!(state.camera.view_direction().x > 0.0);
    }

    #[test]
    fn next_frame_spins_model_and_uses_camera_view() {
        let mut state = AppState::new(DemoConfig::default());
        let first = state.next_frame();
        let second = state.next_frame();
        assert_eq!(state.frame, 2);
        assert_eq!(first.model, Mat4::from_rotation_y(0.01));
        assert_eq!(second.view, state.camera.view_matrix());
        assert_ne!(first.model, second.model);
    }
}
