use quadview_render::Camera;

/// A high-level action produced from raw input.
///
/// The camera and the application shell consume actions, never raw events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,
    /// Relative pointer motion in whole pixels.
    Look { dx: i32, dy: i32 },
    /// Grab or release the pointer.
    ToggleCapture,
    /// Leave the frame loop.
    Quit,
}

impl Action {
    /// Apply a camera action. Returns `false` for actions the camera does not handle.
    pub fn apply(self, camera: &mut Camera, speed: f32) -> bool {
        match self {
            Self::MoveForward => camera.move_forward(speed),
            Self::MoveBackward => camera.move_backward(speed),
            Self::MoveLeft => camera.move_left(speed),
            Self::MoveRight => camera.move_right(speed),
            Self::Look { dx, dy } => camera.mouse_look(dx, dy),
            Self::ToggleCapture | Self::Quit => return false,
        }
        true
    }
}

/// Apply actions to the camera in order and return the ones it did not handle.
pub fn dispatch(
    actions: impl IntoIterator<Item = Action>,
    camera: &mut Camera,
    speed: f32,
) -> Vec<Action> {
    actions
        .into_iter()
        .filter(|action| !action.apply(camera, speed))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn move_actions_translate_the_camera() {
        let mut cam = Camera::default();
        assert!(Action::MoveForward.apply(&mut cam, 0.5));
        assert!(Action::MoveRight.apply(&mut cam, 0.25));
        assert_eq!(cam.position, Vec3::new(0.25, 0.0, 4.5));
    }

    #[test]
    fn look_action_turns_the_camera() {
        let mut cam = Camera::default();
        assert!(Action::Look { dx: 10, dy: 0 }.apply(&mut cam, 0.1));
        assert!(cam.view_direction().x > 0.0);
        assert_eq!(cam.position, Vec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn shell_actions_pass_through_dispatch() {
        let mut cam = Camera::default();
        let rest = dispatch(
            [Action::ToggleCapture, Action::MoveBackward, Action::Quit],
            &mut cam,
            1.0,
        );
        assert_eq!(rest, vec![Action::ToggleCapture, Action::Quit]);
        assert_eq!(cam.position, Vec3::new(0.0, 0.0, 6.0));
    }
}
