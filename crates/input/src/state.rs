use crate::action::Action;
use glam::DVec2;
use std::collections::HashSet;

/// Keys the demo responds to. Everything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Escape,
    Other,
}

impl Key {
    /// Map a WASD-style character, as used by scripted input.
    pub fn from_char(c: char) -> Self {
        match c.to_ascii_lowercase() {
            'w' => Self::W,
            'a' => Self::A,
            's' => Self::S,
            'd' => Self::D,
            _ => Self::Other,
        }
    }
}

/// Per-window input state: held keys, pointer capture, pending pointer motion.
#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<Key>,
    captured: bool,
    pending_motion: DVec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Record that the pointer was grabbed or released. Releasing drops pending motion.
    pub fn set_captured(&mut self, captured: bool) {
        if self.captured != captured {
            tracing::debug!(captured, "pointer capture changed");
        }
        self.captured = captured;
        if !captured {
            self.pending_motion = DVec2::ZERO;
        }
    }

    /// Track a key press or release. Returns an immediate action for edge-triggered keys.
    pub fn key_event(&mut self, key: Key, pressed: bool) -> Option<Action> {
        if !pressed {
            self.held.remove(&key);
            return None;
        }
        let repeat = !self.held.insert(key);
        match key {
            Key::Escape if !repeat => Some(Action::ToggleCapture),
            _ => None,
        }
    }

    /// Accumulate relative pointer motion. Ignored while the pointer is free.
    pub fn record_motion(&mut self, dx: f64, dy: f64) {
        if self.captured {
            self.pending_motion += DVec2::new(dx, dy);
        }
    }

    /// Drain this frame's actions: look first, then held movement keys.
    pub fn frame_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        let whole = self.pending_motion.trunc();
        if whole != DVec2::ZERO {
            self.pending_motion -= whole;
            actions.push(Action::Look {
                dx: whole.x as i32,
                dy: whole.y as i32,
            });
        }

        for (key, action) in [
            (Key::W, Action::MoveForward),
            (Key::S, Action::MoveBackward),
            (Key::A, Action::MoveLeft),
            (Key::D, Action::MoveRight),
        ] {
            if self.is_held(key) {
                actions.push(action);
            }
        }
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_keys_repeat_every_frame() {
        let mut input = InputState::new();
        input.key_event(Key::W, true);
        input.key_event(Key::D, true);
        assert_eq!(
            input.frame_actions(),
            vec![Action::MoveForward, Action::MoveRight]
        );
        assert_eq!(
            input.frame_actions(),
            vec![Action::MoveForward, Action::MoveRight]
        );

        input.key_event(Key::W, false);
        assert_eq!(input.frame_actions(), vec![Action::MoveRight]);
    }

    #[test]
    fn escape_toggles_once_per_press() {
        let mut input = InputState::new();
        assert_eq!(input.key_event(Key::Escape, true), Some(Action::ToggleCapture));
        // Auto-repeat while held.
        assert_eq!(input.key_event(Key::Escape, true), None);
        assert_eq!(input.key_event(Key::Escape, false), None);
        assert_eq!(input.key_event(Key::Escape, true), Some(Action::ToggleCapture));
    }

    #[test]
    fn motion_is_ignored_while_released() {
        let mut input = InputState::new();
        input.record_motion(25.0, 3.0);
        assert!(input.frame_actions().is_empty());
    }

    #[test]
    fn sub_pixel_motion_carries_over() {
        let mut input = InputState::new();
        input.set_captured(true);
        input.record_motion(0.6, -0.4);
        assert!(input.frame_actions().is_empty());

        input.record_motion(0.6, -0.7);
        assert_eq!(input.frame_actions(), vec![Action::Look { dx: 1, dy: -1 }]);

        input.record_motion(0.3, 0.0);
        assert!(input.frame_actions().is_empty());
    }

    #[test]
    fn look_comes_before_movement() {
        let mut input = InputState::new();
        input.set_captured(true);
        input.key_event(Key::S, true);
        input.record_motion(-12.0, 0.0);
        assert_eq!(
            input.frame_actions(),
            vec![Action::Look { dx: -12, dy: 0 }, Action::MoveBackward]
        );
    }

    #[test]
    fn releasing_capture_drops_pending_motion() {
        let mut input = InputState::new();
        input.set_captured(true);
        input.record_motion(40.0, 40.0);
        input.set_captured(false);
        input.set_captured(true);
        assert!(input.frame_actions().is_empty());
    }

    #[test]
    fn scripted_characters_map_to_keys() {
        assert_eq!(Key::from_char('W'), Key::W);
        assert_eq!(Key::from_char('a'), Key::A);
        assert_eq!(Key::from_char('x'), Key::Other);
    }
}
