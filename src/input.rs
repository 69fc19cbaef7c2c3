//! Keyboard mapping
//!
//! Translates key presses into the handful of actions the orrery
//! understands. Letter keys match on the character they type, so Q and P
//! follow the keyboard layout; Escape, Space and the arrows match on their
//! physical position. Unmapped keys are ignored.

use winit::keyboard::{Key, KeyCode, PhysicalKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Quit,
    TogglePause,
    RotateLeft,
    RotateRight,
    RotateUp,
    RotateDown,
}

impl InputAction {
    /// Escape/Q quit, P/Space pause, arrows rotate the camera.
    pub fn from_key(logical: &Key, physical: PhysicalKey) -> Option<Self> {
        if let Key::Character(text) = logical {
            match text.as_str() {
                "q" | "Q" => return Some(Self::Quit),
                "p" | "P" => return Some(Self::TogglePause),
                _ => {}
            }
        }

        let PhysicalKey::Code(code) = physical else {
            return None;
        };
        match code {
            KeyCode::Escape => Some(Self::Quit),
            KeyCode::Space => Some(Self::TogglePause),
            KeyCode::ArrowLeft => Some(Self::RotateLeft),
            KeyCode::ArrowRight => Some(Self::RotateRight),
            KeyCode::ArrowUp => Some(Self::RotateUp),
            KeyCode::ArrowDown => Some(Self::RotateDown),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::NamedKey;

    fn typed(text: &str, code: KeyCode) -> Option<InputAction> {
        InputAction::from_key(&Key::Character(text.into()), PhysicalKey::Code(code))
    }

    fn named(key: NamedKey, code: KeyCode) -> Option<InputAction> {
        InputAction::from_key(&Key::Named(key), PhysicalKey::Code(code))
    }

    #[test]
    fn test_key_map() {
        assert_eq!(named(NamedKey::Escape, KeyCode::Escape), Some(InputAction::Quit));
        assert_eq!(typed("q", KeyCode::KeyQ), Some(InputAction::Quit));
        assert_eq!(typed("Q", KeyCode::KeyQ), Some(InputAction::Quit));
        assert_eq!(
            named(NamedKey::Space, KeyCode::Space),
            Some(InputAction::TogglePause)
        );
        assert_eq!(typed("p", KeyCode::KeyP), Some(InputAction::TogglePause));
        assert_eq!(
            named(NamedKey::ArrowUp, KeyCode::ArrowUp),
            Some(InputAction::RotateUp)
        );
        assert_eq!(typed("w", KeyCode::KeyW), None);
    }

    #[test]
    fn test_letters_follow_layout() {
        // AZERTY: the key in the QWERTY Q position types 'a', and 'q' sits on KeyA
        assert_eq!(typed("a", KeyCode::KeyQ), None);
        assert_eq!(typed("q", KeyCode::KeyA), Some(InputAction::Quit));
        // Dvorak: 'p' sits on the QWERTY R position
        assert_eq!(typed("p", KeyCode::KeyR), Some(InputAction::TogglePause));
    }
}
