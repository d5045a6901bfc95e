//! Translation from winit's native events into [`PlatformEvent`]s.

use pfe_core::{Key, MouseButton, PlatformEvent};
use winit::event::{MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Map a winit window event, or `None` for events the engine does not track.
pub fn translate_window_event(event: &WindowEvent) -> Option<PlatformEvent> {
    match event {
        WindowEvent::Resized(size) => Some(PlatformEvent::Resized {
            width: size.width,
            height: size.height,
        }),
        WindowEvent::KeyboardInput { event, .. } => Some(PlatformEvent::Key {
            key: map_physical_key(event.physical_key),
            down: event.state.is_pressed(),
        }),
        WindowEvent::MouseInput { state, button, .. } => {
            map_mouse_button(*button).map(|button| PlatformEvent::Button {
                button,
                down: state.is_pressed(),
            })
        }
        WindowEvent::CursorMoved { position, .. } => Some(PlatformEvent::PointerMoved {
            x: position.x,
            y: position.y,
        }),
        WindowEvent::Focused(focused) => Some(PlatformEvent::Focus(*focused)),
        WindowEvent::CloseRequested => Some(PlatformEvent::CloseRequested),
        _ => None,
    }
}

pub fn map_physical_key(key: PhysicalKey) -> Key {
    match key {
        PhysicalKey::Code(code) => map_key(code),
        PhysicalKey::Unidentified(native) => {
            log::trace!("Unidentified native key {:?}", native);
            Key::None
        }
    }
}

/// Keys the engine does not know collapse onto [`Key::None`] rather than
/// being dropped.
pub fn map_key(key_code: KeyCode) -> Key {
    match key_code {
        KeyCode::KeyA => Key::A,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyG => Key::G,
        KeyCode::KeyH => Key::H,
        KeyCode::KeyI => Key::I,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyK => Key::K,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyO => Key::O,
        KeyCode::KeyP => Key::P,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyT => Key::T,
        KeyCode::KeyU => Key::U,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyY => Key::Y,
        KeyCode::KeyZ => Key::Z,
        KeyCode::Digit0 => Key::K0,
        KeyCode::Digit1 => Key::K1,
        KeyCode::Digit2 => Key::K2,
        KeyCode::Digit3 => Key::K3,
        KeyCode::Digit4 => Key::K4,
        KeyCode::Digit5 => Key::K5,
        KeyCode::Digit6 => Key::K6,
        KeyCode::Digit7 => Key::K7,
        KeyCode::Digit8 => Key::K8,
        KeyCode::Digit9 => Key::K9,
        KeyCode::F1 => Key::F1,
        KeyCode::F2 => Key::F2,
        KeyCode::F3 => Key::F3,
        KeyCode::F4 => Key::F4,
        KeyCode::F5 => Key::F5,
        KeyCode::F6 => Key::F6,
        KeyCode::F7 => Key::F7,
        KeyCode::F8 => Key::F8,
        KeyCode::F9 => Key::F9,
        KeyCode::F10 => Key::F10,
        KeyCode::F11 => Key::F11,
        KeyCode::F12 => Key::F12,
        KeyCode::ArrowUp => Key::Up,
        KeyCode::ArrowDown => Key::Down,
        KeyCode::ArrowLeft => Key::Left,
        KeyCode::ArrowRight => Key::Right,
        KeyCode::Space => Key::Space,
        KeyCode::Tab => Key::Tab,
        KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
        KeyCode::ControlLeft | KeyCode::ControlRight => Key::Ctrl,
        KeyCode::Insert => Key::Insert,
        KeyCode::Delete => Key::Delete,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Backspace => Key::Back,
        KeyCode::Escape => Key::Escape,
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::Pause => Key::Pause,
        KeyCode::ScrollLock => Key::Scroll,
        KeyCode::Numpad0 => Key::Np0,
        KeyCode::Numpad1 => Key::Np1,
        KeyCode::Numpad2 => Key::Np2,
        KeyCode::Numpad3 => Key::Np3,
        KeyCode::Numpad4 => Key::Np4,
        KeyCode::Numpad5 => Key::Np5,
        KeyCode::Numpad6 => Key::Np6,
        KeyCode::Numpad7 => Key::Np7,
        KeyCode::Numpad8 => Key::Np8,
        KeyCode::Numpad9 => Key::Np9,
        KeyCode::NumpadMultiply => Key::NpMul,
        KeyCode::NumpadDivide => Key::NpDiv,
        KeyCode::NumpadAdd => Key::NpAdd,
        KeyCode::NumpadSubtract => Key::NpSub,
        KeyCode::NumpadDecimal => Key::NpDecimal,
        other => {
            log::trace!("Unmapped key {:?}", other);
            Key::None
        }
    }
}

/// Only left, right and middle are tracked; extra buttons are ignored.
pub fn map_mouse_button(button: WinitMouseButton) -> Option<MouseButton> {
    match button {
        WinitMouseButton::Left => Some(MouseButton::Left),
        WinitMouseButton::Right => Some(MouseButton::Right),
        WinitMouseButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalSize;
    use winit::keyboard::NativeKeyCode;

    #[test]
    fn letters_digits_and_function_keys_map() {
        assert_eq!(map_key(KeyCode::KeyA), Key::A);
        assert_eq!(map_key(KeyCode::KeyZ), Key::Z);
        assert_eq!(map_key(KeyCode::Digit0), Key::K0);
        assert_eq!(map_key(KeyCode::Digit9), Key::K9);
        assert_eq!(map_key(KeyCode::F1), Key::F1);
        assert_eq!(map_key(KeyCode::F12), Key::F12);
        assert_eq!(map_key(KeyCode::Numpad5), Key::Np5);
        assert_eq!(map_key(KeyCode::NumpadDecimal), Key::NpDecimal);
    }

    #[test]
    fn left_and_right_modifiers_share_a_key() {
        assert_eq!(map_key(KeyCode::ShiftLeft), Key::Shift);
        assert_eq!(map_key(KeyCode::ShiftRight), Key::Shift);
        assert_eq!(map_key(KeyCode::ControlLeft), Key::Ctrl);
        assert_eq!(map_key(KeyCode::ControlRight), Key::Ctrl);
    }

    #[test]
    fn both_enter_keys_map_to_enter() {
        assert_eq!(map_key(KeyCode::Enter), Key::Enter);
        assert_eq!(map_key(KeyCode::NumpadEnter), Key::Enter);
    }

    #[test]
    fn unknown_keys_map_to_none() {
        assert_eq!(map_key(KeyCode::F24), Key::None);
        assert_eq!(map_key(KeyCode::CapsLock), Key::None);
        assert_eq!(
            map_physical_key(PhysicalKey::Unidentified(NativeKeyCode::Unidentified)),
            Key::None
        );
        assert_eq!(map_physical_key(PhysicalKey::Code(KeyCode::KeyQ)), Key::Q);
    }

    #[test]
    fn only_three_mouse_buttons_are_tracked() {
        assert_eq!(map_mouse_button(WinitMouseButton::Left), Some(MouseButton::Left));
        assert_eq!(map_mouse_button(WinitMouseButton::Right), Some(MouseButton::Right));
        assert_eq!(map_mouse_button(WinitMouseButton::Middle), Some(MouseButton::Middle));
        assert_eq!(map_mouse_button(WinitMouseButton::Back), None);
        assert_eq!(map_mouse_button(WinitMouseButton::Other(9)), None);
    }

    #[test]
    fn window_events_translate() {
        assert_eq!(
            translate_window_event(&WindowEvent::Resized(PhysicalSize::new(640, 480))),
            Some(PlatformEvent::Resized {
                width: 640,
                height: 480,
            })
        );
        assert_eq!(
            translate_window_event(&WindowEvent::Focused(true)),
            Some(PlatformEvent::Focus(true))
        );
        assert_eq!(
            translate_window_event(&WindowEvent::CloseRequested),
            Some(PlatformEvent::CloseRequested)
        );
        assert_eq!(translate_window_event(&WindowEvent::RedrawRequested), None);
    }
}
