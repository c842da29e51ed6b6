use glam::IVec2;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

use super::event::{ButtonState, InputEvent, MouseButton, SpecialKey, WheelDirection};
use super::mode::Modifiers;

/// Adapter that bridges Winit events to trackball input events
///
/// Winit reports buttons without a position and modifiers as separate
/// events, so both are tracked here.
#[derive(Debug, Clone, Default)]
pub struct WinitInput {
    /// Last cursor position (relative to window, physical pixels)
    cursor: IVec2,
    modifiers: Modifiers,
}

impl WinitInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent, returning the trackball event it maps to
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = Self::modifiers_from_state(modifiers.state());
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = IVec2::new(position.x as i32, position.y as i32);
                Some(InputEvent::Motion {
                    position: self.cursor,
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = Self::mouse_button_to_button(*button)?;
                Some(InputEvent::Button {
                    button,
                    state: Self::element_state(*state),
                    position: self.cursor,
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                Self::wheel_direction(delta).map(InputEvent::Wheel)
            }
            WindowEvent::KeyboardInput { event, .. } if event.state.is_pressed() => {
                match event.physical_key {
                    PhysicalKey::Code(keycode) => Self::keycode_to_key(keycode).map(InputEvent::Key),
                    PhysicalKey::Unidentified(_) => None,
                }
            }
            _ => None,
        }
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    fn element_state(state: ElementState) -> ButtonState {
        match state {
            ElementState::Pressed => ButtonState::Pressed,
            ElementState::Released => ButtonState::Released,
        }
    }

    /// Map Winit KeyCode to a navigation key
    fn keycode_to_key(keycode: KeyCode) -> Option<SpecialKey> {
        match keycode {
            KeyCode::ArrowUp => Some(SpecialKey::Up),
            KeyCode::ArrowDown => Some(SpecialKey::Down),
            KeyCode::ArrowLeft => Some(SpecialKey::Left),
            KeyCode::ArrowRight => Some(SpecialKey::Right),
            KeyCode::Home => Some(SpecialKey::Home),
            _ => None,
        }
    }

    /// Map Winit MouseButton to a trackball button
    fn mouse_button_to_button(button: winit::event::MouseButton) -> Option<MouseButton> {
        match button {
            winit::event::MouseButton::Left => Some(MouseButton::Left),
            winit::event::MouseButton::Middle => Some(MouseButton::Middle),
            winit::event::MouseButton::Right => Some(MouseButton::Right),
            _ => None,
        }
    }

    fn wheel_direction(delta: &MouseScrollDelta) -> Option<WheelDirection> {
        let y = match delta {
            MouseScrollDelta::LineDelta(_, y) => *y as f64,
            MouseScrollDelta::PixelDelta(position) => position.y,
        };

        if y > 0.0 {
            Some(WheelDirection::Up)
        } else if y < 0.0 {
            Some(WheelDirection::Down)
        } else {
            None
        }
    }

    fn modifiers_from_state(state: ModifiersState) -> Modifiers {
        Modifiers {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    // Note: most WindowEvent variants carry a DeviceId that cannot be built
    // outside winit, so these tests cover the mapping helpers

    #[test]
    fn test_new_adapter_empty() {
        let input = WinitInput::new();
        assert_eq!(input.cursor, IVec2::ZERO);
        assert!(input.modifiers().is_empty());
    }

    #[test]
    fn test_keycode_mapping() {
        assert_eq!(WinitInput::keycode_to_key(KeyCode::ArrowUp), Some(SpecialKey::Up));
        assert_eq!(WinitInput::keycode_to_key(KeyCode::ArrowDown), Some(SpecialKey::Down));
        assert_eq!(WinitInput::keycode_to_key(KeyCode::ArrowLeft), Some(SpecialKey::Left));
        assert_eq!(WinitInput::keycode_to_key(KeyCode::ArrowRight), Some(SpecialKey::Right));
        assert_eq!(WinitInput::keycode_to_key(KeyCode::Home), Some(SpecialKey::Home));
        assert_eq!(WinitInput::keycode_to_key(KeyCode::KeyW), None);
    }

    #[test]
    fn test_mouse_button_mapping() {
        assert_eq!(
            WinitInput::mouse_button_to_button(winit::event::MouseButton::Middle),
            Some(MouseButton::Middle)
        );
        assert_eq!(
            WinitInput::mouse_button_to_button(winit::event::MouseButton::Back),
            None
        );
    }

    #[test]
    fn test_wheel_direction() {
        assert_eq!(
            WinitInput::wheel_direction(&MouseScrollDelta::LineDelta(0.0, 1.0)),
            Some(WheelDirection::Up)
        );
        assert_eq!(
            WinitInput::wheel_direction(&MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -12.0))),
            Some(WheelDirection::Down)
        );
        assert_eq!(
            WinitInput::wheel_direction(&MouseScrollDelta::LineDelta(3.0, 0.0)),
            None
        );
    }

    #[test]
    fn test_modifiers_mapping() {
        assert_eq!(
            WinitInput::modifiers_from_state(ModifiersState::CONTROL),
            Modifiers::CTRL
        );
        assert_eq!(
            WinitInput::modifiers_from_state(ModifiersState::empty()),
            Modifiers::NONE
        );

        let combo = WinitInput::modifiers_from_state(ModifiersState::SHIFT | ModifiersState::ALT);
        assert!(combo.shift && combo.alt && !combo.ctrl);
        assert_eq!(combo.mode(), None);
    }

    #[test]
    fn test_element_state_mapping() {
        assert_eq!(WinitInput::element_state(ElementState::Pressed), ButtonState::Pressed);
        assert_eq!(WinitInput::element_state(ElementState::Released), ButtonState::Released);
    }
}
