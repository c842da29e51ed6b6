use glam::IVec2;

/// Mouse buttons the trackball reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// One notch of the scroll wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WheelDirection {
    Up,
    Down,
}

/// Navigation keys handled by the trackball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialKey {
    Up,
    Down,
    Left,
    Right,
    Home,
}

/// Raw input forwarded from the window host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Button {
        button: MouseButton,
        state: ButtonState,
        position: IVec2,
    },
    Motion {
        position: IVec2,
    },
    Wheel(WheelDirection),
    Key(SpecialKey),
}
