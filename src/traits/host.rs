use std::time::Instant;

use crate::core::Modifiers;

/// Window side of the trackball - supplies ambient input state and redraws
pub trait InputHost {
    /// Modifier keys currently held
    fn modifiers(&self) -> Modifiers;

    /// Viewport width in pixels, used to scale drag rotations
    fn viewport_width(&self) -> u32;

    /// Ask the window to redraw after the transform changed
    fn request_redraw(&self);

    /// Timestamp for double-click detection
    fn now(&self) -> Instant {
        Instant::now()
    }
}
