use anyhow::Result;
use glam::{IVec2, Mat4, Vec3};
use log::{debug, trace};

use super::callbacks::Callbacks;
use super::double_click::DoubleClick;
use super::event::{ButtonState, InputEvent, MouseButton, SpecialKey, WheelDirection};
use super::mode::{InteractionMode, ModeEvaluator};
use crate::config::TrackballConfig;
use crate::math::AxisAngle;
use crate::traits::InputHost;

/// Button that pans along Z while held, regardless of modifiers
pub const PAN_Z_BUTTON: MouseButton = MouseButton::Middle;

/// Virtual trackball - turns pointer and key input into a model transform
///
/// No modifier: drag rotates. Ctrl: drag pans in X/Y. Shift (or the middle
/// button): drag pans in Z. Alt: drag scales. Arrow keys do the same in
/// fixed steps, Home resets and the wheel always scales.
#[derive(Debug)]
pub struct TrackballController {
    config: TrackballConfig,
    translation: Vec3,
    rotation: AxisAngle,
    scale: f32,
    offset: Vec3,
    last_position: IVec2,
    button_down: bool,
    modes: ModeEvaluator,
    double_click: DoubleClick,
    callbacks: Callbacks,
}

impl TrackballController {
    pub fn new() -> Self {
        Self::build(TrackballConfig::default())
    }

    /// Controller with custom tuning, rejected if the config is invalid
    pub fn with_config(config: TrackballConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: TrackballConfig) -> Self {
        let double_click = DoubleClick::new(config.double_click_window());
        Self {
            config,
            translation: Vec3::ZERO,
            rotation: AxisAngle::IDENTITY,
            scale: 1.0,
            offset: Vec3::ZERO,
            last_position: IVec2::ZERO,
            button_down: false,
            modes: ModeEvaluator::new(),
            double_click,
            callbacks: Callbacks::default(),
        }
    }

    // === Callback registration ===

    pub fn on_double_click(&mut self, f: impl FnMut(IVec2) + 'static) {
        self.callbacks.set_double_click(f);
    }

    pub fn on_button(&mut self, f: impl FnMut(IVec2, IVec2) + 'static) {
        self.callbacks.set_button(f);
    }

    pub fn on_motion(&mut self, f: impl FnMut(IVec2, IVec2) + 'static) {
        self.callbacks.set_motion(f);
    }

    // === Event handlers ===

    /// Dispatch a translated window event
    pub fn handle_event(&mut self, host: &impl InputHost, event: &InputEvent) {
        match *event {
            InputEvent::Button {
                button,
                state,
                position,
            } => self.mouse_button(host, button, state, position),
            InputEvent::Motion { position } => self.mouse_motion(host, position),
            InputEvent::Wheel(direction) => self.mouse_wheel(host, direction),
            InputEvent::Key(key) => {
                self.special_key(host, key);
            }
        }
    }

    pub fn mouse_button(
        &mut self,
        host: &impl InputHost,
        button: MouseButton,
        state: ButtonState,
        position: IVec2,
    ) {
        self.last_position = position;

        match state {
            ButtonState::Released => {
                self.button_down = false;
                if button == PAN_Z_BUTTON {
                    self.modes
                        .evaluate(host.modifiers(), Some(InteractionMode::Rotate));
                }
            }
            ButtonState::Pressed => {
                self.button_down = true;
                self.callbacks.button(position, position);

                if button == PAN_Z_BUTTON {
                    self.modes
                        .evaluate(host.modifiers(), Some(InteractionMode::PanZ));
                }

                if self.double_click.press(host.now()) {
                    debug!("double click at {}", position);
                    self.callbacks.double_click(position);
                }
            }
        }

        host.request_redraw();
    }

    pub fn mouse_motion(&mut self, host: &impl InputHost, position: IVec2) {
        let delta = if self.button_down {
            let from = self.last_position;
            self.callbacks.motion(from, position);
            self.last_position = position;
            position - from
        } else {
            IVec2::ZERO
        };

        let mode = self.modes.evaluate(host.modifiers(), None);
        trace!("motion {} delta {} mode {:?}", position, delta, mode);

        match mode {
            InteractionMode::Rotate => {
                self.rotate(delta, host.viewport_width());
            }
            InteractionMode::Scale => {
                self.adjust_scale(delta.y as f32 / self.config.scale_divisor);
            }
            InteractionMode::PanXY => {
                self.translation.x += delta.x as f32 / self.config.pan_xy_divisor;
                self.translation.y -= delta.y as f32 / self.config.pan_xy_divisor;
            }
            InteractionMode::PanZ => {
                self.translation.z += delta.y as f32 / self.config.pan_z_divisor;
            }
        }

        host.request_redraw();
    }

    /// Scale up or down by one wheel notch, independent of the mode
    pub fn mouse_wheel(&mut self, host: &impl InputHost, direction: WheelDirection) {
        let step = self.config.wheel_scale_step;
        match direction {
            WheelDirection::Up => self.adjust_scale(step),
            WheelDirection::Down => self.adjust_scale(-step),
        }
        host.request_redraw();
    }

    /// Apply one navigation key press, returns false if it was ignored
    pub fn special_key(&mut self, host: &impl InputHost, key: SpecialKey) -> bool {
        if key == SpecialKey::Home {
            self.reset();
            host.request_redraw();
            return true;
        }

        let handled = match self.modes.evaluate(host.modifiers(), None) {
            InteractionMode::Rotate => {
                let step = self.config.key_rotate_pixels;
                let delta = match key {
                    SpecialKey::Up => IVec2::new(0, -step),
                    SpecialKey::Down => IVec2::new(0, step),
                    SpecialKey::Left => IVec2::new(-step, 0),
                    SpecialKey::Right => IVec2::new(step, 0),
                    SpecialKey::Home => return false,
                };
                self.rotate(delta, host.viewport_width());
                true
            }
            InteractionMode::PanXY => {
                let step = self.config.key_pan_step;
                match key {
                    SpecialKey::Up => self.translation.y += step,
                    SpecialKey::Down => self.translation.y -= step,
                    SpecialKey::Left => self.translation.x -= step,
                    SpecialKey::Right => self.translation.x += step,
                    SpecialKey::Home => return false,
                }
                true
            }
            InteractionMode::PanZ => {
                let step = self.config.key_pan_step;
                match key {
                    SpecialKey::Up => self.translation.z -= step,
                    SpecialKey::Down => self.translation.z += step,
                    _ => return false,
                }
                true
            }
            InteractionMode::Scale => {
                let step = self.config.key_scale_step;
                match key {
                    SpecialKey::Up => self.adjust_scale(step),
                    SpecialKey::Down => self.adjust_scale(-step),
                    _ => return false,
                }
                true
            }
        };

        if handled {
            host.request_redraw();
        }
        handled
    }

    // === Commands and queries ===

    /// Restore translation, rotation and scale; the offset is kept
    pub fn reset(&mut self) {
        debug!("trackball reset");
        self.translation = Vec3::ZERO;
        self.rotation = AxisAngle::IDENTITY;
        self.scale = 1.0;
        self.last_position = IVec2::ZERO;
    }

    /// Model transform, rotating and scaling about the offset pivot
    pub fn transform(&self) -> Mat4 {
        Mat4::from_translation(self.offset)
            * Mat4::from_translation(self.translation)
            * Mat4::from_axis_angle(self.rotation.axis, self.rotation.angle)
            * Mat4::from_scale(self.scale())
            * Mat4::from_translation(-self.offset)
    }

    pub fn set_offset(&mut self, offset: Vec3) {
        self.offset = offset;
    }

    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    pub fn rotation(&self) -> AxisAngle {
        self.rotation
    }

    /// Uniform scale, all components equal
    pub fn scale(&self) -> Vec3 {
        Vec3::splat(self.scale)
    }

    pub fn mode(&self) -> InteractionMode {
        self.modes.mode()
    }

    pub fn is_button_down(&self) -> bool {
        self.button_down
    }

    pub fn last_position(&self) -> IVec2 {
        self.last_position
    }

    fn rotate(&mut self, delta: IVec2, viewport_width: u32) {
        self.rotation.compose_drag(
            delta.x,
            delta.y,
            viewport_width,
            self.config.rotate_dead_zone,
        );
    }

    fn adjust_scale(&mut self, delta: f32) {
        self.scale = self.config.clamp_scale(self.scale + delta);
    }
}

impl Default for TrackballController {
    fn default() -> Self {
        Self::new()
    }
}
