use glam::IVec2;
use std::fmt;

pub type DoubleClickFn = Box<dyn FnMut(IVec2)>;
pub type PointerSpanFn = Box<dyn FnMut(IVec2, IVec2)>;

/// Optional application hooks fired by the trackball
///
/// Registering again replaces the previous handler. Empty slots are no-ops.
#[derive(Default)]
pub struct Callbacks {
    double_click: Option<DoubleClickFn>,
    button: Option<PointerSpanFn>,
    motion: Option<PointerSpanFn>,
}

impl Callbacks {
    pub fn set_double_click(&mut self, f: impl FnMut(IVec2) + 'static) {
        self.double_click = Some(Box::new(f));
    }

    pub fn set_button(&mut self, f: impl FnMut(IVec2, IVec2) + 'static) {
        self.button = Some(Box::new(f));
    }

    pub fn set_motion(&mut self, f: impl FnMut(IVec2, IVec2) + 'static) {
        self.motion = Some(Box::new(f));
    }

    pub(crate) fn double_click(&mut self, at: IVec2) {
        if let Some(f) = self.double_click.as_mut() {
            f(at);
        }
    }

    pub(crate) fn button(&mut self, from: IVec2, to: IVec2) {
        if let Some(f) = self.button.as_mut() {
            f(from, to);
        }
    }

    pub(crate) fn motion(&mut self, from: IVec2, to: IVec2) {
        if let Some(f) = self.motion.as_mut() {
            f(from, to);
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("double_click", &self.double_click.is_some())
            .field("button", &self.button.is_some())
            .field("motion", &self.motion.is_some())
            .finish()
    }
}
