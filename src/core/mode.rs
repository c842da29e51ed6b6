use log::debug;

/// What a pointer drag or arrow key currently does to the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionMode {
    #[default]
    Rotate,
    PanXY,
    PanZ,
    Scale,
}

/// Snapshot of the modifier keys held by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };
    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };
    pub const CTRL: Self = Self {
        ctrl: true,
        ..Self::NONE
    };
    pub const ALT: Self = Self {
        alt: true,
        ..Self::NONE
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Mode selected by holding exactly one modifier
    pub fn mode(&self) -> Option<InteractionMode> {
        match (self.shift, self.ctrl, self.alt) {
            (true, false, false) => Some(InteractionMode::PanZ),
            (false, true, false) => Some(InteractionMode::PanXY),
            (false, false, true) => Some(InteractionMode::Scale),
            _ => None,
        }
    }
}

/// Tracks modifier transitions and the resulting interaction mode
#[derive(Debug, Clone, Default)]
pub struct ModeEvaluator {
    mode: InteractionMode,
    previous: Modifiers,
}

impl ModeEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Update the mode from the current modifiers, or force `forced` if given
    ///
    /// Only modifier transitions change the mode. Releasing a modifier
    /// reverts to `Rotate` only while the mode is still the one that
    /// modifier selected.
    pub fn evaluate(
        &mut self,
        modifiers: Modifiers,
        forced: Option<InteractionMode>,
    ) -> InteractionMode {
        if let Some(mode) = forced {
            self.set_mode(mode);
            return mode;
        }

        if modifiers == self.previous {
            return self.mode;
        }

        if modifiers.is_empty() {
            let released = std::mem::replace(&mut self.previous, modifiers);
            if let Some(mode) = released.mode() {
                if self.mode == mode {
                    self.set_mode(InteractionMode::Rotate);
                }
            }
        } else {
            self.previous = modifiers;
            if let Some(mode) = modifiers.mode() {
                self.set_mode(mode);
            }
        }

        self.mode
    }

    fn set_mode(&mut self, mode: InteractionMode) {
        if self.mode != mode {
            debug!("trackball mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_rotate() {
        let mut eval = ModeEvaluator::new();
        assert_eq!(eval.mode(), InteractionMode::Rotate);
        assert_eq!(eval.evaluate(Modifiers::NONE, None), InteractionMode::Rotate);
    }

    #[test]
    fn test_modifier_presses_select_modes() {
        let cases = [
            (Modifiers::SHIFT, InteractionMode::PanZ),
            (Modifiers::CTRL, InteractionMode::PanXY),
            (Modifiers::ALT, InteractionMode::Scale),
        ];

        for (modifiers, expected) in cases {
            let mut eval = ModeEvaluator::new();
            assert_eq!(eval.evaluate(modifiers, None), expected);
            assert_eq!(eval.evaluate(Modifiers::NONE, None), InteractionMode::Rotate);
        }
    }

    #[test]
    fn test_held_modifier_keeps_mode() {
        let mut eval = ModeEvaluator::new();
        eval.evaluate(Modifiers::CTRL, None);
        assert_eq!(eval.evaluate(Modifiers::CTRL, None), InteractionMode::PanXY);
    }

    #[test]
    fn test_stale_release_does_not_clobber_forced_mode() {
        let mut eval = ModeEvaluator::new();
        eval.evaluate(Modifiers::CTRL, None);
        eval.evaluate(Modifiers::CTRL, Some(InteractionMode::PanZ));
        assert_eq!(eval.evaluate(Modifiers::NONE, None), InteractionMode::PanZ);
    }

    #[test]
    fn test_forced_mode_ignores_modifiers() {
        let mut eval = ModeEvaluator::new();
        assert_eq!(
            eval.evaluate(Modifiers::ALT, Some(InteractionMode::Rotate)),
            InteractionMode::Rotate
        );
    }

    #[test]
    fn test_combined_modifiers_are_ignored() {
        let mut eval = ModeEvaluator::new();
        let combo = Modifiers {
            shift: true,
            ctrl: true,
            alt: false,
        };
        assert_eq!(eval.evaluate(combo, None), InteractionMode::Rotate);
        assert_eq!(eval.evaluate(Modifiers::NONE, None), InteractionMode::Rotate);
    }

    #[test]
    fn test_switch_between_modifiers() {
        let mut eval = ModeEvaluator::new();
        eval.evaluate(Modifiers::SHIFT, None);
        assert_eq!(eval.evaluate(Modifiers::ALT, None), InteractionMode::Scale);
        assert_eq!(eval.evaluate(Modifiers::NONE, None), InteractionMode::Rotate);
    }
}
