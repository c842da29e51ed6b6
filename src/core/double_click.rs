use std::time::{Duration, Instant};

/// Default maximum gap between two presses of a double-click
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

/// Detects two presses closer together than a fixed window
#[derive(Debug, Clone, Copy)]
pub struct DoubleClick {
    window: Duration,
    last_press: Option<Instant>,
}

impl DoubleClick {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_press: None,
        }
    }

    /// Register a press at `now`, returns true if it completes a double-click
    ///
    /// Every press becomes the reference for the next one, so three quick
    /// presses report two double-clicks.
    pub fn press(&mut self, now: Instant) -> bool {
        let fired = self
            .last_press
            .map(|last| now.saturating_duration_since(last) < self.window)
            .unwrap_or(false);
        self.last_press = Some(now);
        fired
    }
}

impl Default for DoubleClick {
    fn default() -> Self {
        Self::new(DOUBLE_CLICK_WINDOW)
    }
}
