//! Momentary switch sampling and mode index cycling.

use embassy_time::{Duration, Instant};

/// Debounces a momentary switch and cycles a mode index on each release.
///
/// Press (`level == true`) arms nothing; the mode advances on release, so
/// holding the switch does not skip modes. Level changes closer together
/// than the debounce window are dropped entirely, including their effect
/// on the remembered level.
pub struct SwitchSelector {
    mode_count: usize,
    index: usize,
    last_level: bool,
    last_change: Option<Instant>,
    window: Duration,
}

impl SwitchSelector {
    #[must_use]
    pub const fn new(mode_count: usize, window: Duration) -> Self {
        Self {
            mode_count,
            index: 0,
            last_level: false,
            last_change: None,
            window,
        }
    }

    /// Feed one sample of the switch level, returning the selected mode.
    ///
    /// `level` is true while the switch is held down. `now` must not go
    /// backwards between calls.
    pub fn sample(&mut self, level: bool, now: Instant) -> usize {
        if level != self.last_level {
            if let Some(last) = self.last_change
                && now.duration_since(last) < self.window
            {
                // Bounce. Drop the edge without remembering it, so a
                // bounce pair cancels out instead of registering late.
                return self.index;
            }
            if !level {
                self.index = (self.index + 1) % self.mode_count;
            }
            self.last_change = Some(now);
            self.last_level = level;
        }
        self.index
    }

    /// Currently selected mode index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }
}
