//! Mode lifecycle sequencing.
//!
//! Guarantees the stop/settle/setup order between modes: the outgoing
//! mode is stopped first, a short quiet gap passes with no mode owning
//! the frame buffer, then the incoming mode is set up. The gap is a
//! deadline checked on later polls, never a sleep.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::mode::ModeSlot;
use crate::ring::{Ring, RingDriver};
use crate::rng::RandomSource;

pub struct ModeDispatcher {
    active: Option<usize>,
    settle_until: Option<Instant>,
    settle_delay: Duration,
}

impl ModeDispatcher {
    #[must_use]
    pub const fn new(settle_delay: Duration) -> Self {
        Self {
            active: None,
            settle_until: None,
            settle_delay,
        }
    }

    /// Mode currently owning the frame buffer, if any. `None` during the
    /// settle gap between modes.
    #[must_use]
    pub const fn active(&self) -> Option<usize> {
        self.active
    }

    /// Drive the mode list toward `requested` and run whichever mode is
    /// active at `now`.
    pub fn dispatch<D: RingDriver, const N: usize>(
        &mut self,
        requested: usize,
        now: Instant,
        modes: &mut [ModeSlot<N>],
        ring: &mut Ring<D, N>,
        rng: &mut dyn RandomSource,
    ) {
        if let Some(ready_at) = self.settle_until.take() {
            if now < ready_at {
                // Still settling. The outgoing mode is already stopped,
                // and the target tracks whatever is requested when the
                // deadline passes.
                self.settle_until = Some(ready_at);
                return;
            }
            modes[requested].setup(ring, rng);
            self.active = Some(requested);
        } else if self.active != Some(requested) {
            if let Some(index) = self.active {
                modes[index].stop();
                #[cfg(feature = "esp32-log")]
                println!("mode {} -> {}", index, requested);
                self.active = None;
                self.settle_until = Some(now + self.settle_delay);
                return;
            }
            // Nothing to wind down on the first dispatch.
            modes[requested].setup(ring, rng);
            self.active = Some(requested);
        }

        if let Some(index) = self.active {
            modes[index].run(now, ring, rng);
        }
    }
}
