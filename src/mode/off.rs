//! Everything dark.

use embassy_time::Instant;

use crate::color::BLACK;
use crate::mode::Mode;
use crate::ring::{Ring, RingDriver};
use crate::rng::RandomSource;

/// Blanks the ring on activation and then stays quiet.
pub struct OffMode;

impl OffMode {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for OffMode {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Mode<N> for OffMode {
    fn setup<D: RingDriver>(&mut self, ring: &mut Ring<D, N>, _rng: &mut dyn RandomSource) {
        ring.clear_to(BLACK);
        ring.show();
    }

    fn run<D: RingDriver>(
        &mut self,
        _now: Instant,
        _ring: &mut Ring<D, N>,
        _rng: &mut dyn RandomSource,
    ) {
    }

    fn stop(&mut self) {}
}
