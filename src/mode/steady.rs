//! Constant white light.

use embassy_time::Instant;

use crate::color::{Rgbw, white};
use crate::mode::Mode;
use crate::ring::{Ring, RingDriver};
use crate::rng::RandomSource;

/// Fills the ring with the white emitter at a fixed level.
pub struct SteadyMode {
    color: Rgbw,
}

impl SteadyMode {
    #[must_use]
    pub const fn new(level: u8) -> Self {
        Self {
            color: white(level),
        }
    }
}

impl<const N: usize> Mode<N> for SteadyMode {
    fn setup<D: RingDriver>(&mut self, ring: &mut Ring<D, N>, _rng: &mut dyn RandomSource) {
        ring.clear_to(self.color);
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
