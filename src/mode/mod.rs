//! Visual modes and their dispatch enum.

mod fader;
mod off;
mod rotator;
mod steady;

pub use fader::FaderMode;
pub use off::OffMode;
pub use rotator::RotatorMode;
pub use steady::SteadyMode;

use embassy_time::Instant;

use crate::color::{BLACK, Rgbw};
use crate::ring::{Ring, RingDriver};
use crate::rng::RandomSource;

/// Number of modes in the cycle order.
pub const MODE_COUNT: usize = 4;

/// Per-element transition endpoints.
///
/// Animated modes blend each element from `start` to `end` as slot
/// progress advances; at completion `end` becomes the next `start`.
#[derive(Debug, Clone, Copy)]
pub struct PixelState {
    pub start: Rgbw,
    pub end: Rgbw,
    pub pixel: u16,
}

impl PixelState {
    #[must_use]
    pub const fn new(pixel: u16) -> Self {
        Self {
            start: BLACK,
            end: BLACK,
            pixel,
        }
    }
}

/// One visual mode over a ring of `N` elements.
///
/// Lifecycle: `setup` once on activation, `run` on every poll while
/// active, `stop` once on deactivation. Only the active mode may touch
/// the ring; `stop` must leave no pending animation behind.
pub trait Mode<const N: usize> {
    /// Prepare internal state and paint the initial frame.
    fn setup<D: RingDriver>(&mut self, ring: &mut Ring<D, N>, rng: &mut dyn RandomSource);

    /// Advance to `now` and repaint if anything changed.
    fn run<D: RingDriver>(&mut self, now: Instant, ring: &mut Ring<D, N>, rng: &mut dyn RandomSource);

    /// Abandon any in-flight animation.
    fn stop(&mut self);
}

/// All modes in cycle order, dispatched without trait objects.
pub enum ModeSlot<const N: usize> {
    Off(OffMode),
    Fader(FaderMode),
    Rotator(RotatorMode<N>),
    Steady(SteadyMode),
}

impl<const N: usize> ModeSlot<N> {
    pub fn setup<D: RingDriver>(&mut self, ring: &mut Ring<D, N>, rng: &mut dyn RandomSource) {
        match self {
            Self::Off(mode) => mode.setup(ring, rng),
            Self::Fader(mode) => mode.setup(ring, rng),
            Self::Rotator(mode) => mode.setup(ring, rng),
            Self::Steady(mode) => mode.setup(ring, rng),
        }
    }

    pub fn run<D: RingDriver>(
        &mut self,
        now: Instant,
        ring: &mut Ring<D, N>,
        rng: &mut dyn RandomSource,
    ) {
        match self {
            Self::Off(mode) => mode.run(now, ring, rng),
            Self::Fader(mode) => mode.run(now, ring, rng),
            Self::Rotator(mode) => mode.run(now, ring, rng),
            Self::Steady(mode) => mode.run(now, ring, rng),
        }
    }

    pub fn stop(&mut self) {
        match self {
            Self::Off(mode) => Mode::<N>::stop(mode),
            Self::Fader(mode) => Mode::<N>::stop(mode),
            Self::Rotator(mode) => mode.stop(),
            Self::Steady(mode) => Mode::<N>::stop(mode),
        }
    }
}
