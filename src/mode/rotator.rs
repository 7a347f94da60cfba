//! Two comets chasing each other around the ring.
//!
//! Two diametrically opposed head dots each drag a half-ring tail that
//! fades from the head color to black. Every spin step advances both
//! heads one element and blends each tail element from its previous
//! color to the next one over, so motion reads as a smooth crawl rather
//! than a hard shift.

use embassy_time::{Duration, Instant};
use heapless::Vec;

use crate::animator::Animator;
use crate::color::{self, BLACK, Rgbw, blend};
use crate::config::EngineConfig;
use crate::mode::{Mode, PixelState};
use crate::ring::{Ring, RingDriver};
use crate::rng::RandomSource;

const COMET_COUNT: usize = 2;

const fn next_pixel<const N: usize>(pixel: usize) -> usize {
    (pixel + 1) % N
}

const fn prev_pixel<const N: usize>(pixel: usize) -> usize {
    (pixel + N - 1) % N
}

pub struct RotatorMode<const N: usize> {
    dot1: usize,
    dot2: usize,
    tail1: Vec<Rgbw, N>,
    tail2: Vec<Rgbw, N>,
    // One shared state table for the whole ring. The tails partition it,
    // and a head advancing into the other comet's territory inherits that
    // element's current color as its blend start.
    states: [PixelState; N],
    animator: Animator<COMET_COUNT>,
    spin_interval: Duration,
    luminance: f32,
}

impl<const N: usize> RotatorMode<N> {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            dot1: 0,
            dot2: N / 2,
            tail1: Vec::new(),
            tail2: Vec::new(),
            states: core::array::from_fn(|i| PixelState::new(i as u16)),
            animator: Animator::new(),
            spin_interval: config.spin_interval,
            luminance: config.profile.luminance,
        }
    }

    /// Current head positions.
    #[must_use]
    pub const fn dots(&self) -> (usize, usize) {
        (self.dot1, self.dot2)
    }

    /// Build a half-ring gradient from the head color down to black.
    #[allow(clippy::cast_precision_loss)]
    fn fill_tail(tail: &mut Vec<Rgbw, N>, head: Rgbw) {
        tail.clear();
        let half = N / 2;
        for offset in 0..half {
            let color = blend(head, BLACK, offset as f32 / half as f32);
            let _ = tail.push(color);
        }
    }

    /// Retarget one comet's elements: each element's old target becomes
    /// its new origin, and the tail gradient walks backwards from `head`.
    fn shift_comet(states: &mut [PixelState; N], head: usize, tail: &[Rgbw]) {
        let mut pixel = head;
        for &color in tail {
            let state = &mut states[pixel];
            state.start = state.end;
            state.end = color;
            pixel = prev_pixel::<N>(pixel);
        }
    }

    /// Advance both heads one element and start the blend toward the new
    /// tail positions.
    fn spin(&mut self, now: Instant) {
        self.dot1 = next_pixel::<N>(self.dot1);
        self.dot2 = next_pixel::<N>(self.dot2);
        Self::shift_comet(&mut self.states, self.dot1, &self.tail1);
        Self::shift_comet(&mut self.states, self.dot2, &self.tail2);
        self.animator.start(0, self.spin_interval, now);
        self.animator.start(1, self.spin_interval, now);
    }
}

impl<const N: usize> Mode<N> for RotatorMode<N> {
    fn setup<D: RingDriver>(&mut self, ring: &mut Ring<D, N>, rng: &mut dyn RandomSource) {
        self.animator.stop_all();
        self.dot1 = 0;
        self.dot2 = N / 2;
        let head1 = color::from_hsl(rng.hue(), 1.0, self.luminance, 0);
        let head2 = color::from_hsl(rng.hue(), 1.0, self.luminance, 0);
        Self::fill_tail(&mut self.tail1, head1);
        Self::fill_tail(&mut self.tail2, head2);
        for state in &mut self.states {
            state.start = BLACK;
            state.end = BLACK;
        }
        // Seed only the heads; the first spin re-targets the rest, so the
        // tails fade in from darkness instead of popping.
        self.states[self.dot1].end = head1;
        self.states[self.dot2].end = head2;
        ring.clear_to(BLACK);
        ring.show();
    }

    fn run<D: RingDriver>(
        &mut self,
        now: Instant,
        ring: &mut Ring<D, N>,
        _rng: &mut dyn RandomSource,
    ) {
        if self.animator.is_animating() {
            let Self {
                animator,
                states,
                tail1,
                tail2,
                dot1,
                dot2,
                ..
            } = self;
            animator.update(now, |param| {
                let (head, tail) = if param.slot == 0 {
                    (*dot1, &*tail1)
                } else {
                    (*dot2, &*tail2)
                };
                let mut pixel = head;
                for _ in 0..tail.len() {
                    let state = &states[pixel];
                    let color = blend(state.start, state.end, param.progress);
                    ring.set_pixel(usize::from(state.pixel), color);
                    pixel = prev_pixel::<N>(pixel);
                }
            });
            ring.show();
        } else {
            self.spin(now);
        }
    }

    fn stop(&mut self) {
        self.animator.stop_all();
    }
}
