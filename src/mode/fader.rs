//! Slow whole-ring color drift.
//!
//! Every cycle picks a random hue and blends the whole ring from the
//! previous color to it. At completion the next cycle starts from where
//! this one ended, so the drift never jumps.

use embassy_time::{Duration, Instant};

use crate::animator::Animator;
use crate::color::{self, BLACK, blend};
use crate::config::EngineConfig;
use crate::mode::{Mode, PixelState};
use crate::ring::{Ring, RingDriver};
use crate::rng::RandomSource;

pub struct FaderMode {
    animator: Animator<1>,
    state: PixelState,
    fade_duration: Duration,
    luminance: f32,
    // Would alternate color fades with fades to black, but the lamp reads
    // better drifting color to color, so it stays off.
    fade_to_black: bool,
}

impl FaderMode {
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            animator: Animator::new(),
            state: PixelState::new(0),
            fade_duration: config.fade_duration,
            luminance: config.profile.luminance,
            fade_to_black: false,
        }
    }

    /// True while a fade is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    fn start_transition(&mut self, now: Instant, rng: &mut dyn RandomSource) {
        let target = if self.fade_to_black {
            BLACK
        } else {
            color::from_hsl(rng.hue(), 1.0, self.luminance, 0)
        };
        self.state.start = self.state.end;
        self.state.end = target;
        self.animator.start(0, self.fade_duration, now);
    }
}

impl<const N: usize> Mode<N> for FaderMode {
    fn setup<D: RingDriver>(&mut self, ring: &mut Ring<D, N>, _rng: &mut dyn RandomSource) {
        self.animator.stop_all();
        self.state = PixelState::new(0);
        ring.clear_to(BLACK);
        ring.show();
    }

    fn run<D: RingDriver>(
        &mut self,
        now: Instant,
        ring: &mut Ring<D, N>,
        rng: &mut dyn RandomSource,
    ) {
        if self.animator.is_animating() {
            let state = self.state;
            self.animator.update(now, |param| {
                let color = blend(state.start, state.end, param.progress);
                for pixel in 0..N {
                    ring.set_pixel(pixel, color);
                }
            });
            ring.show();
        } else {
            self.start_transition(now, rng);
        }
    }

    fn stop(&mut self) {
        self.animator.stop_all();
    }
}
