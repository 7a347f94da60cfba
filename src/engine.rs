//! Top-level engine context.

use embassy_time::Instant;

use crate::config::EngineConfig;
use crate::dispatcher::ModeDispatcher;
use crate::mode::{FaderMode, MODE_COUNT, ModeSlot, OffMode, RotatorMode, SteadyMode};
use crate::ring::{Ring, RingDriver};
use crate::rng::RandomSource;
use crate::selector::SwitchSelector;

/// The full lamp: switch in, frames out.
///
/// Owns the ring, the mode list in cycle order, the switch selector and
/// the dispatcher. The caller polls it from its main loop with the raw
/// switch level and the current instant; everything else is internal.
pub struct LightEngine<D: RingDriver, R: RandomSource, const N: usize> {
    ring: Ring<D, N>,
    modes: [ModeSlot<N>; MODE_COUNT],
    selector: SwitchSelector,
    dispatcher: ModeDispatcher,
    rng: R,
}

impl<D: RingDriver, R: RandomSource, const N: usize> LightEngine<D, R, N> {
    pub fn new(driver: D, rng: R, config: &EngineConfig) -> Self {
        Self {
            ring: Ring::new(driver),
            modes: [
                ModeSlot::Off(OffMode::new()),
                ModeSlot::Fader(FaderMode::new(config)),
                ModeSlot::Rotator(RotatorMode::new(config)),
                ModeSlot::Steady(SteadyMode::new(config.profile.saturation)),
            ],
            selector: SwitchSelector::new(MODE_COUNT, config.debounce_window),
            dispatcher: ModeDispatcher::new(config.settle_delay),
            rng,
        }
    }

    /// Feed one sample of the switch and advance the active mode.
    ///
    /// `switch_level` is true while the switch is held down. `now` must
    /// not go backwards between polls.
    pub fn poll(&mut self, switch_level: bool, now: Instant) {
        let requested = self.selector.sample(switch_level, now);
        self.dispatcher
            .dispatch(requested, now, &mut self.modes, &mut self.ring, &mut self.rng);
    }

    /// Mode index the selector has settled on.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selector.index()
    }

    /// Mode currently owning the frame buffer, if any.
    #[must_use]
    pub const fn active(&self) -> Option<usize> {
        self.dispatcher.active()
    }

    /// Enable or disable output gamma correction.
    pub fn set_gamma_correction(&mut self, enabled: bool) {
        self.ring.set_gamma_correction(enabled);
    }
}
