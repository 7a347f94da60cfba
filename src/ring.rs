//! Frame buffer over an opaque LED sink.

use crate::color::{BLACK, Rgbw};
use crate::gamma;

/// Abstract ring driver trait.
///
/// Implement this to push frames to the physical elements (RMT, SPI, ...).
/// The engine is generic over this trait and treats the wire protocol as
/// opaque; any bus setup belongs to the implementor.
pub trait RingDriver {
    /// Write one frame to the ring.
    fn write(&mut self, frame: &[Rgbw]);
}

/// In-memory frame for a ring of `N` elements, flushed through a driver.
///
/// Only the active mode writes here on any given tick; the dispatcher's
/// stop-before-setup ordering enforces that.
pub struct Ring<D: RingDriver, const N: usize> {
    driver: D,
    frame: [Rgbw; N],
    gamma_correct: bool,
}

impl<D: RingDriver, const N: usize> Ring<D, N> {
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            frame: [BLACK; N],
            gamma_correct: false,
        }
    }

    /// Number of elements on the ring.
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Enable or disable the gamma correction step applied at [`show`].
    ///
    /// Off by default.
    ///
    /// [`show`]: Self::show
    pub fn set_gamma_correction(&mut self, enabled: bool) {
        self.gamma_correct = enabled;
    }

    /// Set one element of the pending frame. Out-of-range indices are
    /// ignored.
    pub fn set_pixel(&mut self, index: usize, color: Rgbw) {
        if let Some(slot) = self.frame.get_mut(index) {
            *slot = color;
        }
    }

    /// Fill the pending frame with one color.
    pub fn clear_to(&mut self, color: Rgbw) {
        self.frame = [color; N];
    }

    /// Current pending frame.
    #[must_use]
    pub fn frame(&self) -> &[Rgbw; N] {
        &self.frame
    }

    /// Flush the pending frame to the driver.
    pub fn show(&mut self) {
        if self.gamma_correct {
            let mut corrected = self.frame;
            gamma::apply(&mut corrected);
            self.driver.write(&corrected);
        } else {
            self.driver.write(&self.frame);
        }
    }
}
