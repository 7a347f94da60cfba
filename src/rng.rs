//! Randomness source abstraction.
//!
//! Modes draw hues through [`RandomSource`] so tests can substitute a
//! deterministic sequence. [`Xorshift32`] is the default implementation
//! for targets without a hardware RNG.

/// Source of randomness for color selection.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Random hue in turns, uniform over 360 whole degrees.
    #[allow(clippy::cast_precision_loss)]
    fn hue(&mut self) -> f32 {
        (self.next_u32() % 360) as f32 / 360.0
    }
}

/// Xorshift 32-bit PRNG. Small, fast, fine for picking colors.
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Seed the generator. A zero seed is remapped since xorshift state
    /// must be non-zero.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }
}

impl RandomSource for Xorshift32 {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}
