//! Perceptual gamma correction for output frames.
//!
//! Uses a quadratic lookup table, close to gamma 2.0. Applied per channel
//! right before a frame leaves the crate, so animation math always works
//! in linear channel space.

use crate::color::Rgbw;

/// Quadratic gamma lookup table.
pub static GAMMA8: [u8; 256] = build_lut();

#[allow(clippy::cast_possible_truncation)]
const fn build_lut() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0usize;
    while i < 256 {
        table[i] = ((i * i + 127) / 255) as u8;
        i += 1;
    }
    table
}

/// Apply gamma correction to every channel of every element in `frame`.
pub fn apply(frame: &mut [Rgbw]) {
    for color in frame {
        color.r = GAMMA8[usize::from(color.r)];
        color.g = GAMMA8[usize::from(color.g)];
        color.b = GAMMA8[usize::from(color.b)];
        color.a.0 = GAMMA8[usize::from(color.a.0)];
    }
}
