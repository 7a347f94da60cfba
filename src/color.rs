//! RGBW color model: blending and HSL sampling.
//!
//! The white emitter is a fourth independent channel. Hue-derived colors
//! never mix into it; modes that want white set the channel explicitly.

use libm::{fabsf, floorf, fmodf};
use smart_leds::{RGBW, White};

/// Four-channel color: red, green, blue plus a dedicated white emitter.
pub type Rgbw = RGBW<u8>;

/// Construct an [`Rgbw`] from raw channel values.
#[must_use]
pub const fn rgbw(r: u8, g: u8, b: u8, w: u8) -> Rgbw {
    Rgbw {
        r,
        g,
        b,
        a: White(w),
    }
}

/// All channels off.
pub const BLACK: Rgbw = rgbw(0, 0, 0, 0);

/// White emitter only, at the given level.
#[must_use]
pub const fn white(level: u8) -> Rgbw {
    rgbw(0, 0, 0, level)
}

/// Linear blend between two colors at `t` in `[0, 1]`.
///
/// Each channel follows `a + (b - a) * t`, rounded to nearest and clamped
/// to the channel domain. `t` outside `[0, 1]` is clamped first, so
/// `blend(a, b, 0.0) == a` and `blend(a, b, 1.0) == b` hold exactly.
#[must_use]
pub fn blend(a: Rgbw, b: Rgbw, t: f32) -> Rgbw {
    let t = t.clamp(0.0, 1.0);
    rgbw(
        blend_channel(a.r, b.r, t),
        blend_channel(a.g, b.g, t),
        blend_channel(a.b, b.b, t),
        blend_channel(a.a.0, b.a.0, t),
    )
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn blend_channel(a: u8, b: u8, t: f32) -> u8 {
    let v = f32::from(a) + (f32::from(b) - f32::from(a)) * t;
    let v = v.clamp(0.0, 255.0);
    (v + 0.5) as u8
}

/// Convert hue/saturation/lightness to [`Rgbw`].
///
/// `hue` is in turns (`0.0..1.0`; values outside wrap), `sat` and
/// `lightness` in `0.0..=1.0`. The white channel is set to `white_level`
/// untouched by the conversion.
#[must_use]
pub fn from_hsl(hue: f32, sat: f32, lightness: f32, white_level: u8) -> Rgbw {
    let h = hue - floorf(hue);
    let h6 = h * 6.0;
    let c = (1.0 - fabsf(2.0 * lightness - 1.0)) * sat;
    let x = c * (1.0 - fabsf(fmodf(h6, 2.0) - 1.0));

    let (r1, g1, b1) = if h6 < 1.0 {
        (c, x, 0.0)
    } else if h6 < 2.0 {
        (x, c, 0.0)
    } else if h6 < 3.0 {
        (0.0, c, x)
    } else if h6 < 4.0 {
        (0.0, x, c)
    } else if h6 < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let m = lightness - c / 2.0;
    rgbw(
        to_channel(r1 + m),
        to_channel(g1 + m),
        to_channel(b1 + m),
        white_level,
    )
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(v: f32) -> u8 {
    let v = v.clamp(0.0, 1.0);
    (v * 255.0 + 0.5) as u8
}
