//! Progress and easing math shared by the animation engine.

use embassy_time::Duration;

/// Easing curve applied to linear slot progress.
pub type Easing = fn(f32) -> f32;

/// Completion fraction of `elapsed` over `duration`, clamped to `[0, 1]`.
///
/// Computed in microseconds so short intervals keep resolution. A zero
/// duration completes immediately.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn progress_of(elapsed: Duration, duration: Duration) -> f32 {
    let total = duration.as_micros();
    if total == 0 {
        return 1.0;
    }
    let done = elapsed.as_micros();
    if done >= total {
        return 1.0;
    }
    done as f32 / total as f32
}

/// Quadratic ease-in-out over `[0, 1]`.
#[must_use]
pub fn ease_in_out_quad(p: f32) -> f32 {
    if p < 0.5 {
        2.0 * p * p
    } else {
        1.0 - 2.0 * (1.0 - p) * (1.0 - p)
    }
}
