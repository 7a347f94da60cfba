//! Engine tuning knobs.

use embassy_time::Duration;

/// Brightness envelope for color generation.
///
/// `saturation` feeds the steady white level, `luminance` the HSL
/// lightness of animated colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerProfile {
    pub saturation: u8,
    pub luminance: f32,
}

impl PowerProfile {
    /// Dim profile for bench work next to the board.
    pub const DEBUG: Self = Self {
        saturation: 80,
        luminance: 0.05,
    };

    /// Full-brightness profile for the deployed lamp.
    pub const RELEASE: Self = Self {
        saturation: 220,
        luminance: 0.5,
    };
}

/// All timing and brightness parameters in one place.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub profile: PowerProfile,
    /// One full fade of the drifting-color mode.
    pub fade_duration: Duration,
    /// One step of the rotating comets.
    pub spin_interval: Duration,
    /// Switch level changes inside this window are ignored.
    pub debounce_window: Duration,
    /// Quiet gap between stopping one mode and setting up the next.
    pub settle_delay: Duration,
}

impl EngineConfig {
    #[must_use]
    pub const fn release() -> Self {
        Self::with_profile(PowerProfile::RELEASE)
    }

    #[must_use]
    pub const fn debug() -> Self {
        Self::with_profile(PowerProfile::DEBUG)
    }

    #[must_use]
    pub const fn with_profile(profile: PowerProfile) -> Self {
        Self {
            profile,
            fade_duration: Duration::from_millis(15_000),
            spin_interval: Duration::from_millis(200),
            debounce_window: Duration::from_millis(5),
            settle_delay: Duration::from_millis(20),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::release()
    }
}
