#![no_std]

//! Mode-cycling animation engine for RGBW LED rings.
//!
//! One momentary switch cycles a fixed list of visual modes; each mode
//! drives fixed-capacity animation slots and paints a shared frame buffer
//! that is flushed through an opaque [`RingDriver`] sink.
//!
//! Architecture layers:
//! - `color` - RGBW value type, blending, HSL sampling
//! - `animator` - timed interpolation slots shared by all modes
//! - `mode` - mode implementations and the [`ModeSlot`] enum
//! - `dispatcher` - stop/settle/setup sequencing between modes
//! - `selector` - switch debounce and mode index cycling
//! - `engine` - the context struct tying it all together
//!
//! The crate never sleeps and never reads a clock: the caller passes `now`
//! into every poll, so the whole engine runs deterministically under test.

pub mod animator;
pub mod color;
pub mod config;
pub mod dispatcher;
pub mod engine;
pub mod gamma;
pub mod math;
pub mod mode;
pub mod ring;
pub mod rng;
pub mod selector;

pub use animator::{AnimationParam, Animator, SlotState};
pub use color::Rgbw;
pub use config::{EngineConfig, PowerProfile};
pub use dispatcher::ModeDispatcher;
pub use engine::LightEngine;
pub use mode::{
    FaderMode, MODE_COUNT, Mode, ModeSlot, OffMode, PixelState, RotatorMode, SteadyMode,
};
pub use ring::{Ring, RingDriver};
pub use rng::{RandomSource, Xorshift32};
pub use selector::SwitchSelector;

pub use embassy_time::{Duration, Instant};
