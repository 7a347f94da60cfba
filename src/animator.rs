//! Fixed-capacity timed animation slots.
//!
//! Each slot tracks elapsed-vs-duration progress so animation speed is
//! independent of the loop iteration rate. The animator never reads the
//! clock itself; callers pass `now` into every time-dependent call, which
//! must not go backwards between calls.

use embassy_time::{Duration, Instant};

use crate::math::{Easing, progress_of};

/// Lifecycle of a single animation slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// Not armed. The slot's previous progress is gone.
    Idle,
    /// Armed and advancing toward its duration.
    Running,
    /// Reached full progress. Stays addressable until restarted or stopped.
    Completed,
}

/// Data handed to the paint closure for one advanced slot.
#[derive(Debug, Clone, Copy)]
pub struct AnimationParam {
    /// Which slot this invocation belongs to.
    pub slot: usize,
    /// Completion fraction in `[0, 1]`, linear unless an easing is set.
    pub progress: f32,
    /// `Completed` on the final invocation, `Running` otherwise.
    pub state: SlotState,
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    state: SlotState,
    started: Instant,
    duration: Duration,
}

impl Slot {
    const IDLE: Self = Self {
        state: SlotState::Idle,
        started: Instant::from_millis(0),
        duration: Duration::from_millis(0),
    };
}

/// Fixed-capacity collection of timed interpolation slots.
///
/// Each mode embeds one animator sized to the number of element groups it
/// animates concurrently.
pub struct Animator<const SLOTS: usize> {
    slots: [Slot; SLOTS],
    easing: Option<Easing>,
}

impl<const SLOTS: usize> Animator<SLOTS> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [Slot::IDLE; SLOTS],
            easing: None,
        }
    }

    /// Replace linear progress with an easing curve.
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    /// Arm a slot to run for `duration` starting at `now`.
    ///
    /// Overwrites unconditionally: restarting a slot mid-animation discards
    /// its previous progress. `slot` must be below the capacity.
    pub fn start(&mut self, slot: usize, duration: Duration, now: Instant) {
        self.slots[slot] = Slot {
            state: SlotState::Running,
            started: now,
            duration,
        };
    }

    /// True while any slot is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.slots.iter().any(|s| s.state == SlotState::Running)
    }

    /// State of one slot.
    #[must_use]
    pub fn slot_state(&self, slot: usize) -> SlotState {
        self.slots[slot].state
    }

    /// Force every slot to idle, discarding pending paints.
    ///
    /// Called on mode deactivation so no stale paint touches the frame
    /// buffer after ownership moves to the next mode.
    pub fn stop_all(&mut self) {
        for slot in &mut self.slots {
            slot.state = SlotState::Idle;
        }
    }

    /// Advance every running slot to `now`, invoking `apply` for each.
    ///
    /// The closure is called synchronously and is expected to paint into
    /// the frame buffer, not to block. A slot whose linear progress reaches
    /// 1.0 moves to `Completed`; the closure sees that final invocation
    /// with `state == Completed`. Completed slots are skipped on later
    /// calls until restarted.
    pub fn update(&mut self, now: Instant, mut apply: impl FnMut(AnimationParam)) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.state != SlotState::Running {
                continue;
            }
            let elapsed = now.duration_since(slot.started);
            let linear = progress_of(elapsed, slot.duration);
            if linear >= 1.0 {
                slot.state = SlotState::Completed;
            }
            let progress = match self.easing {
                Some(easing) => easing(linear),
                None => linear,
            };
            apply(AnimationParam {
                slot: index,
                progress,
                state: slot.state,
            });
        }
    }
}

impl<const SLOTS: usize> Default for Animator<SLOTS> {
    fn default() -> Self {
        Self::new()
    }
}
