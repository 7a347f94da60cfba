use std::cell::RefCell;
use std::rc::Rc;

use ring_light_engine::{RandomSource, Rgbw, RingDriver};

/// Driver that records every flushed frame. Clones share the log, so a
/// test can keep a handle while the engine owns the driver.
#[derive(Clone, Default)]
pub struct RecordingDriver {
    frames: Rc<RefCell<Vec<Vec<Rgbw>>>>,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn last_frame(&self) -> Vec<Rgbw> {
        self.frames.borrow().last().cloned().expect("no frame written")
    }
}

impl RingDriver for RecordingDriver {
    fn write(&mut self, frame: &[Rgbw]) {
        self.frames.borrow_mut().push(frame.to_vec());
    }
}

/// Random source that always returns the same word.
pub struct FixedRandom(pub u32);

impl RandomSource for FixedRandom {
    fn next_u32(&mut self) -> u32 {
        self.0
    }
}
