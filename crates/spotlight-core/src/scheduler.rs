use std::cell::RefCell;

/// Drives a per-frame callback for as long as the host lives.
pub trait FrameScheduler {
    fn run(&self, frame: Box<dyn FnMut()>);
}

/// Scheduler stepped by hand, for hosts without a display clock.
#[derive(Default)]
pub struct ManualScheduler {
    frame: RefCell<Option<Box<dyn FnMut()>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `frames` frames; returns how many actually ran.
    pub fn advance(&self, frames: usize) -> usize {
        let Some(mut frame) = self.frame.borrow_mut().take() else {
            return 0;
        };
        for _ in 0..frames {
            frame();
        }
        // Keep a callback installed from inside the frame, if any
        let mut slot = self.frame.borrow_mut();
        if slot.is_none() {
            *slot = Some(frame);
        }
        frames
    }
}

impl FrameScheduler for ManualScheduler {
    fn run(&self, frame: Box<dyn FnMut()>) {
        *self.frame.borrow_mut() = Some(frame);
    }
}
