use std::cell::Cell;
use std::rc::Rc;

/// Source of one-shot and repeating timers.
///
/// Dropping a returned handle cancels its timer, the same contract as
/// `gloo_timers::callback::{Timeout, Interval}`.
pub trait Scheduler: Clone + 'static {
    type Handle: 'static;

    fn timeout(&self, millis: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
    fn interval(&self, millis: u32, task: Box<dyn FnMut()>) -> Self::Handle;
}

/// Batches work into the next rendered frame.
pub trait FrameRequester {
    /// Returns false when the frame could not be queued; `callback` is then
    /// dropped without running.
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> bool;
}

/// A single cancellable delayed task. Scheduling again replaces (and
/// cancels) whatever was pending.
pub struct DelayedTask<S: Scheduler> {
    handle: Option<S::Handle>,
    pending: Rc<Cell<bool>>,
}

impl<S: Scheduler> Default for DelayedTask<S> {
    fn default() -> Self {
        Self {
            handle: None,
            pending: Rc::new(Cell::new(false)),
        }
    }
}

impl<S: Scheduler> DelayedTask<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, scheduler: &S, millis: u32, task: impl FnOnce() + 'static) {
        self.cancel();
        let pending = Rc::new(Cell::new(true));
        self.pending = pending.clone();
        self.handle = Some(scheduler.timeout(
            millis,
            Box::new(move || {
                pending.set(false);
                task();
            }),
        ));
    }

    /// Returns whether something was actually pending.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.pending.replace(false);
        self.handle = None;
        was_pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

/// Coalesces bursts of events into at most one queued frame callback.
pub struct FrameThrottle<F> {
    frames: F,
    ticking: Rc<Cell<bool>>,
}

impl<F: FrameRequester> FrameThrottle<F> {
    pub fn new(frames: F) -> Self {
        Self {
            frames,
            ticking: Rc::new(Cell::new(false)),
        }
    }

    /// Queues `work` for the next frame unless a frame is already in flight.
    /// Returns whether a frame was queued.
    pub fn schedule(&self, work: impl FnOnce() + 'static) -> bool {
        if self.ticking.get() {
            return false;
        }
        self.ticking.set(true);
        let ticking = self.ticking.clone();
        let queued = self.frames.request_frame(Box::new(move || {
            work();
            ticking.set(false);
        }));
        if !queued {
            self.ticking.set(false);
        }
        queued
    }

    pub fn in_flight(&self) -> bool {
        self.ticking.get()
    }
}
