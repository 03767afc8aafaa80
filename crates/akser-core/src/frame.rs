//! Cancellable tick-chain bookkeeping for the frame loops.
//!
//! Both frontends drive frames through a one-shot callback source
//! (requestAnimationFrame in the browser). The running/pending state and the
//! cancellation rules live here behind a scheduler trait, so the shutdown
//! contract is testable without a browser: once stopped, a loop never runs
//! another frame body and never requests another callback.

/// One-shot callback source the loop reschedules itself on.
pub trait TickScheduler {
    /// Request a single future callback. `None` means scheduling is
    /// unavailable; the loop then simply stops ticking.
    fn schedule(&mut self) -> Option<i32>;
    /// Revoke a callback previously returned by `schedule`.
    fn cancel(&mut self, handle: i32);
}

/// Running/pending state for one self-rescheduling loop.
#[derive(Debug, Default)]
pub struct LoopState {
    running: bool,
    pending: Option<i32>,
}

impl LoopState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Arm the loop and request the first callback.
    pub fn start(&mut self, scheduler: &mut impl TickScheduler) {
        self.running = true;
        self.pending = scheduler.schedule();
    }

    /// Call at the top of every callback. Returns whether the frame body
    /// should run; a stopped loop swallows stray callbacks.
    pub fn begin_tick(&mut self) -> bool {
        self.pending = None;
        self.running
    }

    /// Call after the frame body; requests the next callback unless the loop
    /// was stopped in the meantime.
    pub fn finish_tick(&mut self, scheduler: &mut impl TickScheduler) {
        if self.running {
            self.pending = scheduler.schedule();
        }
    }

    /// Stop the loop and revoke any callback still in flight.
    pub fn stop(&mut self, scheduler: &mut impl TickScheduler) {
        self.running = false;
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
    }
}
