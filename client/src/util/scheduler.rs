//! Deferred callbacks with cancellable handles.
//!
//! DESIGN
//! ======
//! Stores never touch browser timers directly. They ask a `Scheduler` for a
//! `ScheduledTask` and keep that handle next to the state it will mutate, so
//! cancelling the handle is the only way to stop a pending callback.
//! `BrowserScheduler` backs this with `setTimeout`; `ManualScheduler` drives
//! callbacks from a virtual clock for tests.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Handle to a callback that has not necessarily run yet.
pub trait ScheduledTask {
    /// Prevent the callback from running. No-op once it has already fired.
    fn cancel(self: Box<Self>);
}

pub trait Scheduler {
    /// Run `callback` once after `delay` on the event loop.
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Box<dyn ScheduledTask>;
}

// =============================================================================
// BROWSER
// =============================================================================

/// `setTimeout`-backed scheduler.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "csr")]
impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Box<dyn ScheduledTask> {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Box::new(BrowserTask(gloo_timers::callback::Timeout::new(millis, callback)))
    }
}

#[cfg(feature = "csr")]
struct BrowserTask(gloo_timers::callback::Timeout);

#[cfg(feature = "csr")]
impl ScheduledTask for BrowserTask {
    fn cancel(self: Box<Self>) {
        let _ = self.0.cancel();
    }
}

// =============================================================================
// MANUAL
// =============================================================================

struct Pending {
    seq: u64,
    due: Duration,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ManualQueue {
    now: Duration,
    next_seq: u64,
    pending: Vec<Pending>,
    cancelled: usize,
}

/// Virtual-clock scheduler. Nothing runs until [`ManualScheduler::advance`].
///
/// Clones share one queue, so a test can hand a clone to the code under test
/// and keep another to drive time.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<ManualQueue>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by `by`, running every callback that comes due
    /// in deadline order. Callbacks may schedule or cancel other tasks.
    pub fn advance(&self, by: Duration) {
        let target = self.queue.borrow().now + by;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let due_idx = queue
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(idx, _)| idx);
                due_idx.map(|idx| {
                    let task = queue.pending.remove(idx);
                    queue.now = task.due;
                    task.callback
                })
            };
            // The borrow is released before running so callbacks can re-enter.
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
        self.queue.borrow_mut().now = target;
    }

    /// Virtual time elapsed since creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    /// Callbacks scheduled but neither run nor cancelled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    /// Tasks cancelled while still pending.
    #[must_use]
    pub fn cancelled(&self) -> usize {
        self.queue.borrow().cancelled
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Box<dyn ScheduledTask> {
        let mut queue = self.queue.borrow_mut();
        queue.next_seq += 1;
        let seq = queue.next_seq;
        let due = queue.now + delay;
        queue.pending.push(Pending { seq, due, callback });
        Box::new(ManualTask { seq, queue: Rc::downgrade(&self.queue) })
    }
}

struct ManualTask {
    seq: u64,
    queue: Weak<RefCell<ManualQueue>>,
}

impl ScheduledTask for ManualTask {
    fn cancel(self: Box<Self>) {
        let Some(queue) = self.queue.upgrade() else {
            return;
        };
        let mut queue = queue.borrow_mut();
        let before = queue.pending.len();
        queue.pending.retain(|p| p.seq != self.seq);
        if queue.pending.len() < before {
            queue.cancelled += 1;
        }
    }
}
