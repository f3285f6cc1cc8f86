// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! One-shot delayed callbacks.
//!
//! Push-based stages cannot poll a sleep future: nobody polls them between two `receive`
//! calls. They hand a callback to a [`Scheduler`] instead, which runs it once after the
//! requested delay. The returned [`TimerHandle`] lets the stage refer to that timer later;
//! cancelling it is allowed but never required for correctness. Runtime schedulers attach
//! an abort hook to the handle, so a cancelled task and everything it captured are released
//! right away instead of at the original deadline.

use core::fmt;
use core::time::Duration;
use parking_lot::Mutex;
use rivulet_core::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Callback run by a [`Scheduler`] when its delay elapses.
///
/// An error returned from the task has nowhere else to go: schedulers backed by a real
/// runtime log it, the virtual scheduler in `rivulet-test-utils` hands it to the test.
pub type ScheduledTask = Box<dyn FnOnce() -> Result<()> + Send + 'static>;

/// Runs callbacks once, after a delay.
///
/// Implementations must never run the task synchronously inside `schedule_once`: callers
/// may hold locks that the task needs.
pub trait Scheduler: Clone + Send + Sync + 'static {
    fn schedule_once(&self, delay: Duration, task: ScheduledTask) -> TimerHandle;
}

type CancelHook = Box<dyn FnOnce() + Send + 'static>;

/// Shared reference to one scheduled task.
#[derive(Clone, Default)]
pub struct TimerHandle {
    cancelled: Arc<AtomicBool>,
    fired: Arc<AtomicBool>,
    on_cancel: Arc<Mutex<Option<CancelHook>>>,
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("cancelled", &self.is_cancelled())
            .field("fired", &self.has_fired())
            .finish()
    }
}

impl TimerHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prevents the task from running if it has not fired yet, and runs the abort hook.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
        let hook = self.on_cancel.lock().take();
        if let Some(hook) = hook {
            hook();
        }
    }

    /// Registers what `cancel` must do to tear the scheduled task down.
    ///
    /// Runs `hook` at once if the handle is already cancelled, and drops it if the task
    /// already fired.
    pub fn set_cancel_hook(&self, hook: impl FnOnce() + Send + 'static) {
        let mut slot = self.on_cancel.lock();
        if self.is_cancelled() {
            drop(slot);
            hook();
        } else if !self.has_fired() {
            *slot = Some(Box::new(hook));
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }

    /// Called by schedulers when the delay elapses. Returns `true` exactly once, and only
    /// if the timer was not cancelled; the task must run only in that case.
    ///
    /// The abort hook is dropped: there is nothing left to abort.
    pub fn fire(&self) -> bool {
        let first = !self.is_cancelled() && !self.fired.swap(true, Ordering::AcqRel);
        if first {
            let hook = self.on_cancel.lock().take();
            drop(hook);
        }
        first
    }
}
