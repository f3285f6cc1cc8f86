// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deterministic scheduler driven by a virtual clock.
//!
//! Nothing runs on its own: tasks fire only while the test calls [`VirtualScheduler::advance`]
//! (or one of its variants), in due-time order, ties broken by scheduling order. A task
//! scheduled with a zero delay therefore waits for the next `advance`, which models
//! "everything pushed in the same turn is seen before the timer fires".

use parking_lot::Mutex;
use rivulet_core::Result;
use rivulet_runtime::scheduler::{ScheduledTask, Scheduler, TimerHandle};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

#[derive(Default)]
struct VirtualClock {
    now: Duration,
    next_seq: u64,
    queue: BTreeMap<(Duration, u64), (TimerHandle, ScheduledTask)>,
}

#[derive(Clone, Default)]
pub struct VirtualScheduler {
    clock: Arc<Mutex<VirtualClock>>,
}

impl VirtualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time, measured from the scheduler's creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.lock().now
    }

    /// Number of scheduled tasks that have neither fired nor been cancelled.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.clock
            .lock()
            .queue
            .values()
            .filter(|(handle, _)| !handle.is_cancelled())
            .count()
    }

    /// Moves the clock forward by `by`, running every task that falls due on the way,
    /// including tasks scheduled by those tasks.
    ///
    /// # Errors
    ///
    /// Stops at the first failing task and returns its error; the clock then stays at
    /// that task's due time.
    pub fn advance(&self, by: Duration) -> Result<()> {
        let target = self.now() + by;
        self.advance_to(target)
    }

    /// Like [`advance`](Self::advance) but with an absolute target time.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing task.
    pub fn advance_to(&self, target: Duration) -> Result<()> {
        loop {
            let next = {
                let mut clock = self.clock.lock();
                match clock.queue.first_key_value() {
                    Some((&(due, _), _)) if due <= target => {
                        clock.now = clock.now.max(due);
                        clock.queue.pop_first()
                    }
                    _ => None,
                }
            };

            // The lock is released before running: tasks schedule follow-up timers.
            match next {
                Some((_, (handle, task))) => {
                    if handle.fire() {
                        task()?;
                    }
                }
                None => break,
            }
        }

        let mut clock = self.clock.lock();
        clock.now = clock.now.max(target);
        Ok(())
    }

    /// Runs tasks that are already due without moving the clock.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing task.
    pub fn run_due(&self) -> Result<()> {
        self.advance(Duration::ZERO)
    }

    /// Advances until no task is left.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing task.
    pub fn run_until_idle(&self) -> Result<()> {
        loop {
            let next_due = self.clock.lock().queue.keys().next().map(|&(due, _)| due);
            match next_due {
                Some(due) => self.advance_to(due)?,
                None => return Ok(()),
            }
        }
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule_once(&self, delay: Duration, task: ScheduledTask) -> TimerHandle {
        let handle = TimerHandle::new();
        let mut clock = self.clock.lock();
        let due = clock.now + delay;
        let seq = clock.next_seq;
        clock.next_seq += 1;
        clock.queue.insert((due, seq), (handle.clone(), task));
        handle
    }
}
