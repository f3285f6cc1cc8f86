// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::runtime::Runtime;
use crate::scheduler::{ScheduledTask, Scheduler, TimerHandle};
use crate::timer::Timer;
use core::time::Duration;

#[derive(Debug)]
pub struct TokioRuntime;

impl Runtime for TokioRuntime {
    type Timer = TokioTimer;
    type Scheduler = TokioScheduler;
}

/// Timer backed by `tokio::time`, so it follows a paused test clock.
#[derive(Clone, Debug, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    type Sleep = tokio::time::Sleep;

    type Instant = tokio::time::Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }

    fn now(&self) -> Self::Instant {
        tokio::time::Instant::now()
    }
}

/// Runs each task on its own spawned Tokio task after a `tokio::time::sleep`.
///
/// Cancelling the returned handle aborts the spawned task.
///
/// # Panics
///
/// `schedule_once` panics when called outside of a Tokio runtime.
#[derive(Clone, Debug, Default)]
pub struct TokioScheduler {
    timer: TokioTimer,
}

impl Scheduler for TokioScheduler {
    fn schedule_once(&self, delay: Duration, task: ScheduledTask) -> TimerHandle {
        let handle = TimerHandle::new();
        let guard = handle.clone();
        let sleep = self.timer.sleep_future(delay);

        let join = tokio::spawn(async move {
            sleep.await;
            if guard.fire() {
                if let Err(err) = task() {
                    rivulet_core::error!("scheduled task failed: {}", err);
                }
            }
        });

        let abort = join.abort_handle();
        handle.set_cancel_hook(move || abort.abort());
        handle
    }
}
