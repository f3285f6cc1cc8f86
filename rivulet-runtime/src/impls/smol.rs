// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::runtime::Runtime;
use crate::scheduler::{ScheduledTask, Scheduler, TimerHandle};
use crate::timer::Timer;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use core::time::Duration;
use std::time::Instant;

#[derive(Debug)]
pub struct SmolRuntime;

impl Runtime for SmolRuntime {
    type Timer = SmolTimer;
    type Scheduler = SmolScheduler;
}

#[derive(Clone, Debug, Default)]
pub struct SmolTimer;

pub struct SmolSleep {
    timer: async_io::Timer,
}

impl SmolSleep {
    fn new(duration: Duration) -> Self {
        Self {
            timer: async_io::Timer::after(duration),
        }
    }
}

impl Future for SmolSleep {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.timer).poll(cx).map(|_| ())
    }
}

impl Timer for SmolTimer {
    type Sleep = SmolSleep;

    type Instant = Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        SmolSleep::new(duration)
    }

    fn now(&self) -> Self::Instant {
        Instant::now()
    }
}

/// Runs each task on smol's global executor. Cancelling the returned handle cancels the task.
#[derive(Clone, Debug, Default)]
pub struct SmolScheduler {
    timer: SmolTimer,
}

impl Scheduler for SmolScheduler {
    fn schedule_once(&self, delay: Duration, task: ScheduledTask) -> TimerHandle {
        let handle = TimerHandle::new();
        let guard = handle.clone();
        let sleep = self.timer.sleep_future(delay);

        let spawned = smol::spawn(async move {
            sleep.await;
            if guard.fire() {
                if let Err(err) = task() {
                    rivulet_core::error!("scheduled task failed: {}", err);
                }
            }
        });

        // Dropping a smol task cancels it; the hook owns it until it fires or is cancelled.
        handle.set_cancel_hook(move || drop(spawned));
        handle
    }
}
