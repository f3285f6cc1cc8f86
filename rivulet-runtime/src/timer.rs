// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::future::Future;
use core::ops::Sub;
use core::time::Duration;

/// Clock for poll-based stages.
///
/// A stage holds at most one sleep per cooldown window and polls it from `poll_next`
/// before looking at its source.
pub trait Timer: Clone + Send + Sync + Debug + 'static {
    /// Completes once the requested duration has elapsed. Inert until polled.
    type Sleep: Future<Output = ()> + Send;

    /// Point in time on this timer's clock; subtracting two gives the time between them.
    type Instant: Copy + Debug + Ord + Send + Sync + Sub<Output = Duration>;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep;

    fn now(&self) -> Self::Instant;
}
