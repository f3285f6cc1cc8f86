// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{scheduler::Scheduler, timer::Timer};

/// Pairs the pull-side [`Timer`] and the push-side [`Scheduler`] of one async runtime, so
/// convenience constructors can pick both from a single type.
pub trait Runtime: 'static {
    type Timer: Timer + Default;
    type Scheduler: Scheduler + Default;
}
