// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime abstraction for rivulet's time-based stages.
//!
//! - [`timer::Timer`] - sleep futures and the current instant, for poll-based operators
//! - [`scheduler::Scheduler`] - "run this callback once after a delay", for push-based stages
//! - [`runtime::Runtime`] - bundles both for one async runtime
//!
//! Implementations live in [`impls`], one module per runtime feature
//! (`runtime-tokio`, `runtime-smol`).

pub mod impls;
pub mod runtime;
pub mod scheduler;
pub mod timer;
