// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Time-based debounce for rivulet pipelines.
//!
//! # Overview
//!
//! - **`DebounceConfig`** - the cooldown window, validated at construction
//! - **`CooldownState`** - the debounce policy as a timer-free state machine
//! - **`DebounceStage`** - push-based stage (`receive` / `close`) driven by a `Scheduler`
//! - **`DebounceExt`** - `.debounce_with_timer(window, timer)` on any `Stream<Item = StreamItem<T>>`
//! - **`DebounceWithDefaultTimerExt`** - `.debounce(window)` using the default runtime
//!
//! # Runtime Support
//!
//! Enable runtime-specific features in your `Cargo.toml`:
//! - `runtime-tokio` (default) - `TokioTimer` / `TokioScheduler`
//! - `runtime-smol` - `SmolTimer` / `SmolScheduler`
//!
//! When both are enabled, Tokio is the default runtime.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "runtime-tokio")]
//! # async fn example() {
//! use rivulet_stream_time::prelude::*;
//! use rivulet_core::StreamItem;
//! use futures::channel::mpsc;
//! use futures::stream::StreamExt;
//! use std::time::Duration;
//!
//! let (tx, rx) = mpsc::unbounded::<i32>();
//! let debounced = rx
//!     .map(StreamItem::Value)
//!     .debounce(Duration::from_millis(100));
//!
//! tx.unbounded_send(1).unwrap(); // emitted at once
//! tx.unbounded_send(2).unwrap(); // replaced by 3
//! tx.unbounded_send(3).unwrap(); // emitted 100ms after 1
//! # }
//! ```

mod config;
mod debounce;

pub mod prelude;

pub use config::DebounceConfig;
pub use debounce::{Admission, CooldownState, DebounceExt, DebounceStage, DebounceStream};

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use debounce::DebounceWithDefaultTimerExt;

pub use rivulet_runtime::scheduler::{Scheduler, TimerHandle};
pub use rivulet_runtime::timer::Timer;

#[cfg(feature = "runtime-tokio")]
pub use rivulet_runtime::impls::tokio::{TokioRuntime, TokioScheduler, TokioTimer};

#[cfg(feature = "runtime-smol")]
pub use rivulet_runtime::impls::smol::{SmolRuntime, SmolScheduler, SmolTimer};

/// Runtime behind the convenience constructors (`debounce`, `with_default_scheduler`).
#[cfg(feature = "runtime-tokio")]
pub type DefaultRuntime = TokioRuntime;

/// Runtime behind the convenience constructors (`debounce`, `with_default_scheduler`).
#[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
pub type DefaultRuntime = SmolRuntime;

/// Timer used by [`DebounceWithDefaultTimerExt::debounce`].
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub type DefaultTimer = <DefaultRuntime as rivulet_runtime::runtime::Runtime>::Timer;
