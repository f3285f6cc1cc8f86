// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Rivulet
//!
//! Trailing-edge debounce for async pipelines.
//!
//! ## Overview
//!
//! The first item of a burst goes through at once. Later items of the burst overwrite a
//! single pending slot, and whatever sits in the slot when the cooldown window elapses is
//! forwarded too. A flush opens a new window, so a steady stream is thinned to one item
//! per window.
//!
//! The policy comes in two shapes:
//!
//! - **Pull**: `.debounce(window)` on any `Stream<Item = StreamItem<T>>`
//! - **Push**: [`DebounceStage`], a [`Stage`] fed with `receive` / `close` that forwards
//!   into an [`Emitter`] and schedules its windows on a [`Scheduler`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rivulet::prelude::*;
//! use futures::StreamExt;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (tx, rx) = tokio::sync::mpsc::unbounded_channel::<u32>();
//!     let mut debounced = rx.into_rivulet_stream().debounce(Duration::from_millis(100));
//!
//!     tx.send(1).unwrap();
//!     tx.send(2).unwrap();
//!     tx.send(3).unwrap();
//!
//!     assert_eq!(debounced.next().await.unwrap().unwrap(), 1);
//!     assert_eq!(debounced.next().await.unwrap().unwrap(), 3);
//! }
//! ```

pub mod receiver_ext;

pub use receiver_ext::IntoRivuletStream;

pub use rivulet_core::{feed, from_iterable, Emitter, Result, RivuletError, Stage, StreamItem};
pub use rivulet_runtime::scheduler::{Scheduler, TimerHandle};
pub use rivulet_runtime::timer::Timer;
pub use rivulet_stream_time::{
    Admission, CooldownState, DebounceConfig, DebounceExt, DebounceStage, DebounceStream,
};

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use rivulet_stream_time::{DebounceWithDefaultTimerExt, DefaultRuntime, DefaultTimer};

#[cfg(feature = "runtime-tokio")]
pub use rivulet_stream_time::{TokioRuntime, TokioScheduler, TokioTimer};

#[cfg(feature = "runtime-smol")]
pub use rivulet_stream_time::{SmolRuntime, SmolScheduler, SmolTimer};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::receiver_ext::IntoRivuletStream;
    pub use rivulet_core::{feed, from_iterable, Stage, StreamItem};
    pub use rivulet_stream_time::prelude::*;
}
