// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debounce: forward the first item of a burst at once, hold the newest of the rest, and
//! forward it when the cooldown window elapses.
//!
//! The policy lives in [`CooldownState`]. Two drivers wrap it:
//!
//! - [`DebounceStage`] - push-based, fed through [`rivulet_core::Stage`] and driven by a
//!   [`rivulet_runtime::scheduler::Scheduler`]
//! - [`DebounceExt`] / [`DebounceWithDefaultTimerExt`] - pull-based `Stream` adapter driven by a
//!   [`rivulet_runtime::timer::Timer`]
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "runtime-tokio")]
//! # async fn example() {
//! use rivulet_core::{feed, from_iterable, StreamItem};
//! use rivulet_runtime::impls::tokio::TokioScheduler;
//! use rivulet_stream_time::{DebounceConfig, DebounceStage};
//! use futures::StreamExt;
//!
//! let (stage, output) = DebounceStage::channel(DebounceConfig::from_millis(100), TokioScheduler::default());
//!
//! // 1 goes through immediately, 2 is replaced by 3, and the stage closes before the
//! // window elapses, so 3 is dropped.
//! feed(from_iterable(vec![1, 2, 3]), &stage).await.unwrap();
//! let forwarded: Vec<i32> = output.map(StreamItem::unwrap).collect().await;
//! assert_eq!(forwarded, vec![1]);
//! # }
//! ```

mod stage;
mod state;
mod stream;

pub use stage::DebounceStage;
pub use state::{Admission, CooldownState};
pub use stream::{DebounceExt, DebounceStream};

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use stream::DebounceWithDefaultTimerExt;
