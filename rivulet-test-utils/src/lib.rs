// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for rivulet.
//!
//! Designed for development and testing only, not for production code.
//!
//! - `test_channel` / `test_channel_with_errors` - push values into a pull stream from a test
//! - `helpers` - assertions over streams (`assert_no_element_emitted`, `unwrap_stream`, ...)
//! - `VirtualScheduler` - deterministic virtual clock for push stages
//! - `RecordingEmitter` / `FailingEmitter` - observable downstreams for push stages
//! - `test_data` - fixtures
//!
//! # Example
//!
//! ```rust
//! use rivulet_test_utils::VirtualScheduler;
//! use rivulet_runtime::scheduler::Scheduler;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let scheduler = VirtualScheduler::new();
//! let fired = Arc::new(AtomicBool::new(false));
//! let flag = fired.clone();
//!
//! scheduler.schedule_once(Duration::from_millis(10), Box::new(move || {
//!     flag.store(true, Ordering::SeqCst);
//!     Ok(())
//! }));
//!
//! scheduler.advance(Duration::from_millis(9)).unwrap();
//! assert!(!fired.load(Ordering::SeqCst));
//! scheduler.advance(Duration::from_millis(1)).unwrap();
//! assert!(fired.load(Ordering::SeqCst));
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod emitters;
pub mod helpers;
pub mod test_data;
pub mod virtual_scheduler;

use futures::{Stream, StreamExt};
use rivulet_core::StreamItem;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use emitters::{FailingEmitter, RecordingEmitter};
pub use helpers::{assert_no_element_emitted, assert_stream_ended, unwrap_stream};
pub use test_data::TestData;
pub use virtual_scheduler::VirtualScheduler;

/// Creates a test channel that automatically wraps values in `StreamItem::Value`.
///
/// # Example
///
/// ```rust
/// use rivulet_test_utils::test_channel;
/// use rivulet_test_utils::test_data::query_r;
/// use futures::StreamExt;
///
/// # async fn example() {
/// let (tx, mut stream) = test_channel();
///
/// tx.send(query_r()).unwrap();
///
/// let item = stream.next().await.unwrap().unwrap(); // Option -> StreamItem -> Value
/// # }
/// ```
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx).map(StreamItem::Value);
    (tx, stream)
}

/// Creates a test channel that accepts `StreamItem<T>` for testing error propagation.
pub fn test_channel_with_errors<T: Send + 'static>() -> (
    mpsc::UnboundedSender<StreamItem<T>>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx);
    (tx, stream)
}
