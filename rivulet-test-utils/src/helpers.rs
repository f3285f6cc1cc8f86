// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::{Stream, StreamExt};
use rivulet_core::StreamItem;
use std::time::Duration;
use tokio::time::{sleep, timeout};

/// Asserts that `stream` yields nothing within `timeout_ms`.
///
/// The stream is polled before the sleep, so items already sitting in a source channel
/// are always pulled into the operator under test, even with a zero timeout.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        biased;
        _state = stream.next() => {
            panic!("Unexpected element emitted, expected no output.");
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

/// Waits up to `timeout_ms` for the next item of `stream`.
///
/// # Panics
///
/// Panics if the stream ends or nothing arrives in time.
pub async fn unwrap_stream<S, T>(stream: &mut S, timeout_ms: u64) -> StreamItem<T>
where
    S: Stream<Item = StreamItem<T>> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(Some(item)) => item,
        Ok(None) => panic!("Stream ended before an element was emitted"),
        Err(_) => panic!("Timeout: no element emitted within {timeout_ms}ms"),
    }
}

/// Asserts that `stream` ends within `timeout_ms`.
pub async fn assert_stream_ended<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(None) => {}
        Ok(Some(_)) => panic!("Expected the stream to end, but it emitted an element"),
        Err(_) => panic!("Timeout: stream did not end within {timeout_ms}ms"),
    }
}
