// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::{FusedStream, StreamExt};
use rivulet_core::{from_iterable, StreamItem};
use rivulet_stream_time::{prelude::*, TokioTimer};
use rivulet_test_utils::{
    helpers::{assert_no_element_emitted, assert_stream_ended, unwrap_stream},
    test_channel,
    test_data::{query_r, query_ru},
    TestData,
};
use std::time::Duration;
use tokio::time::{advance, pause};

#[tokio::test]
async fn test_debounce_source_end_drops_held_value() -> anyhow::Result<()> {
    // Arrange
    pause();

    let (tx, stream) = test_channel::<TestData>();
    let mut debounced = stream.debounce(Duration::from_millis(100));

    tx.send(query_r())?;
    assert_eq!(unwrap_stream(&mut debounced, 100).await.unwrap(), query_r());
    tx.send(query_ru())?;
    assert_no_element_emitted(&mut debounced, 0).await;

    // Act
    drop(tx);

    // Assert
    assert_stream_ended(&mut debounced, 100).await;
    assert!(debounced.is_terminated());
    assert!(!debounced.is_cooling_down());

    Ok(())
}

#[tokio::test]
async fn test_debounce_stays_terminated() -> anyhow::Result<()> {
    // Arrange
    pause();

    let (tx, stream) = test_channel::<TestData>();
    let mut debounced = stream.debounce(Duration::from_millis(100));
    drop(tx);

    // Act
    assert_stream_ended(&mut debounced, 100).await;
    advance(Duration::from_millis(500)).await;

    // Assert
    assert!(debounced.next().await.is_none());
    assert!(debounced.next().await.is_none());

    Ok(())
}

#[tokio::test]
async fn test_debounce_ready_source_collapses_to_first_value() {
    // Arrange
    pause();

    let debounced = from_iterable(vec![1, 2, 3]).debounce(Duration::from_millis(100));

    // Act
    let collected: Vec<i32> = debounced.map(StreamItem::unwrap).collect().await;

    // Assert - 2 and 3 arrive inside the window, 3 is dropped when the source ends
    assert_eq!(collected, vec![1]);
}

#[tokio::test]
async fn test_debounce_with_explicit_timer() -> anyhow::Result<()> {
    // Arrange
    pause();

    let (tx, stream) = test_channel::<TestData>();
    let mut debounced = stream.debounce_with_timer(DebounceConfig::from_millis(100), TokioTimer);

    // Act
    tx.send(query_r())?;
    tx.send(query_ru())?;

    // Assert
    assert_eq!(unwrap_stream(&mut debounced, 100).await.unwrap(), query_r());
    assert_no_element_emitted(&mut debounced, 0).await;

    advance(Duration::from_millis(100)).await;
    assert_eq!(unwrap_stream(&mut debounced, 100).await.unwrap(), query_ru());

    Ok(())
}

#[tokio::test]
async fn test_debounce_idle_stream_stays_pending() {
    // Arrange
    pause();

    let (_tx, stream) = test_channel::<TestData>();
    let mut debounced = stream.debounce(Duration::from_millis(100));

    // Act & Assert
    assert_no_element_emitted(&mut debounced, 1_000).await;
    assert!(!debounced.is_terminated());
}
