// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::channel::mpsc;
use futures::StreamExt;
use rivulet_core::{Stage, StreamItem};
use rivulet_stream_time::{DebounceConfig, DebounceExt, DebounceStage, SmolScheduler, SmolTimer};
use std::time::{Duration, Instant};

#[test]
fn test_debounce_smol_flushes_held_value() {
    smol::block_on(async {
        // Arrange
        let (tx, rx) = mpsc::unbounded::<i32>();
        let mut debounced = rx
            .map(StreamItem::Value)
            .debounce_with_timer(Duration::from_millis(50), SmolTimer);
        let start = Instant::now();

        // Act
        tx.unbounded_send(1).unwrap();
        tx.unbounded_send(2).unwrap();

        // Assert
        assert_eq!(debounced.next().await, Some(StreamItem::Value(1)));
        assert_eq!(debounced.next().await, Some(StreamItem::Value(2)));
        assert!(start.elapsed() >= Duration::from_millis(50));
    });
}

#[test]
fn test_debounce_smol_source_end_drops_held_value() {
    smol::block_on(async {
        // Arrange
        let (tx, rx) = mpsc::unbounded::<i32>();
        let mut debounced = rx
            .map(StreamItem::Value)
            .debounce_with_timer(Duration::from_millis(50), SmolTimer);

        // Act
        tx.unbounded_send(1).unwrap();
        tx.unbounded_send(2).unwrap();
        drop(tx);

        // Assert
        assert_eq!(debounced.next().await, Some(StreamItem::Value(1)));
        assert!(debounced.next().await.is_none());
    });
}

#[test]
fn test_debounce_stage_smol_scheduler() {
    smol::block_on(async {
        // Arrange
        let (stage, rx) =
            DebounceStage::channel(DebounceConfig::from_millis(50), SmolScheduler::default());

        // Act
        stage.receive(1).unwrap();
        stage.receive(2).unwrap();
        stage.receive(3).unwrap();

        // Assert
        assert_eq!(rx.recv().await.unwrap(), StreamItem::Value(1));
        assert_eq!(rx.recv().await.unwrap(), StreamItem::Value(3));

        stage.close().unwrap();
        assert!(rx.recv().await.is_err());
    });
}
