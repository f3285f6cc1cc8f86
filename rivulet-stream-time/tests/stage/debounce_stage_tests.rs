// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{feed, from_iterable, Stage, StreamItem};
use rivulet_stream_time::{DebounceConfig, DebounceStage};
use rivulet_test_utils::{
    test_data::{query_r, query_ru, query_rus, resize_small},
    RecordingEmitter, VirtualScheduler,
};
use std::time::Duration;

#[test]
fn test_idle_stage_schedules_nothing() {
    let scheduler = VirtualScheduler::new();
    let stage = DebounceStage::<i32, _, _>::new(
        DebounceConfig::from_millis(100),
        scheduler.clone(),
        RecordingEmitter::new(),
    );

    assert_eq!(stage.window(), Duration::from_millis(100));
    assert!(!stage.is_cooling_down());
    assert!(!stage.has_pending());
    assert_eq!(scheduler.pending_timers(), 0);
}

#[test]
fn test_spaced_items_pass_through() -> anyhow::Result<()> {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let emitter = RecordingEmitter::new();
    let stage = DebounceStage::new(DebounceConfig::from_millis(100), scheduler.clone(), emitter.clone());

    // Act
    stage.receive(query_r())?;
    scheduler.advance(Duration::from_millis(100))?;
    stage.receive(query_ru())?;
    scheduler.advance(Duration::from_millis(100))?;
    stage.receive(query_rus())?;

    // Assert
    assert_eq!(
        emitter.items(),
        vec![query_r(), query_ru(), query_rus()]
    );

    Ok(())
}

#[test]
fn test_item_at_window_boundary_is_forwarded() -> anyhow::Result<()> {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let emitter = RecordingEmitter::new();
    let stage = DebounceStage::new(DebounceConfig::from_millis(100), scheduler.clone(), emitter.clone());
    stage.receive(1)?;

    // Act - the timer due at 100ms runs before the push
    scheduler.advance(Duration::from_millis(100))?;
    stage.receive(2)?;

    // Assert
    assert_eq!(emitter.items(), vec![1, 2]);

    Ok(())
}

#[test]
fn test_one_timer_per_window() -> anyhow::Result<()> {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let stage = DebounceStage::new(
        DebounceConfig::from_millis(100),
        scheduler.clone(),
        RecordingEmitter::new(),
    );

    // Act
    for item in 0..20 {
        stage.receive(item)?;
    }

    // Assert
    assert_eq!(scheduler.pending_timers(), 1);

    Ok(())
}

#[test]
fn test_close_discards_pending_item() -> anyhow::Result<()> {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let emitter = RecordingEmitter::new();
    let stage = DebounceStage::new(DebounceConfig::from_millis(100), scheduler.clone(), emitter.clone());
    stage.receive(1)?;
    stage.receive(2)?;

    // Act
    stage.close()?;
    scheduler.advance(Duration::from_millis(500))?;

    // Assert
    assert_eq!(emitter.items(), vec![1]);
    assert!(emitter.is_closed());
    assert!(stage.is_closed());
    assert!(!stage.has_pending());

    Ok(())
}

#[test]
fn test_close_cancels_outstanding_timer() -> anyhow::Result<()> {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let stage = DebounceStage::new(
        DebounceConfig::from_millis(100),
        scheduler.clone(),
        RecordingEmitter::new(),
    );
    stage.receive(1)?;
    assert_eq!(scheduler.pending_timers(), 1);

    // Act
    stage.close()?;

    // Assert
    assert_eq!(scheduler.pending_timers(), 0);
    assert!(!stage.is_cooling_down());

    Ok(())
}

#[test]
fn test_close_while_idle_emits_nothing() -> anyhow::Result<()> {
    let scheduler = VirtualScheduler::new();
    let emitter = RecordingEmitter::<i32>::new();
    let stage = DebounceStage::new(DebounceConfig::from_millis(100), scheduler.clone(), emitter.clone());

    stage.close()?;
    scheduler.run_until_idle()?;

    assert!(emitter.is_empty());
    assert!(emitter.is_closed());
    Ok(())
}

#[test]
fn test_close_is_idempotent() -> anyhow::Result<()> {
    let stage = DebounceStage::new(
        DebounceConfig::from_millis(10),
        VirtualScheduler::new(),
        RecordingEmitter::<i32>::new(),
    );

    stage.close()?;
    stage.close()?;

    assert!(stage.is_closed());
    Ok(())
}

#[test]
fn test_clones_share_state() -> anyhow::Result<()> {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let emitter = RecordingEmitter::new();
    let stage = DebounceStage::new(DebounceConfig::from_millis(100), scheduler.clone(), emitter.clone());
    let other = stage.clone();

    // Act
    stage.receive(1)?;
    other.receive(2)?;

    // Assert
    assert!(other.has_pending());
    scheduler.advance(Duration::from_millis(100))?;
    assert_eq!(emitter.items(), vec![1, 2]);

    Ok(())
}

#[test]
fn test_mixed_items_keep_order() -> anyhow::Result<()> {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let emitter = RecordingEmitter::new();
    let stage = DebounceStage::new(DebounceConfig::from_millis(100), scheduler.clone(), emitter.clone());

    // Act
    stage.receive(query_r())?;
    stage.receive(resize_small())?;
    stage.receive(query_ru())?;
    scheduler.advance(Duration::from_millis(100))?;
    scheduler.advance(Duration::from_millis(100))?;
    stage.receive(query_rus())?;

    // Assert
    assert_eq!(
        emitter.items(),
        vec![query_r(), query_ru(), query_rus()]
    );

    Ok(())
}

#[test]
fn test_channel_stage_ends_receiver_on_close() -> anyhow::Result<()> {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let (stage, rx) = DebounceStage::channel(DebounceConfig::from_millis(100), scheduler.clone());

    // Act
    stage.receive(1)?;
    stage.receive(2)?;
    scheduler.advance(Duration::from_millis(100))?;
    stage.receive(3)?;
    stage.close()?;

    // Assert - 3 was held when the stage closed
    let forwarded: Vec<i32> = std::iter::from_fn(|| rx.try_recv().ok())
        .map(StreamItem::unwrap)
        .collect();
    assert_eq!(forwarded, vec![1, 2]);
    assert!(rx.is_closed());

    Ok(())
}

#[test]
fn test_feed_closes_stage_after_source_ends() -> anyhow::Result<()> {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let emitter = RecordingEmitter::new();
    let stage = DebounceStage::new(DebounceConfig::from_millis(0), scheduler.clone(), emitter.clone());

    // Act - every item arrives in the same turn
    futures::executor::block_on(feed(from_iterable(vec![1, 2, 3]), &stage))?;
    scheduler.run_until_idle()?;

    // Assert - the held item is discarded by close
    assert_eq!(emitter.items(), vec![1]);
    assert!(emitter.is_closed());

    Ok(())
}
