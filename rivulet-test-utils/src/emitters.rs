// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Emitters that let tests observe what a push stage forwards.

use crate::virtual_scheduler::VirtualScheduler;
use parking_lot::Mutex;
use rivulet_core::{Emitter, Result, RivuletError};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Records every forwarded item, optionally stamped with a virtual time.
///
/// Clones share the same record, so a test keeps one clone and hands the other to the stage.
pub struct RecordingEmitter<T> {
    clock: Option<VirtualScheduler>,
    timeline: Arc<Mutex<Vec<(Duration, T)>>>,
    closed: Arc<AtomicBool>,
}

impl<T> RecordingEmitter<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            clock: None,
            timeline: Arc::new(Mutex::new(Vec::new())),
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Stamps each forwarded item with `scheduler.now()`.
    #[must_use]
    pub fn timed(scheduler: &VirtualScheduler) -> Self {
        Self {
            clock: Some(scheduler.clone()),
            ..Self::new()
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.timeline.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

impl<T: Clone> RecordingEmitter<T> {
    /// Forwarded items in order.
    #[must_use]
    pub fn items(&self) -> Vec<T> {
        self.timeline
            .lock()
            .iter()
            .map(|(_, item)| item.clone())
            .collect()
    }

    /// Forwarded items with the virtual time they were forwarded at.
    #[must_use]
    pub fn timeline(&self) -> Vec<(Duration, T)> {
        self.timeline.lock().clone()
    }
}

impl<T> Default for RecordingEmitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for RecordingEmitter<T> {
    fn clone(&self) -> Self {
        Self {
            clock: self.clock.clone(),
            timeline: Arc::clone(&self.timeline),
            closed: Arc::clone(&self.closed),
        }
    }
}

impl<T> Emitter<T> for RecordingEmitter<T> {
    fn emit(&mut self, item: T) -> Result<()> {
        let at = self
            .clock
            .as_ref()
            .map_or(Duration::ZERO, VirtualScheduler::now);
        self.timeline.lock().push((at, item));
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.closed.store(true, Ordering::Release);
        Ok(())
    }
}

/// Accepts the first `accept` items, then fails every emit with a user error.
#[derive(Clone, Debug)]
pub struct FailingEmitter {
    accept: usize,
    emitted: Arc<AtomicUsize>,
}

#[derive(Debug, thiserror::Error)]
#[error("emitter rejected item #{index}")]
pub struct EmitterRejected {
    pub index: usize,
}

impl FailingEmitter {
    #[must_use]
    pub fn after(accept: usize) -> Self {
        Self {
            accept,
            emitted: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of emit calls seen so far, failed ones included.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.emitted.load(Ordering::Acquire)
    }
}

impl<T> Emitter<T> for FailingEmitter {
    fn emit(&mut self, _item: T) -> Result<()> {
        let index = self.emitted.fetch_add(1, Ordering::AcqRel);
        if index < self.accept {
            Ok(())
        } else {
            Err(RivuletError::user_error(EmitterRejected { index }))
        }
    }
}
