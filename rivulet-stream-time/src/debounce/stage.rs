// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::state::{Admission, CooldownState};
use crate::config::DebounceConfig;
use core::time::Duration;
use parking_lot::Mutex;
use rivulet_core::{debug, trace, warn, Emitter, Result, RivuletError, Stage, StreamItem};
use rivulet_runtime::scheduler::{Scheduler, TimerHandle};
use std::sync::Arc;

/// Push-based debounce stage.
///
/// The first item of a burst is forwarded synchronously from [`Stage::receive`]; items that
/// arrive while the cooldown window runs replace each other in a single pending slot, and the
/// survivor is forwarded when the window elapses. That flush starts a new window, so a long
/// burst comes out as one item per window.
///
/// [`Stage::close`] discards the pending item, cancels the outstanding timer and closes the
/// emitter. Pushing after close fails with [`RivuletError::InvalidState`].
///
/// Forwarding happens under the stage lock, so emitters must not call back into the same
/// stage. Errors returned by the emitter reach the caller of `receive`, or the scheduler when
/// the forward was a timer flush.
///
/// # Example
///
/// ```rust
/// use rivulet_core::Stage;
/// use rivulet_stream_time::{DebounceConfig, DebounceStage};
/// use rivulet_test_utils::{RecordingEmitter, VirtualScheduler};
/// use std::time::Duration;
///
/// let scheduler = VirtualScheduler::new();
/// let emitter = RecordingEmitter::new();
/// let stage = DebounceStage::new(DebounceConfig::from_millis(100), scheduler.clone(), emitter.clone());
///
/// stage.receive(1).unwrap();
/// stage.receive(2).unwrap();
/// stage.receive(3).unwrap();
/// scheduler.advance(Duration::from_millis(100)).unwrap();
///
/// assert_eq!(emitter.items(), vec![1, 3]);
/// ```
pub struct DebounceStage<T, E, S> {
    shared: Arc<Shared<T, E, S>>,
}

struct Shared<T, E, S> {
    window: Duration,
    scheduler: S,
    state: Mutex<StageState<T, E>>,
}

struct StageState<T, E> {
    cooldown: CooldownState<T>,
    emitter: E,
    timer: Option<TimerHandle>,
}

impl<T, E, S> DebounceStage<T, E, S>
where
    T: Send + 'static,
    E: Emitter<T> + Send + 'static,
    S: Scheduler,
{
    /// Creates an idle stage. No timer is scheduled until the first item arrives.
    pub fn new(config: DebounceConfig, scheduler: S, emitter: E) -> Self {
        Self {
            shared: Arc::new(Shared {
                window: config.window(),
                scheduler,
                state: Mutex::new(StageState {
                    cooldown: CooldownState::new(),
                    emitter,
                    timer: None,
                }),
            }),
        }
    }
}

impl<T, E, S> DebounceStage<T, E, S> {
    #[must_use]
    pub fn window(&self) -> Duration {
        self.shared.window
    }

    /// `true` while a cooldown timer is outstanding.
    #[must_use]
    pub fn is_cooling_down(&self) -> bool {
        self.shared.state.lock().cooldown.is_cooling_down()
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.shared.state.lock().cooldown.has_pending()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.shared.state.lock().cooldown.is_closed()
    }
}

impl<T, S> DebounceStage<T, async_channel::Sender<StreamItem<T>>, S>
where
    T: Send + 'static,
    S: Scheduler,
{
    /// Creates a stage whose forwarded items come out of the returned receiver.
    ///
    /// The receiver is a `Stream<Item = StreamItem<T>>`; it ends once the stage is closed.
    pub fn channel(
        config: DebounceConfig,
        scheduler: S,
    ) -> (Self, async_channel::Receiver<StreamItem<T>>) {
        let (tx, rx) = async_channel::unbounded();
        (Self::new(config, scheduler, tx), rx)
    }
}

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
impl<T, E> DebounceStage<T, E, <crate::DefaultRuntime as rivulet_runtime::runtime::Runtime>::Scheduler>
where
    T: Send + 'static,
    E: Emitter<T> + Send + 'static,
{
    /// Creates a stage driven by the default runtime's scheduler.
    pub fn with_default_scheduler(config: DebounceConfig, emitter: E) -> Self {
        Self::new(config, Default::default(), emitter)
    }
}

impl<T, E, S> Shared<T, E, S>
where
    T: Send + 'static,
    E: Emitter<T> + Send + 'static,
    S: Scheduler,
{
    fn arm(self: &Arc<Self>, state: &mut StageState<T, E>) {
        let shared = Arc::clone(self);
        let handle = self
            .scheduler
            .schedule_once(self.window, Box::new(move || shared.expire()));
        state.timer = Some(handle);
    }

    fn expire(self: &Arc<Self>) -> Result<()> {
        let mut state = self.state.lock();
        state.timer = None;

        match state.cooldown.expire() {
            Some(item) => {
                debug!("debounce window elapsed, flushing held item");
                self.arm(&mut state);
                state.emitter.emit(item)
            }
            None => {
                trace!("debounce window elapsed with nothing held");
                Ok(())
            }
        }
    }
}

impl<T, E, S> Stage<T> for DebounceStage<T, E, S>
where
    T: Send + 'static,
    E: Emitter<T> + Send + 'static,
    S: Scheduler,
{
    fn receive(&self, item: T) -> Result<()> {
        let mut state = self.shared.state.lock();

        match state.cooldown.receive(item) {
            Admission::Forward(item) => {
                debug!("forwarding item, cooldown of {:?} started", self.shared.window);
                self.shared.arm(&mut state);
                state.emitter.emit(item)
            }
            Admission::Held => {
                trace!("cooldown running, holding item");
                Ok(())
            }
            Admission::Closed(_) => {
                warn!("debounce stage received an item after close, dropping it");
                Err(RivuletError::invalid_state(
                    "item received after the debounce stage was closed",
                ))
            }
        }
    }

    fn close(&self) -> Result<()> {
        let mut state = self.shared.state.lock();
        if state.cooldown.is_closed() {
            return Ok(());
        }

        if state.cooldown.close().is_some() {
            debug!("debounce stage closed, discarding held item");
        }
        if let Some(timer) = state.timer.take() {
            timer.cancel();
        }

        state.emitter.close()
    }
}

impl<T, E, S> Clone for DebounceStage<T, E, S> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}
