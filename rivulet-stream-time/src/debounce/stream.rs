// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::state::{Admission, CooldownState};
use crate::config::DebounceConfig;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use core::time::Duration;
use futures::stream::{FusedStream, Stream};
use pin_project::pin_project;
use rivulet_core::{debug, trace, StreamItem};
use rivulet_runtime::timer::Timer;

/// Extension trait providing the debounce operator with an explicit [`Timer`].
pub trait DebounceExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Debounces the stream, using `timer` for the cooldown windows.
    ///
    /// - A value that arrives while no cooldown runs is emitted immediately and starts a window.
    /// - Values arriving during the window replace each other; the last one is emitted when
    ///   the window elapses, and that emission starts the next window.
    /// - Errors pass through immediately and leave the window untouched.
    /// - When the source ends, the debounced stream ends too and a held value is dropped.
    ///
    /// A value counts as arrived when the operator pulls it from the source, so the consumer
    /// has to keep polling for arrival times to be meaningful.
    fn debounce_with_timer<TM>(
        self,
        config: impl Into<DebounceConfig>,
        timer: TM,
    ) -> DebounceStream<Self, T, TM>
    where
        TM: Timer;
}

impl<S, T> DebounceExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
{
    fn debounce_with_timer<TM>(
        self,
        config: impl Into<DebounceConfig>,
        timer: TM,
    ) -> DebounceStream<Self, T, TM>
    where
        TM: Timer,
    {
        DebounceStream::new(self, config.into().window(), timer)
    }
}

/// Extension trait providing the debounce operator with the default runtime's timer.
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub trait DebounceWithDefaultTimerExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// See [`DebounceExt::debounce_with_timer`].
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use rivulet_core::from_iterable;
    /// use rivulet_stream_time::prelude::*;
    /// use std::time::Duration;
    ///
    /// let debounced = from_iterable(vec![1, 2, 3]).debounce(Duration::from_millis(100));
    /// ```
    fn debounce(
        self,
        config: impl Into<DebounceConfig>,
    ) -> DebounceStream<Self, T, crate::DefaultTimer>;
}

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
impl<S, T> DebounceWithDefaultTimerExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
{
    fn debounce(
        self,
        config: impl Into<DebounceConfig>,
    ) -> DebounceStream<Self, T, crate::DefaultTimer> {
        self.debounce_with_timer(config, crate::DefaultTimer::default())
    }
}

/// Stream returned by the debounce operators.
#[pin_project]
pub struct DebounceStream<S, T, TM>
where
    TM: Timer,
{
    #[pin]
    stream: S,
    window: Duration,
    timer: TM,
    sleep: Option<Pin<Box<TM::Sleep>>>,
    state: CooldownState<T>,
    done: bool,
}

impl<S, T, TM> DebounceStream<S, T, TM>
where
    TM: Timer,
{
    fn new(stream: S, window: Duration, timer: TM) -> Self {
        Self {
            stream,
            window,
            timer,
            sleep: None,
            state: CooldownState::new(),
            done: false,
        }
    }

    /// `true` while a cooldown window is running.
    pub fn is_cooling_down(&self) -> bool {
        self.state.is_cooling_down()
    }
}

impl<S, T, TM> Stream for DebounceStream<S, T, TM>
where
    S: Stream<Item = StreamItem<T>>,
    TM: Timer,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.done {
            return Poll::Ready(None);
        }

        loop {
            // 1. Window expiry first, so a held value is flushed before newer arrivals are seen
            if let Some(sleep) = this.sleep.as_mut() {
                if sleep.as_mut().poll(cx).is_ready() {
                    *this.sleep = None;
                    if let Some(value) = this.state.expire() {
                        debug!("debounce window elapsed, flushing held value");
                        *this.sleep = Some(Box::pin(this.timer.sleep_future(*this.window)));
                        return Poll::Ready(Some(StreamItem::Value(value)));
                    }
                }
            }

            // 2. Poll source stream
            match this.stream.as_mut().poll_next(cx) {
                Poll::Ready(Some(StreamItem::Value(value))) => match this.state.receive(value) {
                    Admission::Forward(value) => {
                        *this.sleep = Some(Box::pin(this.timer.sleep_future(*this.window)));
                        return Poll::Ready(Some(StreamItem::Value(value)));
                    }
                    Admission::Held => {
                        trace!("cooldown running, holding value");
                        continue;
                    }
                    Admission::Closed(_) => {
                        *this.done = true;
                        return Poll::Ready(None);
                    }
                },
                Poll::Ready(Some(StreamItem::Error(err))) => {
                    // Errors pass through immediately
                    return Poll::Ready(Some(StreamItem::Error(err)));
                }
                Poll::Ready(None) => {
                    if this.state.close().is_some() {
                        debug!("source ended, discarding held value");
                    }
                    *this.sleep = None;
                    *this.done = true;
                    return Poll::Ready(None);
                }
                Poll::Pending => {
                    // A running sleep was polled above and has registered the waker.
                    return Poll::Pending;
                }
            }
        }
    }
}

impl<S, T, TM> FusedStream for DebounceStream<S, T, TM>
where
    S: Stream<Item = StreamItem<T>>,
    TM: Timer,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}
