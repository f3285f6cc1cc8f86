// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Push-side building blocks.
//!
//! A [`Stage`] is fed one item at a time by its producer and forwards a subset of them to an
//! [`Emitter`]. The producer guarantees that `receive` calls never overlap and that `close`
//! is called exactly once after the last item. [`feed`] implements that producer contract on
//! top of any pull stream.

use crate::{Result, RivuletError, StreamItem};
use futures::{Stream, StreamExt};

/// Downstream side of a push stage.
///
/// Errors returned from [`emit`](Emitter::emit) propagate unchanged to whoever triggered
/// the forward.
pub trait Emitter<T> {
    /// Forwards one item downstream.
    fn emit(&mut self, item: T) -> Result<()>;

    /// Signals that no more items will be forwarded.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T, F> Emitter<T> for F
where
    F: FnMut(T) -> Result<()>,
{
    fn emit(&mut self, item: T) -> Result<()> {
        self(item)
    }
}

/// Forwards into an unbounded (or sufficiently sized) `async_channel`, wrapping each item in
/// [`StreamItem::Value`]. Closing the emitter closes the channel, which ends the receiving stream.
impl<T> Emitter<T> for async_channel::Sender<StreamItem<T>> {
    fn emit(&mut self, item: T) -> Result<()> {
        self.try_send(StreamItem::Value(item)).map_err(|err| {
            if err.is_full() {
                RivuletError::invalid_state("downstream channel is full")
            } else {
                RivuletError::invalid_state("downstream channel is closed")
            }
        })
    }

    fn close(&mut self) -> Result<()> {
        async_channel::Sender::close(self);
        Ok(())
    }
}

/// A processing stage fed by a push protocol.
///
/// Methods take `&self`: stages keep their state behind interior mutability because timers
/// and other callbacks may touch it between two `receive` calls.
pub trait Stage<T> {
    /// Hands the next item to the stage.
    fn receive(&self, item: T) -> Result<()>;

    /// Signals end of input. No `receive` may follow.
    fn close(&self) -> Result<()>;
}

/// Drives `stage` from `source` until the source ends.
///
/// Every value is passed to [`Stage::receive`] in order, then [`Stage::close`] is called
/// exactly once. An error item closes the stage and is returned; an error from the stage
/// itself is returned without closing it.
///
/// # Example
///
/// ```rust
/// use rivulet_core::{feed, from_iterable, Result, Stage};
/// use std::sync::Mutex;
///
/// struct Collect(Mutex<Vec<i32>>);
///
/// impl Stage<i32> for Collect {
///     fn receive(&self, item: i32) -> Result<()> {
///         self.0.lock().unwrap().push(item);
///         Ok(())
///     }
///
///     fn close(&self) -> Result<()> {
///         Ok(())
///     }
/// }
///
/// # futures::executor::block_on(async {
/// let stage = Collect(Mutex::new(Vec::new()));
/// feed(from_iterable(vec![1, 2, 3]), &stage).await.unwrap();
/// assert_eq!(*stage.0.lock().unwrap(), vec![1, 2, 3]);
/// # });
/// ```
pub async fn feed<S, T, St>(source: S, stage: &St) -> Result<()>
where
    S: Stream<Item = StreamItem<T>>,
    St: Stage<T> + ?Sized,
{
    let mut source = core::pin::pin!(source);

    while let Some(item) = source.next().await {
        match item {
            StreamItem::Value(value) => stage.receive(value)?,
            StreamItem::Error(err) => {
                stage.close()?;
                return Err(err);
            }
        }
    }

    stage.close()
}
