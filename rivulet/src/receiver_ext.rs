// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Extension methods turning channel receivers into rivulet sources.

use core::pin::Pin;
use futures::{Stream, StreamExt};
use rivulet_core::StreamItem;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

/// Converts a channel receiver into a `Stream<Item = StreamItem<T>>`.
///
/// Every received value is wrapped in [`StreamItem::Value`]; the stream ends when all senders
/// are dropped. The returned streams are always `Unpin`, so they can be polled through `&mut`
/// and the debounced stream built on them is `Unpin` as well.
///
/// # Examples
///
/// ```rust
/// use rivulet::prelude::*;
/// use futures::StreamExt;
///
/// # futures::executor::block_on(async {
/// let (tx, rx) = async_channel::unbounded::<&str>();
/// tx.try_send("ping").unwrap();
/// drop(tx);
///
/// let items: Vec<_> = rx.into_rivulet_stream().map(StreamItem::unwrap).collect().await;
/// assert_eq!(items, vec!["ping"]);
/// # });
/// ```
pub trait IntoRivuletStream<T> {
    type Stream: Stream<Item = StreamItem<T>> + Unpin;

    fn into_rivulet_stream(self) -> Self::Stream;
}

impl<T> IntoRivuletStream<T> for mpsc::UnboundedReceiver<T> {
    type Stream = futures::stream::Map<UnboundedReceiverStream<T>, fn(T) -> StreamItem<T>>;

    fn into_rivulet_stream(self) -> Self::Stream {
        UnboundedReceiverStream::new(self).map(StreamItem::Value as fn(T) -> StreamItem<T>)
    }
}

/// `async_channel::Receiver` is `!Unpin`, so it is boxed.
impl<T> IntoRivuletStream<T> for async_channel::Receiver<T> {
    type Stream = Pin<Box<futures::stream::Map<async_channel::Receiver<T>, fn(T) -> StreamItem<T>>>>;

    fn into_rivulet_stream(self) -> Self::Stream {
        Box::pin(self.map(StreamItem::Value as fn(T) -> StreamItem<T>))
    }
}
