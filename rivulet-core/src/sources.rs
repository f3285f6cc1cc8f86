// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::StreamItem;
use futures::stream::{self, Stream, StreamExt};

/// Creates a source that emits every element of `iterable` as a [`StreamItem::Value`], in
/// iteration order, and then ends.
///
/// The returned stream is always ready; it never yields `Pending`.
///
/// # Example
///
/// ```rust
/// use rivulet_core::{from_iterable, StreamItem};
/// use futures::StreamExt;
///
/// # futures::executor::block_on(async {
/// let mut source = from_iterable([1, 2]);
/// assert_eq!(source.next().await, Some(StreamItem::Value(1)));
/// assert_eq!(source.next().await, Some(StreamItem::Value(2)));
/// assert!(source.next().await.is_none());
/// # });
/// ```
pub fn from_iterable<I>(iterable: I) -> impl Stream<Item = StreamItem<I::Item>> + Unpin
where
    I: IntoIterator,
{
    stream::iter(iterable).map(StreamItem::Value)
}
