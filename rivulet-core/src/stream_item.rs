// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::RivuletError;

/// Item of a pull stream: a value, or an error raised upstream.
///
/// Stages apply their policy to values only. Errors travel next to the values, in order,
/// and never touch a stage's state.
#[derive(Debug)]
pub enum StreamItem<T> {
    Value(T),
    Error(RivuletError),
}

// Errors carry boxed sources that cannot be compared, so no two items holding one are equal.
impl<T: PartialEq> PartialEq for StreamItem<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StreamItem::Value(a), StreamItem::Value(b)) => a == b,
            _ => false,
        }
    }
}

impl<T> StreamItem<T> {
    pub const fn is_value(&self) -> bool {
        matches!(self, StreamItem::Value(_))
    }

    pub const fn is_error(&self) -> bool {
        matches!(self, StreamItem::Error(_))
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics with the carried error if the item is an `Error`.
    pub fn unwrap(self) -> T {
        match self {
            StreamItem::Value(value) => value,
            StreamItem::Error(err) => {
                panic!("called `StreamItem::unwrap()` on an `Error` value: {err:?}")
            }
        }
    }
}
