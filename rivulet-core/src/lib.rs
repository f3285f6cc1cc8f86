// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types shared by rivulet stages.
//!
//! - [`StreamItem`] - value-or-error items flowing through pull streams
//! - [`RivuletError`] / [`Result`] - the single error type of the workspace
//! - [`Stage`] / [`Emitter`] - the push protocol (receive, close, forward)
//! - [`feed`] - drives a push stage from a pull stream
//! - [`from_iterable`] - a source emitting the elements of an iterable

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod error;
pub mod logging;
pub mod sources;
pub mod stage;
pub mod stream_item;

pub use self::error::{Result, RivuletError};
pub use self::sources::from_iterable;
pub use self::stage::{feed, Emitter, Stage};
pub use self::stream_item::StreamItem;
