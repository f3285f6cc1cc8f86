// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the debounce traits and types.
//!
//! ```ignore
//! use rivulet_stream_time::prelude::*;
//!
//! let debounced = stream.debounce(Duration::from_millis(50));
//! ```

pub use crate::config::DebounceConfig;
pub use crate::debounce::{DebounceExt, DebounceStage};

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use crate::debounce::DebounceWithDefaultTimerExt;

pub use rivulet_core::Stage;
