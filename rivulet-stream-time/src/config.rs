// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::time::Duration;
use rivulet_core::{Result, RivuletError};

/// Configuration of a debounce stage: the cooldown window that follows every forwarded item.
///
/// A zero window is valid and keeps the stage close to a pass-through: items pushed before
/// the zero-length timer gets to run are still coalesced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebounceConfig {
    window: Duration,
}

impl DebounceConfig {
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self { window }
    }

    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Builds a config from a signed millisecond count.
    ///
    /// # Errors
    ///
    /// Returns [`RivuletError::InvalidArgument`] when `ms` is negative.
    pub fn try_from_millis(ms: i64) -> Result<Self> {
        u64::try_from(ms).map(Self::from_millis).map_err(|_| {
            RivuletError::invalid_argument(format!(
                "debounce window must not be negative, got {ms}ms"
            ))
        })
    }

    /// Builds a config from a fractional millisecond count.
    ///
    /// # Errors
    ///
    /// Returns [`RivuletError::InvalidArgument`] when `ms` is negative, NaN or infinite.
    pub fn try_from_millis_f64(ms: f64) -> Result<Self> {
        Self::try_from_secs_f64(ms / 1000.0)
    }

    /// # Errors
    ///
    /// Returns [`RivuletError::InvalidArgument`] when `secs` is negative, NaN or too large
    /// for a [`Duration`].
    pub fn try_from_secs_f64(secs: f64) -> Result<Self> {
        Duration::try_from_secs_f64(secs)
            .map(Self::new)
            .map_err(|err| {
                RivuletError::invalid_argument(format!(
                    "invalid debounce window {secs}s: {err}"
                ))
            })
    }

    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }
}

impl From<Duration> for DebounceConfig {
    fn from(window: Duration) -> Self {
        Self::new(window)
    }
}
