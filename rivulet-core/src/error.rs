// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for rivulet stages and streams.
//!
//! A single [`RivuletError`] covers misuse of a stage (bad configuration, pushing into a
//! closed stage) as well as failures reported by downstream consumers. Pull-based streams
//! carry it inside [`StreamItem::Error`](crate::StreamItem::Error); push-based stages return
//! it from [`Stage::receive`](crate::Stage::receive) and [`Stage::close`](crate::Stage::close).
//!
//! # Examples
//!
//! ```
//! use rivulet_core::{Result, RivuletError};
//!
//! fn window_from_millis(ms: i64) -> Result<u64> {
//!     u64::try_from(ms).map_err(|_| RivuletError::invalid_argument("window must not be negative"))
//! }
//!
//! assert!(window_from_millis(-1).is_err());
//! ```

/// Root error type for all rivulet operations.
#[derive(Debug, thiserror::Error)]
pub enum RivuletError {
    /// Stream processing encountered an error
    ///
    /// General failure that does not fit the more specific variants.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong during stream processing
        context: String,
    },

    /// A constructor argument was rejected.
    #[error("Invalid argument: {context}")]
    InvalidArgument {
        /// Which argument was rejected and why
        context: String,
    },

    /// An operation was attempted in a state that does not allow it,
    /// e.g. pushing into a stage after it was closed.
    #[error("Invalid state: {context}")]
    InvalidState {
        /// Description of the offending operation
        context: String,
    },

    /// Custom error from user code
    ///
    /// Wraps errors produced by user-provided emitters and callbacks so they can travel
    /// through the rivulet error system.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RivuletError {
    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Create an invalid-argument error with the given context
    pub fn invalid_argument(context: impl Into<String>) -> Self {
        Self::InvalidArgument {
            context: context.into(),
        }
    }

    /// Create an invalid-state error with the given context
    pub fn invalid_state(context: impl Into<String>) -> Self {
        Self::InvalidState {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Check if this error was caused by the caller rather than by the data flowing through.
    #[must_use]
    pub const fn is_misuse(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::InvalidState { .. }
        )
    }
}

/// Specialized Result type for rivulet operations
pub type Result<T> = std::result::Result<T, RivuletError>;
