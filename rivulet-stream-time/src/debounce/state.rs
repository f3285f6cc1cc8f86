// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The debounce policy as a plain state machine.
//!
//! | State | receive(item) | window elapses | close |
//! |---|---|---|---|
//! | idle | forward, start cooldown | - | closed |
//! | cooling down, slot empty | hold item | idle | closed, window cancelled |
//! | cooling down, slot full | replace held item | forward held item, restart cooldown | closed, window cancelled, held item dropped |
//!
//! Nothing here knows about timers: callers arm one whenever the state asks them to forward.

/// Outcome of [`CooldownState::receive`].
#[derive(Debug, PartialEq, Eq)]
pub enum Admission<T> {
    /// No cooldown was running. Forward the item now and arm a timer for one window.
    Forward(T),
    /// A cooldown is running; the item now occupies the pending slot.
    Held,
    /// The state is closed. The item is handed back untouched.
    Closed(T),
}

#[derive(Debug)]
pub struct CooldownState<T> {
    cooling_down: bool,
    pending: Option<T>,
    closed: bool,
}

impl<T> CooldownState<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cooling_down: false,
            pending: None,
            closed: false,
        }
    }

    pub fn receive(&mut self, item: T) -> Admission<T> {
        if self.closed {
            return Admission::Closed(item);
        }

        if self.cooling_down {
            // Overwrite: only the newest held item can ever be flushed.
            self.pending = Some(item);
            Admission::Held
        } else {
            self.cooling_down = true;
            Admission::Forward(item)
        }
    }

    /// Ends the current cooldown window.
    ///
    /// Returns the held item if there is one and the state is still open. In that case the
    /// flush counts as a fresh forward: cooldown is back on and the caller must arm a new timer.
    pub fn expire(&mut self) -> Option<T> {
        self.cooling_down = false;

        if self.closed {
            return None;
        }

        let item = self.pending.take()?;
        self.cooling_down = true;
        Some(item)
    }

    /// Marks the state closed and returns the held item, which will never be forwarded.
    /// Closing twice is harmless.
    ///
    /// The running window ends here as well: callers drop or cancel its timer on close.
    pub fn close(&mut self) -> Option<T> {
        self.closed = true;
        self.cooling_down = false;
        self.pending.take()
    }

    #[must_use]
    pub const fn is_cooling_down(&self) -> bool {
        self.cooling_down
    }

    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }
}

impl<T> Default for CooldownState<T> {
    fn default() -> Self {
        Self::new()
    }
}
