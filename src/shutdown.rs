//! Process-wide shutdown coordination.
//! The ctrlc handler sets the flag; the publish and rename loops poll it between items
//! so an interrupt never lands in the middle of a rename or a git step.
//!
//! Relaxed atomics are sufficient for a one-way "stop" flag.
//!
//! A blocking terminal read is marked with [`awaiting_input`]; the handler exits the
//! process in that state, since the read itself is restarted after the signal.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::errors::MediaDirError;

static SHUTDOWN: AtomicBool = AtomicBool::new(false);
static AWAITING_INPUT: AtomicBool = AtomicBool::new(false);

/// Request a cooperative shutdown (idempotent, signal-safe).
#[inline]
pub fn request() {
    SHUTDOWN.store(true, Ordering::Relaxed);
}

/// Check whether a shutdown has been requested.
#[inline]
pub fn is_requested() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}

/// `Err(Interrupted)` once a shutdown was requested.
#[inline]
pub fn check() -> Result<(), MediaDirError> {
    if is_requested() {
        Err(MediaDirError::Interrupted)
    } else {
        Ok(())
    }
}

/// Clear the flag. Tests use this to isolate runs from each other.
#[inline]
pub fn reset() {
    SHUTDOWN.store(false, Ordering::Relaxed);
}

/// Marks a blocking read of user input until dropped.
#[must_use = "the mark is cleared when the guard is dropped"]
#[derive(Debug)]
pub struct InputWait(());

impl Drop for InputWait {
    fn drop(&mut self) {
        AWAITING_INPUT.store(false, Ordering::Relaxed);
    }
}

/// Mark the caller as blocked on user input for the lifetime of the guard.
pub fn awaiting_input() -> InputWait {
    AWAITING_INPUT.store(true, Ordering::Relaxed);
    InputWait(())
}

/// True while an [`InputWait`] guard is alive.
#[inline]
pub fn is_awaiting_input() -> bool {
    AWAITING_INPUT.load(Ordering::Relaxed)
}
