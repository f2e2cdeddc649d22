//! Cloneable handle for feeding one sequence from several capture threads.
//!
//! Every call takes the lock for its whole duration, so the
//! check-then-fill-then-count step of absorption is a single critical
//! section.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{AbsorbStatus, Sequence, SequenceError};
use crate::frame::Frame;

/// Thread-safe wrapper around a [`Sequence`].
///
/// # Mutex poisoning
///
/// A poisoned lock is recovered rather than propagated; the guarded
/// sequence is still read and written as-is.
#[derive(Clone, Debug, Default)]
pub struct SharedSequence {
    inner: Arc<Mutex<Sequence>>,
}

impl SharedSequence {
    /// Create a handle around an empty sequence.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    fn lock(&self) -> MutexGuard<'_, Sequence> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Absorb one frame under the lock.
    ///
    /// # Errors
    ///
    /// See [`Sequence::absorb`].
    pub fn absorb(&self, frame: Frame) -> Result<AbsorbStatus, SequenceError> {
        self.lock().absorb(frame)
    }

    /// Decode and absorb raw frame bytes under the lock.
    ///
    /// # Errors
    ///
    /// See [`Sequence::absorb_bytes`].
    pub fn absorb_bytes(&self, bytes: &[u8]) -> Result<AbsorbStatus, SequenceError> {
        self.lock().absorb_bytes(bytes)
    }

    /// Fraction of slots filled.
    #[must_use]
    pub fn progress(&self) -> f32 { self.lock().progress() }

    /// Report whether every slot is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool { self.lock().is_complete() }

    /// Reconstruct the payload of a complete sequence.
    ///
    /// # Errors
    ///
    /// See [`Sequence::reconstruct`].
    pub fn reconstruct(&self) -> Result<Vec<u8>, SequenceError> { self.lock().reconstruct() }

    /// Run `f` with exclusive access to the underlying sequence.
    pub fn with<R>(&self, f: impl FnOnce(&mut Sequence) -> R) -> R { f(&mut *self.lock()) }
}

impl From<Sequence> for SharedSequence {
    fn from(sequence: Sequence) -> Self {
        Self {
            inner: Arc::new(Mutex::new(sequence)),
        }
    }
}
