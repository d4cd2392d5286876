//! Errors for buffer construction and cancelled operations.
//!
//! A full buffer and an empty buffer are not errors for the blocking
//! calls; they block. The only failures here are a rejected capacity at
//! construction time and cancellation observed while an operation was
//! waiting (or probing, for the `try_` forms).

use std::fmt;

use thiserror::Error;

/// Rejected capacity at construction time. A buffer must be able to hold
/// at least one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("buffer capacity must be at least 1")]
pub struct InvalidCapacity;

/// A blocking `put` was cancelled while waiting for space.
///
/// The buffer was not mutated; the undelivered item is handed back.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PutError<T>(pub T);

impl<T> PutError<T> {
    /// Recovers the item that was never inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for PutError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PutError(..)")
    }
}

impl<T> fmt::Display for PutError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("putting into a cancelled buffer")
    }
}

impl<T> std::error::Error for PutError<T> {}

/// A blocking `take` was cancelled and the buffer had fully drained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("taking from a cancelled, drained buffer")]
pub struct TakeError;

/// Why a `try_put` did not insert. The item comes back in either case.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum TryPutError<T> {
    /// The buffer was at capacity.
    Full(T),
    /// The buffer was cancelled; no further items are accepted.
    Cancelled(T),
}

impl<T> TryPutError<T> {
    /// Recovers the item that was never inserted.
    pub fn into_inner(self) -> T {
        match self {
            TryPutError::Full(item) | TryPutError::Cancelled(item) => item,
        }
    }
}

impl<T> fmt::Debug for TryPutError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TryPutError::Full(_) => f.write_str("Full(..)"),
            TryPutError::Cancelled(_) => f.write_str("Cancelled(..)"),
        }
    }
}

impl<T> fmt::Display for TryPutError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TryPutError::Full(_) => f.write_str("putting into a full buffer"),
            TryPutError::Cancelled(_) => f.write_str("putting into a cancelled buffer"),
        }
    }
}

impl<T> std::error::Error for TryPutError<T> {}

/// Why a `try_take` returned no item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TryTakeError {
    /// The buffer was empty but still live.
    #[error("taking from an empty buffer")]
    Empty,
    /// The buffer was cancelled and has drained.
    #[error("taking from a cancelled, drained buffer")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_error_hands_the_item_back() {
        let err = PutError("undelivered");
        assert_eq!(err.into_inner(), "undelivered");
    }

    #[test]
    fn try_put_error_hands_the_item_back() {
        assert_eq!(TryPutError::Full(7).into_inner(), 7);
        assert_eq!(TryPutError::Cancelled(8).into_inner(), 8);
    }

    #[test]
    fn display_messages_name_the_condition() {
        assert_eq!(InvalidCapacity.to_string(), "buffer capacity must be at least 1");
        assert_eq!(PutError(1).to_string(), "putting into a cancelled buffer");
        assert_eq!(TryTakeError::Empty.to_string(), "taking from an empty buffer");
    }
}
