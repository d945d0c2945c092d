//! Error types for pool and list operations.
//!
//! Every condition is reported synchronously at the offending call, and
//! validation happens before any mutation is applied — a failed call
//! leaves the pool and every list exactly as they were. Nothing here is
//! fatal; retry after correcting the input is always the caller's option.

use std::error::Error;
use std::fmt;

/// Errors from list and pool operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListError {
    /// An index or position argument outside its documented valid range.
    ///
    /// Signalled by positional operations: bidirectional indexing accepts
    /// `[-len, len - 1]`, insertion accepts `[0, len]`, removal accepts
    /// `[0, len - 1]`.
    IndexOutOfBounds {
        /// The offending index as passed by the caller.
        index: i64,
        /// The list length at the time of the call.
        len: u32,
    },
    /// A search key that matched no element after a full scan.
    KeyNotFound,
    /// A cursor-relative operation was invoked with no cursor set.
    ///
    /// The cursor is unset on a fresh list, after `clear`, and after the
    /// element under it is removed.
    NoCursor,
    /// `first()` or `last()` was invoked on an empty list.
    EmptyList,
    /// The pool was full and the growth formula failed to produce a
    /// strictly larger capacity.
    ///
    /// This covers a multiplier ≤ 1 with a zero additive as well as any
    /// overflowing or non-finite result of the capacity computation.
    PoolExhausted {
        /// Pool capacity at the time of the failed growth attempt.
        capacity: u32,
    },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for list of length {len}")
            }
            Self::KeyNotFound => write!(f, "key not found"),
            Self::NoCursor => write!(f, "no cursor is set"),
            Self::EmptyList => write!(f, "list is empty"),
            Self::PoolExhausted { capacity } => {
                write!(
                    f,
                    "pool exhausted: growth from capacity {capacity} did not increase it"
                )
            }
        }
    }
}

impl Error for ListError {}
