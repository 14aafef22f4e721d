//! Error types for handle transitions.
//!
//! Only the runtime-checked [`TrackedHandle`](crate::TrackedHandle) can
//! produce these. The typestate [`FileHandle`](crate::FileHandle) turns the
//! same mistakes into compile errors.
//!
//! Both errors are contract violations by the caller. The handle is left
//! exactly as it was, nothing is retried, and the caller decides what to do.
//!
//! # Example
//!
//! ```rust
//! use filehandle::{HandleError, HandleState, Operation, TrackedHandle};
//!
//! let mut handle = TrackedHandle::new();
//! match handle.read() {
//!     Err(HandleError::InvalidTransition { operation, state }) => {
//!         assert_eq!(operation, Operation::Read);
//!         assert_eq!(state, HandleState::Closed);
//!     }
//!     other => panic!("expected a refused read, got {other:?}"),
//! }
//! ```

use thiserror::Error;

use crate::types::{HandleState, Operation};

/// Result type alias for handle operations.
pub type HandleResult<T> = Result<T, HandleError>;

/// Errors returned when an operation is attempted out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum HandleError {
    /// The operation is not allowed from the handle's current state.
    #[error("{operation} not permitted while handle is {state}")]
    InvalidTransition {
        /// The operation that was refused.
        operation: Operation,
        /// The state the handle was in, and still is.
        state: HandleState,
    },

    /// Close was attempted on a handle that is already closed.
    ///
    /// Reported separately from [`HandleError::InvalidTransition`] so double
    /// closes can be told apart from other ordering mistakes.
    #[error("handle is already closed")]
    AlreadyClosed,
}

impl HandleError {
    /// Check if this is an out-of-order operation other than a double close.
    pub const fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }

    /// Check if this is a double close.
    pub const fn is_already_closed(&self) -> bool {
        matches!(self, Self::AlreadyClosed)
    }

    /// The operation that was refused.
    pub const fn operation(&self) -> Operation {
        match self {
            Self::InvalidTransition { operation, .. } => *operation,
            Self::AlreadyClosed => Operation::Close,
        }
    }

    /// The state the handle was in when the operation was refused.
    pub const fn state(&self) -> HandleState {
        match self {
            Self::InvalidTransition { state, .. } => *state,
            Self::AlreadyClosed => HandleState::Closed,
        }
    }
}
