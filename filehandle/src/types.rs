//! Shared vocabulary for both handle forms.
//!
//! [`HandleState`] and [`Operation`] name the lifecycle stages and the
//! transitions between them; [`HandleState::transition`] is the one place the
//! transition table is written down. [`Payload`] is the value a handle
//! carries once it has been read.

use std::fmt;

use nutype::nutype;

use crate::errors::{HandleError, HandleResult};

/// Value written into a handle by a successful read.
pub const READ_SENTINEL: i32 = 42;

/// Data carried by a handle.
///
/// Zero until the handle is read, [`READ_SENTINEL`] while it is readable,
/// and zero again once it is closed.
#[nutype(
    default = 0,
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Into, From)
)]
pub struct Payload(i32);

impl Payload {
    /// The payload produced by a read.
    pub fn sentinel() -> Self {
        Self::new(READ_SENTINEL)
    }

    /// Whether this is the empty payload of an unread or closed handle.
    pub fn is_empty(self) -> bool {
        self == Self::default()
    }
}

/// Lifecycle stage of a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HandleState {
    /// Not open. Both the initial and the terminal state.
    #[default]
    Closed,
    /// Opened but not yet read.
    Open,
    /// Read; the payload is available.
    Readable,
}

impl HandleState {
    /// Every state, in lifecycle order.
    pub const ALL: [Self; 3] = [Self::Closed, Self::Open, Self::Readable];

    /// The state reached by applying `operation` in this state.
    ///
    /// `get data` is accepted from `Readable` and leaves the state where it
    /// is. Closing a closed handle is reported as
    /// [`HandleError::AlreadyClosed`]; every other refusal is
    /// [`HandleError::InvalidTransition`].
    pub const fn transition(self, operation: Operation) -> HandleResult<Self> {
        match (self, operation) {
            (Self::Closed, Operation::Open) => Ok(Self::Open),
            (Self::Open, Operation::Read) => Ok(Self::Readable),
            (Self::Readable, Operation::GetData) => Ok(Self::Readable),
            (Self::Open | Self::Readable, Operation::Close) => Ok(Self::Closed),
            (Self::Closed, Operation::Close) => Err(HandleError::AlreadyClosed),
            (state, operation) => Err(HandleError::InvalidTransition { operation, state }),
        }
    }

    /// Whether `operation` is allowed in this state.
    pub const fn permits(self, operation: Operation) -> bool {
        self.transition(operation).is_ok()
    }
}

impl fmt::Display for HandleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Closed => "closed",
            Self::Open => "open",
            Self::Readable => "readable",
        };
        f.write_str(name)
    }
}

/// A state-changing operation on a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Closed to Open.
    Open,
    /// Open to Readable, filling the payload.
    Read,
    /// Inspect the payload of a Readable handle.
    GetData,
    /// Open or Readable to Closed, clearing the payload.
    Close,
}

impl Operation {
    /// Every operation, in lifecycle order.
    pub const ALL: [Self; 4] = [Self::Open, Self::Read, Self::GetData, Self::Close];
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Open => "open",
            Self::Read => "read",
            Self::GetData => "get data",
            Self::Close => "close",
        };
        f.write_str(name)
    }
}
