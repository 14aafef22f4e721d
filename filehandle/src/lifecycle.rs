//! The operation set every handle implementation answers to.
//!
//! [`HandleLifecycle`] is the seam between a handle and code that drives it
//! without knowing which implementation it has: scenario runners, contract
//! suites, benchmarks. [`TrackedHandle`](crate::TrackedHandle) implements it
//! with full state checking.
//!
//! The typestate [`FileHandle`](crate::FileHandle) does not implement it.
//! Its operations change its type, which a single trait object cannot
//! express. Erase it into a `TrackedHandle` first when runtime dispatch is
//! needed.

use crate::errors::HandleResult;
use crate::types::{Operation, Payload};

/// A handle driven through open, read, get data and close by method calls.
///
/// Implementations are expected to follow the transition table of
/// [`HandleState::transition`](crate::HandleState::transition) and leave the
/// handle untouched whenever they return an error.
pub trait HandleLifecycle {
    /// Create a closed handle with an empty payload.
    fn create() -> Self
    where
        Self: Sized;

    /// Move from closed to open.
    fn open(&mut self) -> HandleResult<()>;

    /// Move from open to readable and return the data read.
    fn read(&mut self) -> HandleResult<Payload>;

    /// The data of a readable handle.
    fn get_data(&self) -> HandleResult<Payload>;

    /// The payload as stored, whatever the state.
    ///
    /// Bypasses the state check of [`get_data`](Self::get_data). Contract
    /// suites use it to see that the payload is empty outside readable.
    #[doc(hidden)]
    fn stored_payload(&self) -> Payload;

    /// Move back to closed and clear the payload.
    fn close(&mut self) -> HandleResult<()>;

    /// Destroy the handle.
    fn release(self)
    where
        Self: Sized,
    {
        drop(self);
    }

    /// Perform `operation`, returning the payload for reads and data access.
    fn apply(&mut self, operation: Operation) -> HandleResult<Option<Payload>> {
        match operation {
            Operation::Open => self.open().map(|()| None),
            Operation::Read => self.read().map(Some),
            Operation::GetData => self.get_data().map(Some),
            Operation::Close => self.close().map(|()| None),
        }
    }
}
