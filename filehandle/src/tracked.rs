//! Handle lifecycle checked at runtime.
//!
//! [`TrackedHandle`] stores its state as a value and checks every operation
//! against [`HandleState::transition`] before touching anything. Use it where
//! the state cannot be known statically, for instance when a handle is kept
//! in a field and driven by external input. Otherwise prefer
//! [`FileHandle`](crate::FileHandle), which rules the same mistakes out at
//! compile time.

use crate::errors::HandleResult;
use crate::handle::{FileHandle, LifecycleState};
use crate::lifecycle::HandleLifecycle;
use crate::types::{HandleState, Operation, Payload};

/// A handle that carries its state as a runtime tag.
///
/// Refused operations return a [`HandleError`](crate::HandleError) and
/// leave both state and payload as they were.
///
/// # Example
///
/// ```rust
/// use filehandle::{HandleError, TrackedHandle};
///
/// let mut handle = TrackedHandle::new();
/// handle.open()?;
/// assert_eq!(handle.read()?.into_inner(), 42);
/// handle.close()?;
/// assert_eq!(handle.close(), Err(HandleError::AlreadyClosed));
/// handle.release();
/// # Ok::<(), HandleError>(())
/// ```
#[derive(Debug, Default)]
pub struct TrackedHandle {
    state: HandleState,
    data: Payload,
}

impl TrackedHandle {
    /// Create a closed handle with an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// The state this handle is in.
    pub const fn state(&self) -> HandleState {
        self.state
    }

    /// Open the handle.
    pub fn open(&mut self) -> HandleResult<()> {
        let next = self.check(Operation::Open)?;
        self.enter(Operation::Open, next);
        Ok(())
    }

    /// Read from the handle and return the data read.
    pub fn read(&mut self) -> HandleResult<Payload> {
        let next = self.check(Operation::Read)?;
        self.data = Payload::sentinel();
        self.enter(Operation::Read, next);
        Ok(self.data)
    }

    /// The data of a readable handle.
    pub fn get_data(&self) -> HandleResult<Payload> {
        self.check(Operation::GetData)?;
        Ok(self.data)
    }

    /// Close the handle, clearing its payload.
    pub fn close(&mut self) -> HandleResult<()> {
        let next = self.check(Operation::Close)?;
        self.data = Payload::default();
        self.enter(Operation::Close, next);
        Ok(())
    }

    /// Release the handle.
    ///
    /// Same as dropping it; spelled out for call sites that want the end of
    /// the lifecycle to be visible.
    pub fn release(self) {
        drop(self);
    }

    fn check(&self, operation: Operation) -> HandleResult<HandleState> {
        self.state.transition(operation).map_err(|error| {
            tracing::warn!(%operation, state = %self.state, %error, "rejected handle operation");
            error
        })
    }

    fn enter(&mut self, operation: Operation, next: HandleState) {
        tracing::debug!(%operation, from = %self.state, to = %next, "handle transition");
        self.state = next;
    }
}

impl Drop for TrackedHandle {
    fn drop(&mut self) {
        tracing::debug!(state = %self.state, "handle released");
    }
}

impl<S: LifecycleState> From<FileHandle<S>> for TrackedHandle {
    fn from(handle: FileHandle<S>) -> Self {
        let (state, data) = handle.into_parts();
        Self { state, data }
    }
}

impl HandleLifecycle for TrackedHandle {
    fn create() -> Self {
        Self::new()
    }

    fn open(&mut self) -> HandleResult<()> {
        Self::open(self)
    }

    fn read(&mut self) -> HandleResult<Payload> {
        Self::read(self)
    }

    fn get_data(&self) -> HandleResult<Payload> {
        Self::get_data(self)
    }

    fn stored_payload(&self) -> Payload {
        self.data
    }

    fn close(&mut self) -> HandleResult<()> {
        Self::close(self)
    }

    fn release(self) {
        Self::release(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::HandleError;
    use tracing_test::traced_test;

    fn readable() -> TrackedHandle {
        let mut handle = TrackedHandle::new();
        handle.open().expect("open from closed");
        handle.read().expect("read from open");
        handle
    }

    #[test]
    fn new_handle_is_closed_and_empty() {
        let handle = TrackedHandle::new();
        assert_eq!(handle.state(), HandleState::Closed);
        assert!(handle.data.is_empty());
    }

    #[test]
    fn open_read_get_data_returns_sentinel() {
        let handle = readable();
        assert_eq!(handle.get_data(), Ok(Payload::sentinel()));
        assert_eq!(handle.state(), HandleState::Readable);
    }

    #[test]
    fn read_returns_the_data_it_stored() {
        let mut handle = TrackedHandle::new();
        handle.open().expect("open from closed");
        assert_eq!(handle.read(), Ok(Payload::sentinel()));
    }

    #[test]
    fn read_before_open_is_refused_without_side_effects() {
        let mut handle = TrackedHandle::new();
        let error = handle.read().expect_err("read from closed");

        assert_eq!(
            error,
            HandleError::InvalidTransition {
                operation: Operation::Read,
                state: HandleState::Closed,
            }
        );
        assert_eq!(handle.state(), HandleState::Closed);
        assert!(handle.data.is_empty());
    }

    #[test]
    fn get_data_before_read_is_refused() {
        let mut handle = TrackedHandle::new();
        handle.open().expect("open from closed");

        let error = handle.get_data().expect_err("get data from open");
        assert!(error.is_invalid_transition());
        assert_eq!(handle.state(), HandleState::Open);
    }

    #[test]
    fn open_twice_is_refused() {
        let mut handle = TrackedHandle::new();
        handle.open().expect("open from closed");

        let error = handle.open().expect_err("open from open");
        assert_eq!(error.state(), HandleState::Open);
        assert_eq!(handle.state(), HandleState::Open);
    }

    #[test]
    fn read_twice_keeps_payload() {
        let mut handle = readable();
        let error = handle.read().expect_err("read from readable");

        assert!(error.is_invalid_transition());
        assert_eq!(handle.get_data(), Ok(Payload::sentinel()));
    }

    #[test]
    fn close_resets_payload() {
        let mut handle = readable();
        handle.close().expect("close from readable");

        assert_eq!(handle.state(), HandleState::Closed);
        assert!(handle.data.is_empty());
        assert!(handle.stored_payload().is_empty());
    }

    #[test]
    fn stored_payload_reads_past_the_state_check() {
        let handle = readable();
        assert_eq!(handle.stored_payload(), Payload::sentinel());
        assert!(TrackedHandle::new().stored_payload().is_empty());
    }

    #[test]
    fn double_close_reports_already_closed() {
        let mut handle = readable();
        handle.close().expect("first close");

        assert_eq!(handle.close(), Err(HandleError::AlreadyClosed));
        assert_eq!(handle.state(), HandleState::Closed);
    }

    #[test]
    fn closed_handle_can_be_reopened() {
        let mut handle = readable();
        handle.close().expect("close from readable");
        handle.open().expect("open after close");
        assert_eq!(handle.read(), Ok(Payload::sentinel()));
    }

    #[test]
    fn apply_dispatches_each_operation() {
        let mut handle = TrackedHandle::new();

        assert_eq!(handle.apply(Operation::Open), Ok(None));
        assert_eq!(handle.apply(Operation::Read), Ok(Some(Payload::sentinel())));
        assert_eq!(
            handle.apply(Operation::GetData),
            Ok(Some(Payload::sentinel()))
        );
        assert_eq!(handle.apply(Operation::Close), Ok(None));
        assert_eq!(
            handle.apply(Operation::Close),
            Err(HandleError::AlreadyClosed)
        );
    }

    #[test]
    fn converts_from_typestate_handle_in_any_state() {
        let closed = TrackedHandle::from(FileHandle::new());
        assert_eq!(closed.state(), HandleState::Closed);

        let open = TrackedHandle::from(FileHandle::new().open());
        assert_eq!(open.state(), HandleState::Open);

        let readable = TrackedHandle::from(FileHandle::new().open().read());
        assert_eq!(readable.state(), HandleState::Readable);
        assert_eq!(readable.get_data(), Ok(Payload::sentinel()));
    }

    #[test]
    #[traced_test]
    fn rejected_operation_is_logged() {
        let mut handle = TrackedHandle::new();
        let _ = handle.read();

        assert!(logs_contain("rejected handle operation"));
        assert!(logs_contain("operation=read"));
        assert!(logs_contain("state=closed"));
    }

    #[test]
    #[traced_test]
    fn transitions_and_release_are_logged() {
        let mut handle = TrackedHandle::new();
        handle.open().expect("open from closed");
        handle.release();

        assert!(logs_contain("handle transition"));
        assert!(logs_contain("handle released"));
    }
}
