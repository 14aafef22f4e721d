//! Handle lifecycle enforced through the type system.
//!
//! A [`FileHandle`] carries its lifecycle stage as a phantom type parameter.
//! Each stage exposes only the operations valid for it, and every transition
//! consumes the handle and returns it in its next stage. Calling an operation
//! out of order is therefore a compile error rather than a runtime one, and a
//! stale or released handle cannot be touched again.
//!
//! ```rust
//! use filehandle::FileHandle;
//!
//! let handle = FileHandle::new().open().read();
//! assert_eq!(handle.get_data().into_inner(), 42);
//! handle.close().release();
//! ```
//!
//! Reading a handle that was never opened does not compile:
//!
//! ```compile_fail
//! use filehandle::FileHandle;
//!
//! let handle = FileHandle::new();
//! let _ = handle.read();
//! ```
//!
//! Neither does asking for data before the read:
//!
//! ```compile_fail
//! use filehandle::FileHandle;
//!
//! let handle = FileHandle::new().open();
//! let _ = handle.get_data();
//! ```
//!
//! Closing twice:
//!
//! ```compile_fail
//! use filehandle::FileHandle;
//!
//! let handle = FileHandle::new().open().close();
//! let _ = handle.close();
//! ```
//!
//! Using a handle after release:
//!
//! ```compile_fail
//! use filehandle::FileHandle;
//!
//! let handle = FileHandle::new().open().read();
//! handle.release();
//! let _ = handle.get_data();
//! ```
//!
//! Or reusing the handle a transition consumed:
//!
//! ```compile_fail
//! use filehandle::FileHandle;
//!
//! let closed = FileHandle::new();
//! let _open = closed.open();
//! let _again = closed.open();
//! ```

use std::marker::PhantomData;

use crate::types::{HandleState, Payload};

/// Phantom type markers for handle states
pub mod states {
    /// Handle is not open
    #[derive(Debug)]
    pub struct Closed;

    /// Handle is open and can be read
    #[derive(Debug)]
    pub struct Open;

    /// Handle has been read and its data can be inspected
    #[derive(Debug)]
    pub struct Readable;
}

/// A type-level handle state.
///
/// Sealed: the three markers in [`states`] are the only implementations.
pub trait LifecycleState: private::Sealed {
    /// The runtime name of this state.
    const STATE: HandleState;
}

impl LifecycleState for states::Closed {
    const STATE: HandleState = HandleState::Closed;
}

impl LifecycleState for states::Open {
    const STATE: HandleState = HandleState::Open;
}

impl LifecycleState for states::Readable {
    const STATE: HandleState = HandleState::Readable;
}

/// States from which a handle may be closed.
///
/// Implemented for `Open` and `Readable`. A closed handle has no `close`.
pub trait Closable: LifecycleState {}

impl Closable for states::Open {}
impl Closable for states::Readable {}

// Sealed trait pattern to prevent external implementations
mod private {
    pub trait Sealed {}

    impl Sealed for super::states::Closed {}
    impl Sealed for super::states::Open {}
    impl Sealed for super::states::Readable {}
}

/// A resource handle whose lifecycle stage is part of its type.
///
/// # Type Parameters
/// * `S` - The current state of the handle (phantom type)
///
/// The state marker is zero-sized, so a handle in any state is exactly as
/// large as its [`Payload`].
#[derive(Debug)]
#[repr(transparent)]
#[must_use = "dropping a handle releases it"]
pub struct FileHandle<S> {
    data: Payload,
    _state: PhantomData<S>,
}

impl<S> FileHandle<S> {
    const fn with_data(data: Payload) -> Self {
        Self {
            data,
            _state: PhantomData,
        }
    }
}

impl<S: LifecycleState> FileHandle<S> {
    /// The state this handle is in.
    pub const fn state(&self) -> HandleState {
        S::STATE
    }

    /// Release the handle.
    ///
    /// The handle is consumed, so nothing can use it afterwards. Letting a
    /// handle go out of scope has the same effect.
    pub fn release(self) {
        let Self { data, .. } = self;
        debug_assert!(S::STATE == HandleState::Readable || data.is_empty());
    }

    /// Split the handle into its runtime state and payload.
    pub(crate) fn into_parts(self) -> (HandleState, Payload) {
        (S::STATE, self.data)
    }
}

impl FileHandle<states::Closed> {
    /// Create a closed handle with an empty payload.
    pub fn new() -> Self {
        Self::with_data(Payload::default())
    }

    /// Open the handle.
    pub const fn open(self) -> FileHandle<states::Open> {
        FileHandle::with_data(self.data)
    }
}

impl Default for FileHandle<states::Closed> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileHandle<states::Open> {
    /// Read from the handle, filling its payload with [`Payload::sentinel`].
    pub fn read(self) -> FileHandle<states::Readable> {
        FileHandle::with_data(Payload::sentinel())
    }
}

impl FileHandle<states::Readable> {
    /// The data produced by the read.
    pub const fn get_data(&self) -> Payload {
        self.data
    }
}

impl<S: Closable> FileHandle<S> {
    /// Close the handle, clearing its payload.
    ///
    /// The closed handle can be opened again.
    pub fn close(self) -> FileHandle<states::Closed> {
        FileHandle::new()
    }
}

/// Run a handle through its whole lifecycle and return what it read.
///
/// Create, open, read, take the data, close, release.
pub fn read_once() -> Payload {
    let handle = FileHandle::new().open().read();
    let data = handle.get_data();
    handle.close().release();
    data
}
