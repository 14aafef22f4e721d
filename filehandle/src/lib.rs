//! `filehandle` - a resource handle with an enforced open/read/close lifecycle
//!
//! A handle starts closed, is opened, is read (which fills its payload with a
//! fixed sentinel), may have its data inspected, and is closed again. Every
//! operation has exactly one state it is allowed from, and nothing may be
//! skipped or reordered.
//!
//! The crate offers two handles that obey the same table:
//!
//! - [`FileHandle`] encodes the state in its type. Out-of-order calls and any
//!   use after release do not compile, and the state marker costs no space.
//! - [`TrackedHandle`] stores the state at runtime and answers out-of-order
//!   calls with a [`HandleError`], leaving itself untouched.
//!
//! ```rust
//! use filehandle::{FileHandle, TrackedHandle, HandleError};
//!
//! // Checked by the compiler
//! let handle = FileHandle::new().open().read();
//! let data = handle.get_data();
//! handle.close().release();
//! assert_eq!(data.into_inner(), 42);
//!
//! // Checked at runtime
//! let mut handle = TrackedHandle::new();
//! assert!(handle.read().is_err());
//! handle.open()?;
//! handle.read()?;
//! assert_eq!(handle.get_data()?.into_inner(), 42);
//! # Ok::<(), HandleError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod errors;
pub mod handle;
pub mod lifecycle;
pub mod tracked;
pub mod types;

pub use errors::{HandleError, HandleResult};
pub use handle::{read_once, states, Closable, FileHandle, LifecycleState};
pub use lifecycle::HandleLifecycle;
pub use tracked::TrackedHandle;
pub use types::{HandleState, Operation, Payload, READ_SENTINEL};
