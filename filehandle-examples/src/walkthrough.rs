use filehandle::{FileHandle, HandleError, HandleState, Operation, Payload, TrackedHandle};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Errors from the walkthrough.
#[derive(Debug, Error)]
pub enum WalkthroughError {
    /// A lifecycle step that should have succeeded was refused.
    #[error("{operation} step failed")]
    Step {
        /// The step that failed.
        operation: Operation,
        /// Why the handle refused it.
        #[source]
        source: HandleError,
    },

    /// The handle accepted a second close.
    #[error("second close was accepted")]
    DoubleCloseAccepted,
}

trait StepContext<T> {
    fn step(self, operation: Operation) -> Result<T, WalkthroughError>;
}

impl<T> StepContext<T> for Result<T, HandleError> {
    fn step(self, operation: Operation) -> Result<T, WalkthroughError> {
        self.map_err(|source| WalkthroughError::Step { operation, source })
    }
}

/// What the runtime-checked walkthrough observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedReport {
    /// The payload returned by `get data`.
    pub data: Payload,
    /// The error returned by the second close.
    pub double_close: HandleError,
}

/// Install a fmt subscriber filtered by `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)
}

/// Run the typestate handle through its lifecycle and return its data.
pub fn typed_walkthrough() -> Payload {
    let handle = FileHandle::new();
    info!(state = %handle.state(), "created typestate handle");

    let handle = handle.open().read();
    let data = handle.get_data();
    info!(state = %handle.state(), %data, "read typestate handle");

    let handle = handle.close();
    info!(state = %handle.state(), "closed typestate handle");
    handle.release();

    data
}

/// Run the runtime-checked handle through its lifecycle, then close it a
/// second time to show the refusal.
pub fn tracked_walkthrough() -> Result<TrackedReport, WalkthroughError> {
    let mut handle = TrackedHandle::new();

    handle.open().step(Operation::Open)?;
    handle.read().step(Operation::Read)?;
    let data = handle.get_data().step(Operation::GetData)?;
    handle.close().step(Operation::Close)?;
    debug_assert_eq!(handle.state(), HandleState::Closed);

    let double_close = match handle.close() {
        Ok(()) => return Err(WalkthroughError::DoubleCloseAccepted),
        Err(error) => error,
    };
    info!(%data, %double_close, "tracked handle walkthrough finished");

    handle.release();
    Ok(TrackedReport { data, double_close })
}
