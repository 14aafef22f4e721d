//! Lifecycle contract for [`HandleLifecycle`] implementations.
//!
//! Each `test_*` function runs one scenario against a fresh handle and
//! returns a [`ContractTestFailure`] naming the scenario and the first broken
//! expectation. [`handle_contract_tests!`](crate::handle_contract_tests)
//! generates one `#[test]` per scenario for a given handle type; new
//! scenarios added here are picked up by every invocation.

use std::fmt;

use filehandle::{HandleError, HandleLifecycle, HandleState, Operation, Payload};

use crate::scenario::Outcome;

/// A broken contract expectation.
#[derive(Debug)]
pub struct ContractTestFailure {
    scenario: &'static str,
    detail: String,
}

impl ContractTestFailure {
    fn new(scenario: &'static str, detail: impl Into<String>) -> Self {
        Self {
            scenario,
            detail: detail.into(),
        }
    }

    /// The scenario that failed.
    pub const fn scenario(&self) -> &'static str {
        self.scenario
    }
}

impl fmt::Display for ContractTestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.scenario, self.detail)
    }
}

impl std::error::Error for ContractTestFailure {}

/// Result of one contract scenario.
pub type ContractTestResult = Result<(), ContractTestFailure>;

fn expect_outcome(
    scenario: &'static str,
    operation: Operation,
    actual: Outcome,
    expected: Outcome,
) -> ContractTestResult {
    if actual == expected {
        return Ok(());
    }

    Err(ContractTestFailure::new(
        scenario,
        format!("{operation} returned {actual:?}, expected {expected:?}"),
    ))
}

fn refused(operation: Operation, state: HandleState) -> Outcome {
    Err(HandleError::InvalidTransition { operation, state })
}

/// Create, open, read, get data, close: every step succeeds and the data is
/// the sentinel.
pub fn test_full_lifecycle<H: HandleLifecycle>() -> ContractTestResult {
    const SCENARIO: &str = "full_lifecycle";

    let mut handle = H::create();
    let sentinel = Some(Payload::sentinel());

    expect_outcome(SCENARIO, Operation::Open, handle.apply(Operation::Open), Ok(None))?;
    expect_outcome(SCENARIO, Operation::Read, handle.apply(Operation::Read), Ok(sentinel))?;
    expect_outcome(
        SCENARIO,
        Operation::GetData,
        handle.apply(Operation::GetData),
        Ok(sentinel),
    )?;
    expect_outcome(SCENARIO, Operation::Close, handle.apply(Operation::Close), Ok(None))?;

    handle.release();
    Ok(())
}

/// A fresh handle exposes no data.
pub fn test_fresh_handle_has_no_data<H: HandleLifecycle>() -> ContractTestResult {
    const SCENARIO: &str = "fresh_handle_has_no_data";

    let handle = H::create();
    expect_outcome(
        SCENARIO,
        Operation::GetData,
        handle.get_data().map(Some),
        refused(Operation::GetData, HandleState::Closed),
    )
}

/// Reading an unopened handle is refused and leaves it closed.
pub fn test_read_before_open_is_refused<H: HandleLifecycle>() -> ContractTestResult {
    const SCENARIO: &str = "read_before_open_is_refused";

    let mut handle = H::create();
    expect_outcome(
        SCENARIO,
        Operation::Read,
        handle.apply(Operation::Read),
        refused(Operation::Read, HandleState::Closed),
    )?;

    // Still closed: the refused read filled nothing in
    expect_outcome(
        SCENARIO,
        Operation::GetData,
        handle.apply(Operation::GetData),
        refused(Operation::GetData, HandleState::Closed),
    )?;
    expect_outcome(
        SCENARIO,
        Operation::Close,
        handle.apply(Operation::Close),
        Err(HandleError::AlreadyClosed),
    )
}

/// Asking an open but unread handle for data is refused.
pub fn test_get_data_before_read_is_refused<H: HandleLifecycle>() -> ContractTestResult {
    const SCENARIO: &str = "get_data_before_read_is_refused";

    let mut handle = H::create();
    expect_outcome(SCENARIO, Operation::Open, handle.apply(Operation::Open), Ok(None))?;
    expect_outcome(
        SCENARIO,
        Operation::GetData,
        handle.apply(Operation::GetData),
        refused(Operation::GetData, HandleState::Open),
    )
}

/// Closing clears the payload: the stored data is back to empty, and a
/// reopened handle has nothing to give until it is read again.
pub fn test_close_clears_payload<H: HandleLifecycle>() -> ContractTestResult {
    const SCENARIO: &str = "close_clears_payload";

    let mut handle = H::create();
    for operation in [Operation::Open, Operation::Read, Operation::Close] {
        let outcome = handle.apply(operation);
        if outcome.is_err() {
            return Err(ContractTestFailure::new(
                SCENARIO,
                format!("setup step {operation} failed with {outcome:?}"),
            ));
        }
    }

    let stored = handle.stored_payload();
    if !stored.is_empty() {
        return Err(ContractTestFailure::new(
            SCENARIO,
            format!("payload {stored} still stored after close"),
        ));
    }

    expect_outcome(
        SCENARIO,
        Operation::GetData,
        handle.apply(Operation::GetData),
        refused(Operation::GetData, HandleState::Closed),
    )?;
    expect_outcome(SCENARIO, Operation::Open, handle.apply(Operation::Open), Ok(None))?;
    expect_outcome(
        SCENARIO,
        Operation::GetData,
        handle.apply(Operation::GetData),
        refused(Operation::GetData, HandleState::Open),
    )
}

/// Closing a fresh handle reports `AlreadyClosed`.
pub fn test_close_fresh_handle_is_refused<H: HandleLifecycle>() -> ContractTestResult {
    const SCENARIO: &str = "close_fresh_handle_is_refused";

    let mut handle = H::create();
    expect_outcome(
        SCENARIO,
        Operation::Close,
        handle.apply(Operation::Close),
        Err(HandleError::AlreadyClosed),
    )
}

/// The second of two closes reports `AlreadyClosed`.
pub fn test_double_close_is_refused<H: HandleLifecycle>() -> ContractTestResult {
    const SCENARIO: &str = "double_close_is_refused";

    let mut handle = H::create();
    expect_outcome(SCENARIO, Operation::Open, handle.apply(Operation::Open), Ok(None))?;
    expect_outcome(SCENARIO, Operation::Close, handle.apply(Operation::Close), Ok(None))?;
    expect_outcome(
        SCENARIO,
        Operation::Close,
        handle.apply(Operation::Close),
        Err(HandleError::AlreadyClosed),
    )
}

/// A refused operation on a readable handle leaves its data in place.
pub fn test_refused_operation_changes_nothing<H: HandleLifecycle>() -> ContractTestResult {
    const SCENARIO: &str = "refused_operation_changes_nothing";

    let mut handle = H::create();
    expect_outcome(SCENARIO, Operation::Open, handle.apply(Operation::Open), Ok(None))?;
    expect_outcome(
        SCENARIO,
        Operation::Read,
        handle.apply(Operation::Read),
        Ok(Some(Payload::sentinel())),
    )?;
    expect_outcome(
        SCENARIO,
        Operation::Open,
        handle.apply(Operation::Open),
        refused(Operation::Open, HandleState::Readable),
    )?;
    expect_outcome(
        SCENARIO,
        Operation::GetData,
        handle.apply(Operation::GetData),
        Ok(Some(Payload::sentinel())),
    )
}

/// Generate the lifecycle contract suite for a handle type.
///
/// ```rust,ignore
/// filehandle_testing::contract::handle_contract_tests! {
///     suite = tracked,
///     handle = filehandle::TrackedHandle,
/// }
/// ```
#[macro_export]
macro_rules! handle_contract_tests {
    (suite = $suite:ident, handle = $handle:ty $(,)?) => {
        mod $suite {
            use $crate::contract::{
                test_close_clears_payload, test_close_fresh_handle_is_refused,
                test_double_close_is_refused, test_fresh_handle_has_no_data,
                test_full_lifecycle, test_get_data_before_read_is_refused,
                test_read_before_open_is_refused, test_refused_operation_changes_nothing,
            };

            #[test]
            fn full_lifecycle_contract() {
                test_full_lifecycle::<$handle>().expect("handle contract failed");
            }

            #[test]
            fn fresh_handle_has_no_data_contract() {
                test_fresh_handle_has_no_data::<$handle>().expect("handle contract failed");
            }

            #[test]
            fn read_before_open_is_refused_contract() {
                test_read_before_open_is_refused::<$handle>().expect("handle contract failed");
            }

            #[test]
            fn get_data_before_read_is_refused_contract() {
                test_get_data_before_read_is_refused::<$handle>()
                    .expect("handle contract failed");
            }

            #[test]
            fn close_clears_payload_contract() {
                test_close_clears_payload::<$handle>().expect("handle contract failed");
            }

            #[test]
            fn close_fresh_handle_is_refused_contract() {
                test_close_fresh_handle_is_refused::<$handle>().expect("handle contract failed");
            }

            #[test]
            fn double_close_is_refused_contract() {
                test_double_close_is_refused::<$handle>().expect("handle contract failed");
            }

            #[test]
            fn refused_operation_changes_nothing_contract() {
                test_refused_operation_changes_nothing::<$handle>()
                    .expect("handle contract failed");
            }
        }
    };
}

pub use handle_contract_tests;
