//! Known deviations of the unchecked handle.
//!
//! `UncheckedHandle` tracks no state, so it accepts every operation. These
//! tests pin down exactly which parts of the lifecycle contract that breaks,
//! by running it beside `TrackedHandle` and through the contract suite.

use filehandle::{HandleError, HandleState, Operation, Payload, TrackedHandle};
use filehandle_testing::contract::{
    test_close_clears_payload, test_close_fresh_handle_is_refused, test_double_close_is_refused,
    test_fresh_handle_has_no_data, test_full_lifecycle, test_get_data_before_read_is_refused,
    test_read_before_open_is_refused, test_refused_operation_changes_nothing, ContractTestResult,
};
use filehandle_testing::strategies::{arb_operations, arb_permitted_operations};
use filehandle_testing::{deviations, run_scenario, Step, UncheckedHandle};
use proptest::prelude::*;

/// Scenario: the full sequence with the open left out.
#[test]
fn skipping_open_still_returns_sentinel_from_unchecked_handle() {
    // Given: The lifecycle without its open step
    let operations = [Operation::Read, Operation::GetData, Operation::Close];

    // When: Both handles run it
    let tracked = run_scenario::<TrackedHandle>(&operations);
    let unchecked = run_scenario::<UncheckedHandle>(&operations);

    // Then: The tracked handle refuses every step
    assert_eq!(
        tracked,
        vec![
            Step {
                operation: Operation::Read,
                outcome: Err(HandleError::InvalidTransition {
                    operation: Operation::Read,
                    state: HandleState::Closed,
                }),
            },
            Step {
                operation: Operation::GetData,
                outcome: Err(HandleError::InvalidTransition {
                    operation: Operation::GetData,
                    state: HandleState::Closed,
                }),
            },
            Step {
                operation: Operation::Close,
                outcome: Err(HandleError::AlreadyClosed),
            },
        ]
    );

    // And: The unchecked handle "succeeds" and hands out 42 anyway
    let outcomes: Vec<_> = unchecked.into_iter().map(|step| step.outcome).collect();
    assert_eq!(
        outcomes,
        vec![
            Ok(Some(Payload::sentinel())),
            Ok(Some(Payload::sentinel())),
            Ok(None),
        ]
    );
}

#[test]
fn full_sequence_shows_no_deviation() {
    let operations = Operation::ALL;
    assert!(deviations::<TrackedHandle, UncheckedHandle>(&operations).is_empty());
}

#[test]
fn double_close_deviates_only_on_second_close() {
    let operations = [Operation::Open, Operation::Close, Operation::Close];
    let found = deviations::<TrackedHandle, UncheckedHandle>(&operations);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].index, 2);
    assert_eq!(found[0].expected, Err(HandleError::AlreadyClosed));
    assert_eq!(found[0].actual, Ok(None));
}

#[test]
fn unchecked_handle_passes_only_the_happy_path_contract() {
    test_full_lifecycle::<UncheckedHandle>().expect("happy path holds without checks");

    let broken: [(&str, fn() -> ContractTestResult); 7] = [
        (
            "fresh_handle_has_no_data",
            test_fresh_handle_has_no_data::<UncheckedHandle>,
        ),
        (
            "read_before_open_is_refused",
            test_read_before_open_is_refused::<UncheckedHandle>,
        ),
        (
            "get_data_before_read_is_refused",
            test_get_data_before_read_is_refused::<UncheckedHandle>,
        ),
        (
            "close_clears_payload",
            test_close_clears_payload::<UncheckedHandle>,
        ),
        (
            "close_fresh_handle_is_refused",
            test_close_fresh_handle_is_refused::<UncheckedHandle>,
        ),
        (
            "double_close_is_refused",
            test_double_close_is_refused::<UncheckedHandle>,
        ),
        (
            "refused_operation_changes_nothing",
            test_refused_operation_changes_nothing::<UncheckedHandle>,
        ),
    ];

    for (scenario, contract) in broken {
        let failure = contract().expect_err(scenario);
        assert_eq!(failure.scenario(), scenario);
    }
}

proptest! {
    #[test]
    fn unchecked_handle_deviates_exactly_where_tracked_handle_refuses(
        operations in arb_operations(48)
    ) {
        let refused: Vec<usize> = run_scenario::<TrackedHandle>(&operations)
            .iter()
            .enumerate()
            .filter(|(_, step)| step.outcome.is_err())
            .map(|(index, _)| index)
            .collect();

        let deviating: Vec<usize> = deviations::<TrackedHandle, UncheckedHandle>(&operations)
            .iter()
            .map(|deviation| deviation.index)
            .collect();

        prop_assert_eq!(deviating, refused);
    }

    #[test]
    fn permitted_sequences_never_deviate(operations in arb_permitted_operations(48)) {
        prop_assert!(deviations::<TrackedHandle, UncheckedHandle>(&operations).is_empty());
    }
}
