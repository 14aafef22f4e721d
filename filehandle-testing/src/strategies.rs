//! Proptest strategies for handle operations.

use filehandle::{HandleState, Operation};
use proptest::prelude::*;

/// Generates any single operation.
pub fn arb_operation() -> impl Strategy<Value = Operation> {
    prop::sample::select(Operation::ALL.to_vec())
}

/// Generates operation sequences of up to `max_len` steps, in any order.
pub fn arb_operations(max_len: usize) -> impl Strategy<Value = Vec<Operation>> {
    prop::collection::vec(arb_operation(), 0..=max_len)
}

/// Generates sequences of up to `max_len` steps that a correct handle accepts
/// in full, starting from a fresh handle.
///
/// Each step is drawn from the operations the current state permits.
pub fn arb_permitted_operations(max_len: usize) -> impl Strategy<Value = Vec<Operation>> {
    prop::collection::vec(any::<prop::sample::Index>(), 0..=max_len).prop_map(|choices| {
        let mut state = HandleState::Closed;
        choices
            .into_iter()
            .filter_map(|choice| {
                let permitted: Vec<Operation> = Operation::ALL
                    .into_iter()
                    .filter(|operation| state.permits(*operation))
                    .collect();
                let operation = *choice.get(&permitted);
                state = state.transition(operation).ok()?;
                Some(operation)
            })
            .collect()
    })
}
