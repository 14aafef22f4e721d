//! Run operation sequences against handles and compare the results.

use std::fmt;

use filehandle::{HandleLifecycle, HandleResult, Operation, Payload};

/// What a single operation returned.
pub type Outcome = HandleResult<Option<Payload>>;

/// One operation of a scenario and its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// The operation applied.
    pub operation: Operation,
    /// What the handle returned.
    pub outcome: Outcome,
}

/// Apply `operations` in order to a freshly created `H`, then release it.
pub fn run_scenario<H: HandleLifecycle>(operations: &[Operation]) -> Vec<Step> {
    let mut handle = H::create();
    let steps = operations
        .iter()
        .map(|&operation| Step {
            operation,
            outcome: handle.apply(operation),
        })
        .collect();
    handle.release();
    steps
}

/// A step on which two implementations disagreed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deviation {
    /// Position of the step in the scenario.
    pub index: usize,
    /// The operation applied.
    pub operation: Operation,
    /// Outcome from the reference implementation.
    pub expected: Outcome,
    /// Outcome from the candidate.
    pub actual: Outcome,
}

impl fmt::Display for Deviation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "step {} ({}): expected {}, got {}",
            self.index,
            self.operation,
            DisplayOutcome(&self.expected),
            DisplayOutcome(&self.actual)
        )
    }
}

struct DisplayOutcome<'a>(&'a Outcome);

impl fmt::Display for DisplayOutcome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Ok(None) => f.write_str("ok"),
            Ok(Some(payload)) => write!(f, "ok({payload})"),
            Err(error) => write!(f, "error({error})"),
        }
    }
}

/// Run `operations` against both `Reference` and `Candidate` and list every
/// step where their outcomes differ.
pub fn deviations<Reference, Candidate>(operations: &[Operation]) -> Vec<Deviation>
where
    Reference: HandleLifecycle,
    Candidate: HandleLifecycle,
{
    let expected = run_scenario::<Reference>(operations);
    let actual = run_scenario::<Candidate>(operations);

    expected
        .into_iter()
        .zip(actual)
        .enumerate()
        .filter(|(_, (expected, actual))| expected.outcome != actual.outcome)
        .map(|(index, (expected, actual))| Deviation {
            index,
            operation: expected.operation,
            expected: expected.outcome,
            actual: actual.outcome,
        })
        .collect()
}
