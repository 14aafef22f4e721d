//! Test support for `filehandle`.
//!
//! - [`contract`]: the lifecycle contract every [`HandleLifecycle`] must
//!   honor, and the `handle_contract_tests!` macro that turns it into tests.
//! - [`scenario`]: run operation sequences and compare implementations step
//!   by step.
//! - [`strategies`]: proptest strategies for operations and sequences.
//! - [`unchecked`]: a handle with no state checks at all, kept as the
//!   negative example the contract is meant to reject.
//!
//! [`HandleLifecycle`]: filehandle::HandleLifecycle

#![deny(warnings)]
#![forbid(
    dead_code,
    invalid_value,
    overflowing_literals,
    unconditional_recursion,
    unreachable_pub,
    unused_allocation,
    unsafe_code
)]
#![deny(
    bad_style,
    deprecated,
    meta_variable_misuse,
    non_ascii_idents,
    non_camel_case_types,
    non_snake_case,
    non_upper_case_globals,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_code,
    unused_assignments,
    unused_attributes,
    unused_extern_crates,
    unused_imports,
    unused_must_use,
    unused_mut,
    unused_parens,
    unused_qualifications,
    unused_results,
    unused_variables
)]

pub mod contract;
pub mod scenario;
pub mod strategies;
pub mod unchecked;

pub use scenario::{deviations, run_scenario, Deviation, Outcome, Step};
pub use unchecked::UncheckedHandle;
