//! filehandle Benchmarks
//!
//! Measures what state tracking costs. The same create, open, read, get
//! data, close, release sequence runs against:
//!
//! - the typestate `FileHandle`, whose checks happen at compile time,
//! - the runtime-checked `TrackedHandle`,
//! - the unchecked test fixture, which does no checking at all.
//!
//! The typestate handle is expected to match the unchecked one.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]

use filehandle::{HandleLifecycle, HandleResult, Payload};

/// One full lifecycle through [`HandleLifecycle`].
///
/// The typestate counterpart is [`filehandle::read_once`].
pub fn dynamic_lifecycle<H: HandleLifecycle>() -> HandleResult<Payload> {
    let mut handle = H::create();
    handle.open()?;
    handle.read()?;
    let data = handle.get_data()?;
    handle.close()?;
    handle.release();
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use filehandle::{read_once, TrackedHandle};
    use filehandle_testing::UncheckedHandle;

    #[test]
    fn every_variant_reads_the_same_value() {
        assert_eq!(read_once(), Payload::sentinel());
        assert_eq!(
            dynamic_lifecycle::<TrackedHandle>(),
            Ok(Payload::sentinel())
        );
        assert_eq!(
            dynamic_lifecycle::<UncheckedHandle>(),
            Ok(Payload::sentinel())
        );
    }
}
