//! A handle that performs no state checks.
//!
//! [`UncheckedHandle`] keeps a payload and nothing else. Every operation
//! reports success and mutates the payload unconditionally, so it happily
//! reads a handle that was never opened, hands out the empty payload of a
//! closed handle, and closes the same handle any number of times.
//!
//! It exists to be run against the contract suite and to show, in tests,
//! which rules a handle without state tracking breaks. It is not a mode of
//! the library and should not be used outside tests.

use filehandle::{HandleLifecycle, HandleResult, Payload};

/// Handle with a payload and no lifecycle state.
#[derive(Debug, Default)]
pub struct UncheckedHandle {
    data: Payload,
}

impl UncheckedHandle {
    /// The payload as it currently stands, whatever the lifecycle.
    pub const fn raw_data(&self) -> Payload {
        self.data
    }
}

impl HandleLifecycle for UncheckedHandle {
    fn create() -> Self {
        Self::default()
    }

    fn open(&mut self) -> HandleResult<()> {
        Ok(())
    }

    fn read(&mut self) -> HandleResult<Payload> {
        self.data = Payload::sentinel();
        Ok(self.data)
    }

    fn get_data(&self) -> HandleResult<Payload> {
        Ok(self.data)
    }

    fn stored_payload(&self) -> Payload {
        self.raw_data()
    }

    fn close(&mut self) -> HandleResult<()> {
        self.data = Payload::default();
        Ok(())
    }
}
