//! Lifecycle example application
//!
//! Walks a handle through create, open, read, get data, close and release,
//! first with the compile-time checked `FileHandle`, then with the
//! runtime-checked `TrackedHandle`, and prints what each one read.
//!
//! Set `RUST_LOG=debug` to see every transition of the tracked handle.

use anyhow::Result;
use filehandle_examples::walkthrough::{init_tracing, tracked_walkthrough, typed_walkthrough};

fn main() -> Result<()> {
    init_tracing()?;

    let data = typed_walkthrough();
    println!("{data}");

    let report = tracked_walkthrough()?;
    println!("{}", report.data);
    println!("second close: {}", report.double_close);

    Ok(())
}
