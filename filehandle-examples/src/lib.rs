//! Example implementations using the `filehandle` library
//!
//! The [`walkthrough`] module drives both handle forms through the full
//! lifecycle; the `lifecycle` example prints what it finds.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Walkthrough: create, open, read, get data, close, release
pub mod walkthrough;
