//! Cinder lexer driver.
//!
//! Library half of the `cinder` binary: option parsing, command handlers,
//! and diagnostic rendering, kept out of `main.rs` so they can be tested
//! against in-memory writers.
//!
//! # Commands
//!
//! ```text
//! cinder lex <file>... [--quiet] [--partial] [--color=<mode>]
//! cinder bench <file> [--iterations=<n>]
//! cinder classify <word>...
//! ```

pub mod commands;
pub mod diagnostic;
mod error;
pub mod options;
mod tracing_init;

pub use error::CommandError;
pub use tracing_init::init_tracing;
