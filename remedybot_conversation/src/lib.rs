#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! The interactive shell around the core lookup.
//!
//! One synchronous read-eval-print loop: read a line, validate it, extract
//! keywords, compose a reply, print it, repeat until the user types the
//! exit command or the input stream closes. The session transcript is kept
//! in memory for the lifetime of the loop only.

mod session;
mod shell;

pub use session::{ChatMessage, ChatSession, Role};
pub use shell::{Shell, ShellConfig, ShellError, TurnOutcome};
