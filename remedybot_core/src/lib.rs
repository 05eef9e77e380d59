#![deny(
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

//! Core domain for the over-the-counter medicine assistant.
//!
//! Everything here is pure and synchronous: a read-only medicine table,
//! a keyword parser over its keys, an input validator, and a response
//! composer. No I/O happens in this crate.

pub mod compose;
pub mod parse;
pub mod table;
pub mod util;
pub mod validate;

pub use compose::ResponseComposer;
pub use parse::{KeywordParser, ParsedQuery};
pub use table::MedicineTable;
pub use validate::{ValidationError, validate};
