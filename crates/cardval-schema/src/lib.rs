//! # cardval-schema — Card Contract & Document Loading
//!
//! Provides the embedded contract that card documents are checked against,
//! and the loader that turns a file on disk into a JSON value.
//!
//! ## Contract (`contract`)
//!
//! [`CARD_CONTRACT`] requires a JSON object with string-valued `title` and
//! `image` keys. Additional properties are permitted. The contract is a
//! closed set of [`RequiredField`] constraints fixed at compile time; it
//! can render itself as the equivalent JSON Schema via
//! [`Contract::to_json_schema`].
//!
//! ## Loading (`document`)
//!
//! [`load_document`] distinguishes a missing file, an unreadable file, and
//! malformed JSON, so callers can map each to its own exit policy.
//!
//! ## Crate Policy
//!
//! - No output and no process control here. Reporting belongs to the CLI.
//! - Every failure is a typed error; nothing panics on bad input.

pub mod contract;
pub mod document;

pub use contract::{
    Card, Contract, ContractViolations, FieldKind, RequiredField, Violation, CARD_CONTRACT,
};
pub use document::{load_document, DocumentError};
