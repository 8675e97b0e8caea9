//! # cardval-cli — Card Document Checker
//!
//! Provides the `cardval` command-line interface, which checks a single
//! JSON file against the embedded card contract from `cardval-schema`:
//!
//! ```bash
//! cardval --file cards/cat.json
//! cardval -f cards/cat.json
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; the check-and-report flow lives in
//!   [`validate`] and writes to caller-supplied streams.
//! - Contract logic stays in `cardval-schema`. This crate only decides
//!   messages and exit codes.

pub mod validate;
