//! # Validate
//!
//! Checks one card document against the embedded contract and reports the
//! outcome as a single line.
//!
//! | Outcome                     | Stream | Exit |
//! |-----------------------------|--------|------|
//! | conforms                    | stdout | 0    |
//! | file not found              | stderr | 0    |
//! | does not conform            | stderr | 1    |
//! | unreadable / malformed JSON | `Err`  | 2    |
//!
//! A missing file exits 0 to match the established behavior of this check,
//! even though a contract failure exits 1.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use cardval_schema::{load_document, Card};

/// Exit code for a document that does not conform to the contract.
pub const EXIT_INVALID: u8 = 1;

/// Exit code for a document that could not be read or parsed.
pub const EXIT_OPERATIONAL_ERROR: u8 = 2;

/// Arguments for a validation run.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the JSON card document to check (required).
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: PathBuf,
}

/// Result of a validation run that reached a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The document conforms to the contract.
    Valid,
    /// The document parsed but does not conform.
    Invalid,
    /// Nothing exists at the given path.
    FileNotFound,
}

impl Outcome {
    /// Process exit code for this outcome.
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Valid | Outcome::FileNotFound => 0,
            Outcome::Invalid => EXIT_INVALID,
        }
    }
}

/// Execute a validation run against the process's stdout and stderr.
pub fn run_validate(args: &ValidateArgs) -> Result<Outcome> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    validate_file(&args.file, &mut stdout.lock(), &mut stderr.lock())
}

/// Validate the document at `path`, writing the outcome line to `out` or `err`.
///
/// # Errors
///
/// Returns the underlying [`cardval_schema::DocumentError`] if the file exists but cannot be
/// read or is not valid JSON. Nothing is written in that case.
pub fn validate_file<O, E>(path: &Path, out: &mut O, err: &mut E) -> Result<Outcome>
where
    O: Write,
    E: Write,
{
    tracing::debug!(path = %path.display(), "validating card document");

    let document = match load_document(path) {
        Ok(document) => document,
        Err(e) if e.is_not_found() => {
            writeln!(err, "File not found: {}", path.display())?;
            return Ok(Outcome::FileNotFound);
        }
        Err(e) => return Err(e.into()),
    };

    match Card::from_value(document) {
        Ok(card) => {
            tracing::debug!(
                title = %card.title,
                image = %card.image,
                extra_properties = card.extra.len(),
                "document conforms"
            );
            writeln!(out, "Validation successful: {}.", path.display())?;
            Ok(Outcome::Valid)
        }
        Err(violations) => {
            tracing::debug!(
                contract = violations.contract(),
                count = violations.violations().len(),
                "document does not conform"
            );
            for v in violations.violations() {
                tracing::debug!(
                    field = v.field.as_deref().unwrap_or("(root)"),
                    "{}",
                    v.message
                );
            }
            writeln!(err, "Validation failed: {}.", path.display())?;
            Ok(Outcome::Invalid)
        }
    }
}
