//! Error types for array extraction.

use std::num::ParseIntError;

use thiserror::Error;

/// Failures raised while pulling an integer array out of raw input.
///
/// Both variants are fatal: the CLI prints them and exits non-zero.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// No `[` was found, no `]` was found, or the first `]` comes before the first `[`.
    #[error("missing bracket: input has no `[` followed by a `]`")]
    MissingBracket,

    /// A comma-separated field did not parse as a base-10 integer after trimming.
    #[error("number format error: {token:?} is not a base-10 integer")]
    NumberFormat {
        token: String,
        #[source]
        source: ParseIntError,
    },
}
