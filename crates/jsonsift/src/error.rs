//! Error types surfaced by an extraction pass.
//!
//! Every failure is fatal to the pass: the document is treated as
//! all-or-nothing, and nothing is logged-and-swallowed internally.

use thiserror::Error;

/// Top-level error for a single extraction pass.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying byte source (or the output file) failed for a reason
    /// other than clean exhaustion.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not structurally valid JSON.
    #[error("{kind} at `{path}`")]
    Syntax {
        /// What the tokenizer tripped over.
        kind: SyntaxError,
        /// The dotted path active when the error was raised.
        path: String,
    },

    /// A captured number span does not parse as a floating-point literal.
    #[error("invalid number literal `{literal}` at `{path}`")]
    Number {
        /// The raw span as it appeared in the document.
        literal: String,
        /// The dotted path active when the error was raised.
        path: String,
    },

    /// The tabular sink rejected a row.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Fetching a remote document failed before any bytes were streamed.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote server answered with a non-success status.
    #[error("unexpected http status {status} fetching {url}")]
    HttpStatus {
        /// The status code the server returned.
        status: u16,
        /// The requested URL.
        url: String,
    },

    /// The extraction configuration was rejected at construction.
    #[error("invalid configuration: {0}")]
    Config(&'static str),
}

/// The ways a document can be malformed, as seen by the tokenizers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A byte that no value parser can begin with, or a literal mismatch.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    /// The source was exhausted mid-token or mid-container.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    /// Object keys must be quoted strings.
    #[error("expected '\"' to open an object key, found '{0}'")]
    ExpectedKey(char),

    /// An object key must be followed by a colon.
    #[error("expected ':' after object key, found '{0}'")]
    ExpectedColon(char),

    /// After an object member only `,` or `}` are valid.
    #[error("expected ',' or '}}' in object, found '{0}'")]
    ExpectedObjectSeparator(char),

    /// After an array element only `,` or `]` are valid.
    #[error("expected ',' or ']' in array, found '{0}'")]
    ExpectedArraySeparator(char),

    /// A captured span was not valid UTF-8.
    #[error("invalid utf-8 in document")]
    InvalidUtf8,
}
