//! Diagnostic error types for webutil operations.
//!
//! Every fallible helper in this crate fails with a single structured
//! [`Error`] carrying a closed [`ErrorKind`]. Callers pattern-match on the
//! kind; the display string is a developer-facing diagnostic, not an
//! end-user message.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Closed categorization of diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Malformed input that cannot be interpreted
    Syntax,
    /// A referenced name or field does not exist
    Reference,
    /// A value or selector is outside the accepted set
    Range,
    /// An operand has the wrong type or is unusable (e.g. non-finite)
    Type,
    /// A URL or query string is invalid
    Url,
    /// Dynamic evaluation failure
    Eval,
    /// A precondition on an argument was violated
    InvalidArgument,
    /// Uncategorized error
    Generic,
}

impl ErrorKind {
    /// Returns the stable code string for this kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Syntax => "SYNTAX",
            Self::Reference => "REFERENCE",
            Self::Range => "RANGE",
            Self::Type => "TYPE",
            Self::Url => "URL",
            Self::Eval => "EVAL",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::Generic => "GENERIC",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ErrorKind {
    type Err = std::convert::Infallible;

    /// Accepts the legacy tag spellings; unknown tags map to [`Self::Generic`].
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "SyntaxError" => Self::Syntax,
            "ReferenceError" => Self::Reference,
            "RangeError" => Self::Range,
            "TypeError" => Self::Type,
            "URLError" => Self::Url,
            "EvalError" => Self::Eval,
            "InvalidArgument" => Self::InvalidArgument,
            _ => Self::Generic,
        })
    }
}

/// Formats the developer-facing diagnostic line for an error.
///
/// The kind is intentionally absent from the display string; it is carried
/// structurally on [`Error`] for pattern matching.
#[must_use]
pub fn format_diagnostic(message: &str, site: &str) -> String {
    format!("Uncaught(in {site}) {message}")
}

/// Structured diagnostic error raised by webutil helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{}", format_diagnostic(.message, .site))]
pub struct Error {
    /// Error category
    kind: ErrorKind,
    /// Human-readable message
    message: String,
    /// Name of the operation that raised the error
    site: String,
}

/// Specialized result type for webutil operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new error of the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>, site: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            site: site.into(),
        }
    }

    /// Shorthand for an [`ErrorKind::InvalidArgument`] error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>, site: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message, site)
    }

    /// Shorthand for an [`ErrorKind::Type`] error.
    #[must_use]
    pub fn type_error(message: impl Into<String>, site: impl Into<String>) -> Self {
        Self::new(ErrorKind::Type, message, site)
    }

    /// Shorthand for an [`ErrorKind::Range`] error.
    #[must_use]
    pub fn range(message: impl Into<String>, site: impl Into<String>) -> Self {
        Self::new(ErrorKind::Range, message, site)
    }

    /// Returns the error category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the raw message without the diagnostic framing.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the name of the operation that raised the error.
    #[must_use]
    pub fn site(&self) -> &str {
        &self.site
    }
}
