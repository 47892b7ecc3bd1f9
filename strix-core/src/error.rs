// strix-core - Error types for the Strix evaluator
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for Strix evaluation.
//!
//! Every failure propagates as an `Err` through the evaluator's own
//! control path; `try*` is the only interception point. Uncaught errors
//! reach the driver, which alone decides display and continuation.

use std::fmt;

use strix_parser::{ReadError, StrixVal, Symbol};

/// Result type for Strix evaluation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during reading or evaluation.
#[derive(Debug, Clone)]
pub enum Error {
    /// The reader found no forms. A control signal, not a reportable
    /// error: drivers skip blank input silently.
    Blank,
    /// Malformed input from the reader
    Syntax(String),
    /// Invalid special form syntax
    InvalidSyntax { form: &'static str, message: String },
    /// Unbound symbol reference
    Undefined(Symbol),
    /// Wrong kind for an operation
    TypeError {
        expected: &'static str,
        got: &'static str,
        context: Option<String>,
    },
    /// Wrong number of arguments to a function
    ArityError {
        expected: AritySpec,
        got: usize,
        name: Option<String>,
    },
    /// Index out of bounds
    IndexOutOfBounds { index: i64, length: usize },
    /// Missing or unreadable text resource
    Io(String),
    /// User-thrown value (via throw)
    Thrown(StrixVal),
    /// Internal error - invariant violation
    Internal(String),
}

/// Specification for expected arity.
#[derive(Debug, Clone)]
pub enum AritySpec {
    Exact(usize),
    AtLeast(usize),
}

impl fmt::Display for AritySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AritySpec::Exact(n) => write!(f, "{}", n),
            AritySpec::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Blank => write!(f, "blank input"),
            Error::Syntax(msg) => write!(f, "{}", msg),
            Error::InvalidSyntax { form, message } => {
                write!(f, "Invalid '{}' syntax: {}", form, message)
            }
            Error::Undefined(sym) => write!(f, "'{}' not found", sym),
            Error::TypeError {
                expected,
                got,
                context,
            } => {
                if let Some(ctx) = context {
                    write!(f, "{}: expected {}, got {}", ctx, expected, got)
                } else {
                    write!(f, "Type error: expected {}, got {}", expected, got)
                }
            }
            Error::ArityError {
                expected,
                got,
                name,
            } => {
                if let Some(name) = name {
                    write!(
                        f,
                        "Wrong number of arguments to '{}': expected {}, got {}",
                        name, expected, got
                    )
                } else {
                    write!(
                        f,
                        "Wrong number of arguments: expected {}, got {}",
                        expected, got
                    )
                }
            }
            Error::IndexOutOfBounds { index, length } => {
                write!(
                    f,
                    "Index {} out of bounds for collection of length {}",
                    index, length
                )
            }
            Error::Io(msg) => write!(f, "{}", msg),
            Error::Thrown(val) => write!(f, "{}", val),
            Error::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<ReadError> for Error {
    fn from(e: ReadError) -> Self {
        match e {
            ReadError::Blank => Error::Blank,
            syntax => Error::Syntax(syntax.to_string()),
        }
    }
}

impl Error {
    /// Create an arity error for exact arity with function name.
    pub fn arity_named(name: impl Into<String>, expected: usize, got: usize) -> Self {
        Error::ArityError {
            expected: AritySpec::Exact(expected),
            got,
            name: Some(name.into()),
        }
    }

    /// Create an arity error for minimum arity with function name.
    pub fn arity_at_least(name: impl Into<String>, expected: usize, got: usize) -> Self {
        Error::ArityError {
            expected: AritySpec::AtLeast(expected),
            got,
            name: Some(name.into()),
        }
    }

    /// Create a type error.
    pub fn type_error(expected: &'static str, got: &'static str) -> Self {
        Error::TypeError {
            expected,
            got,
            context: None,
        }
    }

    /// Create a type error with context.
    pub fn type_error_in(
        context: impl Into<String>,
        expected: &'static str,
        got: &'static str,
    ) -> Self {
        Error::TypeError {
            expected,
            got,
            context: Some(context.into()),
        }
    }

    /// Create an invalid syntax error.
    pub fn syntax(form: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidSyntax {
            form,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_display() {
        let err = Error::Undefined(Symbol::new("abc"));
        assert_eq!(err.to_string(), "'abc' not found");
    }

    #[test]
    fn test_type_error_display() {
        let err = Error::type_error_in("+", "number", "string");
        assert_eq!(err.to_string(), "+: expected number, got string");
    }

    #[test]
    fn test_thrown_display_is_readable() {
        let err = Error::Thrown(StrixVal::string("boom"));
        assert_eq!(err.to_string(), "\"boom\"");
    }

    #[test]
    fn test_blank_from_read_error() {
        let err: Error = ReadError::Blank.into();
        assert!(matches!(err, Error::Blank));
    }
}
