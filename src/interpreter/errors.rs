//! Runtime error types for the brainfuck interpreter
//!
//! This module defines [`RuntimeError`], which represents all errors that can
//! occur during program execution.
//!
//! All runtime errors are fatal - there is no recovery path; the driver
//! reports them on the diagnostic channel and exits with a non-zero status.
//! End-of-input on `,` is a defined outcome, not an error.

use crate::memory::tape::BoundsError;
use std::fmt;
use std::io;

/// Runtime errors that can occur during execution
#[derive(Debug)]
pub enum RuntimeError {
    /// A cursor move ran past an edge of the tape
    TapeBounds(BoundsError),

    /// A `[` whose matching `]` is not found before the window ends
    UnmatchedOpenBracket,

    /// A `]` encountered at nesting depth 0
    UnmatchedCloseBracket,

    /// A console read or write failed
    Io(io::Error),
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::TapeBounds(error) => write!(f, "{}", error),
            // Bracket diagnostics kept verbatim for compatibility
            RuntimeError::UnmatchedOpenBracket => write!(f, "can't find closing brace!"),
            RuntimeError::UnmatchedCloseBracket => write!(f, "found unmatched brace!"),
            RuntimeError::Io(error) => write!(f, "io error: {}", error),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RuntimeError::TapeBounds(error) => Some(error),
            RuntimeError::Io(error) => Some(error),
            _ => None,
        }
    }
}

impl From<BoundsError> for RuntimeError {
    fn from(error: BoundsError) -> Self {
        RuntimeError::TapeBounds(error)
    }
}

impl From<io::Error> for RuntimeError {
    fn from(error: io::Error) -> Self {
        RuntimeError::Io(error)
    }
}
