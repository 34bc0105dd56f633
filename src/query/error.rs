use std::collections::TryReserveError;
use std::fmt;
use thiserror::Error;

/// Where an unbalanced parenthesis was detected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParenSite {
    /// A `)` with no open `(` on the operator stack, caught mid-scan.
    UnexpectedClose,
    /// A `(` still on the operator stack when the input ran out.
    Unclosed,
}

impl fmt::Display for ParenSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParenSite::UnexpectedClose => write!(f, "unexpected ')'"),
            ParenSite::Unclosed => write!(f, "'(' is never closed"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Failed to allocate memory for tokens: {0}")]
    Allocation(#[from] TryReserveError),

    #[error("Mismatched parentheses: {0}")]
    MismatchedParentheses(ParenSite),

    #[error("Not a valid search pattern: {0}")]
    MalformedPostfix(&'static str),

    #[error("Empty search pattern")]
    EmptyQuery,
}
