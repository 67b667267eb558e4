// error.rs - Error type for builder misuse and engine compilation failures.
//
// The builder itself performs no pattern validation; its own errors cover
// only fluent-protocol misuse. Everything else surfaces as the engine's
// compile error, passed through unchanged.

use std::fmt;

/// Error produced by a terminal operation on a
/// [`PatternBuilder`](crate::PatternBuilder).
///
/// Protocol-misuse errors are detected while the chain is built but reported
/// only when the literal is read or the pattern compiled; the first misuse
/// in a chain wins.
#[derive(Debug, Clone)]
pub enum Error {
    /// A term was given content but no repetition bound. Call `exactly`,
    /// `min` or `max` before the content setter.
    NoQuantitySpecified,
    /// `or` was called without a preceding `either` to supply the left
    /// branch of the alternation.
    OrWithoutEither,
    /// The assembled pattern text was rejected by the regex engine.
    Compile(fancy_regex::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoQuantitySpecified => {
                write!(f, "term has no quantity; call exactly, min or max first")
            }
            Error::OrWithoutEither => write!(f, "or called without a preceding either"),
            Error::Compile(err) => write!(f, "pattern failed to compile: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Compile(err) => Some(err),
            _ => None,
        }
    }
}

impl From<fancy_regex::Error> for Error {
    fn from(err: fancy_regex::Error) -> Self {
        Error::Compile(err)
    }
}
