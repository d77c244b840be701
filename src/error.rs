use std::fmt;

/**
The error type returned by every fallible operation in this crate.

Carries an [`ErrorKind`] plus a human-readable `message`. There is no
automatic retry anywhere in the crate (see spec §7): once an error is
returned, further iteration after it raises the same error again rather than
attempting recovery.
*/
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

/**
The closed taxonomy of errors this crate can raise.

Note that "no path from `s` to `t`" is *not* a variant here: it is
represented structurally, by an empty result vector or an iterator that
yields nothing, never by an `Err`.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// `s` or `t` is not a vertex of the graph, or `k == 0` where a positive
    /// `k` is required. Always reported synchronously at construction.
    InvalidInput,
    /// A negative edge weight was supplied to an algorithm or oracle that
    /// requires non-negative weights (Eppstein always; Yen when paired with
    /// a Dijkstra-style oracle).
    UnsupportedConfiguration,
    /// The caller-supplied SSSP oracle failed; the oracle's own error is
    /// folded into `message`.
    OracleFailure,
}

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Error {
        Error {
            kind: ErrorKind::InvalidInput,
            message: message.into(),
        }
    }

    pub fn unsupported_configuration(message: impl Into<String>) -> Error {
        Error {
            kind: ErrorKind::UnsupportedConfiguration,
            message: message.into(),
        }
    }

    pub fn oracle_failure(message: impl Into<String>) -> Error {
        Error {
            kind: ErrorKind::OracleFailure,
            message: message.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Error {}
