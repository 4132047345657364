use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the tidings workspace.
///
/// Every variant is terminal for the computation that produced it. Callers
/// running a batch (several tickers, several series) are expected to record
/// the failure and continue with the remaining work.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TidingsError {
    /// Malformed text or record (empty headline, non-UTF-8 bytes, non-finite value, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation that must produce a result was given an empty sequence.
    #[error("empty input: {operation} requires at least one value")]
    EmptyInput {
        /// Operation label, e.g. "aggregate" or "describe".
        operation: String,
    },

    /// Too few overlapping points for a meaningful statistic.
    #[error("insufficient data: need at least {needed} points, got {got}")]
    InsufficientData {
        /// Minimum number of points required.
        needed: usize,
        /// Number of points actually available.
        got: usize,
    },

    /// One of the series has zero variance, so the coefficient is undefined.
    #[error("undefined correlation: {0}")]
    UndefinedCorrelation(String),

    /// Caller misuse, e.g. conflicting detector parameters.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An external loader or provider failed to produce its records.
    #[error("{provider} failed: {msg}")]
    DataSource {
        /// Provider or loader name that failed.
        provider: String,
        /// Human-readable error message.
        msg: String,
    },
}

impl TidingsError {
    /// Helper: build an `InvalidInput` error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Helper: build an `EmptyInput` error for an operation label.
    pub fn empty(operation: impl Into<String>) -> Self {
        Self::EmptyInput {
            operation: operation.into(),
        }
    }

    /// Helper: build an `InsufficientData` error.
    #[must_use]
    pub const fn insufficient(needed: usize, got: usize) -> Self {
        Self::InsufficientData { needed, got }
    }

    /// Helper: build an `UndefinedCorrelation` error.
    pub fn undefined_correlation(msg: impl Into<String>) -> Self {
        Self::UndefinedCorrelation(msg.into())
    }

    /// Helper: build an `InvalidArgument` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Helper: build a `DataSource` error tagged with the provider name.
    pub fn data_source(provider: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::DataSource {
            provider: provider.into(),
            msg: msg.into(),
        }
    }

    /// Returns true if a pipeline may skip the failing unit of work and go on.
    ///
    /// Caller misuse (`InvalidArgument`) is not recoverable: repeating the same
    /// call for another ticker would fail in the same way.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InvalidArgument(_))
    }
}
