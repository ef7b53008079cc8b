//! Domain error types

use thiserror::Error;

/// Domain-level errors raised while decoding responses or validating configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The response body is not valid JSON.
    #[error("invalid JSON body: {0}")]
    InvalidJson(String),

    /// A required field is missing from the response body.
    #[error("missing field: {0}")]
    MissingField(String),

    /// A field is present but has an unusable value.
    #[error("invalid field '{field}': {reason}")]
    InvalidField {
        /// Field name.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A data row does not line up with the declared fields.
    #[error("row {row} has {actual} values, expected {expected}")]
    MisalignedRow {
        /// Zero-based row index.
        row: usize,
        /// Number of declared fields.
        expected: usize,
        /// Number of values in the row.
        actual: usize,
    },

    /// A cell value cannot be coerced to the column's semantic type.
    #[error("cannot read '{value}' in column '{column}' as {kind}")]
    InvalidCell {
        /// Column name.
        column: String,
        /// Offending value as text.
        value: String,
        /// Target kind ("date" or "number").
        kind: &'static str,
    },

    /// The endpoint identifier is not part of the supported set.
    #[error("unsupported endpoint: {0}")]
    UnknownEndpoint(String),

    /// The name does not identify a close-approach body.
    #[error("unknown close-approach body: {0}")]
    UnknownBody(String),

    /// The code does not identify an SBDB orbit class.
    #[error("unknown orbit class: {0}")]
    UnknownOrbitClass(String),

    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl DomainError {
    /// Returns true for errors raised while decoding a response.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(
            self,
            Self::InvalidJson(_)
                | Self::MissingField(_)
                | Self::InvalidField { .. }
                | Self::MisalignedRow { .. }
                | Self::InvalidCell { .. }
        )
    }

    /// Returns true for errors raised while building a client or request.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnknownEndpoint(_)
                | Self::UnknownBody(_)
                | Self::UnknownOrbitClass(_)
                | Self::InvalidUrl(_)
        )
    }
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
