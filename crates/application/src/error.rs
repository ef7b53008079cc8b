//! Application error types

use cadwatch_domain::DomainError;
use thiserror::Error;

use crate::ports::HttpClientError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Decoding or configuration failed.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The HTTP call could not be completed.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpClientError),
}

impl ApplicationError {
    /// Returns true if the error came from the transport.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_))
    }

    /// Returns true if the error came from decoding a response.
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_parse())
    }

    /// Returns true if the error came from an invalid client configuration.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_configuration())
    }
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
