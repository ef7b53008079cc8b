//! Supported API endpoints

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{DomainError, DomainResult};

/// Base URL of the JPL Solar System Dynamics APIs.
pub const DEFAULT_BASE_URL: &str = "https://ssd-api.jpl.nasa.gov/";

/// Endpoints a client may be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Endpoint {
    /// Close-approach data (`cad.api`).
    #[default]
    #[serde(rename = "cad.api")]
    CloseApproach,
    /// Small-body database lookup (`sbdb.api`).
    #[serde(rename = "sbdb.api")]
    SmallBody,
}

impl Endpoint {
    /// Returns the path segment for this endpoint.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CloseApproach => "cad.api",
            Self::SmallBody => "sbdb.api",
        }
    }

    /// Joins this endpoint onto a base URL.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUrl` if the base URL cannot be parsed or joined.
    pub fn url(self, base_url: &str) -> DomainResult<Url> {
        let mut base =
            Url::parse(base_url).map_err(|e| DomainError::InvalidUrl(format!("{e}: {base_url}")))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(self.as_str())
            .map_err(|e| DomainError::InvalidUrl(format!("{e}: {base_url}")))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Endpoint {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "cad.api" => Ok(Self::CloseApproach),
            "sbdb.api" => Ok(Self::SmallBody),
            other => Err(DomainError::UnknownEndpoint(other.to_string())),
        }
    }
}
