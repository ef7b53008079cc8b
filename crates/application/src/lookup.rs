//! Orbit classification lookup against the small-body database.

use async_trait::async_trait;
use cadwatch_domain::{DomainError, Endpoint, QueryParams};

use crate::ApplicationResult;
use crate::api_client::ApiClient;
use crate::ports::{ClassificationLookup, HttpClient};

/// Looks up `object.orbit_class.code` on `sbdb.api`.
#[derive(Debug, Clone)]
pub struct SbdbClassification<C> {
    client: ApiClient<C>,
}

impl<C: HttpClient> SbdbClassification<C> {
    /// Wraps a client bound to `sbdb.api`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownEndpoint` if the client is bound elsewhere.
    pub fn new(client: ApiClient<C>) -> ApplicationResult<Self> {
        if client.endpoint() != Endpoint::SmallBody {
            return Err(DomainError::UnknownEndpoint(format!(
                "{} cannot resolve orbit classes",
                client.endpoint()
            ))
            .into());
        }
        Ok(Self { client })
    }
}

#[async_trait]
impl<C: HttpClient> ClassificationLookup for SbdbClassification<C> {
    async fn orbit_class(&self, designation: &str) -> ApplicationResult<Option<String>> {
        let response = self
            .client
            .get(QueryParams::new().with("des", designation))
            .await?;
        if response.status_code() != 200 {
            return Ok(None);
        }
        let code = response
            .json()
            .pointer("/object/orbit_class/code")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| DomainError::MissingField("object.orbit_class.code".to_string()))?;
        Ok(Some(code.to_string()))
    }
}
