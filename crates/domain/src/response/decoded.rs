//! Decoded API response
//!
//! Wraps a raw response and exposes typed accessors for the tabular
//! `{signature, count, fields, data}` shape returned by the SSD APIs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::RawResponse;
use crate::error::{DomainError, DomainResult};

/// API identification block carried by every successful response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// Name of the API producing the data.
    pub source: String,
    /// API version string.
    pub version: String,
}

/// A response whose body has been decoded as JSON.
///
/// An empty body decodes to `{}`. Invalid JSON is rejected at construction;
/// missing fields are only reported when an accessor asks for them.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    status: u16,
    raw_body: String,
    json: Value,
}

impl ApiResponse {
    /// Decodes a raw response.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidJson` if the non-empty body is not JSON.
    pub fn decode(raw: RawResponse) -> DomainResult<Self> {
        Self::from_parts(raw.status, raw.body)
    }

    /// Decodes a status code and body.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidJson` if the non-empty body is not JSON.
    pub fn from_parts(status: u16, body: impl Into<String>) -> DomainResult<Self> {
        let raw_body = body.into();
        let json = if raw_body.trim().is_empty() {
            Value::Object(Map::new())
        } else {
            serde_json::from_str(&raw_body).map_err(|e| DomainError::InvalidJson(e.to_string()))?
        };
        Ok(Self {
            status,
            raw_body,
            json,
        })
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.status
    }

    /// Returns the body exactly as received.
    #[must_use]
    pub fn raw_body(&self) -> &str {
        &self.raw_body
    }

    /// Returns the decoded body.
    #[must_use]
    pub const fn json(&self) -> &Value {
        &self.json
    }

    /// Returns the value under `key` when the body is an object containing it.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.json.as_object().and_then(|obj| obj.get(key))
    }

    /// Returns the `count` field, reading it from text if needed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingField` if absent and
    /// `DomainError::InvalidField` if it is not an integer.
    pub fn count(&self) -> DomainResult<i64> {
        let value = self
            .value("count")
            .ok_or_else(|| DomainError::MissingField("count".to_string()))?;
        let invalid = || DomainError::InvalidField {
            field: "count".to_string(),
            reason: format!("expected an integer, got {value}"),
        };
        match value {
            Value::Number(n) => n.as_i64().ok_or_else(invalid),
            Value::String(s) => s.trim().parse::<i64>().map_err(|_| invalid()),
            _ => Err(invalid()),
        }
    }

    /// Returns the column names, if present.
    #[must_use]
    pub fn fields(&self) -> Option<Vec<String>> {
        let fields = self.value("fields")?.as_array()?;
        Some(
            fields
                .iter()
                .map(|f| match f {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
        )
    }

    /// Returns the data rows, if present.
    #[must_use]
    pub fn data(&self) -> Option<&[Value]> {
        self.value("data")?.as_array().map(Vec::as_slice)
    }

    /// Returns the signature block, if present and well-formed.
    #[must_use]
    pub fn signature(&self) -> Option<Signature> {
        self.value("signature")
            .and_then(|sig| serde_json::from_value(sig.clone()).ok())
    }
}
