//! API request specification type

use serde::{Deserialize, Serialize};
use url::Url;

use super::{HttpMethod, QueryParams};

/// A single request against a bound endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Endpoint URL without query string
    pub url: Url,
    /// Query parameters, forwarded verbatim
    #[serde(default)]
    pub params: QueryParams,
    /// Form fields sent as the body of a POST
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<QueryParams>,
}

impl ApiRequest {
    /// Creates a request with no parameters.
    #[must_use]
    pub const fn new(method: HttpMethod, url: Url) -> Self {
        Self {
            method,
            url,
            params: QueryParams::new(),
            form: None,
        }
    }

    /// Sets the query parameters.
    #[must_use]
    pub fn with_params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }

    /// Sets the form body.
    #[must_use]
    pub fn with_form(mut self, form: QueryParams) -> Self {
        self.form = Some(form);
        self
    }

    /// Returns the URL with the query string appended.
    #[must_use]
    pub fn full_url(&self) -> Url {
        let mut url = self.url.clone();
        if !self.params.is_empty() {
            url.query_pairs_mut().extend_pairs(self.params.pairs());
        }
        url
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cad_url() -> Url {
        Url::parse("https://ssd-api.jpl.nasa.gov/cad.api").unwrap()
    }

    #[test]
    fn test_full_url_without_params() {
        let req = ApiRequest::new(HttpMethod::Get, cad_url());
        assert_eq!(req.full_url().as_str(), "https://ssd-api.jpl.nasa.gov/cad.api");
    }

    #[test]
    fn test_full_url_encodes_params() {
        let req = ApiRequest::new(HttpMethod::Get, cad_url())
            .with_params(QueryParams::new().with("body", "433 Eros").with("sort", "-h"));
        assert_eq!(
            req.full_url().as_str(),
            "https://ssd-api.jpl.nasa.gov/cad.api?body=433+Eros&sort=-h"
        );
    }

    #[test]
    fn test_form_only_on_request() {
        let req = ApiRequest::new(HttpMethod::Post, cad_url())
            .with_form(QueryParams::new().with("des", "433"));
        assert_eq!(req.form.unwrap().get("des"), Some("433"));
        assert!(req.params.is_empty());
    }
}
