//! API client bound to a single endpoint.

use std::sync::Arc;

use cadwatch_domain::{
    ApiRequest, ApiResponse, Endpoint, HarnessConfig, HttpMethod, QueryParams,
};
use tracing::debug;
use url::Url;

use crate::ApplicationResult;
use crate::ports::HttpClient;

/// Issues requests against one validated endpoint and decodes the responses.
///
/// Every call is a single live request: no retries, no caching and no
/// state carried between calls.
///
/// # Example
///
/// ```ignore
/// let http = Arc::new(ReqwestHttpClient::new()?);
/// let client = ApiClient::new(http, DEFAULT_BASE_URL, "cad.api")?;
/// let response = client.get(QueryParams::new().with("limit", 15)).await?;
/// assert_eq!(response.count()?, 15);
/// ```
#[derive(Debug)]
pub struct ApiClient<C> {
    http: Arc<C>,
    endpoint: Endpoint,
    url: Url,
}

impl<C> Clone for ApiClient<C> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
            endpoint: self.endpoint,
            url: self.url.clone(),
        }
    }
}

impl<C: HttpClient> ApiClient<C> {
    /// Creates a client for `endpoint` under `base_url`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the endpoint is not supported or the
    /// base URL is invalid. No request is made.
    pub fn new(http: Arc<C>, base_url: &str, endpoint: &str) -> ApplicationResult<Self> {
        let endpoint: Endpoint = endpoint.parse()?;
        Self::for_endpoint(http, base_url, endpoint)
    }

    /// Creates a client for an already validated endpoint.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base URL is invalid.
    pub fn for_endpoint(
        http: Arc<C>,
        base_url: &str,
        endpoint: Endpoint,
    ) -> ApplicationResult<Self> {
        let url = endpoint.url(base_url)?;
        Ok(Self {
            http,
            endpoint,
            url,
        })
    }

    /// Creates a client from the harness configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the endpoint or base URL is invalid.
    pub fn from_config(http: Arc<C>, config: &HarnessConfig) -> ApplicationResult<Self> {
        Self::new(http, &config.base_url, &config.endpoint)
    }

    /// Returns the bound endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn http(&self) -> Arc<C> {
        Arc::clone(&self.http)
    }

    /// Issues a GET.
    ///
    /// # Errors
    ///
    /// Returns a transport error or an `InvalidJson` parse error.
    pub async fn get(&self, params: QueryParams) -> ApplicationResult<ApiResponse> {
        self.send(self.request(HttpMethod::Get).with_params(params))
            .await
    }

    /// Issues a HEAD.
    ///
    /// # Errors
    ///
    /// Returns a transport error or an `InvalidJson` parse error.
    pub async fn head(&self, params: QueryParams) -> ApplicationResult<ApiResponse> {
        self.send(self.request(HttpMethod::Head).with_params(params))
            .await
    }

    /// Issues a POST with optional form data.
    ///
    /// # Errors
    ///
    /// Returns a transport error or an `InvalidJson` parse error.
    pub async fn post(
        &self,
        data: Option<QueryParams>,
        params: QueryParams,
    ) -> ApplicationResult<ApiResponse> {
        let mut request = self.request(HttpMethod::Post).with_params(params);
        if let Some(form) = data {
            request = request.with_form(form);
        }
        self.send(request).await
    }

    /// Issues a DELETE.
    ///
    /// # Errors
    ///
    /// Returns a transport error or an `InvalidJson` parse error.
    pub async fn delete(&self, params: QueryParams) -> ApplicationResult<ApiResponse> {
        self.send(self.request(HttpMethod::Delete).with_params(params))
            .await
    }

    fn request(&self, method: HttpMethod) -> ApiRequest {
        ApiRequest::new(method, self.url.clone())
    }

    async fn send(&self, request: ApiRequest) -> ApplicationResult<ApiResponse> {
        debug!(method = %request.method, url = %request.full_url(), "sending request");
        let raw = self.http.execute(&request).await?;
        debug!(
            method = %request.method,
            status = raw.status,
            duration_ms = u64::try_from(raw.duration.as_millis()).unwrap_or(u64::MAX),
            "received response"
        );
        Ok(ApiResponse::decode(raw)?)
    }
}
