//! HTTP request domain types

mod api_request;
mod method;
mod query;

pub use api_request::ApiRequest;
pub use method::HttpMethod;
pub use query::{QueryParam, QueryParams};
