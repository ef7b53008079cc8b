//! Cadwatch Domain - Core types
//!
//! This crate defines the domain model for the close-approach contract harness:
//! query enumerations, the request/response model, tabular projection and
//! value coercion, and the contract case and outcome types.
//! All types here are pure Rust with no I/O dependencies.

pub mod catalog;
pub mod contract;
pub mod endpoint;
pub mod error;
pub mod request;
pub mod response;
pub mod settings;
pub mod table;
pub mod value;

pub use catalog::{CloseApproachBody, OrbitClass};
pub use contract::{
    CaseGroup, CaseOutcome, CaseStatus, ComparisonOperator, FilterCase, FilterValue,
    InvalidFilterCase, InvalidSortingCase, RunReport, Selector, SortingCase,
};
pub use endpoint::{DEFAULT_BASE_URL, Endpoint};
pub use error::{DomainError, DomainResult};
pub use request::{ApiRequest, HttpMethod, QueryParam, QueryParams};
pub use response::{ApiResponse, RawResponse, Signature};
pub use settings::HarnessConfig;
pub use table::{Column, Table};
pub use value::{AU_PER_LUNAR_DISTANCE, Scalar, ValueKind};
