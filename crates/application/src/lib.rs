//! Cadwatch Application - Contract checks
//!
//! This crate runs the close-approach contract against the remote API:
//! the endpoint client, the orbit-class lookup, the individual checks,
//! and the suite that plans and executes them.
//!
//! Adapters for the ports live in `cadwatch-infrastructure`.

pub mod api_client;
pub mod contract;
pub mod error;
pub mod lookup;
pub mod ports;
pub mod suite;

#[cfg(test)]
mod fakes;

pub use api_client::ApiClient;
pub use contract::{CaseCatalog, ConcurrencyProbe, ContractRunner, DefaultCheck};
pub use error::{ApplicationError, ApplicationResult};
pub use lookup::SbdbClassification;
pub use ports::{ClassificationLookup, Clock, HttpClient, HttpClientError};
pub use suite::{ContractSuite, PlannedCase, SuiteOptions};
