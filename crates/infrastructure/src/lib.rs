//! Cadwatch Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus configuration loading
//! and report persistence.

pub mod adapters;
pub mod config;
pub mod report;
pub mod serialization;

pub use adapters::{ReqwestHttpClient, SystemClock};
pub use config::{ConfigError, load_config_from_env, load_config_with};
pub use report::{DEFAULT_REPORT_PATH, read_report, write_report};
pub use serialization::{SerializationError, from_json, to_json_stable};
