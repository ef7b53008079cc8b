//! Harness settings
//!
//! Defines where the harness points and how hard it pushes the remote service.

use serde::{Deserialize, Serialize};

use crate::endpoint::DEFAULT_BASE_URL;

/// Runtime configuration for the contract harness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Base URL of the SSD APIs.
    pub base_url: String,
    /// Endpoint under test.
    pub endpoint: String,
    /// Per-request timeout in seconds. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
    /// Delay between spawning concurrent requests, in milliseconds.
    pub stagger_ms: u64,
    /// Row limit for sorting, orbit-class, body and idempotence cases.
    pub sample_limit: usize,
    /// `date-min` used by orbit-class and body cases.
    pub class_window_start: String,
    /// Parallel request counts exercised by the concurrency probe.
    pub concurrency_levels: Vec<usize>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: "cad.api".to_string(),
            timeout_secs: None,
            stagger_ms: 100,
            sample_limit: 5,
            class_window_start: "1900-01-01".to_string(),
            concurrency_levels: vec![5, 10],
        }
    }
}
