//! In-memory port implementations shared by the unit tests.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use cadwatch_domain::{ApiRequest, RawResponse};
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Value, json};

use crate::ApplicationResult;
use crate::ports::{ClassificationLookup, Clock, HttpClient, HttpClientError};

type Handler = dyn Fn(&ApiRequest, usize) -> Result<(u16, String), HttpClientError> + Send + Sync;

/// Answers every request through a closure and records what was sent.
///
/// The closure also receives the zero-based call index.
pub struct ScriptedHttp {
    handler: Box<Handler>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedHttp {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&ApiRequest, usize) -> Result<(u16, String), HttpClientError> + Send + Sync + 'static,
    {
        Self {
            handler: Box::new(handler),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Always answers with the same status and body.
    pub fn fixed(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        Self::new(move |_, _| Ok((status, body.clone())))
    }

    pub fn recorded(&self) -> Vec<ApiRequest> {
        self.requests.lock().expect("Lock poisoned").clone()
    }
}

#[async_trait]
impl HttpClient for ScriptedHttp {
    async fn execute(&self, request: &ApiRequest) -> Result<RawResponse, HttpClientError> {
        let index = {
            let mut requests = self.requests.lock().expect("Lock poisoned");
            requests.push(request.clone());
            requests.len() - 1
        };
        let (status, body) = (self.handler)(request, index)?;
        Ok(RawResponse::new(status, body, Duration::from_millis(3)))
    }
}

/// Returns the same instant forever.
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn on(year: i32, month: u32, day: u32) -> Self {
        let at = NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
            .and_utc();
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Resolves designations from a fixed table.
#[derive(Default)]
pub struct StaticLookup {
    classes: HashMap<String, String>,
}

impl StaticLookup {
    pub fn with(mut self, designation: &str, code: &str) -> Self {
        self.classes.insert(designation.to_string(), code.to_string());
        self
    }
}

#[async_trait]
impl ClassificationLookup for StaticLookup {
    async fn orbit_class(&self, designation: &str) -> ApplicationResult<Option<String>> {
        Ok(self.classes.get(designation).cloned())
    }
}

pub const FIELDS: [&str; 11] = [
    "des", "orbit_id", "jd", "cd", "dist", "dist_min", "dist_max", "v_rel", "v_inf", "t_sigma_f",
    "h",
];

/// Builds a close-approach row from the columns the tests care about.
pub fn row(des: &str, cd: &str, dist: &str, h: &str) -> Value {
    json!([
        des, "12", "2461333.5", cd, dist, dist, dist, "9.1", "9.0", "< 00:01", h
    ])
}

/// Builds a close-approach response body with the published signature.
pub fn cad_body(rows: &[Value]) -> String {
    json!({
        "signature": {
            "source": "NASA/JPL SBDB Close Approach Data API",
            "version": "1.1"
        },
        "count": rows.len().to_string(),
        "fields": FIELDS,
        "data": rows,
    })
    .to_string()
}
