//! Case outcomes and run reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CaseGroup;

/// How a case ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    /// The API honoured the contract.
    Passed,
    /// The API violated the contract.
    Failed,
    /// Inconclusive because live data did not meet a precondition.
    Skipped,
    /// The case could not be evaluated (transport or decoding failure).
    Errored,
}

impl CaseStatus {
    /// Returns true for statuses that should fail a run.
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Failed | Self::Errored)
    }

    /// Returns an uppercase label for console output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Passed => "PASSED",
            Self::Failed => "FAILED",
            Self::Skipped => "SKIPPED",
            Self::Errored => "ERROR",
        }
    }
}

/// Result of checking a single case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseOutcome {
    /// Group the case belongs to.
    pub group: CaseGroup,
    /// Name identifying the case.
    pub name: String,
    /// Final status.
    pub status: CaseStatus,
    /// Failure, error or skip reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Execution time in milliseconds.
    #[serde(default)]
    pub duration_ms: u64,
}

impl CaseOutcome {
    /// Create a passed outcome.
    #[must_use]
    pub fn pass(group: CaseGroup, name: impl Into<String>) -> Self {
        Self::with_status(group, name, CaseStatus::Passed, None)
    }

    /// Create a failed outcome (contract violation).
    #[must_use]
    pub fn fail(group: CaseGroup, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_status(group, name, CaseStatus::Failed, Some(message.into()))
    }

    /// Create a skipped outcome.
    #[must_use]
    pub fn skip(group: CaseGroup, name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::with_status(group, name, CaseStatus::Skipped, Some(reason.into()))
    }

    /// Create an errored outcome.
    #[must_use]
    pub fn error(group: CaseGroup, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_status(group, name, CaseStatus::Errored, Some(message.into()))
    }

    /// Sets the execution time.
    #[must_use]
    pub const fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Returns `group::name`, the identifier used for keyword selection.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.group, self.name)
    }

    fn with_status(
        group: CaseGroup,
        name: impl Into<String>,
        status: CaseStatus,
        message: Option<String>,
    ) -> Self {
        Self {
            group,
            name: name.into(),
            status,
            message,
            duration_ms: 0,
        }
    }
}

/// Results from a full harness run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Unique run identifier.
    pub run_id: Uuid,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// Individual case outcomes in execution order.
    pub outcomes: Vec<CaseOutcome>,
    /// Total number of cases.
    pub total: usize,
    /// Number of passed cases.
    pub passed: usize,
    /// Number of failed cases.
    pub failed: usize,
    /// Number of skipped cases.
    pub skipped: usize,
    /// Number of errored cases.
    pub errored: usize,
    /// Execution time in milliseconds.
    pub duration_ms: u64,
}

impl RunReport {
    /// Create a report from outcomes.
    #[must_use]
    pub fn new(started_at: DateTime<Utc>, outcomes: Vec<CaseOutcome>, duration_ms: u64) -> Self {
        let count = |status| outcomes.iter().filter(|o| o.status == status).count();
        let passed = count(CaseStatus::Passed);
        let failed = count(CaseStatus::Failed);
        let skipped = count(CaseStatus::Skipped);
        let errored = count(CaseStatus::Errored);

        Self {
            run_id: Uuid::now_v7(),
            started_at,
            total: outcomes.len(),
            outcomes,
            passed,
            failed,
            skipped,
            errored,
            duration_ms,
        }
    }

    /// Check if no case failed or errored.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }

    /// Get pass rate as a percentage of conclusive cases.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn pass_rate(&self) -> f64 {
        let conclusive = self.total - self.skipped;
        if conclusive == 0 {
            100.0
        } else {
            (self.passed as f64 / conclusive as f64) * 100.0
        }
    }
}
