//! Concurrent-call probe.

use std::sync::Arc;
use std::time::{Duration, Instant};

use cadwatch_domain::{CaseGroup, CaseOutcome, QueryParams};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::api_client::ApiClient;
use crate::ports::HttpClient;

/// Returns the case name for `level` concurrent calls.
#[must_use]
pub fn concurrency_case_name(level: usize) -> String {
    format!("concurrent_call[{level}]")
}

/// Fires several identical requests at once and expects every one to succeed.
pub struct ConcurrencyProbe<C> {
    client: Arc<ApiClient<C>>,
    stagger: Duration,
}

impl<C> ConcurrencyProbe<C>
where
    C: HttpClient + 'static,
{
    /// Creates a probe that waits `stagger` between launching requests.
    #[must_use]
    pub const fn new(client: Arc<ApiClient<C>>, stagger: Duration) -> Self {
        Self { client, stagger }
    }

    /// Launches `level` requests and waits for all of them.
    #[allow(clippy::cast_possible_truncation)]
    pub async fn run(&self, level: usize) -> CaseOutcome {
        let started = Instant::now();
        let name = concurrency_case_name(level);
        let mut tasks = JoinSet::new();

        for index in 0..level {
            if index > 0 && !self.stagger.is_zero() {
                tokio::time::sleep(self.stagger).await;
            }
            let client = Arc::clone(&self.client);
            tasks.spawn(async move { (index, client.get(QueryParams::new()).await) });
        }

        let mut problems = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, Ok(response))) if response.status_code() == 200 => {
                    debug!(call = index, "concurrent call succeeded");
                }
                Ok((index, Ok(response))) => {
                    problems.push(format!("call {index}: status {}", response.status_code()));
                }
                Ok((index, Err(e))) => problems.push(format!("call {index}: {e}")),
                Err(e) => problems.push(format!("task failed: {e}")),
            }
        }
        problems.sort();

        let outcome = if problems.is_empty() {
            info!(level, "all concurrent calls succeeded");
            CaseOutcome::pass(CaseGroup::Concurrency, name)
        } else {
            warn!(level, failures = problems.len(), "concurrent calls failed");
            CaseOutcome::fail(
                CaseGroup::Concurrency,
                name,
                format!(
                    "{} of {level} calls failed: {}",
                    problems.len(),
                    problems.join("; ")
                ),
            )
        };
        outcome.with_duration_ms(started.elapsed().as_millis() as u64)
    }
}
