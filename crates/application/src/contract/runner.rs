//! Contract checks.
//!
//! Each check issues its request, projects the response into a table and
//! compares what came back with what the case promises. Contract violations
//! become `Failed` outcomes, live-data gaps become `Skipped`, and transport or
//! decoding problems become `Errored`.

use std::fmt;
use std::time::Instant;

use cadwatch_domain::contract::first_order_violation;
use cadwatch_domain::{
    ApiResponse, CaseGroup, CaseOutcome, CloseApproachBody, DomainError, FilterCase,
    HarnessConfig, InvalidFilterCase, InvalidSortingCase, OrbitClass, QueryParams, Scalar,
    Selector, SortingCase, Table, ValueKind,
};
use chrono::TimeDelta;
use tracing::{info, warn};

use crate::api_client::ApiClient;
use crate::error::ApplicationError;
use crate::ports::{ClassificationLookup, Clock, HttpClient};

/// `signature.source` reported by the close-approach API.
pub const EXPECTED_SOURCE: &str = "NASA/JPL SBDB Close Approach Data API";
/// `signature.version` this harness was written against.
pub const EXPECTED_VERSION: &str = "1.1";
/// Largest distance, in AU, returned without a distance filter.
pub const DEFAULT_MAX_DIST_AU: f64 = 0.05;
/// Width of the default date window, in days.
pub const DEFAULT_WINDOW_DAYS: i64 = 61;

const BODY_PREVIEW_CHARS: usize = 100;

/// Why a check did not pass.
#[derive(Debug)]
enum CaseError {
    Violation(String),
    Skip(String),
    Application(ApplicationError),
}

impl From<ApplicationError> for CaseError {
    fn from(error: ApplicationError) -> Self {
        Self::Application(error)
    }
}

impl From<DomainError> for CaseError {
    fn from(error: DomainError) -> Self {
        Self::Application(ApplicationError::Domain(error))
    }
}

type CaseResult = Result<(), CaseError>;

fn violation(message: impl Into<String>) -> CaseError {
    CaseError::Violation(message.into())
}

/// Checks made on the unfiltered response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultCheck {
    /// Status is 200.
    ResponseCode,
    /// Signature, count, fields and data are well-formed.
    ResponseStructure,
    /// At least one close approach is returned.
    HasResults,
    /// Every `cd` lies in the default date window.
    WithinWindow,
    /// Every `dist` is at most 0.05 AU.
    WithinDistance,
    /// `cd` is non-descending.
    DefaultSorting,
}

impl DefaultCheck {
    /// Returns all default checks in run order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::ResponseCode,
            Self::ResponseStructure,
            Self::HasResults,
            Self::WithinWindow,
            Self::WithinDistance,
            Self::DefaultSorting,
        ]
    }

    /// Returns the case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ResponseCode => "response_code",
            Self::ResponseStructure => "response_structure",
            Self::HasResults => "response_has_results",
            Self::WithinWindow => "results_within_60_days",
            Self::WithinDistance => "results_within_0_05au",
            Self::DefaultSorting => "default_sorting",
        }
    }
}

impl fmt::Display for DefaultCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name of the repeated-request check.
pub const IDEMPOTENCE_CASE: &str = "idempotent_get";
/// Name of the `fullname` query-parameter check.
pub const FULLNAME_CASE: &str = "query_param_fullname";
/// Name of the `body=ALL` query-parameter check.
pub const BODY_PARAM_CASE: &str = "query_param_body";
/// Name of the `limit` query-parameter check.
pub const LIMIT_CASE: &str = "query_param_limit";

/// Runs individual contract checks against one endpoint.
pub struct ContractRunner<C, L, K> {
    client: ApiClient<C>,
    lookup: L,
    clock: K,
    sample_limit: usize,
    class_window_start: String,
}

impl<C, L, K> ContractRunner<C, L, K>
where
    C: HttpClient,
    L: ClassificationLookup,
    K: Clock,
{
    /// Creates a runner.
    pub fn new(client: ApiClient<C>, lookup: L, clock: K, config: &HarnessConfig) -> Self {
        Self {
            client,
            lookup,
            clock,
            sample_limit: config.sample_limit,
            class_window_start: config.class_window_start.clone(),
        }
    }

    /// Returns the client under test.
    #[must_use]
    pub const fn client(&self) -> &ApiClient<C> {
        &self.client
    }

    /// Returns the clock used to anchor date windows.
    #[must_use]
    pub const fn clock(&self) -> &K {
        &self.clock
    }

    /// Fetches the unfiltered response shared by the default checks.
    ///
    /// # Errors
    ///
    /// Returns a transport or parse error.
    pub async fn fetch_default(&self) -> Result<ApiResponse, ApplicationError> {
        self.client.get(QueryParams::new()).await
    }

    /// Runs one default check against a fetched response.
    #[must_use]
    pub fn check_default(&self, check: DefaultCheck, response: &ApiResponse) -> CaseOutcome {
        let started = Instant::now();
        let result = match check {
            DefaultCheck::ResponseCode => require_ok(response),
            DefaultCheck::ResponseStructure => Self::default_structure(response),
            DefaultCheck::HasResults => Self::default_has_results(response),
            DefaultCheck::WithinWindow => self.default_window(response),
            DefaultCheck::WithinDistance => Self::default_distance(response),
            DefaultCheck::DefaultSorting => Self::default_sorting(response),
        };
        finish(CaseGroup::DefaultResponse, check.name(), started, result)
    }

    /// Issues the same request twice and compares `fields` and `data`.
    pub async fn check_idempotence(&self) -> CaseOutcome {
        let started = Instant::now();
        let result = self.idempotence().await;
        finish(CaseGroup::DefaultResponse, IDEMPOTENCE_CASE, started, result)
    }

    /// Checks a range filter.
    pub async fn check_filter(&self, case: &FilterCase) -> CaseOutcome {
        let started = Instant::now();
        let result = self.filter(case).await;
        finish(CaseGroup::Filter, case.name(), started, result)
    }

    /// Checks that a malformed filter value is rejected.
    pub async fn check_invalid_filter(&self, case: &InvalidFilterCase) -> CaseOutcome {
        let started = Instant::now();
        let result = self
            .expect_status(case.params(), case.expected_status)
            .await;
        finish(CaseGroup::InvalidFilter, case.name(), started, result)
    }

    /// Checks that an orbit-class filter only returns objects of that class.
    pub async fn check_orbit_class(&self, class: OrbitClass) -> CaseOutcome {
        let started = Instant::now();
        let result = self.orbit_class(class).await;
        finish(CaseGroup::OrbitClass, class.code(), started, result)
    }

    /// Checks that the `body` column appears only for `body=ALL`.
    pub async fn check_body(&self, body: CloseApproachBody) -> CaseOutcome {
        let started = Instant::now();
        let result = self.body(body).await;
        finish(CaseGroup::Body, body.as_str(), started, result)
    }

    /// Checks that `fullname=true` adds a populated `fullname` column.
    pub async fn check_fullname(&self) -> CaseOutcome {
        let started = Instant::now();
        let result = self
            .populated_column(QueryParams::new().with("fullname", "true"), "fullname")
            .await;
        finish(CaseGroup::QueryParam, FULLNAME_CASE, started, result)
    }

    /// Checks that `body=ALL` adds a populated `body` column.
    pub async fn check_body_param(&self) -> CaseOutcome {
        let started = Instant::now();
        let result = self
            .populated_column(
                QueryParams::new().with("body", CloseApproachBody::All),
                "body",
            )
            .await;
        finish(CaseGroup::QueryParam, BODY_PARAM_CASE, started, result)
    }

    /// Checks that `limit=n` yields `count == n`.
    pub async fn check_limit(&self, limit: usize) -> CaseOutcome {
        let started = Instant::now();
        let result = self.limit(limit).await;
        finish(CaseGroup::QueryParam, LIMIT_CASE, started, result)
    }

    /// Checks that a sort key orders its column.
    pub async fn check_sorting(&self, case: &SortingCase) -> CaseOutcome {
        let started = Instant::now();
        let result = self.sorting(case).await;
        finish(CaseGroup::Sorting, case.name(), started, result)
    }

    /// Checks that an unsupported sort key is rejected.
    pub async fn check_invalid_sorting(&self, case: &InvalidSortingCase) -> CaseOutcome {
        let started = Instant::now();
        let result = self
            .expect_status(case.params(), case.expected_status)
            .await;
        finish(CaseGroup::InvalidSorting, case.name(), started, result)
    }

    fn default_structure(response: &ApiResponse) -> CaseResult {
        require_ok(response)?;
        let signature = response
            .signature()
            .ok_or_else(|| violation("signature block missing"))?;
        if signature.source != EXPECTED_SOURCE || signature.version != EXPECTED_VERSION {
            return Err(violation(format!(
                "signature mismatch: expected '{EXPECTED_SOURCE}' v{EXPECTED_VERSION}, \
                 got '{}' v{}",
                signature.source, signature.version
            )));
        }
        let count = response.count()?;
        if count < 0 {
            return Err(violation(format!("count is negative: {count}")));
        }
        if count > 0 {
            let has_fields = response.fields().is_some_and(|f| !f.is_empty());
            let has_data = response.data().is_some_and(|d| !d.is_empty());
            if !has_fields || !has_data {
                return Err(violation(format!(
                    "count is {count} but fields or data is empty"
                )));
            }
        }
        Ok(())
    }

    fn default_has_results(response: &ApiResponse) -> CaseResult {
        require_ok(response)?;
        let count = response.count()?;
        if count > 0 {
            Ok(())
        } else {
            Err(violation(format!("expected results, count is {count}")))
        }
    }

    // One day of slack on the lower edge absorbs the service's time zone.
    fn default_window(&self, response: &ApiResponse) -> CaseResult {
        let table = require_table(response)?;
        let dates = column_scalars(&table, "cd", ValueKind::Date)?;
        let window_start = self.clock.now().date_naive() - TimeDelta::days(1);
        let window_end = window_start + TimeDelta::days(DEFAULT_WINDOW_DAYS);

        let earliest = pick(Selector::Min, &dates, "cd")?;
        let latest = pick(Selector::Max, &dates, "cd")?;
        let (earliest, latest) = match (earliest.as_date(), latest.as_date()) {
            (Some(e), Some(l)) => (e.date(), l.date()),
            _ => return Err(violation("'cd' values are not dates")),
        };
        if earliest < window_start {
            return Err(violation(format!(
                "earliest cd {earliest} is before {window_start}"
            )));
        }
        if latest > window_end {
            return Err(violation(format!("latest cd {latest} is after {window_end}")));
        }
        Ok(())
    }

    fn default_distance(response: &ApiResponse) -> CaseResult {
        let table = require_table(response)?;
        let distances = column_scalars(&table, "dist", ValueKind::Number)?;
        let farthest = pick(Selector::Max, &distances, "dist")?;
        if farthest <= Scalar::Number(DEFAULT_MAX_DIST_AU) {
            Ok(())
        } else {
            Err(violation(format!(
                "farthest dist {farthest} exceeds {DEFAULT_MAX_DIST_AU} au"
            )))
        }
    }

    fn default_sorting(response: &ApiResponse) -> CaseResult {
        let table = require_table(response)?;
        let dates = column_scalars(&table, "cd", ValueKind::Date)?;
        require_sorted(&dates, false)
    }

    async fn idempotence(&self) -> CaseResult {
        let params = QueryParams::new().with("limit", self.sample_limit);
        let first = self.client.get(params.clone()).await?;
        let second = self.client.get(params).await?;
        require_ok(&first)?;
        require_ok(&second)?;
        if first.fields() == second.fields() && first.data() == second.data() {
            Ok(())
        } else {
            Err(CaseError::Skip(
                "responses differed between identical requests; source data changed".to_string(),
            ))
        }
    }

    async fn filter(&self, case: &FilterCase) -> CaseResult {
        let response = self.client.get(case.params()).await?;
        let table = require_table(&response)?;
        let values = column_scalars(&table, &case.impact_column, case.kind())?;
        let actual = pick(case.selector, &values, &case.impact_column)?;
        if case.operator.holds(&actual, &case.expected_bound) {
            Ok(())
        } else {
            Err(violation(format!(
                "{} of '{}' is {}, expected {} {}",
                case.selector.as_str(),
                case.impact_column,
                actual,
                case.operator.symbol(),
                case.expected_bound
            )))
        }
    }

    async fn expect_status(&self, params: QueryParams, expected: u16) -> CaseResult {
        let response = self.client.get(params).await?;
        let actual = response.status_code();
        if actual == expected {
            Ok(())
        } else {
            Err(violation(format!(
                "HTTP status is not as expected: expected {expected}, got {actual}"
            )))
        }
    }

    fn window_params(&self) -> QueryParams {
        QueryParams::new()
            .with("limit", self.sample_limit)
            .with("date-min", &self.class_window_start)
    }

    async fn orbit_class(&self, class: OrbitClass) -> CaseResult {
        let mut params = QueryParams::new().with("class", class.code());
        for param in self.window_params().iter() {
            params.add(param.clone());
        }
        let response = self.client.get(params).await?;
        let table = require_table(&response)?;
        if table.is_empty() {
            return Err(CaseError::Skip(format!(
                "{} ({}) designations are not seen in the queried timeframe",
                class.code(),
                class.description()
            )));
        }
        let designations = table
            .column("des")
            .ok_or_else(|| violation("column 'des' missing from response"))?;

        let mut mismatches = Vec::new();
        for (row, des) in designations.texts().into_iter().enumerate() {
            let Some(des) = des.map(str::trim).filter(|d| !d.is_empty()) else {
                mismatches.push(format!("row {row} has no designation"));
                continue;
            };
            let actual = self.lookup.orbit_class(des).await?;
            if actual.as_deref() != Some(class.code()) {
                mismatches.push(format!("{des}={}", actual.as_deref().unwrap_or("unknown")));
            }
        }
        if mismatches.is_empty() {
            Ok(())
        } else {
            Err(violation(format!(
                "expected every designation to be {}, got {}",
                class.code(),
                mismatches.join(", ")
            )))
        }
    }

    async fn body(&self, body: CloseApproachBody) -> CaseResult {
        let mut params = QueryParams::new().with("body", body);
        for param in self.window_params().iter() {
            params.add(param.clone());
        }
        let response = self.client.get(params).await?;
        let table = require_table(&response)?;
        let present = table.has_column("body");
        match (body.reports_body_column(), present) {
            (true, false) => Err(violation("'body' column missing from response")),
            (false, true) => Err(violation(format!(
                "'body' column unexpected for body={body}"
            ))),
            _ => Ok(()),
        }
    }

    async fn populated_column(&self, params: QueryParams, column: &str) -> CaseResult {
        let response = self.client.get(params).await?;
        let table = require_table(&response)?;
        let values = table
            .column(column)
            .ok_or_else(|| violation(format!("column '{column}' missing from response")))?;
        if values.has_content() {
            Ok(())
        } else {
            Err(violation(format!("column '{column}' is empty")))
        }
    }

    async fn limit(&self, limit: usize) -> CaseResult {
        let response = self.client.get(QueryParams::new().with("limit", limit)).await?;
        require_ok(&response)?;
        let count = response.count()?;
        if usize::try_from(count).is_ok_and(|c| c == limit) {
            Ok(())
        } else {
            Err(violation(format!("expected count {limit}, got {count}")))
        }
    }

    async fn sorting(&self, case: &SortingCase) -> CaseResult {
        let response = self.client.get(case.params(self.sample_limit)).await?;
        let table = require_table(&response)?;
        if table.row_count() > self.sample_limit {
            return Err(violation(format!(
                "limit {} ignored: {} rows returned",
                self.sample_limit,
                table.row_count()
            )));
        }
        let values = column_scalars(&table, &case.result_column, case.kind())?;
        require_sorted(&values, case.descending)
    }
}

fn require_ok(response: &ApiResponse) -> CaseResult {
    if response.status_code() == 200 {
        return Ok(());
    }
    let preview: String = response.raw_body().chars().take(BODY_PREVIEW_CHARS).collect();
    Err(violation(format!(
        "status mismatch: expected 200, got {}: {preview}",
        response.status_code()
    )))
}

fn require_table(response: &ApiResponse) -> Result<Table, CaseError> {
    require_ok(response)?;
    Ok(Table::from_response(response)?)
}

fn column_scalars(table: &Table, column: &str, kind: ValueKind) -> Result<Vec<Scalar>, CaseError> {
    let values = table
        .column(column)
        .ok_or_else(|| violation(format!("column '{column}' missing from response")))?;
    Ok(values.scalars(kind)?)
}

fn pick(selector: Selector, values: &[Scalar], column: &str) -> Result<Scalar, CaseError> {
    selector
        .select(values)
        .ok_or_else(|| violation(format!("no '{column}' values to compare")))
}

fn require_sorted(values: &[Scalar], descending: bool) -> CaseResult {
    match first_order_violation(values, descending) {
        None => Ok(()),
        Some(i) => Err(violation(format!(
            "Not sorted as expected: {} followed by {} at position {i} ({})",
            values[i - 1],
            values[i],
            if descending { "descending" } else { "ascending" }
        ))),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn finish(
    group: CaseGroup,
    name: impl Into<String>,
    started: Instant,
    result: CaseResult,
) -> CaseOutcome {
    let name = name.into();
    let outcome = match result {
        Ok(()) => CaseOutcome::pass(group, name),
        Err(CaseError::Violation(message)) => CaseOutcome::fail(group, name, message),
        Err(CaseError::Skip(reason)) => CaseOutcome::skip(group, name, reason),
        Err(CaseError::Application(error)) => CaseOutcome::error(group, name, error.to_string()),
    }
    .with_duration_ms(started.elapsed().as_millis() as u64);

    match &outcome.message {
        None => info!(group = %outcome.group, case = %outcome.name, "passed"),
        Some(message) => warn!(
            group = %outcome.group,
            case = %outcome.name,
            status = outcome.status.label(),
            "{message}"
        ),
    }
    outcome
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::fakes::{FixedClock, ScriptedHttp, StaticLookup, cad_body, row};
    use crate::ports::HttpClientError;
    use cadwatch_domain::{CaseStatus, ComparisonOperator, Endpoint};
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use std::sync::Arc;

    fn rows() -> Vec<Value> {
        vec![
            row("2024 TP7", "2026-Oct-20 03:14", "0.012", "24.1"),
            row("2019 XY", "2026-Nov-02 11:00", "0.049", "21.7"),
            row("433", "2026-Dec-01 00:05", "0.030", "10.4"),
        ]
    }

    fn runner(http: ScriptedHttp) -> ContractRunner<ScriptedHttp, StaticLookup, FixedClock> {
        runner_with(http, StaticLookup::default())
    }

    fn runner_with(
        http: ScriptedHttp,
        lookup: StaticLookup,
    ) -> ContractRunner<ScriptedHttp, StaticLookup, FixedClock> {
        let client = ApiClient::for_endpoint(
            Arc::new(http),
            "https://example.test/",
            Endpoint::CloseApproach,
        )
        .unwrap();
        ContractRunner::new(
            client,
            lookup,
            FixedClock::on(2026, 10, 19),
            &HarnessConfig::default(),
        )
    }

    fn decoded(body: &str) -> ApiResponse {
        ApiResponse::from_parts(200, body).unwrap()
    }

    #[test]
    fn test_default_checks_pass_on_well_formed_response() {
        let runner = runner(ScriptedHttp::fixed(200, ""));
        let response = decoded(&cad_body(&rows()));

        for check in DefaultCheck::all() {
            let outcome = runner.check_default(*check, &response);
            assert_eq!(outcome.status, CaseStatus::Passed, "{check}: {:?}", outcome.message);
            assert_eq!(outcome.group, CaseGroup::DefaultResponse);
        }
    }

    #[test]
    fn test_signature_version_mismatch_fails_structure() {
        let runner = runner(ScriptedHttp::fixed(200, ""));
        let body = cad_body(&rows()).replace("\"1.1\"", "\"1.2\"");

        let outcome = runner.check_default(DefaultCheck::ResponseStructure, &decoded(&body));
        assert_eq!(outcome.status, CaseStatus::Failed);
        assert!(outcome.message.unwrap().contains("signature mismatch"));
    }

    #[test]
    fn test_non_200_fails_response_code_with_preview() {
        let runner = runner(ScriptedHttp::fixed(200, ""));
        let response =
            ApiResponse::from_parts(503, r#"{"message": "service unavailable"}"#).unwrap();

        let outcome = runner.check_default(DefaultCheck::ResponseCode, &response);
        assert_eq!(outcome.status, CaseStatus::Failed);
        let message = outcome.message.unwrap();
        assert!(message.contains("503"));
        assert!(message.contains("service unavailable"));
    }

    #[test]
    fn test_window_rejects_late_approach() {
        let runner = runner(ScriptedHttp::fixed(200, ""));
        let mut late = rows();
        late.push(row("2020 AB", "2027-Jan-05 00:00", "0.01", "25.0"));

        let outcome = runner.check_default(DefaultCheck::WithinWindow, &decoded(&cad_body(&late)));
        assert_eq!(outcome.status, CaseStatus::Failed);
        assert!(outcome.message.unwrap().contains("2027-01-05"));
    }

    #[test]
    fn test_window_tolerates_previous_day() {
        let runner = runner(ScriptedHttp::fixed(200, ""));
        let early = vec![row("2024 TP7", "2026-Oct-18 23:59", "0.012", "24.1")];

        let outcome = runner.check_default(DefaultCheck::WithinWindow, &decoded(&cad_body(&early)));
        assert_eq!(outcome.status, CaseStatus::Passed);
    }

    #[test]
    fn test_window_rejects_approach_before_previous_day() {
        let runner = runner(ScriptedHttp::fixed(200, ""));
        let mut stale = rows();
        stale.insert(0, row("2021 QQ", "2026-Oct-17 23:00", "0.02", "23.0"));

        let outcome =
            runner.check_default(DefaultCheck::WithinWindow, &decoded(&cad_body(&stale)));
        assert_eq!(outcome.status, CaseStatus::Failed);
        assert_eq!(
            outcome.message.as_deref(),
            Some("earliest cd 2026-10-17 is before 2026-10-18")
        );
    }

    #[test]
    fn test_distance_and_sorting_violations() {
        let runner = runner(ScriptedHttp::fixed(200, ""));
        let bad = vec![
            row("2019 XY", "2026-Nov-02 11:00", "0.051", "21.7"),
            row("2024 TP7", "2026-Oct-20 03:14", "0.012", "24.1"),
        ];
        let response = decoded(&cad_body(&bad));

        let distance = runner.check_default(DefaultCheck::WithinDistance, &response);
        assert_eq!(distance.status, CaseStatus::Failed);

        let sorting = runner.check_default(DefaultCheck::DefaultSorting, &response);
        assert_eq!(sorting.status, CaseStatus::Failed);
        assert!(sorting.message.unwrap().starts_with("Not sorted as expected"));
    }

    #[test]
    fn test_empty_default_response_fails_has_results() {
        let runner = runner(ScriptedHttp::fixed(200, ""));
        let outcome = runner.check_default(DefaultCheck::HasResults, &decoded(&cad_body(&[])));
        assert_eq!(outcome.status, CaseStatus::Failed);
    }

    #[tokio::test]
    async fn test_idempotence_skips_when_data_moves() {
        let http = ScriptedHttp::new(|_, call| {
            let mut data = vec![row("2024 TP7", "2026-Oct-20 03:14", "0.012", "24.1")];
            if call > 0 {
                data.push(row("2026 UA", "2026-Oct-21 00:00", "0.002", "28.0"));
            }
            Ok((200, cad_body(&data)))
        });

        let outcome = runner(http).check_idempotence().await;
        assert_eq!(outcome.status, CaseStatus::Skipped);
    }

    #[tokio::test]
    async fn test_idempotence_passes_on_identical_responses() {
        let outcome = runner(ScriptedHttp::fixed(200, cad_body(&rows())))
            .check_idempotence()
            .await;
        assert_eq!(outcome.status, CaseStatus::Passed);
    }

    #[tokio::test]
    async fn test_lunar_distance_filter() {
        let case = FilterCase::new(
            "dist-min",
            "10LD",
            "dist",
            Selector::Min,
            ComparisonOperator::GreaterThanOrEqual,
            Scalar::Number(10.0 * cadwatch_domain::AU_PER_LUNAR_DISTANCE),
        );
        let http = ScriptedHttp::new(|request, _| {
            assert_eq!(request.params.get("dist-min"), Some("10LD"));
            Ok((
                200,
                cad_body(&[
                    row("2019 XY", "2026-Nov-02 11:00", "0.0300", "21.7"),
                    row("433", "2026-Dec-01 00:05", "0.0257", "10.4"),
                ]),
            ))
        });
        let runner = runner(http);

        let outcome = runner.check_filter(&case).await;
        assert_eq!(outcome.status, CaseStatus::Passed, "{:?}", outcome.message);
        assert_eq!(outcome.group, CaseGroup::Filter);
        assert_eq!(outcome.name, case.name());
    }

    #[tokio::test]
    async fn test_filter_reports_violating_value() {
        let case = FilterCase::new(
            "h-max",
            20,
            "h",
            Selector::Max,
            ComparisonOperator::LessThanOrEqual,
            Scalar::Number(20.0),
        );
        let outcome = runner(ScriptedHttp::fixed(200, cad_body(&rows())))
            .check_filter(&case)
            .await;

        assert_eq!(outcome.status, CaseStatus::Failed);
        assert_eq!(
            outcome.message.as_deref(),
            Some("max of 'h' is 24.1, expected <= 20")
        );
    }

    #[tokio::test]
    async fn test_filter_fails_on_bad_request() {
        let case = FilterCase::new(
            "h-min",
            10,
            "h",
            Selector::Min,
            ComparisonOperator::GreaterThanOrEqual,
            Scalar::Number(10.0),
        );
        let outcome = runner(ScriptedHttp::fixed(400, r#"{"message": "invalid value"}"#))
            .check_filter(&case)
            .await;

        assert_eq!(outcome.status, CaseStatus::Failed);
        assert!(outcome.message.unwrap().starts_with("status mismatch"));
    }

    #[tokio::test]
    async fn test_filter_missing_impact_column_fails() {
        let case = FilterCase::new(
            "v-inf-max",
            15,
            "v_inf",
            Selector::Max,
            ComparisonOperator::LessThanOrEqual,
            Scalar::Number(15.0),
        );
        let body = r#"{"count": "1", "fields": ["des"], "data": [["433"]]}"#;
        let outcome = runner(ScriptedHttp::fixed(200, body)).check_filter(&case).await;
        assert_eq!(outcome.status, CaseStatus::Failed);
    }

    #[tokio::test]
    async fn test_misaligned_rows_are_errors() {
        let case = FilterCase::new(
            "h-min",
            10,
            "h",
            Selector::Min,
            ComparisonOperator::GreaterThanOrEqual,
            Scalar::Number(10.0),
        );
        let body = r#"{"count": "1", "fields": ["des", "h"], "data": [["433"]]}"#;
        let outcome = runner(ScriptedHttp::fixed(200, body)).check_filter(&case).await;
        assert_eq!(outcome.status, CaseStatus::Errored);
    }

    #[tokio::test]
    async fn test_invalid_filter_expects_400() {
        let case = InvalidFilterCase::bad_request("h-min", "4g");

        let rejected = runner(ScriptedHttp::fixed(400, "{}"))
            .check_invalid_filter(&case)
            .await;
        assert_eq!(rejected.status, CaseStatus::Passed);

        let accepted = runner(ScriptedHttp::fixed(200, cad_body(&rows())))
            .check_invalid_filter(&case)
            .await;
        assert_eq!(accepted.status, CaseStatus::Failed);
        assert_eq!(
            accepted.message.as_deref(),
            Some("HTTP status is not as expected: expected 400, got 200")
        );
    }

    #[tokio::test]
    async fn test_orbit_class_membership() {
        let http = ScriptedHttp::new(|request, _| {
            assert_eq!(request.params.get("class"), Some("APO"));
            assert_eq!(request.params.get("date-min"), Some("1900-01-01"));
            assert_eq!(request.params.get("limit"), Some("5"));
            Ok((
                200,
                cad_body(&[
                    row("2019 XY", "1950-Jan-01 00:00", "0.01", "21.7"),
                    row("433", "1975-Jan-23 00:00", "0.15", "10.4"),
                ]),
            ))
        });
        let lookup = StaticLookup::default()
            .with("2019 XY", "APO")
            .with("433", "AMO");

        let outcome = runner_with(http, lookup)
            .check_orbit_class(OrbitClass::Apo)
            .await;
        assert_eq!(outcome.status, CaseStatus::Failed);
        assert_eq!(outcome.name, "APO");
        assert!(outcome.message.unwrap().contains("433=AMO"));
    }

    #[tokio::test]
    async fn test_orbit_class_without_rows_is_skipped() {
        let lookup = StaticLookup::default();
        let runner = runner_with(ScriptedHttp::fixed(200, cad_body(&[])), lookup);

        let outcome = runner.check_orbit_class(OrbitClass::Hyp).await;
        assert_eq!(outcome.status, CaseStatus::Skipped);
        assert!(outcome.message.unwrap().starts_with("HYP (Hyperbolic comet"));
    }

    #[tokio::test]
    async fn test_orbit_class_unknown_designation_fails() {
        let http = ScriptedHttp::fixed(
            200,
            cad_body(&[row("1999 ZZ", "1950-Jan-01 00:00", "0.01", "21.7")]),
        );
        let outcome = runner(http).check_orbit_class(OrbitClass::Ate).await;
        assert_eq!(outcome.status, CaseStatus::Failed);
        assert!(outcome.message.unwrap().contains("1999 ZZ=unknown"));
    }

    #[tokio::test]
    async fn test_orbit_class_rows_without_designation_fail() {
        let mut unnamed = row("2019 XY", "1950-Jan-01 00:00", "0.01", "21.7");
        unnamed[0] = Value::Null;
        let mut blank = row("433", "1975-Jan-23 00:00", "0.15", "10.4");
        blank[0] = Value::String("  ".to_string());
        let http = ScriptedHttp::fixed(200, cad_body(&[unnamed, blank]));

        let outcome = runner(http).check_orbit_class(OrbitClass::Ate).await;
        assert_eq!(outcome.status, CaseStatus::Failed);
        let message = outcome.message.unwrap();
        assert!(message.contains("row 0 has no designation"), "{message}");
        assert!(message.contains("row 1 has no designation"), "{message}");
    }

    #[tokio::test]
    async fn test_body_column_presence() {
        let plain = cad_body(&rows());
        let mars = runner(ScriptedHttp::fixed(200, plain.clone()))
            .check_body(CloseApproachBody::Mars)
            .await;
        assert_eq!(mars.status, CaseStatus::Passed);

        let all = runner(ScriptedHttp::fixed(200, plain))
            .check_body(CloseApproachBody::All)
            .await;
        assert_eq!(all.status, CaseStatus::Failed);
        assert_eq!(all.name, "ALL");
    }

    #[tokio::test]
    async fn test_fullname_param_requires_populated_column() {
        let body = r#"{
            "count": "1",
            "fields": ["des", "fullname"],
            "data": [["433", "   433 Eros (A898 PA)"]]
        }"#;
        let outcome = runner(ScriptedHttp::fixed(200, body)).check_fullname().await;
        assert_eq!(outcome.status, CaseStatus::Passed);

        let outcome = runner(ScriptedHttp::fixed(200, cad_body(&rows())))
            .check_fullname()
            .await;
        assert_eq!(outcome.status, CaseStatus::Failed);
    }

    #[tokio::test]
    async fn test_limit_param() {
        let http = ScriptedHttp::new(|request, _| {
            assert_eq!(request.params.get("limit"), Some("15"));
            Ok((200, r#"{"count": "15"}"#.to_string()))
        });
        let outcome = runner(http).check_limit(15).await;
        assert_eq!(outcome.status, CaseStatus::Passed);

        let outcome = runner(ScriptedHttp::fixed(200, r#"{"count": 14}"#))
            .check_limit(15)
            .await;
        assert_eq!(outcome.status, CaseStatus::Failed);
    }

    #[tokio::test]
    async fn test_descending_magnitude_sort() {
        let sorted = cad_body(&[
            row("2024 TP7", "2026-Oct-20 03:14", "0.012", "24.1"),
            row("2019 XY", "2026-Nov-02 11:00", "0.049", "21.7"),
            row("433", "2026-Dec-01 00:05", "0.030", "10.4"),
        ]);
        let http = ScriptedHttp::new(move |request, _| {
            assert_eq!(request.params.get("sort"), Some("-h"));
            assert_eq!(request.params.get("limit"), Some("5"));
            Ok((200, sorted.clone()))
        });

        let outcome = runner(http).check_sorting(&SortingCase::new("h", "-h")).await;
        assert_eq!(outcome.status, CaseStatus::Passed, "{:?}", outcome.message);
        assert_eq!(outcome.group, CaseGroup::Sorting);
    }

    #[tokio::test]
    async fn test_sort_skips_null_and_blank_cells() {
        let mut missing = row("2019 XY", "2026-Nov-02 11:00", "0.049", "");
        missing[10] = Value::Null;
        let body = cad_body(&[
            row("2024 TP7", "2026-Oct-20 03:14", "0.012", "24.1"),
            missing,
            row("2020 AB", "2026-Nov-05 00:00", "0.020", "  "),
            row("433", "2026-Dec-01 00:05", "0.030", "10.4"),
        ]);

        let outcome = runner(ScriptedHttp::fixed(200, body))
            .check_sorting(&SortingCase::new("h", "-h"))
            .await;
        assert_eq!(outcome.status, CaseStatus::Passed, "{:?}", outcome.message);
    }

    #[tokio::test]
    async fn test_sort_ignoring_limit_fails() {
        let many: Vec<_> = (0..6)
            .map(|i| row("433", "2026-Oct-20 03:14", &format!("0.0{i}"), "10.0"))
            .collect();
        let outcome = runner(ScriptedHttp::fixed(200, cad_body(&many)))
            .check_sorting(&SortingCase::new("dist", "dist"))
            .await;
        assert_eq!(outcome.status, CaseStatus::Failed);
        assert!(outcome.message.unwrap().contains("limit 5 ignored"));
    }

    #[tokio::test]
    async fn test_invalid_sorting() {
        let outcome = runner(ScriptedHttp::fixed(400, "{}"))
            .check_invalid_sorting(&InvalidSortingCase::bad_request("-body"))
            .await;
        assert_eq!(outcome.status, CaseStatus::Passed);
        assert_eq!(outcome.name, "-body");
    }

    #[tokio::test]
    async fn test_transport_failure_is_errored() {
        let http = ScriptedHttp::new(|_, _| {
            Err(HttpClientError::Timeout { timeout_ms: 30_000 })
        });
        let outcome = runner(http).check_limit(15).await;
        assert_eq!(outcome.status, CaseStatus::Errored);
        assert!(outcome.message.unwrap().contains("timed out"));
    }
}
