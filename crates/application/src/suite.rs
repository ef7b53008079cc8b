//! Full contract suite.
//!
//! Plans every case from the catalog, narrows the plan with the run options
//! and executes it in order, collecting a [`RunReport`].

use std::sync::Arc;
use std::time::{Duration, Instant};

use cadwatch_domain::{
    ApiResponse, CaseGroup, CaseOutcome, CloseApproachBody, FilterCase, HarnessConfig,
    InvalidFilterCase, InvalidSortingCase, OrbitClass, RunReport, SortingCase,
};
use tracing::{info, warn};

use crate::contract::{
    BODY_PARAM_CASE, CaseCatalog, ConcurrencyProbe, ContractRunner, DefaultCheck, FULLNAME_CASE,
    IDEMPOTENCE_CASE, LIMIT_CASE, concurrency_case_name,
};
use crate::ports::{ClassificationLookup, Clock, HttpClient};

/// Options narrowing a suite run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteOptions {
    /// Only run the smoke groups.
    pub smoke_only: bool,
    /// Only run cases whose qualified name contains this text (case-insensitive).
    pub keywords: Option<String>,
    /// Stop at the first failed or errored case.
    pub fail_fast: bool,
}

impl SuiteOptions {
    /// Creates options that run every case.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the run to smoke groups.
    #[must_use]
    pub const fn with_smoke_only(mut self, smoke_only: bool) -> Self {
        self.smoke_only = smoke_only;
        self
    }

    /// Restricts the run to cases matching `keywords`.
    #[must_use]
    pub fn with_keywords(mut self, keywords: Option<String>) -> Self {
        self.keywords = keywords.filter(|k| !k.trim().is_empty());
        self
    }

    /// Stops the run at the first failure.
    #[must_use]
    pub const fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    fn selects(&self, case: &PlannedCase) -> bool {
        if self.smoke_only && !case.group().is_smoke() {
            return false;
        }
        self.keywords.as_ref().is_none_or(|keywords| {
            case.qualified_name()
                .to_lowercase()
                .contains(&keywords.trim().to_lowercase())
        })
    }
}

/// One scheduled check.
#[derive(Debug, Clone, PartialEq)]
pub enum PlannedCase {
    /// A check on the unfiltered response.
    Default(DefaultCheck),
    /// Two identical requests compared.
    Idempotence,
    /// `n` simultaneous requests.
    Concurrency(usize),
    /// A range filter.
    Filter(FilterCase),
    /// A malformed filter value.
    InvalidFilter(InvalidFilterCase),
    /// Orbit-class membership.
    OrbitClass(OrbitClass),
    /// Presence of the `body` column.
    Body(CloseApproachBody),
    /// `fullname=true`.
    Fullname,
    /// `body=ALL`.
    BodyParam,
    /// `limit=n`.
    Limit(usize),
    /// A supported sort key.
    Sorting(SortingCase),
    /// An unsupported sort key.
    InvalidSorting(InvalidSortingCase),
}

impl PlannedCase {
    /// Returns the group the case reports under.
    #[must_use]
    pub const fn group(&self) -> CaseGroup {
        match self {
            Self::Default(_) | Self::Idempotence => CaseGroup::DefaultResponse,
            Self::Concurrency(_) => CaseGroup::Concurrency,
            Self::Filter(_) => CaseGroup::Filter,
            Self::InvalidFilter(_) => CaseGroup::InvalidFilter,
            Self::OrbitClass(_) => CaseGroup::OrbitClass,
            Self::Body(_) => CaseGroup::Body,
            Self::Fullname | Self::BodyParam | Self::Limit(_) => CaseGroup::QueryParam,
            Self::Sorting(_) => CaseGroup::Sorting,
            Self::InvalidSorting(_) => CaseGroup::InvalidSorting,
        }
    }

    /// Returns the case name within its group.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Default(check) => check.name().to_string(),
            Self::Idempotence => IDEMPOTENCE_CASE.to_string(),
            Self::Concurrency(level) => concurrency_case_name(*level),
            Self::Filter(case) => case.name(),
            Self::InvalidFilter(case) => case.name(),
            Self::OrbitClass(class) => class.code().to_string(),
            Self::Body(body) => body.as_str().to_string(),
            Self::Fullname => FULLNAME_CASE.to_string(),
            Self::BodyParam => BODY_PARAM_CASE.to_string(),
            Self::Limit(_) => LIMIT_CASE.to_string(),
            Self::Sorting(case) => case.name(),
            Self::InvalidSorting(case) => case.name(),
        }
    }

    /// Returns `group::name`.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.group(), self.name())
    }
}

/// Runs the whole catalog against one endpoint.
pub struct ContractSuite<C, L, K> {
    runner: ContractRunner<C, L, K>,
    probe: ConcurrencyProbe<C>,
    catalog: CaseCatalog,
    concurrency_levels: Vec<usize>,
}

impl<C, L, K> ContractSuite<C, L, K>
where
    C: HttpClient + 'static,
    L: ClassificationLookup,
    K: Clock,
{
    /// Creates a suite over the standard catalog.
    pub fn new(runner: ContractRunner<C, L, K>, config: &HarnessConfig) -> Self {
        let probe = ConcurrencyProbe::new(
            Arc::new(runner.client().clone()),
            Duration::from_millis(config.stagger_ms),
        );
        Self {
            runner,
            probe,
            catalog: CaseCatalog::standard(),
            concurrency_levels: config.concurrency_levels.clone(),
        }
    }

    /// Replaces the case catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: CaseCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Lists every case in run order.
    #[must_use]
    pub fn plan(&self) -> Vec<PlannedCase> {
        let catalog = &self.catalog;
        let mut plan: Vec<PlannedCase> = DefaultCheck::all()
            .iter()
            .copied()
            .map(PlannedCase::Default)
            .collect();
        plan.push(PlannedCase::Idempotence);
        plan.extend(self.concurrency_levels.iter().copied().map(PlannedCase::Concurrency));
        plan.extend(catalog.filters.iter().cloned().map(PlannedCase::Filter));
        plan.extend(catalog.invalid_filters.iter().cloned().map(PlannedCase::InvalidFilter));
        plan.extend(catalog.orbit_classes.iter().copied().map(PlannedCase::OrbitClass));
        plan.extend(catalog.bodies.iter().copied().map(PlannedCase::Body));
        plan.push(PlannedCase::Fullname);
        plan.push(PlannedCase::BodyParam);
        plan.push(PlannedCase::Limit(catalog.limit_probe));
        plan.extend(catalog.sorting.iter().cloned().map(PlannedCase::Sorting));
        plan.extend(catalog.invalid_sorting.iter().cloned().map(PlannedCase::InvalidSorting));
        plan
    }

    /// Runs the selected cases and summarises them.
    #[allow(clippy::cast_possible_truncation)]
    pub async fn run(&self, options: &SuiteOptions) -> RunReport {
        let started_at = self.runner.clock().now();
        let started = Instant::now();
        let selected: Vec<_> = self
            .plan()
            .into_iter()
            .filter(|case| options.selects(case))
            .collect();
        info!(cases = selected.len(), endpoint = %self.runner.client().endpoint(), "starting run");

        let mut default_response: Option<Result<ApiResponse, String>> = None;
        let mut outcomes = Vec::with_capacity(selected.len());

        for case in &selected {
            let outcome = match case {
                PlannedCase::Default(check) => {
                    let fetched = match default_response.take() {
                        Some(fetched) => fetched,
                        None => self.runner.fetch_default().await.map_err(|e| e.to_string()),
                    };
                    let outcome = match &fetched {
                        Ok(response) => self.runner.check_default(*check, response),
                        Err(message) => {
                            CaseOutcome::error(case.group(), case.name(), message.clone())
                        }
                    };
                    default_response = Some(fetched);
                    outcome
                }
                PlannedCase::Idempotence => self.runner.check_idempotence().await,
                PlannedCase::Concurrency(level) => self.probe.run(*level).await,
                PlannedCase::Filter(filter) => self.runner.check_filter(filter).await,
                PlannedCase::InvalidFilter(filter) => {
                    self.runner.check_invalid_filter(filter).await
                }
                PlannedCase::OrbitClass(class) => self.runner.check_orbit_class(*class).await,
                PlannedCase::Body(body) => self.runner.check_body(*body).await,
                PlannedCase::Fullname => self.runner.check_fullname().await,
                PlannedCase::BodyParam => self.runner.check_body_param().await,
                PlannedCase::Limit(limit) => self.runner.check_limit(*limit).await,
                PlannedCase::Sorting(sorting) => self.runner.check_sorting(sorting).await,
                PlannedCase::InvalidSorting(sorting) => {
                    self.runner.check_invalid_sorting(sorting).await
                }
            };
            let stop = options.fail_fast && outcome.status.is_failure();
            outcomes.push(outcome);
            if stop {
                warn!(case = %case.qualified_name(), "stopping at first failure");
                break;
            }
        }

        let report = RunReport::new(
            started_at,
            outcomes,
            started.elapsed().as_millis() as u64,
        );
        info!(
            total = report.total,
            passed = report.passed,
            failed = report.failed,
            skipped = report.skipped,
            errored = report.errored,
            "run finished"
        );
        report
    }
}
