//! Filter and sorting case definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::request::QueryParams;
use crate::value::{Scalar, ValueKind};

/// Groups of cases, used for selection and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseGroup {
    /// Checks on the unfiltered response.
    DefaultResponse,
    /// Parallel unauthenticated load.
    Concurrency,
    /// Date and numeric range filters.
    Filter,
    /// Orbit-class membership filters.
    OrbitClass,
    /// Reference-body filters.
    Body,
    /// Malformed filter values.
    InvalidFilter,
    /// Single query parameters (`fullname`, `body`, `limit`).
    QueryParam,
    /// Sort keys.
    Sorting,
    /// Unsupported sort keys.
    InvalidSorting,
}

impl CaseGroup {
    /// Returns all groups in run order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::DefaultResponse,
            Self::Concurrency,
            Self::Filter,
            Self::OrbitClass,
            Self::Body,
            Self::InvalidFilter,
            Self::QueryParam,
            Self::Sorting,
            Self::InvalidSorting,
        ]
    }

    /// Returns true for the quick smoke subset.
    #[must_use]
    pub const fn is_smoke(self) -> bool {
        matches!(self, Self::DefaultResponse | Self::Concurrency)
    }

    /// Returns the group label used in case names and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DefaultResponse => "default_response",
            Self::Concurrency => "concurrency",
            Self::Filter => "filter",
            Self::OrbitClass => "orbit_class",
            Self::Body => "body",
            Self::InvalidFilter => "invalid_filter",
            Self::QueryParam => "query_param",
            Self::Sorting => "sorting",
            Self::InvalidSorting => "invalid_sorting",
        }
    }
}

impl fmt::Display for CaseGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A filter value as sent on the query string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// Textual value, sent as-is (`"10LD"`, `"2000-01-01"`).
    Text(String),
    /// Numeric value.
    Number(f64),
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// Picks one value out of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selector {
    /// Smallest value.
    Min,
    /// Largest value.
    Max,
}

impl Selector {
    /// Applies the selector. Returns `None` for an empty or unordered input.
    #[must_use]
    pub fn select(self, values: &[Scalar]) -> Option<Scalar> {
        let mut iter = values.iter().copied();
        let first = iter.next()?;
        iter.try_fold(first, |best, next| {
            let ordering = next.partial_cmp(&best)?;
            let replace = match self {
                Self::Min => ordering.is_lt(),
                Self::Max => ordering.is_gt(),
            };
            Some(if replace { next } else { best })
        })
    }

    /// Returns the selector name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

/// Comparison operators for bound assertions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonOperator {
    /// Equal to.
    Equals,
    /// Greater than or equal to.
    GreaterThanOrEqual,
    /// Less than or equal to.
    LessThanOrEqual,
}

impl ComparisonOperator {
    /// Get the symbol for this operator.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Equals => "==",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThanOrEqual => "<=",
        }
    }

    /// Get the short name for this operator, as used in case names.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Equals => "eq",
            Self::GreaterThanOrEqual => "ge",
            Self::LessThanOrEqual => "le",
        }
    }

    /// Returns true if `actual OP expected` holds. Unordered pairs never hold.
    #[must_use]
    pub fn holds<T: PartialOrd>(&self, actual: &T, expected: &T) -> bool {
        match self {
            Self::Equals => actual == expected,
            Self::GreaterThanOrEqual => actual >= expected,
            Self::LessThanOrEqual => actual <= expected,
        }
    }
}

/// Hypothesis: `key=value` constrains `impact_column` so that
/// `selector(column) operator expected_bound` holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCase {
    /// Query parameter name.
    pub key: String,
    /// Query parameter value.
    pub value: FilterValue,
    /// Column expected to reflect the filter.
    pub impact_column: String,
    /// How a single value is picked from the column.
    pub selector: Selector,
    /// How the picked value is compared with the bound.
    pub operator: ComparisonOperator,
    /// Bound in the column's semantic type.
    pub expected_bound: Scalar,
}

impl FilterCase {
    /// Creates a filter case.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        value: impl Into<FilterValue>,
        impact_column: impl Into<String>,
        selector: Selector,
        operator: ComparisonOperator,
        expected_bound: Scalar,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            impact_column: impact_column.into(),
            selector,
            operator,
            expected_bound,
        }
    }

    /// Returns the kind the impact column is coerced to.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self.expected_bound {
            Scalar::Date(_) => ValueKind::Date,
            Scalar::Number(_) => ValueKind::Number,
        }
    }

    /// Returns the query for this case.
    #[must_use]
    pub fn params(&self) -> QueryParams {
        QueryParams::new().with(self.key.clone(), &self.value)
    }

    /// Returns a name identifying the case.
    #[must_use]
    pub fn name(&self) -> String {
        format!(
            "filter_key = {}, filter_value = {}, Expected results: {} values {} {}",
            self.key,
            self.value,
            self.impact_column,
            self.operator.name(),
            self.value
        )
    }
}

/// Hypothesis: `key=value` is rejected with `expected_status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidFilterCase {
    /// Query parameter name.
    pub key: String,
    /// Malformed value.
    pub value: String,
    /// Expected HTTP status.
    pub expected_status: u16,
}

impl InvalidFilterCase {
    /// Creates a case expecting `400 Bad Request`.
    #[must_use]
    pub fn bad_request(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            expected_status: 400,
        }
    }

    /// Returns the query for this case.
    #[must_use]
    pub fn params(&self) -> QueryParams {
        QueryParams::new().with(self.key.clone(), &self.value)
    }

    /// Returns a name identifying the case.
    #[must_use]
    pub fn name(&self) -> String {
        format!(
            "filter_key = {}, filter_value = {}, Expected response code: {}",
            self.key, self.value, self.expected_status
        )
    }
}

/// Hypothesis: `sort=sort_key` orders `result_column` monotonically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortingCase {
    /// Column carrying the ordering.
    pub result_column: String,
    /// Value of the `sort` parameter.
    pub sort_key: String,
    /// True for non-ascending order.
    pub descending: bool,
}

impl SortingCase {
    /// Creates a sorting case. A leading `-` on the key means descending.
    #[must_use]
    pub fn new(result_column: impl Into<String>, sort_key: impl Into<String>) -> Self {
        let sort_key = sort_key.into();
        Self {
            result_column: result_column.into(),
            descending: sort_key.starts_with('-'),
            sort_key,
        }
    }

    /// Returns the query for this case.
    #[must_use]
    pub fn params(&self, limit: usize) -> QueryParams {
        QueryParams::new()
            .with("sort", &self.sort_key)
            .with("limit", limit)
    }

    /// Returns the kind the result column is coerced to.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        ValueKind::for_column(&self.result_column)
    }

    /// Returns a name identifying the case.
    #[must_use]
    pub fn name(&self) -> String {
        self.sort_key.clone()
    }
}

/// Hypothesis: `sort=sort_key` is rejected with `expected_status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidSortingCase {
    /// Unsupported sort key.
    pub sort_key: String,
    /// Expected HTTP status.
    pub expected_status: u16,
}

impl InvalidSortingCase {
    /// Creates a case expecting `400 Bad Request`.
    #[must_use]
    pub fn bad_request(sort_key: impl Into<String>) -> Self {
        Self {
            sort_key: sort_key.into(),
            expected_status: 400,
        }
    }

    /// Returns the query for this case.
    #[must_use]
    pub fn params(&self) -> QueryParams {
        QueryParams::new().with("sort", &self.sort_key)
    }

    /// Returns a name identifying the case.
    #[must_use]
    pub fn name(&self) -> String {
        self.sort_key.clone()
    }
}
