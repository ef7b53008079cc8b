//! Case tables exercised by the harness.

use cadwatch_domain::{
    AU_PER_LUNAR_DISTANCE, CloseApproachBody, ComparisonOperator, FilterCase, InvalidFilterCase,
    InvalidSortingCase, OrbitClass, Scalar, Selector, SortingCase,
};
use chrono::NaiveDate;

use ComparisonOperator::{GreaterThanOrEqual, LessThanOrEqual};
use Selector::{Max, Min};

/// Every case table the harness knows about.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseCatalog {
    /// Range filters on dates and numbers.
    pub filters: Vec<FilterCase>,
    /// Malformed filter values.
    pub invalid_filters: Vec<InvalidFilterCase>,
    /// Supported sort keys.
    pub sorting: Vec<SortingCase>,
    /// Unsupported sort keys.
    pub invalid_sorting: Vec<InvalidSortingCase>,
    /// Orbit classes checked for membership.
    pub orbit_classes: Vec<OrbitClass>,
    /// Reference bodies checked for the `body` column.
    pub bodies: Vec<CloseApproachBody>,
    /// Value sent in the `limit` query-parameter case.
    pub limit_probe: usize,
}

impl CaseCatalog {
    /// Returns the standard close-approach case tables.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            filters: [date_filters(), numeric_filters()].concat(),
            invalid_filters: invalid_filters(),
            sorting: sorting(),
            invalid_sorting: ["dist-max", "body", "-body", "-fullname"]
                .into_iter()
                .map(InvalidSortingCase::bad_request)
                .collect(),
            orbit_classes: OrbitClass::all().to_vec(),
            bodies: vec![
                CloseApproachBody::Mars,
                CloseApproachBody::Moon,
                CloseApproachBody::All,
            ],
            limit_probe: 15,
        }
    }
}

impl Default for CaseCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[allow(clippy::expect_used)]
fn midnight(year: i32, month: u32, day: u32) -> Scalar {
    Scalar::date(NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date"))
}

fn date_filters() -> Vec<FilterCase> {
    let (start, end) = (midnight(2000, 1, 1), midnight(2100, 1, 1));
    vec![
        FilterCase::new("date-min", "2000-01-01", "cd", Min, GreaterThanOrEqual, start),
        FilterCase::new("date-max", "2100-01-01", "cd", Max, LessThanOrEqual, end),
    ]
}

fn numeric_filters() -> Vec<FilterCase> {
    let n = Scalar::Number;
    let ld = AU_PER_LUNAR_DISTANCE;
    vec![
        FilterCase::new("dist-min", "0.04", "dist", Min, GreaterThanOrEqual, n(0.04)),
        FilterCase::new("dist-max", "0.03", "dist", Max, LessThanOrEqual, n(0.03)),
        FilterCase::new("dist-min", "10LD", "dist", Min, GreaterThanOrEqual, n(10.0 * ld)),
        FilterCase::new("dist-max", "7LD", "dist", Max, LessThanOrEqual, n(7.0 * ld)),
        FilterCase::new("h-min", 10, "h", Min, GreaterThanOrEqual, n(10.0)),
        FilterCase::new("h-max", 20, "h", Max, LessThanOrEqual, n(20.0)),
        FilterCase::new("h-min", 9.56, "h", Min, GreaterThanOrEqual, n(9.56)),
        FilterCase::new("h-max", 20.05, "h", Max, LessThanOrEqual, n(20.05)),
        FilterCase::new("v-inf-min", 7.01, "v_inf", Min, GreaterThanOrEqual, n(7.01)),
        FilterCase::new("v-inf-max", 15, "v_inf", Max, LessThanOrEqual, n(15.0)),
        FilterCase::new("v-rel-min", 5.01, "v_rel", Min, GreaterThanOrEqual, n(5.01)),
        FilterCase::new("v-rel-max", 11.9, "v_rel", Max, LessThanOrEqual, n(11.9)),
    ]
}

fn invalid_filters() -> Vec<InvalidFilterCase> {
    [
        ("date-min", "2000-JAN-01"),
        ("date-max", "2000-March-01"),
        ("dist-min", "5KAU"),
        ("dist-max", "-10LD"),
        ("h-min", "4g"),
        ("h-max", "-70"),
        ("v-inf-min", "--"),
        ("v-inf-min", "-0.99"),
        ("v-rel-min", "-900"),
        ("v-rel-min", "ten"),
        ("des", "humanoid"),
        ("body", "433 Eros"),
        ("limit", "-15"),
        ("limit", "-0.1"),
    ]
    .into_iter()
    .map(|(key, value)| InvalidFilterCase::bad_request(key, value))
    .collect()
}

fn sorting() -> Vec<SortingCase> {
    [
        ("dist", "dist"),
        ("dist", "-dist"),
        ("cd", "date"),
        ("cd", "-date"),
        ("dist_min", "dist-min"),
        ("dist_min", "-dist-min"),
        ("v_inf", "v-inf"),
        ("v_inf", "-v-inf"),
        ("h", "h"),
        ("h", "-h"),
    ]
    .into_iter()
    .map(|(column, key)| SortingCase::new(column, key))
    .collect()
}
