//! Cell value coercion
//!
//! Column values arrive as JSON strings. Dates use the SSD `2024-Oct-20 14:32`
//! layout; distances may carry a unit suffix (`10LD`, `0.05AU`).

use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DomainError, DomainResult};

/// Astronomical units per lunar distance.
pub const AU_PER_LUNAR_DISTANCE: f64 = 0.002_569;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%b-%d %H:%M:%S",
    "%Y-%b-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y-%b-%d"];

#[allow(clippy::expect_used)]
static NUMBER_WITH_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([+-]?(?:\d+\.?\d*|\.\d+)(?:e[+-]?\d+)?)\s*(ld|au)?$")
        .expect("static pattern is valid")
});

/// Semantic type a column is coerced to before comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Calendar date and time.
    Date,
    /// Floating-point number.
    Number,
}

impl ValueKind {
    /// Returns the kind used for a close-approach column.
    #[must_use]
    pub fn for_column(column: &str) -> Self {
        if column == "cd" { Self::Date } else { Self::Number }
    }

    /// Returns a lowercase label for messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Number => "number",
        }
    }
}

/// A coerced, comparable cell value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// A date-time.
    Date(NaiveDateTime),
    /// A number; distances are in astronomical units.
    Number(f64),
}

impl Scalar {
    /// Builds a date scalar at midnight.
    #[must_use]
    pub fn date(date: NaiveDate) -> Self {
        Self::Date(date.and_time(NaiveTime::MIN))
    }

    /// Returns the number, if this is one.
    #[must_use]
    pub const fn as_number(self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(n),
            Self::Date(_) => None,
        }
    }

    /// Returns the date-time, if this is one.
    #[must_use]
    pub const fn as_date(self) -> Option<NaiveDateTime> {
        match self {
            Self::Date(d) => Some(d),
            Self::Number(_) => None,
        }
    }

    /// Parses text as the given kind.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCell` if the text does not parse.
    pub fn parse(text: &str, kind: ValueKind, column: &str) -> DomainResult<Self> {
        let parsed = match kind {
            ValueKind::Date => parse_datetime(text).map(Self::Date),
            ValueKind::Number => parse_number(text).map(Self::Number),
        };
        parsed.ok_or_else(|| DomainError::InvalidCell {
            column: column.to_string(),
            value: text.to_string(),
            kind: kind.label(),
        })
    }

    /// Coerces a JSON cell. Nulls and blank strings yield `None`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCell` if the value cannot be read as `kind`.
    pub fn from_json(value: &Value, kind: ValueKind, column: &str) -> DomainResult<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) if s.trim().is_empty() => Ok(None),
            Value::String(s) => Self::parse(s.trim(), kind, column).map(Some),
            Value::Number(n) if kind == ValueKind::Number => n
                .as_f64()
                .map(|f| Some(Self::Number(f)))
                .ok_or_else(|| invalid_cell(value, kind, column)),
            other => Err(invalid_cell(other, kind, column)),
        }
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Date(a), Self::Date(b)) => a.partial_cmp(b),
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d %H:%M")),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

fn invalid_cell(value: &Value, kind: ValueKind, column: &str) -> DomainError {
    DomainError::InvalidCell {
        column: column.to_string(),
        value: value.to_string(),
        kind: kind.label(),
    }
}

/// Parses an SSD date or date-time.
#[must_use]
pub fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}

/// Parses a number, converting a lunar-distance suffix to astronomical units.
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    let captures = NUMBER_WITH_UNIT.captures(text.trim())?;
    let magnitude: f64 = captures.get(1)?.as_str().parse().ok()?;
    let in_lunar = captures
        .get(2)
        .is_some_and(|unit| unit.as_str().eq_ignore_ascii_case("ld"));
    Some(if in_lunar {
        magnitude * AU_PER_LUNAR_DISTANCE
    } else {
        magnitude
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_column_kinds() {
        assert_eq!(ValueKind::for_column("cd"), ValueKind::Date);
        assert_eq!(ValueKind::for_column("dist"), ValueKind::Number);
        assert_eq!(ValueKind::for_column("v_inf"), ValueKind::Number);
    }

    #[test]
    fn test_parse_ssd_datetime() {
        let parsed = parse_datetime("2024-Oct-20 14:32").unwrap();
        assert_eq!(parsed.to_string(), "2024-10-20 14:32:00");
    }

    #[test]
    fn test_parse_plain_date() {
        let parsed = parse_datetime("2000-01-01").unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap().and_time(NaiveTime::MIN));
        assert!(parse_datetime("01/02/2000").is_none());
    }

    #[test]
    fn test_parse_lunar_distance() {
        let au = parse_number("10LD").unwrap();
        assert!((au - 10.0 * AU_PER_LUNAR_DISTANCE).abs() < 1e-12);
        assert!((parse_number("0.05au").unwrap() - 0.05).abs() < 1e-12);
        assert!((parse_number("0.0123").unwrap() - 0.0123).abs() < 1e-12);
        assert!(parse_number("5KAU").is_none());
        assert!(parse_number("ten").is_none());
    }

    #[test]
    fn test_from_json_drops_blanks() {
        assert_eq!(Scalar::from_json(&Value::Null, ValueKind::Number, "h").unwrap(), None);
        assert_eq!(
            Scalar::from_json(&Value::String("  ".into()), ValueKind::Date, "cd").unwrap(),
            None
        );
    }

    #[test]
    fn test_from_json_number() {
        let value = serde_json::json!(21.3);
        assert_eq!(
            Scalar::from_json(&value, ValueKind::Number, "h").unwrap(),
            Some(Scalar::Number(21.3))
        );
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = Scalar::from_json(&Value::String("n/a".into()), ValueKind::Number, "dist")
            .unwrap_err();
        assert_eq!(err.to_string(), "cannot read 'n/a' in column 'dist' as number");
    }

    #[test]
    fn test_mixed_kinds_are_unordered() {
        let date = Scalar::date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(date.partial_cmp(&Scalar::Number(1.0)), None);
        assert!(Scalar::Number(1.0) < Scalar::Number(2.0));
    }
}
