//! Close-approach reference bodies

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DomainError, DomainResult};

/// Reference bodies accepted by the `body` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CloseApproachBody {
    /// Mercury
    Merc,
    /// Venus
    Venus,
    /// Earth
    #[default]
    Earth,
    /// Mars
    Mars,
    /// Jupiter
    Juptr,
    /// Saturn
    Satrn,
    /// Uranus
    Urnus,
    /// Neptune
    Neptn,
    /// Pluto
    Pluto,
    /// Moon
    Moon,
    /// Every body; adds a `body` column to the result.
    #[serde(rename = "ALL")]
    All,
}

impl CloseApproachBody {
    /// Returns all bodies.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Merc,
            Self::Venus,
            Self::Earth,
            Self::Mars,
            Self::Juptr,
            Self::Satrn,
            Self::Urnus,
            Self::Neptn,
            Self::Pluto,
            Self::Moon,
            Self::All,
        ]
    }

    /// Returns the query value for this body.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Merc => "Merc",
            Self::Venus => "Venus",
            Self::Earth => "Earth",
            Self::Mars => "Mars",
            Self::Juptr => "Juptr",
            Self::Satrn => "Satrn",
            Self::Urnus => "Urnus",
            Self::Neptn => "Neptn",
            Self::Pluto => "Pluto",
            Self::Moon => "Moon",
            Self::All => "ALL",
        }
    }

    /// Returns true when results for this body carry a `body` column.
    #[must_use]
    pub const fn reports_body_column(self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for CloseApproachBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CloseApproachBody {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        if s == "*" {
            return Ok(Self::All);
        }
        Self::all()
            .iter()
            .copied()
            .find(|body| body.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownBody(s.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_body_from_str() {
        assert_eq!("Mars".parse::<CloseApproachBody>().unwrap(), CloseApproachBody::Mars);
        assert_eq!("moon".parse::<CloseApproachBody>().unwrap(), CloseApproachBody::Moon);
        assert_eq!("ALL".parse::<CloseApproachBody>().unwrap(), CloseApproachBody::All);
        assert_eq!("*".parse::<CloseApproachBody>().unwrap(), CloseApproachBody::All);
    }

    #[test]
    fn test_unknown_body() {
        let result = "433 Eros".parse::<CloseApproachBody>();
        assert!(matches!(result, Err(DomainError::UnknownBody(_))));
    }

    #[test]
    fn test_body_column_only_for_all() {
        let with_column: Vec<_> = CloseApproachBody::all()
            .iter()
            .filter(|b| b.reports_body_column())
            .collect();
        assert_eq!(with_column, vec![&CloseApproachBody::All]);
    }
}
