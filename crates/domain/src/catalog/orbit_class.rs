//! SBDB orbit classes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DomainError, DomainResult};

/// Orbit classification codes used by the small-body database.
///
/// Codes are case-sensitive: `JFC` (classical Jupiter-family comet) and
/// `JFc` (Levison and Duncan definition) are distinct classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrbitClass {
    /// Atira (interior Earth object).
    #[serde(rename = "IEO")]
    Ieo,
    /// Aten.
    #[serde(rename = "ATE")]
    Ate,
    /// Apollo.
    #[serde(rename = "APO")]
    Apo,
    /// Amor.
    #[serde(rename = "AMO")]
    Amo,
    /// Mars-crossing asteroid.
    #[serde(rename = "MCA")]
    Mca,
    /// Inner main-belt asteroid.
    #[serde(rename = "IMB")]
    Imb,
    /// Main-belt asteroid.
    #[serde(rename = "MBA")]
    Mba,
    /// Outer main-belt asteroid.
    #[serde(rename = "OMB")]
    Omb,
    /// Jupiter trojan.
    #[serde(rename = "TJN")]
    Tjn,
    /// Centaur.
    #[serde(rename = "CEN")]
    Cen,
    /// Trans-Neptunian object.
    #[serde(rename = "TNO")]
    Tno,
    /// Parabolic asteroid.
    #[serde(rename = "PAA")]
    Paa,
    /// Hyperbolic asteroid.
    #[serde(rename = "HYA")]
    Hya,
    /// Hyperbolic comet.
    #[serde(rename = "HYP")]
    Hyp,
    /// Parabolic comet.
    #[serde(rename = "PAR")]
    Par,
    /// Comet not matching any other class.
    #[serde(rename = "COM")]
    Com,
    /// Jupiter-family comet, classical definition.
    #[serde(rename = "JFC")]
    JfcClassical,
    /// Halley-type comet.
    #[serde(rename = "HTC")]
    Htc,
    /// Encke-type comet.
    #[serde(rename = "ETc")]
    Etc,
    /// Chiron-type comet.
    #[serde(rename = "CTc")]
    Ctc,
    /// Jupiter-family comet, Levison and Duncan definition.
    #[serde(rename = "JFc")]
    Jfc,
}

impl OrbitClass {
    /// Returns all orbit classes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Ieo,
            Self::Ate,
            Self::Apo,
            Self::Amo,
            Self::Mca,
            Self::Imb,
            Self::Mba,
            Self::Omb,
            Self::Tjn,
            Self::Cen,
            Self::Tno,
            Self::Paa,
            Self::Hya,
            Self::Hyp,
            Self::Par,
            Self::Com,
            Self::JfcClassical,
            Self::Htc,
            Self::Etc,
            Self::Ctc,
            Self::Jfc,
        ]
    }

    /// Returns the SBDB code, as sent in the `class` query parameter.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ieo => "IEO",
            Self::Ate => "ATE",
            Self::Apo => "APO",
            Self::Amo => "AMO",
            Self::Mca => "MCA",
            Self::Imb => "IMB",
            Self::Mba => "MBA",
            Self::Omb => "OMB",
            Self::Tjn => "TJN",
            Self::Cen => "CEN",
            Self::Tno => "TNO",
            Self::Paa => "PAA",
            Self::Hya => "HYA",
            Self::Hyp => "HYP",
            Self::Par => "PAR",
            Self::Com => "COM",
            Self::JfcClassical => "JFC",
            Self::Htc => "HTC",
            Self::Etc => "ETc",
            Self::Ctc => "CTc",
            Self::Jfc => "JFc",
        }
    }

    /// Returns a short description of the orbital regime.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ieo => "Atira: orbit contained entirely within Earth's (Q < 0.983 AU)",
            Self::Ate => "Aten: near-Earth, a < 1.0 AU and Q > 0.983 AU",
            Self::Apo => "Apollo: Earth-crossing, a > 1.0 AU and q < 1.017 AU",
            Self::Amo => "Amor: near-Earth, 1.017 AU < q < 1.3 AU",
            Self::Mca => "Mars-crossing asteroid: 1.3 AU < q < 1.666 AU, a < 3.2 AU",
            Self::Imb => "Inner main-belt asteroid: a < 2.0 AU, q > 1.666 AU",
            Self::Mba => "Main-belt asteroid: 2.0 AU < a < 3.2 AU, q > 1.666 AU",
            Self::Omb => "Outer main-belt asteroid: 3.2 AU < a < 4.6 AU",
            Self::Tjn => "Jupiter trojan: 4.6 AU < a < 5.5 AU, e < 0.3",
            Self::Cen => "Centaur: 5.5 AU < a < 30.1 AU",
            Self::Tno => "Trans-Neptunian object: a > 30.1 AU",
            Self::Paa => "Parabolic asteroid: e = 1.0",
            Self::Hya => "Hyperbolic asteroid: e > 1.0",
            Self::Hyp => "Hyperbolic comet: e > 1.0",
            Self::Par => "Parabolic comet: e = 1.0",
            Self::Com => "Comet not matching any defined orbit class",
            Self::JfcClassical => "Jupiter-family comet, classical definition (P < 20 y)",
            Self::Htc => "Halley-type comet (20 y < P < 200 y)",
            Self::Etc => "Encke-type comet (Tj > 3, a < aJ)",
            Self::Ctc => "Chiron-type comet (Tj > 3, a > aJ)",
            Self::Jfc => "Jupiter-family comet (2 < Tj < 3)",
        }
    }
}

impl fmt::Display for OrbitClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for OrbitClass {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|class| class.code() == s)
            .ok_or_else(|| DomainError::UnknownOrbitClass(s.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<_> = OrbitClass::all().iter().map(|c| c.code()).collect();
        assert_eq!(codes.len(), 21);
    }

    #[test]
    fn test_case_sensitive_codes() {
        assert_eq!("JFC".parse::<OrbitClass>().unwrap(), OrbitClass::JfcClassical);
        assert_eq!("JFc".parse::<OrbitClass>().unwrap(), OrbitClass::Jfc);
        assert!("jfc".parse::<OrbitClass>().is_err());
    }

    #[test]
    fn test_round_trip_through_code() {
        for class in OrbitClass::all() {
            assert_eq!(class.code().parse::<OrbitClass>().unwrap(), *class);
        }
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&OrbitClass::Etc).unwrap();
        assert_eq!(json, "\"ETc\"");
    }
}
