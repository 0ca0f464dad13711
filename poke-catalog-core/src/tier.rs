use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Competitive-viability classification assigned to a species within a
/// generation. Parenthesized variants are the publisher's "implied"
/// classifications for formes that inherit a placement without being
/// ranked themselves; the `*Bl` variants are borderline bans-lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "AG")]
    Ag,
    Uber,
    #[serde(rename = "(Uber)")]
    UberImplied,
    #[serde(rename = "OU")]
    Ou,
    #[serde(rename = "(OU)")]
    OuImplied,
    #[serde(rename = "UUBL")]
    Uubl,
    #[serde(rename = "UU")]
    Uu,
    #[serde(rename = "RUBL")]
    Rubl,
    #[serde(rename = "RU")]
    Ru,
    #[serde(rename = "NUBL")]
    Nubl,
    #[serde(rename = "NU")]
    Nu,
    #[serde(rename = "(NU)")]
    NuImplied,
    #[serde(rename = "PUBL")]
    Publ,
    #[serde(rename = "PU")]
    Pu,
    #[serde(rename = "(PU)")]
    PuImplied,
    #[serde(rename = "ZUBL")]
    Zubl,
    #[serde(rename = "ZU")]
    Zu,
    #[serde(rename = "NFE")]
    Nfe,
    #[serde(rename = "LC")]
    Lc,
    #[serde(rename = "CAP")]
    Cap,
    #[serde(rename = "CAP NFE")]
    CapNfe,
    #[serde(rename = "CAP LC")]
    CapLc,
    Unreleased,
    Illegal,
}

const ALL_TIERS: &[Tier] = &[
    Tier::Ag,
    Tier::Uber,
    Tier::UberImplied,
    Tier::Ou,
    Tier::OuImplied,
    Tier::Uubl,
    Tier::Uu,
    Tier::Rubl,
    Tier::Ru,
    Tier::Nubl,
    Tier::Nu,
    Tier::NuImplied,
    Tier::Publ,
    Tier::Pu,
    Tier::PuImplied,
    Tier::Zubl,
    Tier::Zu,
    Tier::Nfe,
    Tier::Lc,
    Tier::Cap,
    Tier::CapNfe,
    Tier::CapLc,
    Tier::Unreleased,
    Tier::Illegal,
];

impl Tier {
    /// The publisher's exact label for this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ag => "AG",
            Self::Uber => "Uber",
            Self::UberImplied => "(Uber)",
            Self::Ou => "OU",
            Self::OuImplied => "(OU)",
            Self::Uubl => "UUBL",
            Self::Uu => "UU",
            Self::Rubl => "RUBL",
            Self::Ru => "RU",
            Self::Nubl => "NUBL",
            Self::Nu => "NU",
            Self::NuImplied => "(NU)",
            Self::Publ => "PUBL",
            Self::Pu => "PU",
            Self::PuImplied => "(PU)",
            Self::Zubl => "ZUBL",
            Self::Zu => "ZU",
            Self::Nfe => "NFE",
            Self::Lc => "LC",
            Self::Cap => "CAP",
            Self::CapNfe => "CAP NFE",
            Self::CapLc => "CAP LC",
            Self::Unreleased => "Unreleased",
            Self::Illegal => "Illegal",
        }
    }
}

impl Default for Tier {
    fn default() -> Self {
        Tier::Illegal
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tier label: {0}")]
pub struct TierParseError(pub String);

impl FromStr for Tier {
    type Err = TierParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for tier in ALL_TIERS {
            if tier.as_str() == s {
                return Ok(*tier);
            }
        }
        Err(TierParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_publisher_labels() {
        for tier in ALL_TIERS {
            assert_eq!(tier.as_str().parse::<Tier>().unwrap(), *tier);
        }
    }

    #[test]
    fn serde_uses_exact_labels() {
        assert_eq!(serde_json::to_string(&Tier::UberImplied).unwrap(), r#""(Uber)""#);
        assert_eq!(serde_json::from_str::<Tier>(r#""CAP NFE""#).unwrap(), Tier::CapNfe);
    }

    #[test]
    fn rejects_unknown_labels() {
        assert!("SuperUber".parse::<Tier>().is_err());
    }
}
