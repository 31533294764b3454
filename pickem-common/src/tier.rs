//! Tier scale for interest and effort
//!
//! Three fixed levels ordered by intensity. Each level carries a weight used
//! by the picker to favor high-interest, low-effort activities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Interest or effort level of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Low,
    Medium,
    High,
}

impl Tier {
    /// All tiers, lowest first
    pub const ALL: [Tier; 3] = [Tier::Low, Tier::Medium, Tier::High];

    /// Sampling weight of this tier (low=1, medium=3, high=6)
    pub fn weight(self) -> u32 {
        match self {
            Tier::Low => 1,
            Tier::Medium => 3,
            Tier::High => 6,
        }
    }

    /// Position in the fixed ordering
    fn index(self) -> usize {
        self as usize
    }

    /// Tiers at or above this one ("interest at least X")
    ///
    /// # Examples
    /// ```
    /// use pickem_common::Tier;
    ///
    /// assert_eq!(Tier::Medium.at_or_above(), &[Tier::Medium, Tier::High]);
    /// ```
    pub fn at_or_above(self) -> &'static [Tier] {
        &Self::ALL[self.index()..]
    }

    /// Tiers at or below this one ("effort at most Y")
    ///
    /// # Examples
    /// ```
    /// use pickem_common::Tier;
    ///
    /// assert_eq!(Tier::Medium.at_or_below(), &[Tier::Low, Tier::Medium]);
    /// ```
    pub fn at_or_below(self) -> &'static [Tier] {
        &Self::ALL[..=self.index()]
    }

    /// Lowercase name as used on the wire and in the catalog file
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Low => "low",
            Tier::Medium => "medium",
            Tier::High => "high",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = Error;

    /// Parse a tier name. Unknown names are rejected, never defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Tier::Low),
            "medium" => Ok(Tier::Medium),
            "high" => Ok(Tier::High),
            other => Err(Error::InvalidInput(format!(
                "Invalid tier '{}' (expected low, medium or high)",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights() {
        assert_eq!(Tier::Low.weight(), 1);
        assert_eq!(Tier::Medium.weight(), 3);
        assert_eq!(Tier::High.weight(), 6);
    }

    #[test]
    fn test_ordering_by_intensity() {
        assert!(Tier::Low < Tier::Medium);
        assert!(Tier::Medium < Tier::High);
    }

    #[test]
    fn test_at_or_above() {
        assert_eq!(Tier::Low.at_or_above(), &Tier::ALL);
        assert_eq!(Tier::High.at_or_above(), &[Tier::High]);
    }

    #[test]
    fn test_at_or_below() {
        assert_eq!(Tier::Low.at_or_below(), &[Tier::Low]);
        assert_eq!(Tier::High.at_or_below(), &Tier::ALL);
    }

    #[test]
    fn test_parse_known_names() {
        for tier in Tier::ALL {
            assert_eq!(tier.as_str().parse::<Tier>().unwrap(), tier);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "bogus".parse::<Tier>().unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        // Case matters, as in the catalog file
        assert!("High".parse::<Tier>().is_err());
        assert!("".parse::<Tier>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Tier::Medium).unwrap(), "\"medium\"");
        let tier: Tier = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(tier, Tier::High);
        assert!(serde_json::from_str::<Tier>("\"extreme\"").is_err());
    }
}
