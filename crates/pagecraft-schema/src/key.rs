use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

///
/// TemplateKey
///
/// Closed set of template identifiers known to the catalog and the default
/// registry, with an explicit `Custom` escape hatch for keys loaded from
/// storage that this build does not recognise. Dispatch on the closed
/// variants is exhaustive; `Custom` always degrades to the fallback schema
/// and a render placeholder.
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum TemplateKey {
    HeroSection,
    DesignOne,
    DesignTwo,
    DesignThree,
    DesignFour,
    DesignFive,
    DesignSix,
    DesignSeven,
    DesignEight,
    DesignNine,
    DesignTen,
    DesignEleven,
    DesignTwelve,
    DesignThirteen,
    DesignFourteen,
    DesignFifteen,
    DesignSixteen,
    DesignSeventeen,
    DesignEighteen,
    DesignNineteen,
    DesignTwenty,
    DesignTwentyOne,
    DesignTwentyTwo,
    DesignTwentyThree,
    DesignTwentyFour,
    DesignTwentyFive,
    DesignTwentySix,
    AboutBrief,
    StatsGrid,
    DepartmentHero,
    HodMessage,
    VisionMission,

    /// Unrecognised key carried verbatim from storage.
    Custom(String),
}

impl TemplateKey {
    /// Every closed variant, in catalog order.
    pub const ALL: &'static [Self] = &[
        Self::HeroSection,
        Self::DesignOne,
        Self::DesignTwo,
        Self::DesignThree,
        Self::DesignFour,
        Self::DesignFive,
        Self::DesignSix,
        Self::DesignSeven,
        Self::DesignEight,
        Self::DesignNine,
        Self::DesignTen,
        Self::DesignEleven,
        Self::DesignTwelve,
        Self::DesignThirteen,
        Self::DesignFourteen,
        Self::DesignFifteen,
        Self::DesignSixteen,
        Self::DesignSeventeen,
        Self::DesignEighteen,
        Self::DesignNineteen,
        Self::DesignTwenty,
        Self::DesignTwentyOne,
        Self::DesignTwentyTwo,
        Self::DesignTwentyThree,
        Self::DesignTwentyFour,
        Self::DesignTwentyFive,
        Self::DesignTwentySix,
        Self::AboutBrief,
        Self::StatsGrid,
        Self::DepartmentHero,
        Self::HodMessage,
        Self::VisionMission,
    ];

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::HeroSection => "hero_section",
            Self::DesignOne => "design_one",
            Self::DesignTwo => "design_two",
            Self::DesignThree => "design_three",
            Self::DesignFour => "design_four",
            Self::DesignFive => "design_five",
            Self::DesignSix => "design_six",
            Self::DesignSeven => "design_seven",
            Self::DesignEight => "design_eight",
            Self::DesignNine => "design_nine",
            Self::DesignTen => "design_ten",
            Self::DesignEleven => "design_eleven",
            Self::DesignTwelve => "design_twelve",
            Self::DesignThirteen => "design_thirteen",
            Self::DesignFourteen => "design_fourteen",
            Self::DesignFifteen => "design_fifteen",
            Self::DesignSixteen => "design_sixteen",
            Self::DesignSeventeen => "design_seventeen",
            Self::DesignEighteen => "design_eighteen",
            Self::DesignNineteen => "design_nineteen",
            Self::DesignTwenty => "design_twenty",
            Self::DesignTwentyOne => "design_twenty_one",
            Self::DesignTwentyTwo => "design_twenty_two",
            Self::DesignTwentyThree => "design_twenty_three",
            Self::DesignTwentyFour => "design_twenty_four",
            Self::DesignTwentyFive => "design_twenty_five",
            Self::DesignTwentySix => "design_twenty_six",
            Self::AboutBrief => "about_brief",
            Self::StatsGrid => "stats_grid",
            Self::DepartmentHero => "department_hero",
            Self::HodMessage => "hod_message",
            Self::VisionMission => "vision_mission",
            Self::Custom(key) => key.as_str(),
        }
    }

    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKey {
    type Err = std::convert::Infallible;

    // Unknown strings are preserved, never rejected; a stale key must
    // survive a load/save cycle untouched.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = Self::ALL
            .iter()
            .find(|key| key.as_str() == s)
            .cloned()
            .unwrap_or_else(|| Self::Custom(s.to_string()));

        Ok(key)
    }
}

impl From<&str> for TemplateKey {
    fn from(s: &str) -> Self {
        s.parse().unwrap_or_else(|e| match e {})
    }
}

impl Serialize for TemplateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TemplateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_keys_round_trip_as_strings() {
        for key in TemplateKey::ALL {
            let parsed = TemplateKey::from(key.as_str());
            assert_eq!(&parsed, key);
            assert!(!parsed.is_custom());
        }
    }

    #[test]
    fn unknown_key_is_preserved_as_custom() {
        let key = TemplateKey::from("design_ninety_nine");
        assert_eq!(key, TemplateKey::Custom("design_ninety_nine".to_string()));
        assert_eq!(key.as_str(), "design_ninety_nine");
    }

    #[test]
    fn serde_uses_plain_strings() {
        let json = serde_json::to_string(&TemplateKey::DesignTwentyOne).unwrap();
        assert_eq!(json, "\"design_twenty_one\"");

        let key: TemplateKey = serde_json::from_str("\"hero_section\"").unwrap();
        assert_eq!(key, TemplateKey::HeroSection);

        let key: TemplateKey = serde_json::from_str("\"gone_template\"").unwrap();
        assert!(key.is_custom());
    }
}
