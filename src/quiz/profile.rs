//! High/low flags and four-letter profile codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Category;
use crate::error::QuizError;

/// Script sums at or above this value are High. The threshold is inclusive:
/// 10 is High, 9 is Low.
pub const HIGH_THRESHOLD: u32 = 10;

/// Number of distinct profile codes (2^4).
pub const PROFILE_COUNT: usize = 16;

const ROMAN_NUMERALS: [&str; PROFILE_COUNT] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII", "XIV",
    "XV", "XVI",
];

/// Normalized level of a single money script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Flag {
    #[serde(rename = "H")]
    High,
    #[serde(rename = "L")]
    Low,
}

impl Flag {
    /// Classify a script sum.
    pub fn from_score(score: u32) -> Self {
        if score >= HIGH_THRESHOLD {
            Self::High
        } else {
            Self::Low
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::High => 'H',
            Self::Low => 'L',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            'H' => Some(Self::High),
            'L' => Some(Self::Low),
            _ => None,
        }
    }

    fn is_high(self) -> bool {
        self == Self::High
    }
}

/// Four flags in canonical script order, e.g. `HLLH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProfileCode([Flag; Category::COUNT]);

impl ProfileCode {
    pub const fn new(flags: [Flag; Category::COUNT]) -> Self {
        Self(flags)
    }

    pub fn flags(&self) -> [Flag; Category::COUNT] {
        self.0
    }

    pub fn flag(&self, category: Category) -> Flag {
        self.0[category.index()]
    }

    /// All sixteen codes in card order (`LLLL` is card I, `HHHH` is card XVI).
    pub fn all() -> impl Iterator<Item = ProfileCode> {
        (0..PROFILE_COUNT).map(Self::from_card_index)
    }

    /// Zero-based position in card order.
    ///
    /// Cards are grouped by Vigilance first, then Avoidance, Worship, and
    /// Status, with Low before High at every level.
    pub fn card_index(&self) -> usize {
        let bit = |c: Category| usize::from(self.flag(c).is_high());
        bit(Category::Vigilance) << 3
            | bit(Category::Avoidance) << 2
            | bit(Category::Worship) << 1
            | bit(Category::Status)
    }

    fn from_card_index(index: usize) -> Self {
        let flag = |shift: usize| {
            if (index >> shift) & 1 == 1 {
                Flag::High
            } else {
                Flag::Low
            }
        };
        Self([flag(2), flag(1), flag(0), flag(3)])
    }

    /// Tarot card number, 1 through 16.
    pub fn card_number(&self) -> u8 {
        // card_index is always < 16
        self.card_index() as u8 + 1
    }

    /// Tarot card number as a Roman numeral (I through XVI).
    pub fn roman_numeral(&self) -> &'static str {
        ROMAN_NUMERALS[self.card_index()]
    }
}

impl fmt::Display for ProfileCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in self.0 {
            write!(f, "{}", flag.as_char())?;
        }
        Ok(())
    }
}

impl FromStr for ProfileCode {
    type Err = QuizError;

    /// Parses exactly four `H`/`L` characters. Anything else is an unknown
    /// profile, not a fallback.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || QuizError::UnknownProfile {
            code: s.to_string(),
        };

        let mut flags = [Flag::Low; Category::COUNT];
        let mut chars = s.chars();
        for slot in flags.iter_mut() {
            *slot = chars.next().and_then(Flag::from_char).ok_or_else(unknown)?;
        }
        if chars.next().is_some() {
            return Err(unknown());
        }
        Ok(Self(flags))
    }
}

impl Serialize for ProfileCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ProfileCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD_ORDER: [&str; PROFILE_COUNT] = [
        "LLLL", "LLHL", "LHLL", "LHHL", "HLLL", "HLHL", "HHLL", "HHHL", "LLLH", "LLHH", "LHLH",
        "LHHH", "HLLH", "HLHH", "HHLH", "HHHH",
    ];

    #[test]
    fn threshold_is_inclusive_on_high_side() {
        assert_eq!(Flag::from_score(10), Flag::High);
        assert_eq!(Flag::from_score(9), Flag::Low);
        for score in 0..=15 {
            let expected = if score >= 10 { Flag::High } else { Flag::Low };
            assert_eq!(Flag::from_score(score), expected, "score {score}");
        }
    }

    #[test]
    fn all_codes_follow_card_order() {
        let codes: Vec<String> = ProfileCode::all().map(|c| c.to_string()).collect();
        assert_eq!(codes, CARD_ORDER);
    }

    #[test]
    fn card_number_and_numeral() {
        for (i, raw) in CARD_ORDER.iter().enumerate() {
            let code: ProfileCode = raw.parse().unwrap();
            assert_eq!(usize::from(code.card_number()), i + 1);
        }
        let first: ProfileCode = "LLLL".parse().unwrap();
        let thirteenth: ProfileCode = "HLLH".parse().unwrap();
        let last: ProfileCode = "HHHH".parse().unwrap();
        assert_eq!(first.roman_numeral(), "I");
        assert_eq!(thirteenth.roman_numeral(), "XIII");
        assert_eq!(last.roman_numeral(), "XVI");
    }

    #[test]
    fn parse_rejects_malformed_codes() {
        for bad in ["", "HLL", "HLLHH", "hllh", "HLXH", "ABCD", "HLLÉ"] {
            let err = bad.parse::<ProfileCode>().unwrap_err();
            assert!(err.is_not_found(), "{bad:?} should be unknown");
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        for code in ProfileCode::all() {
            let parsed: ProfileCode = code.to_string().parse().unwrap();
            assert_eq!(parsed, code);
        }
    }

    #[test]
    fn flag_accessor_uses_canonical_order() {
        let code: ProfileCode = "HLLH".parse().unwrap();
        assert_eq!(code.flag(Category::Avoidance), Flag::High);
        assert_eq!(code.flag(Category::Worship), Flag::Low);
        assert_eq!(code.flag(Category::Status), Flag::Low);
        assert_eq!(code.flag(Category::Vigilance), Flag::High);
    }
}
