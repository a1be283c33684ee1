use serde::{Deserialize, Serialize};

use crate::RecordsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Division {
    Subjr,
    Jr,
    Open,
    Mas1,
    Mas2,
    Mas3,
    Mas4,
    Guest,
}

/// Divisions a result counts toward when records are computed, keyed by the
/// division the athlete's age places them in.
pub const RECORD_DIVISION_OVERRIDE: &[(Division, &[Division])] = &[
    (Division::Guest, &[Division::Guest]),
    (Division::Open, &[Division::Open]),
    (Division::Jr, &[Division::Jr, Division::Open]),
    (Division::Subjr, &[Division::Subjr, Division::Jr, Division::Open]),
    (Division::Mas1, &[Division::Mas1, Division::Open]),
    (Division::Mas2, &[Division::Mas2, Division::Mas1, Division::Open]),
    (
        Division::Mas3,
        &[Division::Mas3, Division::Mas2, Division::Mas1, Division::Open],
    ),
    (
        Division::Mas4,
        &[
            Division::Mas4,
            Division::Mas3,
            Division::Mas2,
            Division::Mas1,
            Division::Open,
        ],
    ),
];

impl Division {
    /// Divisions that carry national records, in display order.
    pub const RECORD_DIVISIONS: [Division; 7] = [
        Division::Subjr,
        Division::Jr,
        Division::Open,
        Division::Mas1,
        Division::Mas2,
        Division::Mas3,
        Division::Mas4,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Subjr => "subjr",
            Self::Jr => "jr",
            Self::Open => "open",
            Self::Mas1 => "mas1",
            Self::Mas2 => "mas2",
            Self::Mas3 => "mas3",
            Self::Mas4 => "mas4",
            Self::Guest => "guest",
        }
    }

    /// Age bands: 14-18 subjr, 19-23 jr, 40-49 mas1, 50-59 mas2, 60-69 mas3,
    /// 70+ mas4, anything else open.
    pub fn from_age(age: i32) -> Self {
        match age {
            14..=18 => Self::Subjr,
            19..=23 => Self::Jr,
            40..=49 => Self::Mas1,
            50..=59 => Self::Mas2,
            60..=69 => Self::Mas3,
            70.. => Self::Mas4,
            _ => Self::Open,
        }
    }

    /// Age-derived division for a meet, or `Open` when either year is unknown.
    pub fn classify(birth_year: Option<i16>, system_year: Option<i16>) -> Self {
        match (birth_year, system_year) {
            (Some(dob), Some(year)) => Self::from_age(i32::from(year) - i32::from(dob)),
            _ => Self::Open,
        }
    }

    /// The record divisions a result classified into `self` is filed under.
    pub fn record_divisions(&self) -> &'static [Division] {
        RECORD_DIVISION_OVERRIDE
            .iter()
            .find(|(division, _)| division == self)
            .map(|(_, targets)| *targets)
            .unwrap_or(&[])
    }
}

impl std::str::FromStr for Division {
    type Err = RecordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "subjr" => Ok(Self::Subjr),
            "jr" => Ok(Self::Jr),
            "open" => Ok(Self::Open),
            "mas1" => Ok(Self::Mas1),
            "mas2" => Ok(Self::Mas2),
            "mas3" => Ok(Self::Mas3),
            "mas4" => Ok(Self::Mas4),
            "guest" => Ok(Self::Guest),
            _ => Err(RecordsError::UnknownDivision(s.to_string())),
        }
    }
}

impl std::fmt::Display for Division {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parses_back() {
        for division in Division::RECORD_DIVISIONS {
            assert_eq!(division.to_string().parse::<Division>(), Ok(division));
        }
        assert_eq!(Division::Mas3.to_string(), "mas3");
    }

    #[test]
    fn test_age_bands() {
        assert_eq!(Division::from_age(13), Division::Open);
        assert_eq!(Division::from_age(14), Division::Subjr);
        assert_eq!(Division::from_age(18), Division::Subjr);
        assert_eq!(Division::from_age(19), Division::Jr);
        assert_eq!(Division::from_age(23), Division::Jr);
        assert_eq!(Division::from_age(24), Division::Open);
        assert_eq!(Division::from_age(39), Division::Open);
        assert_eq!(Division::from_age(40), Division::Mas1);
        assert_eq!(Division::from_age(55), Division::Mas2);
        assert_eq!(Division::from_age(69), Division::Mas3);
        assert_eq!(Division::from_age(85), Division::Mas4);
    }

    #[test]
    fn test_classify_without_birth_year_or_system_year_is_open() {
        assert_eq!(Division::classify(None, Some(2024)), Division::Open);
        assert_eq!(Division::classify(Some(2006), None), Division::Open);
        assert_eq!(Division::classify(Some(2006), Some(2024)), Division::Subjr);
    }

    #[test]
    fn test_record_divisions_follow_override_table() {
        assert_eq!(Division::Jr.record_divisions(), &[Division::Jr, Division::Open]);
        assert_eq!(
            Division::Mas4.record_divisions(),
            &[
                Division::Mas4,
                Division::Mas3,
                Division::Mas2,
                Division::Mas1,
                Division::Open
            ]
        );
        assert_eq!(Division::Guest.record_divisions(), &[Division::Guest]);
    }

    #[test]
    fn test_every_record_division_counts_toward_itself_and_open() {
        for division in Division::RECORD_DIVISIONS {
            let targets = division.record_divisions();
            assert_eq!(targets.first(), Some(&division));
            assert_eq!(targets.last(), Some(&Division::Open));
        }
    }
}
