use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Division, Sex};

/// Three attempt weights of one movement. `None` means the attempt was not taken.
pub type Attempts = [Option<Decimal>; 3];

/// Descriptive fields shared by both storage formats of a meet entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryInfo {
    pub meet_id: i32,
    pub vpf_id: String,
    pub sex: Sex,
    pub weight_class: i32,
    pub division: Division,
    pub body_weight: Option<Decimal>,
    pub platform: Option<String>,
    pub session: Option<String>,
    pub flight: Option<String>,
    pub team_id: Option<i32>,
    /// Random draw order inside the meet.
    pub lot: Option<i16>,
    pub ranked: Option<bool>,
}

impl EntryInfo {
    pub fn new(meet_id: i32, vpf_id: impl Into<String>, sex: Sex, weight_class: i32) -> Self {
        Self {
            meet_id,
            vpf_id: vpf_id.into(),
            sex,
            weight_class,
            division: Division::Open,
            body_weight: None,
            platform: None,
            session: None,
            flight: None,
            team_id: None,
            lot: None,
            ranked: Some(true),
        }
    }
}

/// A modern entry with the full attempt history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptEntry {
    #[serde(flatten)]
    pub info: EntryInfo,
    pub squat: Attempts,
    pub bench: Attempts,
    pub deadlift: Attempts,
}

/// An entry migrated from the old system, which kept only the best lifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyEntry {
    #[serde(flatten)]
    pub info: EntryInfo,
    pub best_squat: Option<Decimal>,
    pub best_bench: Option<Decimal>,
    pub best_deadlift: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryFormat {
    Modern,
    Legacy,
}

/// One row of raw meet data in either storage format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "lowercase")]
pub enum RawEntry {
    Modern(AttemptEntry),
    Legacy(LegacyEntry),
}

impl RawEntry {
    pub fn info(&self) -> &EntryInfo {
        match self {
            Self::Modern(entry) => &entry.info,
            Self::Legacy(entry) => &entry.info,
        }
    }

    pub fn format(&self) -> EntryFormat {
        match self {
            Self::Modern(_) => EntryFormat::Modern,
            Self::Legacy(_) => EntryFormat::Legacy,
        }
    }
}

impl From<AttemptEntry> for RawEntry {
    fn from(entry: AttemptEntry) -> Self {
        Self::Modern(entry)
    }
}

impl From<LegacyEntry> for RawEntry {
    fn from(entry: LegacyEntry) -> Self {
        Self::Legacy(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_format_tag_selects_variant() {
        let json = r#"{
            "format": "legacy",
            "meetId": 3,
            "vpfId": "VPF000012",
            "sex": "female",
            "weightClass": 63,
            "division": "jr",
            "bodyWeight": "61.4",
            "platform": null,
            "session": null,
            "flight": null,
            "teamId": null,
            "lot": 4,
            "ranked": true,
            "bestSquat": "120",
            "bestBench": "65.5",
            "bestDeadlift": null
        }"#;

        let entry: RawEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.format(), EntryFormat::Legacy);
        assert_eq!(entry.info().lot, Some(4));
        assert_matches!(entry, RawEntry::Legacy(LegacyEntry { best_deadlift: None, .. }));
    }
}
