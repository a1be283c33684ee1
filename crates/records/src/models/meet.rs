use serde::{Deserialize, Serialize};

use crate::RecordsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetType {
    National,
    Amateur,
    Professional,
    NationalQualifier,
    Other,
}

impl MeetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::National => "national",
            Self::Amateur => "amateur",
            Self::Professional => "professional",
            Self::NationalQualifier => "national_qualifier",
            Self::Other => "other",
        }
    }
}

impl std::str::FromStr for MeetType {
    type Err = RecordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "national" => Ok(Self::National),
            "amateur" => Ok(Self::Amateur),
            "professional" => Ok(Self::Professional),
            "national_qualifier" => Ok(Self::NationalQualifier),
            "other" => Ok(Self::Other),
            _ => Err(RecordsError::UnknownMeetType(s.to_string())),
        }
    }
}

/// The parts of a meet the record computation depends on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetMeta {
    pub meet_id: i32,
    pub meet_name: String,
    #[serde(rename = "type")]
    pub meet_type: Option<MeetType>,
    pub system_year: Option<i16>,
    pub hidden: bool,
    pub legacy: bool,
}
