use serde::{Deserialize, Serialize};

use super::weight_class::{WEIGHT_CLASS_FEMALE, WEIGHT_CLASS_MALE};
use crate::RecordsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Upper bounds of the weight classes contested by this sex, lightest first.
    pub fn weight_classes(&self) -> &'static [i32] {
        match self {
            Self::Male => &WEIGHT_CLASS_MALE,
            Self::Female => &WEIGHT_CLASS_FEMALE,
        }
    }
}

impl std::str::FromStr for Sex {
    type Err = RecordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            _ => Err(RecordsError::UnknownSex(s.to_string())),
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
