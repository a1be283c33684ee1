use std::str::FromStr;

use records::{MeetResult, PersonalBest};
use serde::{Deserialize, Serialize};

use crate::models::AthletePublic;

/// Optional sections of the athlete detail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AthleteInclude {
    #[serde(rename = "personalBest")]
    PersonalBest,
    #[serde(rename = "compHistory")]
    CompHistory,
}

impl AthleteInclude {
    pub fn as_str(self) -> &'static str {
        match self {
            AthleteInclude::PersonalBest => "personalBest",
            AthleteInclude::CompHistory => "compHistory",
        }
    }
}

impl FromStr for AthleteInclude {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "personalBest" => Ok(AthleteInclude::PersonalBest),
            "compHistory" => Ok(AthleteInclude::CompHistory),
            other => Err(format!(
                "unknown include '{other}', expected personalBest or compHistory"
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteDetailResponse {
    pub athlete: AthletePublic,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_best: Option<Vec<PersonalBest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comp_history: Option<Vec<MeetResult>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_include() {
        assert_eq!("personalBest".parse(), Ok(AthleteInclude::PersonalBest));
        assert_eq!("compHistory".parse(), Ok(AthleteInclude::CompHistory));
        assert!("personal_best".parse::<AthleteInclude>().is_err());
    }

    #[test]
    fn test_sections_omitted_when_not_requested() {
        let response = AthleteDetailResponse {
            athlete: AthletePublic {
                vpf_id: "VPF0001".to_string(),
                full_name: "Nguyen Van A".to_string(),
                nationality: Some("VN".to_string()),
                dob: Some(1995),
                instagram_username: None,
                slug: Some("nguyen-van-a".to_string()),
                decorator1: None,
                decorator2: None,
            },
            personal_best: Some(Vec::new()),
            comp_history: None,
        };
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["athlete"]["vpfId"], "VPF0001");
        assert!(json["personalBest"].as_array().unwrap().is_empty());
        assert!(json.get("compHistory").is_none());
    }
}
