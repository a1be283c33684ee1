use chrono::NaiveDate;
use records::{MeetMeta, MeetType};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::Result;

/// Column list matching [`Meet`]. Enum columns are read as text.
pub(crate) const MEET_COLUMNS: &str = r#"
    meet_id, meet_name, city, host_date, type::text AS meet_type, media_link,
    meet_slug, system_year, hidden, COALESCE(legacy, false) AS legacy
"#;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Meet {
    pub meet_id: i32,
    pub meet_name: String,
    pub city: Option<String>,
    pub host_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub meet_type: Option<String>,
    pub media_link: Option<String>,
    pub meet_slug: String,
    pub system_year: Option<i16>,
    pub hidden: bool,
    pub legacy: bool,
}

impl Meet {
    pub fn to_meta(&self) -> Result<MeetMeta> {
        let meet_type = self
            .meet_type
            .as_deref()
            .map(str::parse::<MeetType>)
            .transpose()?;

        Ok(MeetMeta {
            meet_id: self.meet_id,
            meet_name: self.meet_name.clone(),
            meet_type,
            system_year: self.system_year,
            hidden: self.hidden,
            legacy: self.legacy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use records::RecordsError;

    fn meet(meet_type: Option<&str>) -> Meet {
        Meet {
            meet_id: 12,
            meet_name: "Vietnam Powerlifting Championship".to_string(),
            city: Some("Hanoi".to_string()),
            host_date: NaiveDate::from_ymd_opt(2024, 8, 17),
            meet_type: meet_type.map(str::to_string),
            media_link: None,
            meet_slug: "vpc-2024".to_string(),
            system_year: Some(2024),
            hidden: false,
            legacy: false,
        }
    }

    #[test]
    fn test_to_meta_parses_meet_type() {
        let meta = meet(Some("national_qualifier")).to_meta().unwrap();
        assert_eq!(meta.meet_type, Some(MeetType::NationalQualifier));
        assert_eq!(meta.system_year, Some(2024));

        assert_eq!(meet(None).to_meta().unwrap().meet_type, None);
    }

    #[test]
    fn test_to_meta_rejects_unknown_meet_type() {
        let error = meet(Some("regional")).to_meta().unwrap_err();
        assert!(matches!(
            error,
            StorageError::InvalidData(RecordsError::UnknownMeetType(_))
        ));
    }
}
