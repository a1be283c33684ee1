use records::{RecordHistory, RecordSlot};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{AthletePublic, Meet};

/// Parameters shared by the record snapshot and the record history
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RecordsQuery {
    #[validate(range(min = 1900, max = 2100, message = "Year must be between 1900 and 2100"))]
    pub year: Option<i16>,
}

/// Record board as of a system year, with the meets and record holders it references
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordsResponse {
    pub records: Vec<RecordSlot>,
    pub meets: Vec<Meet>,
    pub athletes: Vec<AthletePublic>,
}

/// Records broken during one system year
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    #[serde(flatten)]
    pub history: RecordHistory,
    pub meets: Vec<Meet>,
    pub athletes: Vec<AthletePublic>,
}
