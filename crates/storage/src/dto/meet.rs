use records::MeetResult;
use serde::Serialize;

use crate::models::{AthletePublic, Meet};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetDetailResponse {
    pub meet: Meet,
    pub results: Vec<MeetResult>,
    pub athletes: Vec<AthletePublic>,
}
