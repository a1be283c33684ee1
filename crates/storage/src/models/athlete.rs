use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Public columns of `users`.
pub(crate) const ATHLETE_PUBLIC_COLUMNS: &str = r#"
    vpf_id, full_name, nationality, dob, instagram_username, slug, decorator1, decorator2
"#;

/// Athlete profile fields that may be shown to anyone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AthletePublic {
    pub vpf_id: String,
    pub full_name: String,
    pub nationality: Option<String>,
    /// Birth year.
    pub dob: Option<i16>,
    pub instagram_username: Option<String>,
    pub slug: Option<String>,
    pub decorator1: Option<String>,
    pub decorator2: Option<String>,
}

/// Birth year lookup keyed by VPF id, as consumed by the record computation.
pub fn birth_years(athletes: &[AthletePublic]) -> HashMap<String, Option<i16>> {
    athletes
        .iter()
        .map(|athlete| (athlete.vpf_id.clone(), athlete.dob))
        .collect()
}
