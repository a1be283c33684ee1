use records::RawEntry;
use sqlx::PgPool;

use crate::error::Result;
use crate::models::{LegacyMeetResultRow, MeetResultRow};

/// Reads raw meet entries from both the modern and the legacy results table.
pub struct ResultRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ResultRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All entries of the given meets
    pub async fn list_for_meets(&self, meet_ids: &[i32]) -> Result<Vec<RawEntry>> {
        if meet_ids.is_empty() {
            return Ok(Vec::new());
        }

        let modern_sql = format!("{} WHERE meet_id = ANY($1)", MeetResultRow::select());
        let legacy_sql = format!("{} WHERE meet_id = ANY($1)", LegacyMeetResultRow::select());

        let (modern, legacy) = tokio::try_join!(
            sqlx::query_as::<_, MeetResultRow>(&modern_sql)
                .bind(meet_ids)
                .fetch_all(self.pool),
            sqlx::query_as::<_, LegacyMeetResultRow>(&legacy_sql)
                .bind(meet_ids)
                .fetch_all(self.pool),
        )?;

        into_entries(modern, legacy)
    }

    /// Every entry of one athlete
    pub async fn list_for_athlete(&self, vpf_id: &str) -> Result<Vec<RawEntry>> {
        let modern_sql = format!("{} WHERE vpf_id = $1", MeetResultRow::select());
        let legacy_sql = format!("{} WHERE vpf_id = $1", LegacyMeetResultRow::select());

        let (modern, legacy) = tokio::try_join!(
            sqlx::query_as::<_, MeetResultRow>(&modern_sql)
                .bind(vpf_id)
                .fetch_all(self.pool),
            sqlx::query_as::<_, LegacyMeetResultRow>(&legacy_sql)
                .bind(vpf_id)
                .fetch_all(self.pool),
        )?;

        into_entries(modern, legacy)
    }
}

fn into_entries(
    modern: Vec<MeetResultRow>,
    legacy: Vec<LegacyMeetResultRow>,
) -> Result<Vec<RawEntry>> {
    modern
        .into_iter()
        .map(RawEntry::try_from)
        .chain(legacy.into_iter().map(RawEntry::try_from))
        .collect()
}
