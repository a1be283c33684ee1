use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::AthletePublic;
use crate::models::athlete::ATHLETE_PUBLIC_COLUMNS;

pub struct AthleteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find athlete by VPF id
    pub async fn find_by_id(&self, vpf_id: &str) -> Result<AthletePublic> {
        let sql = format!("SELECT {ATHLETE_PUBLIC_COLUMNS} FROM users WHERE vpf_id = $1");

        let athlete = sqlx::query_as::<_, AthletePublic>(&sql)
            .bind(vpf_id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Athletes whose account is active
    pub async fn list_active(&self) -> Result<Vec<AthletePublic>> {
        let athletes = sqlx::query_as::<_, AthletePublic>(&active_athletes_sql())
            .fetch_all(self.pool)
            .await?;

        Ok(athletes)
    }

    /// Athletes among `vpf_ids`; unknown ids are skipped
    pub async fn list_by_ids(&self, vpf_ids: &[String]) -> Result<Vec<AthletePublic>> {
        if vpf_ids.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "SELECT {ATHLETE_PUBLIC_COLUMNS} FROM users WHERE vpf_id = ANY($1) ORDER BY vpf_id"
        );

        let athletes = sqlx::query_as::<_, AthletePublic>(&sql)
            .bind(vpf_ids)
            .fetch_all(self.pool)
            .await?;

        Ok(athletes)
    }

    /// Athletes with an entry at the meet, in either results table
    pub async fn list_for_meet(&self, meet_id: i32) -> Result<Vec<AthletePublic>> {
        let sql = format!(
            r#"
            SELECT {ATHLETE_PUBLIC_COLUMNS}
            FROM users
            WHERE vpf_id IN (
                SELECT vpf_id FROM meet_results WHERE meet_id = $1
                UNION
                SELECT vpf_id FROM legacy_meet_results WHERE meet_id = $1
            )
            ORDER BY vpf_id
            "#
        );

        let athletes = sqlx::query_as::<_, AthletePublic>(&sql)
            .bind(meet_id)
            .fetch_all(self.pool)
            .await?;

        Ok(athletes)
    }
}

fn active_athletes_sql() -> String {
    format!("SELECT {ATHLETE_PUBLIC_COLUMNS} FROM users WHERE active = true ORDER BY vpf_id")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_athletes_select_public_columns_only() {
        let sql = active_athletes_sql();

        assert!(sql.contains("WHERE active = true"));
        assert!(sql.contains("instagram_username"));
        assert!(!sql.contains("password"));
        assert!(!sql.contains('*'));
    }
}
