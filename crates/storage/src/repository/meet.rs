use sqlx::{PgPool, QueryBuilder};

use crate::error::{Result, StorageError};
use crate::models::Meet;
use crate::models::meet::MEET_COLUMNS;

pub struct MeetRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MeetRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List meets that are not hidden, most recent first
    pub async fn list_visible(&self) -> Result<Vec<Meet>> {
        let sql = format!(
            "SELECT {MEET_COLUMNS} FROM meets WHERE hidden = false \
             ORDER BY host_date DESC NULLS LAST, meet_id DESC"
        );

        let meets = sqlx::query_as::<_, Meet>(&sql)
            .fetch_all(self.pool)
            .await?;

        Ok(meets)
    }

    /// Find meet by ID
    pub async fn find_by_id(&self, meet_id: i32) -> Result<Meet> {
        let sql = format!("SELECT {MEET_COLUMNS} FROM meets WHERE meet_id = $1");

        let meet = sqlx::query_as::<_, Meet>(&sql)
            .bind(meet_id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(meet)
    }

    /// List visible national meets, optionally up to and including `max_year`
    pub async fn list_national(&self, max_year: Option<i16>) -> Result<Vec<Meet>> {
        let mut query = QueryBuilder::new(format!(
            "SELECT {MEET_COLUMNS} FROM meets WHERE type = 'national' AND hidden = false"
        ));

        if let Some(year) = max_year {
            query.push(" AND system_year <= ");
            query.push_bind(year);
        }

        query.push(" ORDER BY system_year, meet_id");

        let meets = query
            .build_query_as::<Meet>()
            .fetch_all(self.pool)
            .await?;

        Ok(meets)
    }
}
