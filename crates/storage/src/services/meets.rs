use records::resolve;
use sqlx::PgPool;
use tracing::info;

use crate::dto::MeetDetailResponse;
use crate::error::Result;
use crate::models::Meet;
use crate::repository::athlete::AthleteRepository;
use crate::repository::meet::MeetRepository;
use crate::repository::result::ResultRepository;

/// Visible meets, newest first
pub async fn list(pool: &PgPool) -> Result<Vec<Meet>> {
    let meets = MeetRepository::new(pool).list_visible().await?;
    info!("Listed {} meets", meets.len());
    Ok(meets)
}

/// One meet with its resolved results and participants
pub async fn detail(pool: &PgPool, meet_id: i32) -> Result<MeetDetailResponse> {
    let meet_repo = MeetRepository::new(pool);
    let result_repo = ResultRepository::new(pool);
    let athlete_repo = AthleteRepository::new(pool);
    let meet_ids = [meet_id];

    let (meet, entries, athletes) = tokio::try_join!(
        meet_repo.find_by_id(meet_id),
        result_repo.list_for_meets(&meet_ids),
        athlete_repo.list_for_meet(meet_id),
    )?;

    let results = resolve(entries);
    info!(
        "Meet {} has {} results from {} athletes",
        meet.meet_id,
        results.len(),
        athletes.len()
    );

    Ok(MeetDetailResponse {
        meet,
        results,
        athletes,
    })
}
