use std::collections::BTreeSet;

use records::services::athlete_summary::{competition_history, personal_bests};
use records::{MeetResult, resolve};
use sqlx::PgPool;
use tracing::info;

use crate::dto::{AthleteDetailResponse, AthleteInclude};
use crate::error::Result;
use crate::models::AthletePublic;
use crate::repository::athlete::AthleteRepository;
use crate::repository::result::ResultRepository;

/// Active athletes, public profile fields only
pub async fn list(pool: &PgPool) -> Result<Vec<AthletePublic>> {
    let athletes = AthleteRepository::new(pool).list_active().await?;
    info!("Listed {} active athletes", athletes.len());
    Ok(athletes)
}

/// Public profile of an athlete, with the requested optional sections
pub async fn detail(
    pool: &PgPool,
    vpf_id: &str,
    include: &[AthleteInclude],
) -> Result<AthleteDetailResponse> {
    let athlete_repo = AthleteRepository::new(pool);

    if include.is_empty() {
        let athlete = athlete_repo.find_by_id(vpf_id).await?;
        return Ok(AthleteDetailResponse {
            athlete,
            personal_best: None,
            comp_history: None,
        });
    }

    let result_repo = ResultRepository::new(pool);
    let (athlete, own_entries) = tokio::try_join!(
        athlete_repo.find_by_id(vpf_id),
        result_repo.list_for_athlete(vpf_id),
    )?;

    // Placements are only meaningful against the whole field of each meet.
    let meet_ids: Vec<i32> = own_entries
        .iter()
        .map(|entry| entry.info().meet_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let results: Vec<MeetResult> = resolve(result_repo.list_for_meets(&meet_ids).await?)
        .into_iter()
        .filter(|result| result.info.vpf_id == vpf_id)
        .collect();

    info!(
        "Athlete {} has {} results across {} meets",
        vpf_id,
        results.len(),
        meet_ids.len()
    );

    let personal_best = include
        .contains(&AthleteInclude::PersonalBest)
        .then(|| personal_bests(&results));
    let comp_history = include
        .contains(&AthleteInclude::CompHistory)
        .then(|| competition_history(results));

    Ok(AthleteDetailResponse {
        athlete,
        personal_best,
        comp_history,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use assert_matches::assert_matches;
    use sqlx::postgres::PgPoolOptions;
    use std::time::Duration;

    fn unreachable_pool() -> PgPool {
        PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(200))
            .connect_lazy("postgres://vpf@127.0.0.1:1/vpf")
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_surfaces_database_errors() {
        let result = list(&unreachable_pool()).await;
        assert_matches!(result, Err(StorageError::Database(_)));
    }

    #[tokio::test]
    async fn test_detail_without_sections_only_reads_the_profile() {
        let result = detail(&unreachable_pool(), "VPF0001", &[]).await;
        assert_matches!(result, Err(StorageError::Database(_)));
    }
}
