use std::collections::{BTreeSet, HashMap, HashSet};

use records::{LiftRecord, MeetMeta, MeetResult, RecordAggregator, RecordPolicy, resolve};
use sqlx::PgPool;
use tracing::{info, warn};
use validator::Validate;

use crate::dto::{HistoryResponse, RecordsQuery, RecordsResponse};
use crate::error::Result;
use crate::models::athlete::birth_years;
use crate::models::{AthletePublic, Meet};
use crate::repository::athlete::AthleteRepository;
use crate::repository::meet::MeetRepository;
use crate::repository::result::ResultRepository;

/// Rows the record computation reads, for national meets up to a year.
struct RecordSource {
    meets: Vec<Meet>,
    index: HashMap<i32, MeetMeta>,
    athletes: Vec<AthletePublic>,
    results: Vec<MeetResult>,
}

async fn load_source(
    pool: &PgPool,
    policy: &RecordPolicy,
    max_year: Option<i16>,
) -> Result<RecordSource> {
    let meets = MeetRepository::new(pool).list_national(max_year).await?;
    let index = meets
        .iter()
        .map(|meet| Ok((meet.meet_id, meet.to_meta()?)))
        .collect::<Result<HashMap<_, _>>>()?;

    let meet_ids: Vec<i32> = index
        .values()
        .filter(|meta| policy.is_eligible(meta))
        .map(|meta| meta.meet_id)
        .collect();

    let entries = ResultRepository::new(pool)
        .list_for_meets(&meet_ids)
        .await?;
    let results = resolve(entries);

    let vpf_ids = distinct_athletes(&results);
    let athletes = AthleteRepository::new(pool).list_by_ids(&vpf_ids).await?;
    if athletes.len() < vpf_ids.len() {
        warn!(
            "{} athletes with results have no user row and count as open",
            vpf_ids.len() - athletes.len()
        );
    }

    info!(
        "Loaded {} results from {} eligible meets",
        results.len(),
        meet_ids.len()
    );

    Ok(RecordSource {
        meets,
        index,
        athletes,
        results,
    })
}

fn distinct_athletes(results: &[MeetResult]) -> Vec<String> {
    results
        .iter()
        .map(|result| result.info.vpf_id.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Keeps the meets and athletes that `records` refer to, plus any meet in `meet_ids`.
fn referenced<'r>(
    source: RecordSource,
    records: impl IntoIterator<Item = &'r LiftRecord>,
    meet_ids: &[i32],
) -> (Vec<Meet>, Vec<AthletePublic>) {
    let mut meet_ids: HashSet<i32> = meet_ids.iter().copied().collect();
    let mut vpf_ids = HashSet::new();
    for record in records {
        meet_ids.insert(record.result.info.meet_id);
        vpf_ids.insert(record.result.info.vpf_id.as_str());
    }

    let meets = source
        .meets
        .into_iter()
        .filter(|meet| meet_ids.contains(&meet.meet_id))
        .collect();
    let athletes = source
        .athletes
        .into_iter()
        .filter(|athlete| vpf_ids.contains(athlete.vpf_id.as_str()))
        .collect();

    (meets, athletes)
}

/// Current record board, or the board as it stood at the end of `query.year`
pub async fn snapshot(
    pool: &PgPool,
    policy: RecordPolicy,
    query: &RecordsQuery,
) -> Result<RecordsResponse> {
    query.validate()?;

    let source = load_source(pool, &policy, query.year).await?;
    let birth_years = birth_years(&source.athletes);
    let board = RecordAggregator::new(&source.index, &birth_years, policy)
        .record_board(&source.results, query.year);

    let held: Vec<LiftRecord> = board
        .iter()
        .filter_map(|slot| slot.record.clone())
        .collect();
    info!(
        "Record board as of {:?}: {} of {} slots held",
        query.year,
        held.len(),
        board.len()
    );

    let (meets, athletes) = referenced(source, &held, &[]);

    Ok(RecordsResponse {
        records: board,
        meets,
        athletes,
    })
}

/// Records broken during `query.year`, the newest eligible year when absent
pub async fn history(
    pool: &PgPool,
    policy: RecordPolicy,
    query: &RecordsQuery,
) -> Result<HistoryResponse> {
    query.validate()?;

    let source = load_source(pool, &policy, query.year).await?;
    let birth_years = birth_years(&source.athletes);
    let history = RecordAggregator::new(&source.index, &birth_years, policy)
        .record_history(&source.results, query.year);

    match history.year {
        Some(year) => info!(
            "{} records broken in {} across {} meets",
            history.records.len(),
            year,
            history.meet_ids.len()
        ),
        None => warn!("No eligible national meet up to {:?}", query.year),
    }

    let (meets, athletes) = referenced(source, &history.records, &history.meet_ids);

    Ok(HistoryResponse {
        history,
        meets,
        athletes,
    })
}
