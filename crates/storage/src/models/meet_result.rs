use records::{AttemptEntry, EntryInfo, LegacyEntry, RawEntry};
use rust_decimal::Decimal;
use sqlx::FromRow;

use crate::error::{Result, StorageError};

const ENTRY_COLUMNS: &str = r#"
    meet_id, vpf_id, sex::text AS sex, weight_class, division::text AS division,
    body_weight, platform, session, flight, team_id, lot, ranked
"#;

/// Columns shared by `meet_results` and `legacy_meet_results`.
#[derive(Debug, Clone, FromRow)]
pub struct EntryInfoRow {
    pub meet_id: i32,
    pub vpf_id: String,
    pub sex: String,
    pub weight_class: i32,
    pub division: String,
    pub body_weight: Option<Decimal>,
    pub platform: Option<String>,
    pub session: Option<String>,
    pub flight: Option<String>,
    pub team_id: Option<i32>,
    pub lot: Option<i16>,
    pub ranked: Option<bool>,
}

impl TryFrom<EntryInfoRow> for EntryInfo {
    type Error = StorageError;

    fn try_from(row: EntryInfoRow) -> Result<Self> {
        Ok(EntryInfo {
            meet_id: row.meet_id,
            vpf_id: row.vpf_id,
            sex: row.sex.parse()?,
            weight_class: row.weight_class,
            division: row.division.parse()?,
            body_weight: row.body_weight,
            platform: row.platform,
            session: row.session,
            flight: row.flight,
            team_id: row.team_id,
            lot: row.lot,
            ranked: row.ranked,
        })
    }
}

/// A `meet_results` row: one athlete at one meet, every attempt recorded.
#[derive(Debug, Clone, FromRow)]
pub struct MeetResultRow {
    #[sqlx(flatten)]
    pub info: EntryInfoRow,
    pub squat1: Option<Decimal>,
    pub squat2: Option<Decimal>,
    pub squat3: Option<Decimal>,
    pub bench1: Option<Decimal>,
    pub bench2: Option<Decimal>,
    pub bench3: Option<Decimal>,
    pub deadlift1: Option<Decimal>,
    pub deadlift2: Option<Decimal>,
    pub deadlift3: Option<Decimal>,
}

impl MeetResultRow {
    pub(crate) fn select() -> String {
        format!(
            "SELECT {ENTRY_COLUMNS}, squat1, squat2, squat3, bench1, bench2, bench3, \
             deadlift1, deadlift2, deadlift3 FROM meet_results"
        )
    }
}

impl TryFrom<MeetResultRow> for RawEntry {
    type Error = StorageError;

    fn try_from(row: MeetResultRow) -> Result<Self> {
        Ok(RawEntry::Modern(AttemptEntry {
            info: row.info.try_into()?,
            squat: [row.squat1, row.squat2, row.squat3],
            bench: [row.bench1, row.bench2, row.bench3],
            deadlift: [row.deadlift1, row.deadlift2, row.deadlift3],
        }))
    }
}

/// A `legacy_meet_results` row, carrying only the best of each movement.
#[derive(Debug, Clone, FromRow)]
pub struct LegacyMeetResultRow {
    #[sqlx(flatten)]
    pub info: EntryInfoRow,
    pub best_squat: Option<Decimal>,
    pub best_bench: Option<Decimal>,
    pub best_deadlift: Option<Decimal>,
}

impl LegacyMeetResultRow {
    pub(crate) fn select() -> String {
        format!(
            "SELECT {ENTRY_COLUMNS}, best_squat, best_bench, best_deadlift \
             FROM legacy_meet_results"
        )
    }
}

impl TryFrom<LegacyMeetResultRow> for RawEntry {
    type Error = StorageError;

    fn try_from(row: LegacyMeetResultRow) -> Result<Self> {
        Ok(RawEntry::Legacy(LegacyEntry {
            info: row.info.try_into()?,
            best_squat: row.best_squat,
            best_bench: row.best_bench,
            best_deadlift: row.best_deadlift,
        }))
    }
}
