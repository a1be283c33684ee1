pub mod error;
pub mod models;
pub mod services;

pub use error::RecordsError;
pub use models::{
    AttemptEntry, Attempts, Division, EntryFormat, EntryInfo, LegacyEntry, Lift, LiftRecord,
    MeetMeta, MeetResult, MeetType, Placement, RawEntry, RecordKey, Sex,
};
pub use services::athlete_summary::PersonalBest;
pub use services::record_aggregator::{
    RecordAggregator, RecordBaseline, RecordHistory, RecordPolicy, RecordSlot,
};
pub use services::result_resolver::resolve;
