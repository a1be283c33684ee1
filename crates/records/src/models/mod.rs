pub mod division;
pub mod entry;
pub mod lift;
pub mod lift_record;
pub mod meet;
pub mod result;
pub mod sex;
pub mod weight_class;

pub use division::Division;
pub use entry::{AttemptEntry, Attempts, EntryFormat, EntryInfo, LegacyEntry, RawEntry};
pub use lift::Lift;
pub use lift_record::{LiftRecord, RecordKey};
pub use meet::{MeetMeta, MeetType};
pub use result::{MeetResult, Placement};
pub use sex::Sex;
