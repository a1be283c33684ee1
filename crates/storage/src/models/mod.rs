pub mod athlete;
pub mod meet;
pub mod meet_result;

pub use athlete::AthletePublic;
pub use meet::Meet;
pub use meet_result::{EntryInfoRow, LegacyMeetResultRow, MeetResultRow};
