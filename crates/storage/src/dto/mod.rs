pub mod athlete;
pub mod common;
pub mod meet;
pub mod records;

pub use athlete::{AthleteDetailResponse, AthleteInclude};
pub use common::{ApiResponse, LocalizedMessage};
pub use meet::MeetDetailResponse;
pub use self::records::{HistoryResponse, RecordsQuery, RecordsResponse};
