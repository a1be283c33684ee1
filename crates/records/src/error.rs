use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordsError {
    #[error("Unknown sex: '{0}'")]
    UnknownSex(String),

    #[error("Unknown division: '{0}'")]
    UnknownDivision(String),

    #[error("Unknown meet type: '{0}'")]
    UnknownMeetType(String),

    #[error("Unknown lift: '{0}'")]
    UnknownLift(String),
}
