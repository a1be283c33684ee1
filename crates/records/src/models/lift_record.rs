use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Division, Lift, MeetResult, Sex};

/// Identifies one national record slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordKey {
    pub sex: Sex,
    pub division: Division,
    pub weight_class: i32,
    pub lift: Lift,
}

impl RecordKey {
    pub fn new(sex: Sex, division: Division, weight_class: i32, lift: Lift) -> Self {
        Self {
            sex,
            division,
            weight_class,
            lift,
        }
    }
}

/// A result filed as a record (or record candidate) for one lift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiftRecord {
    #[serde(flatten)]
    pub result: MeetResult,
    pub lift: Lift,
    /// Attempt that produced the weight. Unset for totals and legacy entries.
    pub attempt: Option<u8>,
    pub record_weight: Decimal,
    pub record_division: Division,
}

impl LiftRecord {
    pub fn key(&self) -> RecordKey {
        RecordKey::new(
            self.result.info.sex,
            self.record_division,
            self.result.info.weight_class,
            self.lift,
        )
    }
}
