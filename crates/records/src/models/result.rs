use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Attempts, EntryFormat, EntryInfo, Lift};

/// Position of a result inside its meet/sex/class/division group.
///
/// Serialized as a plain number, with [`Placement::DISQUALIFIED`] standing for
/// a disqualified entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", from = "u32")]
pub enum Placement {
    Ranked(u32),
    Disqualified,
}

impl Placement {
    pub const DISQUALIFIED: u32 = 99;

    pub fn rank(&self) -> Option<u32> {
        match self {
            Self::Ranked(rank) => Some(*rank),
            Self::Disqualified => None,
        }
    }
}

impl From<Placement> for u32 {
    fn from(placement: Placement) -> Self {
        match placement {
            Placement::Ranked(rank) => rank,
            Placement::Disqualified => Placement::DISQUALIFIED,
        }
    }
}

impl From<u32> for Placement {
    fn from(value: u32) -> Self {
        if value == Self::DISQUALIFIED {
            Self::Disqualified
        } else {
            Self::Ranked(value)
        }
    }
}

/// A meet entry with best lifts, total, GL points and placement filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetResult {
    #[serde(flatten)]
    pub info: EntryInfo,
    pub format: EntryFormat,
    /// Attempt history, all `None` for legacy entries.
    pub squat: Attempts,
    pub bench: Attempts,
    pub deadlift: Attempts,
    pub best_squat: Option<Decimal>,
    pub best_bench: Option<Decimal>,
    pub best_deadlift: Option<Decimal>,
    pub total: Option<Decimal>,
    pub gl: Option<Decimal>,
    pub placement: Placement,
}

impl MeetResult {
    pub fn best(&self, lift: Lift) -> Option<Decimal> {
        match lift {
            Lift::Squat => self.best_squat,
            Lift::Bench => self.best_bench,
            Lift::Deadlift => self.best_deadlift,
            Lift::Total => self.total,
        }
    }

    /// Attempt history of a movement; `None` for `Lift::Total`.
    pub fn attempts(&self, lift: Lift) -> Option<&Attempts> {
        match lift {
            Lift::Squat => Some(&self.squat),
            Lift::Bench => Some(&self.bench),
            Lift::Deadlift => Some(&self.deadlift),
            Lift::Total => None,
        }
    }

    pub fn is_legacy(&self) -> bool {
        self.format == EntryFormat::Legacy
    }

    pub fn is_disqualified(&self) -> bool {
        self.placement == Placement::Disqualified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_wire_format() {
        assert_eq!(serde_json::to_string(&Placement::Ranked(2)).unwrap(), "2");
        assert_eq!(serde_json::to_string(&Placement::Disqualified).unwrap(), "99");
        assert_eq!(
            serde_json::from_str::<Placement>("99").unwrap(),
            Placement::Disqualified
        );
        assert_eq!(Placement::Ranked(1).rank(), Some(1));
        assert_eq!(Placement::Disqualified.rank(), None);
    }
}
