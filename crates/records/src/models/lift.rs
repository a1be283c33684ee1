use serde::{Deserialize, Serialize};

use crate::RecordsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lift {
    Squat,
    Bench,
    Deadlift,
    Total,
}

impl Lift {
    /// Record categories in processing order.
    pub const ALL: [Lift; 4] = [Lift::Squat, Lift::Bench, Lift::Deadlift, Lift::Total];

    /// The three contested movements, in competition order.
    pub const MOVEMENTS: [Lift; 3] = [Lift::Squat, Lift::Bench, Lift::Deadlift];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Squat => "squat",
            Self::Bench => "bench",
            Self::Deadlift => "deadlift",
            Self::Total => "total",
        }
    }
}

impl std::str::FromStr for Lift {
    type Err = RecordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "squat" => Ok(Self::Squat),
            "bench" => Ok(Self::Bench),
            "deadlift" => Ok(Self::Deadlift),
            "total" => Ok(Self::Total),
            _ => Err(RecordsError::UnknownLift(s.to_string())),
        }
    }
}

impl std::fmt::Display for Lift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lift_parsing() {
        assert_eq!(" Deadlift ".parse::<Lift>(), Ok(Lift::Deadlift));
        assert_eq!(Lift::Total.to_string(), "total");
        assert_eq!(
            "snatch".parse::<Lift>(),
            Err(RecordsError::UnknownLift("snatch".to_string()))
        );
    }
}
