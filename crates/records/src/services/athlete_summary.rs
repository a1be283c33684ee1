use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Lift, MeetResult};

/// An athlete's heaviest successful attempt of one movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalBest {
    pub vpf_id: String,
    pub meet_id: i32,
    pub lift: Lift,
    /// Unknown for lifts coming from legacy results.
    pub attempt: Option<u8>,
    pub weight: Decimal,
}

/// Personal bests of squat, bench and deadlift across `results`, which are
/// expected to belong to one athlete. Movements without a successful lift are
/// left out.
pub fn personal_bests(results: &[MeetResult]) -> Vec<PersonalBest> {
    Lift::MOVEMENTS
        .into_iter()
        .filter_map(|lift| {
            results
                .iter()
                .flat_map(|result| successful_lifts(result, lift))
                .reduce(|best, current| {
                    if current.weight > best.weight {
                        current
                    } else {
                        best
                    }
                })
        })
        .collect()
}

fn successful_lifts(result: &MeetResult, lift: Lift) -> Vec<PersonalBest> {
    let personal_best = |weight: Decimal, attempt: Option<u8>| PersonalBest {
        vpf_id: result.info.vpf_id.clone(),
        meet_id: result.info.meet_id,
        lift,
        attempt,
        weight,
    };

    if result.is_legacy() {
        return result
            .best(lift)
            .filter(|weight| *weight > Decimal::ZERO)
            .map(|weight| personal_best(weight, None))
            .into_iter()
            .collect();
    }

    result
        .attempts(lift)
        .into_iter()
        .flat_map(|attempts| attempts.iter().zip(1u8..))
        .filter_map(|(weight, attempt)| {
            weight
                .filter(|weight| *weight > Decimal::ZERO)
                .map(|weight| personal_best(weight, Some(attempt)))
        })
        .collect()
}

/// Competition history, newest meet first.
pub fn competition_history(mut results: Vec<MeetResult>) -> Vec<MeetResult> {
    results.sort_by(|a, b| b.info.meet_id.cmp(&a.info.meet_id));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttemptEntry, EntryInfo, LegacyEntry, RawEntry, Sex};
    use crate::services::result_resolver::resolve;

    fn kg(value: i64) -> Option<Decimal> {
        Some(Decimal::from(value))
    }

    fn modern(meet_id: i32, squat: [Option<Decimal>; 3]) -> RawEntry {
        RawEntry::Modern(AttemptEntry {
            info: EntryInfo::new(meet_id, "VPF000001", Sex::Male, 83),
            squat,
            bench: [kg(120), kg(-125), None],
            deadlift: [None, None, None],
        })
    }

    #[test]
    fn test_personal_bests_pick_heaviest_attempt() {
        let results = resolve([
            modern(1, [kg(180), kg(-190), None]),
            modern(2, [kg(185), kg(190), kg(190)]),
        ]);

        let bests = personal_bests(&results);

        assert_eq!(bests.len(), 2);
        assert_eq!(bests[0].lift, Lift::Squat);
        assert_eq!((bests[0].meet_id, bests[0].attempt), (2, Some(2)));
        assert_eq!(Some(bests[0].weight), kg(190));
        assert_eq!(bests[1].lift, Lift::Bench);
        assert_eq!((bests[1].meet_id, bests[1].attempt), (1, Some(1)));
    }

    #[test]
    fn test_legacy_personal_best_has_no_attempt() {
        let results = resolve([
            modern(2, [kg(180), None, None]),
            RawEntry::Legacy(LegacyEntry {
                info: EntryInfo::new(1, "VPF000001", Sex::Male, 83),
                best_squat: kg(200),
                best_bench: None,
                best_deadlift: kg(260),
            }),
        ]);

        let bests = personal_bests(&results);
        let squat = bests.iter().find(|b| b.lift == Lift::Squat).unwrap();
        let deadlift = bests.iter().find(|b| b.lift == Lift::Deadlift).unwrap();

        assert_eq!((squat.meet_id, squat.attempt), (1, None));
        assert_eq!(Some(deadlift.weight), kg(260));
    }

    #[test]
    fn test_history_is_newest_first() {
        let results = resolve([
            modern(3, [kg(180), None, None]),
            modern(7, [kg(180), None, None]),
            modern(5, [kg(180), None, None]),
        ]);

        let meet_ids: Vec<i32> = competition_history(results)
            .iter()
            .map(|r| r.info.meet_id)
            .collect();
        assert_eq!(meet_ids, vec![7, 5, 3]);
    }
}
