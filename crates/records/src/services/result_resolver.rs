use std::cmp::Ordering;
use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use super::gl_points::gl_points_for;
use crate::models::weight_class::is_valid_bodyweight;
use crate::models::{Attempts, Division, MeetResult, Placement, RawEntry, Sex};

/// Best of three attempts: the maximum of the taken attempts and 0, or `None`
/// when no attempt was taken at all.
pub fn best_lift(attempts: &Attempts) -> Option<Decimal> {
    attempts
        .iter()
        .flatten()
        .copied()
        .fold(None, |best, weight| {
            Some(best.unwrap_or(Decimal::ZERO).max(weight))
        })
}

/// Sum of the available bests, `None` when no movement has a best.
pub fn total_of(bests: [Option<Decimal>; 3]) -> Option<Decimal> {
    bests
        .into_iter()
        .flatten()
        .fold(None, |sum, best| Some(sum.unwrap_or(Decimal::ZERO) + best))
}

/// An entry is out of the placings when a movement is missing or zero, the
/// bodyweight falls outside its class, or it was entered unranked.
pub fn is_disqualified(result: &MeetResult) -> bool {
    let missing_lift = [result.best_squat, result.best_bench, result.best_deadlift]
        .into_iter()
        .any(|best| best.is_none_or(|weight| weight.is_zero()));

    missing_lift
        || !is_valid_bodyweight(
            result.info.body_weight,
            result.info.weight_class,
            result.info.sex,
        )
        || result.info.ranked == Some(false)
}

fn compute(entry: RawEntry) -> MeetResult {
    let format = entry.format();

    let (info, squat, bench, deadlift, bests) = match entry {
        RawEntry::Modern(modern) => {
            let bests = [
                best_lift(&modern.squat),
                best_lift(&modern.bench),
                best_lift(&modern.deadlift),
            ];
            (modern.info, modern.squat, modern.bench, modern.deadlift, bests)
        }
        RawEntry::Legacy(legacy) => (
            legacy.info,
            [None; 3],
            [None; 3],
            [None; 3],
            [legacy.best_squat, legacy.best_bench, legacy.best_deadlift],
        ),
    };

    let total = total_of(bests);
    let gl = gl_points_for(total, info.body_weight, info.sex);
    let [best_squat, best_bench, best_deadlift] = bests;

    MeetResult {
        info,
        format,
        squat,
        bench,
        deadlift,
        best_squat,
        best_bench,
        best_deadlift,
        total,
        gl,
        placement: Placement::Disqualified,
    }
}

/// Higher total first, lighter lifter on equal totals. Unknown values sort last.
fn placing_order(a: &MeetResult, b: &MeetResult) -> Ordering {
    descending_known_first(a.total, b.total)
        .then_with(|| ascending_known_first(a.info.body_weight, b.info.body_weight))
}

fn descending_known_first(a: Option<Decimal>, b: Option<Decimal>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn ascending_known_first(a: Option<Decimal>, b: Option<Decimal>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

type PlacingGroup = (i32, Sex, i32, Division);

/// Computes bests, total, GL points and placements for raw meet entries.
///
/// Results come back in input order. Placements are assigned within each
/// (meet, sex, weight class, division) group, disqualified entries excluded.
pub fn resolve(entries: impl IntoIterator<Item = RawEntry>) -> Vec<MeetResult> {
    let mut results: Vec<MeetResult> = entries.into_iter().map(compute).collect();

    let mut groups: HashMap<PlacingGroup, Vec<usize>> = HashMap::new();
    for (index, result) in results.iter().enumerate() {
        let info = &result.info;
        groups
            .entry((info.meet_id, info.sex, info.weight_class, info.division))
            .or_default()
            .push(index);
    }

    debug!(
        entries = results.len(),
        groups = groups.len(),
        "Resolving meet results"
    );

    for indices in groups.into_values() {
        let mut ranked: Vec<usize> = indices
            .into_iter()
            .filter(|&i| !is_disqualified(&results[i]))
            .collect();

        ranked.sort_by(|&a, &b| placing_order(&results[a], &results[b]));

        for (position, index) in ranked.into_iter().enumerate() {
            results[index].placement = Placement::Ranked(position as u32 + 1);
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttemptEntry, EntryFormat, EntryInfo, LegacyEntry};

    fn kg(value: i64) -> Option<Decimal> {
        Some(Decimal::from(value))
    }

    fn lifter(vpf_id: &str, body_weight: i64) -> EntryInfo {
        EntryInfo {
            body_weight: kg(body_weight),
            ..EntryInfo::new(1, vpf_id, Sex::Male, 93)
        }
    }

    fn modern(info: EntryInfo, squat: i64, bench: i64, deadlift: i64) -> RawEntry {
        RawEntry::Modern(AttemptEntry {
            info,
            squat: [kg(squat), None, None],
            bench: [kg(bench), None, None],
            deadlift: [kg(deadlift), None, None],
        })
    }

    #[test]
    fn test_best_lift() {
        assert_eq!(best_lift(&[None, kg(180), kg(175)]), kg(180));
        assert_eq!(best_lift(&[None, None, None]), None);
        assert_eq!(best_lift(&[kg(0), kg(0), kg(0)]), kg(0));
        assert_eq!(best_lift(&[kg(-200), None, None]), kg(0));
    }

    #[test]
    fn test_total_counts_missing_movements_as_zero() {
        assert_eq!(total_of([kg(180), None, kg(220)]), kg(400));
        assert_eq!(total_of([None, None, None]), None);
        assert_eq!(total_of([kg(0), None, None]), kg(0));
    }

    #[test]
    fn test_placements_by_total() {
        let results = resolve([
            modern(lifter("A", 90), 200, 100, 200),
            modern(lifter("B", 90), 200, 120, 200),
            modern(lifter("C", 90), 180, 100, 200),
            modern(lifter("D", 90), 300, 0, 300),
        ]);

        let placements: Vec<Placement> = results.iter().map(|r| r.placement).collect();
        assert_eq!(
            placements,
            vec![
                Placement::Ranked(2),
                Placement::Ranked(1),
                Placement::Ranked(3),
                Placement::Disqualified
            ]
        );
    }

    #[test]
    fn test_lighter_lifter_wins_equal_totals() {
        let results = resolve([
            modern(lifter("heavy", 92), 200, 100, 200),
            modern(lifter("light", 88), 200, 100, 200),
        ]);

        assert_eq!(results[0].placement, Placement::Ranked(2));
        assert_eq!(results[1].placement, Placement::Ranked(1));
    }

    #[test]
    fn test_disqualification_rules() {
        let zero_bench = modern(lifter("zero", 90), 250, 0, 300);
        let out_of_class = modern(lifter("heavy", 95), 250, 150, 300);
        let unranked = modern(
            EntryInfo {
                ranked: Some(false),
                ..lifter("guest", 90)
            },
            250,
            150,
            300,
        );
        let missed_bench = RawEntry::Modern(AttemptEntry {
            info: lifter("missed", 90),
            squat: [kg(250), None, None],
            bench: [None, None, None],
            deadlift: [kg(300), None, None],
        });

        let results = resolve([zero_bench, out_of_class, unranked, missed_bench]);

        assert!(results.iter().all(MeetResult::is_disqualified));
        assert_eq!(results[3].total, kg(550));
    }

    #[test]
    fn test_groups_are_placed_independently() {
        let jr = EntryInfo {
            division: Division::Jr,
            ..lifter("junior", 90)
        };
        let results = resolve([
            modern(lifter("open", 90), 200, 100, 200),
            modern(jr, 100, 50, 100),
        ]);

        assert_eq!(results[0].placement, Placement::Ranked(1));
        assert_eq!(results[1].placement, Placement::Ranked(1));
    }

    #[test]
    fn test_legacy_entry_keeps_stored_bests() {
        let results = resolve([RawEntry::Legacy(LegacyEntry {
            info: lifter("old", 90),
            best_squat: kg(210),
            best_bench: kg(140),
            best_deadlift: kg(250),
        })]);

        let result = &results[0];
        assert_eq!(result.format, EntryFormat::Legacy);
        assert_eq!(result.squat, [None, None, None]);
        assert_eq!(result.total, kg(600));
        assert!(result.gl.is_some());
        assert_eq!(result.placement, Placement::Ranked(1));
    }

    #[test]
    fn test_gl_requires_bodyweight() {
        let info = EntryInfo::new(1, "nobw", Sex::Female, 63);
        let results = resolve([modern(info, 100, 60, 120)]);

        assert_eq!(results[0].total, kg(280));
        assert_eq!(results[0].gl, None);
        assert!(results[0].is_disqualified());
    }
}
