use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::models::{
    Attempts, Division, Lift, LiftRecord, MeetMeta, MeetResult, MeetType, RecordKey, Sex,
};

pub const DEFAULT_RECORD_START_YEAR: i16 = 2000;

/// Decides which meets count toward national records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordPolicy {
    /// First system year whose meets can set records.
    pub start_year: i16,
    pub include_legacy_meets: bool,
}

impl Default for RecordPolicy {
    fn default() -> Self {
        Self {
            start_year: DEFAULT_RECORD_START_YEAR,
            include_legacy_meets: true,
        }
    }
}

impl RecordPolicy {
    /// National, visible, dated on or after the start year, and not legacy
    /// unless legacy meets are included.
    pub fn is_eligible(&self, meet: &MeetMeta) -> bool {
        meet.meet_type == Some(MeetType::National)
            && !meet.hidden
            && (self.include_legacy_meets || !meet.legacy)
            && meet.system_year.is_some_and(|year| year >= self.start_year)
    }
}

/// Best established weight per record slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordBaseline(HashMap<RecordKey, Decimal>);

impl RecordBaseline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: &[LiftRecord]) -> Self {
        let mut baseline = Self::new();
        for record in records {
            baseline.raise(record.key(), record.record_weight);
        }
        baseline
    }

    /// Keeps the heavier of the stored and the given weight.
    pub fn raise(&mut self, key: RecordKey, weight: Decimal) {
        let best = self.0.entry(key).or_insert(weight);
        if weight > *best {
            *best = weight;
        }
    }

    pub fn get(&self, key: &RecordKey) -> Option<Decimal> {
        self.0.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Records broken during the meets of one system year.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordHistory {
    pub year: Option<i16>,
    pub meet_ids: Vec<i32>,
    pub records: Vec<LiftRecord>,
}

/// One slot of the record board, empty when nobody has lifted in it yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSlot {
    #[serde(flatten)]
    pub key: RecordKey,
    pub record: Option<LiftRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Candidate {
    lift: Lift,
    attempt: Option<u8>,
    weight: Decimal,
}

/// A candidate bound to the result and record division it came from.
#[derive(Debug, Clone, Copy)]
struct Entry<'r> {
    result: &'r MeetResult,
    candidate: Candidate,
    division: Division,
}

impl Entry<'_> {
    fn to_record(self) -> LiftRecord {
        LiftRecord {
            result: self.result.clone(),
            lift: self.candidate.lift,
            attempt: self.candidate.attempt,
            record_weight: self.candidate.weight,
            record_division: self.division,
        }
    }
}

/// Heavier first, then earlier attempt, then earlier lot. Missing attempt
/// numbers and lots sort after known ones.
fn record_order(a: &Entry<'_>, b: &Entry<'_>) -> Ordering {
    b.candidate
        .weight
        .cmp(&a.candidate.weight)
        .then_with(|| known_first(a.candidate.attempt, b.candidate.attempt))
        .then_with(|| known_first(a.result.info.lot, b.result.info.lot))
}

fn known_first<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Heaviest successful attempt with its 1-based number; the first one wins
/// on equal weight.
fn best_attempt(attempts: &Attempts) -> Option<(Decimal, u8)> {
    numbered_attempts(attempts).fold(None, |best, (weight, attempt)| match best {
        Some((best_weight, _)) if weight <= best_weight => best,
        _ => Some((weight, attempt)),
    })
}

fn numbered_attempts(attempts: &Attempts) -> impl Iterator<Item = (Decimal, u8)> + '_ {
    attempts
        .iter()
        .zip(1u8..)
        .filter_map(|(weight, attempt)| positive(*weight).map(|weight| (weight, attempt)))
}

fn positive(weight: Option<Decimal>) -> Option<Decimal> {
    weight.filter(|w| *w > Decimal::ZERO)
}

/// One candidate per lift: the best attempt of each movement, then the total.
fn best_candidates(result: &MeetResult) -> Vec<Candidate> {
    let mut candidates = Vec::with_capacity(Lift::ALL.len());

    for lift in Lift::MOVEMENTS {
        let best = if result.is_legacy() {
            positive(result.best(lift)).map(|weight| (weight, None))
        } else {
            result
                .attempts(lift)
                .and_then(best_attempt)
                .map(|(weight, attempt)| (weight, Some(attempt)))
        };

        if let Some((weight, attempt)) = best {
            candidates.push(Candidate {
                lift,
                attempt,
                weight,
            });
        }
    }

    candidates.extend(total_candidate(result));
    candidates
}

/// Every successful attempt in lifting order, then the total. Legacy entries
/// only contribute their stored bests.
fn attempt_candidates(result: &MeetResult) -> Vec<Candidate> {
    if result.is_legacy() {
        return best_candidates(result);
    }

    let mut candidates = Vec::new();

    for lift in Lift::MOVEMENTS {
        if let Some(attempts) = result.attempts(lift) {
            candidates.extend(numbered_attempts(attempts).map(|(weight, attempt)| Candidate {
                lift,
                attempt: Some(attempt),
                weight,
            }));
        }
    }

    candidates.extend(total_candidate(result));
    candidates
}

fn total_candidate(result: &MeetResult) -> Option<Candidate> {
    positive(result.total).map(|weight| Candidate {
        lift: Lift::Total,
        attempt: None,
        weight,
    })
}

/// Computes national records from resolved results.
///
/// Only results from meets the [`RecordPolicy`] accepts are considered. Each
/// result is classified into an age division (open when the birth year or the
/// meet year is unknown) and filed under every division that division counts
/// toward.
pub struct RecordAggregator<'a> {
    meets: &'a HashMap<i32, MeetMeta>,
    birth_years: &'a HashMap<String, Option<i16>>,
    policy: RecordPolicy,
}

impl<'a> RecordAggregator<'a> {
    pub fn new(
        meets: &'a HashMap<i32, MeetMeta>,
        birth_years: &'a HashMap<String, Option<i16>>,
        policy: RecordPolicy,
    ) -> Self {
        Self {
            meets,
            birth_years,
            policy,
        }
    }

    fn eligible_meet(&self, meet_id: i32) -> Option<&'a MeetMeta> {
        self.meets
            .get(&meet_id)
            .filter(|meet| self.policy.is_eligible(meet))
    }

    fn classify(&self, result: &MeetResult, meet: &MeetMeta) -> Division {
        let birth_year = self
            .birth_years
            .get(&result.info.vpf_id)
            .copied()
            .flatten();

        Division::classify(birth_year, meet.system_year)
    }

    /// Newest system year among eligible meets.
    pub fn latest_year(&self) -> Option<i16> {
        self.meets
            .values()
            .filter(|meet| self.policy.is_eligible(meet))
            .filter_map(|meet| meet.system_year)
            .max()
    }

    /// Record holder of every slot with at least one qualifying lift, using
    /// meets up to `as_of_year` (all eligible meets when `None`).
    pub fn compute_records(
        &self,
        results: &[MeetResult],
        as_of_year: Option<i16>,
    ) -> Vec<LiftRecord> {
        let mut best: BTreeMap<RecordKey, Entry<'_>> = BTreeMap::new();

        for result in results {
            let Some(meet) = self.eligible_meet(result.info.meet_id) else {
                continue;
            };
            if as_of_year.is_some_and(|year| meet.system_year > Some(year)) {
                continue;
            }

            let division = self.classify(result, meet);

            for candidate in best_candidates(result) {
                for &target in division.record_divisions() {
                    let key = RecordKey::new(
                        result.info.sex,
                        target,
                        result.info.weight_class,
                        candidate.lift,
                    );
                    let entry = Entry {
                        result,
                        candidate,
                        division: target,
                    };

                    best.entry(key)
                        .and_modify(|current| {
                            if record_order(&entry, current) == Ordering::Less {
                                *current = entry;
                            }
                        })
                        .or_insert(entry);
                }
            }
        }

        debug!(
            results = results.len(),
            records = best.len(),
            as_of_year,
            "Computed record snapshot"
        );

        best.into_values().map(Entry::to_record).collect()
    }

    /// Every record slot of the seven record divisions, filled from
    /// [`Self::compute_records`].
    pub fn record_board(&self, results: &[MeetResult], as_of_year: Option<i16>) -> Vec<RecordSlot> {
        let mut records: HashMap<RecordKey, LiftRecord> = self
            .compute_records(results, as_of_year)
            .into_iter()
            .map(|record| (record.key(), record))
            .collect();

        let mut board = Vec::new();
        for sex in Sex::ALL {
            for division in Division::RECORD_DIVISIONS {
                for lift in Lift::ALL {
                    for &weight_class in sex.weight_classes() {
                        let key = RecordKey::new(sex, division, weight_class, lift);
                        board.push(RecordSlot {
                            key,
                            record: records.remove(&key),
                        });
                    }
                }
            }
        }

        board
    }

    /// Replays results in lifting order and emits every lift that beats the
    /// running best of its slot, the running best starting from `baseline`.
    ///
    /// Results are ordered by meet year, meet, then lot; within a result
    /// squat, bench, deadlift, then total, attempts 1 to 3.
    pub fn record_progression<'r>(
        &self,
        results: impl IntoIterator<Item = &'r MeetResult>,
        baseline: &RecordBaseline,
    ) -> Vec<LiftRecord> {
        let mut ordered: Vec<(&MeetMeta, &MeetResult)> = results
            .into_iter()
            .filter_map(|result| {
                self.eligible_meet(result.info.meet_id)
                    .map(|meet| (meet, result))
            })
            .collect();

        ordered.sort_by(|(meet_a, a), (meet_b, b)| {
            meet_a
                .system_year
                .cmp(&meet_b.system_year)
                .then(meet_a.meet_id.cmp(&meet_b.meet_id))
                .then_with(|| known_first(a.info.lot, b.info.lot))
        });

        let mut running: HashMap<RecordKey, Decimal> = HashMap::new();
        let mut seen: HashSet<(&str, i32, Lift, Option<u8>, Decimal)> = HashSet::new();
        let mut records = Vec::new();

        for (meet, result) in ordered {
            let division = self.classify(result, meet);

            for candidate in attempt_candidates(result) {
                let fingerprint = (
                    result.info.vpf_id.as_str(),
                    result.info.meet_id,
                    candidate.lift,
                    candidate.attempt,
                    candidate.weight,
                );
                if !seen.insert(fingerprint) {
                    continue;
                }

                for &target in division.record_divisions() {
                    let key = RecordKey::new(
                        result.info.sex,
                        target,
                        result.info.weight_class,
                        candidate.lift,
                    );
                    let best = running
                        .entry(key)
                        .or_insert_with(|| baseline.get(&key).unwrap_or(Decimal::ZERO));

                    if candidate.weight > *best {
                        *best = candidate.weight;
                        records.push(
                            Entry {
                                result,
                                candidate,
                                division: target,
                            }
                            .to_record(),
                        );
                    }
                }
            }
        }

        debug!(
            baseline = baseline.len(),
            records = records.len(),
            "Computed record progression"
        );

        records
    }

    /// Records broken at the meets of `year`, measured against the records
    /// standing at the end of the previous year.
    ///
    /// A missing year, or one later than the newest eligible meet, resolves to
    /// the newest eligible meet's year.
    pub fn record_history(&self, results: &[MeetResult], year: Option<i16>) -> RecordHistory {
        let Some(latest) = self.latest_year() else {
            return RecordHistory::default();
        };
        let year = year.map_or(latest, |year| year.min(latest));

        let mut meet_ids: Vec<i32> = self
            .meets
            .values()
            .filter(|meet| self.policy.is_eligible(meet) && meet.system_year == Some(year))
            .map(|meet| meet.meet_id)
            .collect();
        meet_ids.sort_unstable();

        if meet_ids.is_empty() {
            return RecordHistory {
                year: Some(year),
                ..RecordHistory::default()
            };
        }

        let baseline = RecordBaseline::from_records(&self.compute_records(results, Some(year - 1)));
        let records = self.record_progression(
            results
                .iter()
                .filter(|result| meet_ids.contains(&result.info.meet_id)),
            &baseline,
        );

        RecordHistory {
            year: Some(year),
            meet_ids,
            records,
        }
    }
}
