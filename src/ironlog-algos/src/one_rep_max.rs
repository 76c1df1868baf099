use chrono::NaiveDateTime;
use ironlog_types::SetRecord;
use serde::Serialize;

use crate::helpers::math::round_1;

pub struct OneRepMaxEstimator;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OneRepMaxEntry {
    pub date: NaiveDateTime,
    pub weight: f64,
    pub reps: i32,
    pub estimated_1rm: f64,
    pub rpe: Option<i32>,
    pub workout_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OneRepMaxSummary {
    pub exercise_name: String,
    pub muscle_group: String,
    pub max_estimated_1rm: f64,
    pub history: Vec<OneRepMaxEntry>,
}

impl OneRepMaxEstimator {
    /// Entries kept in the summary view.
    pub const SUMMARY_LIMIT: usize = 20;

    /// Epley: `weight * (1 + reps / 30)`, rounded to 0.1.
    pub fn epley(weight: f64, reps: i32) -> f64 {
        round_1(weight * (1.0 + f64::from(reps) / 30.0))
    }

    /// Lazily estimates every qualifying set, keeping the order of `sets`.
    ///
    /// Warmups and sets without a positive weight and rep count are skipped.
    /// The iterator is `Clone`, so it can be walked again from the start.
    pub fn estimate(sets: &[SetRecord]) -> impl Iterator<Item = OneRepMaxEntry> + Clone + '_ {
        sets.iter().filter_map(|set| {
            let (weight, reps) = set.working_load()?;
            if weight <= 0.0 || reps <= 0 {
                return None;
            }
            Some(OneRepMaxEntry {
                date: set.date,
                weight,
                reps,
                estimated_1rm: Self::epley(weight, reps),
                rpe: set.rpe,
                workout_id: set.workout_id,
            })
        })
    }

    /// `sets` must be ordered newest first; the max covers the full history
    /// while only the newest [`Self::SUMMARY_LIMIT`] entries are returned.
    pub fn summarize(
        exercise_name: impl Into<String>,
        muscle_group: impl Into<String>,
        sets: &[SetRecord],
    ) -> OneRepMaxSummary {
        let entries = Self::estimate(sets);

        let max_estimated_1rm = entries
            .clone()
            .map(|e| e.estimated_1rm)
            .reduce(f64::max)
            .unwrap_or_default();

        OneRepMaxSummary {
            exercise_name: exercise_name.into(),
            muscle_group: muscle_group.into(),
            max_estimated_1rm,
            history: entries.take(Self::SUMMARY_LIMIT).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta};

    fn base() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 31)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap()
    }

    fn set(day_offset: i64, weight: f64, reps: i32, is_warmup: bool) -> SetRecord {
        SetRecord {
            workout_id: day_offset as i32 + 1,
            date: base() - TimeDelta::days(day_offset),
            exercise_id: 1,
            exercise_name: "Squat".into(),
            muscle_group: "Legs".into(),
            weight: Some(weight),
            reps: Some(reps),
            rpe: Some(8),
            is_warmup,
        }
    }

    #[test]
    fn epley_reference_value() {
        assert_eq!(OneRepMaxEstimator::epley(100.0, 5), 116.7);
        assert_eq!(OneRepMaxEstimator::epley(100.0, 30), 200.0);
    }

    #[test]
    fn empty_history() {
        let summary = OneRepMaxEstimator::summarize("Squat", "Legs", &[]);
        assert_eq!(summary.max_estimated_1rm, 0.0);
        assert!(summary.history.is_empty());
    }

    #[test]
    fn skips_warmups_and_empty_sets() {
        let mut no_reps = set(1, 80.0, 5, false);
        no_reps.reps = None;
        let sets = vec![
            set(0, 60.0, 10, true),
            no_reps,
            set(2, 0.0, 10, false),
            set(3, 100.0, 5, false),
        ];
        let entries: Vec<_> = OneRepMaxEstimator::estimate(&sets).collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].estimated_1rm, 116.7);
        assert_eq!(entries[0].workout_id, 4);
        assert_eq!(entries[0].rpe, Some(8));
    }

    #[test]
    fn estimate_is_restartable() {
        let sets = vec![set(0, 100.0, 5, false), set(1, 90.0, 8, false)];
        let iter = OneRepMaxEstimator::estimate(&sets);
        let first: Vec<_> = iter.clone().collect();
        let second: Vec<_> = iter.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn history_truncated_but_max_over_everything() {
        // Heaviest lift is the oldest one, outside the newest 20.
        let mut sets: Vec<_> = (0..25).map(|i| set(i, 100.0, 5, false)).collect();
        sets.push(set(40, 150.0, 3, false));

        let summary = OneRepMaxEstimator::summarize("Squat", "Legs", &sets);
        assert_eq!(summary.history.len(), OneRepMaxEstimator::SUMMARY_LIMIT);
        assert_eq!(summary.history[0].date, base());
        assert_eq!(summary.max_estimated_1rm, 165.0);
        assert_eq!(summary.exercise_name, "Squat");
        assert_eq!(summary.muscle_group, "Legs");
    }
}
