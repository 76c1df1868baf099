use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use ironlog_types::{SetRecord, UserProfile, WorkoutRecord};
use serde::Serialize;

use crate::helpers::math::round_1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSummary {
    pub total_workouts: usize,
    pub total_sets: usize,
    pub total_volume: f64,
    pub latest_workout_date: Option<NaiveDateTime>,
    pub user_since: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_workouts: usize,
    pub this_week_workouts: usize,
    pub total_volume: f64,
    pub this_week_volume: f64,
}

fn working_volume<'a>(sets: impl Iterator<Item = &'a SetRecord>) -> f64 {
    sets.filter_map(SetRecord::volume).sum()
}

/// Midnight on the Monday of `today`'s week.
pub fn week_start(today: NaiveDate) -> NaiveDateTime {
    let monday = today - TimeDelta::days(i64::from(today.weekday().num_days_from_monday()));
    monday.and_time(NaiveTime::default())
}

impl UserSummary {
    pub fn new(profile: &UserProfile, workouts: &[WorkoutRecord], sets: &[SetRecord]) -> Self {
        Self {
            total_workouts: workouts.len(),
            total_sets: sets.iter().filter_map(SetRecord::working_load).count(),
            total_volume: round_1(working_volume(sets.iter())),
            latest_workout_date: workouts.iter().map(|w| w.date).max(),
            user_since: profile.created_at,
        }
    }
}

impl DashboardStats {
    /// Workouts only count once completed; volume counts every working set.
    pub fn new(workouts: &[WorkoutRecord], sets: &[SetRecord], today: NaiveDate) -> Self {
        let start = week_start(today);
        let completed = workouts.iter().filter(|w| w.is_completed);

        Self {
            total_workouts: completed.clone().count(),
            this_week_workouts: completed.filter(|w| w.date >= start).count(),
            total_volume: round_1(working_volume(sets.iter())),
            this_week_volume: round_1(working_volume(sets.iter().filter(|s| s.date >= start))),
        }
    }
}
