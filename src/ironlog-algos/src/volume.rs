use std::collections::HashMap;

use chrono::NaiveDateTime;
use ironlog_types::SetRecord;
use serde::Serialize;

use crate::helpers::math::round_1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseVolume {
    pub exercise_name: String,
    pub muscle_group: String,
    pub sets: u32,
    pub total_volume: f64,
    pub total_reps: i64,
    pub avg_weight: f64,
    #[serde(skip)]
    total_weight: f64,
}

/// Working-set volume, bucketed by exercise display name.
///
/// Distinct exercises that share a name land in the same bucket, which keeps
/// the muscle group of the first set seen.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VolumeBreakdown {
    pub total_volume: f64,
    pub total_sets: u32,
    pub exercise_breakdown: Vec<ExerciseVolume>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutVolume {
    pub workout_date: NaiveDateTime,
    #[serde(flatten)]
    pub breakdown: VolumeBreakdown,
}

impl VolumeBreakdown {
    pub fn new(sets: &[SetRecord]) -> Self {
        let mut buckets: Vec<ExerciseVolume> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut total_volume = 0_f64;
        let mut total_sets = 0_u32;

        for set in sets {
            let Some((weight, reps)) = set.working_load() else {
                continue;
            };
            let volume = weight * f64::from(reps);

            let slot = *index.entry(set.exercise_name.as_str()).or_insert_with(|| {
                buckets.push(ExerciseVolume {
                    exercise_name: set.exercise_name.clone(),
                    muscle_group: set.muscle_group.clone(),
                    sets: 0,
                    total_volume: 0.0,
                    total_reps: 0,
                    avg_weight: 0.0,
                    total_weight: 0.0,
                });
                buckets.len() - 1
            });

            let bucket = &mut buckets[slot];
            bucket.sets += 1;
            bucket.total_volume += volume;
            bucket.total_reps += i64::from(reps);
            bucket.total_weight += weight;

            total_volume += volume;
            total_sets += 1;
        }

        for bucket in &mut buckets {
            bucket.avg_weight = round_1(bucket.total_weight / f64::from(bucket.sets));
        }

        Self {
            total_volume: round_1(total_volume),
            total_sets,
            exercise_breakdown: buckets,
        }
    }
}

impl WorkoutVolume {
    pub fn new(workout_date: NaiveDateTime, sets: &[SetRecord]) -> Self {
        Self {
            workout_date,
            breakdown: VolumeBreakdown::new(sets),
        }
    }
}
