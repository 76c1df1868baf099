use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyMetricRecord {
    pub date: NaiveDateTime,
    pub body_weight: Option<f64>,
    pub body_fat_percent: Option<f64>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeightRecord {
    pub date: NaiveDateTime,
    pub height_cm: f64,
    pub note: Option<String>,
}

/// A single logged set, flattened with the workout and exercise it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetRecord {
    pub workout_id: i32,
    pub date: NaiveDateTime,
    pub exercise_id: i32,
    pub exercise_name: String,
    pub muscle_group: String,
    pub weight: Option<f64>,
    pub reps: Option<i32>,
    pub rpe: Option<i32>,
    pub is_warmup: bool,
}

impl SetRecord {
    /// Weight and reps of a working set. Warmups and incomplete sets yield `None`.
    pub fn working_load(&self) -> Option<(f64, i32)> {
        if self.is_warmup {
            return None;
        }
        Some((self.weight?, self.reps?))
    }

    pub fn volume(&self) -> Option<f64> {
        self.working_load()
            .map(|(weight, reps)| weight * f64::from(reps))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub id: i32,
    pub date: NaiveDateTime,
    pub is_completed: bool,
}
