pub mod prelude;

pub mod body_metrics;
pub mod exercises;
pub mod height_records;
pub mod sets;
pub mod users;
pub mod workout_exercises;
pub mod workouts;
