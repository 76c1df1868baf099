pub mod body_metrics;
pub mod exercises;
pub mod users;
pub mod workouts;
