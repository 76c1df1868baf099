pub use super::body_metrics::Entity as BodyMetrics;
pub use super::exercises::Entity as Exercises;
pub use super::height_records::Entity as HeightRecords;
pub use super::sets::Entity as Sets;
pub use super::users::Entity as Users;
pub use super::workout_exercises::Entity as WorkoutExercises;
pub use super::workouts::Entity as Workouts;
