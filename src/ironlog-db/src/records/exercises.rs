use indicatif::{ProgressBar, ProgressStyle};
use ironlog_entities::exercises;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, Condition, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};

use crate::{AnalyticsError, AnalyticsResult, DatabaseHandler};

/// `(name, muscle_group)` of the exercises every user can see.
pub const BUILTIN_EXERCISES: &[(&str, &str)] = &[
    ("Bench Press", "Chest"),
    ("Squat", "Legs"),
    ("Deadlift", "Back"),
    ("Shoulder Press", "Shoulders"),
    ("Barbell Row", "Back"),
    ("Incline Bench Press", "Chest"),
    ("Lat Pulldown", "Back"),
    ("Leg Press", "Legs"),
    ("Dumbbell Curl", "Arms"),
    ("Dips", "Chest"),
    ("Treadmill", "Cardio"),
    ("Road Running", "Cardio"),
    ("Road Cycling", "Cardio"),
    ("Stationary Bike", "Cardio"),
];

fn bar_style() -> anyhow::Result<ProgressStyle> {
    Ok(
        ProgressStyle::with_template("{prefix:>12} [{wide_bar:.cyan/dim}] {pos}/{len}")?
            .progress_chars("=>-"),
    )
}

impl DatabaseHandler {
    /// Exercises without an owner are built in.
    pub async fn create_exercise(
        &self,
        user_id: Option<i32>,
        name: &str,
        muscle_group: &str,
    ) -> anyhow::Result<exercises::Model> {
        let exercise = exercises::ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            name: Set(name.to_owned()),
            muscle_group: Set(muscle_group.to_owned()),
            is_builtin: Set(user_id.is_none()),
        };

        let exercise = exercise.insert(&self.db).await?;
        debug!("Created exercise {} ({})", exercise.id, exercise.name);
        Ok(exercise)
    }

    /// Inserts [`BUILTIN_EXERCISES`] unless any built-in exercise exists.
    /// Returns how many were inserted.
    pub async fn seed_builtin_exercises(&self) -> anyhow::Result<usize> {
        let existing = exercises::Entity::find()
            .filter(exercises::Column::IsBuiltin.eq(true))
            .count(&self.db)
            .await?;

        if existing > 0 {
            info!("{existing} built-in exercises already present, skipping seed");
            return Ok(0);
        }

        let pb = ProgressBar::new(BUILTIN_EXERCISES.len() as u64);
        pb.set_style(bar_style()?);
        pb.set_prefix("exercises");

        for (name, muscle_group) in BUILTIN_EXERCISES {
            self.create_exercise(None, name, muscle_group).await?;
            pb.inc(1);
        }

        pb.finish();
        info!("Seeded {} built-in exercises", BUILTIN_EXERCISES.len());
        Ok(BUILTIN_EXERCISES.len())
    }

    /// An exercise the user may read: built in, or their own.
    pub(crate) async fn visible_exercise(
        &self,
        user_id: i32,
        exercise_id: i32,
    ) -> AnalyticsResult<exercises::Model> {
        let visibility = Condition::any()
            .add(exercises::Column::IsBuiltin.eq(true))
            .add(exercises::Column::UserId.eq(user_id));

        exercises::Entity::find_by_id(exercise_id)
            .filter(visibility)
            .one(&self.db)
            .await?
            .ok_or(AnalyticsError::ExerciseNotFound(exercise_id))
    }
}
