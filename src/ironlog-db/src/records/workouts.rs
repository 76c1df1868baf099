use anyhow::anyhow;
use chrono::NaiveDateTime;
use ironlog_entities::{exercises, sets, workout_exercises, workouts};
use ironlog_types::{SetRecord, WorkoutRecord};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, Condition, DbErr, EntityTrait,
    FromQueryResult, IntoActiveModel, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Set,
};

use crate::{AnalyticsError, AnalyticsResult, DatabaseHandler};

#[derive(Debug, Clone, Default)]
pub struct NewSet {
    pub weight: Option<f64>,
    pub reps: Option<i32>,
    pub rpe: Option<i32>,
    pub is_warmup: bool,
    pub note: Option<String>,
}

/// Filters for [`DatabaseHandler::set_records`]. Sets are always limited to
/// workouts owned by `user_id`.
#[derive(Debug, Clone, Copy)]
pub struct SearchSets {
    pub user_id: i32,
    pub exercise_id: Option<i32>,
    pub workout_id: Option<i32>,
}

impl SearchSets {
    pub fn new(user_id: i32) -> Self {
        Self {
            user_id,
            exercise_id: None,
            workout_id: None,
        }
    }

    pub(crate) fn conditions(self) -> Condition {
        Condition::all()
            .add(workouts::Column::UserId.eq(self.user_id))
            .add_option(
                self.exercise_id
                    .map(|id| workout_exercises::Column::ExerciseId.eq(id)),
            )
            .add_option(
                self.workout_id
                    .map(|id| workout_exercises::Column::WorkoutId.eq(id)),
            )
    }
}

#[derive(Debug, FromQueryResult)]
struct SetRow {
    workout_id: i32,
    date: NaiveDateTime,
    exercise_id: i32,
    exercise_name: String,
    muscle_group: String,
    weight: Option<f64>,
    reps: Option<i32>,
    rpe: Option<i32>,
    is_warmup: bool,
}

impl From<SetRow> for SetRecord {
    fn from(row: SetRow) -> Self {
        Self {
            workout_id: row.workout_id,
            date: row.date,
            exercise_id: row.exercise_id,
            exercise_name: row.exercise_name,
            muscle_group: row.muscle_group,
            weight: row.weight,
            reps: row.reps,
            rpe: row.rpe,
            is_warmup: row.is_warmup,
        }
    }
}

impl DatabaseHandler {
    pub async fn create_workout(
        &self,
        user_id: i32,
        date: NaiveDateTime,
        note: Option<&str>,
    ) -> anyhow::Result<workouts::Model> {
        let workout = workouts::ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            date: Set(date),
            note: Set(note.map(str::to_owned)),
            is_completed: Set(false),
            completed_at: Set(None),
        };

        Ok(workout.insert(&self.db).await?)
    }

    /// Appends `exercise_id` after the exercises already in the workout.
    pub async fn add_exercise_to_workout(
        &self,
        workout_id: i32,
        exercise_id: i32,
    ) -> anyhow::Result<workout_exercises::Model> {
        let existing = workout_exercises::Entity::find()
            .filter(workout_exercises::Column::WorkoutId.eq(workout_id))
            .count(&self.db)
            .await?;

        let entry = workout_exercises::ActiveModel {
            id: NotSet,
            workout_id: Set(workout_id),
            exercise_id: Set(exercise_id),
            order_index: Set(i32::try_from(existing)?),
        };

        Ok(entry.insert(&self.db).await?)
    }

    /// Set indices start at 1 within each workout exercise.
    pub async fn add_set(
        &self,
        workout_exercise_id: i32,
        set: NewSet,
    ) -> anyhow::Result<sets::Model> {
        let existing = sets::Entity::find()
            .filter(sets::Column::WorkoutExerciseId.eq(workout_exercise_id))
            .count(&self.db)
            .await?;

        let model = sets::ActiveModel {
            id: NotSet,
            workout_exercise_id: Set(workout_exercise_id),
            set_index: Set(i32::try_from(existing)? + 1),
            weight: Set(set.weight),
            reps: Set(set.reps),
            rpe: Set(set.rpe),
            is_warmup: Set(set.is_warmup),
            note: Set(set.note),
        };

        Ok(model.insert(&self.db).await?)
    }

    pub async fn complete_workout(
        &self,
        workout_id: i32,
        completed_at: NaiveDateTime,
    ) -> anyhow::Result<workouts::Model> {
        let workout = workouts::Entity::find_by_id(workout_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| anyhow!("Workout {workout_id} not found"))?;

        let mut workout = workout.into_active_model();
        workout.is_completed = Set(true);
        workout.completed_at = Set(Some(completed_at));

        Ok(workout.update(&self.db).await?)
    }

    /// Every workout of the user, newest first.
    pub async fn workout_records(&self, user_id: i32) -> Result<Vec<WorkoutRecord>, DbErr> {
        let workouts = workouts::Entity::find()
            .filter(workouts::Column::UserId.eq(user_id))
            .order_by_desc(workouts::Column::Date)
            .all(&self.db)
            .await?
            .into_iter()
            .map(|w| WorkoutRecord {
                id: w.id,
                date: w.date,
                is_completed: w.is_completed,
            })
            .collect();

        Ok(workouts)
    }

    /// Sets joined with their workout and exercise, newest workout first and
    /// in logged order within a workout. Warmups are included.
    pub async fn set_records(&self, options: SearchSets) -> Result<Vec<SetRecord>, DbErr> {
        let rows = sets::Entity::find()
            .select_only()
            .column_as(workouts::Column::Id, "workout_id")
            .column_as(workouts::Column::Date, "date")
            .column_as(exercises::Column::Id, "exercise_id")
            .column_as(exercises::Column::Name, "exercise_name")
            .column_as(exercises::Column::MuscleGroup, "muscle_group")
            .column_as(sets::Column::Weight, "weight")
            .column_as(sets::Column::Reps, "reps")
            .column_as(sets::Column::Rpe, "rpe")
            .column_as(sets::Column::IsWarmup, "is_warmup")
            .join(JoinType::InnerJoin, sets::Relation::WorkoutExercises.def())
            .join(
                JoinType::InnerJoin,
                workout_exercises::Relation::Workouts.def(),
            )
            .join(
                JoinType::InnerJoin,
                workout_exercises::Relation::Exercises.def(),
            )
            .filter(options.conditions())
            .order_by_desc(workouts::Column::Date)
            .order_by_desc(workouts::Column::Id)
            .order_by_asc(workout_exercises::Column::OrderIndex)
            .order_by_asc(sets::Column::SetIndex)
            .into_model::<SetRow>()
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(SetRecord::from).collect())
    }

    pub(crate) async fn owned_workout(
        &self,
        user_id: i32,
        workout_id: i32,
    ) -> AnalyticsResult<workouts::Model> {
        workouts::Entity::find_by_id(workout_id)
            .filter(workouts::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?
            .ok_or(AnalyticsError::WorkoutNotFound(workout_id))
    }
}
