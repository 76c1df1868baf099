use ironlog_algos::{OneRepMaxEstimator, OneRepMaxSummary, WorkoutVolume};

use crate::{AnalyticsResult, DatabaseHandler, SearchSets};

impl DatabaseHandler {
    pub async fn one_rep_max_history(
        &self,
        user_id: i32,
        exercise_id: i32,
    ) -> AnalyticsResult<OneRepMaxSummary> {
        let exercise = self.visible_exercise(user_id, exercise_id).await?;
        let sets = self
            .set_records(SearchSets {
                exercise_id: Some(exercise_id),
                ..SearchSets::new(user_id)
            })
            .await?;

        debug!(
            "Estimating 1RM for {} over {} sets",
            exercise.name,
            sets.len()
        );
        Ok(OneRepMaxEstimator::summarize(exercise.name, exercise.muscle_group, &sets))
    }

    pub async fn workout_volume(
        &self,
        user_id: i32,
        workout_id: i32,
    ) -> AnalyticsResult<WorkoutVolume> {
        let workout = self.owned_workout(user_id, workout_id).await?;
        let sets = self
            .set_records(SearchSets {
                workout_id: Some(workout_id),
                ..SearchSets::new(user_id)
            })
            .await?;

        Ok(WorkoutVolume::new(workout.date, &sets))
    }
}
