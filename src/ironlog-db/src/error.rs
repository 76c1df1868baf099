use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("user {0} not found")]
    UserNotFound(i32),
    /// Missing, or owned by another user and not built in.
    #[error("exercise {0} not found")]
    ExerciseNotFound(i32),
    /// Missing, or owned by another user.
    #[error("workout {0} not found")]
    WorkoutNotFound(i32),
    #[error("no height recorded for user {0}")]
    MissingHeightRecord(i32),
    #[error(transparent)]
    Database(#[from] DbErr),
}

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
