use chrono::NaiveDateTime;
use ironlog_types::WindowConfig;
use serde_json::Value;

use crate::DatabaseHandler;

/// One analytics report for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    OneRepMax { exercise_id: i32 },
    WorkoutVolume { workout_id: i32 },
    Summary,
    BodySummary,
    AdvancedBodySummary,
    /// `None` falls back to the default BMI period.
    BmiHistory { days: Option<i64> },
    Dashboard,
}

pub struct IronLog {
    pub database: DatabaseHandler,
    pub window: WindowConfig,
}

impl IronLog {
    pub fn new(database: DatabaseHandler, window: WindowConfig) -> Self {
        Self { database, window }
    }

    pub async fn query(
        &self,
        user_id: i32,
        query: Query,
        now: NaiveDateTime,
    ) -> anyhow::Result<Value> {
        debug!("Running {query:?} for user {user_id}");
        let db = &self.database;

        let value = match query {
            Query::OneRepMax { exercise_id } => {
                serde_json::to_value(db.one_rep_max_history(user_id, exercise_id).await?)?
            }
            Query::WorkoutVolume { workout_id } => {
                serde_json::to_value(db.workout_volume(user_id, workout_id).await?)?
            }
            Query::Summary => serde_json::to_value(db.user_summary(user_id).await?)?,
            Query::BodySummary => serde_json::to_value(
                db.body_analytics_summary(user_id, self.window, now)
                    .await?,
            )?,
            Query::AdvancedBodySummary => serde_json::to_value(
                db.advanced_body_analytics_summary(user_id, self.window, now)
                    .await?,
            )?,
            Query::BmiHistory { days } => serde_json::to_value(
                db.bmi_history(user_id, days, self.window.anchor, now)
                    .await?,
            )?,
            Query::Dashboard => {
                serde_json::to_value(db.dashboard_stats(user_id, now.date()).await?)?
            }
        };

        Ok(value)
    }
}
