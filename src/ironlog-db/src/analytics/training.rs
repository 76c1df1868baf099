use chrono::NaiveDate;
use ironlog_algos::{DashboardStats, UserSummary};

use crate::{AnalyticsResult, DatabaseHandler, SearchSets};

impl DatabaseHandler {
    pub async fn user_summary(&self, user_id: i32) -> AnalyticsResult<UserSummary> {
        let profile = self.user_profile(user_id).await?;
        let workouts = self.workout_records(user_id).await?;
        let sets = self.set_records(SearchSets::new(user_id)).await?;

        Ok(UserSummary::new(&profile, &workouts, &sets))
    }

    pub async fn dashboard_stats(
        &self,
        user_id: i32,
        today: NaiveDate,
    ) -> AnalyticsResult<DashboardStats> {
        let workouts = self.workout_records(user_id).await?;
        let sets = self.set_records(SearchSets::new(user_id)).await?;

        Ok(DashboardStats::new(&workouts, &sets, today))
    }
}
