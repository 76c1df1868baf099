use chrono::NaiveDateTime;
use ironlog_algos::{
    AdvancedBodyAnalyticsSummary, BmiHistory, BodyAnalyticsSummary, BodyCompositionAnalyzer,
};
use ironlog_types::{WindowAnchor, WindowConfig};

use crate::{AnalyticsError, AnalyticsResult, DatabaseHandler, SearchBodyMetrics};

impl DatabaseHandler {
    pub async fn body_analytics_summary(
        &self,
        user_id: i32,
        window: WindowConfig,
        now: NaiveDateTime,
    ) -> AnalyticsResult<BodyAnalyticsSummary> {
        let metrics = self
            .body_metric_records(SearchBodyMetrics::new(user_id))
            .await?;
        let heights = self.height_records(user_id).await?;

        let analyzer = BodyCompositionAnalyzer::new(&metrics, &heights, window, now);
        Ok(analyzer.summary())
    }

    /// Age is taken on `now`'s date.
    pub async fn advanced_body_analytics_summary(
        &self,
        user_id: i32,
        window: WindowConfig,
        now: NaiveDateTime,
    ) -> AnalyticsResult<AdvancedBodyAnalyticsSummary> {
        let profile = self.user_profile(user_id).await?;
        let metrics = self
            .body_metric_records(SearchBodyMetrics::new(user_id))
            .await?;
        let heights = self.height_records(user_id).await?;

        let analyzer = BodyCompositionAnalyzer::new(&metrics, &heights, window, now);
        Ok(analyzer.advanced_summary(&profile, now.date()))
    }

    /// `days` defaults to [`BmiHistory::DEFAULT_DAYS`].
    pub async fn bmi_history(
        &self,
        user_id: i32,
        days: Option<i64>,
        anchor: WindowAnchor,
        now: NaiveDateTime,
    ) -> AnalyticsResult<BmiHistory> {
        let window = WindowConfig::new(days.unwrap_or(BmiHistory::DEFAULT_DAYS), anchor);
        let heights = self.height_records(user_id).await?;
        if heights.is_empty() {
            return Err(AnalyticsError::MissingHeightRecord(user_id));
        }

        // A window anchored on the latest record can't be bounded before the
        // records are loaded.
        let from = match anchor {
            WindowAnchor::Now => Some(window.start(now, None)),
            WindowAnchor::LatestRecord => None,
        };
        let metrics = self
            .body_metric_records(SearchBodyMetrics {
                from,
                ..SearchBodyMetrics::new(user_id)
            })
            .await?;

        BmiHistory::new(&metrics, &heights, window, now)
            .ok_or(AnalyticsError::MissingHeightRecord(user_id))
    }
}
