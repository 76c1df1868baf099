use chrono::{NaiveDate, NaiveDateTime};
use ironlog_types::{BodyMetricRecord, Gender, HeightRecord, UserProfile, WindowConfig};
use serde::Serialize;

use crate::{
    body_composition::{
        BmiCategory, DailyCalorieNeeds, IdealWeightRange, bmi, bmi_for_age_category, bmr,
        ideal_weight_range, raw_bmi,
    },
    helpers::math::round_1,
    history::{
        AdvancedBodyAnalysisEntry, BmiHistoryEntry, BodyAnalysisEntry, advanced_history,
        basic_history, bmi_history,
    },
    series::{MetricWindow, current_height},
    trend::{BodyFatTrend, BodyFatTrendClassifier},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyAnalyticsSummary {
    pub latest_weight: Option<f64>,
    pub latest_height: Option<f64>,
    pub latest_bmi: Option<f64>,
    pub window_days: i64,
    pub weight_change: Option<f64>,
    pub bmi_change: Option<f64>,
    pub body_fat_trend: BodyFatTrend,
    pub total_records: usize,
    pub history: Vec<BodyAnalysisEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvancedBodyAnalyticsSummary {
    pub latest_weight: Option<f64>,
    pub latest_height: Option<f64>,
    pub latest_bmi: Option<f64>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub window_days: i64,
    pub weight_change: Option<f64>,
    pub bmi_change: Option<f64>,
    pub body_fat_trend: BodyFatTrend,
    pub ideal_weight_range: Option<IdealWeightRange>,
    pub bmr: Option<i64>,
    pub daily_calorie_needs: Option<DailyCalorieNeeds>,
    pub bmi_for_age_category: Option<BmiCategory>,
    pub total_records: usize,
    pub history: Vec<AdvancedBodyAnalysisEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiHistory {
    pub height_cm: f64,
    pub period_days: i64,
    pub total_records: usize,
    pub latest_bmi: Option<f64>,
    pub history: Vec<BmiHistoryEntry>,
}

/// Body-composition analytics over one user's records.
///
/// `metrics` is the user's full body-metric history in any order; the
/// analyzer picks out the trailing window itself.
pub struct BodyCompositionAnalyzer<'a> {
    height_cm: Option<f64>,
    window: MetricWindow<'a>,
    window_days: i64,
    total_records: usize,
}

impl<'a> BodyCompositionAnalyzer<'a> {
    pub fn new(
        metrics: &'a [BodyMetricRecord],
        heights: &[HeightRecord],
        window: WindowConfig,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            height_cm: current_height(heights).map(|h| h.height_cm),
            window: MetricWindow::new(metrics, window, now),
            window_days: window.days,
            total_records: metrics.len(),
        }
    }

    pub fn latest_weight(&self) -> Option<f64> {
        self.window.latest_weight()
    }

    pub fn latest_bmi(&self) -> Option<f64> {
        bmi(self.latest_weight(), self.height_cm)
    }

    pub fn weight_change(&self) -> Option<f64> {
        Some(round_1(self.latest_weight()? - self.window.oldest_weight()?))
    }

    /// The newest BMI is the rounded figure; the oldest is not rounded
    /// before subtracting. Height is the current one at both ends.
    pub fn bmi_change(&self) -> Option<f64> {
        let latest = self.latest_bmi()?;
        let oldest = raw_bmi(self.window.oldest_weight()?, self.height_cm?)?;
        Some(round_1(latest - oldest))
    }

    /// Reports `Stable` when there are too few readings to classify.
    pub fn body_fat_trend(&self) -> BodyFatTrend {
        BodyFatTrendClassifier::classify(&self.window.body_fat).unwrap_or_default()
    }

    /// The trend is only classified once the window holds a weigh-in; the
    /// advanced summary classifies it regardless.
    pub fn summary(&self) -> BodyAnalyticsSummary {
        let body_fat_trend = if self.window.weighed.is_empty() {
            BodyFatTrend::Stable
        } else {
            self.body_fat_trend()
        };

        BodyAnalyticsSummary {
            latest_weight: self.latest_weight(),
            latest_height: self.height_cm,
            latest_bmi: self.latest_bmi(),
            window_days: self.window_days,
            weight_change: self.weight_change(),
            bmi_change: self.bmi_change(),
            body_fat_trend,
            total_records: self.total_records,
            history: basic_history(self.window.weighed.iter().copied(), self.height_cm),
        }
    }

    pub fn advanced_summary(
        &self,
        profile: &UserProfile,
        today: NaiveDate,
    ) -> AdvancedBodyAnalyticsSummary {
        let age = profile.age_on(today);
        let gender = profile.gender;
        let latest_bmi = self.latest_bmi();
        let ideal_weight_range = ideal_weight_range(self.height_cm);
        let bmr = bmr(self.latest_weight(), self.height_cm, age, gender);

        AdvancedBodyAnalyticsSummary {
            latest_weight: self.latest_weight(),
            latest_height: self.height_cm,
            latest_bmi,
            age,
            gender,
            window_days: self.window_days,
            weight_change: self.weight_change(),
            bmi_change: self.bmi_change(),
            body_fat_trend: self.body_fat_trend(),
            ideal_weight_range,
            bmr,
            daily_calorie_needs: DailyCalorieNeeds::from_bmr(bmr),
            bmi_for_age_category: bmi_for_age_category(latest_bmi, age),
            total_records: self.total_records,
            history: advanced_history(
                self.window.weighed.iter().copied(),
                self.height_cm,
                age,
                gender,
                ideal_weight_range,
                bmr,
            ),
        }
    }
}

impl BmiHistory {
    pub const DEFAULT_DAYS: i64 = 90;

    /// `None` when no height has been recorded: without one there is no BMI
    /// to report at all.
    pub fn new(
        metrics: &[BodyMetricRecord],
        heights: &[HeightRecord],
        window: WindowConfig,
        now: NaiveDateTime,
    ) -> Option<Self> {
        let height_cm = current_height(heights)?.height_cm;
        let window_records = MetricWindow::new(metrics, window, now);
        let history = bmi_history(window_records.weighed.iter().copied(), height_cm);

        Some(Self {
            height_cm,
            period_days: window.days,
            total_records: history.len(),
            latest_bmi: history.first().map(|e| e.bmi),
            history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use ironlog_types::WindowAnchor;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 30)
            .unwrap()
            .and_hms_opt(21, 0, 0)
            .unwrap()
    }

    fn metric(days_ago: i64, weight: Option<f64>, body_fat: Option<f64>) -> BodyMetricRecord {
        BodyMetricRecord {
            date: now() - TimeDelta::days(days_ago),
            body_weight: weight,
            body_fat_percent: body_fat,
            note: None,
        }
    }

    fn height(cm: f64) -> Vec<HeightRecord> {
        vec![HeightRecord {
            date: now() - TimeDelta::days(365),
            height_cm: cm,
            note: None,
        }]
    }

    fn profile(gender: Option<Gender>) -> UserProfile {
        UserProfile {
            id: 7,
            birth_date: NaiveDate::from_ymd_opt(1995, 1, 1),
            gender,
            created_at: now() - TimeDelta::days(500),
        }
    }

    fn sample_metrics() -> Vec<BodyMetricRecord> {
        vec![
            metric(1, Some(70.0), Some(18.0)),
            metric(5, None, Some(18.0)),
            metric(8, Some(71.0), Some(18.0)),
            metric(15, Some(72.0), Some(15.0)),
            metric(20, None, Some(15.0)),
            metric(25, Some(72.5), Some(15.0)),
            metric(45, Some(75.0), Some(25.0)),
        ]
    }

    #[test]
    fn basic_summary() {
        let metrics = sample_metrics();
        let heights = height(175.0);
        let analyzer =
            BodyCompositionAnalyzer::new(&metrics, &heights, WindowConfig::default(), now());
        let summary = analyzer.summary();

        assert_eq!(summary.latest_weight, Some(70.0));
        assert_eq!(summary.latest_height, Some(175.0));
        assert_eq!(summary.latest_bmi, Some(22.9));
        assert_eq!(summary.weight_change, Some(-2.5));
        // 22.9 - 72.5 / 3.0625 = 22.9 - 23.673
        assert_eq!(summary.bmi_change, Some(-0.8));
        assert_eq!(summary.body_fat_trend, BodyFatTrend::Concerning);
        assert_eq!(summary.total_records, 7);
        assert_eq!(summary.window_days, 30);
        assert_eq!(summary.history.len(), 4);
        assert_eq!(summary.history[0].estimated_body_fat, Some(25.5));
    }

    #[test]
    fn summary_without_height() {
        let metrics = sample_metrics();
        let analyzer = BodyCompositionAnalyzer::new(&metrics, &[], WindowConfig::default(), now());
        let summary = analyzer.summary();
        assert_eq!(summary.latest_weight, Some(70.0));
        assert_eq!(summary.latest_bmi, None);
        assert_eq!(summary.weight_change, Some(-2.5));
        assert_eq!(summary.bmi_change, None);
        assert!(summary.history.iter().all(|h| h.bmi.is_none()));
    }

    #[test]
    fn summary_without_records() {
        let heights = height(175.0);
        let analyzer = BodyCompositionAnalyzer::new(&[], &heights, WindowConfig::default(), now());
        let summary = analyzer.summary();
        assert_eq!(summary.latest_weight, None);
        assert_eq!(summary.latest_bmi, None);
        assert_eq!(summary.weight_change, None);
        assert_eq!(summary.body_fat_trend, BodyFatTrend::Stable);
        assert_eq!(summary.total_records, 0);
        assert!(summary.history.is_empty());
    }

    #[test]
    fn single_weight_has_no_change() {
        let metrics = vec![metric(3, Some(80.0), None)];
        let heights = height(180.0);
        let analyzer =
            BodyCompositionAnalyzer::new(&metrics, &heights, WindowConfig::default(), now());
        assert_eq!(analyzer.weight_change(), None);
        assert_eq!(analyzer.bmi_change(), None);
    }

    #[test]
    fn advanced_summary_for_male() {
        let metrics = sample_metrics();
        let heights = height(175.0);
        let analyzer =
            BodyCompositionAnalyzer::new(&metrics, &heights, WindowConfig::default(), now());
        let summary = analyzer.advanced_summary(&profile(Some(Gender::Male)), now().date());

        assert_eq!(summary.age, Some(30));
        assert_eq!(summary.gender, Some(Gender::Male));
        // 700 + 1093.75 - 150 + 5
        assert_eq!(summary.bmr, Some(1649));
        assert_eq!(summary.daily_calorie_needs.unwrap().sedentary, 1979);
        assert_eq!(
            summary.ideal_weight_range,
            Some(IdealWeightRange { min: 56.7, max: 76.3 })
        );
        assert_eq!(summary.bmi_for_age_category, Some(BmiCategory::Normal));
        assert_eq!(summary.history.len(), 4);
        assert_eq!(summary.history[0].entry.estimated_body_fat, Some(18.2));
        assert!(summary.history.iter().all(|h| h.bmr == Some(1649)));
    }

    #[test]
    fn advanced_summary_degrades_without_profile_data() {
        let metrics = sample_metrics();
        let heights = height(175.0);
        let analyzer =
            BodyCompositionAnalyzer::new(&metrics, &heights, WindowConfig::default(), now());
        let mut p = profile(Some(Gender::Other));
        let summary = analyzer.advanced_summary(&p, now().date());
        assert_eq!(summary.bmr, None);
        assert_eq!(summary.daily_calorie_needs, None);
        assert_eq!(summary.bmi_for_age_category, Some(BmiCategory::Normal));
        assert!(summary.history.iter().all(|h| h.entry.estimated_body_fat.is_none()));

        p.birth_date = None;
        let summary = analyzer.advanced_summary(&p, now().date());
        assert_eq!(summary.age, None);
        assert_eq!(summary.bmi_for_age_category, None);
        assert!(summary.ideal_weight_range.is_some());
    }

    #[test]
    fn summaries_are_idempotent() {
        let metrics = sample_metrics();
        let heights = height(175.0);
        let p = profile(Some(Gender::Female));
        let run = || {
            let analyzer =
                BodyCompositionAnalyzer::new(&metrics, &heights, WindowConfig::default(), now());
            (
                serde_json::to_string(&analyzer.summary()).unwrap(),
                serde_json::to_string(&analyzer.advanced_summary(&p, now().date())).unwrap(),
            )
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn bmi_history_requires_height() {
        let metrics = sample_metrics();
        let window = WindowConfig::new(90, WindowAnchor::Now);
        assert!(BmiHistory::new(&metrics, &[], window, now()).is_none());
    }

    #[test]
    fn bmi_history_over_period() {
        let metrics = sample_metrics();
        let heights = height(175.0);
        let history =
            BmiHistory::new(&metrics, &heights, WindowConfig::new(90, WindowAnchor::Now), now())
                .unwrap();
        assert_eq!(history.height_cm, 175.0);
        assert_eq!(history.period_days, 90);
        assert_eq!(history.total_records, 5);
        assert_eq!(history.latest_bmi, Some(22.9));
        assert_eq!(history.history[4].weight, 75.0);
    }

    #[test]
    fn basic_trend_needs_a_weigh_in() {
        let metrics = vec![
            metric(1, None, Some(20.0)),
            metric(2, None, Some(20.0)),
            metric(3, None, Some(20.0)),
            metric(10, None, Some(15.0)),
            metric(11, None, Some(15.0)),
            metric(12, None, Some(15.0)),
        ];
        let heights = height(175.0);
        let analyzer =
            BodyCompositionAnalyzer::new(&metrics, &heights, WindowConfig::default(), now());

        assert_eq!(analyzer.summary().body_fat_trend, BodyFatTrend::Stable);
        assert_eq!(
            analyzer
                .advanced_summary(&profile(Some(Gender::Male)), now().date())
                .body_fat_trend,
            BodyFatTrend::Concerning
        );
    }

    #[test]
    fn out_of_range_windows_do_not_panic() {
        let metrics = sample_metrics();
        let heights = height(175.0);

        let huge = WindowConfig::new(100_000_000, WindowAnchor::Now);
        let summary = BodyCompositionAnalyzer::new(&metrics, &heights, huge, now()).summary();
        assert_eq!(summary.latest_weight, Some(70.0));
        assert_eq!(summary.history.len(), 5);

        let negative = WindowConfig::new(-5, WindowAnchor::Now);
        let summary = BodyCompositionAnalyzer::new(&metrics, &heights, negative, now()).summary();
        assert_eq!(summary.latest_weight, None);
        assert!(summary.history.is_empty());

        let history = BmiHistory::new(&metrics, &heights, huge, now()).unwrap();
        assert_eq!(history.total_records, 5);
    }
}
