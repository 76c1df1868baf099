use chrono::NaiveDateTime;
use ironlog_types::{BodyMetricRecord, HeightRecord, WindowConfig};

/// The most recent height on file is the current one.
pub fn current_height(heights: &[HeightRecord]) -> Option<&HeightRecord> {
    heights.iter().max_by_key(|h| h.date)
}

/// Body metrics that fall inside a trailing window, newest first.
#[derive(Debug, Clone, Default)]
pub struct MetricWindow<'a> {
    /// Records with a body weight.
    pub weighed: Vec<&'a BodyMetricRecord>,
    /// Body-fat readings, whether or not a weight was logged alongside.
    pub body_fat: Vec<f64>,
}

impl<'a> MetricWindow<'a> {
    pub fn new(metrics: &'a [BodyMetricRecord], window: WindowConfig, now: NaiveDateTime) -> Self {
        let latest = metrics.iter().map(|m| m.date).max();
        let start = window.start(now, latest);

        let mut in_window = metrics
            .iter()
            .filter(|m| m.date >= start)
            .collect::<Vec<_>>();
        in_window.sort_by(|a, b| b.date.cmp(&a.date));

        let body_fat = in_window
            .iter()
            .filter_map(|m| m.body_fat_percent)
            .collect();
        let weighed = in_window
            .into_iter()
            .filter(|m| m.body_weight.is_some())
            .collect();

        Self { weighed, body_fat }
    }

    pub fn latest_weight(&self) -> Option<f64> {
        self.weighed.first()?.body_weight
    }

    /// Oldest weight in the window, only when there is something to compare
    /// it against.
    pub fn oldest_weight(&self) -> Option<f64> {
        if self.weighed.len() < 2 {
            return None;
        }
        self.weighed.last()?.body_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta};
    use ironlog_types::WindowAnchor;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, 30)
            .unwrap()
            .and_hms_opt(8, 0, 0)
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

    #[test]
    fn current_height_is_latest_by_date() {
        let heights = vec![
            HeightRecord {
                date: now() - TimeDelta::days(10),
                height_cm: 180.0,
                note: None,
            },
            HeightRecord {
                date: now() - TimeDelta::days(400),
                height_cm: 178.0,
                note: None,
            },
        ];
        assert_eq!(current_height(&heights).unwrap().height_cm, 180.0);
        assert!(current_height(&[]).is_none());
    }

    #[test]
    fn window_filters_and_orders() {
        let metrics = vec![
            metric(40, Some(82.0), Some(20.0)),
            metric(2, Some(80.0), None),
            metric(10, None, Some(18.0)),
            metric(20, Some(81.0), Some(19.0)),
        ];
        let window = MetricWindow::new(&metrics, WindowConfig::default(), now());
        let weights: Vec<_> = window.weighed.iter().map(|m| m.body_weight).collect();
        assert_eq!(weights, vec![Some(80.0), Some(81.0)]);
        assert_eq!(window.body_fat, vec![18.0, 19.0]);
        assert_eq!(window.latest_weight(), Some(80.0));
        assert_eq!(window.oldest_weight(), Some(81.0));
    }

    #[test]
    fn window_start_is_inclusive() {
        let metrics = vec![metric(30, Some(80.0), None)];
        let window = MetricWindow::new(&metrics, WindowConfig::default(), now());
        assert_eq!(window.weighed.len(), 1);
        assert_eq!(window.oldest_weight(), None);
    }

    #[test]
    fn anchored_to_latest_record() {
        // Nothing logged for two months; anchoring on the last entry still
        // finds a window of data.
        let metrics = vec![
            metric(60, Some(79.0), None),
            metric(75, Some(80.5), None),
            metric(100, Some(83.0), None),
        ];
        let by_now = MetricWindow::new(&metrics, WindowConfig::default(), now());
        assert!(by_now.weighed.is_empty());

        let by_latest = MetricWindow::new(
            &metrics,
            WindowConfig::new(30, WindowAnchor::LatestRecord),
            now(),
        );
        assert_eq!(by_latest.weighed.len(), 2);
        assert_eq!(by_latest.oldest_weight(), Some(80.5));
    }
}
