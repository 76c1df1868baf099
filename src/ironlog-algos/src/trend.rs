use serde::Serialize;
use strum::{AsRefStr, Display};

use crate::helpers::math::mean;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BodyFatTrend {
    Improving,
    #[default]
    Stable,
    Concerning,
}

pub struct BodyFatTrendClassifier;

impl BodyFatTrendClassifier {
    /// Samples averaged at each end of the window.
    pub const SAMPLE_SIZE: usize = 3;
    /// Percentage points the averages must move by to leave `Stable`.
    pub const THRESHOLD: f64 = 1.0;

    /// `values` are body-fat percentages ordered newest first.
    ///
    /// Compares the mean of the newest three against the mean of the oldest
    /// three. With fewer than three samples there is no trend.
    pub fn classify(values: &[f64]) -> Option<BodyFatTrend> {
        if values.len() < Self::SAMPLE_SIZE {
            return None;
        }

        let recent = mean(&values[..Self::SAMPLE_SIZE]);
        let older = mean(&values[values.len() - Self::SAMPLE_SIZE..]);
        let diff = recent - older;

        Some(if diff < -Self::THRESHOLD {
            BodyFatTrend::Improving
        } else if diff > Self::THRESHOLD {
            BodyFatTrend::Concerning
        } else {
            BodyFatTrend::Stable
        })
    }
}
