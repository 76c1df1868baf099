use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// What the trailing analytics window is measured back from.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum WindowAnchor {
    /// The time the query runs.
    #[default]
    Now,
    /// The most recent record handed to the engine.
    LatestRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub days: i64,
    pub anchor: WindowAnchor,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            days: Self::DEFAULT_DAYS,
            anchor: WindowAnchor::Now,
        }
    }
}

impl WindowConfig {
    pub const DEFAULT_DAYS: i64 = 30;
    /// Longest window the CLI accepts, about a century.
    pub const MAX_DAYS: i64 = 36_500;

    pub fn new(days: i64, anchor: WindowAnchor) -> Self {
        Self { days, anchor }
    }

    /// Inclusive lower bound of the window.
    ///
    /// With [`WindowAnchor::LatestRecord`] and no records the bound falls back
    /// to `now`. Negative lengths count as zero; a bound before the earliest
    /// representable date saturates to it.
    pub fn start(&self, now: NaiveDateTime, latest: Option<NaiveDateTime>) -> NaiveDateTime {
        let anchor = match self.anchor {
            WindowAnchor::Now => now,
            WindowAnchor::LatestRecord => latest.unwrap_or(now),
        };
        TimeDelta::try_days(self.days.max(0))
            .and_then(|span| anchor.checked_sub_signed(span))
            .unwrap_or(NaiveDateTime::MIN)
    }
}
