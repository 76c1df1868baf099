#[macro_use]
extern crate log;

mod db;
pub use db::DatabaseHandler;

mod error;
pub use error::{AnalyticsError, AnalyticsResult};

mod analytics;
mod records;

pub use records::{
    body_metrics::SearchBodyMetrics,
    exercises::BUILTIN_EXERCISES,
    workouts::{NewSet, SearchSets},
};
