#[macro_use]
extern crate log;

pub use ironlog_db::{AnalyticsError, DatabaseHandler};

mod ironlog;
pub use ironlog::{IronLog, Query};
