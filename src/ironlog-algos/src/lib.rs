pub(crate) mod one_rep_max;
pub use one_rep_max::{OneRepMaxEntry, OneRepMaxEstimator, OneRepMaxSummary};

pub(crate) mod volume;
pub use volume::{ExerciseVolume, VolumeBreakdown, WorkoutVolume};

pub mod body_composition;
pub use body_composition::{BmiCategory, DailyCalorieNeeds, IdealWeightRange};

pub(crate) mod trend;
pub use trend::{BodyFatTrend, BodyFatTrendClassifier};

pub(crate) mod series;
pub use series::{MetricWindow, current_height};

pub(crate) mod history;
pub use history::{AdvancedBodyAnalysisEntry, BmiHistoryEntry, BodyAnalysisEntry};

pub(crate) mod body_summary;
pub use body_summary::{
    AdvancedBodyAnalyticsSummary, BmiHistory, BodyAnalyticsSummary, BodyCompositionAnalyzer,
};

pub(crate) mod training_summary;
pub use training_summary::{DashboardStats, UserSummary, week_start};

pub mod helpers;
