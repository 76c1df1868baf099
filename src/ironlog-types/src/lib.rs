pub mod profile;
pub use profile::{Gender, UserProfile};

pub mod records;
pub use records::{BodyMetricRecord, HeightRecord, SetRecord, WorkoutRecord};

pub mod window;
pub use window::{WindowAnchor, WindowConfig};
