pub mod item_models;
pub mod scheduler_models;

pub use item_models::{DEFAULT_DIFFICULTY, GradeSummary, ReviewItem};
pub use scheduler_models::SchedulerError;
