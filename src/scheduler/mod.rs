pub mod engine;
pub mod intervals;
pub mod leitner;

pub use engine::{DEFAULT_SESSION_LIMIT, ReviewScheduler, grade};
