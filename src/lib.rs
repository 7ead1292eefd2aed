//! Spaced-repetition scheduler for a language-learning site.
//!
//! Items move through Leitner boxes 0-5: each correct answer promotes an
//! item one box and pushes its next review further out (one minute up to
//! thirty days), a wrong answer sends it back to box 0 for same-session
//! re-drilling. A continuous difficulty score is tracked alongside the box.
//!
//! The core ([`scheduler::grade`] and the functions it composes) is pure:
//! the current time is always passed in, never read from a clock.
//! [`ReviewScheduler`] binds the core to the SQLite item store and exposes
//! the two operations the surrounding application consumes: grading an
//! attempt and fetching the due set for a session.

pub mod data;
pub mod db;
pub mod schema;
pub mod scheduler;

pub use data::models::{GradeSummary, ReviewItem, SchedulerError};
pub use db::{DbPool, establish_pool};
pub use scheduler::{DEFAULT_SESSION_LIMIT, ReviewScheduler, grade};
