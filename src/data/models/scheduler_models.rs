use diesel::result::Error as DieselError;
use thiserror::Error;

// Scheduling specific errors
#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Item not found")]
    NotFound,
    #[error("Concurrent update detected, reload the item and grade again")]
    Conflict,
    #[error("Database error")]
    DatabaseError(#[from] DieselError),
}
