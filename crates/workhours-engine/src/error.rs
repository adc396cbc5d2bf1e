//! Error types for workhours-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HoursError {
    #[error("Invalid time range: {0}")]
    InvalidFormat(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),
}

pub type Result<T> = std::result::Result<T, HoursError>;
