//! Error types for journey

use thiserror::Error;

/// Core error type for journey operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JourneyError {
    #[error("Invalid goal duration '{0}' (expected Week, Month or Year)")]
    InvalidDuration(String),

    #[error("Learning topic cannot be empty")]
    EmptyTopic,

    #[error("Invalid date '{value}': expected {expected}")]
    InvalidDate { value: String, expected: &'static str },
}

impl JourneyError {
    pub fn invalid_duration(value: impl Into<String>) -> Self {
        Self::InvalidDuration(value.into())
    }
}

pub type Result<T> = std::result::Result<T, JourneyError>;
