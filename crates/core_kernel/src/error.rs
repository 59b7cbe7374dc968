//! Core error types used across the system

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    #[error("Locale resource error: {0}")]
    Resource(String),
}

impl CoreError {
    pub fn invalid_locale(tag: impl Into<String>) -> Self {
        CoreError::InvalidLocale(tag.into())
    }

    pub fn resource(message: impl Into<String>) -> Self {
        CoreError::Resource(message.into())
    }
}
