//! Error Types
//!
//! Failures surfaced to the user through the notification sink.

use thiserror::Error;

/// Fallback message when the backend gives no usable `error` field
pub const GENERIC_FAILURE: &str = "API request failed";

/// A request that did not produce a usable JSON response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RequestError {
    pub message: String,
}

impl RequestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn generic() -> Self {
        Self::new(GENERIC_FAILURE)
    }
}

/// Form input rejected before anything is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("Match count must be a whole number of zero or more, got \"{0}\"")]
    InvalidCount(String),
}

/// Either side of a dashboard operation failing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Form(#[from] FormError),
}
