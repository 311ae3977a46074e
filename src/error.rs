// src/error.rs
use reqwest::StatusCode;
use thiserror::Error;

/// Raised while loading settings, before the listener is bound.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API key not found. Make sure {0} is set as an environment variable.")]
    MissingApiKey(&'static str),

    #[error("Invalid bind address '{value}': {reason}")]
    InvalidBindAddr { value: String, reason: String },

    #[error("Unknown error policy '{0}', expected 'ok' or 'mapped'")]
    UnknownErrorPolicy(String),
}

/// A failed round-trip to the completion API.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("request to completion API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Error code: {status} - {message}")]
    Api { status: StatusCode, message: String },

    #[error("could not decode completion response: {0}")]
    MalformedResponse(String),

    #[error("completion API returned no content")]
    EmptyCompletion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayErrorKind {
    Transport,
    Api,
    MalformedResponse,
    EmptyCompletion,
}

impl RelayErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelayErrorKind::Transport => "transport",
            RelayErrorKind::Api => "api",
            RelayErrorKind::MalformedResponse => "malformed_response",
            RelayErrorKind::EmptyCompletion => "empty_completion",
        }
    }
}

impl RelayError {
    pub fn kind(&self) -> RelayErrorKind {
        match self {
            RelayError::Transport(_) => RelayErrorKind::Transport,
            RelayError::Api { .. } => RelayErrorKind::Api,
            RelayError::MalformedResponse(_) => RelayErrorKind::MalformedResponse,
            RelayError::EmptyCompletion => RelayErrorKind::EmptyCompletion,
        }
    }
}
