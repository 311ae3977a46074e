// src/state.rs
use std::sync::Arc;

use crate::config::{Config, ErrorPolicy};
use crate::services::completion::CompletionClient;

pub type SharedState = Arc<AppState>;

/// Read-only after startup.
pub struct AppState {
    pub client: CompletionClient,
    pub system_prompt: String,
    pub error_policy: ErrorPolicy,
}

impl AppState {
    pub fn new(
        client: CompletionClient,
        system_prompt: impl Into<String>,
        error_policy: ErrorPolicy,
    ) -> Self {
        Self {
            client,
            system_prompt: system_prompt.into(),
            error_policy,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            CompletionClient::from_config(config),
            config.system_prompt.clone(),
            config.error_policy,
        )
    }
}
