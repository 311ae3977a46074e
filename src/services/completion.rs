use reqwest::header;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::{config::Config, error::RelayError};

#[derive(Debug, Clone, Serialize)]
pub struct WireMessage {
    pub role: &'static str,
    // User content is forwarded exactly as the caller sent it, null included.
    pub content: Option<Value>,
}

impl WireMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system",
            content: Some(Value::String(content.into())),
        }
    }

    pub fn user(content: Option<Value>) -> Self {
        Self {
            role: "user",
            content,
        }
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [WireMessage],
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl CompletionClient {
    pub fn new(
        api_base: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.api_base, &config.api_key, &config.model)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends the messages and returns the first choice's content, untrimmed.
    pub async fn complete(&self, messages: &[WireMessage]) -> Result<String, RelayError> {
        let url = format!("{}/chat/completions", self.api_base);
        debug!(%url, model = %self.model, messages = messages.len(), "sending completion request");

        let response = self
            .http
            .post(&url)
            .header(header::ACCEPT, "application/json")
            .bearer_auth(&self.api_key)
            .json(&CompletionRequest { model: &self.model, messages })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or(body);
            return Err(RelayError::Api { status, message });
        }

        let parsed: CompletionResponse = serde_json::from_str(&body)
            .map_err(|e| RelayError::MalformedResponse(e.to_string()))?;

        debug!(choices = parsed.choices.len(), "received completion response");

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(RelayError::EmptyCompletion)
    }
}
