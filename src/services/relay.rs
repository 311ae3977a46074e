use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use super::completion::{CompletionClient, WireMessage};
use crate::error::RelayError;

pub const FALLBACK_PREFIX: &str = "Sorry, I ran into an issue:";

/// Per-request values handed down explicitly instead of living in globals.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: Uuid,
}

impl RequestContext {
    pub fn new() -> Self {
        Self { request_id: Uuid::new_v4() }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_messages(system_prompt: &str, user_msg: Option<Value>) -> Vec<WireMessage> {
    vec![WireMessage::system(system_prompt), WireMessage::user(user_msg)]
}

/// One completion round-trip. Returns the trimmed reply.
pub async fn generate_reply(
    client: &CompletionClient,
    ctx: &RequestContext,
    system_prompt: &str,
    user_msg: Option<Value>,
) -> Result<String, RelayError> {
    let messages = build_messages(system_prompt, user_msg);

    match client.complete(&messages).await {
        Ok(text) => {
            info!(request_id = %ctx.request_id, "completion succeeded");
            Ok(text.trim().to_string())
        }
        Err(e) => {
            error!(request_id = %ctx.request_id, kind = e.kind().as_str(), "ERROR: {}", e);
            Err(e)
        }
    }
}

pub fn fallback_reply(err: &RelayError) -> String {
    format!("{} {}", FALLBACK_PREFIX, err)
}
