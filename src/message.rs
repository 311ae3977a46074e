// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    // Absent or null both land here as None. Any other JSON value is kept
    // untyped and relayed as-is; the upstream decides whether it is valid.
    #[serde(default)]
    pub message: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub response: String,
}
