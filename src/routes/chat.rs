use axum::{Json, extract::State, http::StatusCode};
use tracing::{Instrument, info_span};

use crate::{
    config::ErrorPolicy,
    message::{ChatRequest, ChatResponse},
    services::relay::{RequestContext, fallback_reply, generate_reply},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> (StatusCode, Json<ChatResponse>) {
    let ctx = RequestContext::new();
    let span = info_span!("chat", request_id = %ctx.request_id);

    let result = generate_reply(&state.client, &ctx, &state.system_prompt, payload.message)
        .instrument(span)
        .await;

    match result {
        Ok(response) => (StatusCode::OK, Json(ChatResponse { response })),
        Err(e) => (
            failure_status(state.error_policy),
            Json(ChatResponse { response: fallback_reply(&e) }),
        ),
    }
}

// Every relay error kind is an upstream fault, so mapped means 502.
fn failure_status(policy: ErrorPolicy) -> StatusCode {
    match policy {
        ErrorPolicy::Ok => StatusCode::OK,
        ErrorPolicy::Mapped => StatusCode::BAD_GATEWAY,
    }
}
