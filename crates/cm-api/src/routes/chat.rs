//! Conversational endpoint.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};

use cm_assistant::{Hooks, Response};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Header carrying the caller's session id.
pub const SESSION_HEADER: &str = "x-session-id";

const ANONYMOUS: &str = "anonymous";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Assistant reply. Search directives are resolved against the catalog
/// and the outcome is attached as `results`.
#[derive(Debug, Serialize)]
pub struct ChatReply {
    #[serde(flatten)]
    pub response: Response,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Response>,
}

/// Session id from the request headers, or "anonymous".
pub fn session_id(headers: &HeaderMap) -> String {
    headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(ANONYMOUS)
        .to_string()
}

/// POST /api/v1/chat - interpret one shopper message.
pub async fn chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<ChatRequest>,
) -> ApiResult<Json<ChatReply>> {
    if req.message.trim().is_empty() {
        return Err(ApiError::BadRequest("message must not be empty".into()));
    }

    let session = session_id(&headers);
    let hook = state.garage.hook_for(session.clone());
    let catalog = state.catalog.vehicles();

    let response = state
        .assistant
        .handle(&req.message, catalog, Hooks::with_garage(&hook));

    let results = match &response {
        Response::Search { filters, .. } => Some(state.assistant.browse(catalog, filters)),
        _ => None,
    };

    tracing::info!(
        session = %session,
        kind = response.kind(),
        resolved = results.is_some(),
        "chat handled"
    );

    Ok(Json(ChatReply { response, results }))
}
