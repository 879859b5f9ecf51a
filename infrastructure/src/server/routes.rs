//! Route handlers.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;
use toolgate_application::ToolDispatcher;
use toolgate_domain::{RequestMetadata, ToolCall, ToolCallResult, ToolDefinition};
use tracing::debug;

type SharedDispatcher = Arc<ToolDispatcher>;

/// Build the router over a frozen dispatcher
pub fn router(dispatcher: SharedDispatcher) -> Router {
    Router::new()
        .route("/tools/call", post(call_tool))
        .route("/tools", get(list_tools))
        .route("/health", get(health))
        .with_state(dispatcher)
}

/// Header values that are not valid UTF-8 are dropped
fn metadata_from(headers: &HeaderMap) -> RequestMetadata {
    headers
        .iter()
        .filter_map(|(name, value)| value.to_str().ok().map(|v| (name.as_str(), v)))
        .collect()
}

async fn call_tool(
    State(dispatcher): State<SharedDispatcher>,
    headers: HeaderMap,
    body: Result<Json<ToolCall>, JsonRejection>,
) -> Response {
    let Json(call) = match body {
        Ok(call) => call,
        Err(rejection) => {
            debug!(error = %rejection.body_text(), "Rejected tool call envelope");
            let result = ToolCallResult::error(format!(
                "invalid request: {}",
                rejection.body_text()
            ));
            return (rejection.status(), Json(result.to_json())).into_response();
        }
    };

    let result = dispatcher.dispatch(&call, &metadata_from(&headers)).await;
    (StatusCode::OK, Json(result.to_json())).into_response()
}

async fn list_tools(State(dispatcher): State<SharedDispatcher>) -> Json<Vec<ToolDefinition>> {
    Json(
        dispatcher
            .tool_spec()
            .sorted()
            .into_iter()
            .cloned()
            .collect(),
    )
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok"}))
}
