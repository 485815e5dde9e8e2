//! Health check.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use catalog_core::ItemId;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub items: usize,

    /// Highest id handed out so far; `null` before the first create.
    pub last_id: Option<ItemId>,
}

/// Reports that the server is up, how many items it holds and how far the
/// id sequence has advanced.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        items: state.store.len(),
        last_id: state.store.last_assigned_id(),
    })
}
