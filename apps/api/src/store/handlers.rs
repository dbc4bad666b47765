//! Axum route handlers for reading the example store.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::models::example::Example;
use crate::state::AppState;

const DEFAULT_LIMIT: usize = 3;
const MAX_LIMIT: usize = 100;

#[derive(Debug, Deserialize)]
pub struct ListExamplesQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ListExamplesResponse {
    pub content_type: String,
    pub examples: Vec<Example>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub categories: BTreeMap<String, usize>,
    pub total: usize,
}

/// GET /api/v1/examples/stats
pub async fn handle_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let categories = state.service.lock().await.store().stats();
    let total = categories.values().sum();
    Json(StatsResponse { categories, total })
}

/// GET /api/v1/examples/:content_type?limit=n
///
/// First `n` examples in stored order. Unknown categories return an empty list.
pub async fn handle_list_examples(
    State(state): State<AppState>,
    Path(content_type): Path<String>,
    Query(query): Query<ListExamplesQuery>,
) -> Json<ListExamplesResponse> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    let examples = state
        .service
        .lock()
        .await
        .store()
        .find(&content_type, limit)
        .to_vec();

    Json(ListExamplesResponse {
        content_type,
        examples,
    })
}
