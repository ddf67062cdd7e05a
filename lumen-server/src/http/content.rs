//! Reference content handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /get_concepts/:topic - Concept definitions for one topic
pub async fn get_concepts(
    State(state): State<Arc<AppState>>,
    Path(topic): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let concepts = state.content.concepts(&topic).await?;
    Ok(Json(concepts))
}

/// GET /get_scientists - The notable-scientists reference data
pub async fn get_scientists(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    Ok(Json(state.content.scientists().await?))
}
