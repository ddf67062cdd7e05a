//! HTTP server module

mod api;
mod content;
mod pages;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::AppState;

pub use api::{HealthResponse, LEADERBOARD_LIMIT, SaveUserResponse, UpdateProgressResponse};

/// Create the HTTP router with all routes configured
///
/// Static segments win over the `/:page` catch-all, so the API endpoints
/// keep their bare paths and anything else one segment deep is treated as a
/// topic page.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/health", get(api::health))
        .route("/save_user", post(api::save_user))
        .route("/get_user_data", get(api::get_user_data))
        .route("/update_progress", post(api::update_progress))
        .route("/get_leaderboard", get(api::get_leaderboard))
        .route("/get_concepts/:topic", get(content::get_concepts))
        .route("/get_scientists", get(content::get_scientists))
        .route("/static/*path", get(pages::static_asset))
        .route("/:page", get(pages::topic_page))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
