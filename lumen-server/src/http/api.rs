//! REST API handlers for learner progress

use std::sync::Arc;

use axum::{Json, extract::State, http::HeaderMap};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use lumen_core::{DEFAULT_SCORE_DELTA, Profile, RankedEntry};

use crate::error::ApiError;
use crate::session;
use crate::state::AppState;

/// Maximum rows a leaderboard response carries
pub const LEADERBOARD_LIMIT: usize = 10;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the server
    pub status: String,
    /// Server version
    pub version: String,
    /// Seconds since server started
    pub uptime_seconds: i64,
    /// Number of registered learners
    pub learners: usize,
}

/// Health check endpoint
///
/// Returns server status, version, uptime, and learner count.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let learners = state.store.learner_count().await;

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        learners,
    })
}

/// Request body for POST /save_user
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveUserRequest {
    /// Display name; required
    pub name: Option<String>,
    /// Grade level; any JSON value, kept as given
    #[serde(default)]
    pub grade: Value,
}

/// Response for POST /save_user
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveUserResponse {
    /// Always "success"
    pub status: String,
    /// The learner id, equal to the session id
    pub user_id: String,
}

/// POST /save_user - Register the session's learner profile
///
/// Registering again under the same session starts the learner over.
pub async fn save_user(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<SaveUserRequest>,
) -> Result<Json<SaveUserResponse>, ApiError> {
    let session = session::session_id(&headers).ok_or_else(|| {
        ApiError::InvalidInput("no session cookie; load the front page first".to_string())
    })?;
    let name = request
        .name
        .ok_or_else(|| ApiError::InvalidInput("name is required".to_string()))?;

    let profile = state.store.register(&session, &name, request.grade).await?;

    Ok(Json(SaveUserResponse {
        status: "success".to_string(),
        user_id: profile.id,
    }))
}

/// GET /get_user_data - The session's full profile
pub async fn get_user_data(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Profile>, ApiError> {
    let session = session::session_id(&headers)
        .ok_or_else(|| ApiError::NotFound("no learner for this session".to_string()))?;
    let profile = state.store.profile(&session).await?;
    Ok(Json(profile))
}

/// Request body for POST /update_progress
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateProgressRequest {
    /// Topic the completion happened in; required
    pub topic: Option<String>,
    /// Points the completion is worth; defaults when absent
    pub score: Option<u64>,
}

/// Response for POST /update_progress
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateProgressResponse {
    /// Always "success"
    pub status: String,
    /// The learner's total score after the event
    pub new_total_score: u64,
}

/// POST /update_progress - Record one completion event for the session
///
/// Once a topic is fully complete further events for it change nothing and
/// still answer with the (unchanged) total.
pub async fn update_progress(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<UpdateProgressRequest>,
) -> Result<Json<UpdateProgressResponse>, ApiError> {
    let session = session::session_id(&headers)
        .ok_or_else(|| ApiError::NotFound("no learner for this session".to_string()))?;
    let topic = request
        .topic
        .ok_or_else(|| ApiError::InvalidInput("topic is required".to_string()))?;
    let delta = request.score.unwrap_or(DEFAULT_SCORE_DELTA);

    let new_total_score = state
        .store
        .record_progress(&session, &topic, delta)
        .await?;

    Ok(Json(UpdateProgressResponse {
        status: "success".to_string(),
        new_total_score,
    }))
}

/// GET /get_leaderboard - Top learners, highest score first
pub async fn get_leaderboard(State(state): State<Arc<AppState>>) -> Json<Vec<RankedEntry>> {
    Json(state.store.top(LEADERBOARD_LIMIT).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderName, HeaderValue};
    use axum_test::TestServer;
    use serde_json::json;

    use crate::http::create_router;

    fn create_test_server() -> TestServer {
        let state = Arc::new(AppState::in_memory("content"));
        TestServer::new(create_router(state)).unwrap()
    }

    fn cookie(session: &str) -> (HeaderName, HeaderValue) {
        (
            HeaderName::from_static("cookie"),
            HeaderValue::from_str(&format!("lumen_session={session}")).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let server = create_test_server();

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body: HealthResponse = response.json();
        assert_eq!(body.status, "ok");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert!(body.uptime_seconds >= 0);
        assert_eq!(body.learners, 0);
    }

    #[tokio::test]
    async fn test_save_user_registers_profile() {
        let server = create_test_server();
        let (name, value) = cookie("sess-1");

        let response = server
            .post("/save_user")
            .add_header(name, value)
            .json(&json!({"name": "Ava", "grade": 7}))
            .await;
        response.assert_status_ok();

        let body: SaveUserResponse = response.json();
        assert_eq!(body.status, "success");
        assert_eq!(body.user_id, "sess-1");
    }

    #[tokio::test]
    async fn test_save_user_without_session_is_bad_request() {
        let server = create_test_server();

        let response = server
            .post("/save_user")
            .json(&json!({"name": "Ava", "grade": 7}))
            .await;
        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_save_user_requires_name() {
        let server = create_test_server();
        let (name, value) = cookie("sess-1");

        let response = server
            .post("/save_user")
            .add_header(name, value)
            .json(&json!({"grade": 7}))
            .await;
        response.assert_status(axum::http::StatusCode::BAD_REQUEST);

        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "error");
        assert!(body["message"].as_str().unwrap().contains("name"));
    }

    #[tokio::test]
    async fn test_save_user_accepts_missing_grade() {
        let server = create_test_server();
        let (name, value) = cookie("sess-1");

        let response = server
            .post("/save_user")
            .add_header(name, value)
            .json(&json!({"name": "Ava"}))
            .await;
        response.assert_status_ok();
    }

    #[tokio::test]
    async fn test_get_user_data_round_trip() {
        let server = create_test_server();

        let (name, value) = cookie("sess-1");
        server
            .post("/save_user")
            .add_header(name, value)
            .json(&json!({"name": "Ava", "grade": 7}))
            .await
            .assert_status_ok();

        let (name, value) = cookie("sess-1");
        let response = server.get("/get_user_data").add_header(name, value).await;
        response.assert_status_ok();

        let profile: Profile = response.json();
        assert_eq!(profile.name, "Ava");
        assert_eq!(profile.grade, json!(7));
        assert_eq!(profile.total_score, 0);
        assert_eq!(profile.progress.len(), 5);
    }

    #[tokio::test]
    async fn test_get_user_data_unknown_session_is_not_found() {
        let server = create_test_server();

        let response = server.get("/get_user_data").await;
        response.assert_status(axum::http::StatusCode::NOT_FOUND);

        let (name, value) = cookie("ghost");
        let response = server.get("/get_user_data").add_header(name, value).await;
        response.assert_status(axum::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_progress_default_and_explicit_score() {
        let server = create_test_server();

        let (name, value) = cookie("sess-1");
        server
            .post("/save_user")
            .add_header(name, value)
            .json(&json!({"name": "Ava", "grade": 7}))
            .await
            .assert_status_ok();

        // Default score.
        let (name, value) = cookie("sess-1");
        let response = server
            .post("/update_progress")
            .add_header(name, value)
            .json(&json!({"topic": "motion"}))
            .await;
        response.assert_status_ok();
        let body: UpdateProgressResponse = response.json();
        assert_eq!(body.new_total_score, 10);

        // Explicit score adds on top.
        let (name, value) = cookie("sess-1");
        let response = server
            .post("/update_progress")
            .add_header(name, value)
            .json(&json!({"topic": "energy", "score": 25}))
            .await;
        let body: UpdateProgressResponse = response.json();
        assert_eq!(body.new_total_score, 35);
    }

    #[tokio::test]
    async fn test_update_progress_without_registration_is_not_found() {
        let server = create_test_server();

        let (name, value) = cookie("ghost");
        let response = server
            .post("/update_progress")
            .add_header(name, value)
            .json(&json!({"topic": "motion"}))
            .await;
        response.assert_status(axum::http::StatusCode::NOT_FOUND);

        let response = server
            .post("/update_progress")
            .json(&json!({"topic": "motion"}))
            .await;
        response.assert_status(axum::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_progress_requires_topic() {
        let server = create_test_server();

        let (name, value) = cookie("sess-1");
        server
            .post("/save_user")
            .add_header(name, value)
            .json(&json!({"name": "Ava", "grade": 7}))
            .await
            .assert_status_ok();

        let (name, value) = cookie("sess-1");
        let response = server
            .post("/update_progress")
            .add_header(name, value)
            .json(&json!({"score": 5}))
            .await;
        response.assert_status(axum::http::StatusCode::BAD_REQUEST);

        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "error");
        assert!(body["message"].as_str().unwrap().contains("topic"));
    }

    #[tokio::test]
    async fn test_update_progress_survives_extreme_scores() {
        let server = create_test_server();

        let (name, value) = cookie("sess-1");
        server
            .post("/save_user")
            .add_header(name, value)
            .json(&json!({"name": "Ava", "grade": 7}))
            .await
            .assert_status_ok();

        let (name, value) = cookie("sess-1");
        server
            .post("/update_progress")
            .add_header(name, value)
            .json(&json!({"topic": "motion", "score": u64::MAX}))
            .await
            .assert_status_ok();

        // A follow-up event must answer normally, with the total pinned at
        // the cap rather than wrapped around zero.
        let (name, value) = cookie("sess-1");
        let response = server
            .post("/update_progress")
            .add_header(name, value)
            .json(&json!({"topic": "energy"}))
            .await;
        response.assert_status_ok();

        let body: UpdateProgressResponse = response.json();
        assert_eq!(body.new_total_score, u64::MAX);
    }

    #[tokio::test]
    async fn test_update_progress_unknown_topic_is_not_found() {
        let server = create_test_server();

        let (name, value) = cookie("sess-1");
        server
            .post("/save_user")
            .add_header(name, value)
            .json(&json!({"name": "Ava", "grade": 7}))
            .await
            .assert_status_ok();

        let (name, value) = cookie("sess-1");
        let response = server
            .post("/update_progress")
            .add_header(name, value)
            .json(&json!({"topic": "astronomy"}))
            .await;
        response.assert_status(axum::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_leaderboard_orders_and_joins_names() {
        let server = create_test_server();

        for (session, learner, score) in [("a", "Ava", 10), ("b", "Ben", 30)] {
            let (name, value) = cookie(session);
            server
                .post("/save_user")
                .add_header(name, value)
                .json(&json!({"name": learner, "grade": 7}))
                .await
                .assert_status_ok();

            let (name, value) = cookie(session);
            server
                .post("/update_progress")
                .add_header(name, value)
                .json(&json!({"topic": "motion", "score": score}))
                .await
                .assert_status_ok();
        }

        let response = server.get("/get_leaderboard").await;
        response.assert_status_ok();

        let board: Vec<RankedEntry> = response.json();
        assert_eq!(board.len(), 2);
        assert_eq!(board[0].name, "Ben");
        assert_eq!(board[0].score, 30);
        assert_eq!(board[1].name, "Ava");
        assert_eq!(board[1].score, 10);
    }

    #[tokio::test]
    async fn test_leaderboard_is_capped_at_ten() {
        let server = create_test_server();

        for i in 0..12 {
            let session = format!("sess-{i}");
            let (name, value) = cookie(&session);
            server
                .post("/save_user")
                .add_header(name, value)
                .json(&json!({"name": format!("Learner {i}"), "grade": 7}))
                .await
                .assert_status_ok();

            let (name, value) = cookie(&session);
            server
                .post("/update_progress")
                .add_header(name, value)
                .json(&json!({"topic": "motion", "score": i}))
                .await
                .assert_status_ok();
        }

        let response = server.get("/get_leaderboard").await;
        let board: Vec<RankedEntry> = response.json();
        assert_eq!(board.len(), LEADERBOARD_LIMIT);
        assert_eq!(board[0].score, 11);
    }
}
