//! Embedded learner-facing pages
//!
//! The small front-end ships inside the binary. The landing page is also
//! where sessions begin: serving it mints the session cookie when the
//! request does not already carry one.

use axum::{
    body::Body,
    extract::Path,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

use crate::session;

/// Embedded front-end assets (compiled into binary)
#[derive(RustEmbed)]
#[folder = "assets/"]
struct Assets;

/// GET / - The landing page
///
/// Issues the session cookie on first visit; every other endpoint only
/// reads it back.
pub async fn index(headers: HeaderMap) -> Response {
    let mut response = serve_page("index.html");
    if session::session_id(&headers).is_none() {
        let id = session::new_session_id();
        if let Ok(value) = header::HeaderValue::from_str(&session::session_cookie(&id)) {
            response.headers_mut().append(header::SET_COOKIE, value);
            tracing::debug!(session = %id, "issued new session");
        }
    }
    response
}

/// GET /:page - A topic page by bare name (`/motion` serves `motion.html`)
pub async fn topic_page(Path(page): Path<String>) -> Response {
    serve_page(&format!("{page}.html"))
}

/// GET /static/*path - Stylesheets and scripts referenced by the pages
pub async fn static_asset(Path(path): Path<String>) -> Response {
    match serve_file(path.trim_start_matches('/')) {
        Some(response) => response,
        None => (StatusCode::NOT_FOUND, "asset not found").into_response(),
    }
}

fn serve_page(name: &str) -> Response {
    match serve_file(name) {
        Some(response) => response,
        None => (StatusCode::NOT_FOUND, "page not found").into_response(),
    }
}

/// Serve a file from embedded assets
fn serve_file(path: &str) -> Option<Response> {
    let file = Assets::get(path)?;

    // Determine content type from file extension
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime.as_ref())
        .body(Body::from(file.data.into_owned()))
        .ok()
}
