//! Session cookie handling
//!
//! A learner's identity is a single UUID carried in the `lumen_session`
//! cookie. The front page mints it on first visit; every other endpoint only
//! reads it back. Nothing else identifies the client, so the session id
//! doubles as the learner id in the progress store.

use axum::http::HeaderMap;

/// Cookie carrying the session id
pub const SESSION_COOKIE: &str = "lumen_session";

/// Mint a fresh session id
pub fn new_session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Extract the session id from the request's Cookie header, if present
pub fn session_id(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get("cookie")?.to_str().ok()?;
    for cookie in cookies.split(';') {
        let cookie = cookie.trim();
        if let Some(value) = cookie.strip_prefix(&format!("{}=", SESSION_COOKIE)) {
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// Set-Cookie value that establishes the session
pub fn session_cookie(id: &str) -> String {
    format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax")
}
