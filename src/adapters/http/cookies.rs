//! Session cookie plumbing.
//!
//! Sessions ride in an HttpOnly cookie holding the opaque store token;
//! there is nothing to sign since the token itself is random and resolved
//! server-side.

use axum::http::{header::COOKIE, HeaderMap};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "gateway_sid";

/// Build the Set-Cookie value for a fresh session.
pub fn session_cookie(token: &str, max_age_secs: u64) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE, token, max_age_secs
    )
}

/// Build the Set-Cookie value that clears the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", SESSION_COOKIE)
}

/// Extract the session token from the request's Cookie headers.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    for value in headers.get_all(COOKIE) {
        let Ok(raw) = value.to_str() else { continue };
        for pair in raw.split(';') {
            let pair = pair.trim();
            if let Some((name, token)) = pair.split_once('=') {
                if name == SESSION_COOKIE && !token.is_empty() {
                    return Some(token.to_string());
                }
            }
        }
    }
    None
}
