//! Where the caller's storage session comes from.
//!
//! The session secret lives in an http-only cookie. Server functions read it
//! from the headers of the request they are serving and pass it down to the
//! `api` actions explicitly.

use axum::http::HeaderMap;
use axum_extra::extract::cookie::CookieJar;

pub const SESSION_COOKIE: &str = "appwrite-session";

pub fn session_secret_from_jar(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

/// Session secret carried by a request's `Cookie` headers, if any.
pub fn session_secret_from_headers(headers: &HeaderMap) -> Option<String> {
    session_secret_from_jar(&CookieJar::from_headers(headers))
}
