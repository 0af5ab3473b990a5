//! Server functions wrapping backend actions.

pub mod file_api;
pub mod user_api;

/// Session secret from the cookie of the request a server function is serving.
#[cfg(feature = "server")]
pub(crate) async fn request_session_secret() -> Result<Option<String>, dioxus::prelude::ServerFnError> {
    use dioxus::fullstack::FullstackContext;
    use dioxus::server::axum::http::HeaderMap;

    let headers: HeaderMap = FullstackContext::extract().await.map_err(|e| dioxus::prelude::ServerFnError::ServerError {
        message: format!("could not read request headers: {e}"),
        code: 500,
        details: None,
    })?;
    Ok(backend::session::session_secret_from_headers(&headers))
}
