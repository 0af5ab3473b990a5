//! Client API calls for the signed-in user.

use common::file_document::UserProfile;
use dioxus::prelude::*;

#[server]
pub async fn get_current_user() -> Result<Option<UserProfile>, ServerFnError> {
    let config = backend::config::AppwriteConfig::from_env();
    let session = crate::api::request_session_secret().await?;
    let x = backend::api::users::get_current_user(&config, session).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
