//! Client API calls for file listing and file actions.

use common::{file_document::FileDocument, file_query::GetFilesRequest};
use dioxus::prelude::*;

#[server]
pub async fn get_files(input: GetFilesRequest) -> Result<Vec<FileDocument>, ServerFnError> {
    let config = backend::config::AppwriteConfig::from_env();
    let session = crate::api::request_session_secret().await?;
    let x = backend::api::files::get_files(&config, session, input).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn rename_file(file_id: String, name: String, extension: String) -> Result<FileDocument, ServerFnError> {
    let config = backend::config::AppwriteConfig::from_env();
    let session = crate::api::request_session_secret().await?;
    let x = backend::api::files::rename_file(&config, session, &file_id, &name, &extension).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn update_file_users(file_id: String, emails: Vec<String>) -> Result<FileDocument, ServerFnError> {
    let config = backend::config::AppwriteConfig::from_env();
    let session = crate::api::request_session_secret().await?;
    let x = backend::api::files::update_file_users(&config, session, &file_id, &emails).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn delete_file(file_id: String, bucket_file_id: String) -> Result<(), ServerFnError> {
    let config = backend::config::AppwriteConfig::from_env();
    let session = crate::api::request_session_secret().await?;
    let x = backend::api::files::delete_file(&config, session, &file_id, &bucket_file_id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
