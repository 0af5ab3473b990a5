//! Listing endpoint for the current user's files.

use common::{file_document::FileDocument, file_query::GetFilesRequest};
use tracing::info;

use crate::api::files::files_query::build_file_queries;
use crate::api::users::require_current_user;
use crate::config::AppwriteConfig;
use crate::db_utils::appwrite_models::{DocumentList, RawFileDocument};
use crate::db_utils::appwrite_utils::AppwriteClient;

pub async fn get_files(config: &AppwriteConfig, session_secret: Option<String>, request: GetFilesRequest) -> anyhow::Result<Vec<FileDocument>> {
    let user = require_current_user(config, session_secret).await?;
    let queries = build_file_queries(&user, &request);

    let admin = AppwriteClient::admin(config.clone());
    let files: DocumentList<RawFileDocument> = admin.get_json(&config.files_documents_path(), &queries).await?;
    info!("get_files: {:?} -> {} of {} files", request.search_text, files.documents.len(), files.total);

    Ok(files.documents.into_iter().map(FileDocument::from).collect())
}

#[cfg(test)]
#[path = "get_files_test.rs"]
mod tests;
