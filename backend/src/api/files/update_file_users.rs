use common::file_document::FileDocument;
use serde_json::json;
use tracing::info;

use crate::api::files::files_query::normalize_emails;
use crate::api::files::{FileAccess, require_file_access};
use crate::api::users::require_current_user;
use crate::config::AppwriteConfig;
use crate::db_utils::appwrite_models::RawFileDocument;
use crate::db_utils::appwrite_utils::AppwriteClient;

/// Replace the list of emails `file_id` is shared with.
pub async fn update_file_users(
    config: &AppwriteConfig,
    session_secret: Option<String>,
    file_id: &str,
    emails: &[String],
) -> anyhow::Result<FileDocument> {
    let user = require_current_user(config, session_secret).await?;
    let emails = normalize_emails(emails);

    let admin = AppwriteClient::admin(config.clone());
    require_file_access(&admin, &user, file_id, FileAccess::Edit).await?;
    let path = format!("{}/{}", config.files_documents_path(), file_id);
    let updated: RawFileDocument = admin.patch_json(&path, &json!({ "data": { "users": emails } })).await?;
    info!("update_file_users: {} now shared with {} users", file_id, updated.users.len());
    Ok(updated.into())
}
