use common::file_document::FileDocument;
use serde_json::json;
use tracing::info;

use crate::api::files::files_query::renamed_file_name;
use crate::api::files::{FileAccess, require_file_access};
use crate::api::users::require_current_user;
use crate::config::AppwriteConfig;
use crate::db_utils::appwrite_models::RawFileDocument;
use crate::db_utils::appwrite_utils::AppwriteClient;

pub async fn rename_file(
    config: &AppwriteConfig,
    session_secret: Option<String>,
    file_id: &str,
    name: &str,
    extension: &str,
) -> anyhow::Result<FileDocument> {
    let user = require_current_user(config, session_secret).await?;
    let new_name = renamed_file_name(name, extension);
    if new_name.is_empty() || new_name.starts_with('.') {
        anyhow::bail!("File name cannot be empty");
    }

    let admin = AppwriteClient::admin(config.clone());
    require_file_access(&admin, &user, file_id, FileAccess::Edit).await?;
    let path = format!("{}/{}", config.files_documents_path(), file_id);
    let updated: RawFileDocument = admin.patch_json(&path, &json!({ "data": { "name": new_name } })).await?;
    info!("rename_file: {} -> {}", file_id, updated.name);
    Ok(updated.into())
}
