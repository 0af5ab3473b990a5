use tracing::info;

use crate::api::files::{FileAccess, require_file_access};
use crate::api::users::require_current_user;
use crate::config::AppwriteConfig;
use crate::db_utils::appwrite_utils::AppwriteClient;

/// Delete the file document, then its stored blob. Only the owner may delete.
pub async fn delete_file(
    config: &AppwriteConfig,
    session_secret: Option<String>,
    file_id: &str,
    bucket_file_id: &str,
) -> anyhow::Result<()> {
    let user = require_current_user(config, session_secret).await?;

    let admin = AppwriteClient::admin(config.clone());
    require_file_access(&admin, &user, file_id, FileAccess::Delete).await?;
    admin.delete(&format!("{}/{}", config.files_documents_path(), file_id)).await?;
    if !bucket_file_id.is_empty() {
        admin.delete(&config.bucket_file_path(bucket_file_id)).await?;
    }
    info!("delete_file: {} deleted", file_id);
    Ok(())
}
