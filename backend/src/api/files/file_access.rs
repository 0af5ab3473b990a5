use common::file_document::{FileDocument, UserProfile};
use tracing::warn;

use crate::api::files::files_query::{is_file_owner, is_shared_with};
use crate::db_utils::appwrite_models::RawFileDocument;
use crate::db_utils::appwrite_utils::AppwriteClient;

/// What a caller wants to do with a file they did not necessarily upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAccess {
    /// Rename or change who it is shared with.
    Edit,
    Delete,
}

impl FileAccess {
    pub fn allows(&self, file: &FileDocument, user: &UserProfile) -> bool {
        match self {
            FileAccess::Edit => is_file_owner(file, user) || is_shared_with(file, user),
            FileAccess::Delete => is_file_owner(file, user),
        }
    }
}

/// Load `file_id` and fail unless `user` may perform `access` on it.
pub async fn require_file_access(
    admin: &AppwriteClient,
    user: &UserProfile,
    file_id: &str,
    access: FileAccess,
) -> anyhow::Result<FileDocument> {
    let path = format!("{}/{}", admin.config.files_documents_path(), file_id);
    let file: FileDocument = match admin.get_json_optional::<RawFileDocument>(&path).await? {
        Some(raw) => raw.into(),
        None => anyhow::bail!("File not found"),
    };
    if !access.allows(&file, user) {
        warn!("require_file_access: user {} denied {:?} on {}", user.id, access, file_id);
        anyhow::bail!("You do not have access to this file");
    }
    Ok(file)
}
