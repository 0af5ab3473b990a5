//! Resolve the signed-in user from the request's session.

use common::file_document::UserProfile;
use tracing::{error, info};

use crate::config::AppwriteConfig;
use crate::db_utils::appwrite_models::{DocumentList, RawAccount, RawUserDocument};
use crate::db_utils::appwrite_query;
use crate::db_utils::appwrite_utils::AppwriteClient;

async fn find_user(admin: &AppwriteClient, attribute: &str, value: &str) -> anyhow::Result<Option<UserProfile>> {
    let queries = vec![appwrite_query::equal(attribute, [value]).to_string()];
    let users: DocumentList<RawUserDocument> =
        admin.get_json(&admin.config.users_documents_path(), &queries).await?;
    Ok(users.documents.into_iter().next().map(UserProfile::from))
}

pub async fn find_user_by_account(admin: &AppwriteClient, account_id: &str) -> anyhow::Result<Option<UserProfile>> {
    find_user(admin, "accountId", account_id).await
}

pub async fn find_user_by_email(admin: &AppwriteClient, email: &str) -> anyhow::Result<Option<UserProfile>> {
    find_user(admin, "email", email).await
}

async fn lookup_current_user(config: &AppwriteConfig, session_secret: &str) -> anyhow::Result<Option<UserProfile>> {
    let session_client = AppwriteClient::session(config.clone(), session_secret);
    let Some(account) = session_client.get_json_optional::<RawAccount>("/account").await? else {
        return Ok(None);
    };
    let admin = AppwriteClient::admin(config.clone());
    find_user_by_account(&admin, &account.id).await
}

/// The user owning `session_secret`, or `None` when signed out.
///
/// Backend failures are logged and reported as signed out, so the dashboard
/// falls back to the sign-in page instead of an error screen.
pub async fn get_current_user(config: &AppwriteConfig, session_secret: Option<String>) -> anyhow::Result<Option<UserProfile>> {
    let Some(session_secret) = session_secret else {
        return Ok(None);
    };
    match lookup_current_user(config, &session_secret).await {
        Ok(user) => {
            info!("get_current_user: found = {}", user.is_some());
            Ok(user)
        }
        Err(e) => {
            error!("get_current_user: request failed: {:#?}", e);
            Ok(None)
        }
    }
}

pub async fn require_current_user(config: &AppwriteConfig, session_secret: Option<String>) -> anyhow::Result<UserProfile> {
    match get_current_user(config, session_secret).await? {
        Some(user) => Ok(user),
        None => anyhow::bail!("User not found"),
    }
}
