//! Email one-time-code sign in.

use serde_json::json;
use tracing::info;

use crate::config::AppwriteConfig;
use crate::db_utils::appwrite_models::{RawSession, RawToken, RawUserDocument};
use crate::db_utils::appwrite_utils::AppwriteClient;

use super::find_user_by_email;

pub const DEFAULT_AVATAR: &str = "https://img.freepik.com/free-psd/3d-illustration-person-with-sunglasses_23-2149436188.jpg";

fn default_full_name(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}

/// Send a one-time code to `email` and return the account id the code belongs to.
///
/// A user document is created on first sign in.
pub async fn send_email_otp(config: &AppwriteConfig, email: &str, full_name: Option<&str>) -> anyhow::Result<String> {
    let email = email.trim();
    if email.is_empty() {
        anyhow::bail!("Email is required");
    }
    let admin = AppwriteClient::admin(config.clone());
    let token: RawToken = admin
        .post_json("/account/tokens/email", &json!({ "userId": "unique()", "email": email }))
        .await?;
    info!("send_email_otp: token sent for account {}", token.user_id);

    if find_user_by_email(&admin, email).await?.is_none() {
        let full_name = full_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| default_full_name(email));
        let _created: RawUserDocument = admin
            .post_json(
                &config.users_documents_path(),
                &json!({
                    "documentId": "unique()",
                    "data": {
                        "fullName": full_name,
                        "email": email,
                        "avatar": DEFAULT_AVATAR,
                        "accountId": token.user_id,
                    },
                }),
            )
            .await?;
        info!("send_email_otp: created user document for account {}", token.user_id);
    }
    Ok(token.user_id)
}

/// Exchange a one-time code for a session, returning the session secret.
pub async fn create_session(config: &AppwriteConfig, account_id: &str, secret: &str) -> anyhow::Result<String> {
    let admin = AppwriteClient::admin(config.clone());
    let session: RawSession = admin
        .post_json("/account/sessions/token", &json!({ "userId": account_id, "secret": secret.trim() }))
        .await?;
    if session.secret.is_empty() {
        anyhow::bail!("Session {} was created without a secret", session.id);
    }
    info!("create_session: session {} created", session.id);
    Ok(session.secret)
}
