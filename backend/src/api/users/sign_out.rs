use tracing::info;

use crate::config::AppwriteConfig;
use crate::db_utils::appwrite_utils::AppwriteClient;

pub async fn sign_out(config: &AppwriteConfig, session_secret: &str) -> anyhow::Result<()> {
    let client = AppwriteClient::session(config.clone(), session_secret);
    client.delete("/account/sessions/current").await?;
    info!("sign_out: current session deleted");
    Ok(())
}
